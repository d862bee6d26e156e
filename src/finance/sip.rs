//! Systematic investment plan projection

use serde::Serialize;

use super::{compound_growth, require_positive, require_term};
use crate::error::FintrackResult;

/// Projected outcome of a monthly investment plan
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SipProjection {
    pub monthly_investment: f64,
    pub years: u32,
    pub annual_return: f64,
    pub invested: f64,
    pub future_value: f64,
    /// `future_value - invested`
    pub returns: f64,
}

/// Value of the plan at the end of a given year
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SipPoint {
    pub year: u32,
    pub invested: f64,
    pub value: f64,
    pub returns: f64,
}

/// Future value of `monthly_investment` paid at the start of each month
///
/// `annual_return` is a percentage, e.g. `12.0`.
pub fn project(monthly_investment: f64, years: u32, annual_return: f64) -> FintrackResult<SipProjection> {
    require_positive("Monthly investment", monthly_investment)?;
    require_term("Investment period", years)?;
    require_positive("Expected return", annual_return)?;
    compound_growth("Expected return", annual_return / 12.0 / 100.0, years * 12)?;

    let (invested, future_value) = evaluate(monthly_investment, years, annual_return);
    Ok(SipProjection {
        monthly_investment,
        years,
        annual_return,
        invested,
        future_value,
        returns: future_value - invested,
    })
}

/// Value at the end of every year of the plan
pub fn yearly_series(projection: &SipProjection) -> Vec<SipPoint> {
    (1..=projection.years)
        .map(|year| {
            let (invested, value) =
                evaluate(projection.monthly_investment, year, projection.annual_return);
            SipPoint {
                year,
                invested,
                value,
                returns: value - invested,
            }
        })
        .collect()
}

fn evaluate(monthly_investment: f64, years: u32, annual_return: f64) -> (f64, f64) {
    let r = annual_return / 12.0 / 100.0;
    let months = years * 12;
    let value = monthly_investment * (((1.0 + r).powi(months as i32) - 1.0) / r) * (1.0 + r);
    (monthly_investment * f64::from(months), value)
}
