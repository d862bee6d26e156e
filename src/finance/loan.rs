//! Loan EMI and amortization schedule

use serde::Serialize;

use super::{compound_growth, require_positive, require_term};
use crate::error::FintrackResult;

/// One month of an amortization schedule
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AmortizationRow {
    /// 1-based month number
    pub month: u32,
    pub payment: f64,
    pub principal: f64,
    pub interest: f64,
    /// Outstanding balance after this payment, never below zero
    pub balance: f64,
}

/// Totals for one year of a schedule
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct YearSummary {
    pub year: u32,
    pub principal_paid: f64,
    pub interest_paid: f64,
    pub closing_balance: f64,
}

/// A fully computed loan
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoanSchedule {
    pub principal: f64,
    pub annual_rate: f64,
    pub years: u32,
    /// Equated monthly installment
    pub emi: f64,
    pub total_payment: f64,
    pub total_interest: f64,
    pub rows: Vec<AmortizationRow>,
}

/// Equated monthly installment for a fixed-rate loan
///
/// `annual_rate` is a percentage, e.g. `8.5`.
pub fn monthly_payment(principal: f64, annual_rate: f64, years: u32) -> FintrackResult<f64> {
    validate(principal, annual_rate, years)?;

    let r = annual_rate / 12.0 / 100.0;
    let growth = compound_growth("Interest rate", r, years * 12)?;
    Ok(principal * r * growth / (growth - 1.0))
}

/// Build the full month-by-month schedule
pub fn amortize(principal: f64, annual_rate: f64, years: u32) -> FintrackResult<LoanSchedule> {
    let emi = monthly_payment(principal, annual_rate, years)?;
    let r = annual_rate / 12.0 / 100.0;
    let n = years * 12;

    let mut remaining = principal;
    let rows = (1..=n)
        .map(|month| {
            let interest = remaining * r;
            let principal_part = emi - interest;
            remaining -= principal_part;
            AmortizationRow {
                month,
                payment: emi,
                principal: principal_part,
                interest,
                balance: remaining.max(0.0),
            }
        })
        .collect();

    let total_payment = emi * f64::from(n);
    Ok(LoanSchedule {
        principal,
        annual_rate,
        years,
        emi,
        total_payment,
        total_interest: total_payment - principal,
        rows,
    })
}

impl LoanSchedule {
    /// Principal and interest paid per year, with the balance at year end
    pub fn yearly_summary(&self) -> Vec<YearSummary> {
        self.rows
            .chunks(12)
            .zip(1..)
            .map(|(months, year)| YearSummary {
                year,
                principal_paid: months.iter().map(|m| m.principal).sum(),
                interest_paid: months.iter().map(|m| m.interest).sum(),
                closing_balance: months.last().map(|m| m.balance).unwrap_or(0.0),
            })
            .collect()
    }
}

fn validate(principal: f64, annual_rate: f64, years: u32) -> FintrackResult<()> {
    require_positive("Loan amount", principal)?;
    require_positive("Interest rate", annual_rate)?;
    require_term("Loan term", years)
}
