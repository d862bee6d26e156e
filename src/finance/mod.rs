//! Financial formula library
//!
//! Pure functions over plain numbers and store snapshots: loan amortization,
//! SIP projection, currency conversion and transaction/budget aggregation,
//! plus the static holdings tables behind the account and investment reports.
//! Nothing here touches the store or the filesystem.

pub mod aggregate;
pub mod currency;
pub mod holdings;
pub mod loan;
pub mod sip;

pub use aggregate::{budget_status, sum_amounts, BudgetStatus, TransactionFilter};
pub use currency::{convert, currency_info, rate, CurrencyInfo, CURRENCIES};
pub use loan::{amortize, monthly_payment, AmortizationRow, LoanSchedule, YearSummary};
pub use sip::{project, yearly_series, SipPoint, SipProjection};

use crate::error::{FintrackError, FintrackResult};

/// Longest term accepted by the loan and SIP calculators
pub const MAX_YEARS: u32 = 30;

/// Reject zero, negative and non-finite calculator inputs
fn require_positive(name: &str, value: f64) -> FintrackResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(FintrackError::Validation(format!(
            "{} must be greater than zero (got {})",
            name, value
        )))
    }
}

fn require_term(name: &str, years: u32) -> FintrackResult<()> {
    if (1..=MAX_YEARS).contains(&years) {
        Ok(())
    } else {
        Err(FintrackError::Validation(format!(
            "{} must be between 1 and {} years (got {})",
            name, MAX_YEARS, years
        )))
    }
}

/// Compound growth factor `(1 + r)^months` for a monthly rate
///
/// Fails when the factor is indistinguishable from 1 or not finite, where the
/// closed-form annuity formulas divide by zero.
fn compound_growth(name: &str, monthly_rate: f64, months: u32) -> FintrackResult<f64> {
    let growth = (1.0 + monthly_rate).powi(months as i32);
    if growth.is_finite() && growth - 1.0 > 0.0 {
        Ok(growth)
    } else {
        Err(FintrackError::Validation(format!(
            "{} is outside the range the calculator can evaluate",
            name
        )))
    }
}
