//! CLI command handlers
//!
//! Each subcommand group parses its arguments with clap, turns them into
//! store actions or report requests, and prints the result. Handlers never
//! touch state directly; every change goes through `Store::dispatch`.

pub mod budget;
pub mod calc;
pub mod currency;
pub mod export;
pub mod log;
pub mod report;
pub mod transaction;

use chrono::NaiveDate;

pub use budget::{handle_budget_command, BudgetCommands};
pub use calc::{handle_calc_command, CalcCommands};
pub use currency::{handle_currency_command, CurrencyCommands};
pub use export::{handle_export_command, ExportCommands};
pub use log::handle_log_command;
pub use report::{handle_report_command, ReportCommands};
pub use transaction::{handle_transaction_command, TransactionCommands};

use crate::error::{FintrackError, FintrackResult};
use crate::models::{local_today, Month};
use crate::store::Outcome;

/// Parse a `YYYY-MM-DD` argument, defaulting to today
pub(crate) fn parse_date(date: Option<&str>) -> FintrackResult<NaiveDate> {
    match date {
        Some(s) => NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| {
            FintrackError::Validation(format!("Invalid date format: '{}'. Use YYYY-MM-DD", s))
        }),
        None => Ok(local_today()),
    }
}

/// Parse a `YYYY-MM` argument, defaulting to the current month
pub(crate) fn parse_month(month: Option<&str>) -> FintrackResult<Month> {
    match month {
        Some(s) => s.parse(),
        None => Ok(Month::current()),
    }
}

/// Message for actions the store ignored
pub(crate) fn unchanged_notice(outcome: Outcome) -> Option<&'static str> {
    match outcome {
        Outcome::Applied => None,
        Outcome::Unchanged => Some("Nothing changed."),
    }
}
