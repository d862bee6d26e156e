//! Display formatting for terminal output
//!
//! Currency/date formatting plus table renderers for transactions, budgets
//! and calculator results.

pub mod budget;
pub mod calculator;
pub mod format;
pub mod report;
pub mod transaction;

pub use budget::{format_budget_status_table, format_budget_table};
pub use calculator::{format_loan, format_sip};
pub use format::{format_currency, format_date, AmountStyle};
pub use transaction::{format_transaction_details, format_transaction_table};
