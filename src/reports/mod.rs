//! Reports over store snapshots
//!
//! Each report is computed from a `&State` with the finance helpers and can
//! render itself for the terminal. Reports never modify the store.

pub mod accounts;
pub mod budget_overview;
pub mod comparison;
pub mod investments;
pub mod spending;
pub mod summary;
pub mod trends;

pub use accounts::{AccountSummary, AccountTypeTotal};
pub use budget_overview::BudgetOverview;
pub use comparison::{percent_change, MonthComparison};
pub use investments::InvestmentSummary;
pub use spending::{CategorySpending, ExpenseBreakdown};
pub use summary::FinancialSummary;
pub use trends::{MonthlySpending, SpendingTrends, DEFAULT_TREND_MONTHS};
