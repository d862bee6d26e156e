//! Core data models for fintrack
//!
//! Transactions, budgets, money amounts, calendar months and the category
//! vocabulary.

pub mod budget;
pub mod category;
pub mod ids;
pub mod money;
pub mod period;
pub mod transaction;

pub use budget::{Budget, BudgetInput};
pub use category::{
    available_budget_categories, categories_for, EXPENSE_CATEGORIES, INCOME_CATEGORIES,
    TREND_CATEGORIES,
};
pub use ids::{BudgetId, TransactionId};
pub use money::Money;
pub use period::{local_today, Month};
pub use transaction::{Transaction, TransactionInput, TransactionType};
