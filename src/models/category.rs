//! Category vocabulary
//!
//! Categories are free strings on transactions and budgets. These lists are
//! the suggested vocabulary offered by input forms, not a closed set.

use super::budget::Budget;
use super::transaction::TransactionType;

/// Suggested categories for expenses
pub const EXPENSE_CATEGORIES: [&str; 7] = [
    "Food",
    "Transport",
    "Entertainment",
    "Shopping",
    "Utilities",
    "Housing",
    "Other",
];

/// Suggested categories for income
pub const INCOME_CATEGORIES: [&str; 4] = ["Salary", "Freelance", "Investment", "Other"];

/// Categories charted individually in spending trends; the rest fold into "Other"
pub const TREND_CATEGORIES: [&str; 5] = ["Food", "Transport", "Entertainment", "Shopping", "Utilities"];

/// Suggested categories for a transaction type
pub fn categories_for(kind: TransactionType) -> &'static [&'static str] {
    match kind {
        TransactionType::Expense => &EXPENSE_CATEGORIES,
        TransactionType::Income => &INCOME_CATEGORIES,
    }
}

/// Expense categories that don't have a budget yet
pub fn available_budget_categories(budgets: &[Budget]) -> Vec<&'static str> {
    EXPENSE_CATEGORIES
        .iter()
        .copied()
        .filter(|category| !budgets.iter().any(|b| b.category == *category))
        .collect()
}

/// Case-insensitive match against the suggested vocabulary, returning the
/// canonical spelling. Unknown names pass through unchanged.
pub fn canonical_category(kind: TransactionType, name: &str) -> String {
    categories_for(kind)
        .iter()
        .find(|c| c.eq_ignore_ascii_case(name.trim()))
        .map(|c| c.to_string())
        .unwrap_or_else(|| name.trim().to_string())
}
