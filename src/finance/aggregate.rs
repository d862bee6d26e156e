//! Sums over transactions and budget utilization

use serde::Serialize;

use crate::models::{Budget, Month, Transaction, TransactionType};

/// Selects transactions by type, category and month
///
/// Unset criteria match everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionFilter {
    kind: Option<TransactionType>,
    category: Option<String>,
    month: Option<Month>,
}

impl TransactionFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn kind(mut self, kind: TransactionType) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn month(mut self, month: Month) -> Self {
        self.month = Some(month);
        self
    }

    pub fn matches(&self, txn: &Transaction) -> bool {
        self.kind.map_or(true, |k| txn.kind == k)
            && self.category.as_deref().map_or(true, |c| txn.category == c)
            && self.month.map_or(true, |m| txn.in_month(&m))
    }

    pub fn apply<'a>(&'a self, transactions: &'a [Transaction]) -> impl Iterator<Item = &'a Transaction> + 'a {
        transactions.iter().filter(move |t| self.matches(t))
    }
}

/// Sum of the amounts of every matching transaction
pub fn sum_amounts(transactions: &[Transaction], filter: &TransactionFilter) -> f64 {
    filter.apply(transactions).map(|t| t.amount.value()).sum()
}

/// How much of a budget has been used in a month
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetStatus {
    pub category: String,
    pub budgeted: f64,
    pub spent: f64,
    /// `budgeted - spent`, negative when over budget
    pub remaining: f64,
    /// Unclamped `spent / budgeted * 100`
    pub ratio_percent: f64,
    /// Rounded and clamped to 0..=100 for progress bars
    pub display_percent: u8,
    /// Strictly more spent than budgeted
    pub exceeded: bool,
}

/// Utilization of `budget` by the expenses of `month`
pub fn budget_status(budget: &Budget, transactions: &[Transaction], month: Month) -> BudgetStatus {
    let filter = TransactionFilter::new()
        .kind(TransactionType::Expense)
        .category(budget.category.clone())
        .month(month);
    let spent = sum_amounts(transactions, &filter);
    let budgeted = budget.amount.value();

    let ratio_percent = if budgeted > 0.0 {
        spent / budgeted * 100.0
    } else {
        0.0
    };

    BudgetStatus {
        category: budget.category.clone(),
        budgeted,
        spent,
        remaining: budgeted - spent,
        ratio_percent,
        display_percent: ratio_percent.round().clamp(0.0, 100.0) as u8,
        exceeded: spent > budgeted,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use chrono::{TimeZone, Utc};

    fn txn(amount: f64, kind: TransactionType, category: &str, month: u32) -> Transaction {
        Transaction::new(
            "t",
            Money::new(amount),
            kind,
            category,
            Utc.with_ymd_and_hms(2025, month, 10, 0, 0, 0).unwrap(),
        )
    }

    fn sample() -> Vec<Transaction> {
        vec![
            txn(50000.0, TransactionType::Income, "Salary", 3),
            txn(3500.0, TransactionType::Expense, "Food", 3),
            txn(1200.0, TransactionType::Expense, "Food", 3),
            txn(900.0, TransactionType::Expense, "Food", 2),
            txn(2500.0, TransactionType::Expense, "Shopping", 3),
        ]
    }

    #[test]
    fn test_sum_by_kind_category_and_month() {
        let txns = sample();
        let march = Month::new(2025, 3).unwrap();

        let expenses = TransactionFilter::new().kind(TransactionType::Expense);
        assert_eq!(sum_amounts(&txns, &expenses), 8100.0);

        let march_food = expenses.clone().category("Food").month(march);
        assert_eq!(sum_amounts(&txns, &march_food), 4700.0);

        assert_eq!(sum_amounts(&txns, &TransactionFilter::new()), 58100.0);
    }

    #[test]
    fn test_budget_within_limit() {
        let budget = Budget::new("Food", Money::new(8000.0));
        let status = budget_status(&budget, &sample(), Month::new(2025, 3).unwrap());

        assert_eq!(status.spent, 4700.0);
        assert_eq!(status.remaining, 3300.0);
        assert_eq!(status.display_percent, 59);
        assert!(!status.exceeded);
    }

    #[test]
    fn test_exceeded_keeps_raw_ratio() {
        let budget = Budget::new("Shopping", Money::new(2000.0));
        let status = budget_status(&budget, &sample(), Month::new(2025, 3).unwrap());

        assert!(status.exceeded);
        assert_eq!(status.ratio_percent, 125.0);
        assert_eq!(status.display_percent, 100);
        assert_eq!(status.remaining, -500.0);
    }

    #[test]
    fn test_spending_equal_to_budget_is_not_exceeded() {
        let budget = Budget::new("Shopping", Money::new(2500.0));
        let status = budget_status(&budget, &sample(), Month::new(2025, 3).unwrap());

        assert!(!status.exceeded);
        assert_eq!(status.display_percent, 100);
    }
}
