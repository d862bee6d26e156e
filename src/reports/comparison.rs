//! This month against the previous month

use serde::Serialize;

use crate::display::format::AmountStyle;
use crate::display::report::format_change;
use crate::finance::{sum_amounts, TransactionFilter};
use crate::models::{Month, TransactionType};
use crate::store::State;

/// Relative change from `previous` to `current` in percent
///
/// A previous value of zero counts as a 100% change.
pub fn percent_change(current: f64, previous: f64) -> f64 {
    if previous == 0.0 {
        100.0
    } else {
        (current - previous) / previous * 100.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthComparison {
    pub current: Month,
    pub previous: Month,
    pub current_income: f64,
    pub current_expenses: f64,
    pub previous_income: f64,
    pub previous_expenses: f64,
    pub income_change: f64,
    pub expense_change: f64,
}

impl MonthComparison {
    pub fn generate(state: &State, current: Month) -> Self {
        let previous = current.prev();
        let total = |kind, month| {
            sum_amounts(
                &state.transactions,
                &TransactionFilter::new().kind(kind).month(month),
            )
        };

        let current_income = total(TransactionType::Income, current);
        let current_expenses = total(TransactionType::Expense, current);
        let previous_income = total(TransactionType::Income, previous);
        let previous_expenses = total(TransactionType::Expense, previous);

        Self {
            current,
            previous,
            current_income,
            current_expenses,
            previous_income,
            previous_expenses,
            income_change: percent_change(current_income, previous_income),
            expense_change: percent_change(current_expenses, previous_expenses),
        }
    }

    pub fn format_terminal(&self, style: &AmountStyle) -> String {
        let mut output = String::new();
        output.push_str(&format!("{} vs {}\n", self.current, self.previous));
        output.push_str(&"=".repeat(60));
        output.push('\n');
        output.push_str(&format!(
            "{:<10} {:>18} {:>18} {:>10}\n",
            "", "This month", "Last month", "Change"
        ));
        output.push_str(&format!(
            "{:<10} {:>18} {:>18} {:>10}\n",
            "Income",
            style.amount(self.current_income),
            style.amount(self.previous_income),
            format_change(self.income_change)
        ));
        output.push_str(&format!(
            "{:<10} {:>18} {:>18} {:>10}\n",
            "Expenses",
            style.amount(self.current_expenses),
            style.amount(self.previous_expenses),
            format_change(self.expense_change)
        ));
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, Transaction};
    use chrono::{TimeZone, Utc};

    fn txn(amount: f64, kind: TransactionType, month: u32) -> Transaction {
        Transaction::new(
            "t",
            Money::new(amount),
            kind,
            "Other",
            Utc.with_ymd_and_hms(2025, month, 2, 0, 0, 0).unwrap(),
        )
    }

    #[test]
    fn test_percent_change() {
        assert_eq!(percent_change(150.0, 100.0), 50.0);
        assert_eq!(percent_change(50.0, 100.0), -50.0);
        assert_eq!(percent_change(10.0, 0.0), 100.0);
        assert_eq!(percent_change(0.0, 0.0), 100.0);
    }

    #[test]
    fn test_compare_months() {
        let mut state = State::default();
        state.transactions = vec![
            txn(1000.0, TransactionType::Income, 1),
            txn(400.0, TransactionType::Expense, 1),
            txn(1200.0, TransactionType::Income, 2),
            txn(300.0, TransactionType::Expense, 2),
        ];

        let cmp = MonthComparison::generate(&state, Month::new(2025, 2).unwrap());
        assert_eq!(cmp.previous, Month::new(2025, 1).unwrap());
        assert!((cmp.income_change - 20.0).abs() < 1e-9);
        assert!((cmp.expense_change + 25.0).abs() < 1e-9);
        assert!(cmp.format_terminal(&AmountStyle::default()).contains("+20.0%"));
    }

    #[test]
    fn test_january_compares_with_december() {
        let cmp = MonthComparison::generate(&State::default(), Month::new(2025, 1).unwrap());
        assert_eq!(cmp.previous, Month::new(2024, 12).unwrap());
    }
}
