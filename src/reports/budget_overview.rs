//! Budget utilization for one month

use serde::Serialize;

use crate::display::format::AmountStyle;
use crate::display::report::{format_bar, truncate};
use crate::finance::{budget_status, sum_amounts, BudgetStatus, TransactionFilter};
use crate::models::{Month, TransactionType};
use crate::store::State;

/// All budgets against one month of expenses
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetOverview {
    pub month: Month,
    /// Sum of every budget ceiling
    pub total_budget: f64,
    /// All expenses of the month, budgeted category or not
    pub spent: f64,
    pub remaining: f64,
    /// `spent / total_budget * 100`, 0 when nothing is budgeted
    pub utilization: f64,
    pub statuses: Vec<BudgetStatus>,
}

impl BudgetOverview {
    pub fn generate(state: &State, month: Month) -> Self {
        let total_budget: f64 = state.budgets.iter().map(|b| b.amount.value()).sum();
        let spent = sum_amounts(
            &state.transactions,
            &TransactionFilter::new().kind(TransactionType::Expense).month(month),
        );

        let statuses = state
            .budgets
            .iter()
            .map(|budget| budget_status(budget, &state.transactions, month))
            .collect();

        Self {
            month,
            total_budget,
            spent,
            remaining: total_budget - spent,
            utilization: if total_budget > 0.0 {
                spent / total_budget * 100.0
            } else {
                0.0
            },
            statuses,
        }
    }

    /// Budgets whose category spending is strictly over the ceiling
    pub fn exceeded(&self) -> Vec<&BudgetStatus> {
        self.statuses.iter().filter(|s| s.exceeded).collect()
    }

    pub fn format_terminal(&self, style: &AmountStyle) -> String {
        let mut output = String::new();
        output.push_str(&format!("Budget Overview - {}\n", self.month));
        output.push_str(&"=".repeat(72));
        output.push('\n');
        output.push_str(&format!(
            "Total budget {}  Spent {}  Remaining {}  ({:.1}% used)\n\n",
            style.amount(self.total_budget),
            style.amount(self.spent),
            style.amount(self.remaining),
            self.utilization
        ));

        if self.statuses.is_empty() {
            output.push_str("No budgets set.\n");
            return output;
        }

        output.push_str(&format!(
            "{:<14} {:>14} {:>14} {:>5}  {}\n",
            "Category", "Spent", "Budget", "Used", "Progress"
        ));
        for status in &self.statuses {
            let marker = if status.exceeded { " *" } else { "" };
            output.push_str(&format!(
                "{:<14} {:>14} {:>14} {:>4}%  {}{}\n",
                truncate(&status.category, 14),
                style.amount(status.spent),
                style.amount(status.budgeted),
                status.display_percent,
                format_bar(status.display_percent as f64, 100.0, 20),
                marker
            ));
        }

        let exceeded = self.exceeded();
        if !exceeded.is_empty() {
            output.push_str("\n* Over budget:\n");
            for status in exceeded {
                output.push_str(&format!(
                    "  {} by {}\n",
                    status.category,
                    style.amount(-status.remaining)
                ));
            }
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Budget, Money};
    use crate::store::seed_state;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_seed_overview() {
        let now = Utc.with_ymd_and_hms(2025, 6, 28, 0, 0, 0).unwrap();
        let overview = BudgetOverview::generate(&seed_state(now), Month::of(&now));

        assert_eq!(overview.total_budget, 13000.0);
        assert_eq!(overview.spent, 22200.0);
        assert_eq!(overview.remaining, -9200.0);
        assert_eq!(overview.statuses.len(), 2);
        assert!(overview.exceeded().is_empty());
    }

    #[test]
    fn test_no_budgets_means_zero_utilization() {
        let overview = BudgetOverview::generate(&State::default(), Month::new(2025, 1).unwrap());
        assert_eq!(overview.utilization, 0.0);
        assert!(overview
            .format_terminal(&AmountStyle::default())
            .contains("No budgets set"));
    }

    #[test]
    fn test_exceeded_budget_listed() {
        let now = Utc.with_ymd_and_hms(2025, 6, 28, 0, 0, 0).unwrap();
        let mut state = seed_state(now);
        state.budgets.push(Budget::new("Housing", Money::new(10000.0)));

        let overview = BudgetOverview::generate(&state, Month::of(&now));
        let exceeded = overview.exceeded();
        assert_eq!(exceeded.len(), 1);
        assert_eq!(exceeded[0].category, "Housing");
        assert!(overview.format_terminal(&AmountStyle::default()).contains("Housing by ₹5,000.00"));
    }
}
