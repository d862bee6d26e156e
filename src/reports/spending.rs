//! Expense totals per category

use std::collections::HashMap;

use serde::Serialize;

use crate::display::format::AmountStyle;
use crate::display::report::{format_bar, format_percentage, truncate};
use crate::finance::TransactionFilter;
use crate::models::{Month, TransactionType};
use crate::store::State;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySpending {
    pub category: String,
    pub total: f64,
    pub transaction_count: usize,
    /// Share of all expenses in the report
    pub percentage: f64,
}

/// Expenses grouped by category, largest first
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExpenseBreakdown {
    /// `None` covers all time
    pub month: Option<Month>,
    pub categories: Vec<CategorySpending>,
    pub total: f64,
}

impl ExpenseBreakdown {
    pub fn generate(state: &State, month: Option<Month>) -> Self {
        let mut filter = TransactionFilter::new().kind(TransactionType::Expense);
        if let Some(month) = month {
            filter = filter.month(month);
        }

        let mut totals: HashMap<&str, (f64, usize)> = HashMap::new();
        for txn in filter.apply(&state.transactions) {
            let entry = totals.entry(txn.category.as_str()).or_insert((0.0, 0));
            entry.0 += txn.amount.value();
            entry.1 += 1;
        }

        let total: f64 = totals.values().map(|(sum, _)| sum).sum();
        let mut categories: Vec<CategorySpending> = totals
            .into_iter()
            .map(|(category, (sum, count))| CategorySpending {
                category: category.to_string(),
                total: sum,
                transaction_count: count,
                percentage: if total > 0.0 { sum / total * 100.0 } else { 0.0 },
            })
            .collect();

        categories.sort_by(|a, b| {
            b.total
                .total_cmp(&a.total)
                .then_with(|| a.category.cmp(&b.category))
        });

        Self {
            month,
            categories,
            total,
        }
    }

    pub fn top_categories(&self, limit: usize) -> &[CategorySpending] {
        &self.categories[..limit.min(self.categories.len())]
    }

    pub fn format_terminal(&self, style: &AmountStyle) -> String {
        let mut output = String::new();
        match self.month {
            Some(month) => output.push_str(&format!("Expense Breakdown - {}\n", month)),
            None => output.push_str("Expense Breakdown - All Time\n"),
        }
        output.push_str(&"=".repeat(64));
        output.push('\n');

        if self.categories.is_empty() {
            output.push_str("No expenses recorded.\n");
            return output;
        }

        let max = self.categories.first().map(|c| c.total).unwrap_or(0.0);
        for row in &self.categories {
            output.push_str(&format!(
                "{:<16} {:>16} {:>6}  {}\n",
                truncate(&row.category, 16),
                style.amount(row.total),
                format_percentage(row.percentage),
                format_bar(row.total, max, 20)
            ));
        }

        output.push_str(&"-".repeat(64));
        output.push('\n');
        output.push_str(&format!("{:<16} {:>16}\n", "Total", style.amount(self.total)));
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::seed_state;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_breakdown_sorted_descending() {
        let now = Utc.with_ymd_and_hms(2025, 4, 21, 0, 0, 0).unwrap();
        let breakdown = ExpenseBreakdown::generate(&seed_state(now), None);

        let names: Vec<_> = breakdown.categories.iter().map(|c| c.category.as_str()).collect();
        assert_eq!(names, vec!["Housing", "Food", "Shopping"]);
        assert_eq!(breakdown.categories[1].total, 4700.0);
        assert_eq!(breakdown.categories[1].transaction_count, 2);
        assert_eq!(breakdown.total, 22200.0);

        let share: f64 = breakdown.categories.iter().map(|c| c.percentage).sum();
        assert!((share - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_month_filter_excludes_other_months() {
        let now = Utc.with_ymd_and_hms(2025, 4, 21, 0, 0, 0).unwrap();
        let state = seed_state(now);

        let march = ExpenseBreakdown::generate(&state, Some(Month::new(2025, 3).unwrap()));
        assert!(march.categories.is_empty());
        assert!(march.format_terminal(&AmountStyle::default()).contains("No expenses"));

        assert_eq!(ExpenseBreakdown::generate(&state, None).top_categories(1).len(), 1);
    }
}
