//! Monthly expense totals for the trailing months

use serde::Serialize;

use crate::display::format::AmountStyle;
use crate::models::{Month, TREND_CATEGORIES};
use crate::store::State;

/// Months shown when no count is given
pub const DEFAULT_TREND_MONTHS: usize = 6;

/// Name of the bucket collecting every category not charted on its own
pub const OTHER_BUCKET: &str = "Other";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlySpending {
    pub month: Month,
    /// One entry per trend category, then `Other`
    pub by_category: Vec<(String, f64)>,
    pub total: f64,
}

impl MonthlySpending {
    pub fn amount_for(&self, category: &str) -> f64 {
        self.by_category
            .iter()
            .find(|(name, _)| name == category)
            .map(|(_, amount)| *amount)
            .unwrap_or(0.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpendingTrends {
    /// Oldest first
    pub months: Vec<MonthlySpending>,
}

impl SpendingTrends {
    /// Expenses for the `count` months ending with `end`
    pub fn generate(state: &State, end: Month, count: usize) -> Self {
        let months = end
            .trailing(count)
            .into_iter()
            .map(|month| {
                let mut buckets: Vec<(String, f64)> = TREND_CATEGORIES
                    .iter()
                    .chain(std::iter::once(&OTHER_BUCKET))
                    .map(|name| (name.to_string(), 0.0))
                    .collect();

                let expenses = state
                    .transactions
                    .iter()
                    .filter(|t| t.is_expense() && t.in_month(&month));
                for txn in expenses {
                    let index = TREND_CATEGORIES
                        .iter()
                        .position(|c| *c == txn.category)
                        .unwrap_or(TREND_CATEGORIES.len());
                    buckets[index].1 += txn.amount.value();
                }

                let total: f64 = buckets.iter().map(|(_, amount)| amount).sum();
                MonthlySpending {
                    month,
                    by_category: buckets,
                    total,
                }
            })
            .collect();

        Self { months }
    }

    pub fn format_terminal(&self, style: &AmountStyle) -> String {
        let mut output = String::new();
        output.push_str("Spending Trends\n");

        let mut header = format!("{:<10}", "Month");
        for name in TREND_CATEGORIES.iter().chain(std::iter::once(&OTHER_BUCKET)) {
            header.push_str(&format!(" {:>14}", name));
        }
        header.push_str(&format!(" {:>14}", "Total"));

        output.push_str(&"=".repeat(header.chars().count()));
        output.push('\n');
        output.push_str(&header);
        output.push('\n');

        for row in &self.months {
            let label = format!("{} {}", row.month.short_name(), row.month.year);
            output.push_str(&format!("{:<10}", label));
            for (_, amount) in &row.by_category {
                output.push_str(&format!(" {:>14}", style.amount(*amount)));
            }
            output.push_str(&format!(" {:>14}\n", style.amount(row.total)));
        }

        output
    }
}
