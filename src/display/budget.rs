//! Budget tables

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use super::format::AmountStyle;
use crate::finance::BudgetStatus;
use crate::models::Budget;

#[derive(Tabled)]
struct BudgetRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Monthly limit")]
    amount: String,
}

#[derive(Tabled)]
struct StatusRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Spent")]
    spent: String,
    #[tabled(rename = "Budget")]
    budgeted: String,
    #[tabled(rename = "Remaining")]
    remaining: String,
    #[tabled(rename = "Used")]
    used: String,
    #[tabled(rename = "Status")]
    status: &'static str,
}

pub fn format_budget_table(budgets: &[Budget], style: &AmountStyle) -> String {
    if budgets.is_empty() {
        return "No budgets set.".to_string();
    }

    let rows = budgets.iter().map(|b| BudgetRow {
        id: b.id.to_string(),
        category: b.category.clone(),
        amount: style.amount(b.amount.value()),
    });

    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .with(Modify::new(Columns::single(2)).with(Alignment::right()));
    table.to_string()
}

/// Spending against each budget; percentages are clamped at 100
pub fn format_budget_status_table(statuses: &[BudgetStatus], style: &AmountStyle) -> String {
    if statuses.is_empty() {
        return "No budgets set.".to_string();
    }

    let rows = statuses.iter().map(|s| StatusRow {
        category: s.category.clone(),
        spent: style.amount(s.spent),
        budgeted: style.amount(s.budgeted),
        remaining: style.amount(s.remaining),
        used: format!("{}%", s.display_percent),
        status: if s.exceeded { "OVER" } else { "ok" },
    });

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    table.to_string()
}
