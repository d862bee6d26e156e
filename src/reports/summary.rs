//! All-time income, expenses and balance

use serde::Serialize;

use crate::display::format::AmountStyle;
use crate::finance::{sum_amounts, TransactionFilter};
use crate::models::TransactionType;
use crate::store::State;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FinancialSummary {
    pub total_income: f64,
    pub total_expenses: f64,
    /// Income minus expenses
    pub balance: f64,
    pub transaction_count: usize,
}

impl FinancialSummary {
    pub fn generate(state: &State) -> Self {
        let txns = &state.transactions;
        let total_income = sum_amounts(txns, &TransactionFilter::new().kind(TransactionType::Income));
        let total_expenses = sum_amounts(txns, &TransactionFilter::new().kind(TransactionType::Expense));

        Self {
            total_income,
            total_expenses,
            balance: total_income - total_expenses,
            transaction_count: txns.len(),
        }
    }

    /// Expenses as a share of income, 0 when there is no income
    pub fn expense_ratio(&self) -> f64 {
        if self.total_income > 0.0 {
            self.total_expenses / self.total_income * 100.0
        } else {
            0.0
        }
    }

    pub fn format_terminal(&self, style: &AmountStyle) -> String {
        let mut output = String::new();
        output.push_str("Financial Summary\n");
        output.push_str(&"=".repeat(40));
        output.push('\n');
        output.push_str(&format!("{:<20} {:>19}\n", "Total Income", style.amount(self.total_income)));
        output.push_str(&format!("{:<20} {:>19}\n", "Total Expenses", style.amount(self.total_expenses)));
        output.push_str(&"-".repeat(40));
        output.push('\n');
        output.push_str(&format!("{:<20} {:>19}\n", "Balance", style.amount(self.balance)));
        output.push_str(&format!(
            "\n{} transactions, expenses are {:.1}% of income\n",
            self.transaction_count,
            self.expense_ratio()
        ));
        output
    }
}
