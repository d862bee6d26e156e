//! Transaction tables and detail views

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use super::format::AmountStyle;
use super::report::truncate;
use crate::models::Transaction;

#[derive(Tabled)]
struct TransactionRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

/// Render transactions as a table, in the order given
pub fn format_transaction_table(transactions: &[&Transaction], style: &AmountStyle) -> String {
    if transactions.is_empty() {
        return "No transactions found.".to_string();
    }

    let rows = transactions.iter().map(|txn| TransactionRow {
        id: txn.id.to_string(),
        date: style.date(&txn.date),
        title: truncate(&txn.title, 28),
        category: txn.category.clone(),
        kind: txn.kind.to_string(),
        amount: signed_amount(txn, style),
    });

    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .with(Modify::new(Columns::single(5)).with(Alignment::right()));
    table.to_string()
}

/// Multi-line description of one transaction
pub fn format_transaction_details(txn: &Transaction, style: &AmountStyle) -> String {
    let mut output = String::new();
    output.push_str(&format!("Transaction: {}\n", txn.id));
    output.push_str(&format!("  Title:    {}\n", txn.title));
    output.push_str(&format!("  Date:     {}\n", style.date(&txn.date)));
    output.push_str(&format!("  Type:     {}\n", txn.kind));
    output.push_str(&format!("  Category: {}\n", txn.category));
    output.push_str(&format!("  Amount:   {}\n", signed_amount(txn, style)));
    output
}

/// Amount with `+` for income and `-` for expenses
fn signed_amount(txn: &Transaction, style: &AmountStyle) -> String {
    let sign = if txn.is_income() { "+" } else { "-" };
    format!("{}{}", sign, style.amount(txn.amount.value()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, TransactionType};
    use chrono::{TimeZone, Utc};

    fn groceries() -> Transaction {
        Transaction::new(
            "Groceries",
            Money::new(3500.0),
            TransactionType::Expense,
            "Food",
            Utc.with_ymd_and_hms(2025, 1, 8, 0, 0, 0).unwrap(),
        )
    }

    #[test]
    fn test_table_contains_row_values() {
        let txn = groceries();
        let table = format_transaction_table(&[&txn], &AmountStyle::default());

        assert!(table.contains("Groceries"));
        assert!(table.contains("Jan 8, 2025"));
        assert!(table.contains("-₹3,500.00"));
        assert!(table.contains(&txn.id.to_string()));
    }

    #[test]
    fn test_empty_table() {
        assert_eq!(
            format_transaction_table(&[], &AmountStyle::default()),
            "No transactions found."
        );
    }

    #[test]
    fn test_details() {
        let details = format_transaction_details(&groceries(), &AmountStyle::default());
        assert!(details.contains("Category: Food"));
        assert!(details.contains("Type:     expense"));
    }
}
