//! Transaction model
//!
//! A transaction is an income or expense entry. The stored amount is
//! non-negative; direction comes from the transaction type.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::category::canonical_category;
use super::ids::TransactionId;
use super::money::Money;
use super::period::Month;
use crate::error::{FintrackError, FintrackResult};

/// Direction of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    #[default]
    Expense,
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "income"),
            Self::Expense => write!(f, "expense"),
        }
    }
}

impl FromStr for TransactionType {
    type Err = FintrackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" | "in" => Ok(Self::Income),
            "expense" | "out" => Ok(Self::Expense),
            other => Err(FintrackError::Validation(format!(
                "Unknown transaction type '{}', expected income or expense",
                other
            ))),
        }
    }
}

/// A financial transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: TransactionId,

    /// Free-text label
    pub title: String,

    /// Non-negative amount in the active currency
    pub amount: Money,

    #[serde(rename = "type")]
    pub kind: TransactionType,

    pub category: String,

    /// ISO-8601 timestamp
    pub date: DateTime<Utc>,
}

impl Transaction {
    /// Create a transaction with a fresh ID
    pub fn new(
        title: impl Into<String>,
        amount: Money,
        kind: TransactionType,
        category: impl Into<String>,
        date: DateTime<Utc>,
    ) -> Self {
        Self {
            id: TransactionId::new(),
            title: title.into(),
            amount,
            kind,
            category: category.into(),
            date,
        }
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionType::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionType::Expense
    }

    /// Amount with the sign implied by the type (expenses negative)
    pub fn signed_amount(&self) -> f64 {
        match self.kind {
            TransactionType::Income => self.amount.value(),
            TransactionType::Expense => -self.amount.value(),
        }
    }

    pub fn in_month(&self, month: &Month) -> bool {
        month.contains(&self.date)
    }
}

/// Raw user input for creating or editing a transaction
///
/// Mirrors an entry form: the amount arrives as text and is normalized to a
/// number, the calendar date becomes a UTC midnight timestamp, and new
/// entries get a fresh ID.
#[derive(Debug, Clone)]
pub struct TransactionInput {
    pub title: String,
    pub amount: String,
    pub kind: TransactionType,
    pub category: String,
    pub date: NaiveDate,
}

impl TransactionInput {
    /// Validate and normalize into a transaction
    ///
    /// Pass the existing ID when editing; `None` assigns a new one.
    pub fn into_transaction(self, id: Option<TransactionId>) -> FintrackResult<Transaction> {
        let title = self.title.trim().to_string();
        if title.is_empty() {
            return Err(FintrackError::Validation("Title cannot be empty".into()));
        }

        let amount =
            Money::parse(&self.amount).map_err(|e| FintrackError::Validation(e.to_string()))?;
        if amount.is_negative() {
            return Err(FintrackError::Validation(format!(
                "Amount cannot be negative: {}",
                self.amount.trim()
            )));
        }

        let category = canonical_category(self.kind, &self.category);
        if category.is_empty() {
            return Err(FintrackError::Validation("Category cannot be empty".into()));
        }

        Ok(Transaction {
            id: id.unwrap_or_default(),
            title,
            amount,
            kind: self.kind,
            category,
            date: self.date.and_time(NaiveTime::MIN).and_utc(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn input(amount: &str) -> TransactionInput {
        TransactionInput {
            title: "Groceries".into(),
            amount: amount.into(),
            kind: TransactionType::Expense,
            category: "food".into(),
            date: NaiveDate::from_ymd_opt(2025, 1, 8).unwrap(),
        }
    }

    #[test]
    fn test_input_normalizes_amount_and_date() {
        let txn = input("3,500").into_transaction(None).unwrap();

        assert_eq!(txn.amount, Money::new(3500.0));
        assert_eq!(txn.category, "Food");
        assert_eq!(txn.date, Utc.with_ymd_and_hms(2025, 1, 8, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_input_keeps_existing_id() {
        let id = TransactionId::new();
        let txn = input("10").into_transaction(Some(id)).unwrap();
        assert_eq!(txn.id, id);
    }

    #[test]
    fn test_input_rejects_negative_and_invalid_amounts() {
        assert!(input("-5").into_transaction(None).unwrap_err().is_validation());
        assert!(input("ten").into_transaction(None).unwrap_err().is_validation());
    }

    #[test]
    fn test_input_rejects_blank_title() {
        let mut blank = input("10");
        blank.title = "   ".into();
        assert!(blank.into_transaction(None).is_err());
    }

    #[test]
    fn test_serialized_shape() {
        let txn = Transaction::new(
            "Salary",
            Money::new(50000.0),
            TransactionType::Income,
            "Salary",
            Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
        );
        let value = serde_json::to_value(&txn).unwrap();

        assert_eq!(value["type"], "income");
        assert_eq!(value["amount"], 50000.0);
        assert_eq!(value["title"], "Salary");
        assert!(value["date"].as_str().unwrap().starts_with("2025-01-01T00:00:00"));
    }

    #[test]
    fn test_parses_javascript_iso_timestamps() {
        let json = r#"{
            "id": "550e8400-e29b-41d4-a716-446655440000",
            "title": "Rent",
            "amount": 15000,
            "type": "expense",
            "category": "Housing",
            "date": "2025-01-05T00:00:00.000Z"
        }"#;
        let txn: Transaction = serde_json::from_str(json).unwrap();
        assert!(txn.is_expense());
        assert_eq!(txn.signed_amount(), -15000.0);
    }

    #[test]
    fn test_type_from_str() {
        assert_eq!("Income".parse::<TransactionType>().unwrap(), TransactionType::Income);
        assert!("transfer".parse::<TransactionType>().is_err());
    }
}
