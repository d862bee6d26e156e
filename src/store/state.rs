//! Store state
//!
//! The serialized form of [`State`] is exactly the persisted/exported layout:
//! `{ "transactions": [...], "budgets": [...], "currency": "INR" }`.

use serde::{Deserialize, Serialize};

use crate::error::{FintrackError, FintrackResult};
use crate::models::{Budget, BudgetId, Transaction, TransactionId};

/// Process-wide display preferences held in the store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    /// Currency code used for display; never converts stored amounts
    pub currency: String,
}

/// Root of all application data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct State {
    /// Insertion order; views re-sort by date
    pub transactions: Vec<Transaction>,
    /// Unique by id and by category
    pub budgets: Vec<Budget>,
    #[serde(flatten)]
    pub settings: AppSettings,
}

impl State {
    /// A state with no transactions or budgets
    pub fn empty(currency: impl Into<String>) -> Self {
        Self {
            transactions: Vec::new(),
            budgets: Vec::new(),
            settings: AppSettings {
                currency: currency.into(),
            },
        }
    }

    pub fn currency(&self) -> &str {
        &self.settings.currency
    }

    pub fn transaction(&self, id: TransactionId) -> Option<&Transaction> {
        self.transactions.iter().find(|t| t.id == id)
    }

    pub fn budget(&self, id: BudgetId) -> Option<&Budget> {
        self.budgets.iter().find(|b| b.id == id)
    }

    pub fn budget_for_category(&self, category: &str) -> Option<&Budget> {
        self.budgets.iter().find(|b| b.category == category)
    }

    /// Transactions sorted newest first
    pub fn transactions_by_date(&self) -> Vec<&Transaction> {
        let mut sorted: Vec<_> = self.transactions.iter().collect();
        sorted.sort_by(|a, b| b.date.cmp(&a.date));
        sorted
    }

    /// Resolve a user-typed transaction reference (full or short ID)
    pub fn find_transaction(&self, reference: &str) -> FintrackResult<&Transaction> {
        let mut matches = self.transactions.iter().filter(|t| t.id.matches(reference));

        match (matches.next(), matches.next()) {
            (Some(txn), None) => Ok(txn),
            (Some(_), Some(_)) => Err(FintrackError::Validation(format!(
                "Transaction reference '{}' is ambiguous",
                reference
            ))),
            (None, _) => Err(FintrackError::transaction_not_found(reference)),
        }
    }

    /// Resolve a budget by ID reference or by category name
    pub fn find_budget(&self, reference: &str) -> FintrackResult<&Budget> {
        if let Some(budget) = self
            .budgets
            .iter()
            .find(|b| b.category.eq_ignore_ascii_case(reference.trim()))
        {
            return Ok(budget);
        }

        let mut matches = self.budgets.iter().filter(|b| b.id.matches(reference));
        match (matches.next(), matches.next()) {
            (Some(budget), None) => Ok(budget),
            (Some(_), Some(_)) => Err(FintrackError::Validation(format!(
                "Budget reference '{}' is ambiguous",
                reference
            ))),
            (None, _) => Err(FintrackError::budget_not_found(reference)),
        }
    }
}

impl Default for State {
    fn default() -> Self {
        Self::empty("INR")
    }
}
