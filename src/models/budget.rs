//! Budget model
//!
//! A budget is a monthly spending ceiling for one expense category.

use serde::{Deserialize, Serialize};

use super::ids::BudgetId;
use super::money::Money;
use crate::error::{FintrackError, FintrackResult};

/// Monthly ceiling for a category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    pub id: BudgetId,
    pub category: String,
    pub amount: Money,
}

impl Budget {
    /// Create a budget with a fresh ID
    pub fn new(category: impl Into<String>, amount: Money) -> Self {
        Self {
            id: BudgetId::new(),
            category: category.into(),
            amount,
        }
    }
}

/// Raw user input for creating or editing a budget
#[derive(Debug, Clone)]
pub struct BudgetInput {
    pub category: String,
    pub amount: String,
}

impl BudgetInput {
    /// Validate and normalize into a budget
    ///
    /// Pass the existing ID when editing; `None` assigns a new one.
    pub fn into_budget(self, id: Option<BudgetId>) -> FintrackResult<Budget> {
        let category = super::category::canonical_category(
            super::transaction::TransactionType::Expense,
            &self.category,
        );
        if category.is_empty() {
            return Err(FintrackError::Validation("Category cannot be empty".into()));
        }

        let amount =
            Money::parse(&self.amount).map_err(|e| FintrackError::Validation(e.to_string()))?;
        if amount.value() <= 0.0 {
            return Err(FintrackError::Validation(format!(
                "Budget amount must be positive: {}",
                self.amount.trim()
            )));
        }

        Ok(Budget {
            id: id.unwrap_or_default(),
            category,
            amount,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_into_budget() {
        let budget = BudgetInput {
            category: "shopping".into(),
            amount: "5,000".into(),
        }
        .into_budget(None)
        .unwrap();

        assert_eq!(budget.category, "Shopping");
        assert_eq!(budget.amount, Money::new(5000.0));
    }

    #[test]
    fn test_input_rejects_zero_amount() {
        let err = BudgetInput {
            category: "Food".into(),
            amount: "0".into(),
        }
        .into_budget(None)
        .unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_serialized_shape() {
        let budget = Budget::new("Food", Money::new(8000.0));
        let value = serde_json::to_value(&budget).unwrap();
        assert_eq!(value["category"], "Food");
        assert_eq!(value["amount"], 8000.0);
        assert!(value["id"].is_string());
    }
}
