//! Store actions
//!
//! Every state change is described by one of these variants. Serialized
//! actions use an adjacent tag: `{"type": "ADD_TRANSACTION", "payload": {...}}`.

use serde::{Deserialize, Serialize};

use crate::models::{Budget, BudgetId, Transaction, TransactionId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    /// Append a transaction; the ID is assigned by the caller
    AddTransaction(Transaction),
    /// Replace the transaction with the same ID
    UpdateTransaction(Transaction),
    DeleteTransaction(TransactionId),
    /// Append a budget unless its category is already budgeted
    AddBudget(Budget),
    /// Replace the budget with the same ID
    UpdateBudget(Budget),
    DeleteBudget(BudgetId),
    /// Change the display currency
    SetCurrency(String),
    /// Restore the seed data
    ResetData,
}

impl Action {
    /// Wire name of the action
    pub fn name(&self) -> &'static str {
        match self {
            Self::AddTransaction(_) => "ADD_TRANSACTION",
            Self::UpdateTransaction(_) => "UPDATE_TRANSACTION",
            Self::DeleteTransaction(_) => "DELETE_TRANSACTION",
            Self::AddBudget(_) => "ADD_BUDGET",
            Self::UpdateBudget(_) => "UPDATE_BUDGET",
            Self::DeleteBudget(_) => "DELETE_BUDGET",
            Self::SetCurrency(_) => "SET_CURRENCY",
            Self::ResetData => "RESET_DATA",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    #[test]
    fn test_wire_format() {
        let action = Action::SetCurrency("USD".into());
        let value = serde_json::to_value(&action).unwrap();
        assert_eq!(value["type"], "SET_CURRENCY");
        assert_eq!(value["payload"], "USD");

        let reset = serde_json::to_value(Action::ResetData).unwrap();
        assert_eq!(reset["type"], "RESET_DATA");
    }

    #[test]
    fn test_name_matches_tag() {
        let budget = Budget::new("Food", Money::new(8000.0));
        let actions = vec![
            Action::AddBudget(budget.clone()),
            Action::DeleteBudget(budget.id),
            Action::ResetData,
        ];

        for action in actions {
            let value = serde_json::to_value(&action).unwrap();
            assert_eq!(value["type"], action.name());
        }
    }
}
