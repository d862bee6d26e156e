//! Audit entry data structures
//!
//! One entry per dispatched action, plus entries for startup events such as
//! unreadable persisted state.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::diff::describe_changes;
use crate::store::{Action, State};

/// Types of entities that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityType {
    Transaction,
    Budget,
    Settings,
    /// The store as a whole (resets, loads)
    Store,
}

impl std::fmt::Display for EntityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityType::Transaction => write!(f, "Transaction"),
            EntityType::Budget => write!(f, "Budget"),
            EntityType::Settings => write!(f, "Settings"),
            EntityType::Store => write!(f, "Store"),
        }
    }
}

/// A single audit log entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the event occurred (UTC)
    pub timestamp: DateTime<Utc>,

    /// Action name (`ADD_TRANSACTION`, ...) or startup event (`LOAD_FAILED`)
    pub action: String,

    pub entity_type: EntityType,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_id: Option<String>,

    /// Human-readable label (transaction title, budget category)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_name: Option<String>,

    /// Whether the action changed the state
    pub applied: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub before: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl AuditEntry {
    /// Record a transition from `before` to `after` caused by `action`
    pub fn for_transition(action: &Action, before: &State, after: &State) -> Self {
        let applied = before != after;
        let mut entry = Self {
            timestamp: Utc::now(),
            action: action.name().to_string(),
            entity_type: EntityType::Store,
            entity_id: None,
            entity_name: None,
            applied,
            before: None,
            after: None,
            details: None,
        };

        match action {
            Action::AddTransaction(txn) | Action::UpdateTransaction(txn) => {
                entry.entity_type = EntityType::Transaction;
                entry.entity_id = Some(txn.id.to_string());
                entry.entity_name = Some(txn.title.clone());
                entry.before = before.transaction(txn.id).and_then(to_value);
                entry.after = after.transaction(txn.id).and_then(to_value);
            }
            Action::DeleteTransaction(id) => {
                entry.entity_type = EntityType::Transaction;
                entry.entity_id = Some(id.to_string());
                entry.entity_name = before.transaction(*id).map(|t| t.title.clone());
                entry.before = before.transaction(*id).and_then(to_value);
            }
            Action::AddBudget(budget) | Action::UpdateBudget(budget) => {
                entry.entity_type = EntityType::Budget;
                entry.entity_id = Some(budget.id.to_string());
                entry.entity_name = Some(budget.category.clone());
                entry.before = before.budget(budget.id).and_then(to_value);
                entry.after = after.budget(budget.id).and_then(to_value);
            }
            Action::DeleteBudget(id) => {
                entry.entity_type = EntityType::Budget;
                entry.entity_id = Some(id.to_string());
                entry.entity_name = before.budget(*id).map(|b| b.category.clone());
                entry.before = before.budget(*id).and_then(to_value);
            }
            Action::SetCurrency(currency) => {
                entry.entity_type = EntityType::Settings;
                entry.entity_name = Some("currency".into());
                entry.before = Some(Value::String(before.currency().to_string()));
                entry.after = Some(Value::String(currency.clone()));
            }
            Action::ResetData => {
                entry.details = Some(format!(
                    "{} transactions and {} budgets replaced by seed data",
                    before.transactions.len(),
                    before.budgets.len()
                ));
            }
        }

        if let (Some(old), Some(new), None) = (&entry.before, &entry.after, &entry.details) {
            entry.details = describe_changes(old, new);
        }

        entry
    }

    /// Record persisted state that could not be read at startup
    pub fn load_failed(reason: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            action: "LOAD_FAILED".to_string(),
            entity_type: EntityType::Store,
            entity_id: None,
            entity_name: None,
            applied: false,
            before: None,
            after: None,
            details: Some(reason.into()),
        }
    }

    /// One-line description for terminal output
    pub fn summary(&self) -> String {
        let subject = match (&self.entity_name, &self.entity_id) {
            (Some(name), Some(id)) => format!("{} '{}' ({})", self.entity_type, name, id),
            (Some(name), None) => format!("{} '{}'", self.entity_type, name),
            (None, Some(id)) => format!("{} {}", self.entity_type, id),
            (None, None) => self.entity_type.to_string(),
        };
        let status = if self.applied { "" } else { " [no change]" };
        let details = self
            .details
            .as_ref()
            .map(|d| format!(": {}", d))
            .unwrap_or_default();

        format!(
            "{} {} {}{}{}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S"),
            self.action,
            subject,
            status,
            details
        )
    }
}

fn to_value<T: Serialize>(item: &T) -> Option<Value> {
    serde_json::to_value(item).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Budget, Money};
    use crate::store::reduce;

    #[test]
    fn test_add_budget_entry() {
        let before = State::empty("INR");
        let budget = Budget::new("Food", Money::new(8000.0));
        let action = Action::AddBudget(budget.clone());
        let after = reduce(&before, action.clone(), &State::default());

        let entry = AuditEntry::for_transition(&action, &before, &after);

        assert_eq!(entry.action, "ADD_BUDGET");
        assert_eq!(entry.entity_type, EntityType::Budget);
        assert_eq!(entry.entity_name.as_deref(), Some("Food"));
        assert!(entry.applied);
        assert!(entry.before.is_none());
        assert_eq!(entry.after.unwrap()["amount"], 8000.0);
    }

    #[test]
    fn test_noop_entry_is_not_applied() {
        let before = State::empty("INR");
        let action = Action::DeleteBudget(crate::models::BudgetId::new());
        let entry = AuditEntry::for_transition(&action, &before, &before.clone());

        assert!(!entry.applied);
        assert!(entry.summary().contains("[no change]"));
    }

    #[test]
    fn test_currency_entry_records_both_codes() {
        let before = State::empty("INR");
        let action = Action::SetCurrency("USD".into());
        let after = reduce(&before, action.clone(), &State::default());

        let entry = AuditEntry::for_transition(&action, &before, &after);
        assert_eq!(entry.before, Some(Value::String("INR".into())));
        assert_eq!(entry.after, Some(Value::String("USD".into())));
    }

    #[test]
    fn test_serialization_skips_empty_fields() {
        let entry = AuditEntry::load_failed("bad json");
        let json = serde_json::to_string(&entry).unwrap();

        assert!(json.contains("LOAD_FAILED"));
        assert!(!json.contains("entity_id"));
        let back: AuditEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(back, entry);
    }
}
