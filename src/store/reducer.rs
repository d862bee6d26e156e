//! The reducer: the only place state transitions are defined
//!
//! `reduce` never fails. Updates and deletes naming an unknown ID leave the
//! state untouched, as does adding a budget for a category that already has
//! one.

use super::action::Action;
use super::state::State;
use crate::models::{Budget, BudgetId};

/// Apply an action to a state, returning the next state
///
/// `seed` is the canonical initial data restored by [`Action::ResetData`].
pub fn reduce(state: &State, action: Action, seed: &State) -> State {
    let mut next = state.clone();

    match action {
        Action::AddTransaction(txn) => {
            next.transactions.push(txn);
        }
        Action::UpdateTransaction(txn) => {
            if let Some(slot) = next.transactions.iter_mut().find(|t| t.id == txn.id) {
                *slot = txn;
            }
        }
        Action::DeleteTransaction(id) => {
            next.transactions.retain(|t| t.id != id);
        }
        Action::AddBudget(budget) => {
            let id_taken = next.budgets.iter().any(|b| b.id == budget.id);
            if !id_taken && !category_taken(&next.budgets, &budget.category, None) {
                next.budgets.push(budget);
            }
        }
        Action::UpdateBudget(budget) => {
            let other_has_category = category_taken(&next.budgets, &budget.category, Some(budget.id));
            if let Some(slot) = next.budgets.iter_mut().find(|b| b.id == budget.id) {
                if !other_has_category {
                    *slot = budget;
                }
            }
        }
        Action::DeleteBudget(id) => {
            next.budgets.retain(|b| b.id != id);
        }
        Action::SetCurrency(currency) => {
            next.settings.currency = currency;
        }
        Action::ResetData => {
            return seed.clone();
        }
    }

    next
}

/// Whether a budget other than `except` already covers `category`
fn category_taken(budgets: &[Budget], category: &str, except: Option<BudgetId>) -> bool {
    budgets
        .iter()
        .any(|b| b.category == category && Some(b.id) != except)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, Transaction, TransactionId, TransactionType};
    use chrono::{TimeZone, Utc};

    fn expense(title: &str, amount: f64) -> Transaction {
        Transaction::new(
            title,
            Money::new(amount),
            TransactionType::Expense,
            "Food",
            Utc.with_ymd_and_hms(2025, 1, 8, 0, 0, 0).unwrap(),
        )
    }

    fn sample_state() -> State {
        let mut state = State::empty("INR");
        state.transactions = vec![expense("Groceries", 3500.0), expense("Dinner", 1200.0)];
        state.budgets = vec![Budget::new("Food", Money::new(8000.0))];
        state
    }

    #[test]
    fn test_add_transaction_appends() {
        let state = sample_state();
        let txn = expense("Snacks", 150.0);
        let next = reduce(&state, Action::AddTransaction(txn.clone()), &State::default());

        assert_eq!(next.transactions.len(), 3);
        assert_eq!(next.transactions.last(), Some(&txn));
    }

    #[test]
    fn test_add_then_delete_restores_collection() {
        let state = sample_state();
        let txn = expense("Snacks", 150.0);
        let seed = State::default();

        let added = reduce(&state, Action::AddTransaction(txn.clone()), &seed);
        let removed = reduce(&added, Action::DeleteTransaction(txn.id), &seed);

        assert_eq!(removed.transactions, state.transactions);
    }

    #[test]
    fn test_update_transaction_replaces_whole_record() {
        let state = sample_state();
        let mut changed = state.transactions[0].clone();
        changed.title = "Weekly groceries".into();
        changed.amount = Money::new(4000.0);
        changed.category = "Other".into();

        let next = reduce(&state, Action::UpdateTransaction(changed.clone()), &State::default());

        assert_eq!(next.transactions[0], changed);
        assert_eq!(next.transactions[1], state.transactions[1]);
    }

    #[test]
    fn test_update_with_unchanged_record_is_identity() {
        let state = sample_state();
        let same = state.transactions[1].clone();
        let next = reduce(&state, Action::UpdateTransaction(same), &State::default());
        assert_eq!(next, state);
    }

    #[test]
    fn test_unknown_ids_are_noops() {
        let state = sample_state();
        let seed = State::default();

        let mut ghost = expense("Ghost", 1.0);
        ghost.id = TransactionId::new();
        assert_eq!(reduce(&state, Action::UpdateTransaction(ghost), &seed), state);
        assert_eq!(reduce(&state, Action::DeleteTransaction(TransactionId::new()), &seed), state);
        assert_eq!(reduce(&state, Action::DeleteBudget(BudgetId::new()), &seed), state);
        assert_eq!(
            reduce(&state, Action::UpdateBudget(Budget::new("Travel", Money::new(1.0))), &seed),
            state
        );
    }

    #[test]
    fn test_add_budget_for_budgeted_category_is_noop() {
        let state = sample_state();
        let duplicate = Budget::new("Food", Money::new(100.0));
        let next = reduce(&state, Action::AddBudget(duplicate), &State::default());
        assert_eq!(next, state);

        let fresh = Budget::new("Transport", Money::new(2000.0));
        let next = reduce(&state, Action::AddBudget(fresh.clone()), &State::default());
        assert_eq!(next.budgets.len(), 2);
        assert_eq!(next.budgets[1], fresh);
    }

    #[test]
    fn test_update_budget_cannot_take_another_category() {
        let mut state = sample_state();
        let transport = Budget::new("Transport", Money::new(2000.0));
        state.budgets.push(transport.clone());

        let mut moved = transport.clone();
        moved.category = "Food".into();
        assert_eq!(reduce(&state, Action::UpdateBudget(moved), &State::default()), state);

        let mut raised = transport;
        raised.amount = Money::new(2500.0);
        let next = reduce(&state, Action::UpdateBudget(raised.clone()), &State::default());
        assert_eq!(next.budgets[1], raised);
    }

    #[test]
    fn test_set_currency_keeps_amounts() {
        let state = sample_state();
        let next = reduce(&state, Action::SetCurrency("USD".into()), &State::default());

        assert_eq!(next.currency(), "USD");
        assert_eq!(next.transactions, state.transactions);
        assert_eq!(next.budgets, state.budgets);
    }

    #[test]
    fn test_reset_returns_seed() {
        let state = sample_state();
        let mut seed = State::empty("EUR");
        seed.budgets.push(Budget::new("Shopping", Money::new(5000.0)));

        let next = reduce(&state, Action::ResetData, &seed);
        assert_eq!(next, seed);
    }
}
