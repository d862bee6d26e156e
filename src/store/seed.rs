//! Canonical seed data
//!
//! Used on first run, when persisted state cannot be read, and by
//! `RESET_DATA`. All seed transactions are dated in the month of `now`.

use chrono::{DateTime, Datelike, TimeZone, Utc};

use super::state::State;
use crate::models::{Budget, Money, Transaction, TransactionType};

/// (title, amount, type, category, day of month)
const SEED_TRANSACTIONS: [(&str, f64, TransactionType, &str, u32); 6] = [
    ("Salary", 50000.0, TransactionType::Income, "Salary", 1),
    ("Rent", 15000.0, TransactionType::Expense, "Housing", 5),
    ("Groceries", 3500.0, TransactionType::Expense, "Food", 8),
    ("Dinner", 1200.0, TransactionType::Expense, "Food", 15),
    ("Freelance Project", 25000.0, TransactionType::Income, "Freelance", 18),
    ("Shopping", 2500.0, TransactionType::Expense, "Shopping", 20),
];

const SEED_BUDGETS: [(&str, f64); 2] = [("Food", 8000.0), ("Shopping", 5000.0)];

pub const SEED_CURRENCY: &str = "INR";

/// Build the seed state relative to `now`
pub fn seed_state(now: DateTime<Utc>) -> State {
    let mut state = State::empty(SEED_CURRENCY);

    for (title, amount, kind, category, day) in SEED_TRANSACTIONS {
        let date = Utc
            .with_ymd_and_hms(now.year(), now.month(), day, 0, 0, 0)
            .single()
            .unwrap_or(now);
        state
            .transactions
            .push(Transaction::new(title, Money::new(amount), kind, category, date));
    }

    for (category, amount) in SEED_BUDGETS {
        state.budgets.push(Budget::new(category, Money::new(amount)));
    }

    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Month;

    #[test]
    fn test_seed_contents() {
        let now = Utc.with_ymd_and_hms(2025, 2, 10, 12, 0, 0).unwrap();
        let seed = seed_state(now);

        assert_eq!(seed.transactions.len(), 6);
        assert_eq!(seed.budgets.len(), 2);
        assert_eq!(seed.currency(), "INR");

        let month = Month::of(&now);
        assert!(seed.transactions.iter().all(|t| t.in_month(&month)));
        assert_eq!(seed.transactions[1].title, "Rent");
        assert_eq!(seed.transactions[1].category, "Housing");
    }

    #[test]
    fn test_seed_ids_are_unique() {
        let seed = seed_state(Utc::now());
        let ids: std::collections::HashSet<_> = seed.transactions.iter().map(|t| t.id).collect();
        assert_eq!(ids.len(), 6);
    }
}
