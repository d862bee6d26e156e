//! The application store
//!
//! A single [`State`] owned by a [`Store`]. Every change goes through
//! [`Store::dispatch`], which runs the pure [`reduce`] function, records the
//! transition in the audit journal and persists the new state.
//!
//! At startup the store rehydrates from its [`StateStore`] by replaying the
//! persisted transactions, budgets and currency through the same reducer,
//! starting from an empty state.

pub mod action;
pub mod reducer;
pub mod seed;
pub mod state;

use chrono::{DateTime, NaiveTime, Utc};

pub use action::Action;
pub use reducer::reduce;
pub use seed::{seed_state, SEED_CURRENCY};
pub use state::{AppSettings, State};

use crate::audit::{AuditEntry, AuditLogger};
use crate::config::Settings;
use crate::error::FintrackResult;
use crate::models::local_today;
use crate::storage::{PersistedState, StateStore};

/// How the store obtained its initial state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Persisted data was replayed
    Restored,
    /// Nothing was persisted; seed data was used and saved
    Seeded,
    /// Persisted data could not be read; seed data is in use
    Recovered(String),
}

/// Result of a dispatch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Applied,
    /// The reducer returned an equal state (unknown ID, taken category, ...)
    Unchanged,
}

/// Owns the state and mediates every change to it
pub struct Store<S: StateStore> {
    state: State,
    seed: State,
    storage: S,
    journal: Option<AuditLogger>,
    warnings: Vec<String>,
    load_outcome: LoadOutcome,
}

impl<S: StateStore> Store<S> {
    /// Open a store, rehydrating from `storage`
    pub fn open(storage: S, settings: &Settings, journal: Option<AuditLogger>) -> Self {
        let today = local_today().and_time(NaiveTime::MIN).and_utc();
        Self::open_at(storage, settings, journal, today)
    }

    /// Open a store with seed data dated relative to `now`
    pub fn open_at(
        mut storage: S,
        settings: &Settings,
        journal: Option<AuditLogger>,
        now: DateTime<Utc>,
    ) -> Self {
        let seed = seed_state(now);
        let mut warnings = Vec::new();

        let (state, load_outcome) = match storage.load() {
            Ok(Some(persisted)) => (
                rehydrate(persisted, &settings.default_currency, &seed),
                LoadOutcome::Restored,
            ),
            Ok(None) => {
                // Persist right away so seed IDs stay stable across runs
                if let Err(e) = storage.save(&seed) {
                    warnings.push(format!("Could not save initial data: {}", e));
                }
                (seed.clone(), LoadOutcome::Seeded)
            }
            Err(e) => {
                let reason = e.to_string();
                warnings.push(format!(
                    "Saved data could not be read, starting from sample data ({})",
                    reason
                ));
                if let Some(journal) = &journal {
                    if let Err(log_err) = journal.log(&AuditEntry::load_failed(reason.clone())) {
                        warnings.push(format!("Audit journal unavailable: {}", log_err));
                    }
                }
                (seed.clone(), LoadOutcome::Recovered(reason))
            }
        };

        Self {
            state,
            seed,
            storage,
            journal,
            warnings,
            load_outcome,
        }
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    /// Data restored by [`Action::ResetData`]
    pub fn seed(&self) -> &State {
        &self.seed
    }

    pub fn load_outcome(&self) -> &LoadOutcome {
        &self.load_outcome
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    /// Apply an action, journal it and persist the result
    ///
    /// The transition is kept in memory even if saving fails; the error is
    /// returned so callers can report it.
    pub fn dispatch(&mut self, action: Action) -> FintrackResult<Outcome> {
        let next = reduce(&self.state, action.clone(), &self.seed);
        let outcome = if next == self.state {
            Outcome::Unchanged
        } else {
            Outcome::Applied
        };

        if let Some(journal) = &self.journal {
            let entry = AuditEntry::for_transition(&action, &self.state, &next);
            if let Err(e) = journal.log(&entry) {
                self.warnings
                    .push(format!("Audit journal unavailable: {}", e));
            }
        }

        self.state = next;
        self.storage.save(&self.state)?;

        Ok(outcome)
    }

    /// Drain warnings collected since the last call
    pub fn take_warnings(&mut self) -> Vec<String> {
        std::mem::take(&mut self.warnings)
    }
}

/// Replay persisted sections onto an empty state
fn rehydrate(persisted: PersistedState, default_currency: &str, seed: &State) -> State {
    let mut state = State::empty(default_currency);

    for txn in persisted.transactions.unwrap_or_default() {
        state = reduce(&state, Action::AddTransaction(txn), seed);
    }
    for budget in persisted.budgets.unwrap_or_default() {
        state = reduce(&state, Action::AddBudget(budget), seed);
    }
    if let Some(currency) = persisted.currency {
        state = reduce(&state, Action::SetCurrency(currency), seed);
    }

    state
}
