//! Persistence backends for the store
//!
//! The store writes its whole state after every transition and reads it back
//! once at startup. Backends implement [`StateStore`]; the file backend keeps
//! everything under a single JSON document.

pub mod file_io;

use std::path::PathBuf;

use serde::Deserialize;

pub use file_io::{read_json_optional, write_json_atomic};

use crate::error::{FintrackError, FintrackResult};
use crate::models::{Budget, Transaction};
use crate::store::State;

/// Persisted data as read back from storage
///
/// Every section is optional; missing sections are simply not replayed.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PersistedState {
    pub transactions: Option<Vec<Transaction>>,
    pub budgets: Option<Vec<Budget>>,
    pub currency: Option<String>,
}

/// A place the store can save its state to and load it from
pub trait StateStore {
    /// Load persisted state, `Ok(None)` if nothing was ever saved
    fn load(&self) -> FintrackResult<Option<PersistedState>>;

    /// Overwrite persisted state with `state`
    fn save(&mut self, state: &State) -> FintrackResult<()>;
}

/// Stores state as a JSON file
#[derive(Debug, Clone)]
pub struct FileStateStore {
    path: PathBuf,
    pretty: bool,
}

impl FileStateStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path, pretty: true }
    }

    /// Write compact JSON instead of pretty-printed
    pub fn compact(mut self) -> Self {
        self.pretty = false;
        self
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl StateStore for FileStateStore {
    fn load(&self) -> FintrackResult<Option<PersistedState>> {
        read_json_optional(&self.path)
    }

    fn save(&mut self, state: &State) -> FintrackResult<()> {
        write_json_atomic(&self.path, state, self.pretty)
    }
}

/// Keeps the serialized state in memory, for tests and ephemeral sessions
///
/// State still goes through JSON so loads exercise the same parsing path as
/// the file backend.
#[derive(Debug, Clone, Default)]
pub struct MemoryStateStore {
    contents: Option<String>,
}

impl MemoryStateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from raw persisted text (which need not be valid JSON)
    pub fn with_contents(contents: impl Into<String>) -> Self {
        Self {
            contents: Some(contents.into()),
        }
    }

    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }
}

impl StateStore for MemoryStateStore {
    fn load(&self) -> FintrackResult<Option<PersistedState>> {
        match &self.contents {
            None => Ok(None),
            Some(text) => serde_json::from_str(text)
                .map(Some)
                .map_err(|e| FintrackError::Storage(format!("Failed to parse stored state: {}", e))),
        }
    }

    fn save(&mut self, state: &State) -> FintrackResult<()> {
        self.contents = Some(serde_json::to_string(state)?);
        Ok(())
    }
}
