//! User settings for fintrack
//!
//! Display preferences and journal settings. The active currency is part of
//! the store, not of these settings; `default_currency` only seeds an empty
//! or currency-less rehydration.

use serde::{Deserialize, Serialize};

use super::paths::FintrackPaths;
use crate::error::FintrackError;

/// User settings for fintrack
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency used when persisted state carries none
    #[serde(default = "default_currency")]
    pub default_currency: String,

    /// Render currency symbols in amounts
    #[serde(default = "default_true")]
    pub show_symbol: bool,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Record every dispatched action in the audit journal
    #[serde(default = "default_true")]
    pub audit_enabled: bool,

    /// Pretty-print JSON exports
    #[serde(default = "default_true")]
    pub pretty_json: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "INR".to_string()
}

fn default_date_format() -> String {
    "%b %-d, %Y".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            default_currency: default_currency(),
            show_symbol: true,
            date_format: default_date_format(),
            audit_enabled: true,
            pretty_json: true,
        }
    }
}

impl Settings {
    /// Load settings from disk, or return defaults if the file doesn't exist
    pub fn load_or_create(paths: &FintrackPaths) -> Result<Self, FintrackError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            // Don't save yet - let caller decide when to persist
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| FintrackError::Io(format!("Failed to read settings file: {}", e)))?;

        serde_json::from_str(&contents)
            .map_err(|e| FintrackError::Config(format!("Failed to parse settings file: {}", e)))
    }

    /// Save settings to disk
    pub fn save(&self, paths: &FintrackPaths) -> Result<(), FintrackError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| FintrackError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| FintrackError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
