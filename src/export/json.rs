//! JSON export
//!
//! The exported document has exactly the persisted layout:
//! `{ "transactions": [...], "budgets": [...], "currency": "INR" }`.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::error::{FintrackError, FintrackResult};
use crate::store::State;

/// `expense-tracker-data-<YYYY-MM-DD>.json`
pub fn export_file_name(date: NaiveDate) -> String {
    format!("expense-tracker-data-{}.json", date.format("%Y-%m-%d"))
}

/// Write the state as JSON
pub fn export_json<W: Write>(state: &State, writer: &mut W, pretty: bool) -> FintrackResult<()> {
    if pretty {
        serde_json::to_writer_pretty(&mut *writer, state)
    } else {
        serde_json::to_writer(&mut *writer, state)
    }
    .map_err(|e| FintrackError::Export(format!("Failed to serialize export: {}", e)))?;

    writeln!(writer).map_err(|e| FintrackError::Export(e.to_string()))?;
    Ok(())
}

/// Write the dated export file into `dir`, returning its path
pub fn export_json_to_dir(
    state: &State,
    dir: &Path,
    date: NaiveDate,
    pretty: bool,
) -> FintrackResult<PathBuf> {
    std::fs::create_dir_all(dir).map_err(|e| {
        FintrackError::Export(format!("Failed to create {}: {}", dir.display(), e))
    })?;

    let path = dir.join(export_file_name(date));
    let file = File::create(&path).map_err(|e| {
        FintrackError::Export(format!("Failed to create {}: {}", path.display(), e))
    })?;

    let mut writer = BufWriter::new(file);
    export_json(state, &mut writer, pretty)?;
    writer
        .flush()
        .map_err(|e| FintrackError::Export(e.to_string()))?;

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::seed_state;
    use chrono::Utc;
    use tempfile::TempDir;

    #[test]
    fn test_file_name() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 9).unwrap();
        assert_eq!(export_file_name(date), "expense-tracker-data-2025-03-09.json");
    }

    #[test]
    fn test_export_matches_persisted_layout() {
        let state = seed_state(Utc::now());
        let mut buffer = Vec::new();
        export_json(&state, &mut buffer, false).unwrap();

        let parsed: State = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(parsed, state);

        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(value["currency"], "INR");
        assert_eq!(value["transactions"][0]["type"], "income");
    }

    #[test]
    fn test_export_to_dir() {
        let temp_dir = TempDir::new().unwrap();
        let date = NaiveDate::from_ymd_opt(2025, 12, 31).unwrap();

        let path = export_json_to_dir(&State::default(), temp_dir.path(), date, true).unwrap();
        assert!(path.ends_with("expense-tracker-data-2025-12-31.json"));
        assert!(std::fs::read_to_string(path).unwrap().contains("\"budgets\": []"));
    }
}
