//! Audit journal viewer

use crate::audit::AuditLogger;
use crate::config::FintrackPaths;
use crate::error::FintrackResult;

/// Print the most recent journal entries, oldest first
pub fn handle_log_command(paths: &FintrackPaths, count: usize) -> FintrackResult<()> {
    let logger = AuditLogger::new(paths.audit_log());
    let entries = logger.read_recent(count)?;

    if entries.is_empty() {
        println!("No journal entries yet.");
        return Ok(());
    }

    for entry in &entries {
        println!("{}", entry.summary());
    }
    println!(
        "\nShowing {} of {} entries",
        entries.len(),
        logger.entry_count()?
    );
    Ok(())
}
