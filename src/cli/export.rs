//! Export CLI commands

use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;

use clap::Subcommand;

use crate::config::{FintrackPaths, Settings};
use crate::error::{FintrackError, FintrackResult};
use crate::export::{export_json_to_dir, export_transactions_csv};
use crate::models::local_today;
use crate::storage::StateStore;
use crate::store::Store;

/// Export subcommands
#[derive(Subcommand)]
pub enum ExportCommands {
    /// Write all data as expense-tracker-data-<date>.json
    Json {
        /// Directory to write into, defaults to the exports directory
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Write transactions as CSV
    Csv {
        /// Output file, stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Handle an export command
pub fn handle_export_command<S: StateStore>(
    store: &Store<S>,
    settings: &Settings,
    paths: &FintrackPaths,
    cmd: ExportCommands,
) -> FintrackResult<()> {
    match cmd {
        ExportCommands::Json { output } => {
            let dir = output.unwrap_or_else(|| paths.export_dir());
            let today = local_today();
            let path = export_json_to_dir(store.state(), &dir, today, settings.pretty_json)?;
            println!("Exported data to {}", path.display());
        }
        ExportCommands::Csv { output: Some(path) } => {
            let file = File::create(&path).map_err(|e| {
                FintrackError::Export(format!("Failed to create {}: {}", path.display(), e))
            })?;
            let count = export_transactions_csv(store.state(), BufWriter::new(file))?;
            println!("Exported {} transactions to {}", count, path.display());
        }
        ExportCommands::Csv { output: None } => {
            export_transactions_csv(store.state(), io::stdout().lock())?;
        }
    }

    Ok(())
}
