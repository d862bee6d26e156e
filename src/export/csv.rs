//! CSV export of transactions

use std::io::Write;

use crate::error::{FintrackError, FintrackResult};
use crate::store::State;

const HEADER: [&str; 6] = ["id", "date", "title", "type", "category", "amount"];

/// Write every transaction, newest first
pub fn export_transactions_csv<W: Write>(state: &State, writer: W) -> FintrackResult<usize> {
    let mut csv_writer = ::csv::Writer::from_writer(writer);
    let export_err = |e: ::csv::Error| FintrackError::Export(e.to_string());

    csv_writer.write_record(HEADER).map_err(export_err)?;

    let transactions = state.transactions_by_date();
    for txn in &transactions {
        csv_writer
            .write_record([
                txn.id.as_uuid().to_string(),
                txn.date.to_rfc3339(),
                txn.title.clone(),
                txn.kind.to_string(),
                txn.category.clone(),
                format!("{:.2}", txn.amount.value()),
            ])
            .map_err(export_err)?;
    }

    csv_writer
        .flush()
        .map_err(|e| FintrackError::Export(e.to_string()))?;
    Ok(transactions.len())
}
