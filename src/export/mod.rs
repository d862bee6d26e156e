//! Export of store data
//!
//! - JSON: the full state in its persisted layout
//! - CSV: transactions, one row each, for spreadsheets

pub mod csv;
pub mod json;

pub use self::csv::export_transactions_csv;
pub use self::json::{export_file_name, export_json, export_json_to_dir};
