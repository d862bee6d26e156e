//! fintrack - personal finance tracking from the terminal
//!
//! Tracks income and expenses, monitors monthly budgets per category and
//! ships a small library of financial calculators (loan EMI and amortization,
//! SIP projections, static-rate currency conversion).
//!
//! # Architecture
//!
//! - `models`: transactions, budgets, months and ids
//! - `finance`: pure financial formulas and aggregations
//! - `store`: the single state tree, its actions and the pure reducer
//! - `storage`: persistence backends behind the `StateStore` trait
//! - `audit`: JSON-lines journal of every dispatched action
//! - `reports`: summaries computed from store snapshots
//! - `display`, `export`: terminal tables and JSON/CSV output
//! - `cli`, `tui`: the command line and the terminal dashboard
//! - `config`: paths and user settings
//!
//! # Example
//!
//! ```rust,ignore
//! use fintrack::config::{FintrackPaths, Settings};
//! use fintrack::storage::FileStateStore;
//! use fintrack::store::{Action, Store};
//!
//! let paths = FintrackPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let mut store = Store::open(FileStateStore::new(paths.state_file()), &settings, None);
//! store.dispatch(Action::SetCurrency("USD".into()))?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod finance;
pub mod models;
pub mod reports;
pub mod storage;
pub mod store;
pub mod tui;

pub use error::{FintrackError, FintrackResult};
