//! Terminal dashboard
//!
//! A ratatui front end over the same [`Store`](crate::store::Store) the CLI
//! uses. It has three views (overview, transactions and budgets), reads state
//! snapshots for rendering, and changes data only through `dispatch`.

pub mod app;
pub mod event;
pub mod handler;
pub mod layout;
pub mod terminal;
pub mod views;

pub use app::App;
pub use terminal::run_tui;
