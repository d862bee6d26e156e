//! Audit journal for fintrack
//!
//! Every action dispatched through the store is recorded with the entity it
//! touched, its before/after snapshots, and whether it changed anything.
//! Startup problems such as unreadable persisted state are recorded too.
//!
//! - `AuditEntry`: one journal record
//! - `AuditLogger`: appends entries to `audit.log` as JSON lines
//! - `describe_changes`: field-level summary used for update entries

mod diff;
mod entry;
mod logger;

pub use diff::describe_changes;
pub use entry::{AuditEntry, EntityType};
pub use logger::AuditLogger;
