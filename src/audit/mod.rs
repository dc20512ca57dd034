//! Append-only audit trail of privileged actions.
//!
//! Entries are immutable: nothing in this crate updates or deletes a row of
//! `audit_logs`. Timestamps are stamped server-side at append time.

pub mod logger;
pub mod models;

pub use logger::AuditLogger;
pub use models::{ActionType, AuditLogEntry, NewAuditEntry};
