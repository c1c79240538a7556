//! Domain model for reminders.
//!
//! # Invariants
//! - Every reminder is identified by a storage-assigned `ReminderId`.
//! - Dismissal is a timestamp, never a hard delete.

pub mod reminder;
