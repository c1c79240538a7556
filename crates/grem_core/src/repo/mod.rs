//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts for reminders.
//! - Isolate SQLite query details from the front end.
//!
//! # Invariants
//! - Write paths validate input before any SQL mutation.
//! - Repository APIs return semantic errors (`NotFound`, `Validation`) in
//!   addition to storage errors.

pub mod reminder_repo;
