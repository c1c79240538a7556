//! Core reminder storage for grem.
//! This crate is the single source of truth for reminder invariants.

pub mod bootstrap;
pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;

pub use bootstrap::{
    ensure_app_dir, open_store, resolve_app_dir, AppDirStatus, BootstrapError, BootstrapResult,
};
pub use config::AppConfig;
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::reminder::{validate_title, Reminder, ReminderId, ReminderValidationError};
pub use repo::reminder_repo::{
    ReminderRepository, RepoError, RepoResult, SqliteReminderRepository,
};
