//! Reminder domain model.
//!
//! # Responsibility
//! - Define the record persisted in the `reminders` table.
//! - Validate user-supplied fields before they reach storage.
//!
//! # Invariants
//! - `id` is assigned by SQLite and never reused.
//! - `dismissed_at` is the source of truth for active/dismissed state.
//! - `due_on` carries no time-of-day component.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Storage-assigned reminder identifier (SQLite `rowid`).
pub type ReminderId = i64;

/// A titled reminder due on a calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reminder {
    pub id: ReminderId,
    pub title: String,
    /// Serialized as `YYYY-MM-DD`.
    pub due_on: NaiveDate,
    /// `None` while the reminder is active.
    pub dismissed_at: Option<DateTime<Utc>>,
    /// Set by storage when the row is inserted.
    pub created_at: DateTime<Utc>,
}

impl Reminder {
    /// Returns whether this reminder has not been dismissed.
    pub fn is_active(&self) -> bool {
        self.dismissed_at.is_none()
    }

    /// Returns whether this reminder is due on or before `reference`.
    ///
    /// Dismissal is not considered here; callers that want active-only
    /// semantics combine it with [`Reminder::is_active`].
    pub fn is_due_by(&self, reference: NaiveDate) -> bool {
        self.due_on <= reference
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReminderValidationError {
    EmptyTitle,
}

impl Display for ReminderValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "reminder title cannot be empty"),
        }
    }
}

impl Error for ReminderValidationError {}

/// Checks a reminder title before it is persisted.
pub fn validate_title(title: &str) -> Result<(), ReminderValidationError> {
    if title.trim().is_empty() {
        return Err(ReminderValidationError::EmptyTitle);
    }
    Ok(())
}
