//! Reminder repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide insert and lookup APIs over the `reminders` table.
//! - Own the due-date filtering contract (active only, calendar-day
//!   comparison, ordered by due date then id).
//!
//! # Invariants
//! - Write paths must call `validate_title()` before SQL mutations.
//! - Read paths reject invalid persisted state instead of masking it.

use crate::db::DbError;
use crate::model::reminder::{validate_title, Reminder, ReminderId, ReminderValidationError};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use log::{debug, error, info};
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

// `date()`/`datetime()` normalize rows written with a time-of-day or zone
// suffix, so parsing below only has to handle one layout per column. They
// yield NULL for unparseable input, hence the `*_set` flags on the raw
// columns.
const REMINDER_SELECT_SQL: &str = "SELECT
    id,
    title,
    date(due_at) AS due_on,
    datetime(dismissed_at) AS dismissed_at,
    dismissed_at IS NOT NULL AS dismissed_set,
    datetime(created_at) AS created_at
FROM reminders";

const DATE_LAYOUT: &str = "%Y-%m-%d";
const TIMESTAMP_LAYOUT: &str = "%Y-%m-%d %H:%M:%S";

pub type RepoResult<T> = Result<T, RepoError>;

/// Error returned by reminder persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    /// Input rejected before touching storage.
    Validation(ReminderValidationError),
    /// Opening, migrating or querying the database failed.
    Storage(DbError),
    /// No row matched the requested id.
    NotFound(ReminderId),
    /// A stored row could not be mapped back to a `Reminder`.
    InvalidData(String),
}

impl RepoError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Storage(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "reminder not found: {id}"),
            Self::InvalidData(message) => write!(f, "invalid persisted reminder data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Storage(err) => Some(err),
            Self::NotFound(_) | Self::InvalidData(_) => None,
        }
    }
}

impl From<ReminderValidationError> for RepoError {
    fn from(value: ReminderValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Storage(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Storage(DbError::Sqlite(value))
    }
}

/// Repository interface for reminder operations.
pub trait ReminderRepository {
    /// Inserts an active reminder and returns its storage-assigned id.
    fn insert(&self, title: &str, due_on: NaiveDate) -> RepoResult<ReminderId>;

    /// Looks up one reminder, dismissed or not.
    fn get(&self, id: ReminderId) -> RepoResult<Reminder>;

    /// Returns active reminders due on or before `reference`, ordered by due
    /// date then id.
    fn get_due(&self, reference: NaiveDate) -> RepoResult<Vec<Reminder>>;

    /// Same as [`ReminderRepository::get_due`] for the current UTC date.
    fn get_due_today(&self) -> RepoResult<Vec<Reminder>> {
        self.get_due(Utc::now().date_naive())
    }
}

/// SQLite-backed reminder repository.
pub struct SqliteReminderRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteReminderRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl ReminderRepository for SqliteReminderRepository<'_> {
    fn insert(&self, title: &str, due_on: NaiveDate) -> RepoResult<ReminderId> {
        validate_title(title)?;

        if let Err(err) = self.conn.execute(
            "INSERT INTO reminders (title, due_at) VALUES (?1, ?2);",
            params![title, due_on],
        ) {
            error!(
                "event=reminder_insert module=repo status=error error_code=insert_failed error={err}"
            );
            return Err(err.into());
        }

        let id = self.conn.last_insert_rowid();
        info!("event=reminder_insert module=repo status=ok id={id} due_on={due_on}");
        Ok(id)
    }

    fn get(&self, id: ReminderId) -> RepoResult<Reminder> {
        let mut stmt = self
            .conn
            .prepare(&format!("{REMINDER_SELECT_SQL} WHERE id = ?1;"))?;

        let raw = stmt.query_row([id], RawReminder::from_row).optional()?;
        match raw {
            Some(raw) => raw.into_reminder(),
            None => {
                debug!("event=reminder_get module=repo status=not_found id={id}");
                Err(RepoError::NotFound(id))
            }
        }
    }

    fn get_due(&self, reference: NaiveDate) -> RepoResult<Vec<Reminder>> {
        let mut stmt = self.conn.prepare(&format!(
            "{REMINDER_SELECT_SQL}
             WHERE dismissed_at IS NULL
               AND date(due_at) <= date(?1)
             ORDER BY date(due_at) ASC, id ASC;"
        ))?;

        let mut rows = stmt.query([reference])?;
        let mut reminders = Vec::new();
        while let Some(row) = rows.next()? {
            reminders.push(RawReminder::from_row(row)?.into_reminder()?);
        }

        debug!(
            "event=reminder_get_due module=repo status=ok reference={reference} count={}",
            reminders.len()
        );
        Ok(reminders)
    }
}

/// Column values as SQLite hands them back, before date parsing.
struct RawReminder {
    id: ReminderId,
    title: String,
    due_on: Option<String>,
    dismissed_at: Option<String>,
    dismissed_set: bool,
    created_at: Option<String>,
}

impl RawReminder {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            title: row.get("title")?,
            due_on: row.get("due_on")?,
            dismissed_at: row.get("dismissed_at")?,
            dismissed_set: row.get("dismissed_set")?,
            created_at: row.get("created_at")?,
        })
    }

    fn into_reminder(self) -> RepoResult<Reminder> {
        let id = self.id;
        // Whitespace-only titles predate insert-time validation; only a
        // truly empty title is unreadable.
        if self.title.is_empty() {
            return Err(RepoError::InvalidData(format!(
                "empty title in reminders.title for id {id}"
            )));
        }

        let due_text = self.due_on.ok_or_else(|| {
            RepoError::InvalidData(format!("unparseable reminders.due_at for id {id}"))
        })?;
        let due_on = NaiveDate::parse_from_str(&due_text, DATE_LAYOUT).map_err(|_| {
            RepoError::InvalidData(format!(
                "invalid due date `{due_text}` in reminders.due_at for id {id}"
            ))
        })?;

        let dismissed_at = match (self.dismissed_at, self.dismissed_set) {
            (Some(text), _) => Some(parse_timestamp(&text, "dismissed_at", id)?),
            (None, false) => None,
            (None, true) => {
                return Err(RepoError::InvalidData(format!(
                    "unparseable reminders.dismissed_at for id {id}"
                )))
            }
        };

        let created_text = self.created_at.ok_or_else(|| {
            RepoError::InvalidData(format!("unparseable reminders.created_at for id {id}"))
        })?;
        let created_at = parse_timestamp(&created_text, "created_at", id)?;

        Ok(Reminder {
            id,
            title: self.title,
            due_on,
            dismissed_at,
            created_at,
        })
    }
}

fn parse_timestamp(value: &str, column: &str, id: ReminderId) -> RepoResult<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(value, TIMESTAMP_LAYOUT)
        .map(|naive| naive.and_utc())
        .map_err(|_| {
            RepoError::InvalidData(format!(
                "invalid timestamp `{value}` in reminders.{column} for id {id}"
            ))
        })
}
