//! SQLite migration registry and executor.
//!
//! # Invariants
//! - `version` values must remain monotonic.
//! - Applied migration version is mirrored to `PRAGMA user_version`.
//! - Migration SQL is idempotent against databases created before
//!   versioning existed (`CREATE ... IF NOT EXISTS`).
//! - An unversioned `reminders` table is only adopted when it already has
//!   every column the reminder repository reads.

use crate::db::{DbError, DbResult};
use log::{error, info};
use rusqlite::Connection;

#[derive(Debug, Clone, Copy)]
struct Migration {
    version: u32,
    sql: &'static str,
}

/// Columns a pre-existing, unversioned `reminders` table must carry.
const LEGACY_REMINDER_COLUMNS: &[&str] = &["id", "title", "due_at", "dismissed_at", "created_at"];

const MIGRATIONS: &[Migration] = &[Migration {
    version: 1,
    sql: include_str!("0001_reminders.sql"),
}];

/// Returns the latest migration version known by this binary.
pub fn latest_version() -> u32 {
    MIGRATIONS.last().map_or(0, |migration| migration.version)
}

/// Applies all pending migrations on the provided connection in a single
/// transaction.
///
/// # Errors
/// - `DbError::UnsupportedSchemaVersion` when the database was written by a
///   newer binary.
/// - `DbError::IncompatibleReminderTable` when an unversioned database holds
///   a `reminders` table missing required columns.
/// - `DbError::Sqlite` when any migration statement fails; nothing is
///   committed in that case.
pub fn apply_migrations(conn: &mut Connection) -> DbResult<()> {
    let current_version = current_user_version(conn)?;
    let latest = latest_version();

    if current_version > latest {
        return Err(DbError::UnsupportedSchemaVersion {
            db_version: current_version,
            latest_supported: latest,
        });
    }

    if current_version == latest {
        return Ok(());
    }

    if current_version == 0 {
        check_legacy_reminder_table(conn)?;
    }

    let tx = conn.transaction()?;
    for migration in MIGRATIONS
        .iter()
        .filter(|migration| migration.version > current_version)
    {
        tx.execute_batch(migration.sql)?;
        tx.execute_batch(&format!("PRAGMA user_version = {};", migration.version))?;
    }
    tx.commit()?;

    info!(
        "event=db_migrate module=db status=ok from_version={current_version} to_version={latest}"
    );
    Ok(())
}

fn check_legacy_reminder_table(conn: &Connection) -> DbResult<()> {
    let mut stmt = conn.prepare("SELECT name FROM pragma_table_info('reminders');")?;
    let present = stmt
        .query_map([], |row| row.get::<_, String>(0))?
        .collect::<Result<Vec<_>, _>>()?;

    // No table yet: migration 1 creates it.
    if present.is_empty() {
        return Ok(());
    }

    let missing: Vec<&'static str> = LEGACY_REMINDER_COLUMNS
        .iter()
        .copied()
        .filter(|column| !present.iter().any(|name| name == *column))
        .collect();
    if missing.is_empty() {
        info!("event=db_migrate module=db status=adopt table=reminders");
        return Ok(());
    }

    error!(
        "event=db_migrate module=db status=error error_code=incompatible_reminder_table missing={}",
        missing.join(",")
    );
    Err(DbError::IncompatibleReminderTable { missing })
}

fn current_user_version(conn: &Connection) -> DbResult<u32> {
    let version = conn.query_row("PRAGMA user_version;", [], |row| row.get::<_, u32>(0))?;
    Ok(version)
}
