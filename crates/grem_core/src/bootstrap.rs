//! Startup sequence that prepares the application directory and database.
//!
//! # Responsibility
//! - Resolve the application directory (home-relative or overridden).
//! - Create the directory when, and only when, it is truly absent.
//! - Open the reminder database with migrations applied.
//!
//! # Invariants
//! - Every step is idempotent; running bootstrap twice changes nothing.
//! - A stat failure other than not-found is reported, never treated as
//!   "absent".

use crate::config::AppConfig;
use crate::db::{open_db, DbError};
use rusqlite::Connection;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io;
use std::path::{Path, PathBuf};

pub type BootstrapResult<T> = Result<T, BootstrapError>;

#[derive(Debug)]
pub enum BootstrapError {
    HomeDirUnavailable,
    Stat { path: PathBuf, source: io::Error },
    CreateDir { path: PathBuf, source: io::Error },
    NotADirectory(PathBuf),
    Db(DbError),
}

impl Display for BootstrapError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::HomeDirUnavailable => write!(f, "unable to determine the user's home directory"),
            Self::Stat { path, source } => {
                write!(f, "unable to inspect `{}`: {source}", path.display())
            }
            Self::CreateDir { path, source } => write!(
                f,
                "unable to create the config directory `{}`: {source}",
                path.display()
            ),
            Self::NotADirectory(path) => {
                write!(f, "`{}` exists but is not a directory", path.display())
            }
            Self::Db(err) => write!(f, "unable to open the reminder database: {err}"),
        }
    }
}

impl Error for BootstrapError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Stat { source, .. } | Self::CreateDir { source, .. } => Some(source),
            Self::Db(err) => Some(err),
            Self::HomeDirUnavailable | Self::NotADirectory(_) => None,
        }
    }
}

impl From<DbError> for BootstrapError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

/// Outcome of [`ensure_app_dir`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppDirStatus {
    Existing,
    Created,
}

/// Returns `override_dir` (made absolute) when given, otherwise the
/// configured directory under the user's home.
pub fn resolve_app_dir(
    config: &AppConfig,
    override_dir: Option<&Path>,
) -> BootstrapResult<PathBuf> {
    if let Some(dir) = override_dir {
        return std::path::absolute(dir).map_err(|source| BootstrapError::Stat {
            path: dir.to_path_buf(),
            source,
        });
    }

    let home = dirs::home_dir().ok_or(BootstrapError::HomeDirUnavailable)?;
    Ok(config.app_dir_in(&home))
}

/// Creates `path` if it does not exist yet.
///
/// Runs before file logging exists (logs live inside `path`), so the
/// outcome is returned for the caller to record.
///
/// # Errors
/// - `Stat` when the path cannot be inspected for a reason other than
///   not-found (permissions, I/O).
/// - `NotADirectory` when something other than a directory is in the way.
/// - `CreateDir` when creation fails.
pub fn ensure_app_dir(path: &Path) -> BootstrapResult<AppDirStatus> {
    match std::fs::metadata(path) {
        Ok(meta) if meta.is_dir() => Ok(AppDirStatus::Existing),
        Ok(_) => Err(BootstrapError::NotADirectory(path.to_path_buf())),
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            std::fs::create_dir(path).map_err(|source| BootstrapError::CreateDir {
                path: path.to_path_buf(),
                source,
            })?;
            Ok(AppDirStatus::Created)
        }
        Err(source) => Err(BootstrapError::Stat {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Opens the reminder database inside `app_dir`, applying migrations.
pub fn open_store(config: &AppConfig, app_dir: &Path) -> BootstrapResult<Connection> {
    let conn = open_db(config.db_path(app_dir))?;
    Ok(conn)
}
