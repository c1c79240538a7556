//! Error type returned by `grem` commands.

use grem_core::{BootstrapError, RepoError};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug)]
pub enum CliError {
    /// Missing or malformed user input. `command` names the subcommand whose
    /// usage should be shown.
    Usage {
        command: Option<&'static str>,
        message: String,
    },
    Repo(RepoError),
    Bootstrap(BootstrapError),
    Io(io::Error),
}

impl CliError {
    pub fn usage(command: Option<&'static str>, message: impl Into<String>) -> Self {
        Self::Usage {
            command,
            message: message.into(),
        }
    }

    /// Process exit code for this error.
    pub fn exit_code(&self) -> u8 {
        1
    }
}

impl Display for CliError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Usage { message, .. } => write!(f, "{message}"),
            Self::Repo(err) => write!(f, "{err}"),
            Self::Bootstrap(err) => write!(f, "{err}"),
            Self::Io(err) => write!(f, "failed to write output: {err}"),
        }
    }
}

impl Error for CliError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Usage { .. } => None,
            Self::Repo(err) => Some(err),
            Self::Bootstrap(err) => Some(err),
            Self::Io(err) => Some(err),
        }
    }
}

impl From<RepoError> for CliError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

impl From<BootstrapError> for CliError {
    fn from(value: BootstrapError) -> Self {
        Self::Bootstrap(value)
    }
}

impl From<io::Error> for CliError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}
