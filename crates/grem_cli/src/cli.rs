//! Command-line surface for `grem`.

use clap::{Args, CommandFactory, Parser, Subcommand};
use grem_core::ReminderId;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "grem", version)]
#[command(about = "A program for managing terminal-based reminders")]
pub struct Cli {
    /// Application directory holding the database and logs [default: ~/.grem]
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// File log level (trace, debug, info, warn, error)
    #[arg(long, global = true, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// List reminders due on or before this date instead of today
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub date: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Schedule a new reminder
    Add(AddArgs),
    /// Show a single reminder
    Show(ShowArgs),
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Add(_) => "add",
            Self::Show(_) => "show",
        }
    }
}

// Both flags are optional here so a missing one is reported by the command
// with exit code 1 instead of clap's usage exit code.
#[derive(Debug, Args)]
pub struct AddArgs {
    /// Reminder's title
    #[arg(short, long)]
    pub title: Option<String>,

    /// Reminder's due date in the YYYY-MM-DD format
    #[arg(short, long, value_name = "YYYY-MM-DD")]
    pub due: Option<String>,
}

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Reminder id
    pub id: ReminderId,
}

/// Renders the usage line for `subcommand`, or for the top-level command
/// when `None` or unknown.
pub fn usage_text(subcommand: Option<&str>) -> String {
    let mut command = Cli::command();
    if let Some(sub) = subcommand.and_then(|name| command.find_subcommand(name)) {
        let mut sub = sub.clone().bin_name(format!("grem {}", sub.get_name()));
        return sub.render_usage().to_string();
    }
    command.render_usage().to_string()
}

#[cfg(test)]
mod tests {
    use super::{usage_text, Cli, Command};
    use clap::error::ErrorKind;
    use clap::{CommandFactory, Parser};

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_arguments_lists_due_reminders() {
        let cli = Cli::try_parse_from(["grem"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.date.is_none());
    }

    #[test]
    fn add_accepts_short_and_long_flags() {
        let cli = Cli::try_parse_from(["grem", "add", "-t", "Pay rent", "--due", "2024-12-28"])
            .unwrap();
        match cli.command {
            Some(Command::Add(args)) => {
                assert_eq!(args.title.as_deref(), Some("Pay rent"));
                assert_eq!(args.due.as_deref(), Some("2024-12-28"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn add_without_due_still_parses() {
        let cli = Cli::try_parse_from(["grem", "add", "--title", "Pay rent"]).unwrap();
        assert!(matches!(cli.command, Some(Command::Add(ref args)) if args.due.is_none()));
    }

    #[test]
    fn unknown_subcommand_is_rejected_by_name() {
        let err = Cli::try_parse_from(["grem", "foo"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidSubcommand);
        assert!(err.to_string().contains("foo"));
        assert_ne!(err.exit_code(), 0);
    }

    #[test]
    fn global_flags_are_accepted_after_subcommand() {
        let cli =
            Cli::try_parse_from(["grem", "show", "3", "--data-dir", "/tmp/grem-test"]).unwrap();
        assert_eq!(cli.data_dir.as_deref(), Some(std::path::Path::new("/tmp/grem-test")));
        assert!(matches!(cli.command, Some(Command::Show(ref args)) if args.id == 3));
    }

    #[test]
    fn usage_text_names_subcommand_flags() {
        let usage = usage_text(Some("add"));
        assert!(usage.contains("grem add"));
        assert!(usage_text(None).contains("grem"));
    }
}
