//! Command execution against a reminder repository.
//!
//! # Responsibility
//! - Turn parsed CLI input into repository calls.
//! - Format reminders for the terminal.
//!
//! # Invariants
//! - Input is validated before any write reaches the repository.
//! - A missing reminder is reported, never treated as a failure.

use crate::cli::{AddArgs, Command, ShowArgs};
use crate::error::{CliError, CliResult};
use chrono::NaiveDate;
use grem_core::{AppConfig, Reminder, ReminderRepository, RepoError};
use log::{debug, warn};
use std::io::Write;

pub struct Frontend<'a, R> {
    repo: R,
    config: &'a AppConfig,
}

impl<'a, R: ReminderRepository> Frontend<'a, R> {
    pub fn new(repo: R, config: &'a AppConfig) -> Self {
        Self { repo, config }
    }

    /// Runs `command`, or lists due reminders when no subcommand was given.
    ///
    /// Regular output goes to `out`; recoverable notices (such as a missing
    /// reminder) go to `notices`.
    pub fn run<W: Write, N: Write>(
        &self,
        command: Option<Command>,
        date: Option<&str>,
        out: &mut W,
        notices: &mut N,
    ) -> CliResult<()> {
        if let (Some(raw), Some(command)) = (date, command.as_ref()) {
            return Err(CliError::usage(
                None,
                format!(
                    "--date {raw} only applies to listing and cannot be combined with `{}`",
                    command.name()
                ),
            ));
        }

        match command {
            None => self.list_due(date, out),
            Some(Command::Add(args)) => self.add(args, out),
            Some(Command::Show(args)) => self.show(args, out, notices),
        }
    }

    fn list_due<W: Write>(&self, date: Option<&str>, out: &mut W) -> CliResult<()> {
        let reminders = match date {
            Some(raw) => self.repo.get_due(self.parse_date(raw, None)?)?,
            None => self.repo.get_due_today()?,
        };
        debug!(
            "event=cli_list module=cli status=ok count={}",
            reminders.len()
        );

        if reminders.is_empty() {
            writeln!(out, "No reminders due.")?;
            return Ok(());
        }
        for reminder in &reminders {
            self.write_line(out, reminder)?;
        }
        Ok(())
    }

    fn add<W: Write>(&self, args: AddArgs, out: &mut W) -> CliResult<()> {
        let title = args.title.as_deref().map(str::trim).unwrap_or_default();
        let (title, due) = match (title, args.due.as_deref()) {
            (title, Some(due)) if !title.is_empty() => (title, due),
            _ => {
                return Err(CliError::usage(
                    Some("add"),
                    "title and due date are required",
                ))
            }
        };
        let due_on = self.parse_date(due, Some("add"))?;

        let id = match self.repo.insert(title, due_on) {
            Ok(id) => id,
            Err(RepoError::Validation(err)) => {
                return Err(CliError::usage(Some("add"), err.to_string()))
            }
            Err(err) => return Err(err.into()),
        };
        writeln!(out, "Reminder added: {id}")?;
        Ok(())
    }

    fn show<W: Write, N: Write>(
        &self,
        args: ShowArgs,
        out: &mut W,
        notices: &mut N,
    ) -> CliResult<()> {
        let reminder = match self.repo.get(args.id) {
            Ok(reminder) => reminder,
            Err(err) if err.is_not_found() => {
                warn!("event=cli_show module=cli status=not_found id={}", args.id);
                writeln!(notices, "Reminder not found: {}", args.id)?;
                return Ok(());
            }
            Err(err) => return Err(err.into()),
        };

        self.write_line(out, &reminder)?;
        writeln!(out, "  created:   {}", reminder.created_at.to_rfc3339())?;
        match reminder.dismissed_at {
            Some(at) => writeln!(out, "  dismissed: {}", at.to_rfc3339())?,
            None => writeln!(out, "  status:    active")?,
        }
        Ok(())
    }

    fn write_line<W: Write>(&self, out: &mut W, reminder: &Reminder) -> CliResult<()> {
        writeln!(
            out,
            "{}  #{}  {}",
            reminder.due_on.format(&self.config.due_date_format),
            reminder.id,
            reminder.title
        )?;
        Ok(())
    }

    fn parse_date(&self, raw: &str, command: Option<&'static str>) -> CliResult<NaiveDate> {
        NaiveDate::parse_from_str(raw.trim(), &self.config.due_date_format).map_err(|err| {
            CliError::usage(
                command,
                format!(
                    "invalid date `{raw}` ({err}); expected format `{}`",
                    self.config.due_date_format
                ),
            )
        })
    }
}
