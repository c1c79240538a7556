//! `grem`: terminal reminders.
//!
//! # Responsibility
//! - Bootstrap the application directory, logging and database.
//! - Dispatch the parsed command and map failures to exit codes.

mod cli;
mod commands;
mod error;

use clap::Parser;
use cli::{usage_text, Cli};
use commands::Frontend;
use error::{CliError, CliResult};
use grem_core::{
    default_log_level, ensure_app_dir, init_logging, open_store, resolve_app_dir, AppConfig,
    AppDirStatus, SqliteReminderRepository,
};
use log::{error, info};
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = AppConfig::default();

    match run(cli, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("event=cli_exit module=cli status=error error={err}");
            eprintln!("Error: {err}");
            if let CliError::Usage { command, .. } = &err {
                eprintln!("\n{}", usage_text(*command));
            }
            ExitCode::from(err.exit_code())
        }
    }
}

fn run(cli: Cli, config: &AppConfig) -> CliResult<()> {
    let app_dir = resolve_app_dir(config, cli.data_dir.as_deref())?;
    let dir_status = ensure_app_dir(&app_dir)?;

    let level = cli.log_level.as_deref().unwrap_or(default_log_level());
    if let Err(message) = init_logging(level, &config.log_dir(&app_dir)) {
        eprintln!("warning: file logging disabled: {message}");
    }
    if dir_status == AppDirStatus::Created {
        info!(
            "event=app_dir_create module=bootstrap status=ok path={}",
            app_dir.display()
        );
        eprintln!("Created config directory in {}", app_dir.display());
    }

    // Dropped at the end of this function, which closes the database.
    let conn = open_store(config, &app_dir)?;
    let frontend = Frontend::new(SqliteReminderRepository::new(&conn), config);

    let stdout = io::stdout();
    let stderr = io::stderr();
    frontend.run(
        cli.command,
        cli.date.as_deref(),
        &mut stdout.lock(),
        &mut stderr.lock(),
    )
}
