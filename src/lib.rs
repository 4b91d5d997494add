//! rTimesheet library root.
//! Exposes the state engine, the command table and the high-level run()
//! function used by main.rs.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod formatters;
pub mod models;
pub mod ui;
pub mod utils;

use crate::cli::commands::{Session, build_table, usage};
use crate::cli::input::Input;
use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::command_table::CommandTable;
use crate::core::timesheet::Timesheet;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::error;
use std::process::ExitCode;

/// Run the command named by the first positional word.
///
/// Errors raised before dispatch (configuration, dates, database) are
/// returned; errors from the command itself are reported here together
/// with the usage text and turned into a failing exit code.
pub fn run() -> AppResult<ExitCode> {
    let cli = Cli::parse_args();

    let mut cfg = if cli.test {
        Config::default()
    } else {
        Config::load()?
    };
    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }

    let now = utils::time::now();
    let mut input = Input::from_cli(&cli, &cfg, now)?;

    let state = Timesheet::open(&cfg.database_path())?;
    input.resolve_default_id(&state)?;

    let session = Session {
        cfg,
        input,
        state,
        test_mode: cli.test,
    };
    let table = build_table(&session)?;

    Ok(dispatch(&session, &table))
}

/// Dispatch the session's command through `table`.
pub fn dispatch(session: &Session, table: &CommandTable<'_>) -> ExitCode {
    let result = match session.input.command.as_deref() {
        Some(token) => table.dispatch(token),
        None => Err(AppError::MissingCommand),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(AppError::MissingCommand) => {
            eprint!("{}", usage(table));
            ExitCode::FAILURE
        }
        Err(e) => {
            error(&e);
            eprintln!();
            eprint!("{}", usage(table));
            ExitCode::FAILURE
        }
    }
}
