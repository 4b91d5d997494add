//! Unified application error type.
//! All modules (db, core, cli, formatters, utils) return AppError to keep the
//! error handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Invalid meta value for '{key}': {value}")]
    InvalidMeta { key: String, value: String },

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid formatter '{0}' (expected 'human' or 'json')")]
    InvalidFormatter(String),

    // ---------------------------
    // Timesheet logic errors
    // ---------------------------
    #[error("already running")]
    AlreadyRunning,

    #[error("not running")]
    NotRunning,

    #[error("no entry with ID {0} found")]
    EntryNotFound(i64),

    #[error("Can't find sheet matching \"{0}\"")]
    SheetNotFound(String),

    #[error("{0}")]
    NoEntries(String),

    #[error("invalid sheet name \"{0}\": name cannot contain spaces")]
    InvalidSheetName(String),

    // ---------------------------
    // Command dispatch errors
    // ---------------------------
    #[error("unknown command {0}")]
    UnknownCommand(String),

    #[error("ambiguous command {token} (matches: {})", candidates.join(", "))]
    AmbiguousCommand {
        token: String,
        candidates: Vec<String>,
    },

    #[error("command already exists: {0}")]
    DuplicateCommand(String),

    #[error("no command given")]
    MissingCommand,

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,
}

pub type AppResult<T> = Result<T, AppError>;
