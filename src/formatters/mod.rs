//! Output formatters for entry lists (`display`).

pub mod human;
pub mod json;

use crate::errors::{AppError, AppResult};
use crate::models::entry::Entry;
use crate::utils::time::Instant;
use clap::ValueEnum;
use std::io::Write;

/// What a formatter renders: a sheet label and its ordered entries.
/// Running entries are measured against `now`.
pub struct FormatterInput<'a> {
    pub sheet: &'a str,
    pub entries: &'a [Entry],
    pub now: Instant,
}

pub trait Formatter {
    fn write(&self, out: &mut dyn Write, input: &FormatterInput<'_>) -> AppResult<()>;
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum FormatterKind {
    #[default]
    Human,
    Json,
}

impl FormatterKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormatterKind::Human => "human",
            FormatterKind::Json => "json",
        }
    }

    /// Case-insensitive name lookup, used for the configured default.
    pub fn parse(name: &str) -> AppResult<Self> {
        <Self as ValueEnum>::from_str(name.trim(), true)
            .map_err(|_| AppError::InvalidFormatter(name.to_string()))
    }

    pub fn formatter(&self) -> Box<dyn Formatter> {
        match self {
            FormatterKind::Human => Box::new(human::Human),
            FormatterKind::Json => Box::new(json::Json),
        }
    }
}
