use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::timesheet::Timesheet;
use crate::errors::AppResult;
use crate::formatters::FormatterKind;
use crate::utils::date::parse_optional_instant;
use crate::utils::time::Instant;

/// Everything a command action reads, parsed once before dispatch.
#[derive(Debug, Clone)]
pub struct Input {
    /// Target id after default resolution (see `resolve_default_id`).
    pub id: i64,
    /// `--id` as typed. `--id 0` counts as not given: ids start at 1.
    pub explicit_id: Option<i64>,

    pub start: Option<Instant>,
    pub end: Option<Instant>,
    pub at: Option<Instant>,
    pub filter: Option<String>,
    pub formatter: FormatterKind,

    pub command: Option<String>,
    pub note: String,

    pub now: Instant,
}

impl Input {
    pub fn from_cli(cli: &Cli, cfg: &Config, now: Instant) -> AppResult<Self> {
        let mut words = cli.args.iter();
        let command = words.next().cloned();
        let note = words
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" ")
            .trim()
            .to_string();

        let formatter = match cli.formatter {
            Some(f) => f,
            None => cfg.formatter()?,
        };

        Ok(Self {
            id: 0,
            explicit_id: cli.id.filter(|id| *id != 0),
            start: parse_optional_instant(cli.start.as_ref(), now)?,
            end: parse_optional_instant(cli.end.as_ref(), now)?,
            at: parse_optional_instant(cli.at.as_ref(), now)?,
            filter: cli.filter.clone(),
            formatter,
            command,
            note,
            now,
        })
    }

    /// Default target: the explicit id, else the running entry, else the
    /// last checked-out entry.
    pub fn resolve_default_id(&mut self, state: &Timesheet) -> AppResult<()> {
        self.id = match self.explicit_id {
            Some(id) => id,
            None => match state.current_entry()? {
                Some(running) => running.id,
                None => state.meta()?.last_checkout_id,
            },
        };
        Ok(())
    }

    /// `--start`, else `--at`, else now.
    pub fn start_time(&self) -> Instant {
        self.start.or(self.at).unwrap_or(self.now)
    }

    /// `--end`, else `--at`, else now.
    pub fn end_time(&self) -> Instant {
        self.end.or(self.at).unwrap_or(self.now)
    }

    /// Sheet chosen by the note: empty → `current`, `all`/`full` → every
    /// sheet (`None`), anything else → that sheet.
    pub fn selected_sheet(&self, current: &str) -> Option<String> {
        match self.note.as_str() {
            "" => Some(current.to_string()),
            "all" | "full" => None,
            other => Some(other.to_string()),
        }
    }
}
