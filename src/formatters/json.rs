use crate::core::timesheet::aggregate;
use crate::errors::AppResult;
use crate::formatters::{Formatter, FormatterInput};
use crate::utils::format_duration;
use crate::utils::time::Instant;
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Serialize)]
struct OutputEntry {
    id: i64,
    start: Instant,
    end: Option<Instant>,
    note: String,
    duration: String,
}

#[derive(Debug, Serialize)]
struct OutputSheet {
    name: String,
    sheet_time: String,
    entries: Vec<OutputEntry>,
}

#[derive(Debug, Serialize)]
struct Output {
    sheets: Vec<OutputSheet>,
    total_time: String,
}

/// Entries grouped by sheet (first appearance order) with per-sheet and
/// grand totals. Compact, one document per line.
pub struct Json;

impl Formatter for Json {
    fn write(&self, out: &mut dyn Write, input: &FormatterInput<'_>) -> AppResult<()> {
        let now = input.now;
        let mut sheets: Vec<OutputSheet> = Vec::new();

        for entry in input.entries {
            let idx = match sheets.iter().position(|s| s.name == entry.sheet) {
                Some(idx) => idx,
                None => {
                    let sheet_time = aggregate(input.entries, now, |e| e.sheet == entry.sheet);
                    sheets.push(OutputSheet {
                        name: entry.sheet.clone(),
                        sheet_time: format_duration(sheet_time),
                        entries: Vec::new(),
                    });
                    sheets.len() - 1
                }
            };

            let (duration, _) = entry.duration_at(now);
            sheets[idx].entries.push(OutputEntry {
                id: entry.id,
                start: entry.start,
                end: entry.end,
                note: entry.note.clone(),
                duration: format_duration(duration),
            });
        }

        let res = Output {
            sheets,
            total_time: format_duration(aggregate(input.entries, now, |_| true)),
        };

        serde_json::to_writer(&mut *out, &res)?;
        writeln!(out)?;
        Ok(())
    }
}
