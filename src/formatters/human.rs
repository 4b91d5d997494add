use crate::errors::AppResult;
use crate::formatters::{Formatter, FormatterInput};
use crate::models::entry::Entry;
use crate::utils::table::Table;
use crate::utils::time::Instant;
use crate::utils::{format_duration, same_date};
use chrono::Duration;
use std::io::Write;

pub const HEADER: [&str; 5] = ["Id", "Day", "Start      End", "Duration", "Notes"];

/// Tabular output: the day is printed on the first entry of each day, and a
/// subtotal row follows the last entry of every day.
pub struct Human;

/// Cells of a single entry row; `day` is left blank for follow-up rows of the
/// same day.
pub fn entry_row(entry: &Entry, show_day: bool, now: Instant) -> Vec<String> {
    let (duration, _) = entry.duration_at(now);

    vec![
        entry.id.to_string(),
        if show_day {
            entry.day_str()
        } else {
            String::new()
        },
        format!("{} - {}", entry.start_str(), entry.end_str()),
        format_duration(duration),
        entry.note.clone(),
    ]
}

impl Formatter for Human {
    fn write(&self, out: &mut dyn Write, input: &FormatterInput<'_>) -> AppResult<()> {
        writeln!(out, "Timesheet: {}", input.sheet)?;

        let mut table = Table::new(HEADER);
        let mut day_total = Duration::zero();
        let mut total = Duration::zero();

        let entries = input.entries;
        for (i, entry) in entries.iter().enumerate() {
            let first_of_day = i == 0 || !same_date(entries[i - 1].start, entry.start);
            if first_of_day {
                day_total = Duration::zero();
            }

            let (duration, _) = entry.duration_at(input.now);
            day_total = day_total + duration;
            total = total + duration;

            table.add_row(entry_row(entry, first_of_day, input.now));

            let last_of_day = entries
                .get(i + 1)
                .is_none_or(|next| !same_date(next.start, entry.start));
            if last_of_day {
                table.add_row(vec![
                    String::new(),
                    String::new(),
                    String::new(),
                    format_duration(day_total),
                    String::new(),
                ]);
            }
        }

        if !entries.is_empty() {
            table.add_row(vec![
                String::new(),
                String::new(),
                "Total".to_string(),
                format_duration(total),
                String::new(),
            ]);
        }

        out.write_all(table.render().as_bytes())?;
        Ok(())
    }
}
