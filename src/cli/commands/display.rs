use crate::cli::commands::Session;
use crate::errors::{AppError, AppResult};
use crate::formatters::FormatterInput;
use std::io::{self, Write};

/// Print the entries of the selected sheet (or of every sheet) with the
/// chosen formatter.
pub fn handle(session: &Session) -> AppResult<()> {
    let input = &session.input;
    let meta = session.state.meta()?;

    let sheet = input.selected_sheet(&meta.current_sheet);
    let label = sheet.clone().unwrap_or_else(|| "all".to_string());

    let mut entries = session.state.list_entries(sheet.as_deref())?;
    if entries.is_empty() {
        return Err(AppError::SheetNotFound(label));
    }

    if let Some(filter) = &input.filter {
        entries.retain(|e| &e.note == filter);
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    input.formatter.formatter().write(
        &mut out,
        &FormatterInput {
            sheet: &label,
            entries: &entries,
            now: input.now,
        },
    )?;
    out.flush()?;

    Ok(())
}
