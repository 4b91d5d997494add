use crate::cli::commands::Session;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;

/// Restart an entry: the one given with `--id`, else the last entry of the
/// current sheet.
pub fn handle(session: &Session) -> AppResult<()> {
    let input = &session.input;
    let state = &session.state;

    let source = match input.explicit_id {
        Some(id) => state.get_entry(id)?.ok_or(AppError::EntryNotFound(id))?,
        None => {
            let sheet = state.meta()?.current_sheet;
            state
                .last_entry(Some(&sheet))?
                .ok_or_else(|| AppError::NoEntries("no entries".into()))?
        }
    };

    let new_id = state.resume(&source, input.start_time())?;

    success(format!(
        "Resuming \"{}\" from entry #{} with new ID #{}",
        source.note, source.id, new_id
    ));
    Ok(())
}
