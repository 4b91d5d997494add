use crate::cli::commands::Session;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;

pub fn handle(session: &Session) -> AppResult<()> {
    let input = &session.input;

    if session.state.get_entry(input.id)?.is_none() {
        return Err(AppError::EntryNotFound(input.id));
    }

    let closed = session.state.stop(input.id, input.end_time())?;

    success(format!(
        "Checked out of sheet \"{}\" ({}).",
        closed.sheet, input.id
    ));
    Ok(())
}
