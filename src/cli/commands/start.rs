use crate::cli::commands::Session;
use crate::errors::AppResult;
use crate::ui::messages::success;

pub fn handle(session: &Session) -> AppResult<()> {
    let input = &session.input;
    let sheet = session.state.meta()?.current_sheet;

    let id = session
        .state
        .start(&input.note, &sheet, input.start_time())?;

    success(format!("Checked into sheet \"{}\" ({}).", sheet, id));
    Ok(())
}
