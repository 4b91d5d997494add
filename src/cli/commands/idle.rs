use crate::cli::commands::Session;
use crate::errors::AppResult;
use crate::utils::format_duration;

pub fn handle(session: &Session) -> AppResult<()> {
    let input = &session.input;
    let meta = session.state.meta()?;
    let sheet = input.selected_sheet(&meta.current_sheet);

    let idle = session.state.idle(sheet.as_deref(), input.now)?;
    println!("{}", format_duration(idle));

    Ok(())
}
