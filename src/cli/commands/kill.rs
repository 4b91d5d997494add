use crate::cli::commands::Session;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use crate::ui::prompt::confirm;

/// `kill --id N` deletes one entry, `kill SHEET` deletes a whole sheet.
pub fn handle(session: &Session) -> AppResult<()> {
    let state = &session.state;

    match session.input.explicit_id {
        Some(id) => {
            let entry = state.get_entry(id)?.ok_or(AppError::EntryNotFound(id))?;

            let prompt = format!(
                "Delete entry #{} (\"{}\") from sheet \"{}\"? This action is irreversible.",
                entry.id, entry.note, entry.sheet
            );
            if !confirmed(session, &prompt) {
                info("Operation cancelled.");
                return Ok(());
            }

            state.remove(entry.id)?;
        }
        None => {
            let name = &session.input.note;
            if !state.list_sheets()?.iter().any(|s| s == name) {
                return Err(AppError::SheetNotFound(name.clone()));
            }

            let prompt = format!(
                "Delete ALL entries of sheet \"{}\"? This action is irreversible.",
                name
            );
            if !confirmed(session, &prompt) {
                info("Operation cancelled.");
                return Ok(());
            }

            state.remove_sheet(name)?;
        }
    }

    success("it's killed");
    Ok(())
}

fn confirmed(session: &Session, prompt: &str) -> bool {
    !session.cfg.confirm_kill || confirm(prompt, false)
}
