use crate::cli::commands::Session;
use crate::errors::AppResult;
use crate::utils::format_duration;

pub fn handle(session: &Session) -> AppResult<()> {
    match session.state.current_entry()? {
        Some(entry) => {
            let (elapsed, _) = entry.duration_at(session.input.now);
            println!(
                "*{}: {} ({})",
                entry.sheet,
                format_duration(elapsed),
                entry.note
            );
        }
        None => {
            let meta = session.state.meta()?;
            eprintln!("*{}: not running", meta.current_sheet);
        }
    }

    Ok(())
}
