use crate::cli::commands::Session;
use crate::core::timesheet::EditOutcome;
use crate::errors::AppResult;
use crate::formatters::human::{HEADER, entry_row};
use crate::models::entry::EntryEdit;
use crate::utils::table::Table;

pub fn handle(session: &Session) -> AppResult<()> {
    let input = &session.input;

    let fields = EntryEdit {
        start: input.start,
        end: input.end,
        note: (!input.note.is_empty()).then(|| input.note.clone()),
    };

    match session.state.edit(input.id, &fields)? {
        EditOutcome::Unchanged(_) => println!("nothing changed"),
        EditOutcome::Updated(entry) => {
            let mut table = Table::new(HEADER);
            table.add_row(entry_row(&entry, true, input.now));
            print!("{}", table.render());
        }
    }

    Ok(())
}
