use crate::cli::commands::{Session, usage};
use crate::core::command_table::CommandTable;
use crate::errors::AppResult;

/// `help` prints the full usage, `help CMD` the help of one command.
pub fn handle(session: &Session, table: &CommandTable<'_>) -> AppResult<()> {
    let token = &session.input.note;

    if token.is_empty() {
        print!("{}", usage(table));
        return Ok(());
    }

    let cmd = table.lookup(token)?;
    print!("{}", CommandTable::render_command_help(cmd));
    Ok(())
}
