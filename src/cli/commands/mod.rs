pub mod config;
pub mod display;
pub mod edit;
pub mod help;
pub mod idle;
pub mod kill;
pub mod log;
pub mod now;
pub mod resume;
pub mod sheet;
pub mod start;
pub mod stop;

use crate::cli::input::Input;
use crate::cli::parser::FLAG_HELP;
use crate::config::Config;
use crate::core::command_table::CommandTable;
use crate::core::timesheet::Timesheet;
use crate::errors::AppResult;

/// Everything an action needs, built once per invocation.
pub struct Session {
    pub cfg: Config,
    pub input: Input,
    pub state: Timesheet,
    /// `--test`: never touch the user's configuration file.
    pub test_mode: bool,
}

/// Register every command, in help order.
pub fn build_table(session: &Session) -> AppResult<CommandTable<'_>> {
    let mut table = CommandTable::new();

    table.register(
        &["in", "start"],
        "start an entry",
        "[--start, --at (now)] [note (\"\")]",
        move |_| start::handle(session),
    )?;
    table.register(
        &["out", "end"],
        "stop an entry",
        "[--end, --at (now)] [--id (current)]",
        move |_| stop::handle(session),
    )?;
    table.register(
        &["resume"],
        "resume an entry",
        "[--start, --at (now)] [--id (last)]",
        move |_| resume::handle(session),
    )?;
    table.register(
        &["now"],
        "show the current entry",
        "",
        move |_| now::handle(session),
    )?;
    table.register(
        &["edit"],
        "edit an entry",
        "[--id (current/last)] [--start] [--end] [note]",
        move |_| edit::handle(session),
    )?;
    table.register(
        &["display"],
        "show all entries in the given sheet",
        "[--formatter] [--filter] [SHEET/all/full (current)]",
        move |_| display::handle(session),
    )?;
    table.register(
        &["sheet"],
        "show sheets or change the current sheet",
        "[sheet]",
        move |_| sheet::handle(session),
    )?;
    table.register(
        &["kill"],
        "delete an entry or a whole sheet",
        "--id <id>\n\t<sheet>",
        move |_| kill::handle(session),
    )?;
    table.register(
        &["idle"],
        "show the time since you last checked out",
        "[SHEET/all (current)]",
        move |_| idle::handle(session),
    )?;
    table.register(
        &["log"],
        "show the internal operation log",
        "",
        move |_| log::handle(session),
    )?;
    table.register(
        &["config"],
        "show the configuration or write it to the config file",
        "[init]",
        move |_| config::handle(session),
    )?;
    table.register(
        &["help"],
        "show usage (of a command)",
        "[command]",
        move |table| help::handle(session, table),
    )?;

    Ok(table)
}

/// Usage text for the whole program.
pub fn usage(table: &CommandTable<'_>) -> String {
    table.render_usage(env!("CARGO_PKG_NAME"), FLAG_HELP)
}
