use crate::cli::commands::Session;
use crate::core::report::SheetSummary;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::colors::colorize_sheet_line;
use crate::utils::format_duration;
use crate::utils::table::Table;

/// With a name: switch to that sheet. Without: list every sheet.
pub fn handle(session: &Session) -> AppResult<()> {
    let name = &session.input.note;

    if !name.is_empty() {
        session.state.switch_sheet(name)?;
        success(format!("Switching to sheet \"{}\"", name));
        return Ok(());
    }

    list(session)
}

fn list(session: &Session) -> AppResult<()> {
    let state = &session.state;
    let now = session.input.now;
    let meta = state.meta()?;
    let sheets = state.list_sheets()?;

    let mut summaries = Vec::with_capacity(sheets.len() + 1);
    for name in &sheets {
        let entries = state.list_entries(Some(name))?;
        summaries.push(SheetSummary::build(
            name,
            &entries,
            &meta.current_sheet,
            &meta.last_sheet,
            now,
        ));
    }

    // a freshly switched-to sheet has no entries yet but is still listed
    if !sheets.contains(&meta.current_sheet) {
        summaries.push(SheetSummary::empty_current(&meta.current_sheet));
    }

    let mut table = Table::new([" Timesheet", "Running", "Today", "Total Time"]);
    for s in &summaries {
        table.add_row(vec![
            format!("{}{}", s.marker, s.name),
            format_duration(s.running),
            format_duration(s.today),
            format_duration(s.total),
        ]);
    }

    for line in table.render().lines() {
        println!("{}", colorize_sheet_line(line));
    }

    Ok(())
}
