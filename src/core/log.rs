use crate::db::log::load_log;
use crate::errors::AppResult;
use ansi_term::Colour;
use rusqlite::Connection;
use unicode_width::UnicodeWidthStr;

const MAX_OP_WIDTH: usize = 40;

/// Colour for each logged operation.
fn color_for_operation(op: &str) -> Colour {
    match op {
        "start" | "resume" => Colour::Green,
        "stop" => Colour::Cyan,
        "kill" => Colour::Red,
        "edit" => Colour::Yellow,
        "sheet" => Colour::Blue,
        _ => Colour::White,
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out: String = s.chars().take(max.saturating_sub(3)).collect();
    out.push_str("...");
    out
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(conn: &Connection) -> AppResult<()> {
        let rows = load_log(conn)?;

        if rows.is_empty() {
            println!("📜 Internal log is empty.");
            return Ok(());
        }

        // (id, date, operation, "operation (target)", message)
        let entries: Vec<(i64, String, String, String, String)> = rows
            .into_iter()
            .map(|r| {
                let date = chrono::DateTime::parse_from_rfc3339(&r.date)
                    .map(|dt| dt.format("%FT%T%:z").to_string())
                    .unwrap_or(r.date);

                let op_target = if r.target.is_empty() {
                    r.operation.clone()
                } else {
                    truncate(&format!("{} ({})", r.operation, r.target), MAX_OP_WIDTH)
                };

                (r.id, date, r.operation, op_target, r.message)
            })
            .collect();

        let id_w = entries
            .iter()
            .map(|(id, ..)| id.to_string().len())
            .max()
            .unwrap_or(1);
        let date_w = entries
            .iter()
            .map(|(_, date, ..)| date.len())
            .max()
            .unwrap_or(10);
        let op_w = entries
            .iter()
            .map(|(_, _, _, op_target, _)| UnicodeWidthStr::width(op_target.as_str()))
            .max()
            .unwrap_or(10);

        println!("📜 Internal log:\n");

        for (id, date, operation, op_target, message) in entries {
            // only the operation word is coloured; padding is computed on the
            // plain text
            let width = UnicodeWidthStr::width(op_target.as_str());
            let padding = " ".repeat(op_w.saturating_sub(width));
            let rest = op_target.strip_prefix(operation.as_str()).unwrap_or("");
            let colored = color_for_operation(&operation).paint(operation.as_str());

            println!(
                "{:>id_w$}: {:<date_w$} | {}{}{} => {}",
                id,
                date,
                colored,
                rest,
                padding,
                message,
                id_w = id_w,
                date_w = date_w
            );
        }

        Ok(())
    }
}
