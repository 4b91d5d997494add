/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";

/// Colours a rendered sheet-list line by its marker:
/// `*` (current) → green, `-` (last) → yellow, anything else untouched.
///
/// Applied after table rendering so escape codes never skew column widths.
pub fn colorize_sheet_line(line: &str) -> String {
    match line.chars().next() {
        Some('*') => format!("{GREEN}{line}{RESET}"),
        Some('-') => format!("{YELLOW}{line}{RESET}"),
        _ => line.to_string(),
    }
}
