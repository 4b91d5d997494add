use crate::ui::messages::warning;
use std::io::{self, BufRead, Write};

/// Ask a yes/no question on stderr and read the answer from stdin.
///
/// An empty answer, end of input or a read error yields `default`.
pub fn confirm(prompt: &str, default: bool) -> bool {
    let hint = if default { "Y/n" } else { "y/N" };

    warning(prompt);
    eprint!("Confirm [{}]: ", hint);
    let _ = io::stderr().flush();

    let mut answer = String::new();
    match io::stdin().lock().read_line(&mut answer) {
        Ok(0) | Err(_) => default,
        Ok(_) => parse_answer(&answer).unwrap_or(default),
    }
}

fn parse_answer(answer: &str) -> Option<bool> {
    match answer.trim().to_lowercase().as_str() {
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}
