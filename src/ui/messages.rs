//! User-facing status lines (icon + colour).
//!
//! `info` and `success` go to stdout, `warning` and `error` to stderr so
//! they never mix with formatter output. Colour is only emitted when the
//! target stream is a terminal.

use std::fmt;
use std::io::{self, IsTerminal, Write};

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

#[derive(Clone, Copy)]
enum Level {
    Info,
    Success,
    Warning,
    Error,
}

impl Level {
    fn style(self) -> (&'static str, &'static str) {
        match self {
            Level::Info => ("\x1b[34m", "ℹ️"),
            Level::Success => ("\x1b[32m", "✅"),
            Level::Warning => ("\x1b[33m", "⚠️"),
            Level::Error => ("\x1b[31m", "❌"),
        }
    }

    fn to_stderr(self) -> bool {
        matches!(self, Level::Warning | Level::Error)
    }
}

fn emit(level: Level, msg: &dyn fmt::Display) {
    let (colour, icon) = level.style();

    let line = |tty: bool| {
        if tty {
            format!("{colour}{BOLD}{icon} {RESET}{msg}")
        } else {
            format!("{icon} {msg}")
        }
    };

    // a closed pipe is not worth a panic
    if level.to_stderr() {
        let stderr = io::stderr();
        let _ = writeln!(stderr.lock(), "{}", line(stderr.is_terminal()));
    } else {
        let stdout = io::stdout();
        let _ = writeln!(stdout.lock(), "{}", line(stdout.is_terminal()));
    }
}

pub fn info<T: fmt::Display>(msg: T) {
    emit(Level::Info, &msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    emit(Level::Success, &msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    emit(Level::Warning, &msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    emit(Level::Error, &msg);
}
