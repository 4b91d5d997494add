#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use rtimesheet::core::timesheet::Timesheet;
use rtimesheet::utils::date::parse_instant;
use rtimesheet::utils::time::{Instant, now};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rts() -> Command {
    cargo_bin_cmd!("rtimesheet")
}

/// Command preset with `--db <db_path> --test`, so the user's config file
/// is never read.
pub fn rts_db(db_path: &str) -> Command {
    let mut cmd = rts();
    cmd.args(["--db", db_path, "--test"]);
    cmd
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rtimesheet.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Fixed instant for deterministic tests, e.g. `at("2024-01-01 09:00")`.
pub fn at(text: &str) -> Instant {
    parse_instant(text, now()).expect("valid test date")
}

/// In-memory store for engine tests.
pub fn memory_sheet() -> Timesheet {
    Timesheet::open_in_memory().expect("open in-memory store")
}

/// Number of rows in `entries`, read directly with rusqlite.
pub fn count_entries(db_path: &str) -> i64 {
    let conn = rusqlite::Connection::open(db_path).expect("open db");
    conn.query_row("SELECT COUNT(*) FROM entries", [], |r| r.get(0))
        .expect("count entries")
}
