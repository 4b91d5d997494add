use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use rtimesheet::cli::parser::normalize_args;
use serde_json::Value;
use std::ffi::OsString;

mod common;
use common::{count_entries, rts_db, setup_test_db};

fn check_in(db: &str, at: &str, note: &[&str]) {
    rts_db(db)
        .args(["in", "--at", at])
        .args(note)
        .assert()
        .success();
}

fn check_out(db: &str, at: &str) {
    rts_db(db).args(["out", "--at", at]).assert().success();
}

#[test]
fn test_check_in_and_now() {
    let db = setup_test_db("cli_in_now");

    rts_db(&db)
        .args(["in", "--at", "2024-01-01 09:00", "writing", "the", "report"])
        .assert()
        .success()
        .stdout(contains("Checked into sheet \"main\" (1)."));

    rts_db(&db)
        .arg("now")
        .assert()
        .success()
        .stdout(contains("*main: ").and(contains("(writing the report)")));
}

#[test]
fn test_now_when_not_running() {
    let db = setup_test_db("cli_now_idle");

    rts_db(&db)
        .arg("n")
        .assert()
        .success()
        .stderr(contains("*main: not running"));
}

#[test]
fn test_second_check_in_fails() {
    let db = setup_test_db("cli_in_twice");
    check_in(&db, "2024-01-01 09:00", &[]);

    rts_db(&db)
        .args(["start", "again"])
        .assert()
        .failure()
        .stderr(contains("already running").and(contains("Usage of rtimesheet")));

    assert_eq!(count_entries(&db), 1);
}

#[test]
fn test_check_out_and_display() {
    let db = setup_test_db("cli_out_display");
    check_in(&db, "2024-01-01 09:00", &["plan"]);

    rts_db(&db)
        .args(["out", "--at", "2024-01-01 10:30"])
        .assert()
        .success()
        .stdout(contains("Checked out of sheet \"main\" (1)."));

    rts_db(&db)
        .arg("d")
        .assert()
        .success()
        .stdout(
            contains("Timesheet: main")
                .and(contains("Mon Jan 1, 2024"))
                .and(contains("09:00:00 - 10:30:00"))
                .and(contains("1:30:00"))
                .and(contains("Total"))
                .and(contains("plan")),
        );
}

#[test]
fn test_check_out_without_entries() {
    let db = setup_test_db("cli_out_empty");

    rts_db(&db)
        .arg("out")
        .assert()
        .failure()
        .stderr(contains("no entry with ID 0 found"));
}

#[test]
fn test_check_out_twice_reports_not_running() {
    let db = setup_test_db("cli_out_twice");
    check_in(&db, "2024-01-01 09:00", &[]);
    check_out(&db, "2024-01-01 10:00");

    rts_db(&db)
        .arg("out")
        .assert()
        .failure()
        .stderr(contains("not running"));
}

#[test]
fn test_ambiguous_and_unknown_commands() {
    let db = setup_test_db("cli_dispatch_errors");

    rts_db(&db)
        .arg("i")
        .assert()
        .failure()
        .stderr(contains("ambiguous command i").and(contains("idle")));

    rts_db(&db)
        .arg("frobnicate")
        .assert()
        .failure()
        .stderr(contains("unknown command frobnicate").and(contains("commands:")));

    assert_eq!(count_entries(&db), 0);
}

#[test]
fn test_no_command_prints_usage() {
    let db = setup_test_db("cli_no_command");

    rts_db(&db)
        .assert()
        .failure()
        .stderr(contains("Usage of rtimesheet").and(contains("\t--id: ")));
}

#[test]
fn test_help() {
    let db = setup_test_db("cli_help");

    rts_db(&db)
        .arg("help")
        .assert()
        .success()
        .stdout(
            contains("Usage of rtimesheet")
                .and(contains("in, start: start an entry"))
                .and(contains("out, end: stop an entry")),
        );

    rts_db(&db)
        .args(["help", "ed"])
        .assert()
        .success()
        .stdout(contains("edit: edit an entry\n\t[--id (current/last)]"));
}

#[test]
fn test_sheet_switch_and_listing() {
    let db = setup_test_db("cli_sheets");
    check_in(&db, "2024-01-01 09:00", &[]);
    check_out(&db, "2024-01-01 10:00");

    rts_db(&db)
        .args(["sheet", "work"])
        .assert()
        .success()
        .stdout(contains("Switching to sheet \"work\""));

    rts_db(&db)
        .arg("sh")
        .assert()
        .success()
        .stdout(
            contains("Timesheet")
                .and(contains("-main"))
                .and(contains("1:00:00"))
                .and(contains("*work")),
        );
}

#[test]
fn test_sheet_name_with_space_is_rejected() {
    let db = setup_test_db("cli_sheet_space");

    rts_db(&db)
        .args(["sheet", "two", "words"])
        .assert()
        .failure()
        .stderr(contains("invalid sheet name"));
}

#[test]
fn test_resume_last_entry() {
    let db = setup_test_db("cli_resume");
    check_in(&db, "2024-01-01 09:00", &["task", "A"]);
    check_out(&db, "2024-01-01 10:00");

    rts_db(&db)
        .args(["resume", "--at", "2024-01-01 11:00"])
        .assert()
        .success()
        .stdout(contains("Resuming \"task A\" from entry #1 with new ID #2"));

    let conn = rusqlite::Connection::open(&db).unwrap();
    let (note, end): (String, Option<String>) = conn
        .query_row("SELECT note, \"end\" FROM entries WHERE id = 2", [], |r| {
            Ok((r.get(0)?, r.get(1)?))
        })
        .unwrap();
    assert_eq!(note, "task A");
    assert!(end.is_none());
}

#[test]
fn test_resume_unknown_id() {
    let db = setup_test_db("cli_resume_missing");

    rts_db(&db)
        .args(["resume", "--id", "9"])
        .assert()
        .failure()
        .stderr(contains("no entry with ID 9 found"));
}

#[test]
fn test_edit_entry() {
    let db = setup_test_db("cli_edit");
    check_in(&db, "2024-01-01 09:00", &["old"]);
    check_out(&db, "2024-01-01 10:00");

    rts_db(&db)
        .args(["edit", "--id", "1", "--end", "2024-01-01 11:00", "new", "note"])
        .assert()
        .success()
        .stdout(contains("2:00:00").and(contains("new note")));

    rts_db(&db)
        .arg("edit")
        .assert()
        .success()
        .stdout(contains("nothing changed"));
}

#[test]
fn test_note_words_may_start_with_a_dash() {
    let db = setup_test_db("cli_dash_note");

    rts_db(&db)
        .args(["in", "--at", "2024-01-01 09:00", "fix", "-bug"])
        .assert()
        .success()
        .stdout(contains("Checked into sheet \"main\" (1)."));

    let conn = rusqlite::Connection::open(&db).unwrap();
    let note: String = conn
        .query_row("SELECT note FROM entries WHERE id = 1", [], |r| r.get(0))
        .unwrap();
    assert_eq!(note, "fix -bug");
}

fn os_args(args: &[&str]) -> Vec<OsString> {
    args.iter().map(OsString::from).collect()
}

#[test]
fn test_normalize_args_moves_flags_before_words() {
    let argv = ["rtimesheet", "in", "fix", "-bug", "--at", "-15m", "later"];
    assert_eq!(
        normalize_args(argv),
        os_args(&["rtimesheet", "--at", "-15m", "--", "in", "fix", "-bug", "later"])
    );

    let argv = ["rtimesheet", "--db=x.sqlite", "-h", "d", "--", "--at", "now"];
    assert_eq!(
        normalize_args(argv),
        os_args(&["rtimesheet", "--db=x.sqlite", "-h", "--", "d", "--at", "now"])
    );
}

#[test]
fn test_invalid_date_is_an_error() {
    let db = setup_test_db("cli_bad_date");
    check_in(&db, "2024-01-01 09:00", &[]);
    check_out(&db, "2024-01-01 10:00");

    rts_db(&db)
        .args(["in", "--at", "sometime"])
        .assert()
        .failure()
        .stderr(contains("Error: Invalid date format: sometime"));

    assert_eq!(count_entries(&db), 1);
}

#[test]
fn test_kill_entry_with_confirmation() {
    let db = setup_test_db("cli_kill_entry");
    check_in(&db, "2024-01-01 09:00", &["doomed"]);
    check_out(&db, "2024-01-01 10:00");

    rts_db(&db)
        .args(["kill", "--id", "1"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("Operation cancelled."));
    assert_eq!(count_entries(&db), 1);

    rts_db(&db)
        .args(["kill", "--id", "1"])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(contains("it's killed"));
    assert_eq!(count_entries(&db), 0);
}

#[test]
fn test_kill_sheet() {
    let db = setup_test_db("cli_kill_sheet");
    check_in(&db, "2024-01-01 09:00", &[]);
    check_out(&db, "2024-01-01 10:00");

    rts_db(&db)
        .args(["kill", "nope"])
        .assert()
        .failure()
        .stderr(contains("Can't find sheet matching \"nope\""));

    rts_db(&db)
        .args(["kill", "main"])
        .write_stdin("yes\n")
        .assert()
        .success()
        .stdout(contains("it's killed"));
    assert_eq!(count_entries(&db), 0);
}

#[test]
fn test_display_json_and_filter() {
    let db = setup_test_db("cli_display_json");
    check_in(&db, "2024-01-01 09:00", &["alpha"]);
    check_out(&db, "2024-01-01 09:30");
    check_in(&db, "2024-01-01 10:00", &["beta"]);
    check_out(&db, "2024-01-01 11:00");

    let output = rts_db(&db)
        .args(["display", "--formatter", "json", "--filter", "beta"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let v: Value = serde_json::from_slice(&output.stdout).unwrap();
    let entries = v["sheets"][0]["entries"].as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["note"], "beta");
    assert_eq!(v["total_time"], "1:00:00");
}

#[test]
fn test_display_all_and_missing_sheet() {
    let db = setup_test_db("cli_display_all");

    rts_db(&db)
        .arg("display")
        .assert()
        .failure()
        .stderr(contains("Can't find sheet matching \"main\""));

    check_in(&db, "2024-01-01 09:00", &[]);
    check_out(&db, "2024-01-01 10:00");
    rts_db(&db).args(["sheet", "other"]).assert().success();
    check_in(&db, "2024-01-01 11:00", &[]);
    check_out(&db, "2024-01-01 11:30");

    rts_db(&db)
        .args(["display", "all"])
        .assert()
        .success()
        .stdout(contains("Timesheet: all").and(contains("1:30:00")));
}

#[test]
fn test_idle() {
    let db = setup_test_db("cli_idle");
    check_in(&db, "2024-01-01 09:00", &[]);
    check_out(&db, "2024-01-01 10:00");
    check_in(&db, "2024-01-01 10:30", &[]);

    rts_db(&db)
        .arg("idle")
        .assert()
        .success()
        .stdout(contains("0:30:00"));
}

#[test]
fn test_log_records_operations() {
    let db = setup_test_db("cli_log");

    rts_db(&db)
        .arg("log")
        .assert()
        .success()
        .stdout(contains("Internal log is empty."));

    check_in(&db, "2024-01-01 09:00", &[]);

    rts_db(&db)
        .arg("l")
        .assert()
        .success()
        .stdout(contains("Started entry #1"));
}

#[test]
fn test_config_in_test_mode() {
    let db = setup_test_db("cli_config");

    rts_db(&db)
        .arg("config")
        .assert()
        .success()
        .stdout(contains("default_formatter: human").and(contains("confirm_kill: true")));

    rts_db(&db)
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(contains("configuration file not written"));
}
