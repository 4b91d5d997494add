use chrono::{Local, TimeZone};
use rtimesheet::formatters::{FormatterInput, FormatterKind};
use rtimesheet::models::entry::Entry;
use rtimesheet::utils::Instant;
use serde_json::Value;

fn dt(d: u32, h: u32, m: u32) -> Instant {
    Local.with_ymd_and_hms(2024, 1, d, h, m, 0).unwrap()
}

fn entry(id: i64, sheet: &str, note: &str, start: Instant, end: Option<Instant>) -> Entry {
    Entry {
        id,
        sheet: sheet.into(),
        note: note.into(),
        start,
        end,
    }
}

fn render(kind: FormatterKind, sheet: &str, entries: &[Entry], now: Instant) -> String {
    let mut out = Vec::new();
    kind.formatter()
        .write(
            &mut out,
            &FormatterInput {
                sheet,
                entries,
                now,
            },
        )
        .unwrap();
    String::from_utf8(out).unwrap()
}

fn sample() -> Vec<Entry> {
    vec![
        entry(1, "main", "plan", dt(1, 9, 0), Some(dt(1, 10, 30))),
        entry(2, "main", "code", dt(1, 11, 0), Some(dt(1, 12, 0))),
        entry(3, "main", "review", dt(2, 9, 0), None),
    ]
}

#[test]
fn test_human_groups_by_day_with_subtotals() {
    let out = render(FormatterKind::Human, "main", &sample(), dt(2, 9, 30));
    let lines: Vec<&str> = out.lines().collect();

    assert_eq!(lines[0], "Timesheet: main");
    assert!(lines[1].starts_with("Id   Day"));
    assert!(lines[1].ends_with("Notes"));

    assert!(lines[2].starts_with("1    Mon Jan 1, 2024"));
    assert!(lines[2].contains("09:00:00 - 10:30:00"));
    assert!(lines[2].contains("1:30:00"));
    assert!(lines[2].ends_with("plan"));

    // day shown only on the first entry of the day
    assert!(!lines[3].contains("Jan"));
    assert!(lines[3].contains("11:00:00 - 12:00:00"));

    // subtotal of the first day
    assert_eq!(lines[4].trim(), "2:30:00");

    // running entry has no end and is measured against now
    assert!(lines[5].contains("Tue Jan 2, 2024"));
    assert!(lines[5].contains("09:00:00 -"));
    assert!(lines[5].contains("0:30:00"));

    assert_eq!(lines[6].trim(), "0:30:00");

    let total: Vec<&str> = lines[7].split_whitespace().collect();
    assert_eq!(total, vec!["Total", "3:00:00"]);
    assert_eq!(lines.len(), 8);
}

#[test]
fn test_human_columns_are_aligned() {
    let out = render(FormatterKind::Human, "main", &sample(), dt(2, 9, 30));
    let lines: Vec<&str> = out.lines().skip(1).collect();

    let header_col = lines[0].find("Duration").unwrap();
    assert!(lines[1][header_col..].starts_with("1:30:00"));
    assert!(lines[2][header_col..].starts_with("1:00:00"));
}

#[test]
fn test_human_empty_list_prints_only_header() {
    let out = render(FormatterKind::Human, "all", &[], dt(1, 9, 0));
    let lines: Vec<&str> = out.lines().collect();

    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], "Timesheet: all");
}

#[test]
fn test_json_groups_sheets_in_first_appearance_order() {
    let entries = vec![
        entry(1, "work", "a", dt(1, 9, 0), Some(dt(1, 10, 0))),
        entry(2, "home", "b", dt(1, 18, 0), Some(dt(1, 18, 30))),
        entry(3, "work", "c", dt(2, 9, 0), None),
    ];
    let out = render(FormatterKind::Json, "all", &entries, dt(2, 9, 15));

    assert!(out.ends_with('\n'));
    assert_eq!(out.lines().count(), 1);

    let v: Value = serde_json::from_str(&out).unwrap();
    let sheets = v["sheets"].as_array().unwrap();
    assert_eq!(sheets.len(), 2);

    assert_eq!(sheets[0]["name"], "work");
    assert_eq!(sheets[0]["sheet_time"], "1:15:00");
    assert_eq!(sheets[0]["entries"].as_array().unwrap().len(), 2);
    assert_eq!(sheets[0]["entries"][0]["id"], 1);
    assert_eq!(sheets[0]["entries"][0]["note"], "a");
    assert_eq!(sheets[0]["entries"][0]["duration"], "1:00:00");
    assert!(sheets[0]["entries"][1]["end"].is_null());

    assert_eq!(sheets[1]["name"], "home");
    assert_eq!(sheets[1]["sheet_time"], "0:30:00");

    assert_eq!(v["total_time"], "1:45:00");
}

#[test]
fn test_json_empty_list() {
    let out = render(FormatterKind::Json, "main", &[], dt(1, 9, 0));
    let v: Value = serde_json::from_str(&out).unwrap();

    assert_eq!(v["sheets"].as_array().unwrap().len(), 0);
    assert_eq!(v["total_time"], "0:00:00");
}
