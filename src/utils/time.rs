//! Time utilities: duration formatting, day comparison and the canonical
//! timestamp representation used in the `entries` table.

use chrono::{DateTime, Duration, Local, NaiveDateTime, TimeZone};

/// Instant on the local clock. The UTC offset travels with the value, so
/// spans across a DST change are measured in real elapsed time.
pub type Instant = DateTime<Local>;

/// Timestamp layout written to the database: local time, microseconds and
/// the UTC offset in effect at that instant.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f%:z";

const OFFSET_FORMATS: [&str; 3] = [
    "%Y-%m-%d %H:%M:%S%.f%:z",
    "%Y-%m-%d %H:%M:%S%.f %:z",
    "%Y-%m-%dT%H:%M:%S%.f%:z",
];

/// Layouts without an offset, written by older clients. `%.f` also matches
/// a missing fractional part.
const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];

/// Format a span as `H:MM:SS`, rounded to the nearest second.
///
/// Hours are not wrapped at 24. Negative spans keep their sign (`-0:30:00`).
pub fn format_duration(d: Duration) -> String {
    let millis = d.num_milliseconds();
    let secs = (millis.unsigned_abs() + 500) / 1000;
    let sign = if millis < 0 && secs > 0 { "-" } else { "" };

    format!(
        "{}{}:{:02}:{:02}",
        sign,
        secs / 3600,
        (secs % 3600) / 60,
        secs % 60
    )
}

/// True when both instants fall on the same local calendar day.
pub fn same_date(a: Instant, b: Instant) -> bool {
    a.date_naive() == b.date_naive()
}

pub fn format_timestamp(ts: Instant) -> String {
    ts.format(TIMESTAMP_FORMAT).to_string()
}

/// Attach the local zone to a wall-clock time. An ambiguous time (clocks
/// going back) resolves to the earlier instant; a skipped one is `None`.
pub fn from_local(naive: NaiveDateTime) -> Option<Instant> {
    Local.from_local_datetime(&naive).earliest()
}

/// Parse a stored timestamp.
///
/// Values carrying an offset keep it; values without one are read as local
/// wall-clock time.
pub fn parse_timestamp(s: &str) -> Option<Instant> {
    let s = s.trim();

    for fmt in OFFSET_FORMATS {
        if let Ok(ts) = DateTime::parse_from_str(s, fmt) {
            return Some(ts.with_timezone(&Local));
        }
    }

    if let Ok(ts) = DateTime::parse_from_rfc3339(s) {
        return Some(ts.with_timezone(&Local));
    }

    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .and_then(from_local)
}

pub fn now() -> Instant {
    Local::now()
}
