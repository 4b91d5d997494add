//! Parsing of the instants given on the command line (`--start`, `--end`,
//! `--at`).

use crate::errors::{AppError, AppResult};
use crate::utils::time::{Instant, from_local, parse_timestamp};
use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use regex::Regex;
use std::sync::LazyLock;

static RELATIVE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?i)^([+-])?\s*(\d+)\s*",
        r"(s|secs?|seconds?|m|mins?|minutes?|h|hrs?|hours?|d|days?)(\s+ago)?$",
    ))
    .expect("relative time pattern is valid")
});

const DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
];

const TIME_FORMATS: [&str; 2] = ["%H:%M:%S", "%H:%M"];

/// Resolve a user supplied instant relative to `now`.
///
/// Accepted forms:
/// - `now`
/// - `YYYY-MM-DD HH:MM[:SS]` (space or `T`), or a full stored timestamp
/// - `YYYY-MM-DD` (midnight)
/// - `HH:MM[:SS]` (today)
/// - `[+|-]N unit [ago]`, units s/m/h/d with their long forms. Only an
///   explicit `+` moves forward; `-N`, `N ago` and a bare `N unit` go back.
pub fn parse_instant(text: &str, now: Instant) -> AppResult<Instant> {
    let t = text.trim();
    let invalid = || AppError::InvalidDate(text.to_string());

    if t.eq_ignore_ascii_case("now") {
        return Ok(now);
    }

    for fmt in DATETIME_FORMATS {
        if let Ok(ts) = NaiveDateTime::parse_from_str(t, fmt) {
            return from_local(ts).ok_or_else(invalid);
        }
    }

    if let Some(ts) = parse_timestamp(t) {
        return Ok(ts);
    }

    if let Ok(d) = NaiveDate::parse_from_str(t, "%Y-%m-%d") {
        return from_local(d.and_time(NaiveTime::MIN)).ok_or_else(invalid);
    }

    for fmt in TIME_FORMATS {
        if let Ok(time) = NaiveTime::parse_from_str(t, fmt) {
            return from_local(now.date_naive().and_time(time)).ok_or_else(invalid);
        }
    }

    parse_relative(t, now).ok_or_else(invalid)
}

fn parse_relative(t: &str, now: Instant) -> Option<Instant> {
    let caps = RELATIVE.captures(t)?;

    let amount: i64 = caps.get(2)?.as_str().parse().ok()?;
    let unit = caps.get(3)?.as_str().to_lowercase();

    let span = match unit.chars().next()? {
        's' => Duration::try_seconds(amount)?,
        'm' => Duration::try_minutes(amount)?,
        'h' => Duration::try_hours(amount)?,
        'd' => Duration::try_days(amount)?,
        _ => return None,
    };

    let forward = caps.get(1).is_some_and(|m| m.as_str() == "+") && caps.get(4).is_none();

    if forward {
        now.checked_add_signed(span)
    } else {
        now.checked_sub_signed(span)
    }
}

pub fn parse_optional_instant(
    input: Option<&String>,
    now: Instant,
) -> AppResult<Option<Instant>> {
    input.map(|s| parse_instant(s, now)).transpose()
}
