use crate::core::timesheet::aggregate;
use crate::models::entry::Entry;
use crate::utils::{Instant, same_date};
use chrono::Duration;

/// One line of the `sheet` listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetSummary {
    pub marker: char,
    pub name: String,
    pub running: Duration,
    pub today: Duration,
    pub total: Duration,
}

impl SheetSummary {
    /// Totals for `name` from its entries.
    /// Marker: `*` current sheet, `-` last sheet, blank otherwise.
    pub fn build(
        name: &str,
        entries: &[Entry],
        current: &str,
        last: &str,
        now: Instant,
    ) -> Self {
        let marker = if name == current {
            '*'
        } else if name == last {
            '-'
        } else {
            ' '
        };

        Self {
            marker,
            name: name.to_string(),
            running: aggregate(entries, now, Entry::is_running),
            today: aggregate(entries, now, |e| same_date(now, e.start)),
            total: aggregate(entries, now, |_| true),
        }
    }

    /// Placeholder line for a current sheet that has no entries yet.
    pub fn empty_current(name: &str) -> Self {
        Self {
            marker: '*',
            name: name.to_string(),
            running: Duration::zero(),
            today: Duration::zero(),
            total: Duration::zero(),
        }
    }
}
