use crate::utils::time::Instant;
use chrono::Duration;

/// One tracked interval.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub id: i64,              // ⇔ entries.id (AUTOINCREMENT, never reused)
    pub sheet: String,        // ⇔ entries.sheet
    pub note: String,         // ⇔ entries.note (may be empty)
    pub start: Instant,       // ⇔ entries.start (with UTC offset)
    pub end: Option<Instant>, // ⇔ entries.end (NULL while running)
}

impl Entry {
    pub fn is_running(&self) -> bool {
        self.end.is_none()
    }

    /// Elapsed time and running flag, computed against `now`.
    ///
    /// An entry whose end lies before its start yields a negative span; it is
    /// reported as-is.
    pub fn duration_at(&self, now: Instant) -> (Duration, bool) {
        match self.end {
            None => (now - self.start, true),
            Some(end) => (end - self.start, false),
        }
    }

    pub fn start_str(&self) -> String {
        self.start.format("%H:%M:%S").to_string()
    }

    pub fn end_str(&self) -> String {
        self.end
            .map(|e| e.format("%H:%M:%S").to_string())
            .unwrap_or_default()
    }

    pub fn day_str(&self) -> String {
        self.start.format("%a %b %-d, %Y").to_string()
    }
}

/// Optional field overrides applied by `edit`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryEdit {
    pub start: Option<Instant>,
    pub end: Option<Instant>,
    pub note: Option<String>,
}

impl EntryEdit {
    pub fn is_empty(&self) -> bool {
        self.start.is_none() && self.end.is_none() && self.note.is_none()
    }

    /// Apply the supplied fields, returning whether anything was set.
    pub fn apply_to(&self, entry: &mut Entry) -> bool {
        if let Some(start) = self.start {
            entry.start = start;
        }
        if let Some(end) = self.end {
            entry.end = Some(end);
        }
        if let Some(note) = &self.note {
            entry.note = note.clone();
        }
        !self.is_empty()
    }
}
