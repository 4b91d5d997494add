//! The timesheet state engine.
//!
//! `Timesheet` owns every read and write of entries, sheets and meta. State
//! is never cached: the running entry and the meta record are queried again
//! on each call. Operations made of more than one statement run in a single
//! SQLite transaction, so a failed precondition leaves the store untouched.

use crate::db::initialize::init_db;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::{meta, queries};
use crate::errors::{AppError, AppResult};
use crate::models::entry::{Entry, EntryEdit};
use crate::models::meta::{KEY_LAST_CHECKOUT_ID, Meta};
use crate::utils::time::Instant;
use chrono::Duration;
use rusqlite::Connection;

/// Result of an `edit` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    /// No field was supplied; the stored row was not touched.
    Unchanged(Entry),
    Updated(Entry),
}

pub struct Timesheet {
    pool: DbPool,
}

impl Timesheet {
    /// Open (and on first use create) the store at `path`.
    pub fn open(path: &str) -> AppResult<Self> {
        Self::from_pool(DbPool::open(path)?)
    }

    pub fn open_in_memory() -> AppResult<Self> {
        Self::from_pool(DbPool::in_memory()?)
    }

    fn from_pool(pool: DbPool) -> AppResult<Self> {
        init_db(&pool.conn)?;
        Ok(Self { pool })
    }

    pub fn conn(&self) -> &Connection {
        &self.pool.conn
    }

    // ---------------------------
    // Reads
    // ---------------------------

    pub fn meta(&self) -> AppResult<Meta> {
        meta::load_meta(self.conn())
    }

    pub fn get_entry(&self, id: i64) -> AppResult<Option<Entry>> {
        queries::get_entry(self.conn(), id)
    }

    /// The running entry, whatever sheet it belongs to.
    pub fn current_entry(&self) -> AppResult<Option<Entry>> {
        queries::find_running(self.conn())
    }

    /// Entries of `sheet` (all sheets when `None`), ascending by id.
    pub fn list_entries(&self, sheet: Option<&str>) -> AppResult<Vec<Entry>> {
        queries::load_entries(self.conn(), sheet)
    }

    pub fn last_entry(&self, sheet: Option<&str>) -> AppResult<Option<Entry>> {
        queries::last_entry(self.conn(), sheet)
    }

    /// Sheets that own at least one entry, in order of first use.
    pub fn list_sheets(&self) -> AppResult<Vec<String>> {
        queries::load_sheets(self.conn())
    }

    /// Idle time for `sheet` (all sheets when `None`).
    pub fn idle(&self, sheet: Option<&str>, now: Instant) -> AppResult<Duration> {
        let entries = self.list_entries(sheet)?;
        idle_time(&entries, now)
    }

    // ---------------------------
    // Mutations
    // ---------------------------

    /// Start a new entry. Fails with `AlreadyRunning` when any entry, in any
    /// sheet, is still open.
    pub fn start(&self, note: &str, sheet: &str, at: Instant) -> AppResult<i64> {
        let tx = self.conn().unchecked_transaction()?;
        let id = start_entry(&tx, note, sheet, at)?;
        tx.commit()?;
        Ok(id)
    }

    /// Close the running entry at `at` and remember `id` as the last
    /// checkout.
    ///
    /// The entry that gets closed is the one found running, not necessarily
    /// `id`; callers pass the running entry's id in normal use.
    pub fn stop(&self, id: i64, at: Instant) -> AppResult<Entry> {
        let tx = self.conn().unchecked_transaction()?;

        let mut running = queries::find_running(&tx)?.ok_or(AppError::NotRunning)?;

        meta::set_value(&tx, KEY_LAST_CHECKOUT_ID, &id.to_string())?;
        queries::set_end(&tx, running.id, at)?;
        ttlog(
            &tx,
            "stop",
            &running.sheet,
            &format!("Stopped entry #{}", running.id),
        )?;

        tx.commit()?;

        running.end = Some(at);
        Ok(running)
    }

    /// Start a copy of `source` (same note and sheet) at `at`, switching the
    /// current sheet to the source's sheet first when they differ.
    pub fn resume(&self, source: &Entry, at: Instant) -> AppResult<i64> {
        let tx = self.conn().unchecked_transaction()?;

        let current = meta::load_meta(&tx)?.current_sheet;
        if source.sheet != current {
            meta::rotate_sheet(&tx, &source.sheet)?;
        }

        let id = start_entry(&tx, &source.note, &source.sheet, at)?;
        ttlog(
            &tx,
            "resume",
            &source.sheet,
            &format!("Resumed entry #{} as #{}", source.id, id),
        )?;

        tx.commit()?;
        Ok(id)
    }

    /// Overwrite the supplied fields of entry `id`.
    pub fn edit(&self, id: i64, fields: &EntryEdit) -> AppResult<EditOutcome> {
        let mut entry = self.get_entry(id)?.ok_or(AppError::EntryNotFound(id))?;

        if !fields.apply_to(&mut entry) {
            return Ok(EditOutcome::Unchanged(entry));
        }

        let tx = self.conn().unchecked_transaction()?;
        queries::update_entry(&tx, &entry)?;
        ttlog(&tx, "edit", &entry.sheet, &format!("Edited entry #{}", id))?;
        tx.commit()?;

        Ok(EditOutcome::Updated(entry))
    }

    /// Delete entry `id`. Deleting an id that does not exist is a no-op.
    pub fn remove(&self, id: i64) -> AppResult<()> {
        let tx = self.conn().unchecked_transaction()?;
        let removed = queries::delete_entry(&tx, id)?;
        if removed > 0 {
            ttlog(&tx, "kill", &id.to_string(), &format!("Deleted entry #{}", id))?;
        }
        tx.commit()?;
        Ok(())
    }

    /// Delete every entry of `sheet`; returns how many were removed.
    pub fn remove_sheet(&self, sheet: &str) -> AppResult<usize> {
        let tx = self.conn().unchecked_transaction()?;
        let removed = queries::delete_sheet(&tx, sheet)?;
        ttlog(
            &tx,
            "kill",
            sheet,
            &format!("Deleted sheet \"{}\" ({} entries)", sheet, removed),
        )?;
        tx.commit()?;
        Ok(removed)
    }

    /// Make `sheet` current, remembering the previous one as last sheet.
    pub fn switch_sheet(&self, sheet: &str) -> AppResult<()> {
        validate_sheet_name(sheet)?;

        let tx = self.conn().unchecked_transaction()?;
        meta::rotate_sheet(&tx, sheet)?;
        ttlog(&tx, "sheet", sheet, &format!("Switched to sheet \"{}\"", sheet))?;
        tx.commit()?;
        Ok(())
    }
}

fn start_entry(conn: &Connection, note: &str, sheet: &str, at: Instant) -> AppResult<i64> {
    if queries::find_running(conn)?.is_some() {
        return Err(AppError::AlreadyRunning);
    }

    let id = queries::insert_entry(conn, note, sheet, at)?;
    ttlog(conn, "start", sheet, &format!("Started entry #{}", id))?;
    Ok(id)
}

pub fn validate_sheet_name(sheet: &str) -> AppResult<()> {
    if sheet.is_empty() || sheet.chars().any(char::is_whitespace) {
        return Err(AppError::InvalidSheetName(sheet.to_string()));
    }
    Ok(())
}

/// Sum of `duration_at(now)` over the entries accepted by `pred`.
pub fn aggregate<P>(entries: &[Entry], now: Instant, pred: P) -> Duration
where
    P: Fn(&Entry) -> bool,
{
    entries
        .iter()
        .filter(|e| pred(*e))
        .fold(Duration::zero(), |acc, e| acc + e.duration_at(now).0)
}

/// Idle time over an ordered list of entries.
///
/// - last entry running: gap between the previous entry's end and its start
/// - last entry finished: time elapsed since its end
pub fn idle_time(entries: &[Entry], now: Instant) -> AppResult<Duration> {
    let last = entries
        .last()
        .ok_or_else(|| AppError::NoEntries("no entries".into()))?;

    match last.end {
        Some(end) => Ok(now - end),
        None => {
            let before = entries
                .len()
                .checked_sub(2)
                .and_then(|i| entries.get(i))
                .and_then(|e| e.end)
                .ok_or_else(|| AppError::NoEntries("no entry before current one".into()))?;
            Ok(last.start - before)
        }
    }
}
