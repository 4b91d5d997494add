use crate::errors::{AppError, AppResult};
use crate::models::entry::Entry;
use crate::utils::time::{Instant, format_timestamp, parse_timestamp};
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

const SELECT_ENTRIES: &str = r#"SELECT id, note, start, "end", sheet FROM entries"#;

fn conversion_error(col: usize, value: &str) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(
        col,
        rusqlite::types::Type::Text,
        Box::new(AppError::InvalidDate(value.to_string())),
    )
}

fn timestamp_column(row: &Row, col: usize) -> Result<Option<Instant>> {
    let raw: Option<String> = row.get(col)?;
    match raw {
        None => Ok(None),
        Some(s) => parse_timestamp(&s)
            .map(Some)
            .ok_or_else(|| conversion_error(col, &s)),
    }
}

pub fn map_row(row: &Row) -> Result<Entry> {
    let start = timestamp_column(row, 2)?.ok_or_else(|| conversion_error(2, "NULL"))?;

    Ok(Entry {
        id: row.get(0)?,
        note: row.get::<_, Option<String>>(1)?.unwrap_or_default(),
        start,
        end: timestamp_column(row, 3)?,
        sheet: row.get::<_, Option<String>>(4)?.unwrap_or_default(),
    })
}

pub fn get_entry(conn: &Connection, id: i64) -> AppResult<Option<Entry>> {
    let mut stmt = conn.prepare_cached(&format!("{SELECT_ENTRIES} WHERE id = ?1"))?;
    Ok(stmt.query_row([id], map_row).optional()?)
}

/// The entry without an end, looked up across every sheet.
pub fn find_running(conn: &Connection) -> AppResult<Option<Entry>> {
    let mut stmt = conn.prepare_cached(&format!(
        r#"{SELECT_ENTRIES} WHERE "end" IS NULL ORDER BY id ASC LIMIT 1"#
    ))?;
    Ok(stmt.query_row([], map_row).optional()?)
}

/// Entries of one sheet (or all of them), in insertion order.
pub fn load_entries(conn: &Connection, sheet: Option<&str>) -> AppResult<Vec<Entry>> {
    let mut out = Vec::new();

    match sheet {
        Some(name) => {
            let mut stmt =
                conn.prepare_cached(&format!("{SELECT_ENTRIES} WHERE sheet = ?1 ORDER BY id ASC"))?;
            for r in stmt.query_map([name], map_row)? {
                out.push(r?);
            }
        }
        None => {
            let mut stmt = conn.prepare_cached(&format!("{SELECT_ENTRIES} ORDER BY id ASC"))?;
            for r in stmt.query_map([], map_row)? {
                out.push(r?);
            }
        }
    }

    Ok(out)
}

pub fn last_entry(conn: &Connection, sheet: Option<&str>) -> AppResult<Option<Entry>> {
    let entry = match sheet {
        Some(name) => conn
            .prepare_cached(&format!(
                "{SELECT_ENTRIES} WHERE sheet = ?1 ORDER BY id DESC LIMIT 1"
            ))?
            .query_row([name], map_row)
            .optional()?,
        None => conn
            .prepare_cached(&format!("{SELECT_ENTRIES} ORDER BY id DESC LIMIT 1"))?
            .query_row([], map_row)
            .optional()?,
    };
    Ok(entry)
}

/// Distinct sheet names, ordered by first appearance.
pub fn load_sheets(conn: &Connection) -> AppResult<Vec<String>> {
    let mut stmt = conn.prepare_cached(
        "SELECT sheet FROM entries
         WHERE sheet IS NOT NULL
         GROUP BY sheet
         ORDER BY MIN(id) ASC",
    )?;

    let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn insert_entry(
    conn: &Connection,
    note: &str,
    sheet: &str,
    start: Instant,
) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO entries (note, start, sheet) VALUES (?1, ?2, ?3)",
        params![note, format_timestamp(start), sheet],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn set_end(conn: &Connection, id: i64, end: Instant) -> AppResult<()> {
    conn.execute(
        r#"UPDATE entries SET "end" = ?1 WHERE id = ?2"#,
        params![format_timestamp(end), id],
    )?;
    Ok(())
}

/// Update an entry (all fields except id)
pub fn update_entry(conn: &Connection, entry: &Entry) -> AppResult<()> {
    conn.execute(
        r#"UPDATE entries
           SET sheet = ?1, note = ?2, start = ?3, "end" = ?4
           WHERE id = ?5"#,
        params![
            entry.sheet,
            entry.note,
            format_timestamp(entry.start),
            entry.end.map(format_timestamp),
            entry.id,
        ],
    )?;
    Ok(())
}

/// Delete by id. A missing id is not an error; the affected row count is
/// returned.
pub fn delete_entry(conn: &Connection, id: i64) -> AppResult<usize> {
    Ok(conn.execute("DELETE FROM entries WHERE id = ?1", [id])?)
}

pub fn delete_sheet(conn: &Connection, sheet: &str) -> AppResult<usize> {
    Ok(conn.execute("DELETE FROM entries WHERE sheet = ?1", [sheet])?)
}
