use crate::errors::{AppError, AppResult};
use crate::models::meta::{KEY_CURRENT_SHEET, KEY_LAST_CHECKOUT_ID, KEY_LAST_SHEET, Meta};
use rusqlite::types::Value;
use rusqlite::{Connection, params};
use std::collections::HashMap;

/// Older clients stored some meta values as integers; read everything back
/// as text.
fn value_to_string(v: Value) -> String {
    match v {
        Value::Null => String::new(),
        Value::Integer(i) => i.to_string(),
        Value::Real(f) => f.to_string(),
        Value::Text(s) => s,
        Value::Blob(b) => String::from_utf8_lossy(&b).into_owned(),
    }
}

pub fn load_meta(conn: &Connection) -> AppResult<Meta> {
    let mut stmt = conn.prepare_cached("SELECT key, value FROM meta")?;

    let rows = stmt.query_map([], |row| {
        Ok((row.get::<_, String>(0)?, row.get::<_, Value>(1)?))
    })?;

    let mut map = HashMap::new();
    for r in rows {
        let (k, v) = r?;
        map.insert(k, value_to_string(v));
    }

    let defaults = Meta::default();

    let last_checkout_id = match map.remove(KEY_LAST_CHECKOUT_ID) {
        None => defaults.last_checkout_id,
        Some(raw) => raw.trim().parse::<i64>().map_err(|_| AppError::InvalidMeta {
            key: KEY_LAST_CHECKOUT_ID.to_string(),
            value: raw.clone(),
        })?,
    };

    Ok(Meta {
        last_checkout_id,
        current_sheet: map
            .remove(KEY_CURRENT_SHEET)
            .unwrap_or(defaults.current_sheet),
        last_sheet: map.remove(KEY_LAST_SHEET).unwrap_or(defaults.last_sheet),
    })
}

pub fn set_value(conn: &Connection, key: &str, value: &str) -> AppResult<()> {
    conn.execute(
        "UPDATE meta SET value = ?1 WHERE key = ?2",
        params![value, key],
    )?;
    Ok(())
}

/// `last_sheet ← current_sheet`, then `current_sheet ← sheet`.
/// Callers run this inside a transaction.
pub fn rotate_sheet(conn: &Connection, sheet: &str) -> AppResult<()> {
    conn.execute(
        "UPDATE meta
         SET value = (SELECT value FROM meta WHERE key = ?1)
         WHERE key = ?2",
        params![KEY_CURRENT_SHEET, KEY_LAST_SHEET],
    )?;
    set_value(conn, KEY_CURRENT_SHEET, sheet)
}
