use crate::errors::AppResult;
use crate::models::meta::Meta;
use rusqlite::{Connection, params};

/// Same layout as the classic timetrap database, so existing files open
/// unchanged.
const SCHEMA: &str = r#"
    CREATE TABLE IF NOT EXISTS entries (
        id     INTEGER NOT NULL PRIMARY KEY AUTOINCREMENT,
        note   VARCHAR(255),
        start  TIMESTAMP,
        "end"  TIMESTAMP,
        sheet  VARCHAR(255)
    );

    CREATE TABLE IF NOT EXISTS meta (
        id     INTEGER NOT NULL PRIMARY KEY AUTOINCREMENT,
        key    VARCHAR(255),
        value  VARCHAR(255)
    );

    CREATE TABLE IF NOT EXISTS log (
        id        INTEGER PRIMARY KEY AUTOINCREMENT,
        date      TEXT NOT NULL,
        operation TEXT NOT NULL,
        target    TEXT DEFAULT '',
        message   TEXT NOT NULL
    );
"#;

/// Initialize the database.
///
/// Creates missing tables and seeds every missing meta key. Safe to run on
/// every open: an initialized store is left untouched.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    let tx = conn.unchecked_transaction()?;

    tx.execute_batch(SCHEMA)?;

    for (key, value) in Meta::seed_rows() {
        tx.execute(
            "INSERT INTO meta (key, value)
             SELECT ?1, ?2
             WHERE NOT EXISTS (SELECT 1 FROM meta WHERE key = ?1)",
            params![key, value],
        )?;
    }

    tx.commit()?;
    Ok(())
}
