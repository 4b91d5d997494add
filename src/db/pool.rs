//! Single SQLite connection owned by the process (one invocation, one
//! connection).

use crate::errors::AppResult;
use rusqlite::Connection;
use std::fs;
use std::path::Path;
use std::time::Duration;

/// How long a writer waits for another process holding the database lock.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

pub struct DbPool {
    pub conn: Connection,
}

impl DbPool {
    /// Open the database file, creating its parent directory if needed.
    pub fn open(path: &str) -> AppResult<Self> {
        if let Some(parent) = Path::new(path).parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(path)?;
        conn.busy_timeout(BUSY_TIMEOUT)?;
        Ok(Self { conn })
    }

    /// Private throw-away store, used by tests.
    pub fn in_memory() -> AppResult<Self> {
        let conn = Connection::open_in_memory()?;
        Ok(Self { conn })
    }
}
