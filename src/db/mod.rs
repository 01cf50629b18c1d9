pub mod schema;

use std::path::Path;

use anyhow::{Context, Result};
use rusqlite::Connection;

use crate::logger::debug;

/// Open (creating if needed) the SQLite file with foreign keys enforced.
pub fn open(path: &Path) -> Result<Connection> {
    debug(&format!("sqlite: opening {}", path.display()));
    let conn = Connection::open(path)
        .with_context(|| format!("failed to open database at {}", path.display()))?;
    conn.pragma_update(None, "foreign_keys", "ON")
        .context("failed to enable foreign keys")?;
    Ok(conn)
}

pub fn count_rows(conn: &Connection, table: &str) -> Result<i64> {
    conn.query_row(&format!("SELECT count(*) FROM \"{}\"", table), [], |row| row.get(0))
        .with_context(|| format!("failed to count rows in {}", table))
}
