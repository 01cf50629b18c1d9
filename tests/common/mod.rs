//! Read-back helpers for inspecting a built fixture file.
#![allow(dead_code)]

use rusqlite::types::ValueRef;
use rusqlite::{Connection, Result};

#[derive(Debug, Clone, PartialEq)]
pub struct Records {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>, // each inner Vec is a row of stringified values
}

impl Records {
    /// Drop the named columns from the header and from every row.
    pub fn without_columns(mut self, names: &[&str]) -> Self {
        let keep: Vec<bool> = self
            .columns
            .iter()
            .map(|c| !names.contains(&c.as_str()))
            .collect();
        let filter = |v: Vec<String>| {
            v.into_iter()
                .zip(keep.iter())
                .filter_map(|(cell, k)| k.then_some(cell))
                .collect::<Vec<_>>()
        };
        self.columns = filter(self.columns);
        self.rows = self.rows.into_iter().map(filter).collect();
        self
    }
}

#[derive(Debug, Clone)]
pub struct ColumnInfo {
    pub name: String,
    pub data_type: String,
    pub nullable: bool,
    pub default: Option<String>,
    pub primary_key: bool,
}

#[derive(Debug, Clone)]
pub struct TableProperties {
    pub columns: Vec<ColumnInfo>,
}

impl TableProperties {
    pub fn column(&self, name: &str) -> Option<&ColumnInfo> {
        self.columns.iter().find(|c| c.name == name)
    }
}

/// User tables, sorted by name.
pub fn fetch_tables(conn: &Connection) -> Result<Vec<String>> {
    let mut stmt = conn.prepare(
        "SELECT name FROM sqlite_master \
         WHERE type='table' AND name NOT LIKE 'sqlite_%' ORDER BY name",
    )?;
    let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;
    rows.collect()
}

/// Every row of `table` ordered by rowid, each cell stringified.
pub fn fetch_records(conn: &Connection, table: &str) -> Result<Records> {
    let mut stmt = conn.prepare(&format!("SELECT * FROM \"{}\" ORDER BY rowid", table))?;
    let columns: Vec<String> = stmt.column_names().into_iter().map(String::from).collect();
    let col_count = columns.len();

    let mut rows_vec = Vec::new();
    let mut rows = stmt.query([])?;
    while let Some(row) = rows.next()? {
        let mut v = Vec::with_capacity(col_count);
        for i in 0..col_count {
            v.push(stringify(row.get_ref(i)?));
        }
        rows_vec.push(v);
    }

    Ok(Records { columns, rows: rows_vec })
}

/// Column layout from `PRAGMA table_info`; empty when the table is missing.
pub fn fetch_properties(conn: &Connection, table: &str) -> Result<TableProperties> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info(\"{}\")", table))?;
    let columns = stmt
        .query_map([], |row| {
            Ok(ColumnInfo {
                name: row.get(1)?,
                data_type: row.get(2)?,
                nullable: row.get::<_, i64>(3)? == 0,
                default: row.get(4)?,
                primary_key: row.get::<_, i64>(5)? > 0,
            })
        })?
        .collect::<Result<Vec<_>>>()?;
    Ok(TableProperties { columns })
}

fn stringify(cell: ValueRef<'_>) -> String {
    match cell {
        ValueRef::Null => String::new(),
        ValueRef::Integer(i) => i.to_string(),
        ValueRef::Real(f) => f.to_string(),
        ValueRef::Text(t) => String::from_utf8_lossy(t).into_owned(),
        ValueRef::Blob(b) => format!("<blob {} bytes>", b.len()),
    }
}
