use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableCount {
    pub table: String,
    pub rows: i64,
}

/// Printed as soon as a previous database file has been deleted.
pub fn removal_notice(path: &Path) -> String {
    format!("Removed existing database: {}", path.display())
}

/// What a fixture run produced, as read back from the committed file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub path: PathBuf,
    pub removed_existing: bool,
    pub tables: Vec<TableCount>,
}

impl Summary {
    /// Shell commands a human can run against the file to poke at it.
    pub fn test_commands(&self) -> [String; 2] {
        let path = self.path.display();
        [
            format!("sqlite3 {} \"SELECT * FROM users;\"", path),
            format!("sqlite3 {} \"DELETE FROM users WHERE id = 1;\"", path),
        ]
    }

    pub fn render_text(&self) -> String {
        let mut out = String::new();
        let path = self.path.display();
        let _ = writeln!(out, "Created database: {}", path);
        for t in &self.tables {
            let _ = writeln!(out, "  - {}: {} rows", t.table, t.rows);
        }
        let _ = writeln!(out);
        let _ = writeln!(out, "Test commands:");
        for cmd in self.test_commands() {
            let _ = writeln!(out, "  {}", cmd);
        }
        out
    }

    pub fn render_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).context("failed to serialize summary")
    }
}
