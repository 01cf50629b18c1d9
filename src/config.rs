use anyhow::Result;
use clap::{Parser, ValueEnum};
use std::path::{Path, PathBuf};

use crate::logger::LogLevel;

const DB_FILE: &str = "test.db";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Yaml,
}

/// Rebuild the sample database used to exercise DELETE protections.
///
/// With no arguments the database is written to `test.db` next to this
/// crate's manifest, replacing whatever was there.
#[derive(Debug, Clone, Parser)]
#[command(name = "mockdb", version, about)]
pub struct Config {
    /// Write the database here instead of the default location.
    #[arg(long, value_name = "FILE")]
    pub path: Option<PathBuf>,

    /// How the run summary is printed.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Lowest severity that gets logged.
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Append log lines to this file instead of stderr.
    #[arg(long, value_name = "FILE")]
    pub log_file: Option<PathBuf>,
}

impl Config {
    /// The database file this run targets.
    pub fn target_path(&self) -> Result<PathBuf> {
        match &self.path {
            Some(path) => expand_path(path)
                .ok_or_else(|| anyhow::anyhow!("cannot expand file path {}", path.display())),
            None => Ok(default_db_path()),
        }
    }
}

/// Fixed location of the fixture: alongside the crate sources.
pub fn default_db_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join(DB_FILE)
}

/// Resolve a leading `~` to the home directory.
pub fn expand_path(path: &Path) -> Option<PathBuf> {
    let mut path_iter = path.iter();
    let mut expanded_path = if path.starts_with("~") {
        path_iter.next()?;
        dirs_next::home_dir()?
    } else {
        PathBuf::new()
    };
    for part in path_iter {
        expanded_path.push(part);
    }
    Some(expanded_path)
}
