//! Local persistence for stakeholders and wizard progress.
//!
//! Everything lives in one `SQLite` database, by default at
//! `~/.adm-guide/guide.sqlite`:
//!
//! ```text
//! stakeholder       one row per stakeholder; concerns as a JSON array
//! wizard_position   a single row: the current phase and step
//! completed_step    one row per completed step id
//! ```
//!
//! The catalog, wizard, and registry never touch this module. Front ends load
//! state from here, hand it to them, and write back what changed.

mod progress;
mod stakeholder;

use std::{fs, io, path::Path};

use rusqlite::Connection;
use tracing::debug;

/// Errors that can occur during storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("corrupt data: {0}")]
    Corrupt(String),
}

pub type Result<T> = core::result::Result<T, StorageError>;

const SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS stakeholder (
        id           TEXT PRIMARY KEY,
        name         TEXT NOT NULL,
        role         TEXT NOT NULL,
        organization TEXT NOT NULL,
        concerns     TEXT NOT NULL,
        influence    TEXT NOT NULL,
        interest     TEXT NOT NULL,
        phase        TEXT NOT NULL,
        notes        TEXT NOT NULL,
        created_at   TEXT NOT NULL
    );
    CREATE TABLE IF NOT EXISTS wizard_position (
        id          INTEGER PRIMARY KEY CHECK (id = 1),
        phase_index INTEGER NOT NULL,
        step_index  INTEGER NOT NULL
    );
    CREATE TABLE IF NOT EXISTS completed_step (
        step_id TEXT PRIMARY KEY
    );
";

/// The guide's local database.
pub struct Storage {
    conn: Connection,
}

impl Storage {
    /// Opens (or creates) the database at `path`.
    ///
    /// The parent directory is created if it doesn't exist.
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let conn = Connection::open(path)?;
        debug!(path = %path.display(), "opened database");
        Self::init(conn)
    }

    /// An in-memory database, gone when dropped.
    #[cfg(test)]
    pub fn open_in_memory() -> Result<Self> {
        Self::init(Connection::open_in_memory()?)
    }

    fn init(conn: Connection) -> Result<Self> {
        conn.execute_batch(SCHEMA)?;
        Ok(Self { conn })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use tempfile::TempDir;

    #[test]
    fn open_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("guide.sqlite");

        Storage::open(&path).unwrap();

        assert!(path.is_file());
    }

    #[test]
    fn reopening_keeps_the_schema() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("guide.sqlite");

        drop(Storage::open(&path).unwrap());
        let storage = Storage::open(&path).unwrap();

        assert!(storage.load_stakeholders().unwrap().is_empty());
        assert!(storage.load_wizard_state().unwrap().is_none());
    }
}
