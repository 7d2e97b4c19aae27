//! SQLite bootstrap for the single `people` table.
//!
//! # Responsibility
//! - Open the people database file (created on first use) or an in-memory
//!   copy for tests.
//! - Bring the file up to the canonical 11-column `people` shape plus its
//!   `(last_name, first_name)` listing index.
//!
//! # Invariants
//! - Schema version is tracked via `PRAGMA user_version`.
//! - Schema steps only create missing objects; person rows are never
//!   rewritten, so a file left by an older tool keeps its data.
//! - A file stamped by a newer build is refused rather than opened.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod migrations;
mod open;

pub use open::{open_db, open_db_in_memory};

pub type DbResult<T> = Result<T, DbError>;

/// Storage-layer failure. Surfaced unchanged to store callers.
#[derive(Debug)]
pub enum DbError {
    /// Open, pragma, or statement failure reported by SQLite.
    Sqlite(rusqlite::Error),
    /// `user_version` is ahead of every schema step this build knows.
    UnsupportedSchemaVersion {
        db_version: u32,
        latest_supported: u32,
    },
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "sqlite error: {err}"),
            Self::UnsupportedSchemaVersion {
                db_version,
                latest_supported,
            } => write!(
                f,
                "people database schema version {db_version} is newer than supported {latest_supported}"
            ),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::UnsupportedSchemaVersion { .. } => None,
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}
