//! Store configuration.
//!
//! # Responsibility
//! - Carry the storage location into `PersonStore` explicitly.
//!
//! # Invariants
//! - The default location is `people.db` relative to the working directory.

use std::path::{Path, PathBuf};

/// Default SQLite file name used when no location is configured.
pub const DEFAULT_DB_FILE_NAME: &str = "people.db";

/// Configuration value passed to `PersonStore::new`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// SQLite database file. Created on first open when absent.
    pub db_path: PathBuf,
}

impl StoreConfig {
    pub fn new(db_path: impl Into<PathBuf>) -> Self {
        Self {
            db_path: db_path.into(),
        }
    }

    pub fn db_path(&self) -> &Path {
        self.db_path.as_path()
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::new(DEFAULT_DB_FILE_NAME)
    }
}
