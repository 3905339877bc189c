//! Lookup configuration.

use std::path::{Path, PathBuf};

/// Database file name used when no path is configured.
pub const DEFAULT_DATABASE: &str = "qqwry.dat";

/// Configuration for an [`IpLocation`](crate::IpLocation).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Path of the qqwry database file
    pub database: PathBuf,
}

impl Config {
    /// Create a Config for the given database path.
    pub fn new(database: impl AsRef<Path>) -> Self {
        Self {
            database: database.as_ref().to_path_buf(),
        }
    }

    /// Replace the database path.
    pub fn with_database(mut self, database: impl AsRef<Path>) -> Self {
        self.database = database.as_ref().to_path_buf();
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_DATABASE)
    }
}
