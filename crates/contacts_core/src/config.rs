//! Store configuration.
//!
//! The only setting is the storage file location.

use std::path::{Path, PathBuf};

/// Database file used when nothing else is configured.
pub const DEFAULT_DB_FILE_NAME: &str = "database.sqlite";
/// Environment variable overriding the database file location.
pub const DB_PATH_ENV: &str = "CONTACTS_DB_PATH";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub db_path: PathBuf,
}

impl StoreConfig {
    pub fn new(db_path: impl Into<PathBuf>) -> Self {
        Self {
            db_path: db_path.into(),
        }
    }

    /// Resolves the database path from `CONTACTS_DB_PATH`, falling back to
    /// `database.sqlite` in the working directory.
    pub fn from_env() -> Self {
        Self::resolve(std::env::var(DB_PATH_ENV).ok().as_deref())
    }

    fn resolve(env_value: Option<&str>) -> Self {
        match env_value.map(str::trim) {
            Some(raw) if !raw.is_empty() => Self::new(raw),
            _ => Self::default(),
        }
    }

    pub fn db_path(&self) -> &Path {
        &self.db_path
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::new(DEFAULT_DB_FILE_NAME)
    }
}
