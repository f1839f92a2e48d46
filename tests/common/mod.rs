//! Shared test utilities for storage-backed integration tests

use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;

use back2life::{EconomySettings, Economy, SqliteStore};

/// A SQLite store in a temporary directory; the directory lives as long as this value
pub struct TestStorage {
    _dir: TempDir,
    pub path: PathBuf,
}

impl TestStorage {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("storage.db");
        Self { _dir: dir, path }
    }

    /// Open a fresh connection to the same file, as a new app session would
    pub fn open(&self) -> SqliteStore {
        SqliteStore::open(&self.path).expect("Failed to open test storage")
    }

    /// Economy with default settings over a fresh connection
    pub fn economy(&self) -> Economy {
        Economy::new(Arc::new(self.open()), EconomySettings::default())
    }
}
