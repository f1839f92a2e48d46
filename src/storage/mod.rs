//! On-device key-value storage
//!
//! Every persisted entity lives under a fixed string key with a string value
//! (a decimal integer, a flag, or a JSON document). The store is the sole
//! source of truth: callers re-read before use and write the full entity back
//! after every mutation.
//!
//! # Backends
//!
//! ```text
//! ┌──────────────────┐   ┌──────────────────┐   ┌──────────────────┐
//! │   MemoryStore    │   │   SqliteStore    │   │ UnavailableStore │
//! │     (tests)      │   │ (~/.back2life/)  │   │ (no persistence) │
//! └────────┬─────────┘   └────────┬─────────┘   └────────┬─────────┘
//!          └──────────────────────┼──────────────────────┘
//!                                 ▼
//!                    Arc<dyn KeyValueStore>
//! ```

mod memory;
mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

/// Storage keys shared by every component
pub mod keys {
    pub const COINS: &str = "coins";
    pub const ACHIEVEMENTS: &str = "achievements";
    pub const VISITED_RESOURCES: &str = "visitedResources";
    pub const EXPORTED_FORMATS: &str = "exportedFormats";
    pub const EXERCISE_LOG: &str = "exerciseLog";
    pub const TOOL_USAGE: &str = "toolUsage";
    pub const GARDEN: &str = "garden";
    pub const USER_DATA: &str = "userData";
    pub const REHAB_DATA: &str = "rehabData";
    pub const SELECTED_SEED: &str = "selectedSeed";
    pub const APP_SETTINGS: &str = "app-settings";
    pub const PROGRESS_DATA: &str = "progressData";

    /// Prefix of the per-achievement claimed marker
    pub const CLAIMED_PREFIX: &str = "claimed_";

    /// Key of the claimed marker for one achievement
    pub fn claimed(achievement_id: &str) -> String {
        format!("{}{}", CLAIMED_PREFIX, achievement_id)
    }
}

/// Errors raised by storage backends
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("No persistence backend is available")]
    Unavailable,

    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("Failed to serialize value: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Storage lock poisoned")]
    Poisoned,
}

/// String-keyed, string-valued persistent store
///
/// Implementations must be usable through a shared reference; mutation goes
/// through interior locking so a store can be shared as `Arc<dyn KeyValueStore>`.
pub trait KeyValueStore: Send + Sync {
    /// Read a value, `None` if the key was never written
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write (or overwrite) a value
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete a key; deleting a missing key is not an error
    fn remove(&self, key: &str) -> Result<(), StorageError>;

    /// Delete every key
    fn clear(&self) -> Result<(), StorageError>;
}

/// Backend that models the absence of on-device storage.
///
/// Reads and writes always fail with [`StorageError::Unavailable`]; callers
/// degrade to their defaults.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableStore;

impl KeyValueStore for UnavailableStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Unavailable)
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable)
    }

    fn remove(&self, _key: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable)
    }

    fn clear(&self) -> Result<(), StorageError> {
        Err(StorageError::Unavailable)
    }
}

/// Read a raw value, treating an unreachable backend as "absent".
pub fn read_raw(store: &dyn KeyValueStore, key: &str) -> Option<String> {
    match store.get(key) {
        Ok(value) => value,
        Err(e) => {
            debug!("Reading '{}' failed, using default: {}", key, e);
            None
        }
    }
}

/// Read and decode a JSON value.
///
/// Missing keys and unreachable storage yield `None`. A malformed document is
/// discarded (the key is removed) so the caller can reinitialize it.
pub fn read_json<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> Option<T> {
    let raw = read_raw(store, key)?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            warn!("Discarding malformed value under '{}': {}", key, e);
            if let Err(e) = store.remove(key) {
                warn!("Failed to discard '{}': {}", key, e);
            }
            None
        }
    }
}

/// Encode a value as JSON and write it under `key`.
pub fn write_json<T: Serialize + ?Sized>(
    store: &dyn KeyValueStore,
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    let raw = serde_json::to_string(value)?;
    store.set(key, &raw)
}

/// Write a value and log instead of failing.
///
/// Persistence problems never surface to the user; the in-memory result of the
/// operation stands.
pub fn persist_json<T: Serialize + ?Sized>(store: &dyn KeyValueStore, key: &str, value: &T) {
    log_write_failure(key, write_json(store, key, value));
}

/// Write a raw value and log instead of failing.
pub fn persist_raw(store: &dyn KeyValueStore, key: &str, value: &str) {
    log_write_failure(key, store.set(key, value));
}

fn log_write_failure(key: &str, result: Result<(), StorageError>) {
    match result {
        Ok(()) => {}
        // Expected when running without a backend; not worth a warning.
        Err(StorageError::Unavailable) => debug!("Not persisting '{}': storage unavailable", key),
        Err(e) => warn!("Failed to persist '{}': {}", key, e),
    }
}
