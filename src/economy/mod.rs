//! Virtual economy: coin balance, achievements and the triggers that pay out
//!
//! All three share one store. Components never cache: each operation re-reads
//! what it needs, so a `Wallet` held by the tracker and one held by a reward
//! trigger always see the same balance.

pub mod achievements;
mod rewards;
mod wallet;

pub use rewards::{ExerciseOutcome, ExportOutcome, Reward, Rewards, ToolOutcome, VisitOutcome};
pub use wallet::Wallet;

use std::sync::Arc;

use tracing::info;

use crate::config::EconomySettings;
use crate::storage::{KeyValueStore, MemoryStore, StorageError, UnavailableStore};
use achievements::AchievementTracker;

/// Entry point to the economy over one store
#[derive(Clone)]
pub struct Economy {
    store: Arc<dyn KeyValueStore>,
    settings: EconomySettings,
}

impl Economy {
    pub fn new(store: Arc<dyn KeyValueStore>, settings: EconomySettings) -> Self {
        Self { store, settings }
    }

    /// Economy over a fresh in-memory store with default settings
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()), EconomySettings::default())
    }

    /// Economy that persists nothing; every read yields the defaults
    pub fn without_storage() -> Self {
        Self::new(Arc::new(UnavailableStore), EconomySettings::default())
    }

    pub fn store(&self) -> &dyn KeyValueStore {
        self.store.as_ref()
    }

    pub fn settings(&self) -> &EconomySettings {
        &self.settings
    }

    pub fn wallet(&self) -> Wallet {
        Wallet::new(self.store.clone(), self.settings.starting_balance)
    }

    pub fn achievements(&self) -> AchievementTracker {
        AchievementTracker::new(self.store.clone(), self.wallet())
    }

    pub fn rewards(&self) -> Rewards {
        Rewards::new(
            self.store.clone(),
            self.wallet(),
            self.achievements(),
            self.settings,
        )
    }

    /// Erase every persisted entity, returning the user to a first launch.
    pub fn reset_all(&self) -> Result<(), StorageError> {
        self.store.clear()?;
        info!("Cleared all stored data");
        Ok(())
    }
}
