//! CLI command implementations

pub mod economy;
pub mod exercise;
pub mod export;
pub mod garden;
pub mod init;
pub mod profile;
pub mod reset;
pub mod resources;

use std::path::Path;
use std::sync::Arc;

use tracing::warn;

use back2life::economy::achievements::{AchievementId, Definition};
use back2life::{Config, Economy, KeyValueStore, SqliteStore, UnavailableStore};

/// Open the economy over the configured storage file.
///
/// If the file cannot be opened the session continues without persistence.
pub fn open_economy(data: Option<&Path>, config: &Config) -> Economy {
    let path = data
        .map(Path::to_path_buf)
        .unwrap_or_else(|| config.database_path());

    let store: Arc<dyn KeyValueStore> = match SqliteStore::open(&path) {
        Ok(store) => Arc::new(store),
        Err(e) => {
            warn!("Storage unavailable, nothing will be saved: {:#}", e);
            Arc::new(UnavailableStore)
        }
    };

    Economy::new(store, config.economy)
}

/// Announce achievements completed by the last action
pub(crate) fn print_unlocked(unlocked: &[String]) {
    for id in unlocked {
        let title = AchievementId::from_str(id)
            .and_then(Definition::get)
            .map(|d| d.title)
            .unwrap_or(id.as_str());
        println!("  Achievement unlocked: {}! Claim it with `back2life claim {}`", title, id);
    }
}
