//! Back2Life - gamified rehabilitation companion
//!
//! Users earn coins for rehabilitation activity (completing exercises,
//! visiting support resources, exporting progress reports), spend them on
//! care tools that grow a virtual plant, and unlock achievements that pay
//! out once each.
//!
//! ## Layout
//!
//! - [`storage`]: the string key-value store everything persists to
//! - [`economy`]: coin balance, achievements and reward triggers
//! - [`garden`]: the plant and the tools that grow it
//! - [`profile`]: onboarding records and app settings
//! - [`progress`]: therapy progress log and report export
//! - [`resources`]: directory of external support resources
//! - [`config`]: TOML configuration

pub mod config;
pub mod economy;
pub mod garden;
pub mod profile;
pub mod progress;
pub mod resources;
pub mod storage;

pub use config::{Config, EconomySettings};
pub use economy::achievements::{Achievement, AchievementCategory, AchievementId, ClaimOutcome};
pub use economy::{Economy, Rewards, Wallet};
pub use storage::{KeyValueStore, MemoryStore, SqliteStore, StorageError, UnavailableStore};
