//! Configuration loading and management

mod economy;
mod io;

pub use economy::EconomySettings;

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Where persisted state lives
    #[serde(default)]
    pub storage: StorageSettings,

    /// Reward amounts and costs
    #[serde(default)]
    pub economy: EconomySettings,
}

/// Storage settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StorageSettings {
    /// Path of the SQLite storage file (defaults to ~/.back2life/storage.db)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database: Option<PathBuf>,
}

impl Config {
    /// Resolved storage file path
    pub fn database_path(&self) -> PathBuf {
        self.storage
            .database
            .clone()
            .unwrap_or_else(Self::default_database_path)
    }

    /// Default storage file path (~/.back2life/storage.db)
    pub fn default_database_path() -> PathBuf {
        Self::global_config_dir().join("storage.db")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_gives_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.economy.starting_balance, 100);
        assert_eq!(config.database_path(), Config::default_database_path());
    }

    #[test]
    fn test_partial_economy_section() {
        let config: Config = toml::from_str(
            r#"
            [storage]
            database = "/tmp/garden.db"

            [economy]
            tool_cost = 15
            "#,
        )
        .unwrap();

        assert_eq!(config.database_path(), PathBuf::from("/tmp/garden.db"));
        assert_eq!(config.economy.tool_cost, 15);
        assert_eq!(config.economy.resource_visit_reward, 5);
        assert_eq!(config.economy.export_reward, 10);
    }
}
