//! Application settings toggled from the settings screen

use serde::{Deserialize, Serialize};

use crate::storage::{KeyValueStore, keys, persist_json, read_json};

/// A toggleable setting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingKey {
    Notifications,
    SoundEffects,
    DarkMode,
}

impl SettingKey {
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "notifications" => Some(Self::Notifications),
            "soundEffects" | "sound-effects" | "sound" => Some(Self::SoundEffects),
            "darkMode" | "dark-mode" | "dark" => Some(Self::DarkMode),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Notifications => "Notifications",
            Self::SoundEffects => "Sound effects",
            Self::DarkMode => "Dark mode",
        }
    }

    pub fn all() -> &'static [SettingKey] {
        &[Self::Notifications, Self::SoundEffects, Self::DarkMode]
    }
}

/// Persisted application settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppSettings {
    #[serde(default = "default_true")]
    pub notifications: bool,
    #[serde(default = "default_true")]
    pub sound_effects: bool,
    #[serde(default)]
    pub dark_mode: bool,
}

fn default_true() -> bool {
    true
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            notifications: true,
            sound_effects: true,
            dark_mode: false,
        }
    }
}

impl AppSettings {
    pub fn load(store: &dyn KeyValueStore) -> Self {
        read_json(store, keys::APP_SETTINGS).unwrap_or_default()
    }

    pub fn save(&self, store: &dyn KeyValueStore) {
        persist_json(store, keys::APP_SETTINGS, self);
    }

    pub fn get(&self, key: SettingKey) -> bool {
        match key {
            SettingKey::Notifications => self.notifications,
            SettingKey::SoundEffects => self.sound_effects,
            SettingKey::DarkMode => self.dark_mode,
        }
    }

    /// Flip one setting and persist the whole object; returns the new value
    pub fn toggle(&mut self, key: SettingKey, store: &dyn KeyValueStore) -> bool {
        let slot = match key {
            SettingKey::Notifications => &mut self.notifications,
            SettingKey::SoundEffects => &mut self.sound_effects,
            SettingKey::DarkMode => &mut self.dark_mode,
        };
        *slot = !*slot;
        let value = *slot;
        self.save(store);
        value
    }
}
