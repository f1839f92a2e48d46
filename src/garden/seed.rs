//! Seed choice made during onboarding

use serde::{Deserialize, Serialize};

use crate::storage::{KeyValueStore, keys, persist_raw, read_raw};

/// The plant the user chose to grow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Seed {
    Sunflower,
    Rose,
    Cactus,
}

/// All seeds offered on the selection screen
pub static SEEDS: &[Seed] = &[Seed::Sunflower, Seed::Rose, Seed::Cactus];

impl Seed {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sunflower => "sunflower",
            Self::Rose => "rose",
            Self::Cactus => "cactus",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        SEEDS.iter().copied().find(|seed| seed.as_str() == s.to_lowercase())
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Sunflower => "Sunflower",
            Self::Rose => "Rose",
            Self::Cactus => "Cactus",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Sunflower => "Grows tall and bright, just like your progress!",
            Self::Rose => "Beautiful but requires patience and care.",
            Self::Cactus => "Resilient and strong, even in tough conditions.",
        }
    }

    /// The stored choice; stored as a plain string, not JSON
    pub fn load(store: &dyn KeyValueStore) -> Option<Self> {
        read_raw(store, keys::SELECTED_SEED).and_then(|raw| Self::from_str(raw.trim()))
    }

    pub fn save(&self, store: &dyn KeyValueStore) {
        persist_raw(store, keys::SELECTED_SEED, self.as_str());
    }
}
