//! Virtual garden: the plant that grows as the user spends coins on care
//!
//! The plant moves through five growth stages. Each stage fills a 0..=100
//! progress bar; filling it advances to the next stage with an empty bar.

mod seed;
mod tools;

pub use seed::{SEEDS, Seed};
pub use tools::{GardenTool, ToolUsage};

use serde::{Deserialize, Serialize};

use crate::storage::{KeyValueStore, keys, persist_json, read_json};

/// Milliseconds between two frames of the growth animation
pub const ANIMATION_TICK_MS: u64 = 50;

/// Progress needed to complete a stage
pub const STAGE_PROGRESS_MAX: u32 = 100;

/// Extra height the final stage grows toward
const FINAL_STAGE_HEADROOM: f64 = 40.0;

/// A plant growth stage
#[derive(Debug, Clone)]
pub struct GrowthStage {
    pub stage: usize,
    pub image: &'static str,
    pub message: &'static str,
    pub height: u32,
}

/// All growth stages, in order
pub static GROWTH_STAGES: &[GrowthStage] = &[
    GrowthStage {
        stage: 0,
        image: "plant-stage0.png",
        message: "Hello! I'm so happy you're here to help me grow!",
        height: 50,
    },
    GrowthStage {
        stage: 1,
        image: "plant-stage1.png",
        message: "I can feel myself getting stronger with your help!",
        height: 80,
    },
    GrowthStage {
        stage: 2,
        image: "plant-growth.png",
        message: "Look at my new leaves! Just like your progress in recovery!",
        height: 120,
    },
    GrowthStage {
        stage: 3,
        image: "plant-growth.png",
        message: "I'm growing so well! Your dedication is paying off!",
        height: 160,
    },
    GrowthStage {
        stage: 4,
        image: "plant-growth.png",
        message: "I'm almost fully grown! Keep up the great work!",
        height: 200,
    },
];

/// Persisted plant state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GardenState {
    /// Index into [`GROWTH_STAGES`]
    pub stage: usize,
    /// Progress within the stage, 0..=100
    pub progress: u32,
}

/// What a growth step did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GrowthReport {
    pub before: GardenState,
    pub after: GardenState,
    /// The plant moved to the next stage
    pub advanced: bool,
}

/// One frame of the growth animation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GrowthFrame {
    pub progress: u32,
    pub height: f64,
}

impl GardenState {
    /// Load from storage; missing or malformed state starts a fresh plant
    pub fn load(store: &dyn KeyValueStore) -> Self {
        read_json::<GardenState>(store, keys::GARDEN)
            .map(Self::clamped)
            .unwrap_or_default()
    }

    pub fn save(&self, store: &dyn KeyValueStore) {
        persist_json(store, keys::GARDEN, self);
    }

    fn clamped(self) -> Self {
        Self {
            stage: self.stage.min(Self::final_stage()),
            progress: self.progress.min(STAGE_PROGRESS_MAX),
        }
    }

    fn final_stage() -> usize {
        GROWTH_STAGES.len() - 1
    }

    /// Plant level shown to the user (stage + 1)
    pub fn level(&self) -> u64 {
        self.stage as u64 + 1
    }

    pub fn is_final_stage(&self) -> bool {
        self.stage >= Self::final_stage()
    }

    pub fn current_stage(&self) -> &'static GrowthStage {
        &GROWTH_STAGES[self.stage.min(Self::final_stage())]
    }

    /// Plant height interpolated between this stage and the next
    pub fn height(&self) -> f64 {
        height_at(self.stage, self.progress)
    }

    /// Grow by `amount` percent of a stage.
    ///
    /// Progress is capped at 100; a full bar below the final stage advances
    /// the stage and empties the bar. Growth beyond the cap is lost.
    pub fn apply_growth(&mut self, amount: u32) -> GrowthReport {
        let before = *self;
        let target = self.progress.saturating_add(amount).min(STAGE_PROGRESS_MAX);
        self.progress = target;

        let advanced = target >= STAGE_PROGRESS_MAX && !self.is_final_stage();
        if advanced {
            self.stage += 1;
            self.progress = 0;
        }

        GrowthReport {
            before,
            after: *self,
            advanced,
        }
    }
}

fn height_at(stage: usize, progress: u32) -> f64 {
    let stage = stage.min(GROWTH_STAGES.len() - 1);
    let current = GROWTH_STAGES[stage].height as f64;
    let next = match GROWTH_STAGES.get(stage + 1) {
        Some(next) => next.height as f64,
        None => current + FINAL_STAGE_HEADROOM,
    };
    let ratio = progress as f64 / STAGE_PROGRESS_MAX as f64;
    current + (next - current) * ratio
}

impl GrowthReport {
    /// Animation frames, one per percent of progress gained.
    ///
    /// Frames are cosmetic; skipping them changes nothing persisted.
    pub fn frames(&self) -> Vec<GrowthFrame> {
        let from = self.before.progress;
        let to = if self.advanced {
            STAGE_PROGRESS_MAX
        } else {
            self.after.progress
        };

        ((from + 1)..=to)
            .map(|progress| GrowthFrame {
                progress,
                height: height_at(self.before.stage, progress),
            })
            .collect()
    }
}
