//! Achievements: catalog, completion evaluation, claims and streaks

mod checker;
mod definitions;
mod streaks;
mod tracker;

pub use checker::{Evaluation, ProgressSignal, evaluate};
pub use definitions::{
    Achievement, AchievementCategory, AchievementId, DEFINITIONS, Definition, FORTUNE_TARGET,
    default_catalog,
};
pub use streaks::{ExerciseLog, StreakInfo, day_string, today};
pub use tracker::{AchievementSummary, AchievementTracker, ClaimOutcome};
