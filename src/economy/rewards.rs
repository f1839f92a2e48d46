//! Reward triggers: the user actions that move coins
//!
//! Visits and exports pay once per key, guarded by a persisted set checked
//! before crediting. Exercises pay on every completion. Garden tools cost
//! coins and go through the wallet's debit guard.

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::info;

use super::Wallet;
use super::achievements::{AchievementTracker, ExerciseLog, ProgressSignal, today};
use crate::config::EconomySettings;
use crate::garden::{GardenState, GardenTool, GrowthReport, ToolUsage};
use crate::profile::{PlannedExercise, RehabPlan};
use crate::progress::ExportFormat;
use crate::storage::{KeyValueStore, keys, persist_json, read_json};

/// Coins credited by a trigger
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reward {
    pub amount: u64,
    pub balance: u64,
    /// Achievements completed as a consequence
    pub unlocked: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VisitOutcome {
    Rewarded(Reward),
    AlreadyVisited,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    Rewarded(Reward),
    AlreadyRewarded,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExerciseOutcome {
    pub reward: Reward,
    /// Exercises completed, all time
    pub total: u64,
    pub streak_days: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolOutcome {
    Applied {
        tool: GardenTool,
        balance: u64,
        growth: GrowthReport,
        message: &'static str,
        unlocked: Vec<String>,
    },
    /// Nothing was spent and the plant did not grow
    InsufficientFunds {
        balance: u64,
        cost: u64,
        message: String,
    },
}

/// Reward triggers over one store
#[derive(Clone)]
pub struct Rewards {
    store: Arc<dyn KeyValueStore>,
    wallet: Wallet,
    tracker: AchievementTracker,
    settings: EconomySettings,
}

impl Rewards {
    pub fn new(
        store: Arc<dyn KeyValueStore>,
        wallet: Wallet,
        tracker: AchievementTracker,
        settings: EconomySettings,
    ) -> Self {
        Self {
            store,
            wallet,
            tracker,
            settings,
        }
    }

    fn observe(&self, signals: &[ProgressSignal]) -> Vec<String> {
        signals
            .iter()
            .flat_map(|signal| self.tracker.record(signal))
            .collect()
    }

    /// URLs already rewarded, in visit order
    pub fn visited_resources(&self) -> Vec<String> {
        read_json(self.store.as_ref(), keys::VISITED_RESOURCES).unwrap_or_default()
    }

    /// Reward the first visit to each distinct URL
    pub fn visit_resource(&self, url: &str) -> VisitOutcome {
        let mut visited = self.visited_resources();
        if visited.iter().any(|u| u == url) {
            return VisitOutcome::AlreadyVisited;
        }

        let amount = self.settings.resource_visit_reward;
        let balance = self.wallet.credit(amount);
        visited.push(url.to_string());
        persist_json(self.store.as_ref(), keys::VISITED_RESOURCES, &visited);
        info!("First visit to {} (+{} coins)", url, amount);

        let unlocked = self.observe(&[
            ProgressSignal::ResourcesVisited {
                distinct: visited.len() as u64,
            },
            ProgressSignal::BalanceObserved(balance),
        ]);

        VisitOutcome::Rewarded(Reward {
            amount,
            balance,
            unlocked,
        })
    }

    /// The exercise to perform next, picked from the rehab plan
    pub fn choose_exercise(&self) -> PlannedExercise {
        RehabPlan::load(self.store.as_ref())
            .map(|plan| plan.pick_exercise())
            .unwrap_or_else(PlannedExercise::fallback)
    }

    /// Stored exercise history
    pub fn exercise_log(&self) -> ExerciseLog {
        read_json(self.store.as_ref(), keys::EXERCISE_LOG).unwrap_or_default()
    }

    /// Exercise streak as seen on `day`; a lapsed streak reads as zero
    pub fn exercise_streak_on(&self, day: NaiveDate) -> u64 {
        self.exercise_log().streak.current_on(day)
    }

    /// Reward a completed exercise; pays every time
    pub fn complete_exercise(&self) -> ExerciseOutcome {
        self.complete_exercise_on(today())
    }

    pub fn complete_exercise_on(&self, day: NaiveDate) -> ExerciseOutcome {
        let amount = self.settings.exercise_reward;
        let balance = self.wallet.credit(amount);

        let mut log = self.exercise_log();
        log.record_completion(day);
        persist_json(self.store.as_ref(), keys::EXERCISE_LOG, &log);
        info!(
            "Exercise completed (+{} coins, streak {} days)",
            amount, log.streak.current
        );

        let unlocked = self.observe(&[
            ProgressSignal::ExerciseCompleted {
                total: log.total,
                streak_days: log.streak.current,
            },
            ProgressSignal::BalanceObserved(balance),
        ]);

        ExerciseOutcome {
            reward: Reward {
                amount,
                balance,
                unlocked,
            },
            total: log.total,
            streak_days: log.streak.current,
        }
    }

    /// Formats already rewarded
    pub fn exported_formats(&self) -> Vec<ExportFormat> {
        read_json(self.store.as_ref(), keys::EXPORTED_FORMATS).unwrap_or_default()
    }

    /// Reward the first export in each format
    pub fn export_report(&self, format: ExportFormat) -> ExportOutcome {
        let mut exported = self.exported_formats();
        if exported.contains(&format) {
            return ExportOutcome::AlreadyRewarded;
        }

        let amount = self.settings.export_reward;
        let balance = self.wallet.credit(amount);
        exported.push(format);
        persist_json(self.store.as_ref(), keys::EXPORTED_FORMATS, &exported);
        info!("First {} export (+{} coins)", format.as_str(), amount);

        let unlocked = self.observe(&[
            ProgressSignal::ReportExported,
            ProgressSignal::BalanceObserved(balance),
        ]);

        ExportOutcome::Rewarded(Reward {
            amount,
            balance,
            unlocked,
        })
    }

    /// Spend coins on a garden tool and grow the plant
    pub fn use_tool(&self, tool: GardenTool) -> ToolOutcome {
        self.use_tool_on(tool, today())
    }

    pub fn use_tool_on(&self, tool: GardenTool, day: NaiveDate) -> ToolOutcome {
        let cost = self.settings.tool_cost;
        if !self.wallet.debit(cost) {
            return ToolOutcome::InsufficientFunds {
                balance: self.wallet.read(),
                cost,
                message: format!("You need {} coins to use this tool!", cost),
            };
        }
        let balance = self.wallet.read();

        let mut garden = GardenState::load(self.store.as_ref());
        let growth = garden.apply_growth(tool.growth());
        garden.save(self.store.as_ref());

        let mut usage = ToolUsage::load(self.store.as_ref());
        usage.record(tool, day);
        usage.save(self.store.as_ref());
        info!(
            "Used {} (-{} coins), plant level {} at {}%",
            tool.as_str(),
            cost,
            garden.level(),
            garden.progress
        );

        let unlocked = self.observe(&[
            ProgressSignal::ToolsUsedToday {
                distinct: usage.care_tools_used(),
            },
            ProgressSignal::PlantLevel(garden.level()),
            ProgressSignal::BalanceObserved(balance),
        ]);

        ToolOutcome::Applied {
            tool,
            balance,
            growth,
            message: tool.message(),
            unlocked,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::economy::Economy;
    use crate::economy::achievements::ClaimOutcome;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 6, d).unwrap()
    }

    #[test]
    fn test_visit_rewards_once_per_url() {
        let economy = Economy::in_memory();
        let rewards = economy.rewards();

        let VisitOutcome::Rewarded(first) = rewards.visit_resource("https://www.enosh.org.il/")
        else {
            panic!("first visit should pay");
        };
        assert_eq!(first.amount, 5);
        assert_eq!(first.balance, 105);

        assert_eq!(
            rewards.visit_resource("https://www.enosh.org.il/"),
            VisitOutcome::AlreadyVisited
        );
        assert_eq!(economy.wallet().read(), 105);
        assert_eq!(rewards.visited_resources(), vec!["https://www.enosh.org.il/"]);
    }

    #[test]
    fn test_third_distinct_visit_unlocks_explorer() {
        let rewards = Economy::in_memory().rewards();
        rewards.visit_resource("https://a.example/");
        rewards.visit_resource("https://b.example/");
        let VisitOutcome::Rewarded(third) = rewards.visit_resource("https://c.example/") else {
            panic!("third visit should pay");
        };
        assert_eq!(third.unlocked, vec!["visit-resources"]);
    }

    #[test]
    fn test_exercise_pays_every_time() {
        let economy = Economy::in_memory();
        let rewards = economy.rewards();

        let first = rewards.complete_exercise_on(day(1));
        assert_eq!(first.reward.balance, 110);
        assert_eq!(first.reward.unlocked, vec!["first-exercise"]);

        let second = rewards.complete_exercise_on(day(1));
        assert_eq!(second.reward.balance, 120);
        assert_eq!(second.total, 2);
        assert_eq!(second.streak_days, 1);
        assert!(second.reward.unlocked.is_empty());
    }

    #[test]
    fn test_three_day_streak_unlocks_consistency() {
        let rewards = Economy::in_memory().rewards();
        rewards.complete_exercise_on(day(1));
        rewards.complete_exercise_on(day(2));
        let third = rewards.complete_exercise_on(day(3));
        assert_eq!(third.streak_days, 3);
        assert_eq!(third.reward.unlocked, vec!["exercise-streak"]);
    }

    #[test]
    fn test_export_rewards_once_per_format() {
        let economy = Economy::in_memory();
        let rewards = economy.rewards();

        let ExportOutcome::Rewarded(csv) = rewards.export_report(ExportFormat::Csv) else {
            panic!("first csv export should pay");
        };
        assert_eq!(csv.balance, 110);
        assert_eq!(csv.unlocked, vec!["export-data"]);

        assert_eq!(
            rewards.export_report(ExportFormat::Csv),
            ExportOutcome::AlreadyRewarded
        );
        assert!(matches!(
            rewards.export_report(ExportFormat::Pdf),
            ExportOutcome::Rewarded(Reward { balance: 120, .. })
        ));
        assert_eq!(economy.wallet().read(), 120);
    }

    #[test]
    fn test_tool_use_spends_and_grows() {
        let economy = Economy::in_memory();
        let rewards = economy.rewards();

        let ToolOutcome::Applied {
            balance, growth, ..
        } = rewards.use_tool_on(GardenTool::Water, day(1))
        else {
            panic!("tool use should succeed");
        };
        assert_eq!(balance, 90);
        assert_eq!(growth.after.progress, 15);
        assert_eq!(GardenState::load(economy.store()).progress, 15);
    }

    #[test]
    fn test_tool_use_rejected_without_funds() {
        let economy = Economy::in_memory();
        assert!(economy.wallet().debit(95));
        let rewards = economy.rewards();

        let outcome = rewards.use_tool_on(GardenTool::Fertilizer, day(1));
        assert_eq!(
            outcome,
            ToolOutcome::InsufficientFunds {
                balance: 5,
                cost: 10,
                message: "You need 10 coins to use this tool!".to_string(),
            }
        );
        assert_eq!(economy.wallet().read(), 5);
        assert_eq!(GardenState::load(economy.store()), GardenState::default());
    }

    #[test]
    fn test_water_and_sun_unlock_green_thumb() {
        let rewards = Economy::in_memory().rewards();
        rewards.use_tool_on(GardenTool::Water, day(1));
        let ToolOutcome::Applied { unlocked, .. } = rewards.use_tool_on(GardenTool::Sun, day(1))
        else {
            panic!("tool use should succeed");
        };
        assert_eq!(unlocked, vec!["use-all-tools"]);
    }

    #[test]
    fn test_choose_exercise_without_plan() {
        let rewards = Economy::in_memory().rewards();
        assert_eq!(rewards.choose_exercise(), PlannedExercise::fallback());
    }

    #[test]
    fn test_malformed_visited_set_is_reset() {
        let economy = Economy::in_memory();
        economy.store().set(keys::VISITED_RESOURCES, "[oops").unwrap();

        let outcome = economy.rewards().visit_resource("https://www.reuth.org.il/");
        assert!(matches!(
            outcome,
            VisitOutcome::Rewarded(Reward { balance: 105, .. })
        ));
        assert_eq!(
            economy.store().get(keys::VISITED_RESOURCES).unwrap().as_deref(),
            Some(r#"["https://www.reuth.org.il/"]"#)
        );
    }

    #[test]
    fn test_malformed_export_set_is_reset() {
        let economy = Economy::in_memory();
        economy.store().set(keys::EXPORTED_FORMATS, "{").unwrap();

        assert!(matches!(
            economy.rewards().export_report(ExportFormat::Csv),
            ExportOutcome::Rewarded(Reward { balance: 110, .. })
        ));
        assert_eq!(
            economy.store().get(keys::EXPORTED_FORMATS).unwrap().as_deref(),
            Some(r#"["csv"]"#)
        );
    }

    #[test]
    fn test_triggers_without_storage() {
        let economy = Economy::without_storage();
        let rewards = economy.rewards();

        // Nothing persists, so every call starts from the defaults
        for _ in 0..2 {
            assert!(matches!(
                rewards.visit_resource("https://www.eran.org.il/"),
                VisitOutcome::Rewarded(Reward { balance: 105, .. })
            ));
            assert!(matches!(
                rewards.export_report(ExportFormat::Pdf),
                ExportOutcome::Rewarded(Reward { balance: 110, .. })
            ));
        }
        assert_eq!(
            economy.achievements().claim_by_id("reach-100-coins"),
            ClaimOutcome::Claimed {
                reward: 50,
                balance: 150
            }
        );
        assert!(matches!(
            rewards.use_tool_on(GardenTool::Water, day(1)),
            ToolOutcome::Applied { balance: 100, .. }
        ));
        assert_eq!(economy.wallet().read(), 100);
    }

    #[test]
    fn test_exercise_streak_lapses() {
        let rewards = Economy::in_memory().rewards();
        assert_eq!(rewards.exercise_streak_on(day(1)), 0);

        rewards.complete_exercise_on(day(1));
        rewards.complete_exercise_on(day(2));
        assert_eq!(rewards.exercise_streak_on(day(3)), 2);
        assert_eq!(rewards.exercise_streak_on(day(4)), 0);
    }
}
