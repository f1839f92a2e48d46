//! Achievement tracker: catalog persistence, claims and signal recording

use std::sync::Arc;

use tracing::{debug, info};

use super::checker::{ProgressSignal, evaluate};
use super::definitions::{Achievement, default_catalog};
use crate::economy::Wallet;
use crate::storage::{KeyValueStore, keys, persist_json, persist_raw, read_json, read_raw};

/// Result of a claim attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClaimOutcome {
    /// Reward credited
    Claimed { reward: u64, balance: u64 },
    /// The achievement is not completed yet
    NotCompleted,
    /// The reward was already credited once
    AlreadyClaimed,
    /// No achievement with this ID in the catalog
    Unknown,
}

/// Aggregate numbers for the achievements screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AchievementSummary {
    pub completed: usize,
    pub total: usize,
    pub completion_percent: u64,
    /// Rewards of completed achievements that were claimed
    pub coins_earned: u64,
}

/// Maintains the achievement catalog and claim markers
#[derive(Clone)]
pub struct AchievementTracker {
    store: Arc<dyn KeyValueStore>,
    wallet: Wallet,
}

impl AchievementTracker {
    pub fn new(store: Arc<dyn KeyValueStore>, wallet: Wallet) -> Self {
        Self { store, wallet }
    }

    /// Persisted catalog, or the default catalog (persisted immediately)
    pub fn load(&self) -> Vec<Achievement> {
        let stored: Option<Vec<Achievement>> = read_json(self.store.as_ref(), keys::ACHIEVEMENTS);
        if let Some(catalog) = stored {
            return catalog;
        }

        let catalog = default_catalog(self.wallet.read());
        debug!("Initialized default achievement catalog");
        self.save(&catalog);
        catalog
    }

    fn save(&self, catalog: &[Achievement]) {
        persist_json(self.store.as_ref(), keys::ACHIEVEMENTS, catalog);
    }

    /// Whether the reward for `id` has been credited
    pub fn is_claimed(&self, id: &str) -> bool {
        read_raw(self.store.as_ref(), &keys::claimed(id)).is_some_and(|v| v == "true")
    }

    /// Credit a completed achievement's reward, at most once.
    pub fn claim(&self, achievement: &Achievement) -> ClaimOutcome {
        if !achievement.completed {
            return ClaimOutcome::NotCompleted;
        }
        if self.is_claimed(&achievement.id) {
            return ClaimOutcome::AlreadyClaimed;
        }

        let balance = self.wallet.credit(achievement.reward);
        persist_raw(self.store.as_ref(), &keys::claimed(&achievement.id), "true");

        let mut catalog = self.load();
        for record in catalog.iter_mut().filter(|a| a.id == achievement.id) {
            record.claimed = Some(true);
        }
        self.save(&catalog);

        info!(
            "Claimed achievement '{}' (+{} coins)",
            achievement.id, achievement.reward
        );
        self.record(&ProgressSignal::BalanceObserved(balance));

        ClaimOutcome::Claimed {
            reward: achievement.reward,
            balance,
        }
    }

    /// Claim the catalog entry with this ID
    pub fn claim_by_id(&self, id: &str) -> ClaimOutcome {
        let catalog = self.load();
        match catalog.iter().find(|a| a.id == id) {
            Some(achievement) => self.claim(achievement),
            None => ClaimOutcome::Unknown,
        }
    }

    /// Feed a signal through the evaluator and persist the result.
    ///
    /// Returns the IDs that became completed.
    pub fn record(&self, signal: &ProgressSignal) -> Vec<String> {
        let catalog = self.load();
        let evaluation = evaluate(&catalog, signal);

        if evaluation.changed {
            self.save(&evaluation.catalog);
        }
        for id in &evaluation.newly_completed {
            info!("Achievement unlocked: {}", id);
        }

        evaluation.newly_completed
    }

    /// Completion statistics over the current catalog
    pub fn summary(&self) -> AchievementSummary {
        let catalog = self.load();
        let total = catalog.len();
        let completed = catalog.iter().filter(|a| a.completed).count();
        let completion_percent = if total == 0 {
            0
        } else {
            (completed as f64 / total as f64 * 100.0).round() as u64
        };
        let coins_earned = catalog
            .iter()
            .filter(|a| a.completed && self.is_claimed(&a.id))
            .map(|a| a.reward)
            .sum();

        AchievementSummary {
            completed,
            total,
            completion_percent,
            coins_earned,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::economy::achievements::AchievementCategory;
    use crate::storage::{MemoryStore, UnavailableStore};

    fn tracker() -> (Arc<MemoryStore>, AchievementTracker) {
        let store = Arc::new(MemoryStore::new());
        let wallet = Wallet::new(store.clone(), 100);
        (store.clone(), AchievementTracker::new(store, wallet))
    }

    fn custom(id: &str, reward: u64, completed: bool) -> Achievement {
        Achievement {
            id: id.to_string(),
            category: AchievementCategory::Special,
            title: "Custom".to_string(),
            description: "A custom milestone".to_string(),
            icon: String::new(),
            requirement: String::new(),
            reward,
            completed,
            progress: None,
            max_progress: None,
            claimed: None,
        }
    }

    #[test]
    fn test_fresh_load_persists_default_catalog() {
        let (store, tracker) = tracker();
        let catalog = tracker.load();
        assert_eq!(catalog.len(), 9);
        assert!(store.get(keys::ACHIEVEMENTS).unwrap().is_some());
        assert_eq!(tracker.load(), catalog);
    }

    #[test]
    fn test_claim_twice_credits_once() {
        let (_, tracker) = tracker();
        let a1 = custom("a1", 20, true);

        assert_eq!(
            tracker.claim(&a1),
            ClaimOutcome::Claimed {
                reward: 20,
                balance: 120
            }
        );
        assert!(tracker.is_claimed("a1"));
        assert_eq!(tracker.claim(&a1), ClaimOutcome::AlreadyClaimed);
        assert_eq!(tracker.wallet.read(), 120);
    }

    #[test]
    fn test_incomplete_claim_is_noop() {
        let (store, tracker) = tracker();
        assert_eq!(
            tracker.claim(&custom("a2", 20, false)),
            ClaimOutcome::NotCompleted
        );
        assert!(!tracker.is_claimed("a2"));
        assert_eq!(store.get(keys::COINS).unwrap(), None);
    }

    #[test]
    fn test_claim_by_id_marks_record() {
        let (_, tracker) = tracker();
        // Fresh balance 100 completes "First Fortune"
        assert_eq!(
            tracker.claim_by_id("reach-100-coins"),
            ClaimOutcome::Claimed {
                reward: 50,
                balance: 150
            }
        );
        let record = tracker
            .load()
            .into_iter()
            .find(|a| a.id == "reach-100-coins")
            .unwrap();
        assert_eq!(record.claimed, Some(true));

        assert_eq!(tracker.claim_by_id("secret"), ClaimOutcome::NotCompleted);
        assert_eq!(tracker.claim_by_id("missing"), ClaimOutcome::Unknown);
    }

    #[test]
    fn test_record_persists_unlocks() {
        let (_, tracker) = tracker();
        let unlocked = tracker.record(&ProgressSignal::ReportExported);
        assert_eq!(unlocked, vec!["export-data"]);
        assert!(tracker.record(&ProgressSignal::ReportExported).is_empty());

        let export = tracker
            .load()
            .into_iter()
            .find(|a| a.id == "export-data")
            .unwrap();
        assert!(export.completed);
    }

    #[test]
    fn test_summary_counts_claimed_rewards() {
        let (_, tracker) = tracker();
        tracker.record(&ProgressSignal::ReportExported);
        tracker.claim_by_id("export-data");

        let summary = tracker.summary();
        assert_eq!(summary.total, 9);
        assert_eq!(summary.completed, 2);
        assert_eq!(summary.completion_percent, 22);
        assert_eq!(summary.coins_earned, 25);
    }

    #[test]
    fn test_malformed_catalog_is_reset() {
        let (store, tracker) = tracker();
        store.set(keys::ACHIEVEMENTS, "{\"oops\":").unwrap();
        assert_eq!(tracker.load().len(), 9);
        let raw = store.get(keys::ACHIEVEMENTS).unwrap().unwrap();
        assert!(raw.starts_with('['));
    }

    #[test]
    fn test_unavailable_storage_serves_defaults() {
        let store: Arc<dyn KeyValueStore> = Arc::new(UnavailableStore);
        let tracker = AchievementTracker::new(store.clone(), Wallet::new(store, 100));
        assert_eq!(tracker.load().len(), 9);
        assert!(!tracker.is_claimed("reach-100-coins"));
    }
}
