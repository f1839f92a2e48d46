//! Onboarding records: who the user is and what they are recovering from

mod settings;

pub use settings::{AppSettings, SettingKey};

use serde::{Deserialize, Serialize};

use crate::storage::{KeyValueStore, keys, persist_json, read_json};

/// Injury types offered during onboarding
pub static INJURY_TYPES: &[&str] = &[
    "Knee Injury",
    "Shoulder Injury",
    "Back Pain",
    "Ankle Sprain",
    "Wrist Injury",
    "Hip Pain",
    "Neck Pain",
    "Elbow Injury",
];

/// Rehabilitation plan types offered during onboarding
pub static REHAB_PLANS: &[&str] = &[
    "Strength Training",
    "Flexibility Exercises",
    "Balance Training",
    "Cardiovascular Exercise",
    "Aquatic Therapy",
    "Manual Therapy",
    "Functional Training",
];

/// Plan types whose name contains `term`, ignoring case
pub fn search_rehab_plans(term: &str) -> Vec<&'static str> {
    let term = term.to_lowercase();
    REHAB_PLANS
        .iter()
        .copied()
        .filter(|plan| plan.to_lowercase().contains(&term))
        .collect()
}

/// The catalog spelling of a plan type typed in any case
pub fn find_rehab_plan(name: &str) -> Option<&'static str> {
    let name = name.trim();
    REHAB_PLANS
        .iter()
        .copied()
        .find(|plan| plan.eq_ignore_ascii_case(name))
}

/// Registration details
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub full_name: String,
    pub email: String,
    /// Kept as entered
    #[serde(default)]
    pub age: String,
}

impl UserProfile {
    pub fn load(store: &dyn KeyValueStore) -> Option<Self> {
        read_json(store, keys::USER_DATA)
    }

    pub fn save(&self, store: &dyn KeyValueStore) {
        persist_json(store, keys::USER_DATA, self);
    }
}

/// One exercise of the rehabilitation plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannedExercise {
    pub name: String,
    /// Times per day, as entered
    pub frequency: String,
}

impl PlannedExercise {
    pub fn new(name: impl Into<String>, frequency: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            frequency: frequency.into(),
        }
    }

    /// Exercise used when no plan is available
    pub fn fallback() -> Self {
        Self::new("Stretching Exercise", "1")
    }

    /// "1 time" / "3 times"
    pub fn times_label(&self) -> String {
        if self.frequency == "1" {
            "1 time".to_string()
        } else {
            format!("{} times", self.frequency)
        }
    }
}

/// Injury and plan entered during onboarding
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RehabPlan {
    pub injury_type: String,
    #[serde(default)]
    pub rehab_plan: Vec<PlannedExercise>,
}

impl RehabPlan {
    pub fn load(store: &dyn KeyValueStore) -> Option<Self> {
        read_json(store, keys::REHAB_DATA)
    }

    pub fn save(&self, store: &dyn KeyValueStore) {
        persist_json(store, keys::REHAB_DATA, self);
    }

    /// Pick the exercise to perform now, uniformly at random.
    ///
    /// Falls back to a stretching exercise when the plan is empty.
    pub fn pick_exercise(&self) -> PlannedExercise {
        let exercises: Vec<&PlannedExercise> = self
            .rehab_plan
            .iter()
            .filter(|e| !e.name.trim().is_empty())
            .collect();
        if exercises.is_empty() {
            return PlannedExercise::fallback();
        }
        exercises[random_index(exercises.len())].clone()
    }
}

fn random_index(len: usize) -> usize {
    let mut bytes = [0u8; 8];
    if getrandom::getrandom(&mut bytes).is_ok() {
        return (u64::from_le_bytes(bytes) % len as u64) as usize;
    }

    // Fallback: clock-derived index if OS RNG is unavailable.
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or(0);
    nanos as usize % len
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn test_search_rehab_plans() {
        assert_eq!(
            search_rehab_plans("TRAIN"),
            vec!["Strength Training", "Balance Training", "Functional Training"]
        );
        assert_eq!(search_rehab_plans("").len(), REHAB_PLANS.len());
        assert!(search_rehab_plans("yoga").is_empty());
    }

    #[test]
    fn test_find_rehab_plan() {
        assert_eq!(find_rehab_plan(" aquatic therapy "), Some("Aquatic Therapy"));
        assert_eq!(find_rehab_plan("Aquatic"), None);
    }

    #[test]
    fn test_rehab_plan_uses_camel_case_field_names() {
        let raw = r#"{"injuryType":"Knee Injury","rehabPlan":[{"name":"Squats","frequency":"3"}]}"#;
        let plan: RehabPlan = serde_json::from_str(raw).unwrap();
        assert_eq!(plan.injury_type, "Knee Injury");
        assert_eq!(plan.rehab_plan[0].times_label(), "3 times");
    }

    #[test]
    fn test_pick_exercise_from_plan() {
        let plan = RehabPlan {
            injury_type: "Hip Pain".to_string(),
            rehab_plan: vec![
                PlannedExercise::new("Bridges", "2"),
                PlannedExercise::new("Clamshells", "1"),
            ],
        };
        for _ in 0..20 {
            let picked = plan.pick_exercise();
            assert!(plan.rehab_plan.contains(&picked));
        }
    }

    #[test]
    fn test_pick_exercise_fallback() {
        let plan = RehabPlan {
            injury_type: "Neck Pain".to_string(),
            rehab_plan: vec![PlannedExercise::new("  ", "1")],
        };
        let picked = plan.pick_exercise();
        assert_eq!(picked, PlannedExercise::fallback());
        assert_eq!(picked.times_label(), "1 time");
    }

    #[test]
    fn test_profile_roundtrip() {
        let store = MemoryStore::new();
        assert_eq!(UserProfile::load(&store), None);

        let profile = UserProfile {
            full_name: "Noa Levi".to_string(),
            email: "noa@example.com".to_string(),
            age: "34".to_string(),
        };
        profile.save(&store);
        assert_eq!(UserProfile::load(&store), Some(profile));
        assert!(store.get(keys::USER_DATA).unwrap().unwrap().contains("fullName"));
    }
}
