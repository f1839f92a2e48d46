//! Achievement definitions and metadata
//!
//! The default catalog is defined here. Persisted catalogs are plain records
//! (`Achievement`) so that stored snapshots keep round-tripping even if the
//! built-in definitions change.

use serde::{Deserialize, Serialize};

/// Identifier of each built-in achievement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AchievementId {
    FirstExercise,
    ExerciseStreak,
    UseAllTools,
    ExportData,
    VisitResources,
    PlantGrowth,
    Reach100Coins,
    AllDaily,
    Secret,
}

impl AchievementId {
    /// Get the string ID used in storage
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FirstExercise => "first-exercise",
            Self::ExerciseStreak => "exercise-streak",
            Self::UseAllTools => "use-all-tools",
            Self::ExportData => "export-data",
            Self::VisitResources => "visit-resources",
            Self::PlantGrowth => "plant-growth",
            Self::Reach100Coins => "reach-100-coins",
            Self::AllDaily => "all-daily",
            Self::Secret => "secret",
        }
    }

    /// Parse from storage string
    pub fn from_str(s: &str) -> Option<Self> {
        Self::all().iter().copied().find(|id| id.as_str() == s)
    }

    /// Get all achievement IDs, in catalog order
    pub fn all() -> &'static [AchievementId] {
        &[
            Self::FirstExercise,
            Self::ExerciseStreak,
            Self::UseAllTools,
            Self::ExportData,
            Self::VisitResources,
            Self::PlantGrowth,
            Self::Reach100Coins,
            Self::AllDaily,
            Self::Secret,
        ]
    }
}

/// Achievement category, one tab each on the achievements screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AchievementCategory {
    Daily,
    Progress,
    Special,
}

impl AchievementCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Progress => "progress",
            Self::Special => "special",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "daily" => Some(Self::Daily),
            "progress" => Some(Self::Progress),
            "special" => Some(Self::Special),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Daily => "Daily",
            Self::Progress => "Progress",
            Self::Special => "Special",
        }
    }

    pub fn all() -> &'static [AchievementCategory] {
        &[Self::Daily, Self::Progress, Self::Special]
    }
}

/// A persisted achievement record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Achievement {
    pub id: String,
    pub category: AchievementCategory,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub requirement: String,
    pub reward: u64,
    pub completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progress: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_progress: Option<u64>,
    /// Display flag mirroring the `claimed_<id>` marker
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub claimed: Option<bool>,
}

impl Achievement {
    /// `(progress, max)` when the achievement tracks partial progress
    pub fn progress_pair(&self) -> Option<(u64, u64)> {
        match (self.progress, self.max_progress) {
            (Some(progress), Some(max)) => Some((progress, max)),
            _ => None,
        }
    }

    /// Progress as a rounded percentage, capped at 100
    pub fn progress_percent(&self) -> Option<u64> {
        let (progress, max) = self.progress_pair()?;
        if max == 0 {
            return Some(100);
        }
        let percent = (progress as f64 / max as f64 * 100.0).round() as u64;
        Some(percent.min(100))
    }
}

/// Built-in achievement definition
#[derive(Debug, Clone)]
pub struct Definition {
    pub id: AchievementId,
    pub category: AchievementCategory,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub requirement: &'static str,
    pub reward: u64,
    /// `(initial progress, target)` for progressive achievements
    pub progress: Option<(u64, u64)>,
}

/// Coins needed for "First Fortune"
pub const FORTUNE_TARGET: u64 = 100;

/// All built-in achievement definitions
pub static DEFINITIONS: &[Definition] = &[
    // === DAILY ===
    Definition {
        id: AchievementId::FirstExercise,
        category: AchievementCategory::Daily,
        title: "First Steps",
        description: "Complete your first exercise",
        icon: "Trophy",
        requirement: "Complete 1 exercise",
        reward: 20,
        progress: Some((0, 1)),
    },
    Definition {
        id: AchievementId::ExerciseStreak,
        category: AchievementCategory::Daily,
        title: "Consistency is Key",
        description: "Complete exercises for 3 days in a row",
        icon: "Target",
        requirement: "3 consecutive days",
        reward: 50,
        progress: Some((1, 3)),
    },
    Definition {
        id: AchievementId::UseAllTools,
        category: AchievementCategory::Daily,
        title: "Green Thumb",
        description: "Use all garden tools in one day",
        icon: "Leaf",
        requirement: "Use water and sun in one day",
        reward: 30,
        progress: Some((1, 2)),
    },
    // === PROGRESS ===
    Definition {
        id: AchievementId::ExportData,
        category: AchievementCategory::Progress,
        title: "Data Analyst",
        description: "Export your progress data",
        icon: "Clock",
        requirement: "Export any progress report",
        reward: 25,
        progress: None,
    },
    Definition {
        id: AchievementId::VisitResources,
        category: AchievementCategory::Progress,
        title: "Resource Explorer",
        description: "Visit 3 different rehabilitation resources",
        icon: "Award",
        requirement: "Visit 3 resources",
        reward: 45,
        progress: Some((0, 3)),
    },
    Definition {
        id: AchievementId::PlantGrowth,
        category: AchievementCategory::Progress,
        title: "Master Gardener",
        description: "Grow your plant to level 3",
        icon: "Leaf",
        requirement: "Reach plant level 3",
        reward: 100,
        progress: Some((1, 3)),
    },
    // === SPECIAL ===
    Definition {
        id: AchievementId::Reach100Coins,
        category: AchievementCategory::Special,
        title: "First Fortune",
        description: "Collect 100 coins",
        icon: "Coins",
        requirement: "Have 100 coins at once",
        reward: 50,
        progress: Some((0, FORTUNE_TARGET)),
    },
    Definition {
        id: AchievementId::AllDaily,
        category: AchievementCategory::Special,
        title: "Recovery Champion",
        description: "Complete all daily achievements",
        icon: "Star",
        requirement: "Complete all daily achievements",
        reward: 200,
        progress: None,
    },
    Definition {
        id: AchievementId::Secret,
        category: AchievementCategory::Special,
        title: "???",
        description: "Secret achievement",
        icon: "LockKeyhole",
        requirement: "Discover the secret",
        reward: 100,
        progress: None,
    },
];

impl Definition {
    /// Get definition by ID
    pub fn get(id: AchievementId) -> Option<&'static Definition> {
        DEFINITIONS.iter().find(|d| d.id == id)
    }

    /// Fresh, unclaimed record for this definition
    pub fn to_record(&self) -> Achievement {
        Achievement {
            id: self.id.as_str().to_string(),
            category: self.category,
            title: self.title.to_string(),
            description: self.description.to_string(),
            icon: self.icon.to_string(),
            requirement: self.requirement.to_string(),
            reward: self.reward,
            completed: false,
            progress: self.progress.map(|(initial, _)| initial),
            max_progress: self.progress.map(|(_, max)| max),
            claimed: None,
        }
    }
}

/// Materialize the default catalog.
///
/// "First Fortune" starts out reflecting the balance at creation time.
pub fn default_catalog(balance: u64) -> Vec<Achievement> {
    DEFINITIONS
        .iter()
        .map(|definition| {
            let mut record = definition.to_record();
            if definition.id == AchievementId::Reach100Coins {
                record.progress = Some(balance.min(FORTUNE_TARGET));
                record.completed = balance >= FORTUNE_TARGET;
            }
            record
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_id_has_a_definition() {
        for id in AchievementId::all() {
            assert!(Definition::get(*id).is_some(), "missing {:?}", id);
            assert_eq!(AchievementId::from_str(id.as_str()), Some(*id));
        }
        assert_eq!(DEFINITIONS.len(), AchievementId::all().len());
    }

    #[test]
    fn test_default_catalog_shape() {
        let catalog = default_catalog(100);
        assert_eq!(catalog.len(), 9);

        let ids: Vec<&str> = catalog.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(
            ids,
            vec![
                "first-exercise",
                "exercise-streak",
                "use-all-tools",
                "export-data",
                "visit-resources",
                "plant-growth",
                "reach-100-coins",
                "all-daily",
                "secret",
            ]
        );

        let fortune = &catalog[6];
        assert!(fortune.completed);
        assert_eq!(fortune.progress_pair(), Some((100, 100)));
        assert!(catalog.iter().filter(|a| a.id != "reach-100-coins").all(|a| !a.completed));
    }

    #[test]
    fn test_fortune_tracks_low_balance() {
        let catalog = default_catalog(40);
        let fortune = catalog.iter().find(|a| a.id == "reach-100-coins").unwrap();
        assert!(!fortune.completed);
        assert_eq!(fortune.progress_percent(), Some(40));
    }

    #[test]
    fn test_record_json_uses_camel_case() {
        let record = Definition::get(AchievementId::VisitResources)
            .unwrap()
            .to_record();
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["maxProgress"], 3);
        assert_eq!(json["category"], "progress");
        assert!(json.get("claimed").is_none());

        let export = Definition::get(AchievementId::ExportData).unwrap().to_record();
        let json = serde_json::to_value(&export).unwrap();
        assert!(json.get("progress").is_none());
    }

    #[test]
    fn test_parse_stored_catalog_snapshot() {
        let raw = r#"{"id":"secret","category":"special","title":"???","description":"Secret achievement","icon":"LockKeyhole","requirement":"Discover the secret","reward":100,"completed":false,"claimed":true}"#;
        let record: Achievement = serde_json::from_str(raw).unwrap();
        assert_eq!(record.id, AchievementId::Secret.as_str());
        assert_eq!(record.claimed, Some(true));
        assert_eq!(record.progress_pair(), None);
    }
}
