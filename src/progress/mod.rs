//! Therapy progress log and its summary statistics

mod export;

pub use export::{ExportFormat, export_file_name, to_csv, to_printable};

use serde::{Deserialize, Serialize};

use crate::storage::{KeyValueStore, keys, read_json};

/// Which slice of the log to look at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeView {
    /// One row per day of the current week
    Weekly,
    /// One row per week of the current month
    Monthly,
}

impl TimeView {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "weekly" | "week" => Some(Self::Weekly),
            "monthly" | "month" => Some(Self::Monthly),
            _ => None,
        }
    }

    /// Column heading of the row label
    pub fn label_heading(&self) -> &'static str {
        match self {
            Self::Weekly => "Day",
            Self::Monthly => "Week",
        }
    }
}

/// One row of the progress log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressEntry {
    /// "Mon", "Week 1", ...
    #[serde(alias = "day", alias = "week")]
    pub label: String,
    pub therapy_minutes: u32,
    pub outside_hours: f64,
    pub steps: u32,
    /// Self-reported, 1..=5
    pub anxiety: u8,
    pub stress: u8,
    pub consistency: u8,
}

/// Progress log for both views
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressLog {
    pub weekly: Vec<ProgressEntry>,
    pub monthly: Vec<ProgressEntry>,
}

/// Averages over one view, as shown on the summary cards
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressAverages {
    pub therapy_minutes: f64,
    pub outside_hours: f64,
    pub steps: u64,
    pub anxiety: f64,
    pub stress: f64,
    pub consistency: f64,
}

impl ProgressAverages {
    /// One-decimal rendering of a card value
    pub fn fmt_one(value: f64) -> String {
        format!("{:.1}", value)
    }
}

fn entry(
    label: &str,
    therapy_minutes: u32,
    outside_hours: f64,
    steps: u32,
    anxiety: u8,
    stress: u8,
    consistency: u8,
) -> ProgressEntry {
    ProgressEntry {
        label: label.to_string(),
        therapy_minutes,
        outside_hours,
        steps,
        anxiety,
        stress,
        consistency,
    }
}

impl ProgressLog {
    /// Stored log, or the built-in sample log
    pub fn load(store: &dyn KeyValueStore) -> Self {
        read_json(store, keys::PROGRESS_DATA).unwrap_or_else(Self::sample)
    }

    /// Sample log shown until real tracking data exists
    pub fn sample() -> Self {
        Self {
            weekly: vec![
                entry("Mon", 25, 1.5, 5000, 3, 4, 2),
                entry("Tue", 30, 2.0, 6500, 3, 3, 3),
                entry("Wed", 20, 0.5, 4000, 4, 4, 1),
                entry("Thu", 35, 2.5, 7500, 3, 3, 4),
                entry("Fri", 40, 3.0, 8000, 2, 2, 4),
                entry("Sat", 15, 4.0, 9000, 2, 2, 3),
                entry("Sun", 10, 3.5, 6000, 1, 2, 2),
            ],
            monthly: vec![
                entry("Week 1", 150, 12.5, 35000, 3, 3, 2),
                entry("Week 2", 180, 15.0, 42000, 3, 3, 3),
                entry("Week 3", 200, 18.5, 45000, 2, 2, 4),
                entry("Week 4", 160, 16.0, 40000, 2, 2, 3),
            ],
        }
    }

    pub fn entries(&self, view: TimeView) -> &[ProgressEntry] {
        match view {
            TimeView::Weekly => &self.weekly,
            TimeView::Monthly => &self.monthly,
        }
    }

    /// Per-field averages; `None` for an empty view
    pub fn averages(&self, view: TimeView) -> Option<ProgressAverages> {
        let entries = self.entries(view);
        if entries.is_empty() {
            return None;
        }
        let n = entries.len() as f64;
        let sum = |f: fn(&ProgressEntry) -> f64| entries.iter().map(f).sum::<f64>();

        Some(ProgressAverages {
            therapy_minutes: sum(|e| e.therapy_minutes as f64) / n,
            outside_hours: sum(|e| e.outside_hours) / n,
            steps: (sum(|e| e.steps as f64) / n).round() as u64,
            anxiety: sum(|e| e.anxiety as f64) / n,
            stress: sum(|e| e.stress as f64) / n,
            consistency: sum(|e| e.consistency as f64) / n,
        })
    }
}
