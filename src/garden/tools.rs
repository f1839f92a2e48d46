//! Garden tools and daily tool usage

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::economy::achievements::day_string;
use crate::storage::{KeyValueStore, keys, persist_json, read_json};

/// A tool the user can spend coins on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GardenTool {
    Water,
    Sun,
    Soil,
    Fertilizer,
}

impl GardenTool {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Water => "water",
            Self::Sun => "sun",
            Self::Soil => "soil",
            Self::Fertilizer => "fertilizer",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "water" => Some(Self::Water),
            "sun" => Some(Self::Sun),
            "soil" => Some(Self::Soil),
            "fertilizer" => Some(Self::Fertilizer),
            _ => None,
        }
    }

    pub fn all() -> &'static [GardenTool] {
        &[Self::Water, Self::Sun, Self::Soil, Self::Fertilizer]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Water => "Water",
            Self::Sun => "Sun",
            Self::Soil => "Soil",
            Self::Fertilizer => "Fertilizer",
        }
    }

    /// Stage progress gained per use
    pub fn growth(&self) -> u32 {
        match self {
            Self::Water => 15,
            Self::Sun => 20,
            Self::Soil => 20,
            Self::Fertilizer => 25,
        }
    }

    /// What the plant says after this tool is used
    pub fn message(&self) -> &'static str {
        match self {
            Self::Water => "Thank you! I was so thirsty!",
            Self::Sun => "Ahh, that warm light makes my leaves stretch!",
            Self::Soil => "Mmm, fresh soil helps my roots grow strong!",
            Self::Fertilizer => "Wow! I can feel myself getting stronger already!",
        }
    }

    /// Care tools count toward "Green Thumb"
    pub fn is_care_tool(&self) -> bool {
        matches!(self, Self::Water | Self::Sun)
    }
}

/// Tools used on a single day
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolUsage {
    /// `YYYY-MM-DD`
    pub day: String,
    pub tools: Vec<GardenTool>,
}

impl ToolUsage {
    pub fn load(store: &dyn KeyValueStore) -> Self {
        read_json(store, keys::TOOL_USAGE).unwrap_or_default()
    }

    pub fn save(&self, store: &dyn KeyValueStore) {
        persist_json(store, keys::TOOL_USAGE, self);
    }

    /// Register a use on `today`; usage from earlier days is forgotten
    pub fn record(&mut self, tool: GardenTool, today: NaiveDate) {
        let day = day_string(today);
        if self.day != day {
            self.day = day;
            self.tools.clear();
        }
        if !self.tools.contains(&tool) {
            self.tools.push(tool);
        }
    }

    /// Distinct care tools used on the recorded day
    pub fn care_tools_used(&self) -> u64 {
        self.tools.iter().filter(|t| t.is_care_tool()).count() as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_parsing() {
        for tool in GardenTool::all() {
            assert_eq!(GardenTool::from_str(tool.as_str()), Some(*tool));
        }
        assert_eq!(GardenTool::from_str("WATER"), Some(GardenTool::Water));
        assert_eq!(GardenTool::from_str("rain"), None);
    }

    #[test]
    fn test_usage_is_per_day() {
        let monday = NaiveDate::from_ymd_opt(2026, 5, 4).unwrap();
        let tuesday = NaiveDate::from_ymd_opt(2026, 5, 5).unwrap();

        let mut usage = ToolUsage::default();
        usage.record(GardenTool::Water, monday);
        usage.record(GardenTool::Water, monday);
        usage.record(GardenTool::Soil, monday);
        assert_eq!(usage.care_tools_used(), 1);

        usage.record(GardenTool::Sun, monday);
        assert_eq!(usage.care_tools_used(), 2);

        usage.record(GardenTool::Sun, tuesday);
        assert_eq!(usage.day, "2026-05-05");
        assert_eq!(usage.care_tools_used(), 1);
    }
}
