//! Reward amounts and costs

use serde::{Deserialize, Serialize};

/// Economy settings
///
/// The defaults are the amounts the app has always paid out; changing them
/// breaks parity with existing users' expectations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EconomySettings {
    /// Balance reported before anything was ever persisted
    #[serde(default = "default_starting_balance")]
    pub starting_balance: u64,

    /// Paid once per distinct resource URL
    #[serde(default = "default_resource_visit_reward")]
    pub resource_visit_reward: u64,

    /// Paid once per export format
    #[serde(default = "default_export_reward")]
    pub export_reward: u64,

    /// Paid on every completed exercise
    #[serde(default = "default_exercise_reward")]
    pub exercise_reward: u64,

    /// Cost of one garden tool use
    #[serde(default = "default_tool_cost")]
    pub tool_cost: u64,
}

fn default_starting_balance() -> u64 {
    100
}

fn default_resource_visit_reward() -> u64 {
    5
}

fn default_export_reward() -> u64 {
    10
}

fn default_exercise_reward() -> u64 {
    10
}

fn default_tool_cost() -> u64 {
    10
}

impl Default for EconomySettings {
    fn default() -> Self {
        Self {
            starting_balance: default_starting_balance(),
            resource_visit_reward: default_resource_visit_reward(),
            export_reward: default_export_reward(),
            exercise_reward: default_exercise_reward(),
            tool_cost: default_tool_cost(),
        }
    }
}
