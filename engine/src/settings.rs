//! User settings and progress against the daily calorie goal.

use serde::{Deserialize, Serialize};

/// Goal used when no settings have been saved.
pub const DEFAULT_DAILY_CALORIE_GOAL: u32 = 2000;
/// Lowest goal a caller should accept.
pub const MIN_DAILY_CALORIE_GOAL: u32 = 500;
/// Highest goal a caller should accept.
pub const MAX_DAILY_CALORIE_GOAL: u32 = 5000;

/// The singleton settings record. Stored whole so fields added later
/// round-trip with defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserSettings {
    pub daily_calorie_goal: u32,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            daily_calorie_goal: DEFAULT_DAILY_CALORIE_GOAL,
        }
    }
}

/// Rejected settings input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    #[error("daily calorie goal must be between {min} and {max}, got {got}")]
    GoalOutOfRange { min: u32, max: u32, got: u32 },
}

impl UserSettings {
    pub fn new(daily_calorie_goal: u32) -> Self {
        Self { daily_calorie_goal }
    }

    /// Caller-side validation. The store persists whatever it is given.
    pub fn validate(&self) -> Result<(), SettingsError> {
        let goal = self.daily_calorie_goal;
        if !(MIN_DAILY_CALORIE_GOAL..=MAX_DAILY_CALORIE_GOAL).contains(&goal) {
            return Err(SettingsError::GoalOutOfRange {
                min: MIN_DAILY_CALORIE_GOAL,
                max: MAX_DAILY_CALORIE_GOAL,
                got: goal,
            });
        }
        Ok(())
    }
}

/// Coarse progress band, for colouring a progress bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProgressBand {
    /// Under 50% of goal
    Low,
    /// 50% to under 90%
    Moderate,
    /// 90% and above
    High,
}

/// Calories consumed relative to the goal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalProgress {
    pub goal: u32,
    pub consumed: f64,
    /// Goal minus consumed; negative once the goal is exceeded
    pub remaining: f64,
    /// Consumed as a percentage of goal, capped at 100
    pub percent: f64,
    pub band: ProgressBand,
}

impl GoalProgress {
    pub fn compute(consumed: f64, goal: u32) -> Self {
        let percent = if goal == 0 {
            100.0
        } else {
            (consumed / goal as f64 * 100.0).min(100.0)
        };
        let band = if percent < 50.0 {
            ProgressBand::Low
        } else if percent < 90.0 {
            ProgressBand::Moderate
        } else {
            ProgressBand::High
        };

        Self {
            goal,
            consumed,
            remaining: goal as f64 - consumed,
            percent,
            band,
        }
    }
}
