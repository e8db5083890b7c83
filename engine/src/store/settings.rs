//! Settings operations.

use super::{Loaded, NutritionStore, USER_SETTINGS_KEY};
use crate::error::Result;
use crate::settings::{GoalProgress, UserSettings};

impl NutritionStore {
    /// The settings record, reporting how it was obtained.
    pub async fn load_settings(&self) -> Loaded<UserSettings> {
        self.load_json(USER_SETTINGS_KEY, UserSettings::default)
            .await
    }

    /// The settings record, or defaults if none is stored or it cannot be
    /// read.
    pub async fn get_settings(&self) -> UserSettings {
        self.load_settings().await.into_value()
    }

    /// Replace the whole settings record. No range validation happens here.
    pub async fn save_settings(&self, settings: &UserSettings) -> Result<()> {
        let _guard = self.write_lock.lock().await;
        self.save_json(USER_SETTINGS_KEY, settings).await?;
        tracing::debug!(goal = settings.daily_calorie_goal, "settings saved");
        Ok(())
    }

    /// Today's calories against the configured goal.
    pub async fn today_progress(&self) -> GoalProgress {
        let goal = self.get_settings().await.daily_calorie_goal;
        let log = self.today_log().await;
        GoalProgress::compute(log.total_calories(), goal)
    }
}
