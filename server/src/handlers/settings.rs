//! Settings and goal progress handlers.

use super::lenient;
use crate::error::Result;
use nutrilog_engine::{GoalProgress, NutritionStore, UserSettings};
use serde::Deserialize;

/// Request body for updating settings.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSettingsRequest {
    #[serde(default, deserialize_with = "lenient::quantity")]
    pub daily_calorie_goal: f64,
}

pub async fn handle_get_settings(store: &NutritionStore) -> Result<UserSettings> {
    Ok(store.get_settings().await)
}

/// Validate and persist new settings. Fractional goals are truncated.
pub async fn handle_update_settings(
    store: &NutritionStore,
    request: UpdateSettingsRequest,
) -> Result<UserSettings> {
    let settings = UserSettings::new(request.daily_calorie_goal.trunc().min(u32::MAX as f64) as u32);
    settings.validate()?;
    store.save_settings(&settings).await?;
    Ok(settings)
}

pub async fn handle_progress(store: &NutritionStore) -> Result<GoalProgress> {
    Ok(store.today_progress().await)
}
