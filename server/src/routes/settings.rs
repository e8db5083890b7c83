//! Settings routes.

use axum::{extract::State, routing::get, Json, Router};
use nutrilog_engine::{GoalProgress, UserSettings};

use crate::error::Result;
use crate::handlers::{
    handle_get_settings, handle_progress, handle_update_settings, UpdateSettingsRequest,
};
use crate::AppState;

/// Create settings routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/settings", get(get_handler).put(update_handler))
        .route("/progress", get(progress_handler))
}

/// GET /settings - Current settings.
async fn get_handler(State(state): State<AppState>) -> Result<Json<UserSettings>> {
    Ok(Json(handle_get_settings(&state.store).await?))
}

/// PUT /settings - Validate and save settings.
async fn update_handler(
    State(state): State<AppState>,
    Json(request): Json<UpdateSettingsRequest>,
) -> Result<Json<UserSettings>> {
    Ok(Json(handle_update_settings(&state.store, request).await?))
}

/// GET /progress - Today's progress against the calorie goal.
async fn progress_handler(State(state): State<AppState>) -> Result<Json<GoalProgress>> {
    Ok(Json(handle_progress(&state.store).await?))
}
