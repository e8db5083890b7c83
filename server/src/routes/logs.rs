//! Daily log, meal, vault and history routes.

use axum::{
    extract::{Path, State},
    routing::{delete, get, post},
    Json, Router,
};
use nutrilog_engine::{DailyLog, HistoryEntry};

use crate::error::Result;
use crate::handlers::{
    handle_add_meal, handle_all_logs, handle_get_log, handle_history, handle_prep_meal,
    handle_remove_meal, handle_today, handle_vault, AddMealRequest, PrepMealRequest,
    PrepMealResponse, TodayResponse, VaultResponse,
};
use crate::AppState;

/// Create log routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/logs", get(all_logs_handler))
        .route("/logs/today", get(today_handler))
        .route("/logs/{date}", get(log_handler))
        .route("/logs/{date}/meals/{id}", delete(remove_meal_handler))
        .route("/meals", post(add_meal_handler))
        .route("/meals/prep", post(prep_meal_handler))
        .route("/vault", post(vault_handler))
        .route("/history", get(history_handler))
}

/// GET /logs/today - Today's log and goal progress.
async fn today_handler(State(state): State<AppState>) -> Result<Json<TodayResponse>> {
    Ok(Json(handle_today(&state.store).await?))
}

/// GET /logs - Every stored daily log, newest first.
async fn all_logs_handler(State(state): State<AppState>) -> Result<Json<Vec<DailyLog>>> {
    Ok(Json(handle_all_logs(&state.store).await?))
}

/// GET /logs/{date} - The log for one date.
async fn log_handler(
    State(state): State<AppState>,
    Path(date): Path<String>,
) -> Result<Json<DailyLog>> {
    Ok(Json(handle_get_log(&state.store, &date).await?))
}

/// DELETE /logs/{date}/meals/{id} - Remove a meal.
async fn remove_meal_handler(
    State(state): State<AppState>,
    Path((date, id)): Path<(String, String)>,
) -> Result<Json<DailyLog>> {
    Ok(Json(handle_remove_meal(&state.store, &date, &id).await?))
}

/// POST /meals - Log a meal for today.
async fn add_meal_handler(
    State(state): State<AppState>,
    Json(request): Json<AddMealRequest>,
) -> Result<Json<DailyLog>> {
    Ok(Json(handle_add_meal(&state.store, request).await?))
}

/// POST /meals/prep - Log servings of a batch recipe.
async fn prep_meal_handler(
    State(state): State<AppState>,
    Json(request): Json<PrepMealRequest>,
) -> Result<Json<PrepMealResponse>> {
    Ok(Json(handle_prep_meal(&state.store, request).await?))
}

/// POST /vault - Archive today's log and start a fresh day.
async fn vault_handler(State(state): State<AppState>) -> Result<Json<VaultResponse>> {
    Ok(Json(handle_vault(&state.store).await?))
}

/// GET /history - Archived days, newest first.
async fn history_handler(State(state): State<AppState>) -> Result<Json<Vec<HistoryEntry>>> {
    Ok(Json(handle_history(&state.store).await?))
}
