//! Food catalogue routes.

use axum::{
    extract::{Path, Query, State},
    routing::{get, post},
    Json, Router,
};
use nutrilog_engine::{DailyLog, FoodItem};

use crate::error::Result;
use crate::handlers::{handle_log_food, handle_search_foods, FoodQuery, LogFoodRequest};
use crate::AppState;

/// Create catalogue routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/foods", get(search_handler))
        .route("/foods/{id}/log", post(log_handler))
}

/// GET /foods - Search the built-in catalogue.
async fn search_handler(Query(query): Query<FoodQuery>) -> Result<Json<Vec<&'static FoodItem>>> {
    Ok(Json(handle_search_foods(query)?))
}

/// POST /foods/{id}/log - Quick-add a catalogue food by weight.
async fn log_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<LogFoodRequest>,
) -> Result<Json<DailyLog>> {
    Ok(Json(handle_log_food(&state.store, &id, request).await?))
}
