//! Export, import and reset routes.

use axum::{
    extract::State,
    http::StatusCode,
    routing::{delete, get, post},
    Json, Router,
};
use nutrilog_engine::{DataSnapshot, SnapshotSummary};

use crate::error::Result;
use crate::handlers::{handle_clear, handle_export, handle_import};
use crate::AppState;

/// Create data management routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/export", get(export_handler))
        .route("/import", post(import_handler))
        .route("/data", delete(clear_handler))
}

/// GET /export - Everything in one document.
async fn export_handler(State(state): State<AppState>) -> Result<Json<DataSnapshot>> {
    Ok(Json(handle_export(&state.store).await?))
}

/// POST /import - Restore a previously exported document.
async fn import_handler(
    State(state): State<AppState>,
    Json(snapshot): Json<DataSnapshot>,
) -> Result<Json<SnapshotSummary>> {
    Ok(Json(handle_import(&state.store, snapshot).await?))
}

/// DELETE /data - Delete all stored data.
async fn clear_handler(State(state): State<AppState>) -> Result<StatusCode> {
    handle_clear(&state.store).await?;
    Ok(StatusCode::NO_CONTENT)
}
