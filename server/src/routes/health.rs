//! Health check endpoint.

use axum::{extract::State, routing::get, Json, Router};
use nutrilog_engine::LogDate;
use serde::Serialize;

use crate::AppState;

/// Health check response.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    /// `ok`, or `degraded` when stored data cannot be read
    pub status: &'static str,
    pub version: &'static str,
    /// The date new meals are logged against
    pub today: LogDate,
}

/// Create health routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_check))
        .route("/", get(root))
}

/// Health check handler.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let readable = !state.store.load_settings().await.is_recovered();
    Json(HealthResponse {
        status: if readable { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        today: state.store.today(),
    })
}

/// Root handler.
async fn root() -> &'static str {
    "Nutrilog Server"
}
