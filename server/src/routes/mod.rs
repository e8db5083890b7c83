//! HTTP route definitions.

mod data;
mod foods;
mod health;
mod logs;
mod recipes;
mod settings;

use crate::AppState;
use axum::Router;

/// Create all application routes.
pub fn create_routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(logs::routes())
        .merge(recipes::routes())
        .merge(foods::routes())
        .merge(settings::routes())
        .merge(data::routes())
}
