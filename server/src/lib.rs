//! Nutrilog Server - local HTTP host for the nutrilog engine.
//!
//! Serves a single user's daily logs, recipes, history and settings over
//! JSON, persisting them as files in a data directory.

pub mod config;
pub mod error;
mod handlers;
mod routes;
pub mod storage;

use crate::config::Config;
use axum::Router;
use nutrilog_engine::NutritionStore;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<NutritionStore>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(store: NutritionStore, config: Config) -> Self {
        Self {
            store: Arc::new(store),
            config: Arc::new(config),
        }
    }
}

/// Build the application router.
pub fn app(state: AppState) -> Router {
    let mut router = Router::new()
        .merge(routes::create_routes())
        .layer(TraceLayer::new_for_http());

    if state.config.cors_allow_any {
        router = router.layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        );
    }

    router.with_state(state)
}
