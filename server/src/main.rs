//! Nutrilog Server binary.

use nutrilog_engine::{NutritionStore, SystemClock};
use nutrilog_server::config::Config;
use nutrilog_server::storage::FileStorage;
use nutrilog_server::{app, AppState};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "nutrilog_server=debug,nutrilog_engine=debug,tower_http=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    tracing::info!("Starting Nutrilog Server on {}:{}", config.host, config.port);

    // Open the data directory
    let storage = FileStorage::open(&config.data_dir).await?;
    tracing::info!("Storing data in {}", storage.root().display());

    let store = NutritionStore::new(Arc::new(storage), Arc::new(SystemClock));
    let addr = format!("{}:{}", config.host, config.port);
    let state = AppState::new(store, config);

    // Start server
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app(state)).await?;

    Ok(())
}
