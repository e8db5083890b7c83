//! Unified error handling for the server.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Application error type.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Engine error: {0}")]
    Engine(#[from] nutrilog_engine::Error),

    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

impl From<nutrilog_engine::SettingsError> for AppError {
    fn from(e: nutrilog_engine::SettingsError) -> Self {
        AppError::BadRequest(e.to_string())
    }
}

/// Error response body.
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    retryable: bool,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message, details, retryable) = match &self {
            AppError::Engine(e) if e.is_write_failure() => {
                tracing::error!("Write failed: {}", e);
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "Could not save changes".to_string(),
                    Some(e.to_string()),
                    true,
                )
            }
            AppError::Engine(e @ nutrilog_engine::Error::StorageRead { .. }) => {
                tracing::error!("Read failed during update: {}", e);
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "Stored data could not be read".to_string(),
                    Some(e.to_string()),
                    true,
                )
            }
            AppError::Engine(nutrilog_engine::Error::InvalidSnapshot(msg)) => {
                (StatusCode::BAD_REQUEST, msg.clone(), None, false)
            }
            AppError::Engine(e) => {
                tracing::error!("Stored data unreadable: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Stored data could not be read".to_string(),
                    Some(e.to_string()),
                    false,
                )
            }
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone(), None, false),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone(), None, false),
        };

        let body = Json(ErrorResponse {
            error: error_message,
            details,
            retryable,
        });

        (status, body).into_response()
    }
}

/// Result type alias for handlers.
pub type Result<T> = std::result::Result<T, AppError>;
