//! Unified error handling for the admin API.
//!
//! Provides a unified `AppError` type mapped to HTTP status codes with
//! client-safe JSON bodies. Validation failures carry the full message list
//! so the admin form can show every problem at once.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type for the admin API.
#[derive(Debug, Error)]
pub enum AppError {
    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Bad request from client.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Missing or failed authentication.
    #[error("Unauthorized")]
    Unauthorized,

    /// Input failed validation; holds one message per failed rule.
    #[error("Validation failed")]
    Validation(Vec<String>),

    /// Session storage failed.
    #[error("Session error: {0}")]
    Session(#[from] tower_sessions::session::Error),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if matches!(self, Self::Session(_) | Self::Internal(_)) {
            tracing::error!(error = %self, "Request error");
        }

        match self {
            Self::Validation(errors) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({ "errors": errors })),
            )
                .into_response(),
            Self::NotFound(_) | Self::BadRequest(_) | Self::Unauthorized => {
                let status = match &self {
                    Self::NotFound(_) => StatusCode::NOT_FOUND,
                    Self::Unauthorized => StatusCode::UNAUTHORIZED,
                    _ => StatusCode::BAD_REQUEST,
                };
                (status, Json(json!({ "error": self.to_string() }))).into_response()
            }
            // Don't expose internal error details to clients
            Self::Session(_) | Self::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Internal server error" })),
            )
                .into_response(),
        }
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
