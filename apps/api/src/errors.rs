use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    /// Required fields absent or malformed. Never retried.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Ranking was requested against a catalog with zero roles.
    #[error("Job catalog is empty")]
    EmptyCatalog,

    #[error("Not found: {0}")]
    NotFound(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::InvalidInput(msg) => (StatusCode::BAD_REQUEST, "INVALID_INPUT", msg.clone()),
            AppError::EmptyCatalog => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "EMPTY_CATALOG",
                "No job roles are configured".to_string(),
            ),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
        };
        tracing::debug!(code, "request rejected: {message}");

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
