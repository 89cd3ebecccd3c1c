//! Error types and error handling for the application
//!
//! This module defines custom error types that can be converted to HTTP responses.
//! All errors implement `IntoResponse` to provide consistent error formatting.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error types
///
/// All errors that can surface from a pipeline run are represented by this
/// enum. Each variant implements automatic conversion to an HTTP response
/// via `IntoResponse`; the front end renders the JSON body as a visible
/// error instead of partial output.
#[derive(Error, Debug)]
pub enum AppError {
    /// Request input failed validation (e.g., over the configured length cap)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A pipeline step failed; no partial state is returned
    #[error("Pipeline execution failed: {0}")]
    PipelineFailed(String),

    /// The pipeline run exceeded its overall timeout
    #[error("Timeout: {0}")]
    Timeout(String),

    /// Internal server error (catch-all for unexpected errors)
    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::InvalidInput(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            AppError::PipelineFailed(_) => (StatusCode::BAD_GATEWAY, self.to_string()),
            AppError::Timeout(_) => (StatusCode::GATEWAY_TIMEOUT, self.to_string()),
            AppError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()),
        };

        let body = Json(json!({
            "error": error_message,
            "status": status.as_u16(),
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (
                AppError::InvalidInput("too long".to_string()),
                StatusCode::BAD_REQUEST,
            ),
            (
                AppError::PipelineFailed("classification call failed".to_string()),
                StatusCode::BAD_GATEWAY,
            ),
            (
                AppError::Timeout("run exceeded 120 seconds".to_string()),
                StatusCode::GATEWAY_TIMEOUT,
            ),
            (
                AppError::Internal(anyhow::anyhow!("boom")),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, expected) in cases {
            let response = error.into_response();
            assert_eq!(response.status(), expected);
        }
    }

    #[test]
    fn test_error_message_includes_cause() {
        let error = AppError::PipelineFailed("rate limit exceeded".to_string());
        assert!(error.to_string().contains("rate limit exceeded"));
    }
}
