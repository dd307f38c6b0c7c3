//! Error types for the HTTP server.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// Server error type.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Required query parameter absent or empty.
    #[error("Missing query parameter: {0}")]
    MissingParameter(&'static str),

    /// Page path not starting with `/`.
    #[error("Invalid page path: {0}")]
    InvalidPath(String),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Self::MissingParameter(name) => (
                StatusCode::BAD_REQUEST,
                json!({"error": "Missing query parameter", "parameter": name}),
            ),
            Self::InvalidPath(path) => (
                StatusCode::BAD_REQUEST,
                json!({"error": "Page path must start with '/'", "path": path}),
            ),
        };

        (status, axum::Json(body)).into_response()
    }
}
