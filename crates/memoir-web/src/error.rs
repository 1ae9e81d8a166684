//! Error types for memoir-web.

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Result type alias for memoir-web operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in memoir-web.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error from memoir-core (loading, configuration)
    #[error("Core error: {0}")]
    Core(#[from] memoir_core::Error),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        tracing::error!("request failed: {self}");

        let body = serde_json::json!({
            "error": {
                "message": self.to_string(),
            }
        });

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            [(header::CONTENT_TYPE, "application/json")],
            serde_json::to_string(&body).unwrap_or_default(),
        )
            .into_response()
    }
}
