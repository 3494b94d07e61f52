//! Unified error types for the GIF proxy.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;
use tracing::error;

/// Top-level error type for startup and background failures.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration loading error.
    #[error("configuration error: {0}")]
    Config(#[from] envy::Error),

    /// Upstream Giphy error.
    #[error("giphy error: {0}")]
    Giphy(#[from] GiphyError),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Upstream Giphy client errors.
///
/// Both variants collapse into one generic message toward the caller; the
/// distinction only matters for logs and metrics.
#[derive(Error, Debug)]
pub enum GiphyError {
    /// The request never completed (connect failure, timeout, transport).
    #[error("giphy request failed: {0}")]
    Unavailable(#[source] reqwest::Error),

    /// The response body was not the JSON shape we expect.
    #[error("failed to decode giphy response: {0}")]
    Decode(#[source] reqwest::Error),
}

/// Request-scoped errors produced by the API handlers.
#[derive(Error, Debug)]
pub enum ApiError {
    /// A required query parameter was missing or empty.
    #[error("query param '{0}' is required")]
    MissingParam(&'static str),

    /// The Giphy API key is not configured.
    #[error("missing GIPHY_API_KEY")]
    MissingCredential,

    /// The upstream call failed.
    #[error(transparent)]
    Giphy(#[from] GiphyError),
}

/// JSON body written for every error response.
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::MissingParam(name) => (
                StatusCode::BAD_REQUEST,
                format!("Query param '{name}' is required"),
            ),
            ApiError::MissingCredential => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Server misconfigured: missing GIPHY_API_KEY".to_string(),
            ),
            ApiError::Giphy(err) => {
                // Log the detail; the caller only gets a generic message.
                error!(error = %err, "upstream request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to fetch GIFs".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_param_maps_to_400() {
        let response = ApiError::MissingParam("q").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn missing_credential_maps_to_500() {
        let response = ApiError::MissingCredential.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
