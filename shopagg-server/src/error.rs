//! Error types for shopagg-server
//!
//! Upstream failures surface as `502 Bad Gateway`, serialization failures as
//! `500 Internal Server Error`. Neither terminates the process.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use shopagg_common::Source;
use thiserror::Error;
use tracing::error;

/// Failure while retrieving one provider's listing
#[derive(Debug, Error)]
pub enum FetchError {
    /// Transport failure (connect, TLS, body read)
    #[error("Network error ({0}): {1}")]
    Network(Source, String),

    /// Upstream answered with a non-success status
    #[error("Upstream {0} returned HTTP {1}")]
    Status(Source, u16),

    /// Body could not be decoded or parsed
    #[error("Decode error ({0}): {1}")]
    Decode(Source, String),
}

impl FetchError {
    /// Provider the failure belongs to
    pub fn source_tag(&self) -> Source {
        match self {
            FetchError::Network(source, _)
            | FetchError::Status(source, _)
            | FetchError::Decode(source, _) => *source,
        }
    }
}

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// One of the upstream fetches failed (502)
    #[error("Upstream error: {0}")]
    Upstream(#[from] FetchError),

    /// Response body could not be serialized (500)
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code) = match self {
            ApiError::Upstream(ref err) => {
                error!(source = %err.source_tag(), "Upstream fetch failed: {}", err);
                (StatusCode::BAD_GATEWAY, "UPSTREAM_ERROR")
            }
            ApiError::Serialization(ref err) => {
                error!("Failed to serialize response: {}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR")
            }
        };

        let body = Json(json!({
            "error": {
                "code": error_code,
                "message": self.to_string(),
            }
        }));

        (status, body).into_response()
    }
}

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;
