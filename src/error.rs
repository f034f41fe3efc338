//! Unified error types for the SpeechPro API.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Unified error type for the API server.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Configuration loading error.
    #[error("configuration error: {0}")]
    Config(#[from] envy::Error),

    /// Configuration loaded but holds an unusable value.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Prometheus exporter could not be installed.
    #[error("metrics exporter error: {0}")]
    Metrics(#[from] metrics_exporter_prometheus::BuildError),

    /// JSON serialization error.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// No route matches the request path.
    #[error("Not Found")]
    NotFound,

    /// Unhandled fault while serving a request.
    #[error("Internal Server Error")]
    Internal,
}

/// Error body returned to HTTP clients.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Human readable reason.
    pub detail: String,
}

impl ApiError {
    /// HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        // Startup failures never reach clients verbatim.
        let detail = match self {
            ApiError::NotFound => ApiError::NotFound.to_string(),
            other => {
                tracing::error!("request failed: {}", other);
                ApiError::Internal.to_string()
            }
        };
        (status, Json(ErrorBody { detail })).into_response()
    }
}

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, ApiError>;
