//! Error types for the ingestion host.
//!
//! - [`ConfigError`] - Invalid environment or CLI configuration
//! - [`ServerError`] - Request handling errors, rendered as JSON failures
//!
//! Error conversion is automatic via `From` implementations,
//! allowing `?` to work across error boundaries.

use axum::{
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use thiserror::Error;

use crate::api::types::ApiResponseBody;

// =============================================================================
// Configuration Errors
// =============================================================================

/// Errors while assembling the server configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A variable is set but cannot be parsed.
    #[error("Invalid value for {name}: {value:?}")]
    InvalidValue { name: &'static str, value: String },

    /// A value parsed but is out of range.
    #[error("{name} must be greater than zero")]
    Zero { name: &'static str },
}

// =============================================================================
// Server Errors
// =============================================================================

/// HTTP server errors.
#[derive(Debug, Error)]
pub enum ServerError {
    /// The `X-CSRF-TOKEN` header is absent or was never issued.
    #[error("Invalid or missing CSRF token")]
    Csrf,

    /// Malformed request.
    #[error("Invalid request: {0}")]
    BadRequest(String),

    /// Multipart body could not be read.
    #[error("Could not read upload: {0}")]
    Multipart(#[from] MultipartError),

    /// No `file` part in the form.
    #[error("No file provided")]
    MissingFile,

    /// The page template could not be loaded.
    #[error("Upload page unavailable: {0}")]
    PageUnavailable(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO error (binding, serving).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ServerError {
    /// HTTP status sent for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            ServerError::Csrf => StatusCode::FORBIDDEN,
            ServerError::BadRequest(_) | ServerError::MissingFile => StatusCode::BAD_REQUEST,
            ServerError::Multipart(e) => e.status(),
            ServerError::PageUnavailable(_)
            | ServerError::Config(_)
            | ServerError::Io(_)
            | ServerError::Json(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::warn!(error = %self, status = status.as_u16(), "request rejected");
        }
        let body = ApiResponseBody::<()>::failure(self.to_string());
        (status, Json(body)).into_response()
    }
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for configuration loading.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Result type for server operations.
pub type ServerResult<T> = Result<T, ServerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(ServerError::Csrf.status(), StatusCode::FORBIDDEN);
        assert_eq!(ServerError::MissingFile.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ServerError::BadRequest("nope".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ServerError::PageUnavailable("index.html".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_config_error_conversion() {
        let err: ServerError = ConfigError::Zero { name: "INGESTION_PORT" }.into();
        assert!(err.to_string().contains("INGESTION_PORT"));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
