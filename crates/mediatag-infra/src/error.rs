//! Error response conversion
//!
//! Transport adapters turn any [`ErrorMetadata`] error into an
//! [`ErrorResponse`] body and pair it with [`ErrorResponse::status`].

use mediatag_core::{ErrorMetadata, LogLevel};
use serde::Serialize;

/// Standard error response format for adapters
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub error_type: String,
    #[serde(skip)]
    pub status: u16,
}

impl ErrorResponse {
    /// Build the response and log the error at its own level.
    pub fn from_error<E>(err: &E) -> Self
    where
        E: ErrorMetadata + std::error::Error,
    {
        let status = err.http_status_code();
        let error_type = err.error_code();

        match err.log_level() {
            LogLevel::Error => tracing::error!(status, error_type, error = %err, "Request failed"),
            LogLevel::Warn => tracing::warn!(status, error_type, error = %err, "Request failed"),
            LogLevel::Debug => tracing::debug!(status, error_type, error = %err, "Request failed"),
        }

        Self {
            error: err.client_message(),
            error_type: error_type.to_string(),
            status,
        }
    }
}
