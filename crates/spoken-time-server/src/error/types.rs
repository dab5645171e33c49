//! API error types.

use axum::http::StatusCode;
use spoken_time_core::TimeError;
use thiserror::Error;

/// Result type for API operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// API error enum covering all error cases.
#[derive(Debug, Error)]
pub enum ApiError {
    // 400 Bad Request
    /// A single time (or its locale) was rejected.
    #[error("{0}")]
    InvalidTime(TimeError),

    /// An uploaded batch was rejected as a whole.
    #[error("{0}")]
    InvalidFile(TimeError),

    // 404 Not Found
    #[error("The requested resource was not found")]
    NotFound,

    // 500 Internal Server Error
    #[error("{0}")]
    Internal(#[source] anyhow::Error),
}

impl ApiError {
    /// Batch-level failure with a free-form detail.
    pub fn invalid_file(detail: impl Into<String>) -> Self {
        Self::InvalidFile(TimeError::invalid_file(detail))
    }

    /// Get HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidTime(_) | Self::InvalidFile(_) => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get error code for client handling.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidTime(_) => "invalid_time",
            Self::InvalidFile(_) => "invalid_file",
            Self::NotFound => "not_found",
            Self::Internal(_) => "server_error",
        }
    }

    /// Check if this is a client error (4xx).
    pub fn is_client_error(&self) -> bool {
        self.status_code().is_client_error()
    }

    /// Check if this is a server error (5xx).
    pub fn is_server_error(&self) -> bool {
        self.status_code().is_server_error()
    }
}

impl From<TimeError> for ApiError {
    fn from(err: TimeError) -> Self {
        if err.is_file_error() {
            ApiError::InvalidFile(err)
        } else {
            ApiError::InvalidTime(err)
        }
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::Internal(err)
    }
}

impl From<axum::extract::multipart::MultipartError> for ApiError {
    fn from(err: axum::extract::multipart::MultipartError) -> Self {
        ApiError::invalid_file(err.body_text())
    }
}
