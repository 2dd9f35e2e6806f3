//! Error types for the directory API.
//!
//! Every error is returned as a JSON body of the form
//! `{"detail": "<message>"}`.
//!
//! # Error Mapping
//!
//! | Source | HTTP Status |
//! |--------|-------------|
//! | `InvalidSortColumn`, `InvalidSortDirection` | 400 |
//! | `InvalidLimit`, `InvalidOffset`, malformed query values | 422 |
//! | `Unavailable`, `ConnectionFailed`, `PoolExhausted` | 503 |
//! | any other backend error | 500 |

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::fmt;
use vigil_persistence::error::{BackendError, StorageError, ValidationError};

/// The primary error type for REST API operations.
#[derive(Debug)]
pub enum RestError {
    /// Bad request, such as an unknown sort column (HTTP 400).
    BadRequest {
        /// Error message.
        message: String,
    },

    /// A query parameter failed type or range validation (HTTP 422).
    UnprocessableEntity {
        /// Error message.
        message: String,
    },

    /// The directory database cannot be reached (HTTP 503).
    ServiceUnavailable {
        /// Error message.
        message: String,
    },

    /// Internal server error (HTTP 500).
    InternalError {
        /// Error message.
        message: String,
    },
}

impl RestError {
    /// Returns the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            RestError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            RestError::UnprocessableEntity { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            RestError::ServiceUnavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
            RestError::InternalError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Returns the message sent to the client.
    ///
    /// Backend failures are reported generically; their details are logged.
    pub fn detail(&self) -> &str {
        match self {
            RestError::BadRequest { message } | RestError::UnprocessableEntity { message } => {
                message.as_str()
            }
            RestError::ServiceUnavailable { .. } => "Service Unavailable",
            RestError::InternalError { .. } => "Internal Server Error",
        }
    }
}

impl fmt::Display for RestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RestError::BadRequest { message } => {
                write!(f, "Bad request: {}", message)
            }
            RestError::UnprocessableEntity { message } => {
                write!(f, "Unprocessable entity: {}", message)
            }
            RestError::ServiceUnavailable { message } => {
                write!(f, "Service unavailable: {}", message)
            }
            RestError::InternalError { message } => {
                write!(f, "Internal error: {}", message)
            }
        }
    }
}

impl std::error::Error for RestError {}

impl IntoResponse for RestError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        match &self {
            RestError::ServiceUnavailable { message } => {
                tracing::warn!(status = status.as_u16(), error = %message, "Storage unavailable");
            }
            RestError::InternalError { message } => {
                tracing::error!(status = status.as_u16(), error = %message, "Request failed");
            }
            _ => {
                tracing::debug!(status = status.as_u16(), error = %self, "Rejected request");
            }
        }

        let body = serde_json::json!({ "detail": self.detail() });
        (status, Json(body)).into_response()
    }
}

// Implement conversions from storage errors

impl From<StorageError> for RestError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::Validation(e) => e.into(),
            err if err.is_unavailable() => RestError::ServiceUnavailable {
                message: err.to_string(),
            },
            err => RestError::InternalError {
                message: err.to_string(),
            },
        }
    }
}

impl From<ValidationError> for RestError {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::InvalidSortColumn { .. }
            | ValidationError::InvalidSortDirection { .. } => RestError::BadRequest {
                message: err.to_string(),
            },
            ValidationError::InvalidLimit { .. } | ValidationError::InvalidOffset { .. } => {
                RestError::UnprocessableEntity {
                    message: err.to_string(),
                }
            }
        }
    }
}

impl From<BackendError> for RestError {
    fn from(err: BackendError) -> Self {
        StorageError::Backend(err).into()
    }
}

/// Result type alias for REST operations.
pub type RestResult<T> = Result<T, RestError>;
