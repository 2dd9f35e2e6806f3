//! Error types for the persistence layer.
//!
//! Errors are split into two families: validation errors, raised while a
//! request is being turned into a [`RecordQuery`](crate::types::RecordQuery)
//! and before any storage access, and backend errors, raised by the storage
//! engine itself.

// Error enum variant fields are self-documenting via their #[error(...)] messages
#![allow(missing_docs)]

use thiserror::Error;

use crate::types::SortColumn;

/// The primary error type for all storage operations.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Request validation errors
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Backend-specific errors
    #[error(transparent)]
    Backend(#[from] BackendError),
}

impl StorageError {
    /// Returns true if the error indicates the storage engine could not be
    /// reached, as opposed to a failure while running a query.
    pub fn is_unavailable(&self) -> bool {
        matches!(
            self,
            StorageError::Backend(
                BackendError::Unavailable { .. }
                    | BackendError::ConnectionFailed { .. }
                    | BackendError::PoolExhausted { .. }
            )
        )
    }
}

/// Errors raised while validating listing parameters.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// `sort_by` named a column outside the sortable set.
    #[error("Invalid sort_by. Choose one of: {}", SortColumn::allowed_names())]
    InvalidSortColumn { value: String },

    /// `sort_dir` was neither `asc` nor `desc`.
    #[error("sort_dir must be 'asc' or 'desc'")]
    InvalidSortDirection { value: String },

    /// `limit` fell outside the accepted page size range.
    #[error("limit must be between {min} and {max}, got {value}")]
    InvalidLimit { value: i64, min: u32, max: u32 },

    /// `offset` was negative.
    #[error("offset must be greater than or equal to 0, got {value}")]
    InvalidOffset { value: i64 },
}

/// Backend-specific errors.
#[derive(Error, Debug)]
pub enum BackendError {
    /// The backend is currently unavailable.
    #[error("backend unavailable: {backend_name}")]
    Unavailable {
        backend_name: String,
        message: String,
    },

    /// Connection to the backend failed.
    #[error("connection failed to {backend_name}: {message}")]
    ConnectionFailed {
        backend_name: String,
        message: String,
    },

    /// Connection pool exhausted.
    #[error("connection pool exhausted for {backend_name}")]
    PoolExhausted { backend_name: String },

    /// Query execution error.
    #[error("query execution failed: {message}")]
    QueryError { message: String },

    /// A stored value could not be mapped onto a record field.
    #[error("serialization error: {message}")]
    SerializationError { message: String },

    /// Internal backend error.
    #[error("internal error in {backend_name}: {message}")]
    Internal {
        backend_name: String,
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

/// Result type alias for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_sort_column_lists_allowed_set() {
        let err = ValidationError::InvalidSortColumn {
            value: "foo".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid sort_by. Choose one of: internal_id, name, city, region, postal_code, cluster_size"
        );
    }

    #[test]
    fn test_invalid_sort_direction_display() {
        let err = ValidationError::InvalidSortDirection {
            value: "sideways".to_string(),
        };
        assert_eq!(err.to_string(), "sort_dir must be 'asc' or 'desc'");
    }

    #[test]
    fn test_storage_error_classification() {
        let validation: StorageError = ValidationError::InvalidOffset { value: -1 }.into();
        assert!(!validation.is_unavailable());

        let unavailable: StorageError = BackendError::PoolExhausted {
            backend_name: "sqlite".to_string(),
        }
        .into();
        assert!(unavailable.is_unavailable());

        let query: StorageError = BackendError::QueryError {
            message: "no such table".to_string(),
        }
        .into();
        assert!(!query.is_unavailable());
    }
}
