//! Application state for the directory API.

use std::sync::Arc;

use vigil_persistence::core::RecordSource;

/// Shared application state for the REST API.
///
/// Holds the record source behind an `Arc`, so cloning per request is cheap.
/// Server configuration is applied when the router is built and is not
/// carried here.
///
/// # Example
///
/// ```rust,ignore
/// use vigil_rest::AppState;
/// use vigil_persistence::backends::sqlite::SqliteBackend;
/// use std::sync::Arc;
///
/// let backend = SqliteBackend::in_memory()?;
/// let state = AppState::new(Arc::new(backend));
/// ```
pub struct AppState<S> {
    /// The record source.
    storage: Arc<S>,
}

// Manually implement Clone since S is wrapped in Arc and doesn't need to be Clone
impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            storage: Arc::clone(&self.storage),
        }
    }
}

impl<S: RecordSource> AppState<S> {
    /// Creates a new AppState over the given storage.
    pub fn new(storage: Arc<S>) -> Self {
        Self { storage }
    }

    /// Returns a reference to the record source.
    pub fn storage(&self) -> &S {
        &self.storage
    }
}
