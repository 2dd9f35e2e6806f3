//! Vigil Persistence Layer
//!
//! Read access to the funeral home directory: the record types, the
//! validated listing query, the filter composer that turns request
//! criteria into SQL predicates, and the storage backends that execute
//! the resulting statements.
//!
//! # Backend Features
//!
//! Enable backends with feature flags in `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! vigil-persistence = { version = "0.1", features = ["postgres"] }
//! ```
//!
//! Available backend features:
//! - `sqlite` (default) - SQLite with in-memory and file modes
//! - `postgres` - PostgreSQL via deadpool-postgres
//!
//! # Architecture
//!
//! - [`types`] - Records, filter criteria, sort order and pagination
//! - [`query`] - Filter composition and statement rendering
//! - [`error`] - Error types for all operations
//! - [`core`] - The [`RecordSource`](core::RecordSource) trait
//! - [`backends`] - Backend implementations (SQLite, PostgreSQL)
//!
//! # Quick Start
//!
//! ```
//! use vigil_persistence::types::{FilterCriteria, RecordQuery};
//!
//! // Validate raw listing parameters
//! let query = RecordQuery::from_raw(
//!     FilterCriteria::new().with_city("spring"),
//!     "name",
//!     "desc",
//!     25,
//!     50,
//! )
//! .unwrap();
//!
//! assert_eq!(query.page.limit(), 25);
//! assert_eq!(query.criteria.city(), Some("spring"));
//!
//! // Unknown sort columns are rejected before any storage access
//! let err = RecordQuery::from_raw(FilterCriteria::new(), "website", "asc", 15, 0).unwrap_err();
//! assert!(err.to_string().starts_with("Invalid sort_by"));
//! ```
//!
//! The listing and its count are always built from the same criteria, so a
//! count can be used to drive pagination controls for the listing:
//!
//! ```
//! # #[cfg(feature = "sqlite")]
//! # tokio_test::block_on(async {
//! use vigil_persistence::backends::sqlite::SqliteBackend;
//! use vigil_persistence::core::RecordSource;
//! use vigil_persistence::types::{FuneralHomeRecord, RecordQuery};
//!
//! let backend = SqliteBackend::in_memory().unwrap();
//! backend.init_schema().unwrap();
//! backend
//!     .import_records(&[
//!         FuneralHomeRecord::new(1).with_city("Springfield"),
//!         FuneralHomeRecord::new(2).with_city("Shelbyville"),
//!     ])
//!     .unwrap();
//!
//! let query = RecordQuery::default();
//! let rows = backend.list_records(&query).await.unwrap();
//! let total = backend.count_records(&query.criteria).await.unwrap();
//! assert_eq!(rows.len() as u64, total);
//! # });
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod backends;
pub mod core;
pub mod error;
pub mod query;
pub mod types;

// Re-export commonly used types at crate root
pub use error::{StorageError, StorageResult, ValidationError};
pub use types::{FilterCriteria, FuneralHomeRecord, PageRequest, RecordQuery, SortOrder};

// Re-export core traits
pub use core::{BackendKind, RecordSource};
