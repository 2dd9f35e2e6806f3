//! Core storage traits and abstractions.
//!
//! - [`RecordSource`] - Listing and counting directory records
//! - [`BackendKind`] - Identifies the storage engine behind a source
//!
//! The HTTP layer depends only on [`RecordSource`]; each backend in
//! [`crate::backends`] implements it.

pub mod backend;
pub mod source;

pub use backend::BackendKind;
pub use source::RecordSource;
