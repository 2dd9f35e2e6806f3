//! Core types for the persistence layer.
//!
//! - [`FuneralHomeRecord`] - One row of the directory
//! - [`FilterCriteria`] - Optional per-field filters for a request
//! - [`SortColumn`], [`SortDirection`], [`SortOrder`] - Closed sort vocabulary
//! - [`PageRequest`] - Limit/offset window
//! - [`RecordQuery`] - Everything a listing needs, validated
//!
//! # Building a Query
//!
//! ```
//! use vigil_persistence::types::{
//!     FilterCriteria, PageRequest, RecordQuery, SortColumn, SortDirection, SortOrder,
//! };
//!
//! let query = RecordQuery::new(
//!     FilterCriteria::new().with_city("spring").with_country("US"),
//!     SortOrder::new(SortColumn::Name, SortDirection::Desc),
//!     PageRequest::new(50, 100).unwrap(),
//! );
//!
//! assert_eq!(query.page.limit(), 50);
//! assert_eq!(query.criteria.specified_count(), 2);
//! ```

mod criteria;
mod pagination;
mod query;
mod record;
mod sort;

pub use criteria::FilterCriteria;
pub use pagination::{DEFAULT_LIMIT, MAX_LIMIT, MIN_LIMIT, PageRequest};
pub use query::RecordQuery;
pub use record::{FuneralHomeRecord, RecordCount};
pub use sort::{SortColumn, SortDirection, SortOrder};
