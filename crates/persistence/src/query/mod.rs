//! Query construction for listings and counts.
//!
//! Building a query happens in three steps, each a pure function of its
//! inputs:
//!
//! 1. [`compose_filters`] folds [`FilterCriteria`](crate::types::FilterCriteria)
//!    into a base [`Statement`] as a conjunction of [`Predicate`]s.
//! 2. [`list_statement`] / [`count_statement`] pick the base, compose the
//!    filters and, for listings, attach the order and page.
//! 3. [`render`] turns a [`Statement`] into SQL text plus bound parameters for
//!    a given [`Dialect`].
//!
//! Because the listing and the count share step 1, they always agree on
//! which rows match.
//!
//! ```
//! use vigil_persistence::query::{count_statement, render, Dialect};
//! use vigil_persistence::types::FilterCriteria;
//!
//! let criteria = FilterCriteria::new().with_city(" Spring ");
//! let sql = render(&count_statement(&criteria), Dialect::Sqlite);
//!
//! assert_eq!(
//!     sql.sql,
//!     "SELECT COUNT(*) FROM funeral_homes WHERE lower(city) LIKE ?1"
//! );
//! ```

mod compose;
mod plan;
mod sql;
mod statement;

pub use compose::{compose_filters, filter_predicates};
pub use plan::{count_statement, list_statement};
pub use sql::{Dialect, SqlFragment, SqlParam, render};
pub use statement::{Column, Predicate, Projection, Statement, TABLE_NAME};
