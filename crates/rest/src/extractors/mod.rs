//! Axum extractors for directory requests.
//!
//! - [`ListingParams`] - Filters, sort and page for the listing endpoint
//! - [`FilterParams`] - Filters only, for the count endpoint

mod listing;

pub use listing::{FilterParams, ListingParams};
