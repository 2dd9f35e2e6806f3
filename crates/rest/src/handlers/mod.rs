//! HTTP request handlers for the directory API.
//!
//! - [`list`] - Filtered, sorted, paginated listing
//! - [`count`] - Number of records matching the listing filters
//! - [`health`] - Liveness and readiness endpoints

pub mod count;
pub mod health;
pub mod list;

// Re-export handlers for convenience
pub use count::count_handler;
pub use health::{health_handler, readiness_handler};
pub use list::list_handler;
