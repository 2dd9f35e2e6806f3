//! Directory route configuration.

use axum::{Router, routing::get};
use vigil_persistence::core::RecordSource;

use crate::handlers;
use crate::state::AppState;

/// Creates all directory API routes.
///
/// # Routes
///
/// - `GET /funeral-homes` - Listing
/// - `GET /funeral-homes/count` - Count for the same filters
/// - `GET /health` - Liveness
/// - `GET /_readiness` - Storage readiness
pub fn create_routes<S>(state: AppState<S>) -> Router
where
    S: RecordSource + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(handlers::health_handler))
        .route("/_readiness", get(handlers::readiness_handler::<S>))
        .route("/funeral-homes", get(handlers::list_handler::<S>))
        .route("/funeral-homes/count", get(handlers::count_handler::<S>))
        .with_state(state)
}
