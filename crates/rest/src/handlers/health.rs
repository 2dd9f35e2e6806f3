//! Health check endpoint handlers.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::debug;
use vigil_persistence::core::RecordSource;

use crate::error::{RestError, RestResult};
use crate::state::AppState;

/// Handler for the liveness endpoint.
///
/// Does not touch storage.
///
/// # HTTP Request
///
/// `GET [base]/health`
pub async fn health_handler() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

/// Handler for a readiness probe.
///
/// Runs the backend's trivial health query.
///
/// # HTTP Request
///
/// `GET [base]/_readiness`
///
/// # Response
///
/// - `200 OK` - Storage answered
/// - `503 Service Unavailable` - Storage could not be reached or failed the query
pub async fn readiness_handler<S>(State(state): State<AppState<S>>) -> RestResult<Response>
where
    S: RecordSource + Send + Sync,
{
    debug!("Processing readiness check request");

    let backend_name = state.storage().backend_name();

    state
        .storage()
        .health_check()
        .await
        .map_err(|e| RestError::ServiceUnavailable {
            message: format!("{} health check failed: {}", backend_name, e),
        })?;

    let response = serde_json::json!({
        "status": "ready",
        "backend": backend_name,
        "timestamp": chrono::Utc::now().to_rfc3339()
    });

    Ok((StatusCode::OK, Json(response)).into_response())
}
