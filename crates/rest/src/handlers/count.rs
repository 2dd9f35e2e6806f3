//! Count handler.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::debug;
use vigil_persistence::core::RecordSource;
use vigil_persistence::types::RecordCount;

use crate::error::RestResult;
use crate::extractors::FilterParams;
use crate::state::AppState;

/// Handler for the listing count.
///
/// Counts the records the listing endpoint would page through for the same
/// filters. Pagination and sort parameters do not affect the result.
///
/// # HTTP Request
///
/// `GET [base]/funeral-homes/count?name=..&city=..&region=..&postal_code=..&country=..&phone=..`
///
/// # Response
///
/// `200 OK` with `{"total": n}`.
pub async fn count_handler<S>(
    State(state): State<AppState<S>>,
    params: FilterParams,
) -> RestResult<Response>
where
    S: RecordSource + Send + Sync,
{
    let criteria = params.into_criteria();

    debug!(
        filters = criteria.specified_count(),
        "Processing count request"
    );

    let total = state.storage().count_records(&criteria).await?;

    Ok((StatusCode::OK, Json(RecordCount { total })).into_response())
}
