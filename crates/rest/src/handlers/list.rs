//! Listing handler.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::debug;
use vigil_persistence::core::RecordSource;

use crate::error::RestResult;
use crate::extractors::ListingParams;
use crate::state::AppState;

/// Handler for the directory listing.
///
/// Returns one page of funeral homes matching the filters, ordered by a
/// single sortable column.
///
/// # HTTP Request
///
/// `GET [base]/funeral-homes?name=..&city=..&region=..&postal_code=..&country=..&phone=..&limit=15&offset=0&sort_by=internal_id&sort_dir=asc`
///
/// # Response
///
/// - `200 OK` - JSON array of records, possibly empty
/// - `400 Bad Request` - Unknown `sort_by` or `sort_dir`
/// - `422 Unprocessable Entity` - `limit` or `offset` malformed or out of range
pub async fn list_handler<S>(
    State(state): State<AppState<S>>,
    params: ListingParams,
) -> RestResult<Response>
where
    S: RecordSource + Send + Sync,
{
    let query = params.into_query();

    debug!(
        sort_by = %query.sort.column,
        sort_dir = %query.sort.direction,
        limit = query.page.limit(),
        offset = query.page.offset(),
        filters = query.criteria.specified_count(),
        "Processing listing request"
    );

    let records = state.storage().list_records(&query).await?;

    debug!(returned = records.len(), "Listing complete");

    Ok((StatusCode::OK, Json(records)).into_response())
}
