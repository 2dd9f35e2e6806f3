//! Listing parameter extractors.
//!
//! Query strings are read as raw text and validated here, so a bad request
//! is rejected before a handler runs or any connection is taken from the
//! pool.

use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use vigil_persistence::types::{DEFAULT_LIMIT, FilterCriteria, RecordQuery};

use crate::error::RestError;

/// Axum extractor for a validated listing request.
///
/// Reads `name`, `city`, `region`, `postal_code`, `country`, `phone`,
/// `limit`, `offset`, `sort_by` and `sort_dir`. Unknown parameters are
/// ignored.
///
/// # Example
///
/// ```rust,ignore
/// use vigil_rest::extractors::ListingParams;
///
/// async fn list_handler(params: ListingParams) {
///     let query = params.into_query();
///     let limit = query.page.limit();
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ListingParams {
    query: RecordQuery,
}

/// Axum extractor for the filters of a count request.
///
/// Paging and sort parameters are accepted and ignored.
#[derive(Debug, Clone)]
pub struct FilterParams {
    criteria: FilterCriteria,
}

/// Raw listing query string.
///
/// Built from the ordered key/value pairs so a repeated key resolves to its
/// last value instead of failing deserialization.
#[derive(Debug, Default)]
struct ListingQuery {
    criteria: FilterCriteria,
    limit: Option<String>,
    offset: Option<String>,
    sort_by: Option<String>,
    sort_dir: Option<String>,
}

impl ListingQuery {
    fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        pairs
            .into_iter()
            .fold(ListingQuery::default(), |mut raw, (key, value)| {
                match key.as_str() {
                    "name" => raw.criteria = raw.criteria.with_name(value),
                    "city" => raw.criteria = raw.criteria.with_city(value),
                    "region" => raw.criteria = raw.criteria.with_region(value),
                    "postal_code" => raw.criteria = raw.criteria.with_postal_code(value),
                    "country" => raw.criteria = raw.criteria.with_country(value),
                    "phone" => raw.criteria = raw.criteria.with_phone(value),
                    "limit" => raw.limit = Some(value),
                    "offset" => raw.offset = Some(value),
                    "sort_by" => raw.sort_by = Some(value),
                    "sort_dir" => raw.sort_dir = Some(value),
                    _ => {}
                }
                raw
            })
    }
}

async fn read_query<S>(parts: &mut Parts, state: &S) -> Result<ListingQuery, RestError>
where
    S: Send + Sync,
{
    let Query(pairs) = Query::<Vec<(String, String)>>::from_request_parts(parts, state)
        .await
        .map_err(|e| RestError::UnprocessableEntity {
            message: e.body_text(),
        })?;
    Ok(ListingQuery::from_pairs(pairs))
}

impl ListingParams {
    /// Returns the validated query.
    pub fn query(&self) -> &RecordQuery {
        &self.query
    }

    /// Consumes the extractor, returning the validated query.
    pub fn into_query(self) -> RecordQuery {
        self.query
    }
}

impl FilterParams {
    /// Returns the filter criteria.
    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// Consumes the extractor, returning the filter criteria.
    pub fn into_criteria(self) -> FilterCriteria {
        self.criteria
    }
}

impl<S> FromRequestParts<S> for ListingParams
where
    S: Send + Sync,
{
    type Rejection = RestError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let raw = read_query(parts, state).await?;

        let limit = parse_integer("limit", raw.limit.as_deref(), i64::from(DEFAULT_LIMIT))?;
        let offset = parse_integer("offset", raw.offset.as_deref(), 0)?;

        let query = RecordQuery::from_raw(
            raw.criteria,
            raw.sort_by.as_deref().unwrap_or("internal_id"),
            raw.sort_dir.as_deref().unwrap_or("asc"),
            limit,
            offset,
        )?;

        Ok(ListingParams { query })
    }
}

impl<S> FromRequestParts<S> for FilterParams
where
    S: Send + Sync,
{
    type Rejection = RestError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let raw = read_query(parts, state).await?;

        Ok(FilterParams {
            criteria: raw.criteria,
        })
    }
}

/// Parses an optional integer query value, using `default` when absent.
fn parse_integer(name: &str, raw: Option<&str>, default: i64) -> Result<i64, RestError> {
    match raw {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| RestError::UnprocessableEntity {
                message: format!("{} must be an integer, got '{}'", name, value),
            }),
    }
}
