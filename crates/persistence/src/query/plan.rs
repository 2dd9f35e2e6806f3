//! Listing and count statements.

use crate::types::{FilterCriteria, RecordQuery};

use super::compose::compose_filters;
use super::statement::Statement;

/// Builds the statement for one page of a listing.
pub fn list_statement(query: &RecordQuery) -> Statement {
    compose_filters(&Statement::select_all(), &query.criteria)
        .order_by(query.sort)
        .paginate(query.page)
}

/// Builds the statement counting every row the criteria match.
pub fn count_statement(criteria: &FilterCriteria) -> Statement {
    compose_filters(&Statement::count_all(), criteria)
}
