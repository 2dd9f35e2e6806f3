//! The validated listing request.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

use super::{FilterCriteria, PageRequest, SortOrder};

/// Filters, ordering and page for one listing call.
///
/// Built once per request and never modified afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecordQuery {
    /// Field filters, shared with the matching count.
    pub criteria: FilterCriteria,
    /// Single-column ordering.
    pub sort: SortOrder,
    /// Limit/offset window.
    pub page: PageRequest,
}

impl RecordQuery {
    /// Creates a query from already-validated parts.
    pub fn new(criteria: FilterCriteria, sort: SortOrder, page: PageRequest) -> Self {
        Self {
            criteria,
            sort,
            page,
        }
    }

    /// Validates raw listing parameters.
    ///
    /// Sort parameters are checked before paging, so an unknown `sort_by`
    /// is always the reported problem when several are wrong.
    pub fn from_raw(
        criteria: FilterCriteria,
        sort_by: &str,
        sort_dir: &str,
        limit: i64,
        offset: i64,
    ) -> Result<Self, ValidationError> {
        let sort = SortOrder::parse(sort_by, sort_dir)?;
        let page = PageRequest::from_signed(limit, offset)?;
        Ok(Self::new(criteria, sort, page))
    }
}
