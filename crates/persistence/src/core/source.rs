//! The record source trait.

use async_trait::async_trait;

use crate::error::StorageResult;
use crate::types::{FilterCriteria, FuneralHomeRecord, RecordQuery};

use super::BackendKind;

/// Read access to the funeral home directory.
///
/// Both operations are read-only. Implementations acquire a connection for
/// the duration of a call and release it before returning, whether the call
/// succeeds or fails; a single connection is never shared between concurrent
/// calls.
///
/// Implementations build their SQL through
/// [`list_statement`](crate::query::list_statement) and
/// [`count_statement`](crate::query::count_statement) so that
/// `count_records(&q.criteria)` always equals the number of rows
/// `list_records(&q)` would page through.
///
/// # Example
///
/// ```ignore
/// use vigil_persistence::core::RecordSource;
/// use vigil_persistence::types::{FilterCriteria, RecordQuery};
///
/// async fn first_page<S: RecordSource>(source: &S) -> StorageResult<()> {
///     let query = RecordQuery::default();
///     let rows = source.list_records(&query).await?;
///     let total = source.count_records(&query.criteria).await?;
///     assert!(rows.len() as u64 <= total);
///     Ok(())
/// }
/// ```
#[async_trait]
pub trait RecordSource: Send + Sync {
    /// Returns the kind of storage engine behind this source.
    fn kind(&self) -> BackendKind;

    /// Returns a human-readable name for this storage backend.
    fn backend_name(&self) -> &'static str {
        self.kind().name()
    }

    /// Returns one page of records matching the query, in the query's order.
    ///
    /// Rows that tie on the sort column come back in storage order, which is
    /// not guaranteed to be stable between calls.
    async fn list_records(&self, query: &RecordQuery) -> StorageResult<Vec<FuneralHomeRecord>>;

    /// Returns the number of records matching the criteria.
    async fn count_records(&self, criteria: &FilterCriteria) -> StorageResult<u64>;

    /// Checks that the storage engine answers a trivial query.
    async fn health_check(&self) -> StorageResult<()>;
}
