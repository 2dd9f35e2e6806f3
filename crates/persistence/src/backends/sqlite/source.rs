//! [`RecordSource`] implementation for SQLite.

use async_trait::async_trait;
use rusqlite::types::ValueRef;
use rusqlite::{Row, ToSql};

use crate::core::{BackendKind, RecordSource};
use crate::error::{BackendError, StorageError, StorageResult};
use crate::query::{Dialect, SqlParam, count_statement, list_statement, render};
use crate::types::{FilterCriteria, FuneralHomeRecord, RecordQuery};

use super::SqliteBackend;

#[async_trait]
impl RecordSource for SqliteBackend {
    fn kind(&self) -> BackendKind {
        BackendKind::Sqlite
    }

    async fn list_records(&self, query: &RecordQuery) -> StorageResult<Vec<FuneralHomeRecord>> {
        let fragment = render(&list_statement(query), Dialect::Sqlite);
        tracing::debug!(sql = %fragment.sql, params = fragment.params.len(), "Listing records");

        let conn = self.get_connection()?;
        let mut stmt = conn.prepare(&fragment.sql).map_err(query_error)?;
        let bound = bind(&fragment.params);

        let rows = stmt
            .query_map(bound.as_slice(), record_from_row)
            .map_err(query_error)?;

        let mut records = Vec::new();
        for row in rows {
            records.push(row.map_err(query_error)?);
        }

        Ok(records)
    }

    async fn count_records(&self, criteria: &FilterCriteria) -> StorageResult<u64> {
        let fragment = render(&count_statement(criteria), Dialect::Sqlite);
        tracing::debug!(sql = %fragment.sql, params = fragment.params.len(), "Counting records");

        let conn = self.get_connection()?;
        let bound = bind(&fragment.params);
        let total: i64 = conn
            .query_row(&fragment.sql, bound.as_slice(), |row| row.get(0))
            .map_err(query_error)?;

        u64::try_from(total).map_err(|_| {
            StorageError::Backend(BackendError::SerializationError {
                message: format!("negative row count: {}", total),
            })
        })
    }

    async fn health_check(&self) -> StorageResult<()> {
        let conn = self.get_connection()?;
        conn.query_row("SELECT 1", [], |row| row.get::<_, i64>(0))
            .map_err(|e| {
                StorageError::Backend(BackendError::Unavailable {
                    backend_name: "sqlite".to_string(),
                    message: e.to_string(),
                })
            })?;
        Ok(())
    }
}

fn bind(params: &[SqlParam]) -> Vec<&dyn ToSql> {
    params
        .iter()
        .map(|param| match param {
            SqlParam::String(s) => s as &dyn ToSql,
            SqlParam::Integer(i) => i as &dyn ToSql,
        })
        .collect()
}

fn query_error(e: rusqlite::Error) -> StorageError {
    StorageError::Backend(BackendError::QueryError {
        message: e.to_string(),
    })
}

/// Maps a row in table column order onto a record.
///
/// The directory table is written by external pipelines, so text columns may
/// carry integers (postal codes, cluster ids) and integer columns may carry
/// reals. Values are coerced rather than rejected.
fn record_from_row(row: &Row<'_>) -> rusqlite::Result<FuneralHomeRecord> {
    Ok(FuneralHomeRecord {
        internal_id: row.get(0)?,
        cluster_id: text_column(row, 1)?,
        name: text_column(row, 2)?,
        street: text_column(row, 3)?,
        city: text_column(row, 4)?,
        region: text_column(row, 5)?,
        postal_code: text_column(row, 6)?,
        country: text_column(row, 7)?,
        phone: text_column(row, 8)?,
        website: text_column(row, 9)?,
        latitude: row.get(10)?,
        longitude: row.get(11)?,
        sources: text_column(row, 12)?,
        source_ids: text_column(row, 13)?,
        cluster_size: integer_column(row, 14)?,
    })
}

fn text_column(row: &Row<'_>, idx: usize) -> rusqlite::Result<Option<String>> {
    Ok(match row.get_ref(idx)? {
        ValueRef::Null => None,
        ValueRef::Integer(i) => Some(i.to_string()),
        ValueRef::Real(f) => Some(f.to_string()),
        ValueRef::Text(bytes) | ValueRef::Blob(bytes) => {
            Some(String::from_utf8_lossy(bytes).into_owned())
        }
    })
}

fn integer_column(row: &Row<'_>, idx: usize) -> rusqlite::Result<Option<i64>> {
    match row.get_ref(idx)? {
        ValueRef::Real(f) => Ok(Some(f as i64)),
        _ => row.get(idx),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{PageRequest, SortColumn, SortDirection, SortOrder};

    fn seeded() -> SqliteBackend {
        let backend = SqliteBackend::in_memory().unwrap();
        backend.init_schema().unwrap();
        backend
            .import_records(&[
                FuneralHomeRecord::new(1)
                    .with_name("Oak Grove Chapel")
                    .with_city("Springfield"),
                FuneralHomeRecord::new(2)
                    .with_name("Riverside Memorial")
                    .with_city("Shelbyville"),
                FuneralHomeRecord::new(3)
                    .with_name("Spring Hill Funeral Home")
                    .with_city("Capital City"),
            ])
            .unwrap();
        backend
    }

    #[tokio::test]
    async fn test_list_applies_sort_and_page() {
        let backend = seeded();
        let query = RecordQuery::new(
            FilterCriteria::new(),
            SortOrder::new(SortColumn::InternalId, SortDirection::Desc),
            PageRequest::new(2, 0).unwrap(),
        );

        let records = backend.list_records(&query).await.unwrap();
        let ids: Vec<i64> = records.iter().map(|r| r.internal_id).collect();
        assert_eq!(ids, vec![3, 2]);
    }

    #[tokio::test]
    async fn test_count_ignores_page() {
        let backend = seeded();
        let criteria = FilterCriteria::new().with_name("spring");
        assert_eq!(backend.count_records(&criteria).await.unwrap(), 1);
        assert_eq!(backend.count_records(&FilterCriteria::new()).await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_text_columns_accept_integers() {
        let backend = SqliteBackend::in_memory().unwrap();
        backend.init_schema().unwrap();
        {
            let conn = backend.get_connection().unwrap();
            conn.execute(
                "INSERT INTO funeral_homes (internal_id, cluster_id, postal_code, cluster_size)
                 VALUES (7, 42, 62701, 3.0)",
                [],
            )
            .unwrap();
        }

        let records = backend.list_records(&RecordQuery::default()).await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].cluster_id.as_deref(), Some("42"));
        assert_eq!(records[0].postal_code.as_deref(), Some("62701"));
        assert_eq!(records[0].cluster_size, Some(3));
    }

    #[tokio::test]
    async fn test_health_check() {
        let backend = SqliteBackend::in_memory().unwrap();
        backend.health_check().await.unwrap();
        assert_eq!(backend.backend_name(), "sqlite");
    }
}
