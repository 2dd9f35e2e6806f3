//! [`RecordSource`] implementation for PostgreSQL.

use async_trait::async_trait;
use tokio_postgres::Row;
use tokio_postgres::types::ToSql;

use crate::core::{BackendKind, RecordSource};
use crate::error::{BackendError, StorageError, StorageResult};
use crate::query::{Dialect, SqlParam, count_statement, list_statement, render};
use crate::types::{FilterCriteria, FuneralHomeRecord, RecordQuery};

use super::PostgresBackend;

#[async_trait]
impl RecordSource for PostgresBackend {
    fn kind(&self) -> BackendKind {
        BackendKind::Postgres
    }

    async fn list_records(&self, query: &RecordQuery) -> StorageResult<Vec<FuneralHomeRecord>> {
        let fragment = render(&list_statement(query), Dialect::Postgres);
        tracing::debug!(sql = %fragment.sql, params = fragment.params.len(), "Listing records");

        let client = self.get_client().await?;
        let rows = client
            .query(&fragment.sql, &bind(&fragment.params))
            .await
            .map_err(query_error)?;

        rows.iter().map(record_from_row).collect()
    }

    async fn count_records(&self, criteria: &FilterCriteria) -> StorageResult<u64> {
        let fragment = render(&count_statement(criteria), Dialect::Postgres);
        tracing::debug!(sql = %fragment.sql, params = fragment.params.len(), "Counting records");

        let client = self.get_client().await?;
        let row = client
            .query_one(&fragment.sql, &bind(&fragment.params))
            .await
            .map_err(query_error)?;

        let total: i64 = row.try_get(0).map_err(serialization_error)?;
        u64::try_from(total).map_err(|_| {
            StorageError::Backend(BackendError::SerializationError {
                message: format!("negative row count: {}", total),
            })
        })
    }

    async fn health_check(&self) -> StorageResult<()> {
        let client = self.get_client().await?;
        client.simple_query("SELECT 1").await.map_err(|e| {
            StorageError::Backend(BackendError::Unavailable {
                backend_name: "postgres".to_string(),
                message: e.to_string(),
            })
        })?;
        Ok(())
    }
}

fn bind(params: &[SqlParam]) -> Vec<&(dyn ToSql + Sync)> {
    params
        .iter()
        .map(|param| match param {
            SqlParam::String(s) => s as &(dyn ToSql + Sync),
            SqlParam::Integer(i) => i as &(dyn ToSql + Sync),
        })
        .collect()
}

fn record_from_row(row: &Row) -> StorageResult<FuneralHomeRecord> {
    Ok(FuneralHomeRecord {
        internal_id: row.try_get("internal_id").map_err(serialization_error)?,
        cluster_id: row.try_get("cluster_id").map_err(serialization_error)?,
        name: row.try_get("name").map_err(serialization_error)?,
        street: row.try_get("street").map_err(serialization_error)?,
        city: row.try_get("city").map_err(serialization_error)?,
        region: row.try_get("region").map_err(serialization_error)?,
        postal_code: row.try_get("postal_code").map_err(serialization_error)?,
        country: row.try_get("country").map_err(serialization_error)?,
        phone: row.try_get("phone").map_err(serialization_error)?,
        website: row.try_get("website").map_err(serialization_error)?,
        latitude: row.try_get("latitude").map_err(serialization_error)?,
        longitude: row.try_get("longitude").map_err(serialization_error)?,
        sources: row.try_get("sources").map_err(serialization_error)?,
        source_ids: row.try_get("source_ids").map_err(serialization_error)?,
        cluster_size: row.try_get("cluster_size").map_err(serialization_error)?,
    })
}

fn query_error(e: tokio_postgres::Error) -> StorageError {
    StorageError::Backend(BackendError::QueryError {
        message: e.to_string(),
    })
}

fn serialization_error(e: tokio_postgres::Error) -> StorageError {
    StorageError::Backend(BackendError::SerializationError {
        message: e.to_string(),
    })
}
