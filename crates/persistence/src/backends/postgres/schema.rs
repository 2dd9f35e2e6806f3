//! PostgreSQL schema definition.

use crate::error::{BackendError, StorageError, StorageResult};

/// Creates the directory table and its sort indexes if they are missing.
pub(crate) async fn initialize_schema(client: &deadpool_postgres::Client) -> StorageResult<()> {
    client
        .batch_execute(
            r#"
            CREATE TABLE IF NOT EXISTS funeral_homes (
                internal_id BIGINT PRIMARY KEY,
                cluster_id TEXT,
                name TEXT,
                street TEXT,
                city TEXT,
                region TEXT,
                postal_code TEXT,
                country TEXT,
                phone TEXT,
                website TEXT,
                latitude DOUBLE PRECISION,
                longitude DOUBLE PRECISION,
                sources TEXT,
                source_ids TEXT,
                cluster_size BIGINT
            );

            CREATE INDEX IF NOT EXISTS idx_funeral_homes_name ON funeral_homes(name);
            CREATE INDEX IF NOT EXISTS idx_funeral_homes_city ON funeral_homes(city);
            CREATE INDEX IF NOT EXISTS idx_funeral_homes_region ON funeral_homes(region);
            CREATE INDEX IF NOT EXISTS idx_funeral_homes_postal_code ON funeral_homes(postal_code);
            CREATE INDEX IF NOT EXISTS idx_funeral_homes_cluster_size ON funeral_homes(cluster_size);
            "#,
        )
        .await
        .map_err(|e| pg_error(format!("Failed to create schema: {}", e)))?;

    tracing::debug!("PostgreSQL directory schema ready");
    Ok(())
}

fn pg_error(message: String) -> StorageError {
    StorageError::Backend(BackendError::Internal {
        backend_name: "postgres".to_string(),
        message,
        source: None,
    })
}
