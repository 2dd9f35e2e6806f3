//! SQLite schema provisioning.

use rusqlite::Connection;

use crate::error::{BackendError, StorageError, StorageResult};

/// Creates the directory table and its sort indexes if they are missing.
///
/// Existing tables are left exactly as they are.
pub fn initialize_schema(conn: &Connection) -> StorageResult<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS funeral_homes (
            internal_id INTEGER PRIMARY KEY,
            cluster_id TEXT,
            name TEXT,
            street TEXT,
            city TEXT,
            region TEXT,
            postal_code TEXT,
            country TEXT,
            phone TEXT,
            website TEXT,
            latitude REAL,
            longitude REAL,
            sources TEXT,
            source_ids TEXT,
            cluster_size INTEGER
        );
        CREATE INDEX IF NOT EXISTS idx_funeral_homes_name ON funeral_homes(name);
        CREATE INDEX IF NOT EXISTS idx_funeral_homes_city ON funeral_homes(city);
        CREATE INDEX IF NOT EXISTS idx_funeral_homes_region ON funeral_homes(region);
        CREATE INDEX IF NOT EXISTS idx_funeral_homes_postal_code ON funeral_homes(postal_code);
        CREATE INDEX IF NOT EXISTS idx_funeral_homes_cluster_size ON funeral_homes(cluster_size);",
    )
    .map_err(|e| {
        StorageError::Backend(BackendError::Internal {
            backend_name: "sqlite".to_string(),
            message: format!("Failed to create funeral_homes table: {}", e),
            source: None,
        })
    })?;

    Ok(())
}
