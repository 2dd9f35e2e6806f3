//! SQLite backend implementation.

use std::fmt::Debug;
use std::path::Path;
use std::time::Duration;

use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::params;
use serde::{Deserialize, Serialize};

use crate::core::BackendKind;
use crate::error::{BackendError, StorageError, StorageResult};
use crate::types::FuneralHomeRecord;

use super::schema;

/// SQLite backend for the funeral home directory.
pub struct SqliteBackend {
    pool: Pool<SqliteConnectionManager>,
    config: SqliteBackendConfig,
    is_memory: bool,
}

impl Debug for SqliteBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqliteBackend")
            .field("config", &self.config)
            .field("is_memory", &self.is_memory)
            .field("pool_state", &self.pool.state())
            .finish_non_exhaustive()
    }
}

/// Configuration for the SQLite backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SqliteBackendConfig {
    /// Maximum number of connections in the pool.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    /// Minimum number of idle connections.
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,

    /// Time to wait for a pooled connection, in milliseconds.
    #[serde(default = "default_connection_timeout_ms")]
    pub connection_timeout_ms: u64,

    /// SQLite busy timeout in milliseconds.
    #[serde(default = "default_busy_timeout_ms")]
    pub busy_timeout_ms: u32,
}

fn default_max_connections() -> u32 {
    10
}

fn default_min_connections() -> u32 {
    1
}

fn default_connection_timeout_ms() -> u64 {
    30000
}

fn default_busy_timeout_ms() -> u32 {
    5000
}

impl Default for SqliteBackendConfig {
    fn default() -> Self {
        Self {
            max_connections: default_max_connections(),
            min_connections: default_min_connections(),
            connection_timeout_ms: default_connection_timeout_ms(),
            busy_timeout_ms: default_busy_timeout_ms(),
        }
    }
}

impl SqliteBackend {
    /// Creates a new in-memory SQLite backend.
    ///
    /// The pool holds a single connection that is never recycled, since each
    /// SQLite in-memory connection is its own database.
    pub fn in_memory() -> StorageResult<Self> {
        Self::with_config(":memory:", SqliteBackendConfig::default())
    }

    /// Opens or creates a file-based SQLite database.
    pub fn open<P: AsRef<Path>>(path: P) -> StorageResult<Self> {
        Self::with_config(path, SqliteBackendConfig::default())
    }

    /// Creates a backend with custom configuration.
    pub fn with_config<P: AsRef<Path>>(
        path: P,
        config: SqliteBackendConfig,
    ) -> StorageResult<Self> {
        let path_str = path.as_ref().to_string_lossy();
        let is_memory = path_str == ":memory:";

        let busy_timeout = Duration::from_millis(u64::from(config.busy_timeout_ms));
        let manager = if is_memory {
            SqliteConnectionManager::memory()
        } else {
            SqliteConnectionManager::file(path.as_ref())
        }
        .with_init(move |conn| conn.busy_timeout(busy_timeout));

        let builder = Pool::builder()
            .connection_timeout(Duration::from_millis(config.connection_timeout_ms));
        let builder = if is_memory {
            builder
                .max_size(1)
                .min_idle(Some(1))
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            builder
                .max_size(config.max_connections)
                .min_idle(Some(config.min_connections))
        };

        let pool = builder.build(manager).map_err(|e| {
            StorageError::Backend(BackendError::ConnectionFailed {
                backend_name: "sqlite".to_string(),
                message: e.to_string(),
            })
        })?;

        tracing::debug!(
            path = %path_str,
            is_memory,
            max_connections = pool.max_size(),
            "Opened SQLite connection pool"
        );

        Ok(Self {
            pool,
            config,
            is_memory,
        })
    }

    /// Creates the directory table if it does not exist yet.
    pub fn init_schema(&self) -> StorageResult<()> {
        let conn = self.get_connection()?;
        schema::initialize_schema(&conn)
    }

    /// Loads records into the directory table, replacing rows with the same
    /// `internal_id`.
    ///
    /// Intended for fixtures and local development databases; the directory
    /// itself is produced by the ingestion pipeline. Returns the number of
    /// rows written.
    pub fn import_records(&self, records: &[FuneralHomeRecord]) -> StorageResult<usize> {
        let mut conn = self.get_connection()?;
        let tx = conn.transaction().map_err(|e| internal_error(e, "begin import"))?;

        {
            let mut stmt = tx
                .prepare(
                    "INSERT OR REPLACE INTO funeral_homes (
                        internal_id, cluster_id, name, street, city, region, postal_code,
                        country, phone, website, latitude, longitude, sources, source_ids,
                        cluster_size
                    ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15)",
                )
                .map_err(|e| internal_error(e, "prepare import"))?;

            for record in records {
                stmt.execute(params![
                    record.internal_id,
                    record.cluster_id,
                    record.name,
                    record.street,
                    record.city,
                    record.region,
                    record.postal_code,
                    record.country,
                    record.phone,
                    record.website,
                    record.latitude,
                    record.longitude,
                    record.sources,
                    record.source_ids,
                    record.cluster_size,
                ])
                .map_err(|e| internal_error(e, "insert record"))?;
            }
        }

        tx.commit().map_err(|e| internal_error(e, "commit import"))?;
        tracing::info!(count = records.len(), "Imported funeral home records");

        Ok(records.len())
    }

    /// Get a connection from the pool.
    pub(crate) fn get_connection(
        &self,
    ) -> StorageResult<PooledConnection<SqliteConnectionManager>> {
        self.pool.get().map_err(|e| {
            StorageError::Backend(BackendError::ConnectionFailed {
                backend_name: "sqlite".to_string(),
                message: e.to_string(),
            })
        })
    }

    /// Returns whether this is an in-memory database.
    pub fn is_memory(&self) -> bool {
        self.is_memory
    }

    /// Returns the backend configuration.
    pub fn config(&self) -> &SqliteBackendConfig {
        &self.config
    }

    /// Returns the backend kind.
    pub fn kind(&self) -> BackendKind {
        BackendKind::Sqlite
    }
}

fn internal_error(e: rusqlite::Error, operation: &str) -> StorageError {
    StorageError::Backend(BackendError::Internal {
        backend_name: "sqlite".to_string(),
        message: format!("Failed to {}: {}", operation, e),
        source: Some(Box::new(e)),
    })
}
