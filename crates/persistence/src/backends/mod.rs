//! Database backend implementations.
//!
//! Each backend implements [`RecordSource`](crate::core::RecordSource) and is
//! gated behind a feature flag.
//!
//! # Available Backends
//!
//! | Backend | Feature | Description |
//! |---------|---------|-------------|
//! | SQLite | `sqlite` | Embedded database, file-based or in-memory (default) |
//! | PostgreSQL | `postgres` | Server database reached through a connection string |
//!
//! # Example
//!
//! ```no_run
//! # #[cfg(feature = "sqlite")]
//! use vigil_persistence::backends::sqlite::SqliteBackend;
//!
//! # #[cfg(feature = "sqlite")]
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Create an in-memory SQLite backend
//! let backend = SqliteBackend::in_memory()?;
//! backend.init_schema()?;
//!
//! // Or use the directory database built by the ingestion pipeline
//! let backend = SqliteBackend::open("./funeral_homes_unified.db")?;
//! # Ok(())
//! # }
//! ```

#[cfg(feature = "sqlite")]
pub mod sqlite;

#[cfg(feature = "postgres")]
pub mod postgres;
