//! SQLite backend implementation.
//!
//! Reads the directory from a SQLite database through an r2d2 connection
//! pool. Each call checks a connection out of the pool and returns it when
//! the call ends.
//!
//! # Example
//!
//! ```no_run
//! use vigil_persistence::backends::sqlite::SqliteBackend;
//! use vigil_persistence::core::RecordSource;
//! use vigil_persistence::types::{FilterCriteria, RecordQuery};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let backend = SqliteBackend::open("funeral_homes_unified.db")?;
//!
//! let criteria = FilterCriteria::new().with_city("springfield");
//! let total = backend.count_records(&criteria).await?;
//! let page = backend
//!     .list_records(&RecordQuery { criteria, ..Default::default() })
//!     .await?;
//! assert!(page.len() as u64 <= total);
//! # Ok(())
//! # }
//! ```
//!
//! # Schema
//!
//! ```sql
//! CREATE TABLE funeral_homes (
//!     internal_id INTEGER PRIMARY KEY,
//!     cluster_id TEXT,
//!     name TEXT,
//!     street TEXT,
//!     city TEXT,
//!     region TEXT,
//!     postal_code TEXT,
//!     country TEXT,
//!     phone TEXT,
//!     website TEXT,
//!     latitude REAL,
//!     longitude REAL,
//!     sources TEXT,
//!     source_ids TEXT,
//!     cluster_size INTEGER
//! );
//! ```
//!
//! The table is normally produced by the ingestion pipeline;
//! [`SqliteBackend::init_schema`] only creates it when it is missing.

mod backend;
mod schema;
mod source;

pub use backend::{SqliteBackend, SqliteBackendConfig};
