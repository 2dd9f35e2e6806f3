//! Vigil
//!
//! Read-only listing server for the funeral home directory.

use std::path::{Path, PathBuf};

use clap::Parser;
use tracing::{info, warn};
use vigil_rest::{ServerConfig, StorageTarget, create_app_with_config, init_logging};

#[cfg(feature = "sqlite")]
use vigil_persistence::backends::sqlite::{SqliteBackend, SqliteBackendConfig};

/// Opens the SQLite directory database named by the server configuration.
#[cfg(feature = "sqlite")]
fn create_sqlite_backend(path: &str, config: &ServerConfig) -> anyhow::Result<SqliteBackend> {
    info!(database = %path, "Initializing SQLite backend");

    if path != ":memory:" && !std::path::Path::new(path).exists() && !config.init_schema {
        warn!(
            database = %path,
            "Database file does not exist; listings will fail until it is populated"
        );
    }

    let backend_config = SqliteBackendConfig {
        max_connections: config.max_connections,
        ..Default::default()
    };
    let backend = SqliteBackend::with_config(path, backend_config)?;

    if config.init_schema {
        backend.init_schema()?;
    }

    Ok(backend)
}

/// Starts the Axum HTTP server.
async fn serve(app: axum::Router, config: &ServerConfig) -> anyhow::Result<()> {
    let addr = config.socket_addr();
    info!(address = %addr, "Server listening");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutting down");
}

/// Loads variables from an env file into the process environment.
///
/// Variables already set in the environment are left untouched. Returns the
/// path when the file was read.
fn load_env_file(path: &Path) -> Option<PathBuf> {
    dotenvy::from_path(path).ok().map(|_| path.to_path_buf())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env_file = load_env_file(Path::new(".env"));
    let config = ServerConfig::parse();
    init_logging(&config.log_level);

    if let Some(path) = env_file {
        info!(path = %path.display(), "Loaded environment file");
    }

    if let Err(errors) = config.validate() {
        for error in &errors {
            eprintln!("Configuration error: {}", error);
        }
        std::process::exit(1);
    }

    let target = config
        .storage_target()
        .map_err(|e| anyhow::anyhow!("Invalid database configuration: {}", e))?;

    info!(
        port = config.port,
        host = %config.host,
        storage = %target,
        "Starting Vigil directory server"
    );

    match target {
        StorageTarget::Sqlite(path) => start_sqlite(&path, config).await,
        StorageTarget::Postgres(url) => start_postgres(&url, config).await,
    }
}

/// Starts the server with the SQLite backend.
#[cfg(feature = "sqlite")]
async fn start_sqlite(path: &str, config: ServerConfig) -> anyhow::Result<()> {
    let backend = create_sqlite_backend(path, &config)?;
    let app = create_app_with_config(backend, config.clone());
    serve(app, &config).await
}

/// Fallback when sqlite feature is not enabled.
#[cfg(not(feature = "sqlite"))]
async fn start_sqlite(_path: &str, _config: ServerConfig) -> anyhow::Result<()> {
    anyhow::bail!(
        "The sqlite backend requires the 'sqlite' feature. \
         Build with: cargo build -p vigil-server --features sqlite"
    )
}

/// Starts the server with the PostgreSQL backend.
#[cfg(feature = "postgres")]
async fn start_postgres(url: &str, config: ServerConfig) -> anyhow::Result<()> {
    use vigil_persistence::backends::postgres::PostgresBackend;

    info!("Initializing PostgreSQL backend from connection string");
    let mut pg_config = PostgresBackend::parse_connection_string(url)?;
    pg_config.max_connections = usize::try_from(config.max_connections)?;
    let backend = PostgresBackend::new(pg_config).await?;

    if config.init_schema {
        backend.init_schema().await?;
    }

    let app = create_app_with_config(backend, config.clone());
    serve(app, &config).await
}

/// Fallback when postgres feature is not enabled.
#[cfg(not(feature = "postgres"))]
async fn start_postgres(_url: &str, _config: ServerConfig) -> anyhow::Result<()> {
    anyhow::bail!(
        "The postgres backend requires the 'postgres' feature. \
         Build with: cargo build -p vigil-server --features postgres"
    )
}

#[cfg(not(any(feature = "sqlite", feature = "postgres")))]
compile_error!("At least one database backend feature must be enabled");
