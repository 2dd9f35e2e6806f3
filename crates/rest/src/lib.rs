//! # vigil-rest - Funeral Home Directory API
//!
//! HTTP layer for the Vigil directory: a read-only, filterable, sortable,
//! paginated listing of funeral homes and a matching count endpoint for
//! pagination controls.
//!
//! ## Backend Support
//!
//! Storage backends are configured through feature flags:
//!
//! - `sqlite` - SQLite backend (default)
//! - `postgres` - PostgreSQL backend
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use vigil_rest::{create_app, ServerConfig};
//! use vigil_persistence::backends::sqlite::SqliteBackend;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let backend = SqliteBackend::open("funeral_homes_unified.db")?;
//!
//!     let app = create_app(backend);
//!
//!     let listener = tokio::net::TcpListener::bind("127.0.0.1:8000").await?;
//!     axum::serve(listener, app).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## API Endpoints
//!
//! | Endpoint | Description |
//! |----------|-------------|
//! | `GET /funeral-homes` | Listing (`name`, `city`, `region`, `postal_code`, `country`, `phone`, `limit`, `offset`, `sort_by`, `sort_dir`) |
//! | `GET /funeral-homes/count` | `{"total": n}` for the same filters |
//! | `GET /health` | `{"status": "ok"}` |
//! | `GET /_readiness` | Storage health check |
//!
//! ## Architecture
//!
//! - [`error`] - Error types and their HTTP mapping
//! - [`config`] - Server configuration
//! - [`state`] - Application state (storage, configuration)
//! - [`extractors`] - Query string validation
//! - [`handlers`] - HTTP request handlers
//! - [`routing`] - Route configuration

// Enforce documentation
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod routing;
pub mod state;

// Re-export commonly used types
pub use config::{ServerConfig, StorageTarget};
pub use error::{RestError, RestResult};
pub use state::AppState;

use std::sync::Arc;

use axum::Router;
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowHeaders, AllowMethods, AllowOrigin, Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::info;
use vigil_persistence::core::RecordSource;

/// Creates the Axum application with default configuration.
///
/// For more control, use [`create_app_with_config`].
pub fn create_app<S>(storage: S) -> Router
where
    S: RecordSource + 'static,
{
    create_app_with_config(storage, ServerConfig::default())
}

/// Creates the Axum application with custom configuration.
///
/// # Example
///
/// ```rust,ignore
/// use vigil_rest::{create_app_with_config, ServerConfig};
/// use vigil_persistence::backends::sqlite::SqliteBackend;
///
/// let backend = SqliteBackend::in_memory()?;
/// let config = ServerConfig {
///     port: 3000,
///     enable_cors: false,
///     ..Default::default()
/// };
/// let app = create_app_with_config(backend, config);
/// ```
pub fn create_app_with_config<S>(storage: S, config: ServerConfig) -> Router
where
    S: RecordSource + 'static,
{
    create_app_with_shared(Arc::new(storage), config)
}

/// Creates the Axum application over a record source the caller keeps a
/// handle to.
pub fn create_app_with_shared<S>(storage: Arc<S>, config: ServerConfig) -> Router
where
    S: RecordSource + 'static,
{
    info!(
        "Creating directory API server with backend: {}",
        storage.backend_name()
    );

    // Create application state
    let state = AppState::new(storage);

    // Build the router with all directory routes
    let router = routing::create_routes(state);

    // Build middleware stack
    let service_builder = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            axum::http::StatusCode::REQUEST_TIMEOUT,
            std::time::Duration::from_secs(config.request_timeout),
        ));

    // Add CORS if enabled
    let router = if config.enable_cors {
        let cors = build_cors_layer(&config);
        router.layer(cors)
    } else {
        router
    };

    // Apply remaining middleware
    router.layer(service_builder)
}

/// Builds the CORS layer based on configuration.
///
/// Credentialed CORS cannot be combined with `*`, so when
/// `cors_allow_credentials` is set a wildcard origin, method or header list
/// echoes the request instead.
pub fn build_cors_layer(config: &ServerConfig) -> CorsLayer {
    let credentials = config.cors_allow_credentials;
    let mut cors = CorsLayer::new().allow_credentials(credentials);

    // Configure origins
    if config.cors_origins == "*" {
        cors = if credentials {
            cors.allow_origin(AllowOrigin::mirror_request())
        } else {
            cors.allow_origin(Any)
        };
    } else {
        let origins: Vec<_> = config
            .cors_origins
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors = cors.allow_origin(origins);
    }

    // Configure methods
    if config.cors_methods == "*" {
        cors = if credentials {
            cors.allow_methods(AllowMethods::mirror_request())
        } else {
            cors.allow_methods(Any)
        };
    } else {
        let methods: Vec<_> = config
            .cors_methods
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors = cors.allow_methods(methods);
    }

    // Configure headers
    if config.cors_headers == "*" {
        cors = if credentials {
            cors.allow_headers(AllowHeaders::mirror_request())
        } else {
            cors.allow_headers(Any)
        };
    } else {
        let headers: Vec<_> = config
            .cors_headers
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors = cors.allow_headers(headers);
    }

    cors
}

/// Initializes the tracing subscriber for logging.
///
/// This should be called once at application startup. `RUST_LOG` takes
/// precedence over `level` when set.
///
/// # Arguments
///
/// * `level` - The log level (error, warn, info, debug, trace)
pub fn init_logging(level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "vigil={level},vigil_rest={level},vigil_persistence={level},tower_http=debug"
        ))
    });

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}
