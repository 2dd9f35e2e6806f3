//! Server configuration for the directory API.
//!
//! Configuration is read once at startup from command line arguments, with
//! environment variable fallbacks, and handed to
//! [`create_app_with_config`](crate::create_app_with_config). The `vigil`
//! binary loads a `.env` file from the working directory first; variables
//! already set in the environment win.
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `VIGIL_PORT` | 8000 | Server port |
//! | `VIGIL_HOST` | 127.0.0.1 | Host to bind |
//! | `VIGIL_LOG_LEVEL` | info | Log level |
//! | `VIGIL_REQUEST_TIMEOUT` | 30 | Request timeout (seconds) |
//! | `VIGIL_ENABLE_CORS` | true | Enable CORS |
//! | `VIGIL_CORS_ORIGINS` | http://localhost:3000,http://127.0.0.1:3000 | Allowed origins |
//! | `VIGIL_CORS_METHODS` | * | Allowed methods |
//! | `VIGIL_CORS_HEADERS` | * | Allowed headers |
//! | `VIGIL_CORS_ALLOW_CREDENTIALS` | true | Allow credentialed requests |
//! | `DATABASE_URL` | sqlite:///./funeral_homes_unified.db | Directory database |
//! | `VIGIL_MAX_CONNECTIONS` | 10 | Connection pool size |
//! | `VIGIL_INIT_SCHEMA` | false | Create the directory table if missing |
//!
//! # Example
//!
//! ```rust
//! use vigil_rest::ServerConfig;
//! use vigil_rest::config::StorageTarget;
//!
//! let config = ServerConfig {
//!     port: 3000,
//!     database_url: "sqlite:///./directory.db".to_string(),
//!     ..Default::default()
//! };
//!
//! assert_eq!(config.socket_addr(), "127.0.0.1:3000");
//! assert_eq!(
//!     config.storage_target().unwrap(),
//!     StorageTarget::Sqlite("./directory.db".to_string())
//! );
//! ```

use std::fmt;

use clap::Parser;

/// Default directory database, relative to the working directory.
pub const DEFAULT_DATABASE_URL: &str = "sqlite:///./funeral_homes_unified.db";

/// Default browser origins allowed to call the API.
pub const DEFAULT_CORS_ORIGINS: &str = "http://localhost:3000,http://127.0.0.1:3000";

/// Server configuration for the directory API.
#[derive(Debug, Clone, Parser)]
#[command(name = "vigil")]
#[command(about = "Funeral home directory listing API")]
pub struct ServerConfig {
    /// Port to listen on.
    #[arg(short, long, env = "VIGIL_PORT", default_value = "8000")]
    pub port: u16,

    /// Host address to bind to.
    #[arg(long, env = "VIGIL_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long, env = "VIGIL_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Request timeout in seconds.
    #[arg(long, env = "VIGIL_REQUEST_TIMEOUT", default_value = "30")]
    pub request_timeout: u64,

    /// Enable CORS.
    #[arg(long, env = "VIGIL_ENABLE_CORS", default_value = "true")]
    pub enable_cors: bool,

    /// Allowed CORS origins (comma-separated, or * for all).
    #[arg(long, env = "VIGIL_CORS_ORIGINS", default_value = DEFAULT_CORS_ORIGINS)]
    pub cors_origins: String,

    /// Allowed CORS methods (comma-separated, or * for all).
    #[arg(long, env = "VIGIL_CORS_METHODS", default_value = "*")]
    pub cors_methods: String,

    /// Allowed CORS headers (comma-separated, or * for all).
    #[arg(long, env = "VIGIL_CORS_HEADERS", default_value = "*")]
    pub cors_headers: String,

    /// Allow credentialed CORS requests. Wildcard origins, methods and
    /// headers are mirrored from the request when this is on.
    #[arg(long, env = "VIGIL_CORS_ALLOW_CREDENTIALS", default_value = "true")]
    pub cors_allow_credentials: bool,

    /// Directory database (`sqlite:///path`, a bare path, `:memory:`, or `postgres://...`).
    #[arg(long, env = "DATABASE_URL", default_value = DEFAULT_DATABASE_URL)]
    pub database_url: String,

    /// Maximum number of pooled database connections.
    #[arg(long, env = "VIGIL_MAX_CONNECTIONS", default_value = "10")]
    pub max_connections: u32,

    /// Create the directory table at startup if it does not exist.
    #[arg(long, env = "VIGIL_INIT_SCHEMA", default_value = "false")]
    pub init_schema: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8000,
            host: "127.0.0.1".to_string(),
            log_level: "info".to_string(),
            request_timeout: 30,
            enable_cors: true,
            cors_origins: DEFAULT_CORS_ORIGINS.to_string(),
            cors_methods: "*".to_string(),
            cors_headers: "*".to_string(),
            cors_allow_credentials: true,
            database_url: DEFAULT_DATABASE_URL.to_string(),
            max_connections: 10,
            init_schema: false,
        }
    }
}

/// Where the directory lives, parsed from the database URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageTarget {
    /// A SQLite database file, or `:memory:`.
    Sqlite(String),
    /// A PostgreSQL connection URL.
    Postgres(String),
}

impl StorageTarget {
    /// Parses a database URL.
    ///
    /// `sqlite:///relative.db` and `sqlite:////absolute.db` follow the usual
    /// three-slash convention; anything without a scheme is a SQLite path.
    pub fn parse(url: &str) -> Result<Self, String> {
        let url = url.trim();
        if url.is_empty() {
            return Err("Database URL cannot be empty".to_string());
        }

        if url.starts_with("postgres://") || url.starts_with("postgresql://") {
            return Ok(StorageTarget::Postgres(url.to_string()));
        }

        if let Some(rest) = url.strip_prefix("sqlite:") {
            let path = rest
                .strip_prefix("///")
                .or_else(|| rest.strip_prefix("//"))
                .unwrap_or(rest);
            if path.is_empty() {
                return Err(format!("Database URL has no path: {}", url));
            }
            return Ok(StorageTarget::Sqlite(path.to_string()));
        }

        if let Some((scheme, _)) = url.split_once("://") {
            return Err(format!("Unsupported database scheme: {}", scheme));
        }

        Ok(StorageTarget::Sqlite(url.to_string()))
    }

    /// Returns the backend name this target selects.
    pub fn backend_name(&self) -> &'static str {
        match self {
            StorageTarget::Sqlite(_) => "sqlite",
            StorageTarget::Postgres(_) => "postgres",
        }
    }
}

impl fmt::Display for StorageTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageTarget::Sqlite(path) => write!(f, "sqlite:{}", path),
            // Credentials stay out of logs.
            StorageTarget::Postgres(url) => match url.rsplit_once('@') {
                Some((prefix, location)) => {
                    let scheme = prefix.split("://").next().unwrap_or("postgres");
                    write!(f, "{}://***@{}", scheme, location)
                }
                None => f.write_str(url),
            },
        }
    }
}

impl ServerConfig {
    /// Returns the socket address to bind to.
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Parses the configured database URL.
    pub fn storage_target(&self) -> Result<StorageTarget, String> {
        StorageTarget::parse(&self.database_url)
    }

    /// Validates the configuration and returns every problem found.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.port == 0 {
            errors.push("Port cannot be 0".to_string());
        }

        if self.request_timeout == 0 {
            errors.push("Request timeout cannot be 0".to_string());
        }

        if self.max_connections == 0 {
            errors.push("Max connections cannot be 0".to_string());
        }

        if let Err(e) = self.storage_target() {
            errors.push(e);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Creates a configuration suitable for testing.
    ///
    /// Uses an ephemeral port, an in-memory database and no CORS.
    pub fn for_testing() -> Self {
        Self {
            port: 0, // Let OS assign port
            host: "127.0.0.1".to_string(),
            log_level: "debug".to_string(),
            request_timeout: 5, // Shorter timeout for tests
            enable_cors: false,
            cors_origins: "*".to_string(),
            cors_methods: "*".to_string(),
            cors_headers: "*".to_string(),
            cors_allow_credentials: false,
            database_url: ":memory:".to_string(),
            max_connections: 1,
            init_schema: true,
        }
    }
}
