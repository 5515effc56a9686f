/**
 * Server Configuration
 *
 * Settings are read from environment variables (a `.env` file is loaded
 * by the binary first), with defaults suitable for local development.
 *
 * | Variable               | Default           |
 * |------------------------|-------------------|
 * | `SERVER_PORT`          | `3000`            |
 * | `DATABASE_URL`         | `sqlite::memory:` |
 * | `CORS_ALLOWED_ORIGINS` | any origin        |
 *
 * # Error Handling
 *
 * Unparseable values fall back to the default with a warning; only a
 * store that cannot be opened stops startup.
 */

use crate::backend::store::{SqliteItemStore, StoreError};

/// Default listening port
pub const DEFAULT_PORT: u16 = 3000;

/// Store used when `DATABASE_URL` is not set; nothing survives a restart
pub const IN_MEMORY_DATABASE_URL: &str = "sqlite::memory:";

/// Server settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// TCP port to listen on (all interfaces)
    pub port: u16,
    /// sqlx SQLite connection URL
    pub database_url: String,
    /// Allowed CORS origins; empty means any origin
    pub cors_allowed_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            database_url: IN_MEMORY_DATABASE_URL.to_string(),
            cors_allowed_origins: Vec::new(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let port = match lookup("SERVER_PORT") {
            Some(raw) => raw.trim().parse::<u16>().unwrap_or_else(|_| {
                tracing::warn!("Invalid SERVER_PORT '{}', using {}", raw, DEFAULT_PORT);
                DEFAULT_PORT
            }),
            None => defaults.port,
        };

        let database_url = match lookup("DATABASE_URL").filter(|url| !url.trim().is_empty()) {
            Some(url) => url,
            None => {
                tracing::warn!("DATABASE_URL not set. Items are kept in memory and lost on restart.");
                defaults.database_url
            }
        };

        let cors_allowed_origins = lookup("CORS_ALLOWED_ORIGINS")
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|origin| !origin.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        Self {
            port,
            database_url,
            cors_allowed_origins,
        }
    }
}

/// Open the item store described by the configuration
pub async fn load_store(config: &ServerConfig) -> Result<SqliteItemStore, StoreError> {
    tracing::info!("Connecting to item store...");

    let store = SqliteItemStore::connect(&config.database_url)
        .await
        .inspect_err(|e| tracing::error!("Error initializing item store: {}", e))?;

    tracing::info!("Item store connection pool created successfully");
    Ok(store)
}
