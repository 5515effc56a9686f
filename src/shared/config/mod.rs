//! Application configuration module
//!
//! Connection settings the client needs to talk to the todo API: where the
//! server lives and which identity to present in `X-User-Id`.

use thiserror::Error;

/// Identity used when nothing else is configured
pub const DEFAULT_USER_ID: &str = "demo";

/// Request header carrying the caller's identity
pub const USER_ID_HEADER: &str = "x-user-id";

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Server base URL, without a trailing slash
    pub server_url: String,
    /// Identity sent with every request
    pub user_id: String,
}

impl AppConfig {
    /// Create a new AppConfigBuilder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = reqwest::Url::parse(&self.server_url)
            .map_err(|_| ConfigError::InvalidUrl(self.server_url.clone()))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidUrl(self.server_url.clone()));
        }
        if self.user_id.trim().is_empty() {
            return Err(ConfigError::MissingValue("user_id"));
        }
        Ok(())
    }
}

/// Builder for AppConfig
#[derive(Debug, Default)]
pub struct AppConfigBuilder {
    server_url: Option<String>,
    user_id: Option<String>,
}

impl AppConfigBuilder {
    /// Set the server URL
    pub fn server_url(mut self, url: impl Into<String>) -> Self {
        self.server_url = Some(url.into());
        self
    }

    /// Set the identity sent as `X-User-Id`
    pub fn user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    /// Build and validate the configuration
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        let server_url = self
            .server_url
            .ok_or(ConfigError::MissingValue("server_url"))?
            .trim_end_matches('/')
            .to_string();
        let config = AppConfig {
            server_url,
            user_id: self.user_id.unwrap_or_else(|| DEFAULT_USER_ID.to_string()),
        };
        config.validate()?;
        Ok(config)
    }
}

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
    #[error("missing value: {0}")]
    MissingValue(&'static str),
}
