use crate::shared::config::{AppConfig, AppConfigBuilder, ConfigError, DEFAULT_USER_ID};

/// Default server URL
const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:3000";

/// Client configuration wrapper.
#[derive(Debug, Clone)]
pub struct Config {
    app: AppConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }
}

impl Config {
    /// Create a configuration from `CLIENT_API_URL` and `CLIENT_USER_ID`
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_builder(builder: AppConfigBuilder) -> Result<Self, ConfigError> {
        Ok(Self { app: builder.build()? })
    }

    /// Build from an arbitrary variable source, falling back to defaults on
    /// invalid values
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let server_url = lookup("CLIENT_API_URL").unwrap_or_else(|| DEFAULT_SERVER_URL.to_string());
        let user_id = lookup("CLIENT_USER_ID").unwrap_or_else(|| DEFAULT_USER_ID.to_string());

        let configured = AppConfig::builder()
            .server_url(server_url)
            .user_id(user_id)
            .build();
        let app = match configured {
            Ok(app) => app,
            Err(e) => {
                tracing::warn!("Ignoring client configuration: {}", e);
                AppConfig {
                    server_url: DEFAULT_SERVER_URL.to_string(),
                    user_id: DEFAULT_USER_ID.to_string(),
                }
            }
        };
        Self { app }
    }

    /// Get the full URL for an API endpoint
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.server_url(), path)
    }

    pub fn server_url(&self) -> &str {
        &self.app.server_url
    }

    /// Identity sent as `X-User-Id`
    pub fn user_id(&self) -> &str {
        &self.app.user_id
    }
}
