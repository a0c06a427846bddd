//! Remote backend configuration loaded from environment variables.
//!
//! All settings have defaults pointing at a local development stack so the
//! client can start with zero configuration.

/// Connection settings for the hosted REST backend.
#[derive(Debug, Clone)]
pub struct RemoteConfig {
    /// Base URL of the backend, without a trailing slash.
    /// Env: `CARDLINK_API_URL`
    /// Default: `http://localhost:54321`
    pub base_url: String,

    /// Project API key, sent as the `apikey` header and as the bearer token.
    /// Env: `CARDLINK_API_KEY`
    /// Default: empty (development only).
    pub api_key: String,

    /// Per-request timeout in seconds.
    /// Env: `CARDLINK_HTTP_TIMEOUT_SECS`
    /// Default: `10`
    pub timeout_secs: u64,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:54321".to_string(),
            api_key: String::new(),
            timeout_secs: 10,
        }
    }
}

impl RemoteConfig {
    /// Load configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(url) = std::env::var("CARDLINK_API_URL") {
            config.base_url = url.trim_end_matches('/').to_string();
        }

        if let Ok(key) = std::env::var("CARDLINK_API_KEY") {
            config.api_key = key;
        }

        if let Ok(val) = std::env::var("CARDLINK_HTTP_TIMEOUT_SECS") {
            if let Ok(n) = val.parse::<u64>() {
                config.timeout_secs = n;
            } else {
                tracing::warn!(
                    value = %val,
                    "Invalid CARDLINK_HTTP_TIMEOUT_SECS, using default"
                );
            }
        }

        config
    }

    /// REST endpoint of the `cards` table.
    pub(crate) fn cards_endpoint(&self) -> String {
        format!("{}/rest/v1/cards", self.base_url)
    }
}
