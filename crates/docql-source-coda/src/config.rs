//! Coda client configuration

use serde::Deserialize;

/// Environment variable holding the API token
pub const TOKEN_ENV: &str = "CODA_API_TOKEN";

/// Environment variable overriding the API base URL
pub const API_URL_ENV: &str = "CODA_API_URL";

/// Coda API client configuration
///
/// # Example
///
/// ```toml
/// api_url = "https://coda.io/apis/v1"   # optional
/// token = "xxxxxxxx-xxxx-xxxx"
/// page_size = 500                       # optional, rows per page
/// timeout_secs = 30                     # optional, per request
/// consistent_reads = true               # optional, read the latest doc version
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CodaConfig {
    /// API base URL (default: https://coda.io/apis/v1)
    pub api_url: String,

    /// API token, sent as a bearer token
    pub token: Option<String>,

    /// Number of items requested per page (default: 500)
    pub page_size: u32,

    /// Request timeout in seconds (default: 30)
    pub timeout_secs: u64,

    /// When true, ask the API to serve the latest version of the doc rather
    /// than a possibly stale snapshot (default: true)
    pub consistent_reads: bool,
}

impl Default for CodaConfig {
    fn default() -> Self {
        Self {
            api_url: "https://coda.io/apis/v1".to_string(),
            token: None,
            page_size: 500,
            timeout_secs: 30,
            consistent_reads: true,
        }
    }
}

impl CodaConfig {
    /// Default configuration with the token and API URL taken from
    /// `CODA_API_TOKEN` and `CODA_API_URL` when they are set.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(token) = std::env::var(TOKEN_ENV) {
            config.token = Some(token);
        }
        if let Ok(api_url) = std::env::var(API_URL_ENV) {
            config.api_url = api_url;
        }
        config
    }

    /// Set the API token
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set the API base URL
    pub fn api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }
}
