//! The Odds API client configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Environment variable holding the provider API key.
pub const API_KEY_ENV: &str = "ODDS_API_KEY";

/// HTTP client settings for provider calls.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OddsApiHttpConfig {
    /// Request timeout in milliseconds.
    #[serde(default = "default_http_timeout_ms")]
    pub timeout_ms: u64,
    /// Connect timeout in milliseconds.
    #[serde(default = "default_http_connect_timeout_ms")]
    pub connect_timeout_ms: u64,
    /// Maximum number of attempts for transient failures.
    #[serde(default = "default_http_retry_max_attempts")]
    pub retry_max_attempts: u32,
    /// Backoff between retries in milliseconds.
    #[serde(default = "default_http_retry_backoff_ms")]
    pub retry_backoff_ms: u64,
}

const fn default_http_timeout_ms() -> u64 {
    10_000
}

const fn default_http_connect_timeout_ms() -> u64 {
    3000
}

const fn default_http_retry_max_attempts() -> u32 {
    3
}

const fn default_http_retry_backoff_ms() -> u64 {
    500
}

impl Default for OddsApiHttpConfig {
    fn default() -> Self {
        Self {
            timeout_ms: default_http_timeout_ms(),
            connect_timeout_ms: default_http_connect_timeout_ms(),
            retry_max_attempts: default_http_retry_max_attempts(),
            retry_backoff_ms: default_http_retry_backoff_ms(),
        }
    }
}

/// Provider connection settings.
///
/// The API key is never read from the TOML body. It comes from the
/// `ODDS_API_KEY` environment variable or, failing that, from the file named
/// by `api_key_file`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OddsApiConfig {
    /// Base URL including the API version segment.
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Bookmaker regions to request (comma separated, e.g. `us,us2`).
    #[serde(default = "default_regions")]
    pub regions: String,

    /// File containing the API key.
    #[serde(default)]
    pub api_key_file: Option<PathBuf>,

    /// Maximum number of event-odds requests in flight at once.
    #[serde(default = "default_max_concurrent_requests")]
    pub max_concurrent_requests: usize,

    #[serde(default)]
    pub http: OddsApiHttpConfig,

    /// Resolved API key. Populated at load time.
    #[serde(skip)]
    pub api_key: Option<String>,
}

fn default_api_url() -> String {
    "https://api.the-odds-api.com/v4".into()
}

fn default_regions() -> String {
    "us".into()
}

const fn default_max_concurrent_requests() -> usize {
    4
}

impl Default for OddsApiConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            regions: default_regions(),
            api_key_file: None,
            max_concurrent_requests: default_max_concurrent_requests(),
            http: OddsApiHttpConfig::default(),
            api_key: None,
        }
    }
}
