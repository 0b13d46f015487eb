//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all application settings.
//! Configuration is loaded from a TOML file. The provider API key is never
//! read from the file body: it comes from `ODDS_API_KEY` or from the file
//! named by `provider.api_key_file`.
//!
//! # Example
//!
//! ```no_run
//! use linescout::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use std::fs;
use std::net::SocketAddr;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::logging::LoggingConfig;
use super::server::ServerConfig;
use super::sport::{default_sports, SportConfig};
use crate::adapter::outbound::odds_api::settings::{OddsApiConfig, API_KEY_ENV};
use crate::domain::Criteria;
use crate::error::{ConfigError, Result};

/// Main application configuration.
///
/// Every section is optional; an empty file yields a usable configuration
/// that scans the NBA with the default selection criteria.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Odds provider connection settings.
    #[serde(default)]
    pub provider: OddsApiConfig,

    /// Sports to scan, in scan order.
    #[serde(default = "default_sports")]
    pub sports: Vec<SportConfig>,

    /// Offer selection criteria.
    #[serde(default)]
    pub selection: Criteria,

    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub server: ServerConfig,

    /// Path to SQLite database file.
    ///
    /// Defaults to `~/.linescout/linescout.db`.
    #[serde(default = "default_database_path")]
    pub database: String,
}

fn default_database_path() -> String {
    dirs::home_dir()
        .map(|home| home.join(".linescout").join("linescout.db"))
        .map(|path| path.to_string_lossy().into_owned())
        .unwrap_or_else(|| "linescout.db".to_string())
}

impl Default for Config {
    fn default() -> Self {
        Self {
            provider: OddsApiConfig::default(),
            sports: default_sports(),
            selection: Criteria::default(),
            logging: LoggingConfig::default(),
            server: ServerConfig::default(),
            database: default_database_path(),
        }
    }
}

fn read_api_key_file(path: &Path) -> Result<String> {
    let contents = fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
    let key = contents.trim().to_string();
    if key.is_empty() {
        return Err(ConfigError::MissingField {
            field: "api_key_file",
        }
        .into());
    }
    Ok(key)
}

impl Config {
    /// Parse configuration from TOML content, taking the API key from
    /// `ODDS_API_KEY` when it is set.
    ///
    /// # Errors
    ///
    /// See [`Config::parse_with_env_key`].
    #[allow(clippy::result_large_err)]
    pub fn parse_toml(content: &str) -> Result<Self> {
        Self::parse_with_env_key(content, std::env::var(API_KEY_ENV).ok().as_deref())
    }

    /// Parse configuration from TOML content.
    ///
    /// Fills omitted market lists from the sport presets and resolves the
    /// provider API key: a non-blank `env_key` wins, otherwise
    /// `provider.api_key_file` is read.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The TOML content is malformed
    /// - The API key file is configured but unreadable or empty
    /// - Validation fails
    #[allow(clippy::result_large_err)]
    pub fn parse_with_env_key(content: &str, env_key: Option<&str>) -> Result<Self> {
        let mut config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;

        for sport in &mut config.sports {
            sport.resolve_markets();
        }

        config.provider.api_key = env_key
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .map(str::to_string);
        if config.provider.api_key.is_none() {
            if let Some(ref path) = config.provider.api_key_file {
                config.provider.api_key = Some(read_api_key_file(path)?);
            }
        }

        config.validate()?;

        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The TOML content is malformed
    /// - Validation fails
    #[allow(clippy::result_large_err)]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// [`Config::load`] with an explicit environment key instead of
    /// `ODDS_API_KEY`.
    ///
    /// # Errors
    ///
    /// Same as [`Config::load`].
    #[allow(clippy::result_large_err)]
    pub fn load_with_env_key<P: AsRef<Path>>(path: P, env_key: Option<&str>) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_with_env_key(&content, env_key)
    }

    /// Validate configuration values.
    ///
    /// Also called after CLI overrides are applied.
    #[allow(clippy::result_large_err)]
    pub fn validate(&self) -> Result<()> {
        if self.provider.api_url.trim().is_empty() {
            return Err(ConfigError::MissingField { field: "api_url" }.into());
        }
        if let Err(e) = url::Url::parse(&self.provider.api_url) {
            return Err(ConfigError::InvalidValue {
                field: "api_url",
                reason: e.to_string(),
            }
            .into());
        }
        if self.provider.regions.trim().is_empty() {
            return Err(ConfigError::MissingField { field: "regions" }.into());
        }
        if self.provider.max_concurrent_requests == 0 {
            return Err(ConfigError::InvalidValue {
                field: "max_concurrent_requests",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if self.provider.http.retry_max_attempts == 0 {
            return Err(ConfigError::InvalidValue {
                field: "retry_max_attempts",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }

        if self.sports.is_empty() {
            return Err(ConfigError::MissingField { field: "sports" }.into());
        }
        for sport in &self.sports {
            if sport.key.as_str().trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: "sports.key",
                    reason: "must not be empty".to_string(),
                }
                .into());
            }
            if sport.markets.is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: "sports.markets",
                    reason: format!("no markets configured for {} and no preset exists", sport.key),
                }
                .into());
            }
            if sport.markets.iter().any(|m| m.trim().is_empty()) {
                return Err(ConfigError::InvalidValue {
                    field: "sports.markets",
                    reason: format!("empty market key for {}", sport.key),
                }
                .into());
            }
        }

        if self.selection.bookmaker.as_str().trim().is_empty() {
            return Err(ConfigError::MissingField { field: "bookmaker" }.into());
        }
        if self.selection.limit == 0 {
            return Err(ConfigError::InvalidValue {
                field: "limit",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }

        if let Err(e) = self.server.bind.parse::<SocketAddr>() {
            return Err(ConfigError::InvalidValue {
                field: "bind",
                reason: e.to_string(),
            }
            .into());
        }

        Ok(())
    }

    /// Initialize logging based on configuration.
    pub fn init_logging(&self) {
        self.logging.init();
    }

    /// Render the effective configuration as TOML. The API key is omitted.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| crate::error::Error::Parse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::config::sport::{NBA, NFL};

    #[test]
    fn empty_config_uses_defaults() {
        let config = Config::parse_toml("").unwrap();
        assert_eq!(config.sports.len(), 1);
        assert_eq!(config.sports[0].key.as_str(), NBA);
        assert!(config.sports[0].markets.contains(&"player_points".to_string()));
        assert_eq!(config.selection, Criteria::default());
        assert_eq!(config.server.bind, "127.0.0.1:3333");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn preset_sport_without_markets_is_resolved() {
        let config = Config::parse_toml("[[sports]]\nkey = \"americanfootball_nfl\"\n").unwrap();
        assert_eq!(config.sports[0].key.as_str(), NFL);
        assert!(config.sports[0].markets.contains(&"player_anytime_td".to_string()));
    }

    #[test]
    fn unknown_sport_without_markets_is_rejected() {
        let result = Config::parse_toml("[[sports]]\nkey = \"tennis_atp\"\n");
        assert!(matches!(
            result,
            Err(crate::error::Error::Config(ConfigError::InvalidValue {
                field: "sports.markets",
                ..
            }))
        ));
    }

    #[test]
    fn zero_limit_is_rejected() {
        let result = Config::parse_toml("[selection]\nlimit = 0\n");
        assert!(matches!(
            result,
            Err(crate::error::Error::Config(ConfigError::InvalidValue {
                field: "limit",
                ..
            }))
        ));
    }

    #[test]
    fn bad_api_url_is_rejected() {
        let result = Config::parse_toml("[provider]\napi_url = \"not a url\"\n");
        assert!(matches!(
            result,
            Err(crate::error::Error::Config(ConfigError::InvalidValue {
                field: "api_url",
                ..
            }))
        ));
    }

    #[test]
    fn bad_bind_is_rejected() {
        let result = Config::parse_toml("[server]\nbind = \"localhost\"\n");
        assert!(matches!(
            result,
            Err(crate::error::Error::Config(ConfigError::InvalidValue {
                field: "bind",
                ..
            }))
        ));
    }

    #[test]
    fn rendered_config_parses_back() {
        let config = Config::parse_toml("[selection]\nmax_price = 150\n").unwrap();
        let rendered = config.to_toml().unwrap();
        let reparsed = Config::parse_toml(&rendered).unwrap();
        assert_eq!(reparsed.selection.max_price, 150);
        assert_eq!(reparsed.sports, config.sports);
    }
}
