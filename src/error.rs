//! Crate-wide error type.

use thiserror::Error;

/// Problems with the configuration file or the values it resolves to.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("no API key: set {env} or provider.api_key_file")]
    MissingApiKey { env: &'static str },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Non-success HTTP status from the odds provider. `body` is truncated.
    #[error("odds provider returned {status}: {body}")]
    Provider { status: u16, body: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid provider URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Pool checkout or database open failure.
    #[error("connection error: {0}")]
    Connection(String),

    #[error("database error: {0}")]
    Database(String),

    #[error("parse error: {0}")]
    Parse(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        Error::Io(std::io::Error::other(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_errors_display_field_names() {
        let err: Error = ConfigError::InvalidValue {
            field: "limit",
            reason: "must be greater than 0".into(),
        }
        .into();
        assert_eq!(
            err.to_string(),
            "invalid value for limit: must be greater than 0"
        );
    }

    #[test]
    fn missing_api_key_names_the_variable() {
        let err: Error = ConfigError::MissingApiKey {
            env: "ODDS_API_KEY",
        }
        .into();
        assert_eq!(
            err.to_string(),
            "no API key: set ODDS_API_KEY or provider.api_key_file"
        );
    }

    #[test]
    fn provider_error_includes_status() {
        let err = Error::Provider {
            status: 401,
            body: "bad key".into(),
        };
        assert_eq!(err.to_string(), "odds provider returned 401: bad key");
    }
}
