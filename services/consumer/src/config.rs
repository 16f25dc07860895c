//! Consumer configuration.

use std::env;

use thiserror::Error;

/// Configuration load failures.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// An environment variable held a value that does not parse.
    #[error("Invalid {name}: {value}")]
    Invalid {
        /// Variable name
        name: &'static str,
        /// Offending value
        value: String,
    },
}

/// Catalog consumer configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Provider base URL, no trailing slash
    pub base_url: String,
}

impl Config {
    /// Point the consumer at a specific provider base URL.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Load configuration from the environment.
    ///
    /// Recognized variables: `PROVIDER_HOST` (default `localhost`) and
    /// `PROVIDER_PORT` (default 8085).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when `PROVIDER_PORT` fails to
    /// parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = env::var("PROVIDER_HOST").unwrap_or_else(|_| "localhost".to_string());
        let port: u16 = match env::var("PROVIDER_PORT") {
            Ok(port) => port.parse().map_err(|_| ConfigError::Invalid {
                name: "PROVIDER_PORT",
                value: port.clone(),
            })?,
            Err(_) => 8085,
        };

        Ok(Self::new(format!("http://{host}:{port}")))
    }
}
