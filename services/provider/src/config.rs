//! Centralized configuration for the catalog provider.
//!
//! All configuration is loaded from environment variables and validated
//! at startup.

use std::env;
use std::time::Duration;

use clock_auth::TokenConfig;
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

/// Catalog provider configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Token filter settings
    pub auth: TokenConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8085,
            auth: TokenConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from the environment.
    ///
    /// Recognized variables: `PROVIDER_HOST`, `PROVIDER_PORT` (default
    /// 8085), `AUTH_TOLERANCE_SECS` (default 3600).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when a set variable fails to
    /// parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Ok(host) = env::var("PROVIDER_HOST") {
            config.host = host;
        }
        if let Ok(port) = env::var("PROVIDER_PORT") {
            config.port = port.parse().map_err(|_| ConfigError::Invalid {
                name: "PROVIDER_PORT",
                value: port.clone(),
            })?;
        }
        if let Ok(secs) = env::var("AUTH_TOLERANCE_SECS") {
            let secs_parsed: u64 = secs.parse().map_err(|_| ConfigError::Invalid {
                name: "AUTH_TOLERANCE_SECS",
                value: secs.clone(),
            })?;
            config.auth = config.auth.with_tolerance(Duration::from_secs(secs_parsed));
        }

        Ok(config)
    }
}
