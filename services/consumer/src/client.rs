//! HTTP client for the catalog provider.

use std::time::Duration;

use chrono::Utc;
use reqwest::header::AUTHORIZATION;
use reqwest::{Client, ClientBuilder, StatusCode};

use catalog::Product;

use crate::config::Config;
use crate::error::ClientError;

/// HTTP client configuration.
///
/// Provides sensible defaults with connection pooling and timeouts.
#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// Request timeout (default: 30s)
    pub timeout: Duration,
    /// Connection timeout (default: 10s)
    pub connect_timeout: Duration,
    /// User agent string
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            user_agent: "catalog-consumer/1.0".to_string(),
        }
    }
}

impl HttpConfig {
    /// Create a config with a custom request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Build a configured HTTP client.
///
/// # Errors
///
/// Returns an error if the client cannot be built (e.g., TLS
/// initialization fails).
pub fn build_http_client(config: &HttpConfig) -> Result<Client, reqwest::Error> {
    ClientBuilder::new()
        .timeout(config.timeout)
        .connect_timeout(config.connect_timeout)
        .user_agent(&config.user_agent)
        .build()
}

/// Client for the catalog provider's two query operations.
#[derive(Debug, Clone)]
pub struct ProductClient {
    http: Client,
    base_url: String,
}

impl ProductClient {
    /// Create a client against the configured provider.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] if the underlying HTTP client
    /// cannot be built.
    pub fn new(config: &Config) -> Result<Self, ClientError> {
        let http = build_http_client(&HttpConfig::default())?;
        Ok(Self {
            http,
            base_url: config.base_url.clone(),
        })
    }

    /// Fetch every product in the catalog.
    ///
    /// # Errors
    ///
    /// [`ClientError::Unauthorized`] on provider 401, otherwise
    /// transport or decode failures as [`ClientError::Http`].
    pub async fn get_all_products(&self) -> Result<Vec<Product>, ClientError> {
        let response = self
            .http
            .get(format!("{}/products", self.base_url))
            .header(AUTHORIZATION, Self::fresh_token())
            .send()
            .await?;

        Ok(Self::check(response)?.json().await?)
    }

    /// Fetch a single product by id.
    ///
    /// # Errors
    ///
    /// [`ClientError::NotFound`] on provider 404 and
    /// [`ClientError::Unauthorized`] on 401 — never collapsed into one
    /// another.
    pub async fn get_product(&self, id: &str) -> Result<Product, ClientError> {
        let response = self
            .http
            .get(format!("{}/product/{id}", self.base_url))
            .header(AUTHORIZATION, Self::fresh_token())
            .send()
            .await?;

        Ok(Self::check(response)?.json().await?)
    }

    // Read the wall clock at request-construction time, never cache the
    // token: a cached one can drift outside the provider's window on a
    // slow network.
    fn fresh_token() -> String {
        clock_auth::issue(Utc::now())
    }

    fn check(response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
        match response.status() {
            StatusCode::UNAUTHORIZED => Err(ClientError::Unauthorized),
            StatusCode::NOT_FOUND => Err(ClientError::NotFound),
            status if status.is_success() => Ok(response),
            status => Err(ClientError::UnexpectedStatus(status.as_u16())),
        }
    }
}
