//! Client configuration.

use crate::client::FiveSimClient;
use crate::errors::{FiveSimError, Result};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use secrecy::SecretString;
use std::env;
use std::time::Duration;
use url::Url;

/// Default 5sim API root.
pub const DEFAULT_BASE_URL: &str = "https://5sim.net/v1";

/// Default per-request deadline.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(30_000);

/// Environment variable holding the API key.
pub const ENV_API_KEY: &str = "FIVESIM_API_KEY";
/// Environment variable overriding the base URL.
pub const ENV_BASE_URL: &str = "FIVESIM_BASE_URL";
/// Environment variable overriding the timeout, in milliseconds.
pub const ENV_TIMEOUT_MS: &str = "FIVESIM_TIMEOUT_MS";

/// Builder for configuring a [`FiveSimClient`].
///
/// # Example
///
/// ```rust
/// use fivesim::FiveSimClient;
/// use std::time::Duration;
///
/// let client = FiveSimClient::builder("your_api_key")
///     .base_url("https://5sim.net/v1")
///     .timeout(Duration::from_secs(10))
///     .build()
///     .unwrap();
///
/// assert_eq!(client.timeout(), Duration::from_secs(10));
/// ```
pub struct FiveSimClientBuilder {
    api_key: String,
    base_url: Option<String>,
    timeout: Option<Duration>,
    http_client: Option<ClientWithMiddleware>,
}

impl FiveSimClientBuilder {
    /// Create a new builder with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: None,
            timeout: None,
            http_client: None,
        }
    }

    /// Create a builder from `FIVESIM_API_KEY`, `FIVESIM_BASE_URL` and
    /// `FIVESIM_TIMEOUT_MS`. Only the API key is required.
    pub fn from_env() -> Result<Self> {
        let api_key = env::var(ENV_API_KEY).map_err(|_| FiveSimError::MissingConfig(ENV_API_KEY))?;
        let mut builder = Self::new(api_key);

        if let Ok(base_url) = env::var(ENV_BASE_URL) {
            builder = builder.base_url(base_url);
        }

        if let Ok(raw) = env::var(ENV_TIMEOUT_MS) {
            let millis = raw
                .trim()
                .parse::<u64>()
                .map_err(|_| FiveSimError::InvalidConfig {
                    name: ENV_TIMEOUT_MS,
                    value: raw.clone(),
                })?;
            builder = builder.timeout(Duration::from_millis(millis));
        }

        Ok(builder)
    }

    /// Set a custom API root (e.g. a mock server).
    ///
    /// The URL must not carry a query string or fragment.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Set the per-request deadline.
    ///
    /// Default: 30 seconds
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set a custom HTTP client with middleware.
    pub fn http_client(mut self, client: ClientWithMiddleware) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Build the [`FiveSimClient`].
    pub fn build(self) -> Result<FiveSimClient> {
        let raw_url = self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL);
        let base_url = Url::parse(raw_url).map_err(|e| FiveSimError::InvalidBaseUrl {
            url: raw_url.to_string(),
            reason: e.to_string(),
        })?;
        if base_url.cannot_be_a_base() {
            return Err(FiveSimError::InvalidBaseUrl {
                url: raw_url.to_string(),
                reason: "URL cannot be a base".to_string(),
            });
        }
        // Request URLs replace the query, so one on the base would be lost.
        if base_url.query().is_some() || base_url.fragment().is_some() {
            return Err(FiveSimError::InvalidBaseUrl {
                url: raw_url.to_string(),
                reason: "base URL must not carry a query or fragment".to_string(),
            });
        }

        let http_client = match self.http_client {
            Some(client) => client,
            None => {
                let client = reqwest::Client::builder()
                    .build()
                    .map_err(FiveSimError::BuildHttpClient)?;
                ClientBuilder::new(client).build()
            }
        };

        Ok(FiveSimClient::from_parts(
            http_client,
            SecretString::from(self.api_key),
            base_url,
            self.timeout.unwrap_or(DEFAULT_TIMEOUT),
        ))
    }
}
