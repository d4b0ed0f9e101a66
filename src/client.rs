//! BabelNet API client.
//!
//! Low-level HTTP client that handles authentication, parameter resolution,
//! and raw requests. The typed operations live next to their models.

use std::env;
use std::sync::Arc;
use std::time::Duration;

use reqwest::{Client, StatusCode};
use url::Url;

use crate::error::{BabelNetError, Result};
use crate::params::{DefaultParams, Endpoint};

const DEFAULT_API_URL: &str = "https://babelnet.io/v4/";
const USER_AGENT: &str = concat!("babelnet/", env!("CARGO_PKG_VERSION"));
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Query parameter carrying the API key.
const KEY_PARAM: &str = "key";

/// Low-level BabelNet API client.
///
/// Holds the API key, base URL, and default parameter values. Every
/// operation performs exactly one GET round trip.
///
/// This struct is cheaply cloneable; clones reference the same underlying
/// connection pool and configuration.
///
/// # Example
///
/// ```no_run
/// use babelnet::{BabelNetClient, DefaultParams};
///
/// # fn example() -> babelnet::Result<()> {
/// // Create from environment variables
/// let client = BabelNetClient::from_env()?;
///
/// // Or configure manually
/// let client = BabelNetClient::builder("your-api-key")
///     .defaults(DefaultParams::new().with("lang", "EN"))
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct BabelNetClient {
    http: Client,
    base_url: Arc<Url>,
    api_key: String,
    defaults: Arc<DefaultParams>,
    accept_invalid_certs: bool,
}

impl std::fmt::Debug for BabelNetClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BabelNetClient")
            .field("base_url", &self.base_url.as_str())
            .field("defaults", &self.defaults)
            .field("accept_invalid_certs", &self.accept_invalid_certs)
            .finish_non_exhaustive()
    }
}

/// Builder for [`BabelNetClient`].
#[derive(Debug, Clone)]
pub struct BabelNetClientBuilder {
    api_key: String,
    base_url: String,
    defaults: DefaultParams,
    accept_invalid_certs: bool,
    timeout: Duration,
}

impl BabelNetClientBuilder {
    /// Start a builder with the given API key and default settings.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_API_URL.to_string(),
            defaults: DefaultParams::new(),
            accept_invalid_certs: false,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Start a builder from environment variables.
    ///
    /// - `BABELNET_API_KEY` (required)
    /// - `BABELNET_API_URL` (optional, defaults to `https://babelnet.io/v4/`)
    /// - `BABELNET_ACCEPT_INVALID_CERTS` (optional, `1`, `true` or `yes`)
    ///
    /// # Errors
    ///
    /// Returns an error if `BABELNET_API_KEY` is not set.
    pub fn from_env() -> Result<Self> {
        let api_key = env::var("BABELNET_API_KEY").map_err(|_| {
            BabelNetError::ConfigMissing("BABELNET_API_KEY environment variable not set".to_string())
        })?;

        let mut builder = Self::new(api_key);

        if let Ok(url) = env::var("BABELNET_API_URL") {
            builder = builder.base_url(url);
        }

        if let Ok(flag) = env::var("BABELNET_ACCEPT_INVALID_CERTS") {
            builder = builder.accept_invalid_certs(matches!(
                flag.trim().to_ascii_lowercase().as_str(),
                "1" | "true" | "yes"
            ));
        }

        Ok(builder)
    }

    /// Override the base URL (e.g. to point at a mock server).
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Replace the default parameter values.
    pub fn defaults(mut self, defaults: DefaultParams) -> Self {
        self.defaults = defaults;
        self
    }

    /// Add a single default parameter value.
    pub fn default_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.defaults.set(name, value);
        self
    }

    /// Skip TLS certificate and host verification.
    ///
    /// Off by default. Only enable this against endpoints you trust.
    pub fn accept_invalid_certs(mut self, accept: bool) -> Self {
        self.accept_invalid_certs = accept;
        self
    }

    /// Set the per-request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid or the HTTP client
    /// cannot be constructed.
    pub fn build(self) -> Result<BabelNetClient> {
        // Ensure base URL ends with /
        let base_url_str = if self.base_url.ends_with('/') {
            self.base_url
        } else {
            format!("{}/", self.base_url)
        };

        let base_url = Url::parse(&base_url_str)?;

        if self.accept_invalid_certs {
            tracing::warn!("TLS certificate verification disabled for {}", base_url);
        }

        let http = Client::builder()
            .user_agent(USER_AGENT)
            .gzip(true)
            .danger_accept_invalid_certs(self.accept_invalid_certs)
            .timeout(self.timeout)
            .build()
            .map_err(BabelNetError::TransportError)?;

        Ok(BabelNetClient {
            http,
            base_url: Arc::new(base_url),
            api_key: self.api_key,
            defaults: Arc::new(self.defaults),
            accept_invalid_certs: self.accept_invalid_certs,
        })
    }
}

impl BabelNetClient {
    /// Create a client from environment variables.
    ///
    /// See [`BabelNetClientBuilder::from_env`] for the variables read.
    ///
    /// # Errors
    ///
    /// Returns an error if `BABELNET_API_KEY` is not set.
    pub fn from_env() -> Result<Self> {
        BabelNetClientBuilder::from_env()?.build()
    }

    /// Create a client for the public API with no default parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(api_key: &str) -> Result<Self> {
        Self::builder(api_key).build()
    }

    /// Start configuring a client.
    pub fn builder(api_key: impl Into<String>) -> BabelNetClientBuilder {
        BabelNetClientBuilder::new(api_key)
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Get the default parameter values.
    pub fn defaults(&self) -> &DefaultParams {
        &self.defaults
    }

    /// Whether TLS verification is disabled.
    pub fn accepts_invalid_certs(&self) -> bool {
        self.accept_invalid_certs
    }

    /// Build the full request URL for an endpoint and its parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint does not form a valid URL.
    pub fn request_url(&self, endpoint: &str, params: &[(&str, String)]) -> Result<Url> {
        let mut url = self.base_url.join(endpoint)?;

        let query = params
            .iter()
            .map(|(name, value)| {
                format!(
                    "{}={}",
                    urlencoding::encode(name),
                    urlencoding::encode(value)
                )
            })
            .collect::<Vec<_>>()
            .join("&");

        url.set_query(Some(&query));
        Ok(url)
    }

    /// Execute an API call and return the decoded JSON body.
    #[tracing::instrument(skip(self, endpoint, args), fields(endpoint = endpoint.name))]
    pub(crate) async fn exec(
        &self,
        endpoint: &Endpoint,
        args: &[Option<&str>],
    ) -> Result<serde_json::Value> {
        let mut params = endpoint.resolve(args, &self.defaults)?;
        tracing::debug!(
            params = ?params.iter().map(|(name, _)| *name).collect::<Vec<_>>(),
            "resolved request parameters"
        );
        params.push((KEY_PARAM, self.api_key.clone()));

        let url = self.request_url(endpoint.name, &params)?;

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(BabelNetError::TransportError)?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(BabelNetError::TransportError)?;
        tracing::debug!(status = status.as_u16(), bytes = body.len(), "response received");

        if status != StatusCode::OK {
            let message = Self::extract_error_message(&body);
            tracing::warn!(
                status = status.as_u16(),
                message = %message,
                "BabelNet request failed"
            );
            return Err(BabelNetError::ApiError {
                message,
                status_code: status.as_u16(),
            });
        }

        Ok(serde_json::from_slice(&body)?)
    }

    /// Extract the `message` field from a failed response body.
    ///
    /// Yields an empty string when the body is not JSON or has no message.
    fn extract_error_message(body: &[u8]) -> String {
        let Ok(json) = serde_json::from_slice::<serde_json::Value>(body) else {
            return String::new();
        };

        match json.get("message") {
            Some(serde_json::Value::String(msg)) => msg.clone(),
            Some(serde_json::Value::Null) | None => String::new(),
            Some(other) => other.to_string(),
        }
    }
}
