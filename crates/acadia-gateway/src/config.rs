//! Client configuration.
//!
//! The only externally required setting is the backend base URL,
//! supplied programmatically or through `ACADIA_API_URL`.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::Url;

/// Environment variable naming the backend host.
pub const BASE_URL_ENV: &str = "ACADIA_API_URL";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration errors raised before any request is issued.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// `ACADIA_API_URL` is unset and no base URL was provided.
    #[error("no base URL configured; set {BASE_URL_ENV}")]
    MissingBaseUrl,

    /// The configured base URL does not parse.
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),

    /// The configured base URL cannot carry path segments.
    #[error("base URL cannot carry path segments: {0}")]
    OpaqueBaseUrl(Url),

    /// The underlying HTTP client failed to initialize.
    #[error("http client initialization failed: {0}")]
    Client(String),
}

/// HTTP client settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Backend host every collection path is resolved against.
    pub base_url: Url,
    /// Per-request timeout in seconds.
    pub request_timeout_secs: u64,
}

impl ClientConfig {
    /// Configuration pointing at the given backend.
    pub fn new(base_url: Url) -> Result<Self, ConfigError> {
        if base_url.cannot_be_a_base() {
            return Err(ConfigError::OpaqueBaseUrl(base_url));
        }
        Ok(Self {
            base_url,
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
        })
    }

    /// Configuration from `ACADIA_API_URL`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let raw = std::env::var(BASE_URL_ENV).map_err(|_| ConfigError::MissingBaseUrl)?;
        Self::new(raw.parse()?)
    }

    /// With a request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout_secs = timeout.as_secs().max(1);
        self
    }

    /// Request timeout as a `Duration`.
    #[inline]
    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
