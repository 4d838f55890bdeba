//! HTTP client for Jumia category pages.

use crate::config::{Config, RequestIdentity};
use crate::error::FetchError;
use anyhow::Result;
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, warn};
use wreq::Client;

/// Upper bound on the connect phase; the overall timeout still applies.
const MAX_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Trait for page fetching - enables mocking for tests.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Performs a GET and returns the response body.
    async fn get(&self, url: &str) -> Result<String, FetchError>;

    /// Like [`get`](Self::get), but reports failures and returns `None`
    /// instead of propagating them. Callers treat `None` as an empty page.
    async fn fetch(&self, url: &str) -> Option<String> {
        match self.get(url).await {
            Ok(body) => Some(body),
            Err(e) => {
                warn!("Failed to fetch {}: {}", url, e);
                None
            }
        }
    }
}

/// Jumia HTTP client identifying itself as a bot.
pub struct JumiaClient {
    client: Client,
    identity: RequestIdentity,
}

impl JumiaClient {
    /// Creates a new client from the configured identity and timeout.
    pub fn new(config: &Config) -> Result<Self> {
        Self::with_identity(config.identity.clone(), Duration::from_secs(config.timeout_secs))
    }

    /// Creates a client with an explicit identity and timeout.
    pub fn with_identity(identity: RequestIdentity, timeout: Duration) -> Result<Self> {
        let connect_timeout = timeout.min(Duration::from_secs(MAX_CONNECT_TIMEOUT_SECS));

        let client = Client::builder()
            .cookie_store(true)
            .gzip(true)
            .brotli(true)
            .timeout(timeout)
            .connect_timeout(connect_timeout)
            .build()?;

        Ok(Self { client, identity })
    }

    /// Returns the identity sent with every request.
    pub fn identity(&self) -> &RequestIdentity {
        &self.identity
    }
}

#[async_trait]
impl PageFetcher for JumiaClient {
    async fn get(&self, url: &str) -> Result<String, FetchError> {
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(FetchError::InvalidUrl(url.to_string()));
        }

        debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .header("User-Agent", self.identity.user_agent.as_str())
            .header("From", self.identity.contact.as_str())
            .header("Accept", "text/html,application/xhtml+xml")
            .send()
            .await
            .map_err(FetchError::Request)?;

        let status = response.status();
        debug!("Response status: {}", status);

        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        response.text().await.map_err(FetchError::Body)
    }
}
