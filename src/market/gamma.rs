//! Gamma API client
//!
//! Fetches pages of events from Polymarket's Gamma API, ordered by volume
//! descending.

use super::{Event, EventQuery, EventSource};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use thiserror::Error;

/// Gamma API base URL
pub const GAMMA_API_URL: &str = "https://gamma-api.polymarket.com";

/// Gamma API errors
#[derive(Debug, Error)]
pub enum GammaError {
    /// The HTTP client could not be constructed
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
    /// Transport-level failure
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    /// Non-2xx response
    #[error("Polymarket API error: {status} {reason}")]
    Status { status: u16, reason: String },
    /// Body was not a JSON array of events
    #[error("failed to decode events response: {0}")]
    Decode(#[source] reqwest::Error),
}

/// Configuration for the Gamma client
#[derive(Debug, Clone)]
pub struct GammaConfig {
    /// Base URL for the Gamma API
    pub base_url: String,
    /// Request timeout
    pub timeout: Duration,
}

impl Default for GammaConfig {
    fn default() -> Self {
        Self {
            base_url: GAMMA_API_URL.to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

/// Client for Polymarket's Gamma API
pub struct GammaClient {
    config: GammaConfig,
    client: Client,
}

impl GammaClient {
    /// Create a new Gamma API client with default configuration
    pub fn new() -> Result<Self, GammaError> {
        Self::with_config(GammaConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: GammaConfig) -> Result<Self, GammaError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(GammaError::Client)?;

        Ok(Self { config, client })
    }

    /// Active configuration
    pub fn config(&self) -> &GammaConfig {
        &self.config
    }

    /// Full URL of the events resource
    pub fn events_url(&self) -> String {
        format!("{}/events", self.config.base_url.trim_end_matches('/'))
    }

    /// Fetch one page of events
    pub async fn request_events(&self, query: &EventQuery) -> Result<Vec<Event>, GammaError> {
        let url = self.events_url();

        tracing::debug!(
            url = %url,
            limit = query.limit,
            offset = query.offset,
            "Fetching events from Gamma API"
        );

        let response = self
            .client
            .get(&url)
            .query(&query.to_query_pairs())
            .send()
            .await
            .map_err(|source| GammaError::Request {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(GammaError::Status {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("").to_string(),
            });
        }

        let events: Vec<Event> = response.json().await.map_err(GammaError::Decode)?;

        tracing::debug!(count = events.len(), "Received events");
        Ok(events)
    }
}

#[async_trait]
impl EventSource for GammaClient {
    async fn fetch_events(&self, query: &EventQuery) -> anyhow::Result<Vec<Event>> {
        Ok(self.request_events(query).await?)
    }
}
