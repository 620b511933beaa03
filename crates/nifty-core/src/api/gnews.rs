//! GNews search API client
//!
//! Docs: https://gnews.io/docs/v4#search-endpoint
//!
//! Requests are plain HTTPS GETs with every filter in the query string,
//! including the API key. Non-2xx statuses are reported as transport errors.

use crate::config::NewsConfig;
use crate::error::{InsightsError, NewsError, Result};
use crate::news::{NewsTransport, SearchRequest};
use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

/// GNews client for the search endpoint
pub struct GNewsClient {
    client: Client,
    api_base: String,
}

impl GNewsClient {
    /// Create a client using the endpoint and timeout from `config`
    pub fn new(config: &NewsConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| InsightsError::ConfigError(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_base: config.api_base.clone(),
        })
    }
}

#[async_trait]
impl NewsTransport for GNewsClient {
    async fn search(&self, request: &SearchRequest) -> std::result::Result<String, NewsError> {
        debug!(?request, "GNews search");

        let response = self
            .client
            .get(&self.api_base)
            .query(&request.query_params())
            .send()
            .await
            .map_err(NewsError::transport)?;

        let response = response.error_for_status().map_err(NewsError::transport)?;

        response.text().await.map_err(NewsError::transport)
    }
}
