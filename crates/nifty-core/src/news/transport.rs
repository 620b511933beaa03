//! Transport seam between the news fetcher and the search API

use crate::config::RecencyWindow;
use crate::error::NewsError;
use async_trait::async_trait;
use std::fmt;

#[cfg(test)]
use mockall::automock;

/// One fully-specified search call
#[derive(Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub query: String,
    pub category: String,
    pub lang: String,
    pub country: String,
    pub max_results: u32,
    pub window: RecencyWindow,
    pub api_key: String,
}

impl SearchRequest {
    /// Query-string parameters in the order the API documents them
    pub fn query_params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("q", self.query.clone()),
            ("category", self.category.clone()),
            ("lang", self.lang.clone()),
            ("country", self.country.clone()),
            ("max", self.max_results.to_string()),
            ("from", self.window.to_string()),
            ("apikey", self.api_key.clone()),
        ]
    }
}

impl fmt::Debug for SearchRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchRequest")
            .field("query", &self.query)
            .field("category", &self.category)
            .field("lang", &self.lang)
            .field("country", &self.country)
            .field("max_results", &self.max_results)
            .field("window", &self.window)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

/// Issues a search and returns the raw response body
#[cfg_attr(test, automock)]
#[async_trait]
pub trait NewsTransport: Send + Sync {
    async fn search(&self, request: &SearchRequest) -> Result<String, NewsError>;
}
