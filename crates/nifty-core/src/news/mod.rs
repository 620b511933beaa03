//! Company news lookup
//!
//! A lookup first searches the configured (narrow) recency window. When that
//! returns no articles it searches exactly once more with the wider fallback
//! window and smaller result cap, then stops whatever the outcome. Transport
//! and parse failures are never retried.

pub mod transport;

use crate::config::{NewsConfig, RecencyWindow};
use crate::error::NewsError;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

pub use transport::{NewsTransport, SearchRequest};

#[cfg(test)]
pub use transport::MockNewsTransport;

/// A single news article reduced to what is displayed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsItem {
    /// Article description, empty when the API has none
    pub summary: String,
    /// Article URL, empty when the API has none
    pub link: String,
}

/// Outcome of a news lookup
pub type NewsResult = Result<Vec<NewsItem>, NewsError>;

/// What to search for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsQuery {
    pub query: String,
    pub max_results: u32,
    pub country: String,
    pub lang: String,
    pub window: RecencyWindow,
}

impl NewsQuery {
    /// Query for a company name using the configured first-attempt filters
    pub fn for_company(name: impl Into<String>, config: &NewsConfig) -> Self {
        Self {
            query: name.into(),
            max_results: config.max_results,
            country: config.country.clone(),
            lang: config.lang.clone(),
            window: config.window,
        }
    }

    /// Same query with the fallback cap and window
    pub fn widened(&self, config: &NewsConfig) -> Self {
        Self {
            max_results: config.fallback_max_results,
            window: config.fallback_window,
            ..self.clone()
        }
    }
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    articles: Vec<Article>,
}

#[derive(Debug, Deserialize)]
struct Article {
    description: Option<String>,
    url: Option<String>,
}

impl From<Article> for NewsItem {
    fn from(article: Article) -> Self {
        Self {
            summary: article.description.unwrap_or_default(),
            link: article.url.unwrap_or_default(),
        }
    }
}

/// Fetches company news through a [`NewsTransport`]
pub struct NewsFetcher {
    transport: Arc<dyn NewsTransport>,
    config: NewsConfig,
}

impl NewsFetcher {
    /// Create a fetcher; the API key is taken from `config`
    pub fn new(transport: Arc<dyn NewsTransport>, config: NewsConfig) -> Self {
        Self { transport, config }
    }

    /// Fetch news for a company name with the configured defaults
    pub async fn fetch_company(&self, name: &str) -> NewsResult {
        self.fetch(&NewsQuery::for_company(name, &self.config)).await
    }

    /// Fetch news, widening the recency window once if nothing is found
    #[instrument(skip(self, query), fields(query = %query.query))]
    pub async fn fetch(&self, query: &NewsQuery) -> NewsResult {
        let Some(api_key) = self.config.api_key.as_deref() else {
            warn!("News requested without an API key");
            return Err(NewsError::MissingApiKey);
        };

        let items = self.search(query, api_key).await?;
        if !items.is_empty() {
            return Ok(items);
        }

        let widened = query.widened(&self.config);
        info!(
            from = %query.window,
            to = %widened.window,
            "No recent news found, expanding search"
        );
        self.search(&widened, api_key).await
    }

    async fn search(&self, query: &NewsQuery, api_key: &str) -> NewsResult {
        let request = SearchRequest {
            query: query.query.clone(),
            category: self.config.category.clone(),
            lang: query.lang.clone(),
            country: query.country.clone(),
            max_results: query.max_results,
            window: query.window,
            api_key: api_key.to_string(),
        };

        let body = self.transport.search(&request).await.inspect_err(|e| {
            warn!(error = %e, "News request failed");
        })?;

        let items = parse_articles(&body)?;
        debug!(count = items.len(), window = %query.window, "Received articles");
        Ok(items)
    }
}

/// Decode a search response body into news items
pub fn parse_articles(body: &str) -> NewsResult {
    let response: SearchResponse = serde_json::from_str(body).map_err(|e| {
        warn!(error = %e, "Failed to parse news response");
        NewsError::Parse
    })?;
    Ok(response.articles.into_iter().map(NewsItem::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::Sequence;

    const EMPTY: &str = r#"{"totalArticles": 0, "articles": []}"#;
    const TWO_ARTICLES: &str = r#"{
        "totalArticles": 2,
        "articles": [
            {
                "title": "Quarterly results",
                "description": "Profit rises 12% on strong demand",
                "content": "...",
                "url": "https://news.example.com/a",
                "publishedAt": "2026-10-17T09:00:00Z"
            },
            {
                "title": "Board meeting",
                "description": null,
                "url": "https://news.example.com/b"
            }
        ]
    }"#;

    fn config() -> NewsConfig {
        NewsConfig::builder().api_key("test-key").build().unwrap()
    }

    fn fetcher(mock: MockNewsTransport, config: NewsConfig) -> NewsFetcher {
        NewsFetcher::new(Arc::new(mock), config)
    }

    #[tokio::test]
    async fn test_results_on_first_attempt() {
        let mut mock = MockNewsTransport::new();
        mock.expect_search()
            .times(1)
            .withf(|req| req.max_results == 5 && req.window == RecencyWindow::days(2))
            .returning(|_| Ok(TWO_ARTICLES.to_string()));

        let items = fetcher(mock, config())
            .fetch_company("Infosys Ltd")
            .await
            .unwrap();

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].summary, "Profit rises 12% on strong demand");
        assert_eq!(items[0].link, "https://news.example.com/a");
        assert_eq!(items[1].summary, "");
    }

    #[tokio::test]
    async fn test_empty_narrow_window_widens_once() {
        let mut seq = Sequence::new();
        let mut mock = MockNewsTransport::new();
        mock.expect_search()
            .times(1)
            .in_sequence(&mut seq)
            .withf(|req| req.max_results == 5 && req.window == RecencyWindow::days(2))
            .returning(|_| Ok(EMPTY.to_string()));
        mock.expect_search()
            .times(1)
            .in_sequence(&mut seq)
            .withf(|req| {
                req.max_results == 2
                    && req.window == RecencyWindow::days(7)
                    && req.country == "in"
                    && req.lang == "en"
            })
            .returning(|_| Ok(TWO_ARTICLES.to_string()));

        let items = fetcher(mock, config())
            .fetch_company("Infosys Ltd")
            .await
            .unwrap();
        assert_eq!(items.len(), 2);
    }

    #[tokio::test]
    async fn test_widened_search_still_empty_stops() {
        let mut mock = MockNewsTransport::new();
        mock.expect_search()
            .times(2)
            .returning(|_| Ok(EMPTY.to_string()));

        let items = fetcher(mock, config())
            .fetch_company("Infosys Ltd")
            .await
            .unwrap();
        assert!(items.is_empty());
    }

    #[tokio::test]
    async fn test_missing_articles_field_counts_as_empty() {
        let mut mock = MockNewsTransport::new();
        mock.expect_search()
            .times(2)
            .returning(|_| Ok("{}".to_string()));

        let items = fetcher(mock, config())
            .fetch_company("Infosys Ltd")
            .await
            .unwrap();
        assert!(items.is_empty());
    }

    #[tokio::test]
    async fn test_transport_failure_is_not_retried() {
        let mut mock = MockNewsTransport::new();
        mock.expect_search()
            .times(1)
            .returning(|_| Err(NewsError::Transport("connection refused".to_string())));

        let err = fetcher(mock, config())
            .fetch_company("Infosys Ltd")
            .await
            .unwrap_err();

        assert_eq!(err, NewsError::Transport("connection refused".to_string()));
        assert!(!err.to_string().is_empty());
        assert!(err.to_string().starts_with("Failed to fetch data: "));
    }

    #[tokio::test]
    async fn test_malformed_json_is_not_retried() {
        let mut mock = MockNewsTransport::new();
        mock.expect_search()
            .times(1)
            .returning(|_| Ok("<html>502 Bad Gateway</html>".to_string()));

        let err = fetcher(mock, config())
            .fetch_company("Infosys Ltd")
            .await
            .unwrap_err();

        assert_eq!(err, NewsError::Parse);
        assert_eq!(err.to_string(), "Failed to parse JSON response.");
    }

    #[tokio::test]
    async fn test_missing_key_short_circuits() {
        let mut mock = MockNewsTransport::new();
        mock.expect_search().times(0);

        let err = fetcher(mock, NewsConfig::default())
            .fetch_company("Infosys Ltd")
            .await
            .unwrap_err();
        assert_eq!(err, NewsError::MissingApiKey);
    }

    #[tokio::test]
    async fn test_request_carries_config() {
        let config = NewsConfig::builder()
            .api_key("k-123")
            .category("technology")
            .country("us")
            .lang("fr")
            .build()
            .unwrap();

        let mut mock = MockNewsTransport::new();
        mock.expect_search()
            .times(1)
            .withf(|req| {
                req.query == "Wipro Ltd"
                    && req.category == "technology"
                    && req.country == "us"
                    && req.lang == "fr"
                    && req.api_key == "k-123"
            })
            .returning(|_| Ok(TWO_ARTICLES.to_string()));

        let items = fetcher(mock, config).fetch_company("Wipro Ltd").await.unwrap();
        assert_eq!(items.len(), 2);
    }

    #[test]
    fn test_widened_query() {
        let config = NewsConfig::default();
        let query = NewsQuery::for_company("HDFC Bank Ltd", &config);
        let widened = query.widened(&config);

        assert_eq!(widened.query, "HDFC Bank Ltd");
        assert_eq!(widened.max_results, 2);
        assert_eq!(widened.window, RecencyWindow::days(7));
        assert_eq!(widened.country, query.country);
        assert_eq!(widened.lang, query.lang);
    }

    #[test]
    fn test_parse_articles_rejects_non_object() {
        assert_eq!(parse_articles("[1, 2]"), Err(NewsError::Parse));
    }
}
