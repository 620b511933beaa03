//! Configuration for news lookups

use crate::error::{InsightsError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Environment variable holding the GNews API key
pub const API_KEY_ENV: &str = "GNEWS_API_KEY";

/// GNews search endpoint
pub const DEFAULT_API_BASE: &str = "https://gnews.io/api/v4/search";

/// How far back searched articles may be published, in whole days.
///
/// Sent on the wire as `"<days>d"`, e.g. `2d`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecencyWindow {
    days: u32,
}

impl RecencyWindow {
    pub const fn days(days: u32) -> Self {
        Self { days }
    }

    pub fn as_days(&self) -> u32 {
        self.days
    }
}

impl fmt::Display for RecencyWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}d", self.days)
    }
}

/// Configuration for news lookups
#[derive(Clone, Serialize, Deserialize)]
pub struct NewsConfig {
    /// Search endpoint URL
    pub api_base: String,

    /// GNews API key (absence surfaces when news is requested)
    #[serde(skip_serializing)]
    pub api_key: Option<String>,

    /// Article category filter
    pub category: String,

    /// Country filter (ISO 3166-1 alpha-2, lower case)
    pub country: String,

    /// Language filter (ISO 639-1)
    pub lang: String,

    /// Result cap for the first attempt
    pub max_results: u32,

    /// Recency window for the first attempt
    pub window: RecencyWindow,

    /// Result cap for the widened attempt
    pub fallback_max_results: u32,

    /// Recency window for the widened attempt
    pub fallback_window: RecencyWindow,

    /// Request timeout duration
    pub request_timeout: Duration,
}

impl fmt::Debug for NewsConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewsConfig")
            .field("api_base", &self.api_base)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("category", &self.category)
            .field("country", &self.country)
            .field("lang", &self.lang)
            .field("max_results", &self.max_results)
            .field("window", &self.window)
            .field("fallback_max_results", &self.fallback_max_results)
            .field("fallback_window", &self.fallback_window)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

impl Default for NewsConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            api_key: None,
            category: "business".to_string(),
            country: "in".to_string(),
            lang: "en".to_string(),
            max_results: 5,
            window: RecencyWindow::days(2),
            fallback_max_results: 2,
            fallback_window: RecencyWindow::days(7),
            request_timeout: Duration::from_secs(10),
        }
    }
}

impl NewsConfig {
    /// Create a new configuration builder
    pub fn builder() -> NewsConfigBuilder {
        NewsConfigBuilder::default()
    }

    /// Load the API key from `GNEWS_API_KEY`
    pub fn with_env_api_key(mut self) -> Self {
        self.api_key = env_api_key();
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        url::Url::parse(&self.api_base).map_err(|e| {
            InsightsError::ConfigError(format!("Invalid api_base '{}': {e}", self.api_base))
        })?;

        if self.max_results == 0 || self.fallback_max_results == 0 {
            return Err(InsightsError::ConfigError(
                "max_results and fallback_max_results must be greater than 0".to_string(),
            ));
        }

        if self.window.as_days() == 0 {
            return Err(InsightsError::ConfigError(
                "Recency window must be at least one day".to_string(),
            ));
        }

        if self.fallback_window < self.window {
            return Err(InsightsError::ConfigError(format!(
                "fallback_window ({}) must not be narrower than window ({})",
                self.fallback_window, self.window
            )));
        }

        if self.request_timeout.is_zero() {
            return Err(InsightsError::ConfigError(
                "request_timeout must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

fn env_api_key() -> Option<String> {
    std::env::var(API_KEY_ENV)
        .ok()
        .map(|key| key.trim().to_string())
        .filter(|key| !key.is_empty())
}

/// Builder for NewsConfig
#[derive(Debug, Default)]
pub struct NewsConfigBuilder {
    api_base: Option<String>,
    api_key: Option<String>,
    category: Option<String>,
    country: Option<String>,
    lang: Option<String>,
    max_results: Option<u32>,
    window: Option<RecencyWindow>,
    fallback_max_results: Option<u32>,
    fallback_window: Option<RecencyWindow>,
    request_timeout: Option<Duration>,
}

impl NewsConfigBuilder {
    /// Set the search endpoint
    pub fn api_base(mut self, url: impl Into<String>) -> Self {
        self.api_base = Some(url.into());
        self
    }

    /// Set the API key
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Load the API key from `GNEWS_API_KEY` when not already set
    pub fn with_env_api_key(mut self) -> Self {
        if self.api_key.is_none() {
            self.api_key = env_api_key();
        }
        self
    }

    /// Set the category filter
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Set the country filter
    pub fn country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    /// Set the language filter
    pub fn lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = Some(lang.into());
        self
    }

    /// Set the first-attempt result cap
    pub fn max_results(mut self, max: u32) -> Self {
        self.max_results = Some(max);
        self
    }

    /// Set the first-attempt recency window
    pub fn window(mut self, window: RecencyWindow) -> Self {
        self.window = Some(window);
        self
    }

    /// Set the widened-attempt result cap
    pub fn fallback_max_results(mut self, max: u32) -> Self {
        self.fallback_max_results = Some(max);
        self
    }

    /// Set the widened-attempt recency window
    pub fn fallback_window(mut self, window: RecencyWindow) -> Self {
        self.fallback_window = Some(window);
        self
    }

    /// Set request timeout
    pub fn request_timeout(mut self, duration: Duration) -> Self {
        self.request_timeout = Some(duration);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<NewsConfig> {
        let defaults = NewsConfig::default();

        let config = NewsConfig {
            api_base: self.api_base.unwrap_or(defaults.api_base),
            api_key: self.api_key,
            category: self.category.unwrap_or(defaults.category),
            country: self.country.unwrap_or(defaults.country),
            lang: self.lang.unwrap_or(defaults.lang),
            max_results: self.max_results.unwrap_or(defaults.max_results),
            window: self.window.unwrap_or(defaults.window),
            fallback_max_results: self
                .fallback_max_results
                .unwrap_or(defaults.fallback_max_results),
            fallback_window: self.fallback_window.unwrap_or(defaults.fallback_window),
            request_timeout: self.request_timeout.unwrap_or(defaults.request_timeout),
        };

        config.validate()?;
        Ok(config)
    }
}
