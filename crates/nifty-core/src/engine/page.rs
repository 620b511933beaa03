//! Page model handed to the presentation layer

use crate::news::{NewsItem, NewsResult};
use serde::Serialize;

/// News region of a page
///
/// Errors are kept apart from articles so a failure message can never be
/// rendered as if it were a news item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum NewsSection {
    /// News was not requested
    Skipped,
    /// Lookup succeeded, possibly with no articles
    Items { items: Vec<NewsItem> },
    /// Lookup failed; `message` is user-facing
    Failed { message: String },
}

impl From<NewsResult> for NewsSection {
    fn from(result: NewsResult) -> Self {
        match result {
            Ok(items) => NewsSection::Items { items },
            Err(e) => NewsSection::Failed {
                message: e.to_string(),
            },
        }
    }
}

/// Everything displayed for one company
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompanyPage {
    pub company: String,
    pub index_name: String,
    pub history: String,
    /// Join announcement then the 10-year, 5-year and 12-month statements
    pub membership: Vec<String>,
    pub insights: Vec<String>,
    pub news: NewsSection,
}
