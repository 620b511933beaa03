//! Insights Engine - assembles company pages

use crate::api::GNewsClient;
use crate::config::NewsConfig;
use crate::dataset::Dataset;
use crate::error::Result;
use crate::membership::MembershipClassifier;
use crate::news::NewsFetcher;
use chrono::NaiveDateTime;
use std::sync::Arc;
use tracing::{debug, info};

use super::page::{CompanyPage, NewsSection};

/// Insights Engine - one page per company selection
pub struct InsightsEngine {
    dataset: Dataset,
    classifier: MembershipClassifier,
    fetcher: NewsFetcher,
}

impl InsightsEngine {
    pub fn new(dataset: Dataset, classifier: MembershipClassifier, fetcher: NewsFetcher) -> Self {
        Self {
            dataset,
            classifier,
            fetcher,
        }
    }

    /// Engine backed by the GNews API
    pub fn with_gnews(dataset: Dataset, index_name: &str, config: NewsConfig) -> Result<Self> {
        config.validate()?;
        let client = GNewsClient::new(&config)?;
        let fetcher = NewsFetcher::new(Arc::new(client), config);
        Ok(Self::new(
            dataset,
            MembershipClassifier::new(index_name),
            fetcher,
        ))
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Build the full page for `name`, including a live news lookup.
    ///
    /// Unknown names and malformed join dates are errors; news failures are
    /// reported inside [`CompanyPage::news`].
    pub async fn company_page(&self, name: &str, now: NaiveDateTime) -> Result<CompanyPage> {
        let mut page = self.company_page_without_news(name, now)?;

        info!(company = name, "Fetching company news");
        page.news = NewsSection::from(self.fetcher.fetch_company(name).await);
        Ok(page)
    }

    /// Build the page for `name` from static data only
    pub fn company_page_without_news(&self, name: &str, now: NaiveDateTime) -> Result<CompanyPage> {
        let record = self.dataset.get(name)?;
        let membership = self.classifier.classify(&record.name, record, now)?;
        debug!(company = name, "Classified membership");

        Ok(CompanyPage {
            company: record.name.clone(),
            index_name: self.classifier.index_name().to_string(),
            history: record.history.clone(),
            membership,
            insights: record.insights.clone(),
            news: NewsSection::Skipped,
        })
    }
}
