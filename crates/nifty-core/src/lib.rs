//! Company insights for index constituents
//!
//! This crate combines a static, curated company dataset with a live news
//! lookup. It includes:
//!
//! - Dataset loading and lookup by company name
//! - Membership classification (10-year, 5-year and 12-month thresholds)
//! - News search against the GNews API with a single widening fallback
//! - Page assembly and formatting (text, markdown, JSON)
//!
//! # Example
//!
//! ```rust,ignore
//! use nifty_core::{Dataset, InsightsEngine, NewsConfig};
//! use nifty_core::interface::{FormatterFactory, OutputFormat};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> anyhow::Result<()> {
//!     let dataset = Dataset::load("companies.json")?;
//!     let config = NewsConfig::builder().with_env_api_key().build()?;
//!     let engine = InsightsEngine::with_gnews(dataset, "NIFTY50", config)?;
//!
//!     let now = chrono::Local::now().naive_local();
//!     let page = engine.company_page("Infosys Ltd", now).await?;
//!     println!("{}", FormatterFactory::create(OutputFormat::Text).format_page(&page));
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod dataset;
pub mod engine;
pub mod error;
pub mod interface;
pub mod membership;
pub mod news;

// Re-export main types for convenience
pub use config::{NewsConfig, RecencyWindow};
pub use dataset::{CompanyRecord, Dataset};
pub use engine::{CompanyPage, InsightsEngine, NewsSection};
pub use error::{InsightsError, NewsError, Result};
pub use membership::{MembershipClassifier, MembershipReport, MembershipThreshold};
pub use news::{NewsFetcher, NewsItem, NewsQuery, NewsResult, NewsTransport};
