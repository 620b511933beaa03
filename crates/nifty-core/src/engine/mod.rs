//! Insights Engine
//!
//! Coordinates the dataset, membership classifier and news fetcher into a
//! single page per company.

pub mod insights_engine;
pub mod page;

pub use insights_engine::InsightsEngine;
pub use page::{CompanyPage, NewsSection};
