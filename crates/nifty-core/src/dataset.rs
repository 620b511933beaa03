//! Static company dataset
//!
//! The dataset is a JSON array of company records, loaded once at startup and
//! never mutated afterwards:
//!
//! ```json
//! [
//!   {
//!     "company": "Infosys Ltd",
//!     "date_added": "01 January 2000",
//!     "history": "...",
//!     "insights": ["...", "..."]
//!   }
//! ]
//! ```

use crate::error::{InsightsError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, info};

/// One company listed on the index
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyRecord {
    /// Company display name, unique within the dataset
    #[serde(rename = "company")]
    pub name: String,
    /// Day the company entered the index, formatted `DD Month YYYY`
    pub date_added: String,
    /// Free-form company history
    pub history: String,
    /// Financial insights, in display order
    pub insights: Vec<String>,
}

/// Read-only collection of company records
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    companies: Vec<CompanyRecord>,
}

impl Dataset {
    /// Load the dataset from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| InsightsError::FileAccess {
            path: path.to_path_buf(),
            source,
        })?;

        let dataset = Self::from_json_str(&raw, &path.display().to_string())?;
        info!(count = dataset.len(), path = %path.display(), "Loaded company dataset");
        Ok(dataset)
    }

    /// Parse a dataset from JSON text; `origin` names the source in errors
    pub fn from_json_str(json: &str, origin: &str) -> Result<Self> {
        let companies: Vec<CompanyRecord> =
            serde_json::from_str(json).map_err(|source| InsightsError::Format {
                origin: origin.to_string(),
                source,
            })?;
        Self::from_records(companies)
    }

    /// Build a dataset from records, enforcing unique names
    pub fn from_records(companies: Vec<CompanyRecord>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(companies.len());
        for company in &companies {
            if !seen.insert(company.name.as_str()) {
                return Err(InsightsError::DuplicateCompany(company.name.clone()));
            }
        }
        debug!(count = companies.len(), "Validated company records");
        Ok(Self { companies })
    }

    /// All records in dataset order
    pub fn companies(&self) -> &[CompanyRecord] {
        &self.companies
    }

    /// Look up a company by exact name
    pub fn get(&self, name: &str) -> Result<&CompanyRecord> {
        self.companies
            .iter()
            .find(|c| c.name == name)
            .ok_or_else(|| InsightsError::NotFound(name.to_string()))
    }

    /// Look up a company ignoring case and surrounding whitespace
    pub fn find_ignore_case(&self, name: &str) -> Option<&CompanyRecord> {
        let needle = name.trim();
        self.companies
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(needle))
    }

    pub fn len(&self) -> usize {
        self.companies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.companies.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = r#"[
        {
            "company": "Reliance Industries Ltd",
            "date_added": "03 November 1995",
            "history": "Conglomerate founded by Dhirubhai Ambani.",
            "insights": ["Largest company by market cap", "Retail and telecom growth"]
        },
        {
            "company": "Jio Financial Services Ltd",
            "date_added": "20 July 2023",
            "history": "Demerged from Reliance Industries.",
            "insights": []
        }
    ]"#;

    #[test]
    fn test_parse_dataset() {
        let dataset = Dataset::from_json_str(SAMPLE, "sample").unwrap();
        assert_eq!(dataset.len(), 2);
        assert_eq!(
            dataset
                .companies()
                .iter()
                .map(|c| c.name.as_str())
                .collect::<Vec<_>>(),
            vec!["Reliance Industries Ltd", "Jio Financial Services Ltd"]
        );

        let record = dataset.get("Reliance Industries Ltd").unwrap();
        assert_eq!(record.date_added, "03 November 1995");
        assert_eq!(record.insights.len(), 2);
    }

    #[test]
    fn test_every_name_resolves() {
        let dataset = Dataset::from_json_str(SAMPLE, "sample").unwrap();
        for record in dataset.companies() {
            assert_eq!(dataset.get(&record.name).unwrap(), record);
        }
    }

    #[test]
    fn test_lookup_missing_company() {
        let dataset = Dataset::from_json_str(SAMPLE, "sample").unwrap();
        let err = dataset.get("Acme Ltd").unwrap_err();
        assert!(matches!(err, InsightsError::NotFound(name) if name == "Acme Ltd"));
    }

    #[test]
    fn test_find_ignore_case() {
        let dataset = Dataset::from_json_str(SAMPLE, "sample").unwrap();
        let record = dataset.find_ignore_case("  jio financial services ltd ").unwrap();
        assert_eq!(record.name, "Jio Financial Services Ltd");
        assert!(dataset.find_ignore_case("Jio").is_none());
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Dataset::load(dir.path().join("companies.json")).unwrap_err();
        assert!(matches!(err, InsightsError::FileAccess { .. }));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("companies.json");
        std::fs::File::create(&path)
            .unwrap()
            .write_all(SAMPLE.as_bytes())
            .unwrap();

        let dataset = Dataset::load(&path).unwrap();
        assert_eq!(dataset.len(), 2);
    }

    #[test]
    fn test_malformed_json() {
        let err = Dataset::from_json_str("{ not json", "broken").unwrap_err();
        assert!(matches!(err, InsightsError::Format { .. }));
    }

    #[test]
    fn test_wrong_shape() {
        let err = Dataset::from_json_str(r#"[{"company": "Acme Ltd"}]"#, "partial").unwrap_err();
        assert!(matches!(err, InsightsError::Format { .. }));
    }

    #[test]
    fn test_duplicate_company_rejected() {
        let json = r#"[
            {"company": "Acme Ltd", "date_added": "01 April 2010", "history": "", "insights": []},
            {"company": "Acme Ltd", "date_added": "01 April 2012", "history": "", "insights": []}
        ]"#;
        let err = Dataset::from_json_str(json, "dupes").unwrap_err();
        assert!(matches!(err, InsightsError::DuplicateCompany(name) if name == "Acme Ltd"));
    }
}
