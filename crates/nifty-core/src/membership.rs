//! Index membership classification
//!
//! Turns a company's join date into four statements: when it joined, then
//! whether it has been a member for at least 10 years, 5 years and 12 months.
//!
//! Durations use a fixed 365-day year; leap days are not accounted for. The
//! join date is taken at midnight and a threshold is met when it falls on or
//! before `now - years * 365 days`.

use crate::dataset::CompanyRecord;
use crate::error::{InsightsError, Result};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};
use serde::Serialize;

/// Format of `date_added`, e.g. `03 November 1995`
pub const DATE_FORMAT: &str = "%d %B %Y";

/// Length of a year for threshold arithmetic
pub const DAYS_PER_YEAR: i64 = 365;

/// Index display name used when none is configured
pub const DEFAULT_INDEX_NAME: &str = "NIFTY50";

/// Membership duration thresholds, in statement order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MembershipThreshold {
    TenYears,
    FiveYears,
    OneYear,
}

impl MembershipThreshold {
    /// All thresholds, longest first
    pub const ALL: [Self; 3] = [Self::TenYears, Self::FiveYears, Self::OneYear];

    pub fn years(self) -> i64 {
        match self {
            Self::TenYears => 10,
            Self::FiveYears => 5,
            Self::OneYear => 1,
        }
    }

    /// Human-readable duration used in statements
    pub fn label(self) -> &'static str {
        match self {
            Self::TenYears => "10 years",
            Self::FiveYears => "5 years",
            Self::OneYear => "12 months",
        }
    }

    /// Latest instant a company may have joined to meet this threshold
    pub fn cutoff(self, now: NaiveDateTime) -> NaiveDateTime {
        now - TimeDelta::days(self.years() * DAYS_PER_YEAR)
    }
}

/// Outcome of one threshold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ThresholdCheck {
    pub threshold: MembershipThreshold,
    pub is_member: bool,
}

/// Structured membership assessment for one company
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MembershipReport {
    pub company: String,
    pub index_name: String,
    /// `date_added` exactly as it appears in the dataset
    pub date_added: String,
    pub joined_on: NaiveDate,
    pub checks: [ThresholdCheck; 3],
}

impl MembershipReport {
    pub fn announcement(&self) -> String {
        format!(
            "{} is added to the {} list on {}",
            self.company, self.index_name, self.date_added
        )
    }

    /// Announcement followed by the 10-year, 5-year and 12-month statements
    pub fn statements(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(1 + self.checks.len());
        lines.push(self.announcement());
        for check in &self.checks {
            let verb = if check.is_member { "is" } else { "is not" };
            lines.push(format!(
                "It {verb} a part of {} list from last {}",
                self.index_name,
                check.threshold.label()
            ));
        }
        lines
    }
}

/// Parse a `date_added` value
pub fn parse_date_added(value: &str) -> std::result::Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT)
}

/// Classifies how long a company has been on the index
#[derive(Debug, Clone)]
pub struct MembershipClassifier {
    index_name: String,
}

impl Default for MembershipClassifier {
    fn default() -> Self {
        Self::new(DEFAULT_INDEX_NAME)
    }
}

impl MembershipClassifier {
    pub fn new(index_name: impl Into<String>) -> Self {
        Self {
            index_name: index_name.into(),
        }
    }

    pub fn index_name(&self) -> &str {
        &self.index_name
    }

    /// Assess `record` against every threshold relative to `now`
    pub fn assess(
        &self,
        name: &str,
        record: &CompanyRecord,
        now: NaiveDateTime,
    ) -> Result<MembershipReport> {
        let joined_on =
            parse_date_added(&record.date_added).map_err(|source| InsightsError::DateParse {
                company: name.to_string(),
                value: record.date_added.clone(),
                source,
            })?;
        let joined_at = joined_on.and_time(NaiveTime::MIN);

        let checks = MembershipThreshold::ALL.map(|threshold| ThresholdCheck {
            threshold,
            is_member: joined_at <= threshold.cutoff(now),
        });

        Ok(MembershipReport {
            company: name.to_string(),
            index_name: self.index_name.clone(),
            date_added: record.date_added.clone(),
            joined_on,
            checks,
        })
    }

    /// The four membership statements for `record` relative to `now`
    pub fn classify(
        &self,
        name: &str,
        record: &CompanyRecord,
        now: NaiveDateTime,
    ) -> Result<Vec<String>> {
        Ok(self.assess(name, record, now)?.statements())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 19)
            .unwrap()
            .and_hms_opt(14, 30, 0)
            .unwrap()
    }

    fn record(date_added: &str) -> CompanyRecord {
        CompanyRecord {
            name: "Acme Ltd".to_string(),
            date_added: date_added.to_string(),
            history: String::new(),
            insights: Vec::new(),
        }
    }

    fn days_before_now(days: i64) -> String {
        (now() - TimeDelta::days(days))
            .date()
            .format(DATE_FORMAT)
            .to_string()
    }

    #[test]
    fn test_statements_order_and_wording() {
        let classifier = MembershipClassifier::default();
        let lines = classifier
            .classify("Acme Ltd", &record("03 November 1995"), now())
            .unwrap();

        assert_eq!(
            lines,
            vec![
                "Acme Ltd is added to the NIFTY50 list on 03 November 1995",
                "It is a part of NIFTY50 list from last 10 years",
                "It is a part of NIFTY50 list from last 5 years",
                "It is a part of NIFTY50 list from last 12 months",
            ]
        );
    }

    #[test]
    fn test_recent_joiner() {
        let classifier = MembershipClassifier::default();
        let lines = classifier
            .classify("Acme Ltd", &record(&days_before_now(30)), now())
            .unwrap();

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[1], "It is not a part of NIFTY50 list from last 10 years");
        assert_eq!(lines[2], "It is not a part of NIFTY50 list from last 5 years");
        assert_eq!(lines[3], "It is not a part of NIFTY50 list from last 12 months");
    }

    #[test]
    fn test_ten_year_boundary_is_inclusive() {
        let classifier = MembershipClassifier::default();
        let report = classifier
            .assess("Acme Ltd", &record(&days_before_now(10 * 365)), now())
            .unwrap();

        assert_eq!(report.checks[0].threshold, MembershipThreshold::TenYears);
        assert!(report.checks[0].is_member);
    }

    #[test]
    fn test_one_day_short_of_ten_years() {
        let classifier = MembershipClassifier::default();
        let report = classifier
            .assess("Acme Ltd", &record(&days_before_now(10 * 365 - 1)), now())
            .unwrap();

        assert!(!report.checks[0].is_member);
        assert!(report.checks[1].is_member);
        assert!(report.checks[2].is_member);
    }

    #[test]
    fn test_fixed_length_years() {
        // 3650 days before 2026-10-19 is 2016-10-21, two leap days later than
        // a calendar-year subtraction would give.
        let classifier = MembershipClassifier::default();
        let report = classifier
            .assess("Acme Ltd", &record("20 October 2016"), now())
            .unwrap();
        assert!(report.checks[0].is_member);

        let report = classifier
            .assess("Acme Ltd", &record("22 October 2016"), now())
            .unwrap();
        assert!(!report.checks[0].is_member);
    }

    #[test]
    fn test_classify_is_deterministic() {
        let classifier = MembershipClassifier::new("SENSEX");
        let rec = record("15 June 2019");
        let first = classifier.classify("Acme Ltd", &rec, now()).unwrap();
        let second = classifier.classify("Acme Ltd", &rec, now()).unwrap();
        assert_eq!(first, second);
        assert!(first[0].contains("SENSEX"));
    }

    #[test]
    fn test_malformed_date() {
        let classifier = MembershipClassifier::default();
        let err = classifier
            .classify("Acme Ltd", &record("2019-06-15"), now())
            .unwrap_err();
        assert!(matches!(
            err,
            InsightsError::DateParse { company, value, .. }
                if company == "Acme Ltd" && value == "2019-06-15"
        ));
    }

    #[test]
    fn test_shipped_dataset_classifies() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/../../companies.json");
        let dataset = crate::dataset::Dataset::load(path).unwrap();
        assert!(!dataset.is_empty());

        let classifier = MembershipClassifier::default();
        for company in dataset.companies() {
            let lines = classifier.classify(&company.name, company, now()).unwrap();
            assert_eq!(lines.len(), 4, "{}", company.name);
            assert_eq!(
                lines[0],
                format!("{} is added to the NIFTY50 list on {}", company.name, company.date_added)
            );
            for (line, label) in lines[1..].iter().zip(["10 years", "5 years", "12 months"]) {
                assert!(line.starts_with("It is "), "{line}");
                assert!(line.ends_with(&format!("part of NIFTY50 list from last {label}")), "{line}");
            }
        }
    }
}
