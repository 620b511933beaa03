//! Error types for company insight operations

use std::path::PathBuf;
use thiserror::Error;

/// Company insight errors
#[derive(Debug, Error)]
pub enum InsightsError {
    /// Dataset file missing or unreadable
    #[error("Failed to read dataset {}: {source}", .path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Dataset content is not a well-formed company list
    #[error("Malformed dataset {origin}: {source}")]
    Format {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    /// Two records share the same company name
    #[error("Duplicate company in dataset: {0}")]
    DuplicateCompany(String),

    /// A record's join date does not match `DD Month YYYY`
    #[error("Invalid date_added '{value}' for {company}: {source}")]
    DateParse {
        company: String,
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    /// Company name outside the loaded dataset
    #[error("Company not found: {0}")]
    NotFound(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// News lookup failed
    #[error(transparent)]
    News(#[from] NewsError),
}

/// Per-request news lookup errors
///
/// These are the `Err` side of [`NewsResult`](crate::news::NewsResult) and are
/// rendered inline in place of the news list.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NewsError {
    /// No API key was configured
    #[error("GNEWS_API_KEY is missing; set it in the environment or a .env file.")]
    MissingApiKey,

    /// Network, DNS, timeout or non-2xx status
    #[error("Failed to fetch data: {0}")]
    Transport(String),

    /// Response body was not the expected JSON
    #[error("Failed to parse JSON response.")]
    Parse,
}

impl NewsError {
    /// Build a transport error from a reqwest failure.
    ///
    /// The URL is stripped because its query string carries the API key. The
    /// reason includes every underlying cause, e.g. the refused connection or
    /// timeout behind reqwest's "error sending request".
    pub fn transport(err: reqwest::Error) -> Self {
        NewsError::Transport(error_chain(&err.without_url()))
    }
}

/// Join an error and its `source()` chain with `": "`
fn error_chain(err: &dyn std::error::Error) -> String {
    let mut reason = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let message = cause.to_string();
        if !reason.ends_with(&message) {
            reason.push_str(": ");
            reason.push_str(&message);
        }
        source = cause.source();
    }
    reason
}

/// Result type alias for insight operations
pub type Result<T> = std::result::Result<T, InsightsError>;
