//! Application-level configuration

use crate::logging::LogFormat;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable overriding the dataset location
pub const DATA_PATH_ENV: &str = "NIFTY_DATA_PATH";
/// Environment variable overriding the index display name
pub const INDEX_NAME_ENV: &str = "NIFTY_INDEX_NAME";
/// Environment variable selecting `pretty` or `json` log lines
pub const LOG_FORMAT_ENV: &str = "NIFTY_LOG_FORMAT";

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application name
    pub app_name: String,
    /// Path of the static company dataset
    pub data_path: PathBuf,
    /// Display name of the tracked index
    pub index_name: String,
    /// Log line encoding
    pub log_format: LogFormat,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            app_name: "nifty-insights".to_string(),
            data_path: PathBuf::from("companies.json"),
            index_name: "NIFTY50".to_string(),
            log_format: LogFormat::default(),
        }
    }
}

impl AppConfig {
    /// Build a config from defaults overridden by environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            data_path: lookup(DATA_PATH_ENV)
                .filter(|v| !v.trim().is_empty())
                .map_or(defaults.data_path, PathBuf::from),
            index_name: lookup(INDEX_NAME_ENV)
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.index_name),
            log_format: lookup(LOG_FORMAT_ENV)
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.log_format),
            ..defaults
        }
    }
}
