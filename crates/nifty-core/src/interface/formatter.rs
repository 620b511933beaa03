//! Page formatting

use crate::engine::{CompanyPage, NewsSection};
use crate::error::{InsightsError, Result};
use std::str::FromStr;

/// Shown when a lookup succeeded but found no articles
pub const NO_NEWS_MESSAGE: &str = "No recent news found for the specified query.";

/// Shown when news was not requested
pub const NEWS_SKIPPED_MESSAGE: &str = "News lookup skipped.";

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Markdown,
    Json,
}

impl FromStr for OutputFormat {
    type Err = InsightsError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "text" | "plain" => Ok(Self::Text),
            "markdown" | "md" => Ok(Self::Markdown),
            "json" => Ok(Self::Json),
            other => Err(InsightsError::ConfigError(format!(
                "Unknown output format: {other}"
            ))),
        }
    }
}

pub trait Formatter: Send + Sync {
    fn format(&self) -> OutputFormat;
    fn format_page(&self, page: &CompanyPage) -> String;
    fn format_error(&self, error: &str) -> String;
}

fn bullets(lines: &[String]) -> String {
    lines
        .iter()
        .map(|line| format!("- {line}\n"))
        .collect()
}

fn news_lines(news: &NewsSection) -> String {
    match news {
        NewsSection::Items { items } if items.is_empty() => format!("- {NO_NEWS_MESSAGE}\n"),
        NewsSection::Items { items } => items
            .iter()
            .map(|item| format!("- {}\n    - {}\n", item.summary, item.link))
            .collect(),
        NewsSection::Failed { message } => format!("- {message}\n"),
        NewsSection::Skipped => format!("- {NEWS_SKIPPED_MESSAGE}\n"),
    }
}

fn underline(title: &str) -> String {
    format!("{title}\n{}\n", "=".repeat(title.chars().count()))
}

pub struct TextFormatter;

impl Formatter for TextFormatter {
    fn format(&self) -> OutputFormat {
        OutputFormat::Text
    }

    fn format_page(&self, page: &CompanyPage) -> String {
        let mut output = String::new();
        output.push_str(&underline(&page.company));
        output.push('\n');

        output.push_str(&underline("Company History"));
        output.push_str(&page.history);
        output.push_str("\n\n");

        output.push_str(&underline(&format!("{} History", page.index_name)));
        output.push_str(&bullets(&page.membership));
        output.push('\n');

        output.push_str(&underline("Financial Insights"));
        output.push_str(&bullets(&page.insights));
        output.push('\n');

        output.push_str(&underline("Company News"));
        output.push_str(&news_lines(&page.news));
        output
    }

    fn format_error(&self, error: &str) -> String {
        format!("Error: {error}")
    }
}

pub struct MarkdownFormatter;

impl Formatter for MarkdownFormatter {
    fn format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }

    fn format_page(&self, page: &CompanyPage) -> String {
        format!(
            "# {} Company Insights\n\n\
             **{}**\n\n\
             ## Company History\n\n{}\n\n\
             ## {} History\n\n{}\n\
             ## Financial Insights\n\n{}\n\
             ## Company News\n\n{}",
            page.index_name,
            page.company,
            page.history,
            page.index_name,
            bullets(&page.membership),
            bullets(&page.insights),
            news_lines(&page.news),
        )
    }

    fn format_error(&self, error: &str) -> String {
        format!("> **Error:** {error}")
    }
}

pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn format(&self) -> OutputFormat {
        OutputFormat::Json
    }

    fn format_page(&self, page: &CompanyPage) -> String {
        serde_json::to_string_pretty(page)
            .unwrap_or_else(|e| self.format_error(&format!("Failed to serialize page: {e}")))
    }

    fn format_error(&self, error: &str) -> String {
        serde_json::json!({ "error": error }).to_string()
    }
}

pub struct FormatterFactory;

impl FormatterFactory {
    pub fn create(format: OutputFormat) -> Box<dyn Formatter> {
        match format {
            OutputFormat::Text => Box::new(TextFormatter),
            OutputFormat::Markdown => Box::new(MarkdownFormatter),
            OutputFormat::Json => Box::new(JsonFormatter),
        }
    }
}
