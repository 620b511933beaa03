//! Command-line viewer for NIFTY50 company insights
//!
//! Usage:
//!   nifty-insights                       # interactive selector
//!   nifty-insights --list                # print the numbered listing
//!   nifty-insights --company "Tata Steel Ltd" --format markdown
//!
//! Requires `GNEWS_API_KEY` (environment or `.env`) for the news section.

mod app;
mod commands;

use anyhow::Context;
use app::{App, Clock};
use chrono::NaiveDate;
use clap::Parser;
use nifty_core::interface::{FormatterFactory, OutputFormat};
use nifty_core::{Dataset, InsightsEngine, NewsConfig};
use nifty_utils::env::load_dotenv_from;
use nifty_utils::{AppConfig, init_tracing, load_dotenv, logging::DEFAULT_FILTER};
use std::io;
use std::path::PathBuf;
use tracing::{debug, info, warn};

#[derive(Parser, Debug)]
#[command(name = "nifty-insights")]
#[command(about = "History, index membership, insights and news for NIFTY50 companies", long_about = None)]
struct Args {
    /// Company dataset (JSON array); overrides NIFTY_DATA_PATH
    #[arg(short, long)]
    data: Option<PathBuf>,

    /// Render a single company and exit
    #[arg(short, long)]
    company: Option<String>,

    /// Print the company listing and exit
    #[arg(short, long)]
    list: bool,

    /// Output format: text, markdown or json
    #[arg(short, long, default_value = "text")]
    format: OutputFormat,

    /// Evaluate membership as of this date (YYYY-MM-DD) instead of today
    #[arg(long)]
    as_of: Option<NaiveDate>,

    /// Skip the live news lookup
    #[arg(long)]
    no_news: bool,

    /// Index display name; overrides NIFTY_INDEX_NAME
    #[arg(long)]
    index_name: Option<String>,

    /// Load environment variables from this file instead of searching for `.env`
    #[arg(long)]
    env_file: Option<PathBuf>,
}

const BANNER_LINES: [&str; 4] = [
    "Type a number or company name to view its page.",
    "  /list   - Show all companies",
    "  /help   - Show help",
    "  /exit   - Exit",
];

/// Boxed welcome banner, sized to fit the title
fn banner(index_name: &str) -> String {
    let title = format!("{index_name} Company Insights");
    let width = BANNER_LINES
        .iter()
        .map(|line| line.chars().count())
        .chain([title.chars().count()])
        .max()
        .unwrap_or(0)
        + 4;
    let inner = width - 2;
    let border = "═".repeat(width);

    let mut out = format!("╔{border}╗\n║{title:^width$}║\n║{:width$}║\n", "");
    for line in BANNER_LINES {
        out.push_str(&format!("║  {line:<inner$}║\n"));
    }
    out.push_str(&format!("╚{border}╝"));
    out
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let env_file = match &args.env_file {
        Some(path) => load_dotenv_from(path),
        None => load_dotenv(),
    };
    let mut config = AppConfig::from_env();
    init_tracing(DEFAULT_FILTER, config.log_format);
    match env_file {
        Ok(Some(path)) => info!(path = %path.display(), "Loaded environment file"),
        Ok(None) if args.env_file.is_some() => warn!("Environment file not found"),
        Ok(None) => debug!("No environment file found"),
        Err(e) => warn!(error = %e, "Ignoring malformed environment file"),
    }

    if let Some(path) = args.data {
        config.data_path = path;
    }
    if let Some(name) = args.index_name {
        config.index_name = name;
    }

    let dataset = Dataset::load(&config.data_path)
        .with_context(|| format!("Cannot start without a company dataset ({})", config.data_path.display()))?;
    if dataset.is_empty() {
        warn!(path = %config.data_path.display(), "Company dataset is empty");
    }

    let news_config = NewsConfig::builder().with_env_api_key().build()?;
    if news_config.api_key.is_none() && !args.no_news {
        warn!("GNEWS_API_KEY is not set; the news section will report the missing key");
    }

    let engine = InsightsEngine::with_gnews(dataset, &config.index_name, news_config)?;
    let clock = args
        .as_of
        .map_or(Clock::System, |date| Clock::Fixed(date.and_time(chrono::NaiveTime::MIN)));
    let app = App::new(
        engine,
        FormatterFactory::create(args.format),
        clock,
        !args.no_news,
    );

    if args.list {
        println!("{}", app.listing());
        return Ok(());
    }

    if let Some(company) = args.company {
        let output = app.render_named(&company).await?;
        println!("{output}");
        return Ok(());
    }

    println!("\n{}\n", banner(&config.index_name));
    info!(
        app = %config.app_name,
        companies = app.engine().dataset().len(),
        "Starting interactive session"
    );
    app.run_repl(io::stdin().lock(), io::stdout()).await?;

    Ok(())
}
