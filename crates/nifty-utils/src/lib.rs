//! Shared utilities for nifty-insights
//!
//! This crate provides common functionality used across the workspace,
//! including logging setup, `.env` loading, and application-level configuration.

pub mod config;
pub mod env;
pub mod logging;

pub use config::AppConfig;
pub use env::load_dotenv;
pub use logging::{LogFormat, init_tracing};
