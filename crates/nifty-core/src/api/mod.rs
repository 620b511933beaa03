//! API clients for news providers

pub mod gnews;

pub use gnews::GNewsClient;
