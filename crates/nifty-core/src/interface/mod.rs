//! Presentation helpers
//!
//! Renders engine output for terminals, markdown viewers and JSON consumers.

pub mod formatter;
pub mod listing;

pub use formatter::{Formatter, FormatterFactory, OutputFormat};
pub use listing::company_table;
