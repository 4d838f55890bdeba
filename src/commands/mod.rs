//! CLI command implementations.

pub mod scrape;

pub use scrape::{page_url, ScrapeCommand};
