//! jumia-crawler - Polite, sequential product listing scraper
//!
//! Fetches Jumia category pages with an honest bot identity, extracts
//! name/price/rating from each product card, and saves them as CSV.

pub mod commands;
pub mod config;
pub mod error;
pub mod export;
pub mod format;
pub mod jumia;

pub use config::{Config, RequestIdentity};
pub use error::{ExportError, FetchError};
pub use jumia::ProductRecord;
