//! Jumia-specific modules for HTTP fetching, parsing, and data models.

pub mod client;
pub mod models;
pub mod parser;
pub mod price;
pub mod selectors;

pub use client::{JumiaClient, PageFetcher};
pub use models::{ProductRecord, NO_RATING, UNKNOWN_NAME};
pub use parser::{extract, extract_page, lookup_text, parse_document, product_cards};
pub use price::normalize_price;
