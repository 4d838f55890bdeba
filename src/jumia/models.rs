//! Product records extracted from category listing pages.

use serde::Serialize;

/// Substituted when a card has no name element.
pub const UNKNOWN_NAME: &str = "unknown name";

/// Substituted when a card has no rating element.
pub const NO_RATING: &str = "no rating";

/// One product card, as written to the CSV output.
///
/// Fields are private: a record is built once by the extractor and only read
/// afterwards. `price` is always finite and non-negative.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductRecord {
    #[serde(rename = "Nom")]
    name: String,
    #[serde(rename = "Prix")]
    price: f64,
    #[serde(rename = "Avis")]
    rating: String,
}

impl ProductRecord {
    /// Creates a record. A negative or non-finite price is stored as `0.0`.
    pub fn new(name: impl Into<String>, price: f64, rating: impl Into<String>) -> Self {
        let price = if price.is_finite() && price >= 0.0 { price } else { 0.0 };
        Self { name: name.into(), price, rating: rating.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn rating(&self) -> &str {
        &self.rating
    }
}
