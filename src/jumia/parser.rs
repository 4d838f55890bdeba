//! HTML parsing and record extraction for Jumia category pages.

use crate::jumia::models::{ProductRecord, NO_RATING, UNKNOWN_NAME};
use crate::jumia::price::normalize_price;
use crate::jumia::selectors;
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, trace};

/// Parses a raw response body. An empty body yields an empty document.
pub fn parse_document(raw: &str) -> Html {
    Html::parse_document(raw)
}

/// Returns every product card in document order.
pub fn product_cards(document: &Html) -> Vec<ElementRef<'_>> {
    document.select(&selectors::PRODUCT_CARD).collect()
}

/// Returns the trimmed text of the first `selector` match under `node`,
/// or `default` when nothing matches.
pub fn lookup_text(node: ElementRef<'_>, selector: &Selector, default: &str) -> String {
    match node.select(selector).next() {
        Some(element) => element.text().collect::<String>().trim().to_string(),
        None => default.to_string(),
    }
}

/// Builds one record per product card, substituting placeholders for
/// missing sub-elements.
pub fn extract(nodes: &[ElementRef<'_>]) -> Vec<ProductRecord> {
    nodes
        .iter()
        .map(|&node| {
            let name = lookup_text(node, &selectors::NAME, UNKNOWN_NAME);
            let raw_price = lookup_text(node, &selectors::PRICE, "");
            let rating = lookup_text(node, &selectors::RATING, NO_RATING);

            trace!("Card: {:?} / {:?} / {:?}", name, raw_price, rating);

            ProductRecord::new(name, normalize_price(&raw_price), rating)
        })
        .collect()
}

/// Parses a page body and extracts its records.
///
/// Returns owned data so callers never hold the (non-`Send`) document across
/// an await point.
pub fn extract_page(raw: &str) -> Vec<ProductRecord> {
    let document = parse_document(raw);
    let cards = product_cards(&document);
    let records = extract(&cards);

    debug!("Extracted {} products", records.len());
    records
}
