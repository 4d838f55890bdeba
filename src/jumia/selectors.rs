//! CSS selectors for Jumia category pages.
//!
//! This is the whole markup contract with the site. When Jumia changes its
//! HTML, extraction silently degrades to placeholders: capture a fresh page,
//! update the selectors here, and refresh `tests/fixtures/category_page.html`.

use scraper::Selector;
use std::sync::LazyLock;

fn compile(css: &str) -> Selector {
    Selector::parse(css).unwrap_or_else(|e| panic!("invalid selector {css:?}: {e}"))
}

/// Product card: `<article class="prd _fb col c-prd">`.
pub static PRODUCT_CARD: LazyLock<Selector> =
    LazyLock::new(|| compile("article.prd._fb.col.c-prd"));

/// Product name: `<h3 class="name">`.
pub static NAME: LazyLock<Selector> = LazyLock::new(|| compile("h3.name"));

/// Displayed price: `<div class="prc">`.
pub static PRICE: LazyLock<Selector> = LazyLock::new(|| compile("div.prc"));

/// Star rating block: `<div class="stars">`.
pub static RATING: LazyLock<Selector> = LazyLock::new(|| compile("div.stars"));
