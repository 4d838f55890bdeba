//! Scrape command: single-page and paginated category extraction.

use crate::config::Config;
use crate::export::write_csv;
use crate::format::Formatter;
use crate::jumia::{extract_page, JumiaClient, PageFetcher, ProductRecord};
use anyhow::{Context, Result};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info};

/// Builds the URL for page `page` of a category listing.
pub fn page_url(base_url: &str, page: u32) -> String {
    let sep = if base_url.contains('?') { '&' } else { '?' };
    format!("{}{}page={}", base_url, sep, page)
}

/// Drives fetch → parse → extract over one or more pages.
pub struct ScrapeCommand {
    config: Config,
}

impl ScrapeCommand {
    /// Creates a new scrape command.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Creates the HTTP client for this command's configuration.
    pub fn client(&self) -> Result<JumiaClient> {
        let client = JumiaClient::new(&self.config).context("Failed to create HTTP client")?;

        let identity = client.identity();
        debug!("Identifying as {:?} (From: {})", identity.user_agent, identity.contact);
        Ok(client)
    }

    /// Fetches and extracts a single page. A failed fetch yields no records.
    pub async fn scrape_page(&self, client: &impl PageFetcher, url: &str) -> Vec<ProductRecord> {
        match client.fetch(url).await {
            Some(body) => extract_page(&body),
            None => Vec::new(),
        }
    }

    /// Scrapes pages `1..=page_count` of `base_url`, strictly one at a time,
    /// sleeping the configured delay after each page.
    ///
    /// Empty or failed pages still count and still incur the delay.
    pub async fn scrape_range(
        &self,
        client: &impl PageFetcher,
        base_url: &str,
        page_count: u32,
    ) -> Vec<ProductRecord> {
        let delay = Duration::from_millis(self.config.delay_ms);
        let mut all_records = Vec::new();

        for page in 1..=page_count {
            info!("Scraping page {}/{}...", page, page_count);

            let url = page_url(base_url, page);
            let records = self.scrape_page(client, &url).await;
            debug!("Page {} yielded {} products", page, records.len());

            all_records.extend(records);

            let is_last = page == page_count;
            if !delay.is_zero() && !(is_last && self.config.skip_final_delay) {
                debug!("Delaying {}ms", delay.as_millis());
                tokio::time::sleep(delay).await;
            }
        }

        info!("Collected {} products from {} pages", all_records.len(), page_count);
        all_records
    }

    /// Single-page flow: scrapes the category's first page, writes `output`,
    /// and returns a preview of the first `preview` records.
    ///
    /// Write failures are fatal and returned as errors.
    pub async fn execute_page(
        &self,
        client: &impl PageFetcher,
        output: &Path,
        preview: usize,
    ) -> Result<String> {
        let url = self.config.category_url();
        info!("Scraping {}", url);

        let records = self.scrape_page(client, &url).await;
        write_csv(&records, output)
            .with_context(|| format!("Failed to save products to {}", output.display()))?;

        let shown = &records[..preview.min(records.len())];
        Ok(Formatter::new(self.config.format).format_records(shown))
    }

    /// Multi-page flow: scrapes `pages` pages of the category and writes
    /// `output`. Returns the number of records written.
    pub async fn execute_pages(
        &self,
        client: &impl PageFetcher,
        pages: u32,
        output: &Path,
    ) -> Result<usize> {
        let records = self.scrape_range(client, &self.config.category_url(), pages).await;
        write_csv(&records, output)
            .with_context(|| format!("Failed to save products to {}", output.display()))?;

        Ok(records.len())
    }
}
