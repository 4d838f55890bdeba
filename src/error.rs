//! Typed errors for the fetch and export seams.

use std::path::PathBuf;
use thiserror::Error;

/// A failed page fetch. Never fatal: the paginator treats it as an empty page.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid URL (expected absolute http/https): {0}")]
    InvalidUrl(String),

    #[error("request failed: {0}")]
    Request(#[source] wreq::Error),

    #[error("request failed with status: {0}")]
    Status(u16),

    #[error("failed to read response body: {0}")]
    Body(#[source] wreq::Error),
}

/// A failed CSV export. Fatal for the CLI.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to create output file {}: {source}", .path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("failed to flush CSV output: {0}")]
    Io(#[from] std::io::Error),
}
