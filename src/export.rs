//! CSV export of scraped records.

use crate::error::ExportError;
use crate::jumia::ProductRecord;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tracing::info;

/// Column header, in field order.
pub const HEADER: [&str; 3] = ["Nom", "Prix", "Avis"];

/// Writes the header row followed by one row per record.
///
/// The header is written explicitly so an empty record set still produces it.
pub fn write_records<W: Write>(records: &[ProductRecord], writer: W) -> Result<(), ExportError> {
    let mut wtr = csv::WriterBuilder::new().has_headers(false).from_writer(writer);

    wtr.write_record(HEADER)?;
    for record in records {
        wtr.serialize(record)?;
    }

    wtr.flush()?;
    Ok(())
}

/// Writes records to `path` as UTF-8 CSV, truncating any existing file.
///
/// Not atomic: a failure midway leaves a partial file behind.
pub fn write_csv(records: &[ProductRecord], path: impl AsRef<Path>) -> Result<(), ExportError> {
    let path = path.as_ref();
    let file = File::create(path)
        .map_err(|source| ExportError::Create { path: path.to_path_buf(), source })?;

    write_records(records, file)?;

    info!("Saved {} products to '{}'", records.len(), path.display());
    Ok(())
}
