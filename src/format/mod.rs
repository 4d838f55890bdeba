//! Console output formatting for records (table, JSON, CSV).

use crate::config::OutputFormat;
use crate::export;
use crate::jumia::price::CURRENCY_TOKEN;
use crate::jumia::ProductRecord;

/// Formats records for terminal output.
pub struct Formatter {
    format: OutputFormat,
}

impl Formatter {
    /// Creates a new formatter.
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Formats a list of records.
    pub fn format_records(&self, records: &[ProductRecord]) -> String {
        if records.is_empty() {
            return match self.format {
                OutputFormat::Json => "[]".to_string(),
                OutputFormat::Csv => export::HEADER.join(","),
                OutputFormat::Table => "No products found.".to_string(),
            };
        }

        match self.format {
            OutputFormat::Table => self.table_records(records),
            OutputFormat::Json => self.json_records(records),
            OutputFormat::Csv => self.csv_records(records),
        }
    }

    fn table_records(&self, records: &[ProductRecord]) -> String {
        let separator = "-".repeat(30);
        let mut lines = Vec::new();

        for record in records {
            lines.push(format!("Nom : {}", record.name()));
            lines.push(format!("Prix : {:?} {}", record.price(), CURRENCY_TOKEN));
            lines.push(format!("Avis : {}", record.rating()));
            lines.push(separator.clone());
        }

        lines.join("\n")
    }

    fn json_records(&self, records: &[ProductRecord]) -> String {
        serde_json::to_string_pretty(records).unwrap_or_else(|_| "[]".to_string())
    }

    fn csv_records(&self, records: &[ProductRecord]) -> String {
        let mut buf = Vec::new();
        match export::write_records(records, &mut buf) {
            Ok(()) => String::from_utf8_lossy(&buf).trim_end().to_string(),
            Err(_) => export::HEADER.join(","),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records() -> Vec<ProductRecord> {
        vec![
            ProductRecord::new("Phone A", 10000.0, "4.5 out of 5"),
            ProductRecord::new("Phone B", 2500.0, "no rating"),
        ]
    }

    #[test]
    fn test_table_preview() {
        let output = Formatter::new(OutputFormat::Table).format_records(&records());
        let lines: Vec<_> = output.lines().collect();

        assert_eq!(lines[0], "Nom : Phone A");
        assert_eq!(lines[1], "Prix : 10000.0 FCFA");
        assert_eq!(lines[5], "Prix : 2500.0 FCFA");
        assert_eq!(lines[2], "Avis : 4.5 out of 5");
        assert_eq!(lines[3], "-".repeat(30));
        assert_eq!(lines[6], "Avis : no rating");
        assert_eq!(lines.len(), 8);
    }

    #[test]
    fn test_json_output() {
        let output = Formatter::new(OutputFormat::Json).format_records(&records());
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(parsed[0]["Nom"], "Phone A");
        assert_eq!(parsed[0]["Prix"], 10000.0);
        assert_eq!(parsed[1]["Avis"], "no rating");
    }

    #[test]
    fn test_csv_output() {
        let output = Formatter::new(OutputFormat::Csv).format_records(&records());
        assert_eq!(
            output,
            "Nom,Prix,Avis\nPhone A,10000.0,4.5 out of 5\nPhone B,2500.0,no rating"
        );
    }

    #[test]
    fn test_empty_records() {
        assert_eq!(Formatter::new(OutputFormat::Table).format_records(&[]), "No products found.");
        assert_eq!(Formatter::new(OutputFormat::Json).format_records(&[]), "[]");
        assert_eq!(Formatter::new(OutputFormat::Csv).format_records(&[]), "Nom,Prix,Avis");
    }
}
