//! Price text normalization.

/// Currency token shown on Jumia West Africa listings.
pub const CURRENCY_TOKEN: &str = "FCFA";

/// Converts listing price text (e.g. `"1 000 FCFA"`) into a number.
///
/// Removes the currency token and every whitespace character (the site uses
/// NBSP as thousands separator), then parses the remainder as `f64`.
/// Empty or non-numeric input yields `0.0`; whatever `f64::from_str` accepts
/// is accepted, including signs and exponents.
pub fn normalize_price(raw: &str) -> f64 {
    let cleaned: String =
        raw.replace(CURRENCY_TOKEN, "").chars().filter(|c| !c.is_whitespace()).collect();

    if cleaned.is_empty() {
        return 0.0;
    }

    cleaned.parse().unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_grouped_digits() {
        assert_eq!(normalize_price("1 000 FCFA"), 1000.0);
        assert_eq!(normalize_price("10 000 FCFA"), 10000.0);
        assert_eq!(normalize_price("  125 900 FCFA  "), 125900.0);
        assert_eq!(normalize_price("FCFA 2 500"), 2500.0);
    }

    #[test]
    fn test_normalize_non_breaking_spaces() {
        assert_eq!(normalize_price("45\u{a0}000\u{a0}FCFA"), 45000.0);
        assert_eq!(normalize_price("3\u{202f}999\tFCFA\n"), 3999.0);
    }

    #[test]
    fn test_normalize_decimal() {
        assert_eq!(normalize_price("99.5 FCFA"), 99.5);
        assert_eq!(normalize_price("0"), 0.0);
    }

    #[test]
    fn test_normalize_malformed() {
        assert_eq!(normalize_price(""), 0.0);
        assert_eq!(normalize_price("FCFA"), 0.0);
        assert_eq!(normalize_price("abc"), 0.0);
        assert_eq!(normalize_price("   "), 0.0);
        // Comma separators are not stripped
        assert_eq!(normalize_price("1,000 FCFA"), 0.0);
        // Ranges are not numeric after stripping
        assert_eq!(normalize_price("10 000 FCFA - 12 000 FCFA"), 0.0);
    }

    #[test]
    fn test_normalize_accepts_what_the_float_parser_accepts() {
        assert_eq!(normalize_price("-5 FCFA"), -5.0);
        assert_eq!(normalize_price("1e3 FCFA"), 1000.0);
    }
}
