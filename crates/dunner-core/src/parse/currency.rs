//! Document-wide currency fallback.

use super::amount::line_currency;
use super::lines::Line;

/// First currency code or symbol anywhere in the document.
///
/// Only consulted when the amount line itself carried no currency.
pub fn locate(lines: &[Line]) -> Option<String> {
    lines.iter().find_map(|line| line_currency(&line.text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::lines::normalize;

    #[test]
    fn test_first_currency_in_document_order() {
        let lines = normalize("Alle Preise in CHF\nGesamt: 200,00 EUR");
        assert_eq!(locate(&lines), Some("CHF".to_string()));
    }

    #[test]
    fn test_symbol_fallback() {
        let lines = normalize("Betrag\n99,00 £");
        assert_eq!(locate(&lines), Some("GBP".to_string()));
    }

    #[test]
    fn test_absent() {
        let lines = normalize("keine Währung erwähnt");
        assert_eq!(locate(&lines), None);
    }
}
