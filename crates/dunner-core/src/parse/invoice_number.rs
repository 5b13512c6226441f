//! Invoice number location.

use tracing::debug;

use super::lines::Line;
use super::patterns::{INVOICE_NUMBER, INVOICE_NUMBER_TOKEN};

/// Find the invoice number.
///
/// Lines are scanned top-to-bottom and the first match wins: invoice
/// numbers conventionally sit near the top of the document, so this is
/// deliberately not a best-candidate search. When no line matches, the
/// file name is tried with the same keyword pattern, then with the bare
/// token pattern (file names like `RE-2024-001.pdf` carry no keyword).
pub fn locate(lines: &[Line], file_name: Option<&str>) -> Option<String> {
    for line in lines {
        if let Some(caps) = INVOICE_NUMBER.captures(&line.text) {
            let number = caps[1].trim_end_matches('.').to_string();
            debug!(line = line.index, number = %number, "invoice number matched in text");
            return Some(number);
        }
    }

    let stem = file_name.map(strip_extension)?;

    if let Some(caps) = INVOICE_NUMBER.captures(stem) {
        return Some(caps[1].trim_end_matches('.').to_string());
    }

    INVOICE_NUMBER_TOKEN
        .find(stem)
        .map(|m| m.as_str().trim_end_matches('.').to_string())
}

fn strip_extension(file_name: &str) -> &str {
    match file_name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() && ext.chars().all(|c| c.is_ascii_alphanumeric()) => {
            stem
        }
        _ => file_name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::lines::normalize;

    #[test]
    fn test_first_match_wins() {
        let lines = normalize("Rechnungsnummer: RE-100\nRechnung Nr. RE-200");
        assert_eq!(locate(&lines, None), Some("RE-100".to_string()));
    }

    #[test]
    fn test_trailing_dot_trimmed() {
        let lines = normalize("Invoice no. 2024/001.");
        assert_eq!(locate(&lines, None), Some("2024/001".to_string()));
    }

    #[test]
    fn test_file_name_fallback() {
        let lines = normalize("Sehr geehrte Damen und Herren,");
        assert_eq!(
            locate(&lines, Some("RE-2024-001.pdf")),
            Some("RE-2024-001".to_string())
        );
    }

    #[test]
    fn test_file_name_with_keyword() {
        let lines = normalize("kein Treffer");
        assert_eq!(
            locate(&lines, Some("rechnung-4711.pdf")),
            Some("4711".to_string())
        );
    }

    #[test]
    fn test_absent_when_nothing_matches() {
        let lines = normalize("Lieferschein ohne Kennung");
        assert_eq!(locate(&lines, Some("scan.pdf")), None);
    }

    #[test]
    fn test_labeled_date_is_not_a_number() {
        let lines = normalize("Rechnungsdatum: gestern");
        assert_eq!(locate(&lines, None), None);
    }
}
