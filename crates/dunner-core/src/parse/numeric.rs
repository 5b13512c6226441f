//! Numeric token normalization.
//!
//! Invoice amounts arrive in either convention (`1.234,56` German,
//! `1,234.56` English) with optional space or apostrophe grouping; the
//! normalizer resolves the separators without locale configuration.

use rust_decimal::Decimal;
use std::str::FromStr;

/// A normalized numeric token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedNumber {
    /// Canonical text, `.` as the decimal point, no grouping.
    pub text: String,
    /// Parsed value; `None` when the token did not survive parsing.
    pub value: Option<Decimal>,
}

/// Normalize a raw numeric token.
///
/// Space and apostrophe are always grouping. When both `,` and `.`
/// appear, the rightmost of the two is the decimal point and the other
/// is stripped. A single separator type is a decimal point only when its
/// last occurrence is followed by exactly 1-2 trailing digits; otherwise
/// every occurrence is grouping.
pub fn normalize_numeric(token: &str) -> NormalizedNumber {
    let cleaned: String = token
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == ',' || *c == '.')
        .collect();

    let comma = cleaned.rfind(',');
    let dot = cleaned.rfind('.');

    let text = match (comma, dot) {
        (Some(c), Some(d)) if c > d => cleaned.replace('.', "").replace(',', "."),
        (Some(_), Some(_)) => cleaned.replace(',', ""),
        (Some(_), None) => resolve_single(&cleaned, ','),
        (None, Some(_)) => resolve_single(&cleaned, '.'),
        (None, None) => cleaned,
    };

    let value = Decimal::from_str(&text).ok();
    NormalizedNumber { text, value }
}

fn resolve_single(cleaned: &str, separator: char) -> String {
    let last = cleaned.rfind(separator).unwrap_or(0);
    let tail = &cleaned[last + 1..];
    let is_decimal =
        (1..=2).contains(&tail.len()) && tail.chars().all(|c| c.is_ascii_digit());

    if is_decimal {
        // Earlier occurrences are grouping, the last one is the point.
        let head: String = cleaned[..last].chars().filter(|c| *c != separator).collect();
        format!("{}.{}", head, tail)
    } else {
        cleaned.chars().filter(|c| *c != separator).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn norm(token: &str) -> String {
        normalize_numeric(token).text
    }

    #[test]
    fn test_both_separators_german() {
        assert_eq!(norm("1.234,56"), "1234.56");
    }

    #[test]
    fn test_both_separators_english() {
        assert_eq!(norm("1,234.56"), "1234.56");
    }

    #[test]
    fn test_single_comma_decimal() {
        assert_eq!(norm("119,00"), "119.00");
        assert_eq!(norm("0,5"), "0.5");
    }

    #[test]
    fn test_single_comma_grouping() {
        assert_eq!(norm("1,234"), "1234");
        assert_eq!(norm("12,345,678"), "12345678");
    }

    #[test]
    fn test_single_dot_decimal() {
        assert_eq!(norm("99.90"), "99.90");
    }

    #[test]
    fn test_single_dot_grouping() {
        assert_eq!(norm("1.234"), "1234");
    }

    #[test]
    fn test_space_and_apostrophe_grouping() {
        assert_eq!(norm("1 234,56"), "1234.56");
        assert_eq!(norm("1'234.56"), "1234.56");
    }

    #[test]
    fn test_plain_integer() {
        let n = normalize_numeric("4711");
        assert_eq!(n.text, "4711");
        assert_eq!(n.value, Some(Decimal::from(4711)));
    }

    #[test]
    fn test_unparseable_keeps_text() {
        let n = normalize_numeric("..");
        assert_eq!(n.value, None);
    }
}
