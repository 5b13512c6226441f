//! Invoice date location with multi-format parsing.

use chrono::NaiveDate;
use tracing::debug;

use super::lines::Line;
use super::patterns::{contains_keyword, DATE_DMY, DATE_KEYWORDS, DATE_TOKEN, DATE_YMD};

/// Explicit formats, tried after the locale hint. chrono accepts
/// unpadded day/month digits, so `d.M.yyyy` and friends are covered.
/// `%Y` would happily read a two-digit year as year 24 AD, hence the
/// split on year width.
const EXPLICIT_FORMATS: &[&str] = &["%d.%m.%Y", "%d/%m/%Y", "%d-%m-%Y", "%Y-%m-%d", "%Y/%m/%d"];
const EXPLICIT_FORMATS_SHORT_YEAR: &[&str] = &["%d.%m.%y", "%d/%m/%y", "%d-%m-%y"];

/// Find the invoice date.
///
/// Pass 1 considers only lines carrying a date keyword; pass 2 falls
/// back to any date-shaped token in the document. A pass-1 result always
/// wins over a pass-2 result, even when the latter appears earlier in
/// the text.
pub fn locate(lines: &[Line], locale: Option<&str>) -> Option<NaiveDate> {
    for line in lines {
        if !contains_keyword(&line.text, DATE_KEYWORDS) {
            continue;
        }
        if let Some(date) = first_date_on_line(&line.text, locale) {
            debug!(line = line.index, %date, "keyword-anchored date");
            return Some(date);
        }
    }

    for line in lines {
        if let Some(date) = first_date_on_line(&line.text, locale) {
            debug!(line = line.index, %date, "unanchored fallback date");
            return Some(date);
        }
    }

    None
}

fn first_date_on_line(text: &str, locale: Option<&str>) -> Option<NaiveDate> {
    DATE_TOKEN
        .find_iter(text)
        .find_map(|token| parse_date_token(token.as_str(), locale))
}

/// Parse one date-shaped token: locale-hinted order first, then the
/// explicit format list, then a locale-agnostic generic parse.
pub fn parse_date_token(token: &str, locale: Option<&str>) -> Option<NaiveDate> {
    if let Some(locale) = locale {
        if let Some(date) = parse_with_locale(token, locale) {
            return Some(date);
        }
    }

    let formats = if has_short_year(token) {
        EXPLICIT_FORMATS_SHORT_YEAR
    } else {
        EXPLICIT_FORMATS
    };
    for format in formats {
        if let Ok(date) = NaiveDate::parse_from_str(token, format) {
            return Some(date);
        }
    }

    parse_generic(token)
}

fn has_short_year(token: &str) -> bool {
    DATE_DMY
        .captures(token)
        .map_or(false, |caps| caps[3].len() == 2)
}

fn parse_with_locale(token: &str, locale: &str) -> Option<NaiveDate> {
    if let Some(caps) = DATE_DMY.captures(token) {
        let first: u32 = caps[1].parse().ok()?;
        let second: u32 = caps[2].parse().ok()?;
        let year = widen_year(caps[3].parse().ok()?);

        let (day, month) = if month_first(locale) {
            (second, first)
        } else {
            (first, second)
        };
        return NaiveDate::from_ymd_opt(year, month, day);
    }

    if let Some(caps) = DATE_YMD.captures(token) {
        let year: i32 = caps[1].parse().ok()?;
        let month: u32 = caps[2].parse().ok()?;
        let day: u32 = caps[3].parse().ok()?;
        return NaiveDate::from_ymd_opt(year, month, day);
    }

    None
}

// Only the US convention puts the month first among the supported
// locales; everything else is day-first.
fn month_first(locale: &str) -> bool {
    let lower = locale.to_lowercase().replace('_', "-");
    lower == "en-us" || lower == "us"
}

fn parse_generic(token: &str) -> Option<NaiveDate> {
    if let Some(caps) = DATE_DMY.captures(token) {
        let first: u32 = caps[1].parse().ok()?;
        let second: u32 = caps[2].parse().ok()?;
        let year = widen_year(caps[3].parse().ok()?);

        // Day-first, then month-first when day-first is impossible.
        return NaiveDate::from_ymd_opt(year, second, first)
            .or_else(|| NaiveDate::from_ymd_opt(year, first, second));
    }

    if let Some(caps) = DATE_YMD.captures(token) {
        let year: i32 = caps[1].parse().ok()?;
        let month: u32 = caps[2].parse().ok()?;
        let day: u32 = caps[3].parse().ok()?;
        return NaiveDate::from_ymd_opt(year, month, day);
    }

    None
}

// Two-digit years widen on the same pivot chrono uses for %y.
fn widen_year(year: i32) -> i32 {
    if year < 100 {
        if year <= 68 { 2000 + year } else { 1900 + year }
    } else {
        year
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::lines::normalize;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_keyword_anchored_beats_earlier_unanchored() {
        let lines = normalize("Lieferung am 01.02.2024\nRechnungsdatum: 15.01.2024");
        assert_eq!(locate(&lines, None), Some(date(2024, 1, 15)));
    }

    #[test]
    fn test_unanchored_fallback() {
        let lines = normalize("Leistung erbracht\n03.06.2024\nDanke");
        assert_eq!(locate(&lines, None), Some(date(2024, 6, 3)));
    }

    #[test]
    fn test_iso_format() {
        let lines = normalize("Invoice date: 2024-01-15");
        assert_eq!(locate(&lines, None), Some(date(2024, 1, 15)));
    }

    #[test]
    fn test_two_digit_year() {
        assert_eq!(parse_date_token("15.01.24", None), Some(date(2024, 1, 15)));
        assert_eq!(parse_date_token("15.01.99", None), Some(date(1999, 1, 15)));
    }

    #[test]
    fn test_locale_hint_biases_ambiguous_dates() {
        assert_eq!(
            parse_date_token("03/04/2024", Some("en-US")),
            Some(date(2024, 3, 4))
        );
        assert_eq!(
            parse_date_token("03/04/2024", Some("de")),
            Some(date(2024, 4, 3))
        );
        assert_eq!(parse_date_token("03/04/2024", None), Some(date(2024, 4, 3)));
    }

    #[test]
    fn test_generic_month_first_rescue() {
        // 25 cannot be a month, so the day-first reading is impossible.
        assert_eq!(parse_date_token("12/25/2024", None), Some(date(2024, 12, 25)));
    }

    #[test]
    fn test_absent_for_nonsense() {
        assert_eq!(parse_date_token("99.99.2024", None), None);
        let lines = normalize("kein Datum weit und breit");
        assert_eq!(locate(&lines, None), None);
    }
}
