//! Regex patterns and keyword tables for heuristic field extraction.
//!
//! All keyword lists are static data; matching is case-insensitive
//! substring containment unless a pattern says otherwise.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Invoice number: keyword, optional qualifier, optional separator,
    // then a token that must carry at least one digit.
    pub static ref INVOICE_NUMBER: Regex = Regex::new(
        r"(?i)(?:rechnungs?[\s\-]?(?:nummer|nr\.?)|invoice[\s\-]?(?:no\.?|number|id|#)|invoice|rechnung)[\s:.#\-]*((?:[A-Za-z0-9][A-Za-z0-9/.\-]*)?\d[A-Za-z0-9/.\-]*)"
    ).unwrap();

    // Bare invoice-number-shaped token, used on file names only. Must
    // carry at least one digit.
    pub static ref INVOICE_NUMBER_TOKEN: Regex = Regex::new(
        r"(?:[A-Za-z0-9][A-Za-z0-9/.\-]*)?\d[A-Za-z0-9/.\-]*"
    ).unwrap();

    // Numeric token: digit run allowing space, comma, dot and apostrophe
    // as interior separators.
    pub static ref NUMERIC_TOKEN: Regex = Regex::new(
        r"\d(?:[\d.,' ]*\d)?"
    ).unwrap();

    // Date-shaped tokens: dd[./-]mm[./-]yyyy|yy and yyyy[-/]mm[-/]dd.
    pub static ref DATE_TOKEN: Regex = Regex::new(
        r"\b\d{1,2}[./\-]\d{1,2}[./\-](?:\d{4}|\d{2})\b|\b\d{4}[/\-]\d{1,2}[/\-]\d{1,2}\b"
    ).unwrap();

    // Component captures for the generic date parse.
    pub static ref DATE_DMY: Regex = Regex::new(
        r"^(\d{1,2})[./\-](\d{1,2})[./\-](\d{4}|\d{2})$"
    ).unwrap();

    pub static ref DATE_YMD: Regex = Regex::new(
        r"^(\d{4})[/\-](\d{1,2})[/\-](\d{1,2})$"
    ).unwrap();

    // Any 3-letter word; filtered against CURRENCY_CODES.
    pub static ref THREE_LETTER_WORD: Regex = Regex::new(
        r"\b[A-Za-z]{3}\b"
    ).unwrap();

    // Email pattern.
    pub static ref EMAIL: Regex = Regex::new(
        r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}"
    ).unwrap();

    // Phone-shaped run; callers additionally require at least 6 digits.
    pub static ref PHONE: Regex = Regex::new(
        r"\+?\d[\d ()/\-]{4,}\d"
    ).unwrap();

    // Labeled contact person, e.g. "Geschäftsführer: Max Muster".
    pub static ref CONTACT_LABELED: Regex = Regex::new(
        r"(?i)(?:GF|Geschäftsführer|Managing Director|Director|Contact|Kontakt)[:\s]+(.+)"
    ).unwrap();

    // 2-3 space-separated capitalized-then-lowercase words.
    pub static ref PERSON_NAME: Regex = Regex::new(
        r"^[A-ZÄÖÜ][a-zäöüß]+(?: [A-ZÄÖÜ][a-zäöüß]+){1,2}$"
    ).unwrap();

    // 4-5 digit postal code followed by letters (the city).
    pub static ref POSTAL_CITY: Regex = Regex::new(
        r"\b(\d{4,5})\s+([A-Za-zÄÖÜäöüß][A-Za-zÄÖÜäöüß .]*)"
    ).unwrap();

    // Coarse header/footer split for the debtor fallback strategy.
    pub static ref DOCUMENT_HEADER: Regex = Regex::new(
        r"(?i)\b(?:rechnung|invoice)\b"
    ).unwrap();

    // Quantity line, e.g. "2 x Beratung".
    pub static ref QUANTITY_LINE: Regex = Regex::new(
        r"(?i)^\d+\s*x\s+\S"
    ).unwrap();

    // Segment separators inside a debtor block line.
    pub static ref SEGMENT_SPLIT: Regex = Regex::new(
        r"[•|–\-;]"
    ).unwrap();
}

/// Amount keyword weights, summed per line over every matching entry.
///
/// `rechnungsbetrag` stays above any sum of overlapping lower entries
/// (e.g. "total due" sums 16), so the relative ordering of the table
/// holds even when substrings overlap.
pub const AMOUNT_KEYWORDS: &[(&str, i32)] = &[
    ("rechnungsbetrag", 20),
    ("amount due", 8),
    ("total due", 8),
    ("invoice total", 8),
    ("total", 6),
    ("gesamtbetrag", 6),
    ("gesamtsumme", 6),
    ("brutto", 4),
    ("summe", 2),
    ("netto", 2),
    ("due", 2),
];

/// Keywords anchoring the date scan (pass 1).
pub const DATE_KEYWORDS: &[&str] = &["invoice date", "rechnungsdatum", "datum", "date"];

/// Invoice metadata keywords; the debtor address block conventionally
/// precedes the first line carrying one of these.
pub const INVOICE_META_KEYWORDS: &[&str] = &[
    "rechnungsdatum",
    "invoice date",
    "rechnungsnummer",
    "invoice number",
    "kundennummer",
    "customer number",
    "mandatsreferenz",
    "order number",
];

/// Supplier/bank indicators; lines and segments matching these belong to
/// the issuing supplier, never to the debtor.
pub const SUPPLIER_INDICATORS: &[&str] = &[
    "iban",
    "bic",
    "swift",
    "bank",
    "konto",
    "blz",
    // "ust" alone would match inside "Musterstraße"; only the labeled
    // tax-id forms are safe.
    "ust-id",
    "ustid",
    "ust.",
    "steuernr",
    "steuernummer",
    "finanzamt",
    "support@",
    "hrb",
    "handelsregister",
    "amtsgericht",
    "geschäftsführer",
    "kundendienst",
];

/// Street indicator substrings (German and English).
pub const STREET_INDICATORS: &[&str] = &[
    "str.",
    "straße",
    "strasse",
    "weg",
    "allee",
    "platz",
    "gasse",
    "ring",
    "damm",
    "ufer",
    "road",
    "street",
    "lane",
    "drive",
    "avenue",
    "boulevard",
    "way",
    "court",
];

/// Known 3-letter ISO currency codes.
pub const CURRENCY_CODES: &[&str] = &[
    "EUR", "USD", "GBP", "CHF", "PLN", "SEK", "NOK", "DKK", "CZK", "HUF", "JPY", "CAD", "AUD",
    "NZD",
];

/// Currency symbols and their ISO codes.
pub const CURRENCY_SYMBOLS: &[(char, &str)] = &[('€', "EUR"), ('$', "USD"), ('£', "GBP")];

/// Description keywords.
pub const DESCRIPTION_KEYWORDS: &[&str] = &["description", "leistungen"];

/// Sum the amount-keyword weights matching a line (case-insensitive).
pub fn amount_keyword_score(line: &str) -> i32 {
    let lower = line.to_lowercase();
    AMOUNT_KEYWORDS
        .iter()
        .filter(|(keyword, _)| lower.contains(keyword))
        .map(|(_, weight)| weight)
        .sum()
}

/// Check a line against a keyword list (case-insensitive substring).
pub fn contains_keyword(line: &str, keywords: &[&str]) -> bool {
    let lower = line.to_lowercase();
    keywords.iter().any(|keyword| lower.contains(keyword))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amount_keyword_ordering() {
        // The top keyword must outweigh any overlapping sum below it.
        let top = amount_keyword_score("Rechnungsbetrag:");
        assert!(top > amount_keyword_score("Total due:"));
        assert!(amount_keyword_score("Total due:") > amount_keyword_score("Gesamtbetrag:"));
        assert!(amount_keyword_score("Brutto:") > amount_keyword_score("Netto:"));
        assert_eq!(amount_keyword_score("Lieferung frei Haus"), 0);
    }

    #[test]
    fn test_invoice_number_pattern() {
        let caps = INVOICE_NUMBER.captures("Rechnung Nr. 2024/001").unwrap();
        assert_eq!(&caps[1], "2024/001");

        let caps = INVOICE_NUMBER.captures("Invoice #4711").unwrap();
        assert_eq!(&caps[1], "4711");

        let caps = INVOICE_NUMBER.captures("Rechnungsnummer: RE-123").unwrap();
        assert_eq!(&caps[1], "RE-123");

        // A labeled date must not look like an invoice number.
        assert!(INVOICE_NUMBER.captures("Rechnungsdatum: beliebig").is_none());
    }

    #[test]
    fn test_date_token_shapes() {
        assert!(DATE_TOKEN.is_match("15.01.2024"));
        assert!(DATE_TOKEN.is_match("15/1/24"));
        assert!(DATE_TOKEN.is_match("2024-01-15"));
        assert!(!DATE_TOKEN.is_match("123456"));
    }

    #[test]
    fn test_person_name_shape() {
        assert!(PERSON_NAME.is_match("Max Mustermann"));
        assert!(PERSON_NAME.is_match("Anna Maria Schmidt"));
        assert!(!PERSON_NAME.is_match("MUSTERFIRMA GMBH"));
        assert!(!PERSON_NAME.is_match("Max"));
    }
}
