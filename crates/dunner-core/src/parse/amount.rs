//! Total-amount location via weighted keyword scoring.

use rust_decimal::Decimal;
use tracing::debug;

use super::lines::Line;
use super::numeric::normalize_numeric;
use super::patterns::{
    amount_keyword_score, CURRENCY_CODES, CURRENCY_SYMBOLS, NUMERIC_TOKEN, THREE_LETTER_WORD,
};
use super::score::Best;

/// Amount and currency resolved from the best-scoring line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocatedAmount {
    /// Normalized numeric string of the total amount.
    pub amount: Option<String>,
    /// Currency found on the same line, if any.
    pub currency: Option<String>,
}

/// Score every line for "contains the total amount" and keep the best.
///
/// A line's score is the sum of its keyword weights; a line carrying a
/// numeric token but no keyword scores 1, so numbers are never ignored
/// outright. A keyword line without a number borrows the amount from the
/// immediately following line (labels and values are often split across
/// two lines in column layouts). Replacement is strict greater-than, so
/// the first of two equally scored lines wins.
pub fn locate(lines: &[Line]) -> LocatedAmount {
    let mut best: Best<LocatedAmount> = Best::new();

    for (position, line) in lines.iter().enumerate() {
        let keyword_score = amount_keyword_score(&line.text);
        let mut amount = largest_numeric_token(&line.text);
        let mut currency = line_currency(&line.text);

        if keyword_score > 0 && amount.is_none() {
            // Label/number split: take the value one line below.
            if let Some(next) = lines.get(position + 1) {
                amount = largest_numeric_token(&next.text);
                if currency.is_none() {
                    currency = line_currency(&next.text);
                }
            }
        }

        // A line without any value, borrowed or not, is no candidate.
        if amount.is_none() {
            continue;
        }
        let score = if keyword_score > 0 { keyword_score } else { 1 };

        let candidate = LocatedAmount { amount, currency };
        if best.offer(candidate, score) {
            debug!(line = line.index, score, "new best amount line");
        }
    }

    best.into_inner().unwrap_or_default()
}

/// Extract the numerically largest parseable token on a line.
///
/// Unparseable tokens survive only when nothing on the line parses.
fn largest_numeric_token(text: &str) -> Option<String> {
    let mut largest: Option<(Decimal, String)> = None;
    let mut fallback: Option<String> = None;

    for token in NUMERIC_TOKEN.find_iter(text) {
        let normalized = normalize_numeric(token.as_str());
        match normalized.value {
            Some(value) => {
                if largest.as_ref().map_or(true, |(max, _)| value > *max) {
                    largest = Some((value, normalized.text));
                }
            }
            None => {
                if fallback.is_none() {
                    fallback = Some(normalized.text);
                }
            }
        }
    }

    largest.map(|(_, text)| text).or(fallback)
}

/// First 3-letter ISO code or currency symbol on a line.
pub fn line_currency(text: &str) -> Option<String> {
    let code = THREE_LETTER_WORD
        .find_iter(text)
        .map(|m| (m.start(), m.as_str().to_uppercase()))
        .find(|(_, word)| CURRENCY_CODES.contains(&word.as_str()));

    let symbol = text.char_indices().find_map(|(offset, c)| {
        CURRENCY_SYMBOLS
            .iter()
            .find(|(symbol, _)| *symbol == c)
            .map(|(_, code)| (offset, code.to_string()))
    });

    match (code, symbol) {
        (Some((c, code)), Some((s, symbol))) => Some(if c <= s { code } else { symbol }),
        (Some((_, code)), None) => Some(code),
        (None, Some((_, symbol))) => Some(symbol),
        (None, None) => None,
    }
}
