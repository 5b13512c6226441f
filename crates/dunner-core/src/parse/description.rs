//! Best-effort description extraction.

use super::lines::Line;
use super::patterns::{DESCRIPTION_KEYWORDS, QUANTITY_LINE};

/// Build a one- or two-line description.
///
/// A line carrying a description keyword wins outright; otherwise up to
/// two quantity-style (`2 x ...`) or short (≤6 words) lines are joined.
pub fn build(lines: &[Line]) -> Option<String> {
    for line in lines {
        let lower = line.text.to_lowercase();
        for keyword in DESCRIPTION_KEYWORDS {
            if let Some(position) = lower.find(keyword) {
                let after = line.text[position + keyword.len()..]
                    .trim_start_matches([':', '-', ' ', '\t'])
                    .trim();
                let description = if after.is_empty() { line.text.as_str() } else { after };
                return Some(description.to_string());
            }
        }
    }

    let picked: Vec<&str> = lines
        .iter()
        .filter(|line| !line.is_blank())
        .filter(|line| line.text.chars().any(char::is_alphabetic))
        .filter(|line| {
            QUANTITY_LINE.is_match(&line.text) || line.text.split_whitespace().count() <= 6
        })
        .take(2)
        .map(|line| line.text.as_str())
        .collect();

    if picked.is_empty() {
        None
    } else {
        Some(picked.join("; "))
    }
}
