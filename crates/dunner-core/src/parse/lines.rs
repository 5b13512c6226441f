//! Line normalization.

/// A trimmed line with its original index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    /// Zero-based index in the original text.
    pub index: usize,
    /// Trimmed text; may be empty (blank lines are kept, the debtor
    /// fallback segments the document on them).
    pub text: String,
}

impl Line {
    /// Check whether the line is blank.
    pub fn is_blank(&self) -> bool {
        self.text.is_empty()
    }
}

/// Split raw text into trimmed, indexed lines.
pub fn normalize(raw: &str) -> Vec<Line> {
    raw.lines()
        .enumerate()
        .map(|(index, text)| Line {
            index,
            text: text.trim().to_string(),
        })
        .collect()
}

/// Check whether any line carries content.
pub fn has_content(lines: &[Line]) -> bool {
    lines.iter().any(|line| !line.is_blank())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_trims_and_indexes() {
        let lines = normalize("  Rechnung  \n\n  119,00 EUR");
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].text, "Rechnung");
        assert!(lines[1].is_blank());
        assert_eq!(lines[2].index, 2);
    }

    #[test]
    fn test_has_content() {
        assert!(!has_content(&normalize("  \n\t\n   ")));
        assert!(!has_content(&normalize("")));
        assert!(has_content(&normalize("\n x ")));
    }
}
