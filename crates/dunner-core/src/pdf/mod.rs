//! PDF-to-text acquisition boundary.
//!
//! The parsing engine only ever sees text; this module turns PDF bytes
//! into text or reports why it cannot (corrupt, encrypted, scanned).
//! Callers are expected to log and swallow these errors so the
//! surrounding submission flow proceeds with an empty draft.

use lopdf::Document;
use tracing::{debug, info, warn};

use crate::error::{Result, TextError};

/// Minimum number of non-whitespace characters a "real" text PDF is
/// expected to yield. Below this the document is treated as scanned.
const MIN_TEXT_CHARS: usize = 30;

/// Extract text from PDF bytes, pages in layout order joined by
/// newlines.
pub fn acquire_text(bytes: &[u8]) -> Result<String> {
    let document = Document::load_mem(bytes)
        .map_err(|e| TextError::Parse(e.to_string()))?;

    if document.is_encrypted() {
        warn!("PDF is encrypted, extraction unavailable");
        return Err(TextError::Encrypted.into());
    }
    if document.get_pages().is_empty() {
        return Err(TextError::NoPages.into());
    }

    let text = pdf_extract::extract_text_from_mem(bytes).map_err(|e| {
        warn!(error = %e, "text extraction failed, PDF may be scanned or corrupt");
        TextError::NoText
    })?;

    let meaningful = text.chars().filter(|c| !c.is_whitespace()).count();
    if meaningful < MIN_TEXT_CHARS {
        debug!(chars = meaningful, "extracted text below threshold, treating as scanned");
        return Err(TextError::NoText.into());
    }

    info!(chars = meaningful, "text acquired from PDF");
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DunnerError;

    #[test]
    fn test_garbage_bytes_fail_to_parse() {
        let result = acquire_text(b"not a pdf at all");
        assert!(matches!(
            result,
            Err(DunnerError::Text(TextError::Parse(_)))
        ));
    }
}
