//! CLI subcommands.

pub mod batch;
pub mod extract;

use std::fs;
use std::path::Path;

use anyhow::Context;
use tracing::warn;

use dunner_core::{DunnerError, ExtractionDraft, ExtractionRequest, HeuristicInvoiceParser};

/// Build a request from a file path: PDFs go through the acquisition
/// boundary, everything else is read as UTF-8 text.
pub fn request_for(path: &Path, locale: Option<&str>) -> anyhow::Result<ExtractionRequest> {
    let is_pdf = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("pdf"));

    let mut request = if is_pdf {
        let bytes = fs::read(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        ExtractionRequest::from_pdf(bytes)
    } else {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        ExtractionRequest::from_text(text)
    };

    if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
        request = request.with_file_name(name);
    }
    if let Some(locale) = locale {
        request = request.with_locale(locale);
    }
    Ok(request)
}

/// Run extraction, swallowing acquisition failures.
///
/// A corrupt, encrypted or scanned PDF is logged and reported as "no
/// draft" so batch runs and the surrounding submission flow carry on
/// with an empty draft instead of failing.
pub fn extract_draft(
    parser: &HeuristicInvoiceParser,
    request: &ExtractionRequest,
) -> Option<ExtractionDraft> {
    match parser.parse(request) {
        Ok(draft) => draft,
        Err(DunnerError::Text(e)) => {
            warn!(error = %e, "extraction unavailable");
            None
        }
        Err(e) => {
            warn!(error = %e, "extraction failed");
            None
        }
    }
}
