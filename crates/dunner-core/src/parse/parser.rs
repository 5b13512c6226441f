//! Heuristic invoice parser composing the individual locators.

use tracing::{debug, info};

use crate::error::{Result, TextError};
use crate::models::{ExtractionDraft, ExtractionRequest};
use crate::pdf;

use super::{amount, currency, date, debtor, description, invoice_number, lines};

/// Scoring-based invoice field extraction.
///
/// A pure, synchronous function of its input text plus the optional
/// locale and file-name hints: no shared state, no I/O, safe to call
/// concurrently. Output is a best-effort pre-fill for human review, or
/// `None` when not a single field could be found.
#[derive(Debug, Clone, Default)]
pub struct HeuristicInvoiceParser;

impl HeuristicInvoiceParser {
    pub fn new() -> Self {
        Self
    }

    /// Resolve the request's text source and parse it.
    ///
    /// Raw text takes precedence; PDF bytes go through the acquisition
    /// boundary first, whose failures (corrupt, encrypted, scanned) are
    /// the only errors this crate produces.
    pub fn parse(&self, request: &ExtractionRequest) -> Result<Option<ExtractionDraft>> {
        let text = match (&request.raw_text, &request.pdf_bytes) {
            (Some(text), _) => text.clone(),
            (None, Some(bytes)) => pdf::acquire_text(bytes)?,
            (None, None) => return Err(TextError::NoSource.into()),
        };

        Ok(self.parse_text(&text, request.locale.as_deref(), request.file_name.as_deref()))
    }

    /// Parse already-acquired text.
    pub fn parse_text(
        &self,
        text: &str,
        locale: Option<&str>,
        file_name: Option<&str>,
    ) -> Option<ExtractionDraft> {
        let lines = lines::normalize(text);
        if !lines::has_content(&lines) {
            debug!("input is empty or whitespace-only");
            return None;
        }

        let located = amount::locate(&lines);
        let debtor = debtor::locate(&lines);

        let mut draft = ExtractionDraft {
            invoice_number: invoice_number::locate(&lines, file_name),
            currency: located
                .currency
                .or_else(|| currency::locate(&lines)),
            amount: located.amount,
            invoice_date: date::locate(&lines, locale),
            description: description::build(&lines),
            debtor_company: debtor.company,
            debtor_street: debtor.street,
            debtor_postal_code: debtor.postal_code,
            debtor_city: debtor.city,
            debtor_contact_name: debtor.contact_name,
            debtor_contact_email: debtor.contact_email,
            debtor_contact_phone: debtor.contact_phone,
        };

        draft.sanitize();
        if draft.is_empty() {
            debug!("no field extracted, returning no draft");
            return None;
        }

        info!(
            invoice_number = draft.invoice_number.as_deref().unwrap_or("-"),
            amount = draft.amount.as_deref().unwrap_or("-"),
            debtor = draft.debtor_company.as_deref().unwrap_or("-"),
            "draft extracted"
        );
        Some(draft)
    }
}
