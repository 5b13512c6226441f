//! Extraction request and draft models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Input to the extraction engine.
///
/// Either `raw_text` or `pdf_bytes` must be set; `raw_text` takes
/// precedence when both are present.
#[derive(Debug, Clone, Default)]
pub struct ExtractionRequest {
    /// Raw invoice text, one string per page in layout order.
    pub raw_text: Option<String>,

    /// Raw PDF bytes; converted to text at the acquisition boundary.
    pub pdf_bytes: Option<Vec<u8>>,

    /// Locale hint (e.g. "de", "en-US"); biases date parsing only.
    pub locale: Option<String>,

    /// Original file name; fallback source for the invoice number.
    pub file_name: Option<String>,
}

impl ExtractionRequest {
    /// Request from already-acquired text.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            raw_text: Some(text.into()),
            ..Self::default()
        }
    }

    /// Request from raw PDF bytes.
    pub fn from_pdf(bytes: Vec<u8>) -> Self {
        Self {
            pdf_bytes: Some(bytes),
            ..Self::default()
        }
    }

    /// Set the locale hint.
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    /// Set the original file name.
    pub fn with_file_name(mut self, name: impl Into<String>) -> Self {
        self.file_name = Some(name.into());
        self
    }
}

/// Best-effort pre-fill extracted from one invoice document.
///
/// Every field is optional; the orchestrator never returns a draft with
/// all fields absent. The amount is carried as the normalized numeric
/// string (e.g. `1234.56`) rather than a float, so the value survives
/// round-tripping exactly as it was read.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionDraft {
    /// Invoice number/identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_number: Option<String>,

    /// Total amount as a normalized numeric string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,

    /// 3-letter ISO currency code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,

    /// Invoice date (date only, no time).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_date: Option<NaiveDate>,

    /// One- or two-line description of the invoiced goods/services.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Debtor (invoice recipient) company name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debtor_company: Option<String>,

    /// Debtor street and number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debtor_street: Option<String>,

    /// Debtor postal code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debtor_postal_code: Option<String>,

    /// Debtor city.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debtor_city: Option<String>,

    /// Debtor contact person.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debtor_contact_name: Option<String>,

    /// Debtor contact email.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debtor_contact_email: Option<String>,

    /// Debtor contact phone.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debtor_contact_phone: Option<String>,
}

impl ExtractionDraft {
    /// Check whether nothing usable was extracted. A lone currency does
    /// not count: without an amount or any other field it says nothing
    /// about the invoice.
    pub fn is_empty(&self) -> bool {
        self.invoice_number.is_none()
            && self.amount.is_none()
            && self.invoice_date.is_none()
            && self.description.is_none()
            && !self.has_debtor()
    }

    /// Check whether any debtor field was extracted.
    pub fn has_debtor(&self) -> bool {
        self.debtor_company.is_some()
            || self.debtor_street.is_some()
            || self.debtor_postal_code.is_some()
            || self.debtor_city.is_some()
            || self.debtor_contact_name.is_some()
            || self.debtor_contact_email.is_some()
            || self.debtor_contact_phone.is_some()
    }

    /// Trim every string field, turning whitespace-only values absent.
    pub fn sanitize(&mut self) {
        for field in [
            &mut self.invoice_number,
            &mut self.amount,
            &mut self.currency,
            &mut self.description,
            &mut self.debtor_company,
            &mut self.debtor_street,
            &mut self.debtor_postal_code,
            &mut self.debtor_city,
            &mut self.debtor_contact_name,
            &mut self.debtor_contact_email,
            &mut self.debtor_contact_phone,
        ] {
            if let Some(value) = field.take() {
                let trimmed = value.trim();
                if !trimmed.is_empty() {
                    *field = Some(trimmed.to_string());
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_draft() {
        assert!(ExtractionDraft::default().is_empty());
    }

    #[test]
    fn test_currency_alone_is_still_empty() {
        let draft = ExtractionDraft {
            currency: Some("EUR".to_string()),
            ..ExtractionDraft::default()
        };
        assert!(draft.is_empty());
    }

    #[test]
    fn test_single_field_is_not_empty() {
        let draft = ExtractionDraft {
            debtor_city: Some("Berlin".to_string()),
            ..ExtractionDraft::default()
        };
        assert!(!draft.is_empty());
        assert!(draft.has_debtor());
    }

    #[test]
    fn test_sanitize_drops_blank_fields() {
        let mut draft = ExtractionDraft {
            invoice_number: Some("  RE-1  ".to_string()),
            debtor_company: Some("   ".to_string()),
            ..ExtractionDraft::default()
        };
        draft.sanitize();
        assert_eq!(draft.invoice_number.as_deref(), Some("RE-1"));
        assert_eq!(draft.debtor_company, None);
    }

    #[test]
    fn test_serialize_skips_absent_fields() {
        let draft = ExtractionDraft {
            amount: Some("119.00".to_string()),
            currency: Some("EUR".to_string()),
            ..ExtractionDraft::default()
        };
        let json = serde_json::to_string(&draft).unwrap();
        assert_eq!(json, r#"{"amount":"119.00","currency":"EUR"}"#);
    }
}
