//! Heuristic invoice-data extraction for the dunning workflow.
//!
//! This crate provides:
//! - PDF text acquisition (with encrypted/scanned detection)
//! - scoring-based locators for invoice number, amount, currency, date,
//!   debtor identity/address/contact and description
//! - the [`HeuristicInvoiceParser`] orchestrator producing an editable
//!   [`ExtractionDraft`] pre-fill
//!
//! Extraction is best-effort by design: no template knowledge, no
//! guarantee of correctness, every value subject to human review.

pub mod error;
pub mod models;
pub mod parse;
pub mod pdf;

pub use error::{DunnerError, Result, TextError};
pub use models::{ExtractionDraft, ExtractionRequest};
pub use parse::HeuristicInvoiceParser;
