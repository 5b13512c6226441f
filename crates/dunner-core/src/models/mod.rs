//! Data models for extraction requests and drafts.

mod draft;

pub use draft::{ExtractionDraft, ExtractionRequest};
