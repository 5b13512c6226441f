//! Error types for the dunner-core library.

use thiserror::Error;

/// Main error type for the dunner library.
#[derive(Error, Debug)]
pub enum DunnerError {
    /// Text acquisition error.
    #[error("text acquisition error: {0}")]
    Text(#[from] TextError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors from the PDF-to-text acquisition boundary.
///
/// The parsing engine itself never fails; every error in this crate
/// originates here, before any text reaches the locators.
#[derive(Error, Debug)]
pub enum TextError {
    /// Failed to open/parse the PDF file.
    #[error("failed to parse PDF: {0}")]
    Parse(String),

    /// The PDF is encrypted and cannot be processed.
    #[error("PDF is encrypted")]
    Encrypted,

    /// The PDF is empty or has no pages.
    #[error("PDF has no pages")]
    NoPages,

    /// The PDF yielded no usable text (scanned or image-only).
    #[error("no extractable text (scanned or image-only PDF)")]
    NoText,

    /// The request carried neither raw text nor PDF bytes.
    #[error("request has no text source")]
    NoSource,
}

/// Result type for the dunner library.
pub type Result<T> = std::result::Result<T, DunnerError>;
