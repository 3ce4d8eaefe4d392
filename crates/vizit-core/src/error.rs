//! Error types for the vizit-core library.
//!
//! Extraction itself is total and never fails; these types cover the
//! caller-side boundary around it (OCR hand-off, configuration, I/O).

use thiserror::Error;

/// Main error type for the vizit library.
#[derive(Error, Debug)]
pub enum VizitError {
    /// OCR boundary error.
    #[error("OCR error: {0}")]
    Ocr(#[from] OcrError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors at the hand-off from the external OCR engine.
#[derive(Error, Debug)]
pub enum OcrError {
    /// The recognized text is too short to be a business card.
    #[error("OCR produced no usable text ({length} characters, minimum {min})")]
    TooShort { length: usize, min: usize },

    /// The external OCR engine reported a failure.
    #[error("OCR engine failed: {0}")]
    Engine(String),
}

/// Result type for the vizit library.
pub type Result<T> = std::result::Result<T, VizitError>;
