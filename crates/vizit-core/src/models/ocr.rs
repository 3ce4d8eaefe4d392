//! Boundary type for the external OCR step.

use serde::{Deserialize, Serialize};

use crate::error::OcrError;

/// Raw output of the external OCR engine.
///
/// The extraction core never runs OCR itself; callers hand over whatever
/// the engine produced. Only `text` feeds extraction — the confidence is
/// carried for display and logging.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OcrOutput {
    /// Recognized text.
    pub text: String,

    /// Overall recognition confidence (0.0 - 1.0), if the engine reports one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f32>,
}

impl OcrOutput {
    /// Wrap recognized text without a confidence score.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            confidence: None,
        }
    }

    /// Attach the engine's confidence score.
    pub fn with_confidence(mut self, confidence: f32) -> Self {
        self.confidence = Some(confidence);
        self
    }

    /// Sanity check callers must apply before invoking extraction.
    ///
    /// Rejects recognition noise: the trimmed text must be at least
    /// `min_len` characters. On success returns the full original text,
    /// untrimmed — extraction wants the text exactly as recognized.
    pub fn usable_text(&self, min_len: usize) -> Result<&str, OcrError> {
        let length = self.text.trim().chars().count();
        if length < min_len {
            return Err(OcrError::TooShort {
                length,
                min: min_len,
            });
        }
        Ok(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usable_text_rejects_short_input() {
        let ocr = OcrOutput::new("  ab \n");
        assert!(matches!(
            ocr.usable_text(5),
            Err(OcrError::TooShort { length: 2, min: 5 })
        ));
    }

    #[test]
    fn test_usable_text_returns_untrimmed_original() {
        let ocr = OcrOutput::new("  Иванов Пётр Сергеевич \n").with_confidence(0.87);
        assert_eq!(ocr.usable_text(5).unwrap(), "  Иванов Пётр Сергеевич \n");
    }
}
