//! Configuration structures for the card processing pipeline.

use serde::{Deserialize, Serialize};

/// Main configuration for the vizit pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VizitConfig {
    /// OCR hand-off configuration.
    pub ocr: OcrConfig,

    /// Contact extraction configuration.
    pub extraction: ExtractionConfig,
}

/// Settings for the external OCR step.
///
/// The language and image knobs are forwarded to whichever OCR engine the
/// caller runs; the core itself only consumes `min_text_length`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OcrConfig {
    /// Recognition languages, e.g. "rus", "eng", "rus+eng".
    pub language: String,

    /// Boost image contrast before recognition.
    pub enhance_contrast: bool,

    /// Convert the image to grayscale before recognition.
    pub to_grayscale: bool,

    /// Minimum recognized-text length (trimmed, in characters) to attempt
    /// extraction at all.
    pub min_text_length: usize,
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self {
            language: "rus+eng".to_string(),
            enhance_contrast: true,
            to_grayscale: false,
            min_text_length: 5,
        }
    }
}

/// Contact extraction configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Job-title keywords recognized on top of the built-in set,
    /// e.g. for an additional locale. Matched case-insensitively.
    pub extra_role_keywords: Vec<String>,
}

impl VizitConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))?;
        std::fs::write(path, content)
    }
}
