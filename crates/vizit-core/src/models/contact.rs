//! Contact record extracted from a business card.

use serde::{Deserialize, Serialize};

/// Structured contact data recognized from a single business card.
///
/// Every field except `raw_text` is best-effort: `None` means the
/// corresponding heuristic found nothing. Field values are always
/// substrings of `raw_text` (the full name additionally has internal
/// whitespace collapsed) — nothing is ever inferred or generated.
///
/// Serialized with camelCase keys (`fullName`, `rawText`, …) so JSON
/// output stays key-compatible with earlier record dumps.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactRecord {
    /// Company name line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,

    /// Full personal name, whitespace-normalized.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,

    /// Phone number as it appears in the text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// Email address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Postal address line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    /// Job title / role line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,

    /// Website line, verbatim.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,

    /// The full original OCR text the record was extracted from.
    pub raw_text: String,
}

impl ContactRecord {
    /// A record with no structured fields, carrying only the raw text.
    pub fn empty(raw_text: impl Into<String>) -> Self {
        Self {
            raw_text: raw_text.into(),
            ..Self::default()
        }
    }

    /// True when no structured field was extracted.
    pub fn is_empty(&self) -> bool {
        self.missing_fields().len() == FIELD_NAMES.len()
    }

    /// Name to present the card under: full name, falling back to company.
    pub fn display_name(&self) -> Option<&str> {
        non_empty(&self.full_name).or_else(|| non_empty(&self.company))
    }

    /// Names of the fields the extractor could not determine.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let values = [
            &self.company,
            &self.full_name,
            &self.phone,
            &self.email,
            &self.address,
            &self.position,
            &self.website,
        ];

        FIELD_NAMES
            .iter()
            .zip(values)
            .filter(|(_, value)| non_empty(value).is_none())
            .map(|(name, _)| *name)
            .collect()
    }
}

const FIELD_NAMES: [&str; 7] = [
    "company", "full_name", "phone", "email", "address", "position", "website",
];

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
