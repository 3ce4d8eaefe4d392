//! Address line extraction.

use super::patterns::ADDRESS_LINE;

/// First line with a postal code followed by a known city, or any
/// street/locality marker.
pub fn extract_address(lines: &[&str]) -> Option<String> {
    lines
        .iter()
        .find(|line| ADDRESS_LINE.is_match(line))
        .map(|line| (*line).to_string())
}
