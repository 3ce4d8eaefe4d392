//! Line segmentation of raw OCR text.

/// Split raw OCR text into trimmed, non-empty lines, order preserved.
///
/// Tolerates `\r\n` endings and per-line leading/trailing whitespace.
/// Empty input yields an empty vector; downstream rules treat that as
/// "no candidates found", never as an error.
pub fn segment_lines(text: &str) -> Vec<&str> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_trims_and_drops_blank_lines() {
        let lines = segment_lines("  первая \n\n\t\n  вторая\t\n");
        assert_eq!(lines, vec!["первая", "вторая"]);
    }

    #[test]
    fn test_handles_crlf() {
        let lines = segment_lines("один\r\nдва\r\n\r\nтри");
        assert_eq!(lines, vec!["один", "два", "три"]);
    }

    #[test]
    fn test_empty_input_yields_no_lines() {
        assert!(segment_lines("").is_empty());
        assert!(segment_lines("   \n \t \r\n").is_empty());
    }

    #[test]
    fn test_idempotent_on_segmented_input() {
        let once = segment_lines("  a line \n\n another ");
        let rejoined = once.join("\n");
        assert_eq!(segment_lines(&rejoined), once);
    }
}
