//! Phone, email and website extraction.

use super::patterns::{EMAIL, PHONE, WEBSITE_LINE};

/// First line mentioning a web address, taken verbatim.
pub fn extract_website(lines: &[&str]) -> Option<String> {
    lines
        .iter()
        .find(|line| WEBSITE_LINE.is_match(line))
        .map(|line| (*line).to_string())
}

/// First phone match anywhere in the raw text. Matched against the whole
/// text rather than line by line, as recognized by the OCR engine.
pub fn extract_phone(text: &str) -> Option<String> {
    PHONE.find(text).map(|m| m.as_str().to_string())
}

/// First email address anywhere in the raw text.
pub fn extract_email(text: &str) -> Option<String> {
    EMAIL.find(text).map(|m| m.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn digits(s: &str) -> String {
        s.chars().filter(|c| c.is_ascii_digit()).collect()
    }

    #[test]
    fn test_phone_separator_variants() {
        for input in ["+7 (812) 123-45-67", "8 812 123 45 67", "+78121234567"] {
            let phone = extract_phone(input).unwrap_or_else(|| panic!("no phone in {input}"));
            // Same subscriber digits regardless of prefix and separators.
            assert!(digits(&phone).ends_with("8121234567"), "got {phone}");
        }
    }

    #[test]
    fn test_phone_inside_larger_text() {
        let text = "звоните\n+7 (495) 123-45-67 доб. 3";
        assert_eq!(extract_phone(text), Some("+7 (495) 123-45-67".to_string()));
    }

    #[test]
    fn test_no_phone_without_country_prefix() {
        assert_eq!(extract_phone("тел. 123-45-67"), None);
    }

    #[test]
    fn test_email() {
        let text = "Contact: j.doe@example.com for info";
        assert_eq!(extract_email(text), Some("j.doe@example.com".to_string()));
    }

    #[test]
    fn test_website_line_verbatim() {
        let lines = vec!["info@romashka.ru", "сайт: www.romashka.ru"];
        assert_eq!(
            extract_website(&lines),
            Some("сайт: www.romashka.ru".to_string())
        );
    }

    #[test]
    fn test_website_matches_http() {
        assert_eq!(
            extract_website(&["https://romashka.ru"]),
            Some("https://romashka.ru".to_string())
        );
    }
}
