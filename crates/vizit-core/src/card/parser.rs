//! Card parser applying field rules in priority order.

use std::time::Instant;

use tracing::debug;

use crate::models::contact::ContactRecord;

use super::rules::{address, company, contact, name};
use super::segment::segment_lines;

/// Trait for contact parsing.
pub trait ContactParser {
    /// Parse a contact record from raw OCR text.
    ///
    /// Total: never fails, always returns a fully-formed record with
    /// `raw_text` preserved verbatim; unmatched fields stay `None`.
    fn parse(&self, text: &str) -> ContactRecord;
}

/// Rule-based business card parser.
///
/// Rules run in a fixed order and a field is never re-evaluated once set.
/// The order is load-bearing in two places: the role+name pairing runs
/// before the standalone name fallback, and the company rule runs after
/// the name is resolved so it can skip the name line.
#[derive(Debug, Clone, Default)]
pub struct CardParser {
    /// Extra job-title keywords on top of the built-in set, lowercased.
    extra_role_keywords: Vec<String>,
}

impl CardParser {
    /// Create a parser with the built-in keyword sets.
    pub fn new() -> Self {
        Self::default()
    }

    /// Extend the job-title keyword set, e.g. for an additional locale.
    pub fn with_role_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.extra_role_keywords
            .extend(keywords.into_iter().map(|k| k.as_ref().to_lowercase()));
        self
    }
}

impl ContactParser for CardParser {
    fn parse(&self, text: &str) -> ContactRecord {
        let start = Instant::now();
        let lines = segment_lines(text);

        // 1. Job title immediately followed by a full name.
        let (mut position, mut full_name) =
            match name::extract_role_name_pair(&lines, &self.extra_role_keywords) {
                Some((role, person)) => (Some(role), Some(person)),
                None => (None, None),
            };

        // 2. Name fallback: any line that looks like a full name.
        if full_name.is_none() {
            full_name = name::extract_name_anywhere(&lines);
        }

        // 3. Company, skipping the resolved name line.
        let company = company::extract_company(&lines, full_name.as_deref());

        // 4. Address.
        let address = address::extract_address(&lines);

        // 5. Job title fallback: any keyword line.
        if position.is_none() {
            position = name::extract_role_anywhere(&lines, &self.extra_role_keywords);
        }

        // 6. Website.
        let website = contact::extract_website(&lines);

        // 7-8. Phone and email run over the whole raw text.
        let phone = contact::extract_phone(text);
        let email = contact::extract_email(text);

        let record = ContactRecord {
            company,
            full_name,
            phone,
            email,
            address,
            position,
            website,
            raw_text: text.to_string(),
        };

        let missing = record.missing_fields();
        if !missing.is_empty() {
            debug!("unmatched card fields: {}", missing.join(", "));
        }
        debug!(
            "parsed {} lines into a contact record in {:?}",
            lines.len(),
            start.elapsed()
        );

        record
    }
}

/// Extract contact data from raw OCR text with the default rule set.
pub fn extract_contact_data(text: &str) -> ContactRecord {
    CardParser::new().parse(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const CARD: &str = "Руководитель отдела продаж\n\
                        Иванов Пётр Сергеевич\n\
                        ООО \"Ромашка\"\n\
                        г. Москва, ул. Ленина, д.5, офис 12\n\
                        +7 (495) 123-45-67\n\
                        info@romashka.ru\n\
                        www.romashka.ru";

    #[test]
    fn test_full_card() {
        let record = extract_contact_data(CARD);

        assert_eq!(record.position.as_deref(), Some("Руководитель отдела продаж"));
        assert_eq!(record.full_name.as_deref(), Some("Иванов Пётр Сергеевич"));
        assert!(record.company.as_deref().unwrap().contains("Ромашка"));
        assert!(record.address.as_deref().unwrap().contains("Москва"));
        assert_eq!(record.phone.as_deref(), Some("+7 (495) 123-45-67"));
        assert_eq!(record.email.as_deref(), Some("info@romashka.ru"));
        assert_eq!(record.website.as_deref(), Some("www.romashka.ru"));
        assert_eq!(record.raw_text, CARD);
    }

    #[test]
    fn test_total_on_degenerate_inputs() {
        for input in ["", "   \n \t ", "random unrelated text\nwith no structure"] {
            let record = extract_contact_data(input);
            assert!(record.is_empty(), "expected nothing extracted from {input:?}");
            assert_eq!(record.raw_text, input);
        }
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(extract_contact_data(CARD), extract_contact_data(CARD));
    }

    #[test]
    fn test_paired_name_beats_standalone_name() {
        // A name-like line appears first, but the role+name pair later in
        // the text must win.
        let text = "Сидоров Антон Павлович\n\
                    Менеджер по продажам\n\
                    Петров Илья Иванович";
        let record = extract_contact_data(text);
        assert_eq!(record.full_name.as_deref(), Some("Петров Илья Иванович"));
        assert_eq!(record.position.as_deref(), Some("Менеджер по продажам"));
    }

    #[test]
    fn test_company_never_recaptures_name_line() {
        let text = "Иван Петров Сидоров\nООО Иван Трейд";
        let record = extract_contact_data(text);
        assert_eq!(record.full_name.as_deref(), Some("Иван Петров Сидоров"));
        assert_eq!(record.company, None);
    }

    #[test]
    fn test_position_fallback_without_name_pair() {
        let text = "ООО «Лютик»\nдиректор по развитию";
        let record = extract_contact_data(text);
        assert_eq!(record.full_name, None);
        assert_eq!(record.position.as_deref(), Some("директор по развитию"));
        assert_eq!(record.company.as_deref(), Some("ООО «Лютик»"));
    }

    #[test]
    fn test_name_fallback_without_role_line() {
        let text = "ЗАО Лютик\nПетров Илья Иванович";
        let record = extract_contact_data(text);
        assert_eq!(record.full_name.as_deref(), Some("Петров Илья Иванович"));
        assert_eq!(record.position, None);
    }

    #[test]
    fn test_extra_role_keywords() {
        let parser = CardParser::new().with_role_keywords(["Kierownik"]);
        let record = parser.parse("Kierownik sprzedaży\nИванов Пётр Сергеевич");
        assert_eq!(record.position.as_deref(), Some("Kierownik sprzedaży"));
        assert_eq!(record.full_name.as_deref(), Some("Иванов Пётр Сергеевич"));
    }
}
