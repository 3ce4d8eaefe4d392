//! Keyword sets and regex patterns for card field extraction.

use lazy_static::lazy_static;
use regex::Regex;

/// Role and department words marking a job-title line, Russian and English.
pub const ROLE_KEYWORDS: &[&str] = &[
    "представитель",
    "руководитель",
    "отдел",
    "менеджер",
    "директор",
    "sales",
    "manager",
    "head",
    "chief",
];

/// Company-line markers: Russian legal-entity abbreviations, opening
/// quotes, a web domain prefix. "000" is deliberate — OCR routinely
/// misreads "ООО" as three zeroes, and cards carrying it are company lines.
pub const COMPANY_MARKERS: &[&str] = &[
    "ООО", "ЗАО", "ОАО", "ПАО", "АО", "ИП", "000", "«", "\"", "www.",
];

/// Street/locality markers, abbreviated and spelled out.
pub const ADDRESS_MARKERS: &[&str] = &[
    "г.",
    "город",
    "ул.",
    "улица",
    "пр.",
    "проспект",
    "пер.",
    "переулок",
    "офис",
];

/// Cities recognized after a six-digit postal code.
pub const POSTAL_CITIES: &[&str] = &["Санкт-Петербург", "Москва"];

fn any_of(markers: &[&str]) -> String {
    markers
        .iter()
        .map(|m| regex::escape(m))
        .collect::<Vec<_>>()
        .join("|")
}

lazy_static! {
    /// Job-title line detector. Shared by the role+name pairing rule and
    /// the standalone role fallback so the two call sites cannot drift.
    pub static ref ROLE_LINE: Regex =
        Regex::new(&format!("(?i)(?:{})", any_of(ROLE_KEYWORDS))).unwrap();

    /// Company line detector.
    pub static ref COMPANY_LINE: Regex =
        Regex::new(&format!("(?i)(?:{})", any_of(COMPANY_MARKERS))).unwrap();

    /// Address line: six-digit postal code followed by a known city, or
    /// any street/locality marker.
    pub static ref ADDRESS_LINE: Regex = {
        let postal = POSTAL_CITIES
            .iter()
            .map(|city| format!(r"\d{{6}}.*{}", regex::escape(city)));
        let alternation = postal
            .chain(ADDRESS_MARKERS.iter().map(|m| regex::escape(m)))
            .collect::<Vec<_>>()
            .join("|");
        Regex::new(&format!("(?i)(?:{alternation})")).unwrap()
    };

    /// At least three capitalized words (Cyrillic or Latin), the proxy for
    /// a full personal name. Applied to whitespace-collapsed lines.
    pub static ref FULL_NAME: Regex =
        Regex::new(r"(?:[А-ЯЁA-Z][а-яёa-z]+\s*){2,}[А-ЯЁA-Z][а-яёa-z]+").unwrap();

    /// Website line marker.
    pub static ref WEBSITE_LINE: Regex = Regex::new(r"(?i)www\.|http").unwrap();

    /// Russian phone number: +7/8 prefix, optionally parenthesized area
    /// code, then 3-2-2 digit groups, separators optional among space/dash.
    pub static ref PHONE: Regex = Regex::new(
        r"(?:\+7|8)[\s\-]?\(?\d{3}\)?[\s\-]?\d{3}[\s\-]?\d{2}[\s\-]?\d{2}"
    )
    .unwrap();

    /// Email address.
    pub static ref EMAIL: Regex = Regex::new(
        r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}"
    )
    .unwrap();
}
