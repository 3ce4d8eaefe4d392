//! Markdown note rendering for extracted contacts.
//!
//! The field order and Russian labels are a compatibility surface: notes
//! produced by earlier versions follow exactly this template and
//! downstream consumers parse it positionally.

use chrono::NaiveDate;

use crate::card::rules::collapse_whitespace;
use crate::models::contact::ContactRecord;

/// Placeholder for fields the extractor could not determine.
pub const NOT_DETERMINED: &str = "Не определено";

/// Fallback note title when neither name nor company is known.
pub const DEFAULT_TITLE: &str = "Визитка";

/// Render the note body for a contact record.
pub fn render_note(record: &ContactRecord) -> String {
    let field = |value: &Option<String>| -> String {
        value
            .as_deref()
            .filter(|v| !v.is_empty())
            .unwrap_or(NOT_DETERMINED)
            .to_string()
    };

    let mut out = String::new();
    out.push_str(&format!("# Визитка: {}\n\n", field(&record.full_name)));
    out.push_str(&format!("**Компания:** {}\n", field(&record.company)));
    out.push_str(&format!("**ФИО:** {}\n", field(&record.full_name)));
    out.push_str(&format!("**Должность:** {}\n", field(&record.position)));
    out.push_str(&format!("**Телефон:** {}\n", field(&record.phone)));
    out.push_str(&format!("**Email:** {}\n", field(&record.email)));
    out.push_str(&format!("**Адрес:** {}\n", field(&record.address)));
    out.push_str(&format!("**Сайт:** {}\n", field(&record.website)));
    out.push_str("\n---\n**Исходный текст:**\n");
    out.push_str(&record.raw_text);
    out.push('\n');
    out
}

/// Build a filesystem-safe note file name: display name (or a generic
/// fallback) plus the capture date.
///
/// Characters outside `[a-zA-Zа-яА-Я0-9-_ ]` are stripped and whitespace
/// runs collapsed. The character class intentionally matches the historic
/// template and does not include ё/Ё.
pub fn note_file_name(record: &ContactRecord, date: NaiveDate) -> String {
    let base = record.display_name().unwrap_or(DEFAULT_TITLE);
    let raw = format!("{} {}", base, date.format("%Y-%m-%d"));
    let safe: String = raw.chars().filter(|c| is_safe_char(*c)).collect();
    format!("{}.md", collapse_whitespace(&safe))
}

fn is_safe_char(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || ('а'..='я').contains(&c)
        || ('А'..='Я').contains(&c)
        || matches!(c, '-' | '_' | ' ')
}
