//! Per-field extraction rules for business card text.
//!
//! Each rule is an independent free function over the segmented lines (or
//! the whole raw text for phone/email). The parser applies them in a fixed
//! priority order and never re-evaluates a field once set; cross-field
//! dependencies are passed in as read-only arguments.

pub mod address;
pub mod company;
pub mod contact;
pub mod name;
pub mod patterns;

/// Collapse internal whitespace runs to single spaces and trim.
pub fn collapse_whitespace(line: &str) -> String {
    line.split_whitespace().collect::<Vec<_>>().join(" ")
}
