//! Business card field extraction.

pub mod rules;
pub mod segment;

mod parser;

pub use parser::{CardParser, ContactParser, extract_contact_data};
pub use segment::segment_lines;
