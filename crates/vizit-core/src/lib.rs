//! Core library for business card OCR processing.
//!
//! This crate provides:
//! - Line segmentation of raw OCR output
//! - Rule-based contact field extraction (name, company, role, phone,
//!   email, address, website) tuned for Russian/English cards
//! - Markdown note rendering for downstream note-taking tools
//!
//! The extraction pipeline is a pure function of its input text: no I/O,
//! no shared state, safe to call from any number of threads.

pub mod card;
pub mod error;
pub mod models;
pub mod note;

pub use card::{CardParser, ContactParser, extract_contact_data, segment_lines};
pub use error::{OcrError, Result, VizitError};
pub use models::config::VizitConfig;
pub use models::contact::ContactRecord;
pub use models::ocr::OcrOutput;
