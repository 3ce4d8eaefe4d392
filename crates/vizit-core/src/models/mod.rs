//! Data models: the contact record, the OCR boundary type, configuration.

pub mod config;
pub mod contact;
pub mod ocr;
