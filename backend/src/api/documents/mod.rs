//! Document API routes and module exports.

pub mod upload_document;
pub mod classify_document;
pub mod extract_data;
pub mod get_document;
pub mod get_pdf_to_html_conversion;
