//! Helpers shared by the API modules.

pub mod document_service;
pub mod html_text_runs;
