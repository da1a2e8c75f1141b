//! Common library exports shared between frontend and backend.

extern crate serde;

pub mod document;
pub mod text_highlight;
pub mod workflow;
pub mod prompt_costs;
pub mod pdf_to_html_conversion;
