//! Components of the upload, classify and extract workflow.

pub mod classification_view;
pub mod extraction_form;
pub mod file_upload;
pub mod processing_status;
pub mod prompt_inspector;
pub mod resizable_panes;
pub mod workflow_control;
