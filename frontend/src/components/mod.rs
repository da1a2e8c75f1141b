pub mod document_view_components;
pub mod error_boundary;
pub mod navbar;
pub mod suspend_boundary;
pub mod workflow_components;
