pub mod processor_page;
pub mod view_document_page;
