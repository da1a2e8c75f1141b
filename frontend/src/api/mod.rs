pub mod document_api;
