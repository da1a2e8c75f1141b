pub mod doc_title_bar;
pub mod doc_workspace;
pub mod pdf_viewer;
