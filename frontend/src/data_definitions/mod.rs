pub mod doc_viewer_state;
pub mod url_param;
