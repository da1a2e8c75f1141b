use dioxus::prelude::*;

use crate::components::navbar::Navbar;
use crate::data_definitions::doc_viewer_state::DocViewerState;
use crate::data_definitions::url_param::UrlParam;
use crate::pages::processor_page::ProcessorPage;
use crate::pages::view_document_page::ViewDocumentPage;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]


    #[route("/")]
    ProcessorPage {},


    #[route("/document/:document_id/:doc_viewer_state")]
    ViewDocumentPage {
        document_id: String,
        doc_viewer_state: UrlParam<DocViewerState>,
    },

}

impl Route {
    pub fn view_document(document_id: String) -> Self {
        Self::ViewDocumentPage {
            document_id,
            doc_viewer_state: UrlParam::from(DocViewerState::default()),
        }
    }
}
