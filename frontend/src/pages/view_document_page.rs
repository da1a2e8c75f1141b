use dioxus::prelude::*;

use crate::api::document_api::{get_document, get_prompts};
use crate::components::document_view_components::doc_workspace::DocumentWorkspace;
use crate::components::document_view_components::pdf_viewer::PdfViewer;
use crate::components::error_boundary::ComponentErrorDisplay;
use crate::components::suspend_boundary::LoadingIndicator;
use crate::components::workflow_components::extraction_form::ExtractionForm;
use crate::components::workflow_components::workflow_control::WorkflowControl;
use crate::data_definitions::doc_viewer_state::DocViewerState;
use crate::data_definitions::url_param::UrlParam;
use crate::routes::Route;

/// A processed document, with the selected field kept in the url.
#[component]
pub fn ViewDocumentPage(document_id: String, doc_viewer_state: UrlParam<DocViewerState>) -> Element {
    rsx! {
        Title { "Document Processor - View Document" }
        DocumentViewRoot { document_id, doc_viewer_state: doc_viewer_state.into_inner() }
    }
}

#[component]
fn DocumentViewRoot(document_id: ReadSignal<String>, doc_viewer_state: ReadSignal<DocViewerState>) -> Element {
    let control = use_context::<WorkflowControl>();
    let loaded = use_resource(move || {
        let document_id = document_id.read().clone();
        async move {
            let document = get_document(document_id.clone()).await?;
            let prompts = get_prompts(document_id).await?;
            Ok::<_, ServerFnError>((document, prompts))
        }
    });
    use_effect(move || {
        if let Some(Ok((document, prompts))) = loaded.read().clone() {
            control.restore(document, prompts);
        }
    });

    let set_doc_viewer_state = use_callback(move |state: DocViewerState| {
        if *doc_viewer_state.read() == state {
            return;
        }
        navigator().push(Route::ViewDocumentPage {
            document_id: document_id.read().clone(),
            doc_viewer_state: state.into(),
        });
    });

    let document = match loaded.read().clone() {
        Some(Ok((document, _prompts))) => document,
        Some(Err(e)) => {
            return rsx! {
                ComponentErrorDisplay { error_txt: format!("{e}") }
            };
        }
        None => {
            return rsx! {
                LoadingIndicator { label: "Loading document" }
            };
        }
    };
    let extraction = document.extraction.clone();
    let highlight = doc_viewer_state.read().highlight.clone();
    let selected_field = doc_viewer_state.read().selected_field.clone();

    rsx! {
        DocumentWorkspace {
            document,
            left: rsx! {
                PdfViewer { document_id, highlight }
            },
            right: rsx! {
                if let Some(extraction) = extraction {
                    ExtractionForm {
                        extraction,
                        selected_field,
                        on_field_click: move |field| set_doc_viewer_state.call(DocViewerState::from_field(&field)),
                    }
                } else {
                    NotExtractedYet {}
                }
            },
        }
    }
}

#[component]
fn NotExtractedYet() -> Element {
    rsx! {
        div {
            style: "background: white; border-radius: 8px; height: 100%; display: flex; flex-direction: column; gap: 16px; align-items: center; justify-content: center; color: #6B7280;",
            "No data has been extracted from this document yet."
            Link {
                to: Route::ProcessorPage {},
                "Continue processing"
            }
        }
    }
}
