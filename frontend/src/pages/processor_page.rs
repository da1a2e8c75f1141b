use common::text_highlight::HighlightQuery;
use common::workflow::WorkflowStep;
use dioxus::prelude::*;

use crate::components::document_view_components::doc_workspace::DocumentWorkspace;
use crate::components::document_view_components::pdf_viewer::PdfViewer;
use crate::components::workflow_components::classification_view::ClassificationView;
use crate::components::workflow_components::extraction_form::ExtractionForm;
use crate::components::workflow_components::file_upload::FileUpload;
use crate::components::workflow_components::workflow_control::WorkflowControl;

/// Upload, classify and extract, one step at a time.
#[component]
pub fn ProcessorPage() -> Element {
    let control = use_context::<WorkflowControl>();
    let step = use_memo(move || control.state.read().step);
    let error = use_memo(move || control.state.read().error.clone());

    rsx! {
        Title { "Document Processor" }
        div {
            style: "display: flex; flex-direction: column; width: 100%; height: 100%; overflow: auto;",
            if let Some(error) = error() {
                div {
                    style: "margin: 16px 16px 0 16px; background: #FEF2F2; border: 1px solid #FECACA; color: #B91C1C; padding: 12px 16px; border-radius: 8px; flex-shrink: 0;",
                    "{error}"
                }
            }
            div {
                style: "flex-grow: 1; min-height: 0;",
                match step() {
                    WorkflowStep::Upload => rsx! { UploadStep {} },
                    WorkflowStep::Classify => rsx! { ClassifyStep {} },
                    WorkflowStep::Extract => rsx! { ExtractStep {} },
                }
            }
        }
    }
}

#[component]
fn UploadStep() -> Element {
    let control = use_context::<WorkflowControl>();
    let loading = use_memo(move || control.state.read().is_loading());
    rsx! {
        div {
            style: "max-width: 576px; margin: 0 auto; padding: 48px 16px;",
            h2 {
                style: "font-size: 24px; font-weight: 700; color: #1F2937; text-align: center; margin: 0 0 24px 0;",
                "Upload a PDF Document"
            }
            FileUpload {
                disabled: loading,
                on_upload: move |(filename, pdf_data): (String, Vec<u8>)| control.upload(filename, pdf_data),
            }
            if loading() {
                div {
                    style: "margin-top: 16px; text-align: center; color: #6B7280;",
                    "Uploading and classifying document..."
                }
            }
        }
    }
}

#[component]
fn ClassifyStep() -> Element {
    let control = use_context::<WorkflowControl>();
    let document = use_memo(move || control.state.read().document.clone());
    let classification = use_memo(move || control.state.read().classification.clone());
    let loading = use_memo(move || control.state.read().is_loading());
    let (Some(document), Some(classification)) = (document(), classification()) else {
        return rsx! {};
    };
    let document_id = document.id.clone();
    rsx! {
        DocumentWorkspace {
            document,
            left: rsx! {
                PdfViewer { document_id, highlight: None::<HighlightQuery> }
            },
            right: rsx! {
                ClassificationView {
                    classification,
                    loading,
                    on_accept: move |_| control.accept_classification(),
                    on_reject: move |_| control.start_over(),
                }
            },
        }
    }
}

#[component]
fn ExtractStep() -> Element {
    let control = use_context::<WorkflowControl>();
    let document = use_memo(move || control.state.read().document.clone());
    let extraction = use_memo(move || control.state.read().extraction.clone());
    let selected_field = use_memo(move || control.state.read().selected_field.clone());
    let highlight = use_memo(move || control.state.read().highlight.clone());
    let (Some(document), Some(extraction)) = (document(), extraction()) else {
        return rsx! {};
    };
    let document_id = document.id.clone();
    rsx! {
        DocumentWorkspace {
            document,
            left: rsx! {
                PdfViewer { document_id, highlight }
            },
            right: rsx! {
                ExtractionForm {
                    extraction,
                    selected_field,
                    on_field_click: move |field| control.select_field(&field),
                }
            },
        }
    }
}
