//! Shared workflow state and the server calls that drive it.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use common::document::{DocumentRecord, ExtractedField, PromptRecord};
use common::workflow::WorkflowState;
use dioxus::logger::tracing;
use dioxus::prelude::*;

use crate::api::document_api::{classify_document, extract_data, get_document, get_prompts, upload_document};

/// Provided by the navbar layout, so the header and every page see the same workflow.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorkflowControl {
    pub state: Signal<WorkflowState>,
    pub show_prompts: Signal<bool>,
}

impl WorkflowControl {
    pub fn new() -> Self {
        Self {
            state: Signal::new(WorkflowState::default()),
            show_prompts: Signal::new(false),
        }
    }

    pub fn upload(self, filename: String, pdf_data: Vec<u8>) {
        let mut state = self.state;
        if state.peek().is_loading() {
            return;
        }
        state.write().begin_upload();
        spawn(async move {
            if let Err(e) = upload_and_classify(state, filename, pdf_data).await {
                tracing::error!("upload failed: {e}");
                state.write().failed(format!("Upload failed: {e}"));
            }
        });
    }

    pub fn accept_classification(self) {
        let mut state = self.state;
        if state.peek().is_loading() || !state.write().begin_extract() {
            return;
        }
        spawn(async move {
            if let Err(e) = extract(state).await {
                tracing::error!("extraction failed: {e}");
                state.write().failed(format!("Extraction failed: {e}"));
            }
        });
    }

    pub fn start_over(self) {
        let mut state = self.state;
        let mut show_prompts = self.show_prompts;
        state.write().reset();
        show_prompts.set(false);
    }

    pub fn select_field(self, field: &ExtractedField) {
        let mut state = self.state;
        tracing::info!("Selected field {} (page {})", field.name, field.page_number);
        state.write().select_field(field);
    }

    pub fn restore(self, document: DocumentRecord, prompts: Vec<PromptRecord>) {
        let mut state = self.state;
        state.write().restore(document, prompts);
    }
}

async fn upload_and_classify(
    mut state: Signal<WorkflowState>,
    filename: String,
    pdf_data: Vec<u8>,
) -> Result<(), ServerFnError> {
    let uploaded = upload_document(filename, STANDARD.encode(&pdf_data)).await?;
    tracing::info!("Uploaded {} as {}", uploaded.filename, uploaded.id);
    state.write().upload_finished(uploaded.id.clone());

    let classified = classify_document(uploaded.id.clone()).await?;
    let document = get_document(uploaded.id.clone()).await?;
    let prompts = get_prompts(uploaded.id).await?;
    state.write().classified(document, classified.classification, prompts);
    Ok(())
}

async fn extract(mut state: Signal<WorkflowState>) -> Result<(), ServerFnError> {
    let Some(document_id) = state.peek().document_id.clone() else {
        return Ok(());
    };
    let extracted = extract_data(document_id.clone(), None).await?;
    let prompts = get_prompts(document_id).await?;
    state.write().extracted(extracted.extraction, prompts);
    Ok(())
}
