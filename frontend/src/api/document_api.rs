//! Server functions wrapping the backend document API.

use common::document::{ClassifyResponse, DocumentRecord, ExtractResponse, PromptRecord, UploadResponse};
use common::pdf_to_html_conversion::RenderedPdfDocument;
use dioxus::prelude::*;

#[server]
pub async fn upload_document(filename: String, pdf_base64: String) -> Result<UploadResponse, ServerFnError> {
    let x = backend::api::documents::upload_document::upload_document_base64(filename, pdf_base64).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 400, details: None })
}

#[server]
pub async fn classify_document(document_id: String) -> Result<ClassifyResponse, ServerFnError> {
    let x = backend::api::documents::classify_document::classify_document(document_id).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}

#[server]
pub async fn extract_data(document_id: String, document_type: Option<String>) -> Result<ExtractResponse, ServerFnError> {
    let x = backend::api::documents::extract_data::extract_data(document_id, document_type).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}

/// The record comes back without its pdf payload; pages are fetched with `get_rendered_pdf`.
#[server]
pub async fn get_document(document_id: String) -> Result<DocumentRecord, ServerFnError> {
    let x = backend::api::documents::get_document::get_document_info(&document_id).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}

#[server]
pub async fn get_prompts(document_id: String) -> Result<Vec<PromptRecord>, ServerFnError> {
    let x = backend::api::prompts::get_prompts::get_prompts(document_id).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}

#[server]
pub async fn get_rendered_pdf(document_id: String) -> Result<RenderedPdfDocument, ServerFnError> {
    backend::api::documents::get_pdf_to_html_conversion::get_rendered_pdf(document_id)
        .await
        .map_err(|e| ServerFnError::from(e))
}

pub fn download_document_url(document_id: &str) -> String {
    format!("/_download_document/{}", document_id)
}
