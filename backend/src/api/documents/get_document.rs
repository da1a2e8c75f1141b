use common::document::DocumentRecord;

use crate::service_utils::document_service::{document_service_get, validate_service_id};

pub async fn get_document(document_id: &str) -> anyhow::Result<DocumentRecord> {
    let document_id = validate_service_id(document_id)?;
    document_service_get::<DocumentRecord>(&format!("api/documents/{}", document_id)).await
}

/// Same record without the pdf payload, for sending to the browser.
pub async fn get_document_info(document_id: &str) -> anyhow::Result<DocumentRecord> {
    let mut document = get_document(document_id).await?;
    document.pdf_base64.clear();
    Ok(document)
}
