use common::document::{ExtractRequest, ExtractResponse};

use crate::service_utils::document_service::{document_service_post_json, validate_service_id};

/// Runs extraction; `document_type` overrides the classified type when set.
pub async fn extract_data(document_id: String, document_type: Option<String>) -> anyhow::Result<ExtractResponse> {
    let document_id = validate_service_id(&document_id)?.to_string();
    let document_type = document_type.map(|t| t.trim().to_string()).filter(|t| !t.is_empty());
    let request = ExtractRequest { document_id, document_type };
    let response = document_service_post_json::<_, ExtractResponse>("api/extract", &request).await?;
    tracing::info!(
        "Extracted {} fields from {}",
        response.extraction.fields.len(),
        request.document_id
    );
    Ok(response)
}
