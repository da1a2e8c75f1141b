use common::document::{ClassifyRequest, ClassifyResponse};

use crate::service_utils::document_service::{document_service_post_json, validate_service_id};

pub async fn classify_document(document_id: String) -> anyhow::Result<ClassifyResponse> {
    let document_id = validate_service_id(&document_id)?.to_string();
    let request = ClassifyRequest { document_id };
    let response = document_service_post_json::<_, ClassifyResponse>("api/classify", &request).await?;
    tracing::info!(
        "Classified {} as {} ({}%)",
        request.document_id,
        response.classification.document_type,
        response.classification.confidence_percent()
    );
    Ok(response)
}
