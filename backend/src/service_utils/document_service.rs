//! HTTP plumbing for the document classification/extraction service.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Serialize, de::DeserializeOwned};

pub fn get_document_service_url() -> String {
    std::env::var("DOCUMENT_SERVICE_URL").unwrap_or("http://localhost:8080".to_string())
}

pub fn document_service_endpoint(path: &str) -> String {
    format!(
        "{}/{}",
        get_document_service_url().trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Document and prompt ids are uuids; anything else never reaches the service url.
pub fn validate_service_id(id: &str) -> anyhow::Result<&str> {
    let id = id.trim();
    if id.is_empty() {
        anyhow::bail!("Document ID required");
    }
    if !id.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_') {
        anyhow::bail!("Invalid id: {:?}", id);
    }
    Ok(id)
}

pub fn decode_pdf_base64(pdf_base64: &str) -> anyhow::Result<Vec<u8>> {
    let data = STANDARD.decode(pdf_base64.trim().as_bytes())?;
    Ok(data)
}

pub async fn document_service_get<T: DeserializeOwned>(path: &str) -> anyhow::Result<T> {
    let url = document_service_endpoint(path);
    tracing::info!("DOCUMENT SERVICE GET: {}", url);
    let client = reqwest::Client::new();
    let response = client.get(url).send().await?;
    read_service_response(response).await
}

pub async fn document_service_post_json<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> anyhow::Result<T> {
    let url = document_service_endpoint(path);
    tracing::info!("DOCUMENT SERVICE POST: {}", url);
    let body = serde_json::to_string(body)?;
    let client = reqwest::Client::new();
    let response = client
        .post(url)
        .header("Content-Type", "application/json")
        .body(body)
        .send()
        .await?;
    read_service_response(response).await
}

pub async fn read_service_response<T: DeserializeOwned>(response: reqwest::Response) -> anyhow::Result<T> {
    let t0 = std::time::Instant::now();
    let status = response.status();
    let response_txt = response.text().await?;
    if status.is_client_error() || status.is_server_error() {
        anyhow::bail!("Error: {}: {}", status, response_txt.trim());
    }
    tracing::info!(
        "DOCUMENT SERVICE RESPONSE: len = {} (read in {}ms)",
        response_txt.len(),
        t0.elapsed().as_millis()
    );
    let response = serde_json::from_str::<T>(&response_txt)?;
    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_checked_before_building_urls() {
        assert_eq!(validate_service_id(" 3f2b-11aa ").unwrap(), "3f2b-11aa");
        assert!(validate_service_id("").is_err());
        assert!(validate_service_id("../health").is_err());
        assert!(validate_service_id("a/b").is_err());
    }

    #[test]
    fn pdf_payload_decodes() {
        assert_eq!(decode_pdf_base64("JVBERi0xLjQ=\n").unwrap(), b"%PDF-1.4");
        assert!(decode_pdf_base64("not base64!").is_err());
    }
}
