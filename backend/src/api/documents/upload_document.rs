use common::document::UploadResponse;

use crate::service_utils::document_service::{decode_pdf_base64, document_service_endpoint, read_service_response};

pub const MAX_UPLOAD_BYTES: usize = 50 * 1024 * 1024;
const PDF_MAGIC: &[u8] = b"%PDF";

pub fn validate_pdf_upload(filename: &str, pdf_data: &[u8]) -> anyhow::Result<()> {
    if filename.trim().is_empty() {
        anyhow::bail!("No file provided");
    }
    if pdf_data.len() > MAX_UPLOAD_BYTES {
        anyhow::bail!("File too large: {} bytes (limit {} bytes)", pdf_data.len(), MAX_UPLOAD_BYTES);
    }
    if !pdf_data.starts_with(PDF_MAGIC) {
        anyhow::bail!("Only PDF files are supported");
    }
    Ok(())
}

pub async fn upload_document(filename: String, pdf_data: Vec<u8>) -> anyhow::Result<UploadResponse> {
    validate_pdf_upload(&filename, &pdf_data)?;
    let size = pdf_data.len();
    let part = reqwest::multipart::Part::bytes(pdf_data)
        .file_name(filename.clone())
        .mime_str("application/pdf")?;
    let form = reqwest::multipart::Form::new().part("file", part);

    let client = reqwest::Client::new();
    let response = client
        .post(document_service_endpoint("api/upload"))
        .multipart(form)
        .send()
        .await?;
    let response = read_service_response::<UploadResponse>(response).await?;
    tracing::info!("Uploaded {} ({} bytes) as {}", filename, size, response.id);
    Ok(response)
}

/// Browser uploads arrive base64 encoded.
pub async fn upload_document_base64(filename: String, pdf_base64: String) -> anyhow::Result<UploadResponse> {
    let pdf_data = decode_pdf_base64(&pdf_base64)?;
    upload_document(filename, pdf_data).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_pdf_bytes() {
        assert!(validate_pdf_upload("invoice.pdf", b"%PDF-1.7\n...").is_ok());
    }

    #[test]
    fn rejects_other_files() {
        assert!(validate_pdf_upload("notes.txt", b"hello").is_err());
        assert!(validate_pdf_upload("empty.pdf", b"").is_err());
        assert!(validate_pdf_upload("", b"%PDF-1.7").is_err());
    }

    #[test]
    fn rejects_oversized_files() {
        let mut data = b"%PDF".to_vec();
        data.resize(MAX_UPLOAD_BYTES + 1, 0);
        let err = validate_pdf_upload("big.pdf", &data).unwrap_err();
        assert!(err.to_string().starts_with("File too large"));
    }
}
