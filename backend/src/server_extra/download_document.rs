use axum::{
    body::Body,
    extract::Path,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::info;

use crate::api::documents::get_document::get_document;
use crate::service_utils::document_service::decode_pdf_base64;

fn attachment_filename(filename: &str) -> String {
    let filename = filename
        .chars()
        .filter(|c| !c.is_control() && *c != '"' && *c != '\\')
        .collect::<String>();
    if filename.trim().is_empty() {
        "document.pdf".to_string()
    } else {
        filename
    }
}

async fn _download_document(document_id: String) -> anyhow::Result<Response> {
    info!("Downloading document: {}", document_id);
    let document = get_document(&document_id).await?;
    let data = decode_pdf_base64(&document.pdf_base64)?;
    tracing::info!("Document size: {}", data.len());

    let headers: [(String, String); 2] = [
        ("Content-Type".to_string(), "application/pdf".to_string()),
        (
            "Content-Disposition".to_string(),
            format!("attachment; filename=\"{}\"", attachment_filename(&document.filename)),
        ),
    ];
    Ok((headers, Body::from(data)).into_response())
}

pub async fn download_document(Path(document_id): Path<String>) -> Response {
    match _download_document(document_id).await {
        Ok(response) => response,
        Err(e) => {
            tracing::error!("download_document: request failed: {:#?}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, Body::from(e.to_string())).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filename_cannot_break_the_header() {
        assert_eq!(attachment_filename("invoice.pdf"), "invoice.pdf");
        assert_eq!(attachment_filename("a\"b\r\n.pdf"), "ab.pdf");
        assert_eq!(attachment_filename(""), "document.pdf");
    }
}
