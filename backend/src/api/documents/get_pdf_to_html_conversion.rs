use anyhow::Context;
use common::pdf_to_html_conversion::{PDFToHtmlConversionResponse, RenderedPdfDocument, RenderedPdfPage};

use crate::api::documents::get_document::get_document;
use crate::service_utils::document_service::decode_pdf_base64;
use crate::service_utils::html_text_runs::annotate_page_text_runs;

pub async fn get_pdf_to_html_conversion(document_id: &str) -> anyhow::Result<PDFToHtmlConversionResponse> {
    let document = get_document(document_id).await?;
    let pdf_data = decode_pdf_base64(&document.pdf_base64)?;
    if pdf_data.is_empty() {
        anyhow::bail!("Document has no PDF content");
    }
    tracing::info!("Converting {} ({} bytes) to HTML", document.filename, pdf_data.len());

    let stream_size = pdf_data.len();
    let client = reqwest::Client::new();
    let response = client
        .post(std::env::var("PDF_TO_HTML_ENDPOINT").context("PDF_TO_HTML_ENDPOINT is not set")?)
        .body(bytes::Bytes::from(pdf_data))
        .header("Content-Length", format!("{}", stream_size))
        .send()
        .await?;
    tracing::info!("Response received");
    let response = response.error_for_status()?;
    let body = response.text().await?;
    let body = serde_json::from_str::<PDFToHtmlConversionResponse>(&body)?;
    Ok(body)
}

pub fn render_conversion(conversion: PDFToHtmlConversionResponse) -> RenderedPdfDocument {
    let pages = conversion
        .pages
        .iter()
        .enumerate()
        .map(|(page_index, page_html)| {
            let page_number = page_index as u32 + 1;
            let annotated = annotate_page_text_runs(page_html, page_number);
            RenderedPdfPage { page_number, html: annotated.html, text_runs: annotated.text_runs }
        })
        .collect();
    RenderedPdfDocument {
        styles: conversion.styles,
        page_width_px: conversion.page_width_px,
        page_height_px: conversion.page_height_px,
        pages,
    }
}

/// Converted pages with their text runs, ready for highlighting in the browser.
pub async fn get_rendered_pdf(document_id: String) -> anyhow::Result<RenderedPdfDocument> {
    let t0 = std::time::Instant::now();
    let conversion = get_pdf_to_html_conversion(&document_id).await?;
    let rendered = tokio::task::spawn_blocking(move || render_conversion(conversion)).await?;
    tracing::info!(
        "get_rendered_pdf: {} pages, {} runs in {}ms",
        rendered.page_count(),
        rendered.pages.iter().map(|page| page.text_runs.len()).sum::<usize>(),
        t0.elapsed().as_millis()
    );
    Ok(rendered)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pages_are_numbered_from_one() {
        let conversion = PDFToHtmlConversionResponse {
            pages: vec!["<div>Invoice</div>".to_string(), "<div>Total: $5</div>".to_string()],
            styles: vec![".pf{}".to_string()],
            page_width_px: 612.0,
            page_height_px: 792.0,
        };
        let rendered = render_conversion(conversion);
        assert_eq!(rendered.page_count(), 2);
        let page = rendered.page(2).unwrap();
        assert_eq!(page.text_runs[0].content, "Total: $5");
        assert_eq!(page.text_runs[0].page_number, 2);
        assert_eq!(page.text_runs[0].order_index, 0);
        assert_eq!(rendered.styles, vec![".pf{}"]);
    }
}
