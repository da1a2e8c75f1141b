//! PDF pages converted to html, and the text runs found on each page.

use serde::{Deserialize, Serialize};

use crate::text_highlight::{HighlightResult, RUN_INDEX_ATTRIBUTE, TextRun};

pub const MIN_ZOOM_PERCENT: u32 = 50;
pub const MAX_ZOOM_PERCENT: u32 = 200;
pub const ZOOM_STEP_PERCENT: u32 = 10;
pub const DEFAULT_ZOOM_PERCENT: u32 = 100;

const EXACT_HIGHLIGHT_RULE: &str =
    "background-color: rgba(255, 221, 0, 0.6); outline: 1px solid rgba(202, 138, 4, 0.9); border-radius: 2px;";
const APPROXIMATE_HIGHLIGHT_RULE: &str =
    "background-color: rgba(255, 221, 0, 0.25); outline: 1px dashed rgba(202, 138, 4, 0.9); border-radius: 2px;";

/// Response of the PDF to html conversion endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PDFToHtmlConversionResponse {
    pub pages: Vec<String>,
    pub styles: Vec<String>,
    pub page_width_px: f32,
    pub page_height_px: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderedPdfPage {
    /// 1-based, as reported on extracted fields.
    pub page_number: u32,
    /// Page html with every text run wrapped in a `data-run-index` span.
    pub html: String,
    pub text_runs: Vec<TextRun>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderedPdfDocument {
    pub styles: Vec<String>,
    pub page_width_px: f32,
    pub page_height_px: f32,
    pub pages: Vec<RenderedPdfPage>,
}

impl RenderedPdfDocument {
    pub fn page(&self, page_number: u32) -> Option<&RenderedPdfPage> {
        self.pages.iter().find(|page| page.page_number == page_number)
    }

    pub fn page_count(&self) -> u32 {
        self.pages.len() as u32
    }

    /// Full iframe document for one page, with the highlight rule appended last.
    pub fn page_srcdoc(&self, page: &RenderedPdfPage, highlight: &HighlightResult) -> String {
        let styles = self.styles.join("\n");
        let highlight_css = highlight_css(highlight);
        format!("{styles}\n{}\n<style>{highlight_css}</style>", page.html)
    }
}

/// CSS rule marking the matched runs. Built from scratch for each result, so an
/// older highlight never survives a new query.
pub fn highlight_css(highlight: &HighlightResult) -> String {
    if highlight.is_empty() {
        return String::new();
    }
    let selectors = highlight
        .matched_run_indices
        .iter()
        .map(|index| format!("[{RUN_INDEX_ATTRIBUTE}=\"{index}\"]"))
        .collect::<Vec<_>>()
        .join(", ");
    let rule = if highlight.is_approximate() { APPROXIMATE_HIGHLIGHT_RULE } else { EXACT_HIGHLIGHT_RULE };
    format!("{selectors} {{ {rule} }}")
}

pub fn zoom_in(zoom_percent: u32) -> u32 {
    (zoom_percent + ZOOM_STEP_PERCENT).min(MAX_ZOOM_PERCENT)
}

pub fn zoom_out(zoom_percent: u32) -> u32 {
    zoom_percent.saturating_sub(ZOOM_STEP_PERCENT).max(MIN_ZOOM_PERCENT)
}

/// Keeps a page number within `1..=page_count`; an empty document stays on page 1.
pub fn clamp_page(page_number: u32, page_count: u32) -> u32 {
    page_number.clamp(1, page_count.max(1))
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::text_highlight::MatchTier;

    fn result(indices: &[u32], tier: Option<MatchTier>) -> HighlightResult {
        HighlightResult { matched_run_indices: indices.iter().copied().collect::<BTreeSet<_>>(), tier }
    }

    #[test]
    fn no_match_means_no_rule() {
        assert_eq!(highlight_css(&HighlightResult::default()), "");
    }

    #[test]
    fn exact_and_approximate_rules_differ() {
        let exact = highlight_css(&result(&[1, 3], Some(MatchTier::ExactSubstring)));
        assert!(exact.starts_with(r#"[data-run-index="1"], [data-run-index="3"] {"#));
        assert!(exact.contains("solid"));

        let approximate = highlight_css(&result(&[2], Some(MatchTier::WindowedConcatenation)));
        assert!(approximate.starts_with(r#"[data-run-index="2"] {"#));
        assert!(approximate.contains("dashed"));
    }

    #[test]
    fn srcdoc_carries_styles_page_and_highlight() {
        let page = RenderedPdfPage {
            page_number: 1,
            html: r#"<div><span data-run-index="0">Total</span></div>"#.to_string(),
            text_runs: vec![],
        };
        let document = RenderedPdfDocument {
            styles: vec!["<style>.pf{}</style>".to_string()],
            page_width_px: 600.0,
            page_height_px: 800.0,
            pages: vec![page.clone()],
        };
        let srcdoc = document.page_srcdoc(&page, &result(&[0], Some(MatchTier::ExactSubstring)));
        assert!(srcdoc.starts_with("<style>.pf{}</style>\n<div>"));
        assert!(srcdoc.ends_with("</style>"));
        assert!(srcdoc.contains(r#"[data-run-index="0"] {"#));
    }

    #[test]
    fn zoom_stays_in_range() {
        assert_eq!(zoom_in(DEFAULT_ZOOM_PERCENT), 110);
        assert_eq!(zoom_in(200), 200);
        assert_eq!(zoom_out(60), 50);
        assert_eq!(zoom_out(50), 50);
    }

    #[test]
    fn page_is_clamped() {
        assert_eq!(clamp_page(0, 3), 1);
        assert_eq!(clamp_page(7, 3), 3);
        assert_eq!(clamp_page(2, 3), 2);
        assert_eq!(clamp_page(5, 0), 1);
    }
}
