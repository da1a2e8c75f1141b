//! Client-side state of the upload → classify → extract workflow.

use serde::{Deserialize, Serialize};

use crate::{
    document::{Classification, DocumentRecord, ExtractedField, Extraction, PromptRecord},
    text_highlight::HighlightQuery,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum WorkflowStep {
    #[default]
    Upload,
    Classify,
    Extract,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ProcessingStage {
    #[default]
    Idle,
    Uploading,
    Classifying,
    Extracting,
}

impl ProcessingStage {
    pub fn label(&self) -> &'static str {
        match self {
            ProcessingStage::Idle => "",
            ProcessingStage::Uploading => "Uploading document",
            ProcessingStage::Classifying => "Classifying document",
            ProcessingStage::Extracting => "Extracting data",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            ProcessingStage::Idle => "inherit",
            ProcessingStage::Uploading => "#60A5FA",
            ProcessingStage::Classifying => "#C084FC",
            ProcessingStage::Extracting => "#FB923C",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct WorkflowState {
    pub step: WorkflowStep,
    pub document_id: Option<String>,
    pub document: Option<DocumentRecord>,
    pub classification: Option<Classification>,
    pub extraction: Option<Extraction>,
    pub prompts: Vec<PromptRecord>,
    pub stage: ProcessingStage,
    pub error: Option<String>,
    pub selected_field: Option<String>,
    pub highlight: Option<HighlightQuery>,
}

impl WorkflowState {
    pub fn is_loading(&self) -> bool {
        self.stage != ProcessingStage::Idle
    }

    pub fn begin_upload(&mut self) {
        self.stage = ProcessingStage::Uploading;
        self.error = None;
    }

    pub fn upload_finished(&mut self, document_id: String) {
        self.document_id = Some(document_id);
        self.stage = ProcessingStage::Classifying;
    }

    pub fn classified(&mut self, document: DocumentRecord, classification: Classification, prompts: Vec<PromptRecord>) {
        self.step = WorkflowStep::Classify;
        self.document_id = Some(document.id.clone());
        self.document = Some(document);
        self.classification = Some(classification);
        self.prompts = prompts;
        self.stage = ProcessingStage::Idle;
    }

    /// Returns false when there is no document to extract from.
    pub fn begin_extract(&mut self) -> bool {
        if self.document_id.is_none() {
            return false;
        }
        self.stage = ProcessingStage::Extracting;
        self.error = None;
        true
    }

    pub fn extracted(&mut self, extraction: Extraction, prompts: Vec<PromptRecord>) {
        self.step = WorkflowStep::Extract;
        self.extraction = Some(extraction);
        self.prompts = prompts;
        self.stage = ProcessingStage::Idle;
    }

    pub fn failed(&mut self, message: impl Into<String>) {
        self.stage = ProcessingStage::Idle;
        self.error = Some(message.into());
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Rebuilds the state of a document processed earlier; the step follows
    /// whatever results the record already carries.
    pub fn restore(&mut self, document: DocumentRecord, prompts: Vec<PromptRecord>) {
        self.reset();
        self.step = if document.extraction.is_some() {
            WorkflowStep::Extract
        } else if document.classification.is_some() {
            WorkflowStep::Classify
        } else {
            WorkflowStep::Upload
        };
        self.document_id = Some(document.id.clone());
        self.classification = document.classification.clone();
        self.extraction = document.extraction.clone();
        self.document = Some(document);
        self.prompts = prompts;
    }

    /// Replaces the active highlight with the field's source text.
    pub fn select_field(&mut self, field: &ExtractedField) {
        self.selected_field = Some(field.name.clone());
        self.highlight = highlight_query_for_field(field);
    }
}

/// Fields without a usable page number cannot be highlighted.
pub fn highlight_query_for_field(field: &ExtractedField) -> Option<HighlightQuery> {
    let page_number = u32::try_from(field.page_number).ok().filter(|page| *page >= 1)?;
    Some(HighlightQuery::new(field.source_text.clone(), page_number))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn document(id: &str) -> DocumentRecord {
        DocumentRecord {
            id: id.to_string(),
            filename: "invoice.pdf".to_string(),
            content_type: "application/pdf".to_string(),
            size: 10,
            pdf_base64: String::new(),
            classification: None,
            extraction: None,
            created_at: "2025-01-01T00:00:00Z".to_string(),
        }
    }

    fn field(name: &str, source_text: &str, page_number: i64) -> ExtractedField {
        ExtractedField {
            name: name.to_string(),
            source_text: source_text.to_string(),
            page_number,
            ..Default::default()
        }
    }

    #[test]
    fn happy_path() {
        let mut state = WorkflowState::default();
        assert_eq!(state.step, WorkflowStep::Upload);
        assert!(!state.is_loading());

        state.begin_upload();
        assert_eq!(state.stage, ProcessingStage::Uploading);
        assert!(state.is_loading());

        state.upload_finished("doc-1".to_string());
        assert_eq!(state.stage, ProcessingStage::Classifying);
        assert_eq!(state.step, WorkflowStep::Upload);

        state.classified(document("doc-1"), Classification::default(), vec![]);
        assert_eq!(state.step, WorkflowStep::Classify);
        assert!(!state.is_loading());

        assert!(state.begin_extract());
        assert_eq!(state.stage, ProcessingStage::Extracting);

        state.extracted(Extraction::default(), vec![]);
        assert_eq!(state.step, WorkflowStep::Extract);
        assert_eq!(state.stage, ProcessingStage::Idle);
        assert!(state.extraction.is_some());
    }

    #[test]
    fn extract_requires_a_document() {
        let mut state = WorkflowState::default();
        assert!(!state.begin_extract());
        assert_eq!(state.stage, ProcessingStage::Idle);
    }

    #[test]
    fn failure_keeps_step_and_clears_on_retry() {
        let mut state = WorkflowState::default();
        state.classified(document("doc-1"), Classification::default(), vec![]);
        state.begin_extract();
        state.failed("Extraction failed: 500");
        assert_eq!(state.step, WorkflowStep::Classify);
        assert_eq!(state.error.as_deref(), Some("Extraction failed: 500"));
        assert!(!state.is_loading());

        state.begin_extract();
        assert_eq!(state.error, None);
    }

    #[test]
    fn selecting_a_field_replaces_the_highlight() {
        let mut state = WorkflowState::default();
        state.select_field(&field("total", "Total: $5", 2));
        assert_eq!(state.selected_field.as_deref(), Some("total"));
        assert_eq!(state.highlight, Some(HighlightQuery::new("Total: $5", 2)));

        state.select_field(&field("date", "Jan 5", 1));
        assert_eq!(state.highlight, Some(HighlightQuery::new("Jan 5", 1)));

        state.select_field(&field("unknown", "whatever", 0));
        assert_eq!(state.selected_field.as_deref(), Some("unknown"));
        assert_eq!(state.highlight, None);
    }

    #[test]
    fn negative_page_has_no_highlight() {
        assert_eq!(highlight_query_for_field(&field("x", "y", -3)), None);
    }

    #[test]
    fn restore_follows_the_record() {
        let mut state = WorkflowState::default();
        state.failed("old error");

        let mut record = document("doc-2");
        record.classification = Some(Classification::default());
        state.restore(record.clone(), vec![]);
        assert_eq!(state.step, WorkflowStep::Classify);
        assert_eq!(state.document_id.as_deref(), Some("doc-2"));
        assert_eq!(state.error, None);

        record.extraction = Some(Extraction::default());
        state.restore(record, vec![]);
        assert_eq!(state.step, WorkflowStep::Extract);
        assert!(state.extraction.is_some());

        state.restore(document("doc-3"), vec![]);
        assert_eq!(state.step, WorkflowStep::Upload);
        assert!(state.classification.is_none());
    }

    #[test]
    fn reset_returns_to_upload() {
        let mut state = WorkflowState::default();
        state.classified(document("doc-1"), Classification::default(), vec![]);
        state.select_field(&field("total", "Total", 1));
        state.reset();
        assert_eq!(state, WorkflowState::default());
    }
}
