//! Document view state carried in the URL, so a highlighted field can be shared.

use common::document::ExtractedField;
use common::text_highlight::HighlightQuery;
use common::workflow::highlight_query_for_field;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DocViewerState {
    pub selected_field: Option<String>,
    pub highlight: Option<HighlightQuery>,
}

impl DocViewerState {
    pub fn from_field(field: &ExtractedField) -> Self {
        Self {
            selected_field: Some(field.name.clone()),
            highlight: highlight_query_for_field(field),
        }
    }
}
