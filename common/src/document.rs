//! Document service models shared by the frontend and backend.

use serde::{Deserialize, Deserializer, Serialize};

/// The service encodes empty Go slices and maps as `null`.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Classification {
    pub document_type: String,
    pub confidence: f64,
    pub reasoning: String,
    #[serde(deserialize_with = "null_as_default")]
    pub subtypes: Vec<String>,
    pub language: Option<String>,
}

impl Classification {
    pub fn confidence_percent(&self) -> u32 {
        (self.confidence * 100.0).round().clamp(0.0, 100.0) as u32
    }

    pub fn confidence_level(&self) -> ConfidenceLevel {
        ConfidenceLevel::for_classification(self.confidence)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ExtractedField {
    pub name: String,
    pub value: serde_json::Value,
    pub source_text: String,
    pub page_number: i64,
    pub confidence: f64,
}

impl ExtractedField {
    pub fn display_name(&self) -> String {
        self.name.replace('_', " ")
    }

    pub fn display_value(&self) -> String {
        match &self.value {
            serde_json::Value::Null => String::new(),
            serde_json::Value::String(s) => s.clone(),
            value @ (serde_json::Value::Object(_) | serde_json::Value::Array(_)) => {
                serde_json::to_string_pretty(value).unwrap_or_default()
            }
            value => value.to_string(),
        }
    }

    pub fn value_is_structured(&self) -> bool {
        matches!(self.value, serde_json::Value::Object(_) | serde_json::Value::Array(_))
    }

    pub fn confidence_percent(&self) -> u32 {
        (self.confidence * 100.0).round().clamp(0.0, 100.0) as u32
    }

    pub fn confidence_level(&self) -> ConfidenceLevel {
        ConfidenceLevel::for_field(self.confidence)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Extraction {
    pub schema_used: String,
    #[serde(deserialize_with = "null_as_default")]
    pub data: serde_json::Map<String, serde_json::Value>,
    #[serde(deserialize_with = "null_as_default")]
    pub fields: Vec<ExtractedField>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentRecord {
    pub id: String,
    pub filename: String,
    pub content_type: String,
    pub size: i64,
    #[serde(default)]
    pub pdf_base64: String,
    #[serde(default)]
    pub classification: Option<Classification>,
    #[serde(default)]
    pub extraction: Option<Extraction>,
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadResponse {
    pub id: String,
    pub filename: String,
    pub size: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifyRequest {
    pub document_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifyResponse {
    pub document_id: String,
    pub classification: Classification,
    pub prompt_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractRequest {
    pub document_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractResponse {
    pub document_id: String,
    pub extraction: Extraction,
    pub prompt_id: String,
    pub schema_used: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentType {
    Classification,
    Extraction,
}

impl AgentType {
    pub fn label(&self) -> &'static str {
        match self {
            AgentType::Classification => "Classification",
            AgentType::Extraction => "Extraction",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromptRecord {
    pub id: String,
    pub document_id: String,
    pub agent_type: AgentType,
    pub prompt: String,
    pub response: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,
    pub model: String,
    #[serde(default)]
    pub input_tokens: u64,
    #[serde(default)]
    pub output_tokens: u64,
    #[serde(default)]
    pub total_cost: f64,
    pub created_at: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfidenceLevel {
    High,
    Medium,
    Low,
}

impl ConfidenceLevel {
    pub fn for_field(confidence: f64) -> Self {
        if confidence >= 0.9 {
            ConfidenceLevel::High
        } else if confidence >= 0.7 {
            ConfidenceLevel::Medium
        } else {
            ConfidenceLevel::Low
        }
    }

    /// Classification confidence is judged on the rounded percentage.
    pub fn for_classification(confidence: f64) -> Self {
        let percent = (confidence * 100.0).round();
        if percent >= 80.0 {
            ConfidenceLevel::High
        } else if percent >= 60.0 {
            ConfidenceLevel::Medium
        } else {
            ConfidenceLevel::Low
        }
    }

    pub fn text_color(&self) -> &'static str {
        match self {
            ConfidenceLevel::High => "#15803D",
            ConfidenceLevel::Medium => "#A16207",
            ConfidenceLevel::Low => "#B91C1C",
        }
    }

    pub fn background_color(&self) -> &'static str {
        match self {
            ConfidenceLevel::High => "#DCFCE7",
            ConfidenceLevel::Medium => "#FEF9C3",
            ConfidenceLevel::Low => "#FEE2E2",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn field(value: serde_json::Value) -> ExtractedField {
        ExtractedField { name: "invoice_number".to_string(), value, ..Default::default() }
    }

    #[test]
    fn field_values_render_like_the_form_expects() {
        assert_eq!(field(json!(null)).display_value(), "");
        assert_eq!(field(json!("INV-1")).display_value(), "INV-1");
        assert_eq!(field(json!(12.5)).display_value(), "12.5");
        assert_eq!(field(json!(true)).display_value(), "true");
        assert_eq!(field(json!({"a": 1})).display_value(), "{\n  \"a\": 1\n}");
        assert!(field(json!([1])).value_is_structured());
        assert_eq!(field(json!(null)).display_name(), "invoice number");
    }

    #[test]
    fn confidence_thresholds() {
        assert_eq!(ConfidenceLevel::for_field(0.95), ConfidenceLevel::High);
        assert_eq!(ConfidenceLevel::for_field(0.9), ConfidenceLevel::High);
        assert_eq!(ConfidenceLevel::for_field(0.75), ConfidenceLevel::Medium);
        assert_eq!(ConfidenceLevel::for_field(0.5), ConfidenceLevel::Low);
        assert_eq!(ConfidenceLevel::for_classification(0.796), ConfidenceLevel::High);
        assert_eq!(ConfidenceLevel::for_classification(0.6), ConfidenceLevel::Medium);
        assert_eq!(ConfidenceLevel::for_classification(0.59), ConfidenceLevel::Low);
    }

    #[test]
    fn decodes_service_document() {
        let body = r#"{
            "id": "doc-1",
            "filename": "invoice.pdf",
            "content_type": "application/pdf",
            "size": 1024,
            "pdf_base64": "JVBERi0=",
            "classification": {"document_type": "invoice", "confidence": 0.93, "reasoning": "header"},
            "extraction": {
                "schema_used": "{}",
                "data": {"total": 12},
                "fields": [{"name": "total", "value": 12, "source_text": "Total: 12", "page_number": 1, "confidence": 0.8}]
            },
            "created_at": "2025-01-01T00:00:00Z"
        }"#;
        let document: DocumentRecord = serde_json::from_str(body).unwrap();
        let classification = document.classification.unwrap();
        assert!(classification.subtypes.is_empty());
        assert_eq!(classification.confidence_percent(), 93);
        let extraction = document.extraction.unwrap();
        assert_eq!(extraction.fields[0].page_number, 1);
        assert_eq!(extraction.fields[0].confidence_level(), ConfidenceLevel::Medium);
    }

    #[test]
    fn null_collections_decode_as_empty() {
        let body = r#"{"schema_used": "x", "data": null, "fields": null}"#;
        let extraction: Extraction = serde_json::from_str(body).unwrap();
        assert!(extraction.data.is_empty());
        assert!(extraction.fields.is_empty());
        let classification: Classification =
            serde_json::from_str(r#"{"document_type": "memo", "subtypes": null}"#).unwrap();
        assert!(classification.subtypes.is_empty());
        assert_eq!(classification.confidence_level(), ConfidenceLevel::Low);
    }

    #[test]
    fn agent_type_is_lowercase_on_the_wire() {
        assert_eq!(serde_json::to_string(&AgentType::Extraction).unwrap(), "\"extraction\"");
        let t: AgentType = serde_json::from_str("\"classification\"").unwrap();
        assert_eq!(t, AgentType::Classification);
    }
}
