//! Token and cost bookkeeping across the agent calls made for a document.

use crate::document::{AgentType, PromptRecord};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CostSummary {
    pub total_input_tokens: u64,
    pub total_output_tokens: u64,
    pub total_cost: f64,
    pub classification: Option<PromptRecord>,
    pub extraction: Option<PromptRecord>,
}

impl CostSummary {
    /// Totals cover every record; the per-agent entries are the first record of each kind.
    pub fn from_prompts(prompts: &[PromptRecord]) -> Self {
        let first_of = |agent_type: AgentType| prompts.iter().find(|p| p.agent_type == agent_type).cloned();
        Self {
            total_input_tokens: prompts.iter().map(|p| p.input_tokens).sum(),
            total_output_tokens: prompts.iter().map(|p| p.output_tokens).sum(),
            // an empty f64 sum is -0.0, which would print as "$-0.0000"
            total_cost: prompts.iter().fold(0.0, |total, p| total + p.total_cost),
            classification: first_of(AgentType::Classification),
            extraction: first_of(AgentType::Extraction),
        }
    }

    pub fn agent_breakdown(&self) -> Vec<&PromptRecord> {
        self.classification.iter().chain(self.extraction.iter()).collect()
    }
}

pub fn format_cost(cost: f64) -> String {
    if cost < 0.01 {
        format!("${cost:.4}")
    } else {
        format!("${cost:.2}")
    }
}

pub fn format_tokens(tokens: u64) -> String {
    if tokens >= 1000 {
        format!("{:.1}k", tokens as f64 / 1000.0)
    } else {
        tokens.to_string()
    }
}

/// Thousands separators, for the detailed per-call counts.
pub fn format_token_count(tokens: u64) -> String {
    let digits = tokens.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

pub fn model_display_name(model: &str) -> String {
    if model.is_empty() || model.contains("sonnet-4-5") {
        "Claude Sonnet 4.5".to_string()
    } else if model.contains("sonnet") {
        "Claude Sonnet".to_string()
    } else if model.contains("opus") {
        "Claude Opus".to_string()
    } else if model.contains("haiku") {
        "Claude Haiku".to_string()
    } else {
        model.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, agent_type: AgentType, input_tokens: u64, output_tokens: u64, total_cost: f64) -> PromptRecord {
        PromptRecord {
            id: id.to_string(),
            document_id: "doc-1".to_string(),
            agent_type,
            prompt: String::new(),
            response: String::new(),
            schema: None,
            model: "claude-sonnet-4-5-20250929".to_string(),
            input_tokens,
            output_tokens,
            total_cost,
            created_at: "2025-01-01T00:00:00Z".to_string(),
        }
    }

    #[test]
    fn totals_cover_every_call() {
        let prompts = vec![
            record("p1", AgentType::Classification, 1200, 300, 0.0081),
            record("p2", AgentType::Extraction, 5000, 900, 0.0285),
            record("p3", AgentType::Extraction, 10, 5, 0.0001),
        ];
        let summary = CostSummary::from_prompts(&prompts);
        assert_eq!(summary.total_input_tokens, 6210);
        assert_eq!(summary.total_output_tokens, 1205);
        assert!((summary.total_cost - 0.0367).abs() < 1e-9);
        assert_eq!(summary.classification.as_ref().map(|p| p.id.as_str()), Some("p1"));
        assert_eq!(summary.extraction.as_ref().map(|p| p.id.as_str()), Some("p2"));
        assert_eq!(summary.agent_breakdown().len(), 2);
    }

    #[test]
    fn empty_history() {
        let summary = CostSummary::from_prompts(&[]);
        assert_eq!(summary, CostSummary::default());
        assert!(summary.agent_breakdown().is_empty());
        assert!(summary.total_cost.is_sign_positive());
        assert_eq!(format_cost(summary.total_cost), "$0.0000");
    }

    #[test]
    fn formatting() {
        assert_eq!(format_cost(0.00812), "$0.0081");
        assert_eq!(format_cost(0.01), "$0.01");
        assert_eq!(format_cost(1.234), "$1.23");
        assert_eq!(format_tokens(999), "999");
        assert_eq!(format_tokens(1000), "1.0k");
        assert_eq!(format_tokens(12345), "12.3k");
        assert_eq!(format_token_count(12), "12");
        assert_eq!(format_token_count(1234567), "1,234,567");
        assert_eq!(format_token_count(100000), "100,000");
    }

    #[test]
    fn model_names() {
        assert_eq!(model_display_name("claude-sonnet-4-5-20250929"), "Claude Sonnet 4.5");
        assert_eq!(model_display_name("claude-3-sonnet"), "Claude Sonnet");
        assert_eq!(model_display_name("claude-opus-4"), "Claude Opus");
        assert_eq!(model_display_name("claude-3-haiku"), "Claude Haiku");
        assert_eq!(model_display_name("mock-model"), "mock-model");
    }
}
