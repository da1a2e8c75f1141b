//! Prompt history kept by the document service for each agent call.

use common::document::PromptRecord;
use serde::Deserialize;

use crate::service_utils::document_service::{document_service_get, validate_service_id};

/// `/api/prompts/{id}` answers with one record, a list, or null.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum PromptHistoryResponse {
    Many(Vec<PromptRecord>),
    One(Box<PromptRecord>),
}

fn prompt_history_records(response: Option<PromptHistoryResponse>) -> Vec<PromptRecord> {
    let mut records = match response {
        None => vec![],
        Some(PromptHistoryResponse::Many(records)) => records,
        Some(PromptHistoryResponse::One(record)) => vec![*record],
    };
    records.sort_by(|a, b| a.created_at.cmp(&b.created_at));
    records
}

/// All prompts recorded for a document, oldest first.
pub async fn get_prompts(document_id: String) -> anyhow::Result<Vec<PromptRecord>> {
    let document_id = validate_service_id(&document_id)?;
    let response =
        document_service_get::<Option<PromptHistoryResponse>>(&format!("api/prompts/{}", document_id)).await?;
    let records = prompt_history_records(response);
    tracing::info!("get_prompts: {} records for {}", records.len(), document_id);
    Ok(records)
}

#[cfg(test)]
mod tests {
    use common::document::AgentType;

    use super::*;

    fn record_json(id: &str, agent: &str, created_at: &str) -> String {
        format!(
            r#"{{"id":"{id}","document_id":"doc-1","agent_type":"{agent}","prompt":"p","response":"r","model":"claude-sonnet-4-5","input_tokens":1200,"output_tokens":300,"total_cost":0.0081,"created_at":"{created_at}"}}"#
        )
    }

    fn decode(body: &str) -> Vec<PromptRecord> {
        prompt_history_records(serde_json::from_str::<Option<PromptHistoryResponse>>(body).unwrap())
    }

    #[test]
    fn null_is_empty_history() {
        assert!(decode("null").is_empty());
        assert!(decode("[]").is_empty());
    }

    #[test]
    fn single_record_is_accepted() {
        let records = decode(&record_json("p1", "classification", "2025-01-01T10:00:00Z"));
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].agent_type, AgentType::Classification);
        assert_eq!(records[0].input_tokens, 1200);
        assert_eq!(records[0].schema, None);
    }

    #[test]
    fn list_is_sorted_oldest_first() {
        let body = format!(
            "[{},{}]",
            record_json("p2", "extraction", "2025-01-01T10:05:00Z"),
            record_json("p1", "classification", "2025-01-01T10:00:00Z")
        );
        let ids = decode(&body).into_iter().map(|r| r.id).collect::<Vec<_>>();
        assert_eq!(ids, vec!["p1", "p2"]);
    }
}
