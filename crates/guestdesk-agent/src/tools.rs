//! Tool implementations backing the persona tool specs.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;

use guestdesk_core::error::{GuestDeskError, Result};
use guestdesk_core::traits::Tool;
use guestdesk_core::types::{Escalation, ToolDefinition, ToolResult};
use guestdesk_faq::{Corpus, SearchOptions};
use guestdesk_notify::EscalationRouter;

use crate::LookupVariant;

/// Look up an answer from the FAQ corpus using a question or keywords.
pub struct FaqLookupTool {
    corpus: Arc<Corpus>,
    options: SearchOptions,
    variant: LookupVariant,
}

#[derive(Deserialize)]
struct LookupArgs {
    query: String,
}

impl FaqLookupTool {
    pub fn new(corpus: Arc<Corpus>, options: SearchOptions, variant: LookupVariant) -> Self {
        Self { corpus, options, variant }
    }
}

#[async_trait]
impl Tool for FaqLookupTool {
    fn name(&self) -> &str {
        "lookup_faq"
    }

    fn definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: "lookup_faq".into(),
            description: "Look up an answer from the FAQ list using a question or keywords.".into(),
            parameters: serde_json::json!({
                "type": "object",
                "properties": {
                    "query": {
                        "type": "string",
                        "description": "The guest question or keywords to search for."
                    }
                },
                "required": ["query"],
                "additionalProperties": false
            }),
        }
    }

    async fn execute(&self, arguments: &str) -> Result<ToolResult> {
        let args: LookupArgs = serde_json::from_str(arguments)
            .map_err(|e| GuestDeskError::Tool(format!("bad lookup_faq arguments: {e}")))?;

        let output = match self.variant {
            LookupVariant::BestMatch => {
                let answer = self.corpus.best_match(&args.query, self.options.mode);
                serde_json::json!({ "answer": answer })
            }
            LookupVariant::Ranked => {
                let results = self.corpus.search(&args.query, self.options);
                serde_json::json!({ "results": results })
            }
        };

        tracing::debug!("lookup_faq(\"{}\") → {}", args.query, output);
        Ok(ToolResult { output: output.to_string(), success: true })
    }
}

/// Notify human staff that a guest needs help.
pub struct EscalateTool {
    router: Arc<EscalationRouter>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct EscalateArgs {
    guest_name: String,
    question: String,
}

impl EscalateTool {
    pub fn new(router: Arc<EscalationRouter>) -> Self {
        Self { router }
    }
}

#[async_trait]
impl Tool for EscalateTool {
    fn name(&self) -> &str {
        "escalate_to_staff"
    }

    fn definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: "escalate_to_staff".into(),
            description: "Notify human staff when the guest asks for help from a person.".into(),
            parameters: serde_json::json!({
                "type": "object",
                "properties": {
                    "guestName": { "type": "string" },
                    "question": { "type": "string" }
                },
                "required": ["guestName", "question"],
                "additionalProperties": false
            }),
        }
    }

    async fn execute(&self, arguments: &str) -> Result<ToolResult> {
        let args: EscalateArgs = serde_json::from_str(arguments)
            .map_err(|e| GuestDeskError::Tool(format!("bad escalate_to_staff arguments: {e}")))?;

        let escalation = Escalation::new(&args.guest_name, &args.question);
        match self.router.dispatch(escalation).await {
            Ok(()) => Ok(ToolResult {
                output: serde_json::json!({ "success": true }).to_string(),
                success: true,
            }),
            Err(e) => {
                tracing::warn!("escalation failed: {e}");
                Ok(ToolResult {
                    output: serde_json::json!({ "success": false }).to_string(),
                    success: false,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use guestdesk_faq::{FaqRecord, MatchMode};
    use guestdesk_notify::MemorySink;

    fn test_corpus() -> Arc<Corpus> {
        Arc::new(Corpus::from_records(vec![
            FaqRecord::new(
                "pool",
                "What are the pool hours?",
                &["pool", "hours"],
                "8am-8pm",
            ),
            FaqRecord::new("gym", "Where is the gym?", &["gym"], "Level 2"),
        ]))
    }

    #[tokio::test]
    async fn test_lookup_best_match() {
        let tool = FaqLookupTool::new(
            test_corpus(),
            SearchOptions::default(),
            LookupVariant::BestMatch,
        );
        let result = tool.execute(r#"{"query": "pool hours"}"#).await.unwrap();
        assert!(result.success);
        let value: serde_json::Value = serde_json::from_str(&result.output).unwrap();
        assert_eq!(value["answer"], "8am-8pm");
    }

    #[tokio::test]
    async fn test_lookup_no_match_is_null_not_error() {
        let tool = FaqLookupTool::new(
            test_corpus(),
            SearchOptions::default(),
            LookupVariant::BestMatch,
        );
        let result = tool.execute(r#"{"query": "helicopter"}"#).await.unwrap();
        assert!(result.success);
        let value: serde_json::Value = serde_json::from_str(&result.output).unwrap();
        assert!(value["answer"].is_null());
    }

    #[tokio::test]
    async fn test_lookup_ranked() {
        let tool = FaqLookupTool::new(
            test_corpus(),
            SearchOptions { mode: MatchMode::Bidirectional, top_n: 3 },
            LookupVariant::Ranked,
        );
        let result = tool.execute(r#"{"query": "pool hours"}"#).await.unwrap();
        let value: serde_json::Value = serde_json::from_str(&result.output).unwrap();
        let results = value["results"].as_array().unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0]["answer"], "8am-8pm");
    }

    #[tokio::test]
    async fn test_lookup_bad_arguments() {
        let tool = FaqLookupTool::new(
            test_corpus(),
            SearchOptions::default(),
            LookupVariant::BestMatch,
        );
        let result = tool.execute(r#"{"q": 7}"#).await;
        assert!(matches!(result, Err(GuestDeskError::Tool(_))));
    }

    #[tokio::test]
    async fn test_escalate_dispatches() {
        let mut router = EscalationRouter::new();
        router.register(Box::new(MemorySink::new()), 0);
        let router = Arc::new(router);
        let tool = EscalateTool::new(router.clone());

        let result = tool
            .execute(r#"{"guestName": "Maya", "question": "late checkout"}"#)
            .await
            .unwrap();
        assert!(result.success);
        assert_eq!(router.history().len(), 1);
        assert_eq!(router.history()[0].guest_name, "Maya");
    }

    #[tokio::test]
    async fn test_escalate_without_sink_reports_failure() {
        let tool = EscalateTool::new(Arc::new(EscalationRouter::new()));
        let result = tool
            .execute(r#"{"guestName": "Omar", "question": "help"}"#)
            .await
            .unwrap();
        assert!(!result.success);
        let value: serde_json::Value = serde_json::from_str(&result.output).unwrap();
        assert_eq!(value["success"], false);
    }
}
