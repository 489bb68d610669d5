//! Tool registry — builds and inspects a persona's tool set.

use std::sync::Arc;

use guestdesk_core::traits::Tool;
use guestdesk_core::types::ToolDefinition;
use guestdesk_faq::{Corpus, SearchOptions};
use guestdesk_notify::EscalationRouter;

use crate::{AgentPersona, ToolSpec};

/// Realize a persona's tool specs against the shared corpus and router.
pub fn build_tools(
    persona: &AgentPersona,
    corpus: Arc<Corpus>,
    router: Arc<EscalationRouter>,
) -> Vec<Box<dyn Tool>> {
    persona
        .tools
        .iter()
        .map(|spec| -> Box<dyn Tool> {
            match spec {
                ToolSpec::FaqLookup { mode, top_n, variant } => Box::new(
                    crate::tools::FaqLookupTool::new(
                        corpus.clone(),
                        SearchOptions { mode: *mode, top_n: *top_n },
                        *variant,
                    ),
                ),
                ToolSpec::Escalate => Box::new(crate::tools::EscalateTool::new(router.clone())),
            }
        })
        .collect()
}

/// Find a tool by name from a list.
pub fn find_tool<'a>(tools: &'a [Box<dyn Tool>], name: &str) -> Option<&'a dyn Tool> {
    tools.iter().find(|t| t.name() == name).map(|t| t.as_ref())
}

/// Get all tool definitions from a list.
pub fn list_definitions(tools: &[Box<dyn Tool>]) -> Vec<ToolDefinition> {
    tools.iter().map(|t| t.definition()).collect()
}

/// Validate that a tool call has the required arguments.
pub fn validate_args(
    definition: &ToolDefinition,
    args: &serde_json::Value,
) -> std::result::Result<(), String> {
    let params = &definition.parameters;
    if let Some(required) = params.get("required").and_then(|r| r.as_array()) {
        for req in required {
            if let Some(key) = req.as_str()
                && args.get(key).is_none() {
                    return Err(format!("Missing required argument: {key}"));
                }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::personas;
    use guestdesk_faq::FaqRecord;

    fn fixtures() -> (Arc<Corpus>, Arc<EscalationRouter>) {
        let corpus = Arc::new(Corpus::from_records(vec![FaqRecord::new(
            "pool",
            "What are the pool hours?",
            &["pool"],
            "8am-8pm",
        )]));
        (corpus, Arc::new(EscalationRouter::new()))
    }

    #[test]
    fn test_build_tools_matches_persona_specs() {
        let (corpus, router) = fixtures();
        let persona = personas::concierge();
        let tools = build_tools(&persona, corpus, router);
        assert_eq!(tools.len(), persona.tools.len());
        assert!(find_tool(&tools, "lookup_faq").is_some());
        assert!(find_tool(&tools, "escalate_to_staff").is_some());
        assert!(find_tool(&tools, "web_search").is_none());
    }

    #[test]
    fn test_list_definitions() {
        let (corpus, router) = fixtures();
        let tools = build_tools(&personas::resort_helper(), corpus, router);
        let defs = list_definitions(&tools);
        assert_eq!(defs.len(), 1);
        assert_eq!(defs[0].name, "lookup_faq");
    }

    #[test]
    fn test_validate_args_missing() {
        let (corpus, router) = fixtures();
        let tools = build_tools(&personas::concierge(), corpus, router);
        let def = find_tool(&tools, "lookup_faq").unwrap().definition();

        // Missing required arg
        let result = validate_args(&def, &serde_json::json!({}));
        assert!(result.is_err());

        // Has required arg
        let result = validate_args(&def, &serde_json::json!({"query": "pool"}));
        assert!(result.is_ok());
    }

    #[test]
    fn test_validate_args_no_required() {
        let def = ToolDefinition {
            name: "test".into(),
            description: "test tool".into(),
            parameters: serde_json::json!({}),
        };
        assert!(validate_args(&def, &serde_json::json!({})).is_ok());
    }
}
