//! # GuestDesk Agent
//! Agent persona configuration records and the tool set they reference.
//!
//! A persona is data, not code: name, voice, instructions, and a list of
//! tool specs. Every persona references the same parametrized FAQ lookup —
//! the spec carries the scoring mode and result variant — so personas never
//! duplicate matching logic inline.

pub mod log;
pub mod personas;
pub mod registry;
pub mod tools;

use serde::{Deserialize, Serialize};

use guestdesk_faq::MatchMode;

pub use log::{InteractionLog, InteractionRecord};
pub use registry::build_tools;
pub use tools::{EscalateTool, FaqLookupTool};

/// How a FAQ lookup reports its results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LookupVariant {
    /// Ranked top-N records.
    Ranked,
    /// Single best answer, or a null sentinel when nothing matches.
    #[default]
    BestMatch,
}

/// One tool in a persona's tool set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "tool", rename_all = "snake_case")]
pub enum ToolSpec {
    FaqLookup {
        #[serde(default)]
        mode: MatchMode,
        #[serde(default = "default_top_n")]
        top_n: usize,
        #[serde(default)]
        variant: LookupVariant,
    },
    Escalate,
}

fn default_top_n() -> usize { 3 }

/// An agent persona — the configuration record a realtime-agent session is
/// built from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentPersona {
    pub name: String,
    pub voice: String,
    pub instructions: String,
    pub handoff_description: String,
    pub tools: Vec<ToolSpec>,
}

impl AgentPersona {
    /// Whether this persona's tool set includes staff escalation.
    pub fn can_escalate(&self) -> bool {
        self.tools.iter().any(|t| matches!(t, ToolSpec::Escalate))
    }

    /// The persona's FAQ lookup spec, if it has one.
    pub fn faq_lookup(&self) -> Option<&ToolSpec> {
        self.tools
            .iter()
            .find(|t| matches!(t, ToolSpec::FaqLookup { .. }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_spec_round_trip() {
        let spec = ToolSpec::FaqLookup {
            mode: MatchMode::QueryContainsKeyword,
            top_n: 5,
            variant: LookupVariant::Ranked,
        };
        let json = serde_json::to_string(&spec).unwrap();
        let back: ToolSpec = serde_json::from_str(&json).unwrap();
        assert_eq!(back, spec);
    }

    #[test]
    fn test_tool_spec_defaults() {
        let spec: ToolSpec = serde_json::from_str(r#"{ "tool": "faq_lookup" }"#).unwrap();
        assert_eq!(
            spec,
            ToolSpec::FaqLookup {
                mode: MatchMode::Bidirectional,
                top_n: 3,
                variant: LookupVariant::BestMatch,
            }
        );
    }
}
