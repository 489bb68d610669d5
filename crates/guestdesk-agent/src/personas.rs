//! Shipped agent personas.
//!
//! Both reference the same parametrized FAQ lookup; they differ only in
//! configuration — scoring mode, result variant, and whether escalation is
//! in the tool set.

use guestdesk_core::error::{GuestDeskError, Result};
use guestdesk_faq::MatchMode;

use crate::{AgentPersona, LookupVariant, ToolSpec};

/// Minimal resort helper: FAQ lookup only, bidirectional keyword matching.
pub fn resort_helper() -> AgentPersona {
    AgentPersona {
        name: "resort-helper".into(),
        voice: "alloy".into(),
        instructions: "You help guests at a tropical resort. Answer questions about \
                       amenities and services. Use the FAQ lookup tool whenever possible."
            .into(),
        handoff_description: "Resort helper agent".into(),
        tools: vec![ToolSpec::FaqLookup {
            mode: MatchMode::Bidirectional,
            top_n: 3,
            variant: LookupVariant::BestMatch,
        }],
    }
}

/// Full concierge: multilingual, logs guest names, can escalate to staff.
pub fn concierge() -> AgentPersona {
    AgentPersona {
        name: "concierge".into(),
        voice: "cove".into(),
        instructions: "You are the hotel's friendly multilingual concierge. Speak in the \
                       same language as the guest. Always sound calm and pleasant. At the \
                       start of each session, ask for the guest's name politely and \
                       remember it for logging and escalation. When a guest asks a \
                       question, first call the FAQ lookup tool and respond \
                       conversationally in your own words. If no good match is found, \
                       fall back to your general knowledge. When the guest specifically \
                       asks for help from a human, escalate to staff."
            .into(),
        handoff_description: "Hotel concierge".into(),
        tools: vec![
            ToolSpec::FaqLookup {
                mode: MatchMode::QueryContainsKeyword,
                top_n: 3,
                variant: LookupVariant::BestMatch,
            },
            ToolSpec::Escalate,
        ],
    }
}

/// All shipped personas.
pub fn all() -> Vec<AgentPersona> {
    vec![concierge(), resort_helper()]
}

/// Look up a shipped persona by name.
pub fn by_name(name: &str) -> Option<AgentPersona> {
    all().into_iter().find(|p| p.name == name)
}

/// Like [`by_name`], failing with `AgentNotFound` for unknown names.
pub fn get(name: &str) -> Result<AgentPersona> {
    by_name(name).ok_or_else(|| GuestDeskError::AgentNotFound(name.to_string()))
}
