//! Common value types shared across GuestDesk crates.

use serde::{Deserialize, Serialize};

/// Definition of a tool an agent persona can invoke.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    /// JSON schema for the tool's arguments.
    pub parameters: serde_json::Value,
}

/// Result of a tool execution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolResult {
    pub output: String,
    pub success: bool,
}

/// A request to hand a guest question over to human staff.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Escalation {
    pub id: String,
    pub guest_name: String,
    pub question: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

impl Escalation {
    pub fn new(guest_name: &str, question: &str) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            guest_name: guest_name.to_string(),
            question: question.to_string(),
            timestamp: chrono::Utc::now(),
        }
    }

    /// The staff-facing message body for this escalation.
    pub fn staff_message(&self) -> String {
        format!(
            "A guest named {} needs help with: {}. Please respond ASAP.",
            self.guest_name, self.question
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_staff_message() {
        let esc = Escalation::new("Maya", "late checkout");
        assert_eq!(
            esc.staff_message(),
            "A guest named Maya needs help with: late checkout. Please respond ASAP."
        );
    }

    #[test]
    fn test_escalation_ids_unique() {
        let a = Escalation::new("A", "q");
        let b = Escalation::new("A", "q");
        assert_ne!(a.id, b.id);
    }
}
