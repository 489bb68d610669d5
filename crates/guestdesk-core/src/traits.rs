//! Trait seams between GuestDesk crates and their collaborators.

use async_trait::async_trait;

use crate::error::Result;
use crate::types::{Escalation, ToolDefinition, ToolResult};

/// A tool an agent persona can invoke with a JSON argument string.
#[async_trait]
pub trait Tool: Send + Sync {
    fn name(&self) -> &str;

    fn definition(&self) -> ToolDefinition;

    async fn execute(&self, arguments: &str) -> Result<ToolResult>;
}

/// Delivery target for staff escalations.
///
/// Implementations own whatever transport they need; callers hold one shared
/// handle constructed at process start and never reconfigure it.
#[async_trait]
pub trait EscalationSink: Send + Sync {
    fn name(&self) -> &str;

    /// Whether the sink is configured and able to deliver.
    fn is_available(&self) -> bool {
        true
    }

    async fn send(&self, escalation: &Escalation) -> Result<()>;
}
