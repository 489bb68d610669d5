//! Built-in escalation sinks.

use std::sync::Mutex;

use async_trait::async_trait;
use guestdesk_core::error::Result;
use guestdesk_core::traits::EscalationSink;
use guestdesk_core::types::Escalation;

/// Emits escalations to the process log.
///
/// The default sink: staff watching the operator console see the message;
/// deployments with a real paging channel register their own sink ahead of
/// this one.
pub struct LogSink {
    /// Staff contact label included in the log line, if configured.
    staff_contact: String,
}

impl LogSink {
    pub fn new(staff_contact: &str) -> Self {
        Self { staff_contact: staff_contact.to_string() }
    }
}

#[async_trait]
impl EscalationSink for LogSink {
    fn name(&self) -> &str { "log" }

    async fn send(&self, escalation: &Escalation) -> Result<()> {
        if self.staff_contact.is_empty() {
            tracing::warn!("ESCALATION [{}]: {}", escalation.id, escalation.staff_message());
        } else {
            tracing::warn!(
                "ESCALATION [{}] for {}: {}",
                escalation.id,
                self.staff_contact,
                escalation.staff_message()
            );
        }
        Ok(())
    }
}

/// Collects escalations in memory. Used by tests and demo runs.
#[derive(Default)]
pub struct MemorySink {
    sent: Mutex<Vec<Escalation>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sent(&self) -> Vec<Escalation> {
        self.sent.lock().expect("sink lock poisoned").clone()
    }
}

#[async_trait]
impl EscalationSink for MemorySink {
    fn name(&self) -> &str { "memory" }

    async fn send(&self, escalation: &Escalation) -> Result<()> {
        self.sent.lock().expect("sink lock poisoned").push(escalation.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_sink_records() {
        let sink = MemorySink::new();
        let esc = Escalation::new("Maya", "late checkout");
        sink.send(&esc).await.unwrap();
        let sent = sink.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].guest_name, "Maya");
    }

    #[tokio::test]
    async fn test_log_sink_always_succeeds() {
        let sink = LogSink::new("front desk");
        let esc = Escalation::new("Omar", "lost key card");
        assert!(sink.send(&esc).await.is_ok());
    }
}
