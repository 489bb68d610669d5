//! Escalation routing — picks the best available sink and keeps a short
//! history of what was sent.

use std::sync::Mutex;

use guestdesk_core::config::EscalationConfig;
use guestdesk_core::error::{GuestDeskError, Result};
use guestdesk_core::traits::EscalationSink;
use guestdesk_core::types::Escalation;

use crate::sinks::{LogSink, MemorySink};

/// History ring buffer size.
const HISTORY_MAX: usize = 100;

struct RegisteredSink {
    sink: Box<dyn EscalationSink>,
    /// Priority order (lower = preferred).
    priority: u8,
}

/// Routes escalations to the highest-priority available sink.
///
/// Built once at process start and shared read-only; only the history
/// buffer mutates behind its own lock.
pub struct EscalationRouter {
    sinks: Vec<RegisteredSink>,
    history: Mutex<Vec<Escalation>>,
}

impl EscalationRouter {
    pub fn new() -> Self {
        Self {
            sinks: Vec::new(),
            history: Mutex::new(Vec::new()),
        }
    }

    /// Build a router from configuration. A disabled config yields a router
    /// with no sinks; dispatching through it fails with a `Notify` error.
    pub fn from_config(config: &EscalationConfig) -> Self {
        let mut router = Self::new();
        if !config.enabled {
            return router;
        }
        match config.channel.as_str() {
            "memory" => router.register(Box::new(MemorySink::new()), 0),
            _ => router.register(Box::new(LogSink::new(&config.staff_contact)), 0),
        }
        router
    }

    /// Register an available sink.
    pub fn register(&mut self, sink: Box<dyn EscalationSink>, priority: u8) {
        self.sinks.push(RegisteredSink { sink, priority });
        // Sort by priority (lowest number = highest priority)
        self.sinks.sort_by_key(|s| s.priority);
    }

    /// The sink a dispatch would use right now.
    pub fn best_sink(&self) -> Option<&dyn EscalationSink> {
        self.sinks
            .iter()
            .find(|s| s.sink.is_available())
            .map(|s| s.sink.as_ref())
    }

    /// Names of all currently-available sinks, in priority order.
    pub fn available_sinks(&self) -> Vec<&str> {
        self.sinks
            .iter()
            .filter(|s| s.sink.is_available())
            .map(|s| s.sink.name())
            .collect()
    }

    /// Send an escalation through the best available sink and record it.
    pub async fn dispatch(&self, escalation: Escalation) -> Result<()> {
        let sink = self.best_sink().ok_or_else(|| {
            GuestDeskError::Notify("no escalation sink available".into())
        })?;
        sink.send(&escalation).await?;
        tracing::info!("Escalation {} routed via '{}'", escalation.id, sink.name());

        let mut history = self.history.lock().expect("history lock poisoned");
        history.push(escalation);
        // Ring buffer — keep last HISTORY_MAX
        if history.len() > HISTORY_MAX {
            history.remove(0);
        }
        Ok(())
    }

    /// Escalations dispatched so far (oldest first).
    pub fn history(&self) -> Vec<Escalation> {
        self.history.lock().expect("history lock poisoned").clone()
    }
}

impl Default for EscalationRouter {
    fn default() -> Self {
        Self::new()
    }
}
