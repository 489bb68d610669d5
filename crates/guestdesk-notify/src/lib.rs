//! # GuestDesk Notify
//! Staff escalation delivery — routes a guest's request for human help to
//! the best available sink.
//!
//! Lightweight: no queues, no background workers. The router is built once
//! at process start from configuration and injected into whatever needs to
//! escalate; nothing here reads the environment or holds module-level
//! state. Networked transports live behind the [`EscalationSink`] seam and
//! are supplied by the embedding application.

pub mod router;
pub mod sinks;

pub use guestdesk_core::types::Escalation;
pub use router::EscalationRouter;
pub use sinks::{LogSink, MemorySink};
