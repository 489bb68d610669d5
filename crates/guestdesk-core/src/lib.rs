//! # GuestDesk Core
//! Shared building blocks for the GuestDesk concierge: the error type,
//! configuration system, tool/escalation traits, and common value types.

pub mod config;
pub mod error;
pub mod traits;
pub mod types;

pub use config::GuestDeskConfig;
pub use error::{GuestDeskError, Result};
pub use traits::{EscalationSink, Tool};
pub use types::{Escalation, ToolDefinition, ToolResult};
