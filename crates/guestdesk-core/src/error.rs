//! GuestDesk error types.

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, GuestDeskError>;

/// All errors surfaced by GuestDesk crates.
#[derive(Debug, Error)]
pub enum GuestDeskError {
    /// The corpus source did not decode into a sequence of FAQ records.
    /// Fatal at load time — a partially-decoded corpus is never served.
    #[error("Malformed corpus: {0}")]
    MalformedCorpus(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Tool error: {0}")]
    Tool(String),

    #[error("Notify error: {0}")]
    Notify(String),

    #[error("Agent not found: {0}")]
    AgentNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
