//! GuestDesk configuration system.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Root configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuestDeskConfig {
    #[serde(default = "default_corpus_path")]
    pub corpus_path: String,
    #[serde(default = "default_persona")]
    pub default_persona: String,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub escalation: EscalationConfig,
    #[serde(default)]
    pub log: InteractionLogConfig,
}

fn default_corpus_path() -> String { "data/faqs.json".into() }
fn default_persona() -> String { "concierge".into() }

impl Default for GuestDeskConfig {
    fn default() -> Self {
        Self {
            corpus_path: default_corpus_path(),
            default_persona: default_persona(),
            search: SearchConfig::default(),
            escalation: EscalationConfig::default(),
            log: InteractionLogConfig::default(),
        }
    }
}

impl GuestDeskConfig {
    /// Load config from the default path (~/.guestdesk/config.toml).
    pub fn load() -> Result<Self> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load config from a specific path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| crate::error::GuestDeskError::Config(format!("Failed to read config: {e}")))?;
        let config: Self = toml::from_str(&content)
            .map_err(|e| crate::error::GuestDeskError::Config(format!("Failed to parse config: {e}")))?;
        Ok(config)
    }

    /// Get the default config path.
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".guestdesk")
            .join("config.toml")
    }

    /// Get the GuestDesk home directory.
    pub fn home_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".guestdesk")
    }
}

/// FAQ search configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Keyword containment rule: "bidirectional" or "query-contains".
    #[serde(default = "default_search_mode")]
    pub mode: String,
    #[serde(default = "default_top_n")]
    pub top_n: usize,
}

fn default_search_mode() -> String { "bidirectional".into() }
fn default_top_n() -> usize { 3 }

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            mode: default_search_mode(),
            top_n: default_top_n(),
        }
    }
}

/// Staff escalation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EscalationConfig {
    #[serde(default = "bool_true")]
    pub enabled: bool,
    /// Staff contact label shown in escalation records (name or number).
    #[serde(default)]
    pub staff_contact: String,
    /// Sink to route escalations through: "log" or "memory".
    #[serde(default = "default_escalation_channel")]
    pub channel: String,
}

fn bool_true() -> bool { true }
fn default_escalation_channel() -> String { "log".into() }

impl Default for EscalationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            staff_contact: String::new(),
            channel: default_escalation_channel(),
        }
    }
}

/// Interaction log configuration (in-memory ring buffer).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InteractionLogConfig {
    #[serde(default = "bool_true")]
    pub enabled: bool,
    #[serde(default = "default_log_capacity")]
    pub capacity: usize,
}

fn default_log_capacity() -> usize { 100 }

impl Default for InteractionLogConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            capacity: default_log_capacity(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GuestDeskConfig::default();
        assert_eq!(config.corpus_path, "data/faqs.json");
        assert_eq!(config.default_persona, "concierge");
        assert_eq!(config.search.mode, "bidirectional");
        assert_eq!(config.search.top_n, 3);
        assert!(config.escalation.enabled);
    }

    #[test]
    fn test_config_from_toml() {
        let toml_str = r#"
            corpus_path = "corpora/resort.json"
            default_persona = "resort-helper"

            [search]
            mode = "query-contains"
            top_n = 5

            [escalation]
            staff_contact = "front desk"
        "#;

        let config: GuestDeskConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.corpus_path, "corpora/resort.json");
        assert_eq!(config.default_persona, "resort-helper");
        assert_eq!(config.search.mode, "query-contains");
        assert_eq!(config.search.top_n, 5);
        assert_eq!(config.escalation.staff_contact, "front desk");
        // Untouched sections fall back to defaults
        assert_eq!(config.log.capacity, 100);
    }

    #[test]
    fn test_config_missing_fields_use_defaults() {
        let toml_str = "";
        let config: GuestDeskConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.search.top_n, 3);
        assert_eq!(config.escalation.channel, "log");
    }

    #[test]
    fn test_home_dir() {
        let home = GuestDeskConfig::home_dir();
        assert!(home.to_string_lossy().contains("guestdesk"));
    }
}
