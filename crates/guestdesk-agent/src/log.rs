//! In-memory interaction log — a ring buffer of answered guest questions.
//!
//! Deployments that need durable logs drain this into their own datastore;
//! nothing here persists.

use std::sync::Mutex;

use serde::{Deserialize, Serialize};

/// One answered guest interaction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InteractionRecord {
    pub guest_name: String,
    pub language: String,
    pub category: Option<String>,
    pub question: String,
    pub answer: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

impl InteractionRecord {
    pub fn new(
        guest_name: &str,
        language: &str,
        category: Option<&str>,
        question: &str,
        answer: &str,
    ) -> Self {
        Self {
            guest_name: guest_name.to_string(),
            language: language.to_string(),
            category: category.map(String::from),
            question: question.to_string(),
            answer: answer.to_string(),
            timestamp: chrono::Utc::now(),
        }
    }
}

/// Capacity-bounded interaction history.
pub struct InteractionLog {
    capacity: usize,
    entries: Mutex<Vec<InteractionRecord>>,
}

impl InteractionLog {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            entries: Mutex::new(Vec::new()),
        }
    }

    pub fn record(&self, entry: InteractionRecord) {
        let mut entries = self.entries.lock().expect("log lock poisoned");
        entries.push(entry);
        if entries.len() > self.capacity {
            entries.remove(0);
        }
    }

    /// Most recent entries, newest first.
    pub fn recent(&self, limit: usize) -> Vec<InteractionRecord> {
        let entries = self.entries.lock().expect("log lock poisoned");
        entries.iter().rev().take(limit).cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().expect("log lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
