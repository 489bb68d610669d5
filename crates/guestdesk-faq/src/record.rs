//! The FAQ record value type.

use serde::{Deserialize, Serialize};

/// One FAQ entry. Immutable after corpus load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaqRecord {
    /// Grouping label for reporting; never consulted by matching.
    pub category: String,
    pub question: String,
    /// Informal synonyms/triggers for this entry. May be empty.
    #[serde(default)]
    pub keywords: Vec<String>,
    pub answer: String,
    /// Reserved for future semantic search; never consulted by scoring.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub embedding: Option<Vec<f32>>,
}

impl FaqRecord {
    pub fn new(category: &str, question: &str, keywords: &[&str], answer: &str) -> Self {
        Self {
            category: category.to_string(),
            question: question.to_string(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            answer: answer.to_string(),
            embedding: None,
        }
    }
}
