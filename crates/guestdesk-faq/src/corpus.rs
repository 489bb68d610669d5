//! The in-memory FAQ corpus — loaded once, read-only thereafter.

use std::collections::BTreeMap;
use std::path::Path;

use guestdesk_core::error::{GuestDeskError, Result};

use crate::record::FaqRecord;
use crate::search::{self, MatchMode, SearchOptions};

/// An ordered, read-only collection of FAQ records.
///
/// Loaded at process start and shared by reference into every search call.
/// Entry order is significant: it is the tie-break for equally-scored
/// results.
#[derive(Debug, Clone)]
pub struct Corpus {
    records: Vec<FaqRecord>,
}

impl Corpus {
    /// Load a corpus from a JSON file containing a flat array of records.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let corpus = Self::from_json_str(&content)?;
        tracing::info!("Loaded {} FAQ entries from {}", corpus.len(), path.display());
        Ok(corpus)
    }

    /// Decode a corpus from an in-memory JSON source.
    ///
    /// Fails with `MalformedCorpus` if the source is not a JSON array or any
    /// record fails to decode; a partially-decoded corpus is never returned.
    /// No normalization is applied — that is the scorer's job.
    pub fn from_json_str(content: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(content)
            .map_err(|e| GuestDeskError::MalformedCorpus(format!("invalid JSON: {e}")))?;
        if !value.is_array() {
            return Err(GuestDeskError::MalformedCorpus(
                "expected a JSON array of FAQ records".into(),
            ));
        }
        let records: Vec<FaqRecord> = serde_json::from_value(value)
            .map_err(|e| GuestDeskError::MalformedCorpus(format!("bad FAQ record: {e}")))?;
        Ok(Self { records })
    }

    /// Build a corpus from already-decoded records (tests, lint --fix).
    pub fn from_records(records: Vec<FaqRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[FaqRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Entry count per category, sorted by category name.
    pub fn category_counts(&self) -> Vec<(String, usize)> {
        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
        for record in &self.records {
            *counts.entry(record.category.as_str()).or_insert(0) += 1;
        }
        counts.into_iter().map(|(k, v)| (k.to_string(), v)).collect()
    }

    /// Ranked search over this corpus. See [`search::search`].
    pub fn search(&self, query: &str, options: SearchOptions) -> Vec<&FaqRecord> {
        search::search(&self.records, query, options)
    }

    /// Best-match variant: the top answer, or `None` if nothing scored.
    pub fn best_match(&self, query: &str, mode: MatchMode) -> Option<&str> {
        search::best_match(&self.records, query, mode)
    }
}
