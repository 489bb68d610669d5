//! Relevance scoring and ranked search over a FAQ corpus.
//!
//! Scoring is a pure, synchronous substring check: a question match counts
//! 2, each keyword match counts 1. Records scoring 0 are dropped, the rest
//! are stably sorted descending and truncated to top-N. Concurrent calls
//! over the shared corpus need no coordination.

use serde::{Deserialize, Serialize};

use crate::record::FaqRecord;

/// Which containment direction counts as a keyword match.
///
/// The two rules produce different rankings for the same corpus and query;
/// both are kept selectable per persona/tool configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MatchMode {
    /// A keyword matches only when the query contains it.
    QueryContainsKeyword,
    /// A keyword matches when either string contains the other.
    /// Strictly higher recall; the default.
    #[default]
    Bidirectional,
}

impl MatchMode {
    /// Parse a config-file mode string ("query-contains" / "bidirectional").
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "query-contains" | "query-contains-keyword" => Some(Self::QueryContainsKeyword),
            "bidirectional" => Some(Self::Bidirectional),
            _ => None,
        }
    }
}

/// Options for a ranked search call.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SearchOptions {
    #[serde(default)]
    pub mode: MatchMode,
    #[serde(default = "default_top_n")]
    pub top_n: usize,
}

fn default_top_n() -> usize { 3 }

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            mode: MatchMode::default(),
            top_n: default_top_n(),
        }
    }
}

impl SearchOptions {
    /// The contract requires top_n ≥ 1; 0 falls back to the default.
    fn effective_top_n(&self) -> usize {
        if self.top_n == 0 { default_top_n() } else { self.top_n }
    }
}

/// Integer relevance of one record for a query. Higher is more relevant.
///
/// An empty query scores 0 against every record; `contains("")` is true for
/// any haystack.
pub fn score(record: &FaqRecord, query: &str, mode: MatchMode) -> u32 {
    let q = query.to_lowercase();
    if q.is_empty() {
        return 0;
    }

    let mut score = 0;
    if record.question.to_lowercase().contains(&q) {
        score += 2;
    }
    for keyword in &record.keywords {
        let k = keyword.to_lowercase();
        let hit = match mode {
            MatchMode::QueryContainsKeyword => q.contains(&k),
            MatchMode::Bidirectional => q.contains(&k) || k.contains(&q),
        };
        if hit {
            score += 1;
        }
    }
    score
}

/// Ranked search: records scoring above zero, sorted descending by score,
/// truncated to `top_n`. Ties keep corpus order (stable sort).
pub fn search<'a>(
    records: &'a [FaqRecord],
    query: &str,
    options: SearchOptions,
) -> Vec<&'a FaqRecord> {
    let mut scored: Vec<(u32, &FaqRecord)> = records
        .iter()
        .map(|record| (score(record, query, options.mode), record))
        .filter(|(s, _)| *s > 0)
        .collect();
    scored.sort_by(|a, b| b.0.cmp(&a.0));
    scored.truncate(options.effective_top_n());
    scored.into_iter().map(|(_, record)| record).collect()
}

/// Best-match variant: the answer text of the single highest-scoring
/// record, or `None` when nothing scores above zero. Ties keep the earliest
/// corpus entry.
pub fn best_match<'a>(records: &'a [FaqRecord], query: &str, mode: MatchMode) -> Option<&'a str> {
    let mut best: Option<&FaqRecord> = None;
    let mut best_score = 0;

    for record in records {
        let s = score(record, query, mode);
        if s > best_score {
            best = Some(record);
            best_score = s;
        }
    }

    best.map(|record| record.answer.as_str())
}
