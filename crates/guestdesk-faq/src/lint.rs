//! Corpus maintenance checks — duplicate questions, category normalization,
//! and well-formedness findings.
//!
//! Lint operates on an owned record list before a corpus is sealed for
//! serving; the serving [`crate::Corpus`] itself is never mutated.

use std::collections::HashMap;

use serde::Serialize;

use crate::record::FaqRecord;

/// A duplicate question finding: the later entry repeats an earlier one.
#[derive(Debug, Clone, Serialize)]
pub struct Duplicate {
    pub original_index: usize,
    pub duplicate_index: usize,
    pub normalized_question: String,
}

/// One well-formedness finding against a corpus entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LintFinding {
    pub index: usize,
    pub issue: LintIssue,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LintIssue {
    EmptyQuestion,
    EmptyAnswer,
    EmptyCategory,
    NoKeywords,
    DuplicateQuestion { original_index: usize },
}

/// Questions compare lowercase-trimmed.
pub fn normalize_question(question: &str) -> String {
    question.trim().to_lowercase()
}

/// Find entries whose normalized question repeats an earlier entry's.
pub fn find_duplicates(records: &[FaqRecord]) -> Vec<Duplicate> {
    let mut seen: HashMap<String, usize> = HashMap::new();
    let mut duplicates = Vec::new();

    for (index, record) in records.iter().enumerate() {
        let normalized = normalize_question(&record.question);
        match seen.get(&normalized) {
            Some(&original_index) => duplicates.push(Duplicate {
                original_index,
                duplicate_index: index,
                normalized_question: normalized,
            }),
            None => {
                seen.insert(normalized, index);
            }
        }
    }

    duplicates
}

/// Remove duplicate questions, keeping the first instance of each.
/// Returns the surviving records and a report of what was dropped.
pub fn dedup(records: Vec<FaqRecord>) -> (Vec<FaqRecord>, Vec<Duplicate>) {
    let duplicates = find_duplicates(&records);
    let dropped: std::collections::HashSet<usize> =
        duplicates.iter().map(|d| d.duplicate_index).collect();
    let unique = records
        .into_iter()
        .enumerate()
        .filter(|(i, _)| !dropped.contains(i))
        .map(|(_, r)| r)
        .collect();
    (unique, duplicates)
}

/// Lowercase and trim every category in place. Returns how many changed.
pub fn normalize_categories(records: &mut [FaqRecord]) -> usize {
    let mut changed = 0;
    for record in records.iter_mut() {
        let normalized = record.category.trim().to_lowercase();
        if record.category != normalized {
            record.category = normalized;
            changed += 1;
        }
    }
    changed
}

/// Well-formedness report: empty required fields, keyword-less entries, and
/// duplicate questions.
pub fn check(records: &[FaqRecord]) -> Vec<LintFinding> {
    let mut findings = Vec::new();

    for (index, record) in records.iter().enumerate() {
        if record.question.trim().is_empty() {
            findings.push(LintFinding { index, issue: LintIssue::EmptyQuestion });
        }
        if record.answer.trim().is_empty() {
            findings.push(LintFinding { index, issue: LintIssue::EmptyAnswer });
        }
        if record.category.trim().is_empty() {
            findings.push(LintFinding { index, issue: LintIssue::EmptyCategory });
        }
        if record.keywords.is_empty() {
            findings.push(LintFinding { index, issue: LintIssue::NoKeywords });
        }
    }

    for dup in find_duplicates(records) {
        findings.push(LintFinding {
            index: dup.duplicate_index,
            issue: LintIssue::DuplicateQuestion { original_index: dup.original_index },
        });
    }

    findings
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_duplicates_normalized() {
        let records = vec![
            FaqRecord::new("pool", "What are the pool hours?", &["pool"], "8am-8pm"),
            FaqRecord::new("gym", "Where is the gym?", &["gym"], "Level 2"),
            FaqRecord::new("pool", "  what are the POOL hours?  ", &["pool"], "8-8"),
        ];
        let dups = find_duplicates(&records);
        assert_eq!(dups.len(), 1);
        assert_eq!(dups[0].original_index, 0);
        assert_eq!(dups[0].duplicate_index, 2);
        assert_eq!(dups[0].normalized_question, "what are the pool hours?");
    }

    #[test]
    fn test_dedup_keeps_first_instance() {
        let records = vec![
            FaqRecord::new("pool", "Pool hours?", &["pool"], "first"),
            FaqRecord::new("pool", "pool hours?", &["pool"], "second"),
            FaqRecord::new("gym", "Gym?", &["gym"], "Level 2"),
        ];
        let (unique, dropped) = dedup(records);
        assert_eq!(unique.len(), 2);
        assert_eq!(unique[0].answer, "first");
        assert_eq!(dropped.len(), 1);
    }

    #[test]
    fn test_dedup_no_duplicates_is_noop() {
        let records = vec![
            FaqRecord::new("pool", "Pool hours?", &["pool"], "8am-8pm"),
            FaqRecord::new("gym", "Gym?", &["gym"], "Level 2"),
        ];
        let (unique, dropped) = dedup(records.clone());
        assert_eq!(unique, records);
        assert!(dropped.is_empty());
    }

    #[test]
    fn test_normalize_categories() {
        let mut records = vec![
            FaqRecord::new("  Pool ", "Pool hours?", &["pool"], "8am-8pm"),
            FaqRecord::new("gym", "Gym?", &["gym"], "Level 2"),
            FaqRecord::new("SPA", "Spa?", &["spa"], "9am-6pm"),
        ];
        let changed = normalize_categories(&mut records);
        assert_eq!(changed, 2);
        assert_eq!(records[0].category, "pool");
        assert_eq!(records[1].category, "gym");
        assert_eq!(records[2].category, "spa");
    }

    #[test]
    fn test_check_reports_empty_fields_and_duplicates() {
        let records = vec![
            FaqRecord::new("", "Pool hours?", &[], "8am-8pm"),
            FaqRecord::new("gym", "  ", &["gym"], ""),
            FaqRecord::new("pool", "pool hours?", &["pool"], "8-8"),
        ];
        let findings = check(&records);
        assert!(findings.contains(&LintFinding { index: 0, issue: LintIssue::EmptyCategory }));
        assert!(findings.contains(&LintFinding { index: 0, issue: LintIssue::NoKeywords }));
        assert!(findings.contains(&LintFinding { index: 1, issue: LintIssue::EmptyQuestion }));
        assert!(findings.contains(&LintFinding { index: 1, issue: LintIssue::EmptyAnswer }));
        assert!(findings.contains(&LintFinding {
            index: 2,
            issue: LintIssue::DuplicateQuestion { original_index: 0 },
        }));
    }

    #[test]
    fn test_check_clean_corpus_is_empty() {
        let records = vec![
            FaqRecord::new("pool", "Pool hours?", &["pool"], "8am-8pm"),
            FaqRecord::new("gym", "Gym?", &["gym"], "Level 2"),
        ];
        assert!(check(&records).is_empty());
    }
}
