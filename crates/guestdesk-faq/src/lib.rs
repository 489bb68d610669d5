//! # GuestDesk FAQ
//!
//! Ranked lexical FAQ search — no vector DB, no embeddings.
//!
//! ## Design
//! - **Load-once corpus** — a flat JSON array of FAQ records, read at
//!   process start and immutable for the process lifetime
//! - **Substring scoring** — question match scores 2, each keyword match
//!   scores 1, filter > 0, stable sort, truncate to top-N
//! - **Two keyword rules** — `MatchMode` selects whether only the query may
//!   contain a keyword, or containment in either direction counts
//! - **Corpus lint** — duplicate questions, category normalization, and
//!   well-formedness checks for maintenance workflows
//!
//! ## How it works
//! ```text
//! Guest: "What time does the pool close?"
//!   ↓
//! search(corpus, query, options)
//!   ↓ lowercase + substring scoring
//! Top 3 FAQ records (or the single best answer)
//!   ↓
//! Agent grounds its spoken reply on the matched answers
//! ```

pub mod corpus;
pub mod lint;
pub mod record;
pub mod search;

pub use corpus::Corpus;
pub use record::FaqRecord;
pub use search::{best_match, score, search, MatchMode, SearchOptions};
