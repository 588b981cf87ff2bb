//! Constraint solver over slot domains

/// Word-id bitsets for pattern intersection
pub mod bitset;
/// Memoized pattern search results
pub mod cache;
/// Candidate domains and dictionary overlay
pub mod domain;
/// AC-3 worklist propagation
pub mod propagation;
/// Heuristic backtracking search
pub mod search;

pub use bitset::WordBitset;
pub use cache::MatchCache;
pub use domain::{LexiconView, SlotDomains};
pub use search::{SearchOutcome, Searcher, ValueOrder};
