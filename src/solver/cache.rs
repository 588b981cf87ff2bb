use crate::lexicon::index::WordId;
use crate::lexicon::pattern::Pattern;
use std::collections::HashMap;

/// Key for memoized pattern search results
///
/// Identical patterns recur constantly while backtracking explores
/// neighboring assignments, so results are keyed by the pattern together
/// with the score floor used for the query.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct MatchKey {
    pattern: Pattern,
    min_score: u32,
}

impl MatchKey {
    /// Create a key from a pattern and score floor
    pub const fn new(pattern: Pattern, min_score: u32) -> Self {
        Self { pattern, min_score }
    }
}

/// Performance metrics for cache effectiveness
#[derive(Debug, Default)]
pub struct CacheStats {
    /// Number of cache hits
    pub hits: usize,
    /// Number of cache misses
    pub misses: usize,
}

impl CacheStats {
    /// Total pattern searches answered, hit or miss
    pub const fn queries(&self) -> usize {
        self.hits + self.misses
    }
}

/// Memoization cache for dictionary pattern searches
///
/// Purely an optimization: the fill result must be identical with the
/// cache removed.
#[derive(Debug, Default)]
pub struct MatchCache {
    entries: HashMap<MatchKey, Vec<WordId>>,

    /// Cache performance statistics
    pub stats: CacheStats,
}

impl MatchCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Retrieve a cached match list or compute and store a new one
    pub fn get_or_search<F>(&mut self, key: MatchKey, search_fn: F) -> &[WordId]
    where
        F: FnOnce() -> Vec<WordId>,
    {
        use std::collections::hash_map::Entry;

        match self.entries.entry(key) {
            Entry::Occupied(entry) => {
                self.stats.hits += 1;
                entry.into_mut()
            }
            Entry::Vacant(entry) => {
                self.stats.misses += 1;
                entry.insert(search_fn())
            }
        }
    }
}
