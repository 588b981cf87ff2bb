//! Candidate domains and their initialization from the dictionary index
//!
//! Domains are contiguous sequences of word identifiers drawn from the
//! index's length buckets. Snapshots clone the sequences wholesale; for a
//! 5x5 board the copy cost is negligible and restoration is authoritative.

use crate::grid::layout::Grid;
use crate::grid::slots::{SlotId, SlotSet};
use crate::lexicon::index::{Word, WordId, WordIndex};
use crate::solver::cache::{MatchCache, MatchKey};
use std::collections::HashSet;

/// Per-invocation view of the dictionary with an overlay for seed words
///
/// A pre-filled slot may spell a word the dictionary does not know. Such
/// words are accepted with score 0 and receive identifiers past the end of
/// the matching length bucket, so the shared [`WordIndex`] stays untouched.
#[derive(Debug)]
pub struct LexiconView<'a> {
    index: &'a WordIndex,
    extras: Vec<Vec<Word>>,
}

impl<'a> LexiconView<'a> {
    /// Create a view with an empty overlay
    pub fn new(index: &'a WordIndex) -> Self {
        Self {
            index,
            extras: vec![Vec::new(); crate::io::configuration::MAX_WORD_LENGTH + 1],
        }
    }

    /// The shared dictionary index behind this view
    pub const fn index(&self) -> &'a WordIndex {
        self.index
    }

    /// Resolve a word by length and identifier, overlay included
    pub fn word(&self, length: usize, word_id: WordId) -> Option<&Word> {
        let bucket_len = self.index.bucket_len(length);
        if word_id < bucket_len {
            self.index.word(length, word_id)
        } else {
            self.extras.get(length)?.get(word_id - bucket_len)
        }
    }

    /// Score of a word by identifier, 0 for unknown ids
    pub fn score(&self, length: usize, word_id: WordId) -> u32 {
        self.word(length, word_id).map_or(0, |word| word.score)
    }

    /// Letter code of a word at a cell position
    pub fn letter(&self, length: usize, word_id: WordId, position: usize) -> Option<u8> {
        self.word(length, word_id)
            .and_then(|word| word.letters.get(position).copied())
    }

    /// Register a seed word absent from the dictionary
    ///
    /// Returns the identifier of an existing overlay entry when the same
    /// text was registered before.
    pub fn register(&mut self, word: Word) -> WordId {
        let length = word.len();
        let bucket_len = self.index.bucket_len(length);

        let Some(extras) = self.extras.get_mut(length) else {
            return bucket_len;
        };

        if let Some(existing) = extras.iter().position(|extra| extra.text == word.text) {
            return bucket_len + existing;
        }

        extras.push(word);
        bucket_len + extras.len() - 1
    }
}

/// Snapshot of every slot domain, restored LIFO during backtracking
#[derive(Clone, Debug)]
pub struct DomainSnapshot {
    domains: Vec<Vec<WordId>>,
}

/// Current candidate words for every slot
#[derive(Clone, Debug, Default)]
pub struct SlotDomains {
    domains: Vec<Vec<WordId>>,
}

impl SlotDomains {
    /// Create domains for the given number of slots, all initially empty
    pub fn with_slot_count(slot_count: usize) -> Self {
        Self {
            domains: vec![Vec::new(); slot_count],
        }
    }

    /// Candidate identifiers for a slot
    pub fn get(&self, slot_id: SlotId) -> &[WordId] {
        self.domains.get(slot_id).map_or(&[], Vec::as_slice)
    }

    /// Number of candidates left for a slot
    pub fn len_of(&self, slot_id: SlotId) -> usize {
        self.get(slot_id).len()
    }

    /// Test whether a slot has no candidates left
    pub fn is_wiped(&self, slot_id: SlotId) -> bool {
        self.get(slot_id).is_empty()
    }

    /// Replace a slot's candidates outright
    pub fn replace(&mut self, slot_id: SlotId, candidates: Vec<WordId>) {
        if let Some(domain) = self.domains.get_mut(slot_id) {
            *domain = candidates;
        }
    }

    /// Keep only the candidates satisfying the predicate
    ///
    /// Returns the number of candidates removed.
    pub fn retain<F>(&mut self, slot_id: SlotId, keep: F) -> usize
    where
        F: FnMut(&WordId) -> bool,
    {
        self.domains.get_mut(slot_id).map_or(0, |domain| {
            let before = domain.len();
            domain.retain(keep);
            before - domain.len()
        })
    }

    /// Clone every domain for later restoration
    pub fn snapshot(&self) -> DomainSnapshot {
        DomainSnapshot {
            domains: self.domains.clone(),
        }
    }

    /// Restore every domain from a snapshot
    pub fn restore(&mut self, snapshot: DomainSnapshot) {
        self.domains = snapshot.domains;
    }
}

/// Domains and pre-placed assignments produced by initialization
#[derive(Debug)]
pub struct DomainInit {
    /// Candidate domains per slot
    pub domains: SlotDomains,
    /// Word assignment for every slot that arrived filled
    pub placed: Vec<Option<WordId>>,
}

/// Initialize every slot's domain from the board and the dictionary
///
/// A slot whose cells already spell a complete word gets a singleton
/// domain, registering the word in the overlay when the dictionary lacks
/// it. Every other slot gets the pattern-search result minus the exclusion
/// set. A pre-filled word that is excluded, or that duplicates an earlier
/// pre-filled word, wipes its own domain so the caller fails fast without
/// recursion.
pub fn initialize(
    view: &mut LexiconView<'_>,
    slots: &SlotSet,
    grid: &Grid,
    min_score: u32,
    exclusions: &HashSet<String>,
    cache: &mut MatchCache,
) -> DomainInit {
    let mut domains = SlotDomains::with_slot_count(slots.len());
    let mut placed = vec![None; slots.len()];
    let mut seen_seeds: HashSet<String> = HashSet::new();

    for slot in slots.iter() {
        let pattern = slot.pattern(grid);

        if let Some(text) = slot.placed_word(grid) {
            if exclusions.contains(&text) || !seen_seeds.insert(text.clone()) {
                domains.replace(slot.id, Vec::new());
                continue;
            }

            let word_id = match view.index().word_id(&text) {
                Some((_, word_id)) => word_id,
                None => match Word::new(&text, 0) {
                    Some(word) => view.register(word),
                    None => {
                        domains.replace(slot.id, Vec::new());
                        continue;
                    }
                },
            };

            domains.replace(slot.id, vec![word_id]);
            if let Some(assignment) = placed.get_mut(slot.id) {
                *assignment = Some(word_id);
            }
            continue;
        }

        let index = view.index();
        let matches = cache.get_or_search(MatchKey::new(pattern.clone(), min_score), || {
            index.find_matches(&pattern, min_score)
        });

        let candidates = matches
            .iter()
            .copied()
            .filter(|&word_id| {
                view.word(slot.length, word_id)
                    .is_none_or(|word| !exclusions.contains(&word.text))
            })
            .collect();

        domains.replace(slot.id, candidates);
    }

    DomainInit { domains, placed }
}
