//! Immutable scored dictionary index with positional pattern queries

use crate::io::configuration::{LETTER_COUNT, MAX_WORD_LENGTH, MIN_SLOT_LENGTH};
use crate::lexicon::pattern::{Pattern, letter_code};
use crate::solver::bitset::WordBitset;
use std::cmp::Reverse;
use std::collections::HashMap;

/// Identifier for a word within its length bucket
pub type WordId = usize;

/// A scored dictionary entry
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Word {
    /// Uppercase word text
    pub text: String,
    /// Alphabet codes 0..=25, one per letter
    pub letters: Vec<u8>,
    /// Dictionary score, 0 for words injected from seed grids
    pub score: u32,
}

impl Word {
    /// Build a word from text, normalizing to uppercase
    ///
    /// Returns `None` when the text contains a non-letter character or is
    /// empty.
    pub fn new(text: &str, score: u32) -> Option<Self> {
        if text.is_empty() {
            return None;
        }

        let letters = text
            .chars()
            .map(letter_code)
            .collect::<Option<Vec<u8>>>()?;

        Some(Self {
            text: text.to_ascii_uppercase(),
            letters,
            score,
        })
    }

    /// Word length in letters
    pub const fn len(&self) -> usize {
        self.letters.len()
    }

    /// Test whether the word has no letters
    pub const fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }
}

/// Read-only dictionary index shared by every engine invocation
///
/// Holds one bucket of words per usable length, a support bitset for every
/// `(length, position, letter)` triple, and a reverse lookup from text to
/// bucket position. Buckets are ordered by descending score so that default
/// candidate ordering needs no extra sort.
#[derive(Debug)]
pub struct WordIndex {
    words_by_length: Vec<Vec<Word>>,
    support: Vec<Vec<Vec<WordBitset>>>,
    lookup: HashMap<String, (usize, WordId)>,
}

impl WordIndex {
    /// Build the index from `(word, score)` entries
    ///
    /// Entries with non-letter characters or lengths outside the usable
    /// range are skipped. Duplicate words keep their maximum score.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, u32)>,
    {
        let mut best_scores: HashMap<String, u32> = HashMap::new();

        for (text, score) in entries {
            let upper = text.to_ascii_uppercase();
            let length = upper.chars().count();
            if length < MIN_SLOT_LENGTH || length > MAX_WORD_LENGTH {
                continue;
            }
            if !upper.chars().all(|c| c.is_ascii_uppercase()) {
                continue;
            }

            let entry = best_scores.entry(upper).or_insert(score);
            *entry = (*entry).max(score);
        }

        let mut words_by_length: Vec<Vec<Word>> = vec![Vec::new(); MAX_WORD_LENGTH + 1];
        for (text, score) in best_scores {
            if let Some(word) = Word::new(&text, score) {
                if let Some(bucket) = words_by_length.get_mut(word.len()) {
                    bucket.push(word);
                }
            }
        }

        // Highest score first; ties alphabetical for deterministic ids
        for bucket in &mut words_by_length {
            bucket.sort_by(|a, b| (Reverse(a.score), &a.text).cmp(&(Reverse(b.score), &b.text)));
        }

        let mut lookup = HashMap::new();
        let mut support = Vec::with_capacity(words_by_length.len());

        for (length, bucket) in words_by_length.iter().enumerate() {
            let mut sets: Vec<Vec<WordBitset>> = (0..length)
                .map(|_| (0..LETTER_COUNT).map(|_| WordBitset::new(bucket.len())).collect())
                .collect();

            for (word_id, word) in bucket.iter().enumerate() {
                lookup.insert(word.text.clone(), (length, word_id));

                for (position, &code) in word.letters.iter().enumerate() {
                    if let Some(set) = sets
                        .get_mut(position)
                        .and_then(|by_letter| by_letter.get_mut(usize::from(code)))
                    {
                        set.insert(word_id);
                    }
                }
            }

            support.push(sets);
        }

        Self {
            words_by_length,
            support,
            lookup,
        }
    }

    /// All words of the given length, ordered by descending score
    pub fn bucket(&self, length: usize) -> &[Word] {
        self.words_by_length
            .get(length)
            .map_or(&[], Vec::as_slice)
    }

    /// Number of words of the given length
    pub fn bucket_len(&self, length: usize) -> usize {
        self.bucket(length).len()
    }

    /// Total number of indexed words
    pub fn word_count(&self) -> usize {
        self.words_by_length.iter().map(Vec::len).sum()
    }

    /// Resolve a word by length bucket and identifier
    pub fn word(&self, length: usize, word_id: WordId) -> Option<&Word> {
        self.bucket(length).get(word_id)
    }

    /// Locate a word's bucket and identifier by text
    pub fn word_id(&self, text: &str) -> Option<(usize, WordId)> {
        self.lookup.get(&text.to_ascii_uppercase()).copied()
    }

    /// Test dictionary membership
    pub fn contains(&self, text: &str) -> bool {
        self.lookup.contains_key(&text.to_ascii_uppercase())
    }

    /// Score of a word, 0 when absent
    pub fn score(&self, text: &str) -> u32 {
        self.word_id(text)
            .and_then(|(length, word_id)| self.word(length, word_id))
            .map_or(0, |word| word.score)
    }

    /// Support set for words carrying `letter` at `position` in a bucket
    pub fn support_set(&self, length: usize, position: usize, letter: u8) -> Option<&WordBitset> {
        self.support
            .get(length)?
            .get(position)?
            .get(usize::from(letter))
    }

    /// Find the ids of all words matching a pattern with at least `min_score`
    ///
    /// Collects the support set of every fixed position, intersects them
    /// smallest-first, and bails out as soon as an intersection is empty.
    /// An all-wildcard pattern degenerates to the full length bucket.
    pub fn find_matches(&self, pattern: &Pattern, min_score: u32) -> Vec<WordId> {
        let length = pattern.len();
        let bucket = self.bucket(length);
        if bucket.is_empty() {
            return Vec::new();
        }

        let above_floor = |&word_id: &WordId| {
            bucket
                .get(word_id)
                .is_some_and(|word| word.score >= min_score)
        };

        let mut sets: Vec<&WordBitset> = pattern
            .fixed()
            .filter_map(|(position, code)| self.support_set(length, position, code))
            .collect();

        if sets.is_empty() {
            return (0..bucket.len()).filter(above_floor).collect();
        }

        sets.sort_by_key(|set| set.count());

        let Some((first, rest)) = sets.split_first() else {
            return Vec::new();
        };

        let mut matched = (*first).clone();
        for set in rest {
            matched.intersect_with(set);
            if matched.is_empty() {
                return Vec::new();
            }
        }

        matched.iter().filter(|id| above_floor(id)).collect()
    }
}
