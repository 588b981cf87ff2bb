//! Scored dictionary file parsing
//!
//! The on-disk format is one entry per line, `WORD;SCORE`, with `WORD`
//! matching `[A-Z]+` and `SCORE` an integer in 1..=100. Lines starting
//! with `#` and blank lines are ignored; anything else that fails the
//! format is skipped silently and counted.

use crate::io::error::{EngineError, Result};
use crate::lexicon::index::WordIndex;
use std::fs;
use std::path::Path;

/// Parsed dictionary entries plus a count of rejected lines
#[derive(Clone, Debug, Default)]
pub struct DictionarySource {
    /// Accepted `(word, score)` entries in file order
    pub entries: Vec<(String, u32)>,
    /// Number of non-comment lines that failed the format
    pub skipped_lines: usize,
}

/// Parse a single `WORD;SCORE` line
///
/// Returns `None` for anything that fails the format, including scores
/// outside 1..=100 and lowercase or non-letter words.
pub fn parse_entry(line: &str) -> Option<(String, u32)> {
    let (word, score_text) = line.split_once(';')?;

    if word.is_empty() || !word.chars().all(|c| c.is_ascii_uppercase()) {
        return None;
    }

    let score: u32 = score_text.parse().ok()?;
    (1..=100)
        .contains(&score)
        .then(|| (word.to_string(), score))
}

/// Parse full dictionary text
pub fn parse(text: &str) -> DictionarySource {
    let mut source = DictionarySource::default();

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        match parse_entry(line) {
            Some(entry) => source.entries.push(entry),
            None => source.skipped_lines += 1,
        }
    }

    source
}

/// Load and parse a dictionary file
///
/// # Errors
///
/// Returns [`EngineError::DictionaryLoad`] when the file cannot be read;
/// malformed lines never fail the load.
pub fn load(path: &Path) -> Result<DictionarySource> {
    let text = fs::read_to_string(path).map_err(|source| EngineError::DictionaryLoad {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(parse(&text))
}

/// Load a dictionary file straight into a word index
///
/// # Errors
///
/// Returns [`EngineError::DictionaryLoad`] when the file cannot be read.
pub fn load_index(path: &Path) -> Result<WordIndex> {
    let source = load(path)?;
    Ok(WordIndex::from_entries(source.entries))
}
