//! Slot patterns mixing fixed letters and wildcards

use crate::io::error::{Result, invalid_parameter};
use std::fmt;

/// Character that stands for an unconstrained position in pattern text
pub const WILDCARD: char = '.';

/// Convert an ASCII letter to its alphabet code 0..=25
pub const fn letter_code(c: char) -> Option<u8> {
    let upper = c.to_ascii_uppercase();
    if upper.is_ascii_uppercase() {
        Some(upper as u8 - b'A')
    } else {
        None
    }
}

/// Convert an alphabet code 0..=25 back to its uppercase letter
pub const fn code_char(code: u8) -> char {
    (b'A' + code % 26) as char
}

/// Positional letter constraints for one slot
///
/// Each position is either a fixed letter or a wildcard. A word matches the
/// pattern when it has the same length and agrees with every fixed position.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Pattern {
    cells: Vec<Option<u8>>,
}

impl Pattern {
    /// Build a pattern directly from optional letter codes
    pub fn from_cells(cells: Vec<Option<u8>>) -> Self {
        Self { cells }
    }

    /// Build an all-wildcard pattern of the given length
    pub fn open(length: usize) -> Self {
        Self {
            cells: vec![None; length],
        }
    }

    /// Parse pattern text where letters are fixed and [`WILDCARD`] is free
    ///
    /// Letter case is ignored. A `?` is accepted as an alternate wildcard.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is empty or contains a character that is
    /// neither a letter nor a wildcard.
    pub fn parse(text: &str) -> Result<Self> {
        if text.is_empty() {
            return Err(invalid_parameter(
                "pattern",
                &text,
                &"pattern must not be empty",
            ));
        }

        let mut cells = Vec::with_capacity(text.chars().count());
        for c in text.chars() {
            if c == WILDCARD || c == '?' {
                cells.push(None);
            } else if let Some(code) = letter_code(c) {
                cells.push(Some(code));
            } else {
                return Err(invalid_parameter(
                    "pattern",
                    &text,
                    &format!("unrecognized pattern character '{c}'"),
                ));
            }
        }

        Ok(Self { cells })
    }

    /// Number of positions in the pattern
    pub const fn len(&self) -> usize {
        self.cells.len()
    }

    /// Test whether the pattern has zero positions
    pub const fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Letter code fixed at a position, if any
    pub fn letter_at(&self, position: usize) -> Option<u8> {
        self.cells.get(position).copied().flatten()
    }

    /// Iterate over the fixed `(position, letter code)` pairs
    pub fn fixed(&self) -> impl Iterator<Item = (usize, u8)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(position, cell)| cell.map(|code| (position, code)))
    }

    /// Count of fixed positions
    pub fn fixed_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Test whether every position is a wildcard
    pub fn is_open(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }

    /// Test whether every position is a fixed letter
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Test a word's letter codes against the fixed positions
    pub fn matches(&self, letters: &[u8]) -> bool {
        letters.len() == self.cells.len()
            && self
                .fixed()
                .all(|(position, code)| letters.get(position) == Some(&code))
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.cells {
            match cell {
                Some(code) => write!(f, "{}", code_char(*code))?,
                None => write!(f, "{WILDCARD}")?,
            }
        }
        Ok(())
    }
}
