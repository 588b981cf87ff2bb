//! Acceptance scoring for generated puzzles
//!
//! The formula is a product policy, not a law of the solver: generation
//! rejects low-scoring boards and retries, while explicit fills return
//! whatever the seeds force.

use crate::engine::report::Placement;
use crate::io::configuration::{
    HIGH_AVERAGE_BONUS, HIGH_AVERAGE_THRESHOLD, LONG_WORD_BONUS, LOW_AVERAGE_PENALTY,
    LOW_AVERAGE_THRESHOLD, MAX_TWO_LETTER_WORDS, MID_AVERAGE_BONUS, MID_AVERAGE_THRESHOLD,
    QUALITY_BASE_SCORE, THREE_LETTER_BONUS, TWO_LETTER_PENALTY, WORD_COUNT_BONUS,
};

/// Quality breakdown for one filled board
#[derive(Clone, Debug, PartialEq)]
pub struct QualityReport {
    /// Final quality score after all adjustments
    pub score: i32,
    /// Count of two-letter words
    pub two_letter_words: usize,
    /// Count of three-letter words
    pub three_letter_words: usize,
    /// Count of words with four or more letters
    pub long_words: usize,
    /// Total placed words
    pub word_count: usize,
    /// Mean dictionary score across placed words, 0 for an empty board
    pub average_word_score: f64,
}

impl QualityReport {
    /// Whether generation should accept a board with this quality
    pub fn is_acceptable(&self) -> bool {
        self.score >= 0 && self.two_letter_words <= MAX_TWO_LETTER_WORDS
    }
}

/// Score a filled board from its placements
///
/// Words injected from seed grids carry score 0 and drag the average down
/// accordingly.
pub fn evaluate(placements: &[Placement]) -> QualityReport {
    let word_count = placements.len();
    let two_letter_words = placements.iter().filter(|p| p.word.len() == 2).count();
    let three_letter_words = placements.iter().filter(|p| p.word.len() == 3).count();
    let long_words = placements.iter().filter(|p| p.word.len() >= 4).count();

    let average_word_score = if word_count == 0 {
        0.0
    } else {
        let total: u32 = placements.iter().map(|p| p.score).sum();
        f64::from(total) / word_count as f64
    };

    let mut score = QUALITY_BASE_SCORE;
    score -= TWO_LETTER_PENALTY * two_letter_words as i32;
    score += THREE_LETTER_BONUS * three_letter_words as i32;
    score += LONG_WORD_BONUS * long_words as i32;
    score += WORD_COUNT_BONUS * word_count as i32;

    if average_word_score >= HIGH_AVERAGE_THRESHOLD {
        score += HIGH_AVERAGE_BONUS;
    } else if average_word_score >= MID_AVERAGE_THRESHOLD {
        score += MID_AVERAGE_BONUS;
    } else if average_word_score < LOW_AVERAGE_THRESHOLD {
        score -= LOW_AVERAGE_PENALTY;
    }

    QualityReport {
        score,
        two_letter_words,
        three_letter_words,
        long_words,
        word_count,
        average_word_score,
    }
}
