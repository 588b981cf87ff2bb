//! Caller-facing options for the three engine operations

use crate::io::configuration::{
    DEFAULT_CANDIDATE_LIMIT, DEFAULT_MAX_RETRIES, DEFAULT_MIN_SCORE, DEFAULT_SEED,
};

/// Block layout symmetry applied during generation
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Symmetry {
    /// Use the selected template as-is
    #[default]
    None,
    /// Mirror every block through the board center, (r,c) to (4-r,4-c)
    Rotational,
}

/// Options for generating a puzzle from scratch
#[derive(Clone, Debug)]
pub struct GenerateOptions {
    /// Block layout symmetry
    pub symmetry: Symmetry,
    /// Minimum dictionary score for chosen words
    pub min_score: u32,
    /// Maximum number of template attempts before giving up
    pub max_retries: usize,
    /// Wall-clock budget for the whole operation in milliseconds
    pub timeout_ms: Option<u64>,
    /// Words that must not appear in the result, any case
    pub exclude: Vec<String>,
    /// Seed for the orchestrator's random choices
    pub seed: u64,
    /// Shuffle candidates within score tiers for diverse output
    pub quick_fill: bool,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            symmetry: Symmetry::default(),
            min_score: DEFAULT_MIN_SCORE,
            max_retries: DEFAULT_MAX_RETRIES,
            timeout_ms: None,
            exclude: Vec::new(),
            seed: DEFAULT_SEED,
            quick_fill: true,
        }
    }
}

/// Options for filling a supplied partial board
#[derive(Clone, Debug)]
pub struct FillOptions {
    /// Minimum dictionary score for chosen words
    pub min_score: u32,
    /// Maximum number of attempts before giving up
    ///
    /// Retrying is only useful together with `quick_fill`; a deterministic
    /// fill runs the same search every attempt.
    pub max_retries: usize,
    /// Wall-clock budget for the whole operation in milliseconds
    pub timeout_ms: Option<u64>,
    /// Words that must not appear in the result, any case
    pub exclude: Vec<String>,
    /// Seed for the orchestrator's random choices
    pub seed: u64,
    /// Shuffle candidates within score tiers for diverse output
    pub quick_fill: bool,
}

impl Default for FillOptions {
    fn default() -> Self {
        Self {
            min_score: DEFAULT_MIN_SCORE,
            max_retries: 1,
            timeout_ms: None,
            exclude: Vec::new(),
            seed: DEFAULT_SEED,
            quick_fill: false,
        }
    }
}

/// Options for listing arc-consistent candidates for one slot
#[derive(Clone, Debug)]
pub struct CandidateOptions {
    /// Truncation limit for the returned list
    pub limit: usize,
    /// Minimum dictionary score for listed words
    pub min_score: u32,
    /// Words that must not be listed, any case
    pub exclude: Vec<String>,
}

impl Default for CandidateOptions {
    fn default() -> Self {
        Self {
            limit: DEFAULT_CANDIDATE_LIMIT,
            min_score: DEFAULT_MIN_SCORE,
            exclude: Vec::new(),
        }
    }
}

/// Normalize an exclusion list to uppercase for case-insensitive matching
pub fn normalize_exclusions(exclude: &[String]) -> std::collections::HashSet<String> {
    exclude
        .iter()
        .map(|word| word.trim().to_ascii_uppercase())
        .filter(|word| !word.is_empty())
        .collect()
}
