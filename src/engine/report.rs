//! Result types returned by the engine operations

use crate::engine::quality::QualityReport;
use crate::grid::layout::Grid;
use crate::grid::slots::Direction;

/// One word placed into the board
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Placement {
    /// The placed word, uppercase
    pub word: String,
    /// Orientation of the slot
    pub direction: Direction,
    /// Row of the slot's first cell
    pub row: usize,
    /// Column of the slot's first cell
    pub col: usize,
    /// Dictionary score of the word, 0 for injected seed words
    pub score: u32,
}

/// Counters emitted with every successful fill
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct FillStats {
    /// Attempts started, including the successful one
    pub attempts: usize,
    /// Placements undone after recursive failure across all attempts
    pub backtracks: u64,
    /// Slots holding a word in the returned board
    pub filled_slots: usize,
    /// Dictionary pattern searches performed, cache hits included
    pub pattern_searches: usize,
    /// Valid fills rejected for quality before the returned one
    pub quality_rejections: usize,
    /// Wall-clock time for the whole operation in milliseconds
    pub elapsed_ms: u128,
    /// Size of the normalized exclusion set
    pub excluded_words: usize,
}

/// Successful result of a generate or fill operation
#[derive(Clone, Debug)]
pub struct FillReport {
    /// The completed board
    pub grid: Grid,
    /// Every placed word with its position, across slots first
    pub placements: Vec<Placement>,
    /// Quality breakdown of the returned board
    pub quality: QualityReport,
    /// Operation statistics
    pub stats: FillStats,
}

/// Static description of one slot, echoed by candidate queries
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SlotDescriptor {
    /// Printable stable identity, e.g. `across-0-0`
    pub handle: String,
    /// Orientation
    pub direction: Direction,
    /// Row of the first cell
    pub row: usize,
    /// Column of the first cell
    pub col: usize,
    /// Number of cells
    pub length: usize,
    /// Current pattern text with `.` for open cells
    pub pattern: String,
}

/// One scored candidate for a slot
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Candidate {
    /// Candidate word, uppercase
    pub word: String,
    /// Dictionary score
    pub score: u32,
}

/// Result of a candidate list query
#[derive(Clone, Debug, Default)]
pub struct CandidateList {
    /// Descriptor of the requested slot, `None` when the handle is unknown
    pub slot: Option<SlotDescriptor>,
    /// Arc-consistent candidates in descending score order, truncated
    pub candidates: Vec<Candidate>,
    /// Candidate count before truncation
    pub total_candidates: usize,
}
