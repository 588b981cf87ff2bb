//! Engine constants and runtime configuration defaults

// Board geometry; the algorithms generalize but the product is a 5x5 mini
/// Number of rows and columns in the board
pub const GRID_SIZE: usize = 5;

/// Shortest run of white cells that forms a word slot
pub const MIN_SLOT_LENGTH: usize = 2;

/// Longest word the index will ingest (anything longer cannot be placed)
pub const MAX_WORD_LENGTH: usize = GRID_SIZE;

/// Size of the letter alphabet (A through Z)
pub const LETTER_COUNT: usize = 26;

// Template acceptance limits for generated block layouts
/// Maximum number of block cells a generated layout may contain
pub const MAX_BLOCK_COUNT: usize = 10;

// Default values for configurable parameters
/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;

/// Default number of attempts for a generate call
pub const DEFAULT_MAX_RETRIES: usize = 25;

/// Default minimum dictionary score for candidate words
pub const DEFAULT_MIN_SCORE: u32 = 0;

/// Default wall-clock budget for one operation in milliseconds
pub const DEFAULT_TIMEOUT_MS: u64 = 500;

/// Default truncation limit for candidate list queries
pub const DEFAULT_CANDIDATE_LIMIT: usize = 100;

// Value-ordering tiers for the quick-fill shuffle, highest first
/// Score boundaries separating the shuffle tiers
pub const SCORE_TIERS: [u32; 3] = [75, 50, 25];

// Quality scoring coefficients for generated puzzles
/// Starting quality score before adjustments
pub const QUALITY_BASE_SCORE: i32 = 100;

/// Penalty applied per two-letter word
pub const TWO_LETTER_PENALTY: i32 = 30;

/// Bonus applied per three-letter word
pub const THREE_LETTER_BONUS: i32 = 10;

/// Bonus applied per word of length four or more
pub const LONG_WORD_BONUS: i32 = 20;

/// Bonus applied per placed word regardless of length
pub const WORD_COUNT_BONUS: i32 = 5;

/// Bonus when the average word score reaches [`HIGH_AVERAGE_THRESHOLD`]
pub const HIGH_AVERAGE_BONUS: i32 = 20;

/// Bonus when the average word score reaches [`MID_AVERAGE_THRESHOLD`]
pub const MID_AVERAGE_BONUS: i32 = 10;

/// Penalty when the average word score falls below [`LOW_AVERAGE_THRESHOLD`]
pub const LOW_AVERAGE_PENALTY: i32 = 20;

/// Average word score granting the high-average bonus
pub const HIGH_AVERAGE_THRESHOLD: f64 = 50.0;

/// Average word score granting the mid-average bonus
pub const MID_AVERAGE_THRESHOLD: f64 = 30.0;

/// Average word score below which the low-average penalty applies
pub const LOW_AVERAGE_THRESHOLD: f64 = 15.0;

/// Maximum count of two-letter words an accepted puzzle may contain
pub const MAX_TWO_LETTER_WORDS: usize = 4;

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;
