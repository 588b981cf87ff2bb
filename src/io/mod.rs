//! Input/output operations and error handling

/// Command-line interface for the fill engine
pub mod cli;
/// Engine constants and runtime defaults
pub mod configuration;
/// Dictionary file parsing
pub mod dictionary;
/// Error types and result alias
pub mod error;
/// Seed grid and exclusion list loading
pub mod prefill;
/// Batch progress display
pub mod progress;
