//! Constraint-based fill engine for 5x5 mini crosswords
//!
//! The engine loads a scored dictionary into an immutable index, extracts
//! word slots and their crossings from a grid, and fills every slot with a
//! dictionary word using arc-consistency propagation and heuristic
//! backtracking under a wall-clock deadline.

#![forbid(unsafe_code)]

/// Fill orchestration including block templates, quality scoring, and the public operations
pub mod engine;
/// Grid cells, slot extraction, and crossing detection for the 5x5 board
pub mod grid;
/// Input/output operations, configuration constants, and error handling
pub mod io;
/// Scored dictionary index with positional pattern queries
pub mod lexicon;
/// Candidate domains, AC-3 propagation, and backtracking search
pub mod solver;

pub use io::error::{EngineError, Result};
