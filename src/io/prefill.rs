//! Seed grid and exclusion list loading
//!
//! Seed grids are 5-line text files using `#` for blocks, `.` for empty
//! cells, and letters for pre-placed content. Exclusion files carry one
//! word per line; blanks and `#` comment lines are skipped.

use crate::grid::layout::Grid;
use crate::io::error::{EngineError, Result};
use std::fs;
use std::path::Path;

/// Load a seed grid from a text file
///
/// # Errors
///
/// Returns [`EngineError::FileSystem`] when the file cannot be read and
/// [`EngineError::InvalidGrid`] when its contents do not parse as a board.
pub fn load_grid_file(path: &Path) -> Result<Grid> {
    let text = fs::read_to_string(path).map_err(|source| EngineError::FileSystem {
        path: path.to_path_buf(),
        operation: "read grid",
        source,
    })?;

    Grid::parse(&text)
}

/// Load an exclusion word list from a text file
///
/// Words are returned as written; the engine normalizes case on ingest.
///
/// # Errors
///
/// Returns [`EngineError::FileSystem`] when the file cannot be read.
pub fn load_exclusion_file(path: &Path) -> Result<Vec<String>> {
    let text = fs::read_to_string(path).map_err(|source| EngineError::FileSystem {
        path: path.to_path_buf(),
        operation: "read exclusion list",
        source,
    })?;

    Ok(text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect())
}
