//! Board storage for the 5x5 cell matrix
//!
//! A cell is a block, an empty square awaiting a letter, or a placed letter.
//! The board is a fixed-size `ndarray` matrix with (0,0) at the top left.

use crate::io::configuration::GRID_SIZE;
use crate::io::error::{Result, invalid_grid};
use crate::lexicon::pattern::{code_char, letter_code};
use ndarray::Array2;
use std::fmt;

/// Text marker for a block cell
pub const BLOCK_CHAR: char = '#';

/// Text marker for an empty cell
pub const EMPTY_CHAR: char = '.';

/// One square of the board
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Cell {
    /// No word passes through this square
    Block,
    /// White square awaiting a letter
    Empty,
    /// White square holding the letter with this alphabet code
    Letter(u8),
}

impl Cell {
    /// Parse a single grid character
    ///
    /// `#` is a block, `.` or `_` an empty square, and any ASCII letter a
    /// placed letter regardless of case.
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            BLOCK_CHAR => Some(Self::Block),
            EMPTY_CHAR | '_' => Some(Self::Empty),
            _ => match letter_code(c) {
                Some(code) => Some(Self::Letter(code)),
                None => None,
            },
        }
    }

    /// Render the cell back to its grid character
    pub const fn to_char(self) -> char {
        match self {
            Self::Block => BLOCK_CHAR,
            Self::Empty => EMPTY_CHAR,
            Self::Letter(code) => code_char(code),
        }
    }

    /// Test whether the cell is a block
    pub const fn is_block(self) -> bool {
        matches!(self, Self::Block)
    }

    /// Letter code held by the cell, if any
    pub const fn letter(self) -> Option<u8> {
        match self {
            Self::Letter(code) => Some(code),
            Self::Block | Self::Empty => None,
        }
    }
}

/// The 5x5 board
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Grid {
    cells: Array2<Cell>,
}

impl Default for Grid {
    fn default() -> Self {
        Self::empty()
    }
}

impl Grid {
    /// Create a board of all-empty white squares
    pub fn empty() -> Self {
        Self {
            cells: Array2::from_elem((GRID_SIZE, GRID_SIZE), Cell::Empty),
        }
    }

    /// Parse a board from text, one row per line
    ///
    /// Blank lines are skipped so templates can be indented in source.
    ///
    /// # Errors
    ///
    /// Returns an error unless the text holds exactly [`GRID_SIZE`] rows of
    /// [`GRID_SIZE`] recognized cell characters each.
    pub fn parse(text: &str) -> Result<Self> {
        let rows: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();

        if rows.len() != GRID_SIZE {
            return Err(invalid_grid(format!(
                "expected {GRID_SIZE} rows, found {}",
                rows.len()
            )));
        }

        let mut grid = Self::empty();
        for (row, line) in rows.iter().enumerate() {
            let chars: Vec<char> = line.chars().collect();
            if chars.len() != GRID_SIZE {
                return Err(invalid_grid(format!(
                    "row {row} has {} cells, expected {GRID_SIZE}",
                    chars.len()
                )));
            }

            for (col, &c) in chars.iter().enumerate() {
                let Some(cell) = Cell::from_char(c) else {
                    return Err(invalid_grid(format!(
                        "unrecognized cell character '{c}' at row {row}, column {col}"
                    )));
                };
                grid.set(row, col, cell);
            }
        }

        Ok(grid)
    }

    /// Cell at the given coordinates
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        self.cells.get((row, col)).copied()
    }

    /// Overwrite a cell, ignoring out-of-range coordinates
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) {
        if let Some(target) = self.cells.get_mut((row, col)) {
            *target = cell;
        }
    }

    /// Test whether the cell at the coordinates is a block
    pub fn is_block(&self, row: usize, col: usize) -> bool {
        self.cell(row, col).is_some_and(Cell::is_block)
    }

    /// Letter code at the coordinates, if a letter is placed there
    pub fn letter_at(&self, row: usize, col: usize) -> Option<u8> {
        self.cell(row, col).and_then(Cell::letter)
    }

    /// Count block cells on the board
    pub fn block_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_block()).count()
    }

    /// Test whether any full row or full column is blocked out
    pub fn has_blocked_line(&self) -> bool {
        let all_blocks = |cells: ndarray::ArrayView1<'_, Cell>| cells.iter().all(|c| c.is_block());

        self.cells.rows().into_iter().any(all_blocks)
            || self.cells.columns().into_iter().any(all_blocks)
    }

    /// Test whether every cell holds a block or a letter
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(|cell| *cell != Cell::Empty)
    }

    /// Test whether the white cells form one 4-connected region
    ///
    /// A board without any white cell is trivially connected.
    pub fn white_cells_connected(&self) -> bool {
        let Some(start) = self.find_white_cell() else {
            return true;
        };

        let mut visited = Array2::from_elem((GRID_SIZE, GRID_SIZE), false);
        let mut frontier = vec![start];

        while let Some((row, col)) = frontier.pop() {
            let Some(seen) = visited.get_mut((row, col)) else {
                continue;
            };
            if *seen {
                continue;
            }
            *seen = true;

            for (next_row, next_col) in neighbors(row, col) {
                if !self.is_block(next_row, next_col)
                    && visited.get((next_row, next_col)) == Some(&false)
                {
                    frontier.push((next_row, next_col));
                }
            }
        }

        self.cells
            .indexed_iter()
            .all(|((row, col), cell)| cell.is_block() || visited.get((row, col)) == Some(&true))
    }

    fn find_white_cell(&self) -> Option<(usize, usize)> {
        self.cells
            .indexed_iter()
            .find(|(_, cell)| !cell.is_block())
            .map(|(coords, _)| coords)
    }

    /// Render the board as [`GRID_SIZE`] newline-separated rows
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(GRID_SIZE * (GRID_SIZE + 1));
        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                out.push(self.cell(row, col).map_or(EMPTY_CHAR, Cell::to_char));
            }
            if row + 1 < GRID_SIZE {
                out.push('\n');
            }
        }
        out
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}

/// Coordinates of the 180-degree rotational partner of a cell
pub const fn rotational_partner(row: usize, col: usize) -> (usize, usize) {
    (GRID_SIZE - 1 - row, GRID_SIZE - 1 - col)
}

/// In-bounds 4-neighbors of a cell
fn neighbors(row: usize, col: usize) -> impl Iterator<Item = (usize, usize)> {
    let up = row.checked_sub(1).map(|r| (r, col));
    let down = (row + 1 < GRID_SIZE).then_some((row + 1, col));
    let left = col.checked_sub(1).map(|c| (row, c));
    let right = (col + 1 < GRID_SIZE).then_some((row, col + 1));

    [up, down, left, right].into_iter().flatten()
}
