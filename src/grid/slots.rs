//! Slot extraction and crossing detection
//!
//! A slot is a maximal run of at least two white cells along a row or a
//! column. Across slots are enumerated before down slots, both in scan
//! order, so slot identifiers are stable for a given block layout.

use crate::grid::layout::Grid;
use crate::io::configuration::{GRID_SIZE, MIN_SLOT_LENGTH};
use crate::io::error::{Result, invalid_grid};
use crate::lexicon::pattern::{Pattern, code_char};
use std::collections::HashMap;
use std::fmt;

/// Identifier for a slot, its index in the detection order
pub type SlotId = usize;

/// Orientation of a slot
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Direction {
    /// Left-to-right along a row
    Across,
    /// Top-to-bottom along a column
    Down,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Across => write!(f, "across"),
            Self::Down => write!(f, "down"),
        }
    }
}

/// A shared cell between two slots
///
/// Stored per cell position on the owning slot; consistency requires the
/// owning slot's letter at that position to equal the other slot's letter
/// at `other_cell`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Crossing {
    /// Slot sharing the cell
    pub other_slot: SlotId,
    /// Cell index of the shared cell within the other slot
    pub other_cell: usize,
}

/// A word slot detected on the board
#[derive(Clone, Debug)]
pub struct Slot {
    /// Identifier assigned in detection order
    pub id: SlotId,
    /// Orientation
    pub direction: Direction,
    /// Coordinates of the first cell
    pub start: (usize, usize),
    /// Number of cells in the run
    pub length: usize,
    /// Coordinates of every cell in order
    pub cells: Vec<(usize, usize)>,
    /// Crossing for each cell position, where one exists
    pub crossings: Vec<Option<Crossing>>,
}

impl Slot {
    /// Printable stable identity, e.g. `across-0-0`
    pub fn handle(&self) -> String {
        format!("{}-{}-{}", self.direction, self.start.0, self.start.1)
    }

    /// Read the slot's current pattern from the board
    pub fn pattern(&self, grid: &Grid) -> Pattern {
        Pattern::from_cells(
            self.cells
                .iter()
                .map(|&(row, col)| grid.letter_at(row, col))
                .collect(),
        )
    }

    /// The complete word spelled by the slot, if every cell has a letter
    pub fn placed_word(&self, grid: &Grid) -> Option<String> {
        self.cells
            .iter()
            .map(|&(row, col)| grid.letter_at(row, col).map(code_char))
            .collect()
    }
}

/// Parse a slot handle into direction and start coordinates
pub fn parse_handle(handle: &str) -> Option<(Direction, usize, usize)> {
    let mut parts = handle.split('-');
    let direction = match parts.next()? {
        "across" => Direction::Across,
        "down" => Direction::Down,
        _ => return None,
    };
    let row = parts.next()?.parse().ok()?;
    let col = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some((direction, row, col))
}

/// All slots of one board with their crossings resolved
#[derive(Debug, Default)]
pub struct SlotSet {
    slots: Vec<Slot>,
}

impl SlotSet {
    /// Detect slots and crossings on a board
    ///
    /// # Errors
    ///
    /// Returns an error when a white cell belongs to no slot in either
    /// direction, since no word could ever cover it.
    pub fn detect(grid: &Grid) -> Result<Self> {
        let mut slots = Vec::new();

        for row in 0..GRID_SIZE {
            collect_runs(grid, Direction::Across, row, &mut slots);
        }
        for col in 0..GRID_SIZE {
            collect_runs(grid, Direction::Down, col, &mut slots);
        }

        let mut coverage: HashMap<(usize, usize), Vec<(SlotId, usize)>> = HashMap::new();
        for slot in &slots {
            for (cell_idx, &coords) in slot.cells.iter().enumerate() {
                coverage.entry(coords).or_default().push((slot.id, cell_idx));
            }
        }

        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                if !grid.is_block(row, col) && !coverage.contains_key(&(row, col)) {
                    return Err(invalid_grid(format!(
                        "white cell at row {row}, column {col} belongs to no slot"
                    )));
                }
            }
        }

        // Record each shared cell on both participating slots
        for members in coverage.values() {
            if let [(slot_a, cell_a), (slot_b, cell_b)] = members.as_slice() {
                link(&mut slots, *slot_a, *cell_a, *slot_b, *cell_b);
                link(&mut slots, *slot_b, *cell_b, *slot_a, *cell_a);
            }
        }

        Ok(Self { slots })
    }

    /// Number of detected slots
    pub const fn len(&self) -> usize {
        self.slots.len()
    }

    /// Test whether the board has no slots at all
    pub const fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Slot by identifier
    pub fn get(&self, slot_id: SlotId) -> Option<&Slot> {
        self.slots.get(slot_id)
    }

    /// Iterate over all slots in detection order
    pub fn iter(&self) -> impl Iterator<Item = &Slot> {
        self.slots.iter()
    }

    /// Find a slot by its printable handle
    pub fn find_by_handle(&self, handle: &str) -> Option<SlotId> {
        let (direction, row, col) = parse_handle(handle)?;
        self.slots
            .iter()
            .find(|slot| slot.direction == direction && slot.start == (row, col))
            .map(|slot| slot.id)
    }
}

fn link(slots: &mut [Slot], slot_id: SlotId, cell_idx: usize, other_slot: SlotId, other_cell: usize) {
    if let Some(entry) = slots
        .get_mut(slot_id)
        .and_then(|slot| slot.crossings.get_mut(cell_idx))
    {
        *entry = Some(Crossing {
            other_slot,
            other_cell,
        });
    }
}

/// Append the maximal white runs of one row or column as slots
fn collect_runs(grid: &Grid, direction: Direction, line: usize, slots: &mut Vec<Slot>) {
    let mut run: Vec<(usize, usize)> = Vec::new();

    for offset in 0..=GRID_SIZE {
        let coords = match direction {
            Direction::Across => (line, offset),
            Direction::Down => (offset, line),
        };

        // The offset one past the line end flushes the final run
        let white = offset < GRID_SIZE && !grid.is_block(coords.0, coords.1);

        if white {
            run.push(coords);
        } else if run.len() >= MIN_SLOT_LENGTH {
            let cells = std::mem::take(&mut run);
            slots.push(Slot {
                id: slots.len(),
                direction,
                start: cells.first().copied().unwrap_or((0, 0)),
                length: cells.len(),
                crossings: vec![None; cells.len()],
                cells,
            });
        } else {
            run.clear();
        }
    }
}
