//! Curated block layouts for generated puzzles

use crate::engine::options::Symmetry;
use crate::grid::layout::{Cell, Grid, rotational_partner};
use crate::io::configuration::MAX_BLOCK_COUNT;
use rand::Rng;
use rand::rngs::StdRng;

/// Curated block templates, each a list of `(row, col)` block coordinates
///
/// The open grid is a valid template; the others pepper the middle ring so
/// the corner slots stay long.
pub const TEMPLATES: &[&[(usize, usize)]] = &[
    &[],
    &[(2, 2)],
    &[(1, 2), (3, 2)],
    &[(1, 1), (3, 3)],
    &[(1, 3), (3, 1)],
    &[(1, 1), (1, 3), (3, 1), (3, 3)],
];

/// Fallback layout used when a selected template fails validation
pub const FALLBACK_TEMPLATE: &[(usize, usize)] = &[(2, 2)];

/// Pick one curated template uniformly at random
pub fn select_template(rng: &mut StdRng) -> &'static [(usize, usize)] {
    let choice = rng.random_range(0..TEMPLATES.len());
    TEMPLATES.get(choice).copied().unwrap_or(FALLBACK_TEMPLATE)
}

/// Build an empty board carrying a template's blocks
///
/// Rotational symmetry also blocks the central mirror of every template
/// cell.
pub fn build_grid(template: &[(usize, usize)], symmetry: Symmetry) -> Grid {
    let mut grid = Grid::empty();

    for &(row, col) in template {
        grid.set(row, col, Cell::Block);

        if symmetry == Symmetry::Rotational {
            let (mirror_row, mirror_col) = rotational_partner(row, col);
            grid.set(mirror_row, mirror_col, Cell::Block);
        }
    }

    grid
}

/// Validate a block layout for fillability
///
/// Rejects layouts with too many blocks, a fully blocked row or column, or
/// white cells split into disconnected regions.
pub fn is_valid_layout(grid: &Grid) -> bool {
    grid.block_count() <= MAX_BLOCK_COUNT
        && !grid.has_blocked_line()
        && grid.white_cells_connected()
}

/// Select, build, and validate a layout, falling back to the center block
pub fn random_layout(rng: &mut StdRng, symmetry: Symmetry) -> Grid {
    let grid = build_grid(select_template(rng), symmetry);

    if is_valid_layout(&grid) {
        grid
    } else {
        build_grid(FALLBACK_TEMPLATE, symmetry)
    }
}
