//! The single-cell transition rule (B3/S23).
//!
//! The grid has a hard boundary: positions outside it are dead and there
//! is no wraparound, so an edge cell has 5 neighbours and a corner cell 3.

use std::ops::RangeInclusive;

use lifegrid_types::Grid;

/// Count alive cells among the Moore neighbours of `(row, col)`.
///
/// Only in-bounds neighbours are considered. The result is at most 8.
pub fn live_neighbors(grid: &Grid, row: usize, col: usize) -> u8 {
    let mut count: u8 = 0;
    for r in span(row, grid.rows()) {
        for c in span(col, grid.cols()) {
            if (r, c) != (row, col) && grid.get(r, c) {
                count = count.saturating_add(1);
            }
        }
    }
    count
}

/// Whether a cell is alive next generation, given its current state and
/// live neighbour count.
///
/// A live cell survives with 2 or 3 live neighbours; a dead cell is born
/// with exactly 3. Everything else is dead.
pub const fn survives(alive: bool, live_neighbors: u8) -> bool {
    matches!((alive, live_neighbors), (true, 2 | 3) | (false, 3))
}

/// State of `(row, col)` in the next generation of `grid`.
///
/// Coordinates must lie inside the grid. Out-of-bounds coordinates are a
/// caller error and always yield `false`.
pub fn next_cell_state(grid: &Grid, row: usize, col: usize) -> bool {
    if !grid.contains(row, col) {
        return false;
    }
    survives(grid.get(row, col), live_neighbors(grid, row, col))
}

/// In-bounds indices within one step of `center` along an axis of `len`.
fn span(center: usize, len: usize) -> RangeInclusive<usize> {
    let low = center.saturating_sub(1);
    let high = center.saturating_add(1).min(len.saturating_sub(1));
    low..=high
}
