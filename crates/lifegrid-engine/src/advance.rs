//! Bulk advancement by a fixed number of generations.
//!
//! Two buffers are cloned from the input once. Each step writes the next
//! generation into the idle buffer and then swaps the roles of the two,
//! so the loop allocates nothing regardless of `steps`.

use std::mem;

use lifegrid_types::Grid;
use tracing::debug;

use crate::generation::write_generation;

/// The grid `steps` generations after `initial`.
///
/// `steps == 0` returns an unchanged copy. The returned grid is owned by
/// the caller and shares nothing with `initial`.
pub fn advance(initial: &Grid, steps: u64) -> Grid {
    let mut current = initial.clone();
    if steps == 0 {
        return current;
    }

    let mut next = initial.clone();
    for _ in 0..steps {
        write_generation(&current, &mut next);
        mem::swap(&mut current, &mut next);
    }

    debug!(
        steps,
        rows = current.rows(),
        cols = current.cols(),
        live = current.live_count(),
        "Advanced grid"
    );
    current
}

/// The grid one generation after `grid`.
pub fn step(grid: &Grid) -> Grid {
    advance(grid, 1)
}
