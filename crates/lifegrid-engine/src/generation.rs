//! One whole-grid generation step into a caller-supplied buffer.

use lifegrid_types::Grid;

use crate::error::EngineError;
use crate::rule::next_cell_state;

/// Compute the next generation of `current` into `next`.
///
/// Every cell of `next` is overwritten; its previous contents are
/// irrelevant. No allocation takes place, which makes this the inner
/// step of the buffer-swap loops in [`advance`](crate::advance) and
/// [`terminal`](crate::terminal).
///
/// # Errors
///
/// Returns [`EngineError::ShapeMismatch`] without touching `next` when
/// the two grids differ in dimensions.
pub fn compute_generation(current: &Grid, next: &mut Grid) -> Result<(), EngineError> {
    if !current.same_shape(next) {
        return Err(EngineError::ShapeMismatch {
            expected: current.dimensions(),
            found: next.dimensions(),
        });
    }
    write_generation(current, next);
    Ok(())
}

/// [`compute_generation`] for buffers already known to share a shape.
pub(crate) fn write_generation(current: &Grid, next: &mut Grid) {
    next.fill_with(|row, col| next_cell_state(current, row, col));
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn blinker_into_zeroed_buffer() {
        let current = Grid::parse("000\n111\n000").unwrap();
        let mut next = Grid::new(3, 3).unwrap();
        compute_generation(&current, &mut next).unwrap();
        assert_eq!(next, Grid::parse("010\n010\n010").unwrap());
    }

    #[test]
    fn stale_buffer_contents_are_overwritten() {
        let current = Grid::parse("000\n111\n000").unwrap();
        let mut next = Grid::parse("111\n111\n111").unwrap();
        compute_generation(&current, &mut next).unwrap();
        assert_eq!(next, Grid::parse("010\n010\n010").unwrap());
    }

    #[test]
    fn current_is_left_untouched() {
        let current = Grid::parse("0110\n1001\n0110").unwrap();
        let before = current.clone();
        let mut next = Grid::new(3, 4).unwrap();
        compute_generation(&current, &mut next).unwrap();
        assert_eq!(current, before);
    }

    #[test]
    fn mismatched_buffer_is_rejected() {
        let current = Grid::parse("000\n111\n000").unwrap();
        let mut next = Grid::parse("11\n11").unwrap();
        let err = compute_generation(&current, &mut next);
        assert_eq!(
            err,
            Err(EngineError::ShapeMismatch {
                expected: (3, 3),
                found: (2, 2),
            })
        );
        // Rejected buffers keep their contents.
        assert_eq!(next.live_count(), 4);
    }

    #[test]
    fn transposed_buffer_is_rejected() {
        let current = Grid::new(2, 3).unwrap();
        let mut next = Grid::new(3, 2).unwrap();
        assert!(compute_generation(&current, &mut next).is_err());
    }
}
