//! Error types for the `lifegrid-engine` crate.
//!
//! Grid shape is validated when a [`Grid`](lifegrid_types::Grid) is built,
//! so the only failures left here are mismatched buffers and an empty
//! iteration budget.

/// Errors that can occur when invoking the engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    /// The output buffer does not have the dimensions of the input grid.
    #[error("buffer is {found:?}, expected {expected:?} (rows, cols)")]
    ShapeMismatch {
        /// Dimensions of the input grid.
        expected: (usize, usize),
        /// Dimensions of the output buffer.
        found: (usize, usize),
    },

    /// The iteration budget for a terminal-state search was zero.
    #[error("iteration budget must be positive")]
    InvalidBudget,
}
