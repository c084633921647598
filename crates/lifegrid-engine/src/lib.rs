//! Game of Life simulation engine for Lifegrid.
//!
//! The engine is pure and stateless: every operation reads an input
//! [`Grid`] and returns freshly owned output. There is no global state,
//! so independent runs may proceed on any number of threads.
//!
//! # Modules
//!
//! - [`rule`] -- Neighbour counting and the single-cell B3/S23 rule.
//! - [`generation`] -- One whole-grid step into a preallocated buffer.
//! - [`advance`] -- Bulk N-step advancement with buffer swapping.
//! - [`signature`] -- Canonical grid encodings used as cycle keys.
//! - [`terminal`] -- Stable/cycle detection within an iteration budget.
//! - [`error`] -- Precondition errors.
//!
//! [`Grid`]: lifegrid_types::Grid

pub mod advance;
pub mod error;
pub mod generation;
pub mod rule;
pub mod signature;
pub mod terminal;

// Re-export primary types at crate root.
pub use advance::{advance, step};
pub use error::EngineError;
pub use generation::compute_generation;
pub use rule::{live_neighbors, next_cell_state};
pub use signature::Signature;
pub use terminal::{DEFAULT_MAX_ITERATIONS, TerminalState, budget, find_terminal_state};
