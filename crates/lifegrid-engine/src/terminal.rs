//! Terminal-state detection: run until the grid repeats or the budget
//! runs out.
//!
//! Every visited state is recorded by [`Signature`] together with the step
//! at which it was first seen (step 0 is the initial grid). After each new
//! step the current signature is looked up; a hit at step `s0` means the
//! grid has entered a loop of period `step - s0`:
//!
//! | Period | Status |
//! |--------|--------|
//! | 1 | [`TerminalStatus::Stable`] |
//! | > 1 | [`TerminalStatus::Cycle`] |
//! | no hit within budget | [`TerminalStatus::MaxIterationsReached`] |
//!
//! Because every state is recorded, the first recurrence is the one
//! reported. Only the period is classified: returning to the initial grid
//! and returning to a grid first seen later are treated alike. The grid
//! handed back is the state at the moment of detection, which is not
//! necessarily the first state of the loop.
//!
//! Memory is bounded by two grid buffers plus at most `max_iterations + 1`
//! signatures.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::mem;
use std::num::NonZeroU32;

use lifegrid_types::{Grid, TerminalStatus};
use tracing::debug;

use crate::error::EngineError;
use crate::generation::write_generation;
use crate::signature::Signature;

/// Iteration budget used when the caller does not supply one.
pub const DEFAULT_MAX_ITERATIONS: NonZeroU32 = NonZeroU32::MIN.saturating_add(999);

/// Upper bound on signature slots reserved up front.
const MAX_PREALLOCATED: usize = 1024;

/// Result of [`find_terminal_state`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerminalState {
    /// The grid at the step where the search stopped.
    pub grid: Grid,
    /// How the search ended.
    pub status: TerminalStatus,
    /// Step index at which the search stopped.
    pub step: u32,
    /// Loop length for stable (1) and cyclic (> 1) outcomes; `None` when
    /// the budget ran out.
    pub period: Option<u32>,
}

/// Validate a raw iteration budget.
///
/// # Errors
///
/// Returns [`EngineError::InvalidBudget`] for zero.
pub fn budget(max_iterations: u32) -> Result<NonZeroU32, EngineError> {
    NonZeroU32::new(max_iterations).ok_or(EngineError::InvalidBudget)
}

/// Step `initial` until a previously seen state recurs, for at most
/// `max_iterations` steps.
pub fn find_terminal_state(initial: &Grid, max_iterations: NonZeroU32) -> TerminalState {
    let limit = max_iterations.get();
    let reserve = usize::try_from(limit)
        .unwrap_or(usize::MAX)
        .min(MAX_PREALLOCATED)
        .saturating_add(1);

    let mut current = initial.clone();
    let mut next = initial.clone();
    let mut seen: HashMap<Signature, u32> = HashMap::with_capacity(reserve);
    seen.insert(Signature::of(&current), 0);

    for step in 1..=limit {
        write_generation(&current, &mut next);
        mem::swap(&mut current, &mut next);

        match seen.entry(Signature::of(&current)) {
            Entry::Occupied(first_seen) => {
                let period = step.saturating_sub(*first_seen.get());
                let status = if period == 1 {
                    TerminalStatus::Stable
                } else {
                    TerminalStatus::Cycle
                };
                debug!(step, period, %status, "Terminal state found");
                return TerminalState {
                    grid: current,
                    status,
                    step,
                    period: Some(period),
                };
            }
            Entry::Vacant(slot) => {
                slot.insert(step);
            }
        }
    }

    debug!(max_iterations = limit, "No terminal state within budget");
    TerminalState {
        grid: current,
        status: TerminalStatus::MaxIterationsReached,
        step: limit,
        period: None,
    }
}
