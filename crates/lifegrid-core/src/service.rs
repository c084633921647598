//! The board service: the seam between stored boards and the engine.
//!
//! Each operation fetches a board, hands its grid to the engine, and
//! returns the computed state as a new [`Board`] carrying the same
//! identifier. Computed states are never written back; a stored board
//! always keeps the state it was created with.
//!
//! Unknown identifiers are reported as `Ok(None)`. Running out of
//! iteration budget is reported as data
//! ([`TerminalStatus::MaxIterationsReached`]), not as an error.

use lifegrid_engine::TerminalState;
use lifegrid_types::{Board, BoardId, Grid, TerminalStatus};
use serde::Serialize;
use tracing::{error, info};

use crate::config::SimulationConfig;
use crate::error::ServiceError;
use crate::store::{BoardRecord, BoardStore, InMemoryBoardStore};

/// Outcome of a terminal-state request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TerminalBoard {
    /// The board carrying the grid at the point the search stopped.
    pub board: Board,
    /// How the search ended.
    pub status: TerminalStatus,
    /// Step index at which the search stopped.
    pub step: u32,
    /// Loop length for stable and cyclic outcomes.
    pub period: Option<u32>,
    /// Iteration budget the search ran with.
    pub max_iterations: u32,
}

/// Creates, fetches, and simulates boards held in a [`BoardStore`].
#[derive(Debug)]
pub struct BoardService<S = InMemoryBoardStore> {
    store: S,
    settings: SimulationConfig,
}

impl BoardService<InMemoryBoardStore> {
    /// A service backed by a fresh in-memory store.
    pub fn in_memory(settings: SimulationConfig) -> Self {
        Self::new(InMemoryBoardStore::new(), settings)
    }
}

impl<S: BoardStore> BoardService<S> {
    /// Create a service over `store` with the given limits.
    pub const fn new(store: S, settings: SimulationConfig) -> Self {
        Self { store, settings }
    }

    /// The limits this service enforces.
    pub const fn settings(&self) -> &SimulationConfig {
        &self.settings
    }

    /// The underlying store.
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Store `grid` as a new board with a fresh identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Store`] if the board cannot be stored.
    pub fn create(&self, grid: Grid) -> Result<Board, ServiceError> {
        let board = Board::new(grid);
        let record = BoardRecord::from_board(&board)?;
        self.store.insert(record).inspect_err(|e| {
            error!(board_id = %board.id, error = %e, "Error creating board");
        })?;
        info!(
            board_id = %board.id,
            rows = board.board_state.rows(),
            cols = board.board_state.cols(),
            "Board created"
        );
        Ok(board)
    }

    /// All stored boards, in identifier order.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Store`] if the store fails or holds a
    /// record that no longer decodes.
    pub fn list(&self) -> Result<Vec<Board>, ServiceError> {
        self.store
            .list()?
            .iter()
            .map(|record| record.to_board().map_err(ServiceError::from))
            .collect()
    }

    /// The stored board, or `None` if the identifier is unknown.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Store`] if the store fails.
    pub fn fetch(&self, id: BoardId) -> Result<Option<Board>, ServiceError> {
        let Some(record) = self.store.get(id)? else {
            return Ok(None);
        };
        Ok(Some(record.to_board()?))
    }

    /// The board one generation ahead.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Store`] if the store fails.
    pub fn next_state(&self, id: BoardId) -> Result<Option<Board>, ServiceError> {
        self.advance(id, 1)
    }

    /// The board `steps` generations ahead.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::StepsOutOfRange`] if `steps` exceeds
    /// the configured `max_steps`, or [`ServiceError::Store`] if the
    /// store fails.
    pub fn advance(&self, id: BoardId, steps: u64) -> Result<Option<Board>, ServiceError> {
        let max = self.settings.max_steps;
        if steps > max {
            return Err(ServiceError::StepsOutOfRange {
                requested: steps,
                max,
            });
        }

        let Some(board) = self.fetch(id)? else {
            return Ok(None);
        };
        let advanced = lifegrid_engine::advance(&board.board_state, steps);
        info!(board_id = %id, steps, "Board advanced");
        Ok(Some(board.with_state(advanced)))
    }

    /// Run the board until it repeats a state or the iteration budget is
    /// spent. `None` uses the configured default budget.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::IterationsOutOfRange`] for a zero budget or
    /// one above `max_iterations_limit`, or [`ServiceError::Store`] if the
    /// store fails.
    pub fn terminal(
        &self,
        id: BoardId,
        max_iterations: Option<u32>,
    ) -> Result<Option<TerminalBoard>, ServiceError> {
        let requested = max_iterations.unwrap_or(self.settings.default_max_iterations);
        let limit = self.settings.max_iterations_limit;
        if requested == 0 || requested > limit {
            return Err(ServiceError::IterationsOutOfRange {
                requested,
                max: limit,
            });
        }
        let budget = lifegrid_engine::budget(requested)?;

        let Some(board) = self.fetch(id)? else {
            return Ok(None);
        };
        let TerminalState {
            grid,
            status,
            step,
            period,
        } = lifegrid_engine::find_terminal_state(&board.board_state, budget);
        info!(
            board_id = %id,
            %status,
            step,
            max_iterations = requested,
            "Board terminal state computed"
        );

        Ok(Some(TerminalBoard {
            board: board.with_state(grid),
            status,
            step,
            period,
            max_iterations: requested,
        }))
    }
}
