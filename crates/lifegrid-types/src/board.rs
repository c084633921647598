//! Boards and terminal-state outcomes as seen by API consumers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::grid::Grid;
use crate::ids::BoardId;

/// A stored grid together with its identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Board {
    /// Identifier assigned when the board was created.
    pub id: BoardId,
    /// Cell state, as a list of rows.
    #[ts(type = "Array<Array<boolean>>")]
    pub board_state: Grid,
    /// When the board was created.
    pub created_at: DateTime<Utc>,
}

impl Board {
    /// Create a board with a fresh identifier, timestamped now.
    pub fn new(board_state: Grid) -> Self {
        Self {
            id: BoardId::new(),
            board_state,
            created_at: Utc::now(),
        }
    }

    /// The same board carrying a different cell state.
    #[must_use]
    pub fn with_state(&self, board_state: Grid) -> Self {
        Self {
            id: self.id,
            board_state,
            created_at: self.created_at,
        }
    }
}

/// How a terminal-state search ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum TerminalStatus {
    /// The grid reached a fixed point: one step leaves it unchanged.
    Stable,
    /// The grid returned to an earlier state after more than one step.
    Cycle,
    /// No repeated state was found within the iteration budget.
    MaxIterationsReached,
}

impl TerminalStatus {
    /// Wire name of the status.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Stable => "stable",
            Self::Cycle => "cycle",
            Self::MaxIterationsReached => "max_iterations_reached",
        }
    }

    /// Whether the search found a repeat (stable or cycle).
    pub const fn is_settled(self) -> bool {
        !matches!(self, Self::MaxIterationsReached)
    }
}

impl core::fmt::Display for TerminalStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
