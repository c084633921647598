//! Error types for the `lifegrid-core` crate.

use lifegrid_engine::EngineError;
use lifegrid_types::BoardId;

/// Errors raised by a [`BoardStore`](crate::store::BoardStore).
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A lock guarding the store was poisoned by a panicking writer.
    #[error("board store lock poisoned: {0}")]
    Poisoned(String),

    /// A stored grid could not be encoded or decoded.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A record with the same identifier already exists.
    #[error("duplicate board id: {0}")]
    Duplicate(BoardId),
}

/// Errors raised by the [`BoardService`](crate::service::BoardService).
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// The underlying store failed.
    #[error("store error: {source}")]
    Store {
        /// The underlying store error.
        #[from]
        source: StoreError,
    },

    /// The engine rejected its input.
    #[error("engine error: {source}")]
    Engine {
        /// The underlying engine error.
        #[from]
        source: EngineError,
    },

    /// The requested step count exceeds the configured maximum.
    #[error("cannot advance {requested} steps (maximum {max})")]
    StepsOutOfRange {
        /// Steps requested.
        requested: u64,
        /// Configured maximum.
        max: u64,
    },

    /// The requested iteration budget is zero or exceeds the configured
    /// maximum.
    #[error("iteration budget {requested} is outside 1..={max}")]
    IterationsOutOfRange {
        /// Budget requested.
        requested: u32,
        /// Configured maximum.
        max: u32,
    },
}

impl ServiceError {
    /// Whether the error was caused by the request rather than by the
    /// service itself.
    pub const fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::StepsOutOfRange { .. } | Self::IterationsOutOfRange { .. }
        )
    }
}
