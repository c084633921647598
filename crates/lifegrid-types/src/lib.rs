//! Shared type definitions for the Lifegrid simulation.
//!
//! This crate is the single source of truth for the data that flows
//! between the engine, the board service, and the HTTP API. Types
//! exposed over the API are exported to `TypeScript` via `ts-rs`.
//!
//! # Modules
//!
//! - [`grid`] -- The rectangular cell [`Grid`] and its shape errors
//! - [`ids`] -- Type-safe UUID wrappers for board identifiers
//! - [`board`] -- [`Board`] records and [`TerminalStatus`] outcomes

pub mod board;
pub mod grid;
pub mod ids;

// Re-export all public types at crate root for convenience.
pub use board::{Board, TerminalStatus};
pub use grid::{Grid, GridError};
pub use ids::BoardId;
