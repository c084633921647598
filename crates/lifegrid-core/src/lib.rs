//! Board storage, board service, and configuration for Lifegrid.
//!
//! This crate sits between the HTTP layer and the engine. It assigns
//! identifiers, keeps grids in storage form, and calls into
//! [`lifegrid_engine`] with the grids it retrieves.
//!
//! # Modules
//!
//! - [`config`] -- Configuration loading from `lifegrid-config.yaml` into
//!   strongly-typed structs.
//! - [`error`] -- Store and service error types.
//! - [`service`] -- [`BoardService`]: create, list, fetch, advance, and
//!   terminal-state operations.
//! - [`store`] -- [`BoardStore`] trait, [`BoardRecord`] storage form, and
//!   the [`InMemoryBoardStore`] backend.

pub mod config;
pub mod error;
pub mod service;
pub mod store;

// Re-export primary types at crate root.
pub use config::{ConfigError, HttpConfig, LifegridConfig, LogFormat, LoggingConfig, SimulationConfig};
pub use error::{ServiceError, StoreError};
pub use service::{BoardService, TerminalBoard};
pub use store::{BoardRecord, BoardStore, InMemoryBoardStore};
