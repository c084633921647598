//! HTTP API server for the Lifegrid simulation.
//!
//! This crate exposes stored boards and their simulation over a small
//! REST surface built on Axum:
//!
//! - **Board management** (`POST /api/boards`, `GET /api/boards`,
//!   `GET /api/boards/{id}`)
//! - **Simulation** (`/next`, `/future/{n}`, `/final`) computed on demand
//!   from the stored state and never written back
//!
//! # Architecture
//!
//! Handlers are thin: they parse the request, call into
//! [`lifegrid_core::BoardService`], and map [`error::ApiError`] into a
//! JSON error response. Simulation work runs on Tokio's blocking pool.

pub mod error;
pub mod handlers;
pub mod router;
pub mod server;
pub mod state;

// Re-export primary types for convenience.
pub use error::ApiError;
pub use router::build_router;
pub use server::{ServerError, start_server};
pub use state::AppState;
