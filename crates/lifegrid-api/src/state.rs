//! Shared application state for the API server.

use std::sync::Arc;

use lifegrid_core::{BoardService, SimulationConfig};

/// Shared state for the Axum application.
///
/// Wrapped in [`Arc`] and injected via Axum's `State` extractor. The
/// service is itself behind an [`Arc`] so handlers can move it onto a
/// blocking task for long simulations.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The board service backing every endpoint.
    pub service: Arc<BoardService>,
}

impl AppState {
    /// Create application state over a fresh in-memory board store.
    pub fn new(settings: SimulationConfig) -> Self {
        Self::with_service(BoardService::in_memory(settings))
    }

    /// Create application state around an existing service.
    pub fn with_service(service: BoardService) -> Self {
        Self {
            service: Arc::new(service),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(SimulationConfig::default())
    }
}
