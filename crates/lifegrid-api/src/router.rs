//! Axum router construction for the Lifegrid API.
//!
//! Assembles all routes into a single [`Router`] with CORS and request
//! tracing middleware enabled.

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router for the Lifegrid server.
///
/// The router includes:
/// - `GET /health` -- liveness probe
/// - `POST /api/boards` -- create a board
/// - `GET /api/boards` -- list boards
/// - `GET /api/boards/{id}` -- single board
/// - `GET /api/boards/{id}/next` -- next generation
/// - `GET /api/boards/{id}/future/{n}` -- `n` generations ahead
/// - `GET /api/boards/{id}/final` -- stable or cyclic state
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(handlers::health))
        .route(
            "/api/boards",
            get(handlers::list_boards).post(handlers::create_board),
        )
        .route("/api/boards/{id}", get(handlers::get_board))
        .route("/api/boards/{id}/next", get(handlers::next_state))
        .route("/api/boards/{id}/future/{n}", get(handlers::future_state))
        .route("/api/boards/{id}/final", get(handlers::final_state))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
