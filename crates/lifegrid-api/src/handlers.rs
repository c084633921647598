//! REST API endpoint handlers.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/health` | Liveness probe |
//! | `POST` | `/api/boards` | Create a board |
//! | `GET` | `/api/boards` | List all boards |
//! | `GET` | `/api/boards/{id}` | Get a single board |
//! | `GET` | `/api/boards/{id}/next` | Board one generation ahead |
//! | `GET` | `/api/boards/{id}/future/{n}` | Board `n` generations ahead |
//! | `GET` | `/api/boards/{id}/final` | Board at its stable or cyclic state |
//!
//! Simulation endpoints run the engine on a blocking task so that long
//! runs do not stall the async runtime.

use std::sync::Arc;

use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use lifegrid_core::{BoardService, ServiceError};
use lifegrid_types::{BoardId, Grid};

use crate::error::ApiError;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Request body for `POST /api/boards`.
#[derive(Debug, serde::Deserialize)]
pub struct CreateBoardRequest {
    /// Initial cell state as a list of equally long rows.
    pub board_state: Option<Vec<Vec<bool>>>,
}

/// Query parameters for `GET /api/boards/{id}/final`.
#[derive(Debug, serde::Deserialize)]
pub struct FinalQuery {
    /// Iteration budget (defaults to the configured budget, 1000).
    pub max_iterations: Option<u32>,
}

// ---------------------------------------------------------------------------
// GET /health
// ---------------------------------------------------------------------------

/// Liveness probe.
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

// ---------------------------------------------------------------------------
// POST /api/boards
// ---------------------------------------------------------------------------

/// Create a board from the posted grid.
///
/// Responds `201 Created` with the new identifier and a `Location`
/// header. Missing, empty, zero-width, or ragged grids are rejected with
/// `400` before anything is stored.
pub async fn create_board(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CreateBoardRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(request) = payload?;
    let rows = request
        .board_state
        .ok_or_else(|| ApiError::BadRequest(String::from("board_state is required")))?;
    let grid = Grid::from_rows(rows)?;

    let board = state.service.create(grid)?;
    let location = format!("/api/boards/{}", board.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(serde_json::json!({ "id": board.id })),
    ))
}

// ---------------------------------------------------------------------------
// GET /api/boards
// ---------------------------------------------------------------------------

/// List every stored board.
pub async fn list_boards(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ApiError> {
    let boards = state.service.list()?;
    Ok(Json(boards))
}

// ---------------------------------------------------------------------------
// GET /api/boards/{id}
// ---------------------------------------------------------------------------

/// Return a single stored board.
pub async fn get_board(
    State(state): State<Arc<AppState>>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_board_id(&id_str)?;
    let board = state.service.fetch(id)?.ok_or_else(|| not_found(id))?;
    Ok(Json(board))
}

// ---------------------------------------------------------------------------
// GET /api/boards/{id}/next
// ---------------------------------------------------------------------------

/// Return the board one generation ahead of its stored state.
pub async fn next_state(
    State(state): State<Arc<AppState>>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_board_id(&id_str)?;
    let board = run_blocking(&state, move |service| service.next_state(id))
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(board))
}

// ---------------------------------------------------------------------------
// GET /api/boards/{id}/future/{n}
// ---------------------------------------------------------------------------

/// Return the board `n` generations ahead of its stored state.
pub async fn future_state(
    State(state): State<Arc<AppState>>,
    Path((id_str, steps_str)): Path<(String, String)>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_board_id(&id_str)?;
    let steps: u64 = steps_str.parse().map_err(|e| {
        ApiError::BadRequest(format!("step count must be a non-negative integer: {steps_str}: {e}"))
    })?;
    let board = run_blocking(&state, move |service| service.advance(id, steps))
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(board))
}

// ---------------------------------------------------------------------------
// GET /api/boards/{id}/final
// ---------------------------------------------------------------------------

/// Run the board until it repeats a state.
///
/// Responds `200` with the board, status (`stable` or `cycle`), detection
/// step, and period. When no repeat occurs within the budget the response
/// is `422 Unprocessable Entity`.
///
/// # Query Parameters
///
/// - `max_iterations`: iteration budget (default 1000).
pub async fn final_state(
    State(state): State<Arc<AppState>>,
    Path(id_str): Path<String>,
    query: Result<Query<FinalQuery>, QueryRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_board_id(&id_str)?;
    let Query(params) = query?;
    let max_iterations = params.max_iterations;
    let result = run_blocking(&state, move |service| service.terminal(id, max_iterations))
        .await?
        .ok_or_else(|| not_found(id))?;

    if !result.status.is_settled() {
        return Err(ApiError::Unstable {
            max_iterations: result.max_iterations,
        });
    }
    Ok(Json(result))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Run a service call on the blocking thread pool.
async fn run_blocking<T, F>(state: &AppState, call: F) -> Result<T, ApiError>
where
    T: Send + 'static,
    F: FnOnce(&BoardService) -> Result<T, ServiceError> + Send + 'static,
{
    let service = Arc::clone(&state.service);
    let outcome = tokio::task::spawn_blocking(move || call(&service))
        .await
        .map_err(|e| ApiError::Internal(format!("simulation task failed: {e}")))?;
    Ok(outcome?)
}

/// Parse a board identifier, returning an [`ApiError`] on failure.
fn parse_board_id(s: &str) -> Result<BoardId, ApiError> {
    s.parse::<BoardId>()
        .map_err(|e| ApiError::InvalidUuid(format!("{s}: {e}")))
}

fn not_found(id: BoardId) -> ApiError {
    ApiError::NotFound(format!("board {id}"))
}
