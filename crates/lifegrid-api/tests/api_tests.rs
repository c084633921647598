//! Integration tests for the board API endpoints.
//!
//! Tests use Axum's `Router` directly via `tower::ServiceExt` without
//! starting a TCP server. This validates handler logic and routing
//! without needing a live network connection.

#![allow(clippy::unwrap_used)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use lifegrid_api::router::build_router;
use lifegrid_api::state::AppState;
use lifegrid_core::SimulationConfig;
use serde_json::{Value, json};
use tower::ServiceExt;

const BLINKER: &str = "[[false,false,false],[true,true,true],[false,false,false]]";
const BLOCK: &str = "[[true,true,false],[true,true,false],[false,false,false]]";

fn make_state() -> Arc<AppState> {
    Arc::new(AppState::default())
}

async fn body_to_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn get(state: &Arc<AppState>, uri: &str) -> (StatusCode, Value) {
    let app = build_router(Arc::clone(state));
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    (status, body_to_json(response.into_body()).await)
}

async fn post_raw(state: &Arc<AppState>, body: &str) -> axum::response::Response {
    let app = build_router(Arc::clone(state));
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri("/api/boards")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_owned()))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Create a board from a JSON grid literal and return its id.
async fn create(state: &Arc<AppState>, grid: &str) -> String {
    let response = post_raw(state, &format!(r#"{{"board_state":{grid}}}"#)).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_to_json(response.into_body()).await;
    json["id"].as_str().unwrap().to_owned()
}

// ---------------------------------------------------------------------------
// Health
// ---------------------------------------------------------------------------

#[tokio::test]
async fn health_returns_ok() {
    let state = make_state();
    let (status, json) = get(&state, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "ok");
}

// ---------------------------------------------------------------------------
// POST /api/boards
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_board_returns_created_with_location() {
    let state = make_state();
    let response = post_raw(&state, &format!(r#"{{"board_state":{BLINKER}}}"#)).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let location = response
        .headers()
        .get(header::LOCATION)
        .unwrap()
        .to_str()
        .unwrap()
        .to_owned();
    let json = body_to_json(response.into_body()).await;
    let id = json["id"].as_str().unwrap();
    assert_eq!(location, format!("/api/boards/{id}"));
}

#[tokio::test]
async fn create_board_rejects_invalid_grids() {
    let state = make_state();
    for body in [
        r#"{"board_state":[]}"#,
        r#"{"board_state":[[],[]]}"#,
        r#"{"board_state":[[true,false],[true]]}"#,
        r#"{"board_state":null}"#,
        r"{}",
        r"null",
        r"not json",
    ] {
        let response = post_raw(&state, body).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "body: {body}");
        let json = body_to_json(response.into_body()).await;
        assert_eq!(json["status"], 400);
    }

    let (_, listed) = get(&state, "/api/boards").await;
    assert!(listed.as_array().unwrap().is_empty());
}

// ---------------------------------------------------------------------------
// GET /api/boards, GET /api/boards/{id}
// ---------------------------------------------------------------------------

#[tokio::test]
async fn list_boards_returns_every_board() {
    let state = make_state();
    let a = create(&state, BLINKER).await;
    let b = create(&state, BLOCK).await;

    let (status, json) = get(&state, "/api/boards").await;
    assert_eq!(status, StatusCode::OK);
    let ids: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|board| board["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids.len(), 2);
    assert!(ids.contains(&a.as_str()));
    assert!(ids.contains(&b.as_str()));
}

#[tokio::test]
async fn get_board_returns_stored_state() {
    let state = make_state();
    let id = create(&state, BLINKER).await;

    let (status, json) = get(&state, &format!("/api/boards/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["id"], id.as_str());
    assert_eq!(json["board_state"], serde_json::from_str::<Value>(BLINKER).unwrap());
    assert!(json["created_at"].is_string());
}

#[tokio::test]
async fn get_board_unknown_id_is_404() {
    let state = make_state();
    let (status, json) = get(
        &state,
        "/api/boards/00000000-0000-0000-0000-000000000000",
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["status"], 404);
}

#[tokio::test]
async fn get_board_invalid_uuid_is_400() {
    let state = make_state();
    for uri in [
        "/api/boards/not-a-uuid",
        "/api/boards/not-a-uuid/next",
        "/api/boards/not-a-uuid/future/1",
        "/api/boards/not-a-uuid/final",
    ] {
        let (status, _) = get(&state, uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "uri: {uri}");
    }
}

// ---------------------------------------------------------------------------
// GET /api/boards/{id}/next, GET /api/boards/{id}/future/{n}
// ---------------------------------------------------------------------------

#[tokio::test]
async fn next_state_flips_blinker() {
    let state = make_state();
    let id = create(&state, BLINKER).await;

    let (status, json) = get(&state, &format!("/api/boards/{id}/next")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["id"], id.as_str());
    assert_eq!(
        json["board_state"],
        json!([[false, true, false], [false, true, false], [false, true, false]])
    );

    let (_, stored) = get(&state, &format!("/api/boards/{id}")).await;
    assert_eq!(stored["board_state"], serde_json::from_str::<Value>(BLINKER).unwrap());
}

#[tokio::test]
async fn future_state_two_steps_returns_blinker_phase() {
    let state = make_state();
    let id = create(&state, BLINKER).await;

    let (status, json) = get(&state, &format!("/api/boards/{id}/future/2")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["board_state"], serde_json::from_str::<Value>(BLINKER).unwrap());

    let (status, json) = get(&state, &format!("/api/boards/{id}/future/0")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["board_state"], serde_json::from_str::<Value>(BLINKER).unwrap());
}

#[tokio::test]
async fn future_state_rejects_bad_step_counts() {
    let state = Arc::new(AppState::new(SimulationConfig {
        max_steps: 5,
        ..SimulationConfig::default()
    }));
    let id = create(&state, BLINKER).await;

    for n in ["abc", "-1", "6"] {
        let (status, json) = get(&state, &format!("/api/boards/{id}/future/{n}")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "n: {n}");
        assert_eq!(json["status"], 400);
    }
}

#[tokio::test]
async fn simulation_endpoints_unknown_id_are_404() {
    let state = make_state();
    let missing = "00000000-0000-0000-0000-000000000000";
    for suffix in ["next", "future/3", "final"] {
        let (status, _) = get(&state, &format!("/api/boards/{missing}/{suffix}")).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "suffix: {suffix}");
    }
}

// ---------------------------------------------------------------------------
// GET /api/boards/{id}/final
// ---------------------------------------------------------------------------

#[tokio::test]
async fn final_state_block_is_stable() {
    let state = make_state();
    let id = create(&state, BLOCK).await;

    let (status, json) = get(&state, &format!("/api/boards/{id}/final")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "stable");
    assert_eq!(json["step"], 1);
    assert_eq!(json["period"], 1);
    assert_eq!(json["max_iterations"], 1000);
    assert_eq!(json["board"]["id"], id.as_str());
    assert_eq!(
        json["board"]["board_state"],
        serde_json::from_str::<Value>(BLOCK).unwrap()
    );
}

#[tokio::test]
async fn final_state_blinker_is_cycle() {
    let state = make_state();
    let id = create(&state, BLINKER).await;

    let (status, json) = get(&state, &format!("/api/boards/{id}/final?max_iterations=10")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "cycle");
    assert_eq!(json["step"], 2);
    assert_eq!(json["period"], 2);
    assert_eq!(json["max_iterations"], 10);
}

#[tokio::test]
async fn final_state_exhausted_budget_is_422() {
    let state = make_state();
    let id = create(&state, BLINKER).await;

    let (status, json) = get(&state, &format!("/api/boards/{id}/final?max_iterations=1")).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json["status"], 422);
    assert_eq!(json["title"], "Unprocessable Entity");
    assert_eq!(
        json["detail"],
        "The board could not reach a final stable state within 1 iterations."
    );
}

#[tokio::test]
async fn final_state_rejects_out_of_range_budget() {
    let state = make_state();
    let id = create(&state, BLOCK).await;

    for query in [
        "max_iterations=0",
        "max_iterations=100001",
        "max_iterations=abc",
        "max_iterations=-3",
    ] {
        let (status, json) = get(&state, &format!("/api/boards/{id}/final?{query}")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "query: {query}");
        assert_eq!(json["status"], 400, "query: {query}");
        assert!(json["error"].is_string(), "query: {query}");
    }
}
