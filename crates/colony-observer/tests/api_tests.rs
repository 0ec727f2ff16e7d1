//! Integration tests for the Observer API endpoints.
//!
//! Tests use Axum's `Router` directly via `tower::ServiceExt` without
//! starting a TCP server. This validates handler logic and routing
//! without needing a live network connection.

#![allow(clippy::unwrap_used, clippy::float_cmp)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::response::Response;
use chrono::TimeDelta;
use colony_core::config::GeometryConfig;
use colony_core::{ManualClock, SimulationParameters, WorldState};
use colony_observer::router::build_router;
use colony_observer::state::AppState;
use colony_types::WorldSnapshot;
use serde_json::Value;
use tower::ServiceExt;

fn make_test_state() -> (Arc<AppState>, ManualClock) {
    let clock = ManualClock::default();
    let world = WorldState::new(
        SimulationParameters::default(),
        GeometryConfig::default(),
        42,
        Arc::new(clock.clone()),
    )
    .unwrap();
    (Arc::new(AppState::new(world)), clock)
}

async fn send(state: &Arc<AppState>, request: Request<Body>) -> Response {
    build_router(Arc::clone(state)).oneshot(request).await.unwrap()
}

async fn get(state: &Arc<AppState>, path: &str) -> Response {
    send(state, Request::get(path).body(Body::empty()).unwrap()).await
}

async fn post(state: &Arc<AppState>, path: &str, body: &str) -> Response {
    let request = Request::post(path)
        .header("content-type", "application/json")
        .body(Body::from(body.to_owned()))
        .unwrap();
    send(state, request).await
}

async fn body_to_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

// =========================================================================
// Tests
// =========================================================================

#[tokio::test]
async fn test_index_returns_html() {
    let (state, _clock) = make_test_state();

    let response = get(&state, "/").await;

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response
        .headers()
        .get("content-type")
        .unwrap()
        .to_str()
        .unwrap();
    assert!(content_type.contains("text/html"));
    // Viewing the status page does not tick the world.
    assert_eq!(state.world.lock().await.tick(), 0);
}

#[tokio::test]
async fn test_get_state_advances_one_tick() {
    let (state, clock) = make_test_state();
    clock.advance(TimeDelta::milliseconds(250));

    let response = get(&state, "/api/simulation/state").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["tick"], 1);
    assert_eq!(json["scouts"].as_array().unwrap().len(), 3);
    assert_eq!(json["foragers"].as_array().unwrap().len(), 7);
    assert_eq!(json["deposits"].as_array().unwrap().len(), 8);
    assert_eq!(json["all_depleted"], false);

    let response = get(&state, "/api/simulation/state").await;
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["tick"], 2);
}

#[tokio::test]
async fn test_state_body_is_a_snapshot() {
    let (state, _clock) = make_test_state();

    let response = get(&state, "/api/simulation/state").await;
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let snapshot: WorldSnapshot = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(snapshot.tick, 1);
    assert_eq!(snapshot.hive.papers_analysed, 0.0);
}

#[tokio::test]
async fn test_reset_with_params() {
    let (state, _clock) = make_test_state();
    let body = r#"{"scout_count": 2, "forager_count": 4, "papers_found": 3,
        "scout_speed": 5, "forager_speed": 3, "field_richness": 50,
        "paper_analysis_rate": 2, "width": 600, "height": 400}"#;

    let response = post(&state, "/api/simulation/reset", body).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["status"], "success");

    let world = state.world.lock().await;
    assert_eq!(world.scouts().len(), 2);
    assert_eq!(world.foragers().len(), 4);
    assert_eq!(world.field().len(), 3);
    assert_eq!(world.params().harvest_rate, 2.0);
    assert_eq!(world.tick(), 0);
}

#[tokio::test]
async fn test_reset_with_empty_body_uses_defaults() {
    let (state, _clock) = make_test_state();
    post(&state, "/api/simulation/reset", r#"{"scout_count": 1}"#).await;

    let response = post(&state, "/api/simulation/reset", "").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(state.world.lock().await.scouts().len(), 3);
}

#[tokio::test]
async fn test_reset_rejects_invalid_params() {
    let (state, _clock) = make_test_state();

    let response = post(&state, "/api/simulation/reset", r#"{"scout_speed": -1}"#).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["status"], 400);
    assert!(json["error"].as_str().unwrap().contains("scout_speed"));
}

#[tokio::test]
async fn test_reset_rejects_malformed_body() {
    let (state, _clock) = make_test_state();

    let response = post(&state, "/api/simulation/reset", "{scouts").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_param() {
    let (state, _clock) = make_test_state();

    let response = post(&state, "/api/simulation/update_params/scout_speed/6.5", "").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["status"], "success");
    assert_eq!(json["param"], "scout_speed");
    assert_eq!(json["value"], 6.5);
    assert_eq!(state.world.lock().await.params().scout_speed, 6.5);
}

#[tokio::test]
async fn test_update_param_accepts_integer_value() {
    let (state, _clock) = make_test_state();

    let response = post(&state, "/api/simulation/update_params/scout_count/5", "").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(state.world.lock().await.params().scout_count, 5);
}

#[tokio::test]
async fn test_update_unknown_param_not_found() {
    let (state, _clock) = make_test_state();

    let response = post(&state, "/api/simulation/update_params/wingspan/3", "").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["status"], 404);
}

#[tokio::test]
async fn test_update_param_rejects_negative_speed() {
    let (state, _clock) = make_test_state();

    let response = post(&state, "/api/simulation/update_params/scout_speed/-1", "").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(state.world.lock().await.params().scout_speed, 4.0);
}

#[tokio::test]
async fn test_get_params() {
    let (state, _clock) = make_test_state();
    post(&state, "/api/simulation/update_params/field_richness/250", "").await;

    let response = get(&state, "/api/simulation/params").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["scout_count"], 3);
    assert_eq!(json["papers_found"], 8);
    assert_eq!(json["paper_analysis_rate"], 1.0);
    assert_eq!(json["field_richness"], 250.0);
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let (state, _clock) = make_test_state();

    let response = get(&state, "/api/nowhere").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
