//! HTTP API integration tests
//!
//! Drives the router directly with tower's `oneshot` instead of binding a
//! socket.

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use focus_timer::services::CompletionSound;
use focus_timer::state::AppState;
use focus_timer::tasks::TickSource;
use focus_timer::{create_router, Locale};

fn test_router(work_seconds: u64) -> Router {
    let (tick_source, _tick_rx) = TickSource::spawn().expect("spawn tick source");
    let sound = CompletionSound::new("true".to_string(), "/dev/null".to_string());
    let state = Arc::new(AppState::new(
        0,
        "127.0.0.1".to_string(),
        work_seconds,
        Locale::En,
        tick_source,
        sound,
    ));
    create_router(state)
}

async fn request(router: &Router, method: &str, uri: &str) -> (StatusCode, Value) {
    let response = router
        .clone()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .expect("build request"),
        )
        .await
        .expect("send request");

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    let body = serde_json::from_slice(&bytes).expect("parse json body");
    (status, body)
}

#[tokio::test]
async fn health_reports_ok() {
    let router = test_router(1500);
    let (status, body) = request(&router, "GET", "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn fresh_timer_shows_full_duration() {
    let router = test_router(1500);
    let (status, body) = request(&router, "GET", "/timer").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["phase"], "idle");
    assert_eq!(body["running"], false);
    assert_eq!(body["remaining_seconds"], 1500);
    assert_eq!(body["display"], "25:00");
    assert_eq!(body["progress"], 0.0);
    assert_eq!(body["title"], "POMODORO");
    assert_eq!(body["notice"], Value::Null);
}

#[tokio::test]
async fn start_then_redundant_start() {
    let router = test_router(1500);

    let (status, body) = request(&router, "POST", "/timer/start").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "started");
    assert_eq!(body["session"]["running"], true);

    let (status, body) = request(&router, "POST", "/timer/start").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "noop");
    assert_eq!(body["session"]["running"], true);
}

#[tokio::test]
async fn pause_toggles() {
    let router = test_router(1500);

    request(&router, "POST", "/timer/start").await;

    let (_, body) = request(&router, "POST", "/timer/pause").await;
    assert_eq!(body["status"], "paused");
    assert_eq!(body["session"]["phase"], "paused");

    let (_, body) = request(&router, "POST", "/timer/pause").await;
    assert_eq!(body["status"], "started");
    assert_eq!(body["session"]["running"], true);
    assert_eq!(body["session"]["remaining_seconds"], 1500);
}

#[tokio::test]
async fn reset_restores_full_duration() {
    let router = test_router(1500);

    request(&router, "POST", "/timer/start").await;
    let (_, body) = request(&router, "POST", "/timer/reset").await;

    assert_eq!(body["status"], "reset");
    assert_eq!(body["session"]["phase"], "idle");
    assert_eq!(body["session"]["display"], "25:00");
}

#[tokio::test]
async fn status_includes_server_metadata() {
    let router = test_router(1500);
    let (status, body) = request(&router, "GET", "/status").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["host"], "127.0.0.1");
    assert_eq!(body["locale"], "en");
    assert_eq!(body["timer"]["display"], "25:00");
    assert!(body["uptime"].is_string());
}
