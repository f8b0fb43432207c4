//! HTTP API module
//!
//! This module contains all HTTP endpoint handlers and response structures.

pub mod handlers;
pub mod responses;

use std::sync::Arc;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::state::AppState;
use handlers::*;

/// Create the HTTP router with all endpoints
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/select/:hardness", post(select_handler))
        .route("/cancel", post(cancel_handler))
        .route("/status", get(status_handler))
        .route("/health", get(health_handler))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use serde_json::Value;
    use tower::ServiceExt;

    use super::*;

    async fn call(router: Router, method: &str, uri: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        let response = router.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn new_state() -> Arc<AppState> {
        Arc::new(AppState::new(20554, "127.0.0.1".to_string()))
    }

    #[tokio::test]
    async fn status_starts_idle() {
        let router = create_router(new_state());
        let (status, body) = call(router, "GET", "/status").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["phase"], "idle");
        assert_eq!(body["label"], "How do you like your eggs?");
        assert_eq!(body["progress"], 0.0);
        assert_eq!(body["timer"]["selected"], Value::Null);
    }

    #[tokio::test]
    async fn select_starts_countdown() {
        let state = new_state();
        let (status, body) = call(create_router(Arc::clone(&state)), "POST", "/select/medium").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "running");
        assert_eq!(body["label"], "MEDIUM");
        assert_eq!(body["timer"]["total_seconds"], 420);
        assert_eq!(body["timer"]["elapsed_seconds"], 0);

        let (_, body) = call(create_router(Arc::clone(&state)), "GET", "/status").await;
        assert_eq!(body["phase"], "running");
        assert_eq!(body["last_action"], "select-medium");

        state.cancel().unwrap();
    }

    #[tokio::test]
    async fn unknown_hardness_is_rejected() {
        let state = new_state();
        let (status, body) = call(create_router(Arc::clone(&state)), "POST", "/select/runny").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["status"], "error");
        assert!(!state.get_timer_state().unwrap().running);
    }

    #[tokio::test]
    async fn cancel_stops_countdown() {
        let state = new_state();
        call(create_router(Arc::clone(&state)), "POST", "/select/hard").await;
        let (status, body) = call(create_router(Arc::clone(&state)), "POST", "/cancel").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "stopped");
        assert_eq!(body["timer"]["running"], false);
        assert_eq!(body["label"], "HARD");

        let (_, body) = call(create_router(Arc::clone(&state)), "GET", "/status").await;
        assert_eq!(body["phase"], "stopped");
        assert_eq!(body["label"], "HARD");
        assert_eq!(body["timer"]["selected"], "HARD");
    }

    #[tokio::test(start_paused = true)]
    async fn status_follows_published_ticks() {
        let state = new_state();
        call(create_router(Arc::clone(&state)), "POST", "/select/soft").await;
        tokio::time::sleep(std::time::Duration::from_millis(3_500)).await;

        let (_, body) = call(create_router(Arc::clone(&state)), "GET", "/status").await;
        let timer = state.get_timer_state().unwrap();
        assert_eq!(timer.elapsed_seconds, 3);
        assert_eq!(body["timer"]["elapsed_seconds"], 3);
        assert_eq!(body["remaining_seconds"], 297);
        assert_eq!(body["progress"], timer.progress());

        state.cancel().unwrap();
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let (status, body) = call(create_router(new_state()), "GET", "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }
}
