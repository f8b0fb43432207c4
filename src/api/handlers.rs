//! HTTP endpoint handlers

use std::sync::Arc;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use tracing::{error, info, warn};

use crate::state::{AppState, HardnessOption};
use super::responses::{ApiResponse, ErrorResponse, HealthResponse, StatusResponse};

/// Handle POST /select/:hardness - Start a countdown for the given hardness
pub async fn select_handler(
    State(state): State<Arc<AppState>>,
    Path(hardness): Path<String>,
) -> Response {
    let option = match hardness.parse::<HardnessOption>() {
        Ok(option) => option,
        Err(e) => {
            warn!("Rejected selection: {}", e);
            return (StatusCode::BAD_REQUEST, Json(ErrorResponse::new(e.to_string()))).into_response();
        }
    };

    match state.select(option) {
        Ok(timer) => {
            info!("Select endpoint called - {} countdown started", option);
            Json(ApiResponse::running(
                format!("{} eggs started, {}s to go", option, timer.total_seconds),
                timer,
            ))
            .into_response()
        }
        Err(e) => {
            error!("Failed to select {}: {}", option, e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// Handle POST /cancel - Stop the running countdown
pub async fn cancel_handler(State(state): State<Arc<AppState>>) -> Result<Json<ApiResponse>, StatusCode> {
    match state.cancel() {
        Ok(timer) => {
            info!("Cancel endpoint called - countdown stopped");
            Ok(Json(ApiResponse::stopped("Countdown stopped".to_string(), timer)))
        }
        Err(e) => {
            error!("Failed to cancel countdown: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Handle GET /status - Return current countdown status
pub async fn status_handler(State(state): State<Arc<AppState>>) -> Result<Json<StatusResponse>, StatusCode> {
    // Latest published snapshot; never waits on a tick in progress
    let timer = state.watch_timer().borrow().clone();
    let (last_action, last_action_time) = state.get_last_action();

    Ok(Json(StatusResponse {
        phase: timer.phase(),
        label: timer.label().to_string(),
        progress: timer.progress(),
        remaining_seconds: timer.remaining_seconds(),
        timer,
        uptime: state.get_uptime(),
        port: state.port,
        host: state.host.clone(),
        last_action,
        last_action_time,
    }))
}

/// Handle GET /health - Health check endpoint
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
