//! HTTP endpoint handlers

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::Json};
use tracing::{error, info};

use super::responses::{ApiResponse, HealthResponse, StatusResponse, TimerResponse};
use crate::state::AppState;

/// Handle POST /timer/start - Start the countdown
pub async fn start_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse>, StatusCode> {
    match state.start() {
        Ok((session, outcome)) => {
            info!("Start endpoint called: {:?}", outcome);
            Ok(Json(ApiResponse::from_outcome(outcome, &session)))
        }
        Err(e) => {
            error!("Failed to start countdown: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Handle POST /timer/pause - Pause toggle
pub async fn pause_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse>, StatusCode> {
    match state.pause() {
        Ok((session, outcome)) => {
            info!("Pause endpoint called: {:?}", outcome);
            Ok(Json(ApiResponse::from_outcome(outcome, &session)))
        }
        Err(e) => {
            error!("Failed to toggle countdown: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Handle POST /timer/reset - Reset to the full duration
pub async fn reset_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse>, StatusCode> {
    match state.reset() {
        Ok((session, outcome)) => {
            info!("Reset endpoint called");
            Ok(Json(ApiResponse::from_outcome(outcome, &session)))
        }
        Err(e) => {
            error!("Failed to reset countdown: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Handle GET /timer - Current countdown state
pub async fn timer_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<TimerResponse>, StatusCode> {
    let session = match state.get_session() {
        Ok(s) => s,
        Err(e) => {
            error!("Failed to get session: {}", e);
            return Err(StatusCode::INTERNAL_SERVER_ERROR);
        }
    };

    let notice = match state.current_notice() {
        Ok(n) => n.map(|n| n.to_string()),
        Err(e) => {
            error!("Failed to get completion notice: {}", e);
            return Err(StatusCode::INTERNAL_SERVER_ERROR);
        }
    };

    Ok(Json(TimerResponse {
        session: (&session).into(),
        title: state.locale.timer_title().to_string(),
        notice,
        last_completed: state.get_last_completed(),
    }))
}

/// Handle GET /status - Return server status and timer summary
pub async fn status_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<StatusResponse>, StatusCode> {
    let session = match state.get_session() {
        Ok(s) => s,
        Err(e) => {
            error!("Failed to get session: {}", e);
            return Err(StatusCode::INTERNAL_SERVER_ERROR);
        }
    };

    Ok(Json(StatusResponse {
        timer: (&session).into(),
        locale: state.locale,
        uptime: state.get_uptime(),
        port: state.port,
        host: state.host.clone(),
        last_completed: state.get_last_completed(),
    }))
}

/// Handle GET /health - Health check endpoint
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
