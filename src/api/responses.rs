//! API response structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::locale::Locale;
use crate::state::{ControlOutcome, CountdownSession, Phase};

/// Client-facing view of the countdown session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionView {
    pub phase: Phase,
    pub running: bool,
    pub total_seconds: u64,
    pub remaining_seconds: u64,
    /// Remaining time as zero-padded `MM:SS`
    pub display: String,
    /// Elapsed fraction in `[0.0, 1.0]` for the circular progress ring
    pub progress: f64,
}

impl From<&CountdownSession> for SessionView {
    fn from(session: &CountdownSession) -> Self {
        Self {
            phase: session.phase,
            running: session.is_running(),
            total_seconds: session.total_seconds,
            remaining_seconds: session.remaining_seconds,
            display: session.display(),
            progress: session.progress(),
        }
    }
}

/// API response structure for control endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse {
    pub status: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub session: SessionView,
}

impl ApiResponse {
    /// Create a response describing what a control request did
    pub fn from_outcome(outcome: ControlOutcome, session: &CountdownSession) -> Self {
        let (status, message) = match outcome {
            ControlOutcome::Started => ("started", "Countdown started"),
            ControlOutcome::Paused => ("paused", "Countdown paused"),
            ControlOutcome::Reset => ("reset", "Countdown reset to full duration"),
            ControlOutcome::NoOp => ("noop", "Request had no effect"),
        };

        Self {
            status: status.to_string(),
            message: message.to_string(),
            timestamp: Utc::now(),
            session: session.into(),
        }
    }
}

/// Timer state response with the completion notice when applicable
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimerResponse {
    #[serde(flatten)]
    pub session: SessionView,
    /// Locale-selected heading for the timer surface
    pub title: String,
    pub notice: Option<String>,
    pub last_completed: Option<DateTime<Utc>>,
}

/// Server status response with timer summary and metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub timer: SessionView,
    pub locale: Locale,
    pub uptime: String,
    pub port: u16,
    pub host: String,
    pub last_completed: Option<DateTime<Utc>>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
}

impl HealthResponse {
    /// Create a new health response
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            timestamp: Utc::now(),
            version: "0.1.0".to_string(),
        }
    }
}
