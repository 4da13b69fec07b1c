//! State management module
//!
//! This module contains the countdown session state machine and the timer
//! controller that owns it.

pub mod app_state;
pub mod session;

// Re-export main types
pub use app_state::{AppState, ControlOutcome};
pub use session::{format_mmss, CountdownSession, Phase, TickOutcome, DEFAULT_WORK_SECONDS};
