//! Focus Timer - a Pomodoro-style countdown service
//!
//! This library provides a countdown session state machine, an isolated
//! tick source running on its own thread, and an HTTP surface for the
//! start/pause/reset controls and the remaining-time display.

pub mod api;
pub mod config;
pub mod locale;
pub mod services;
pub mod state;
pub mod tasks;
pub mod utils;

// Re-export commonly used types
pub use api::create_router;
pub use config::Config;
pub use locale::Locale;
pub use state::AppState;
pub use tasks::{countdown_task, TickSource};
pub use utils::signals::shutdown_signal;
