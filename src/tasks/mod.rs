//! Background tasks module
//!
//! This module contains the tick source actor and the countdown task that
//! runs alongside the HTTP server.

pub mod countdown;
pub mod tick_source;

// Re-export main types and functions
pub use countdown::countdown_task;
pub use tick_source::{TickCommand, TickNotification, TickSource};
