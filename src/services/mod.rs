//! Side-effect services module
//!
//! This module contains the completion sound playback used when a countdown
//! runs to zero.

pub mod sound;

// Re-export main types and functions
pub use sound::{check_sound_player_available, CompletionSound};
