//! Completion sound playback

use tokio::process::Command;
use tracing::{debug, info, warn};

/// Handle for the completion sound; owned by the controller for its lifetime
#[derive(Debug, Clone)]
pub struct CompletionSound {
    player: String,
    file: String,
}

impl CompletionSound {
    pub fn new(player: String, file: String) -> Self {
        Self { player, file }
    }

    /// Play the completion sound, fire-and-forget.
    ///
    /// Playback is best-effort: a missing player, missing file, or absent
    /// output device is logged at debug and otherwise ignored. The completion
    /// notice does not depend on the sound.
    pub fn play(&self) {
        let player = self.player.clone();
        let file = self.file.clone();

        tokio::spawn(async move {
            match Command::new(&player).arg(&file).output().await {
                Ok(output) if output.status.success() => {
                    debug!("Completion sound played");
                }
                Ok(output) => {
                    debug!("Sound player exited with {}: {}", output.status, file);
                }
                Err(e) => {
                    debug!("Failed to launch sound player {}: {}", player, e);
                }
            }
        });
    }
}

/// Check whether the configured sound player is available.
///
/// Missing audio is not fatal, so this only warns.
pub async fn check_sound_player_available(player: &str) {
    match Command::new(player).arg("--version").output().await {
        Ok(_) => info!("Sound player {} is available", player),
        Err(_) => warn!(
            "Sound player {} is not available, completion sound will be skipped",
            player
        ),
    }
}
