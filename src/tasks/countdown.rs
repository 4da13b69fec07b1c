//! Countdown background task

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, error, info};

use crate::state::AppState;
use crate::tasks::TickNotification;

/// Background task that drains tick notifications into the controller.
///
/// Ticks are delivered in emission order; each one is applied through the
/// controller's transition, which handles late or bursty delivery on its own.
/// The task exits once the tick source is gone and its channel closes.
pub async fn countdown_task(
    state: Arc<AppState>,
    mut tick_rx: mpsc::UnboundedReceiver<TickNotification>,
) {
    info!("Starting countdown task");

    while let Some(TickNotification::Tick) = tick_rx.recv().await {
        if let Err(e) = state.handle_tick() {
            error!("Failed to apply tick: {}", e);
        }
    }

    debug!("Tick channel closed, countdown task exiting");
}
