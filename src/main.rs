//! Focus Timer - a Pomodoro-style countdown service
//!
//! This is the main entry point for the focus-timer application.

use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;

use focus_timer::{
    api::create_router,
    config::Config,
    services::{check_sound_player_available, CompletionSound},
    state::AppState,
    tasks::{countdown_task, TickSource},
    utils::shutdown_signal,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing with appropriate log level
    tracing_subscriber::fmt()
        .with_env_filter(format!("focus_timer={},tower_http=info", config.log_level()))
        .init();

    info!("Starting focus-timer server v0.1.0");
    info!(
        "Configuration: host={}, port={}, work={}min, locale={:?}",
        config.host, config.port, config.work_minutes, config.locale
    );

    // Missing audio only degrades the completion side effect
    check_sound_player_available(&config.sound_player).await;

    // The tick source must come up before anything else; without it the
    // countdown cannot keep time, so failure here is fatal
    let (tick_source, tick_rx) =
        TickSource::spawn().context("failed to initialize tick source")?;

    let sound = CompletionSound::new(config.sound_player.clone(), config.sound_file.clone());

    // Create the timer controller
    let state = Arc::new(AppState::new(
        config.port,
        config.host.clone(),
        config.work_seconds(),
        config.locale,
        tick_source,
        sound,
    ));

    // Start the countdown background task
    let countdown_state = Arc::clone(&state);
    tokio::spawn(async move {
        countdown_task(countdown_state, tick_rx).await;
    });

    // Create HTTP router with all endpoints
    let app = create_router(Arc::clone(&state));

    // Bind to the specified address
    let addr = config.address();
    let listener = TcpListener::bind(&addr).await?;

    info!("Server running on http://{}", addr);
    info!("Endpoints:");
    info!("  POST /timer/start - Start the countdown");
    info!("  POST /timer/pause - Pause toggle");
    info!("  POST /timer/reset - Reset to full duration");
    info!("  GET  /timer       - Countdown state and display");
    info!("  GET  /status      - Server status");
    info!("  GET  /health      - Health check");

    // Setup graceful shutdown
    let server = axum::serve(listener, app);

    tokio::select! {
        result = server => {
            if let Err(e) = result {
                tracing::error!("Server error: {}", e);
            }
        }
        _ = shutdown_signal() => {
            info!("Shutdown signal received");
        }
    }

    info!("Server shutdown complete");
    Ok(())
}
