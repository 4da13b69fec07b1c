//! Isolated tick source actor
//!
//! Owns the repeating one-second interval on a dedicated thread with its own
//! single-threaded runtime, so tick emission is scheduled independently of
//! the main runtime and stays accurate while request handlers are busy.

use std::thread;
use std::time::Duration;

use anyhow::Context;
use futures::future;
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;
use tokio::time::{self, Instant, Interval, MissedTickBehavior};
use tracing::{debug, info, warn};

const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Directive sent from the controller to the tick source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "lowercase")]
pub enum TickCommand {
    Start,
    Stop,
}

/// Notification that one second has elapsed; carries no other payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TickNotification {
    Tick,
}

/// Handle to the tick source thread.
///
/// The controller owns exactly one of these for its lifetime; dropping it
/// closes the command channel, which ends the tick loop and joins the thread.
#[derive(Debug)]
pub struct TickSource {
    command_tx: Option<mpsc::UnboundedSender<TickCommand>>,
    thread: Option<thread::JoinHandle<()>>,
}

impl TickSource {
    /// Spawn the tick source and return its handle plus the notification
    /// receiver.
    ///
    /// Failure to acquire the thread or its runtime is fatal to startup;
    /// there is no same-thread fallback interval.
    pub fn spawn() -> anyhow::Result<(Self, mpsc::UnboundedReceiver<TickNotification>)> {
        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let (tick_tx, tick_rx) = mpsc::unbounded_channel();

        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_time()
            .build()
            .context("failed to build tick source runtime")?;

        let thread = thread::Builder::new()
            .name("tick-source".to_string())
            .spawn(move || runtime.block_on(tick_loop(command_rx, tick_tx)))
            .context("failed to spawn tick source thread")?;

        info!("Tick source started on dedicated thread");

        Ok((
            Self {
                command_tx: Some(command_tx),
                thread: Some(thread),
            },
            tick_rx,
        ))
    }

    /// Start (or restart) the one-second interval
    pub fn start(&self) {
        self.send(TickCommand::Start);
    }

    /// Cancel the interval; safe to call when already idle
    pub fn stop(&self) {
        self.send(TickCommand::Stop);
    }

    fn send(&self, command: TickCommand) {
        if let Some(tx) = &self.command_tx {
            if tx.send(command).is_err() {
                warn!("Tick source is gone, dropping {:?} command", command);
            }
        }
    }
}

impl Drop for TickSource {
    fn drop(&mut self) {
        // closing the command channel ends the tick loop
        self.command_tx.take();
        if let Some(thread) = self.thread.take() {
            if thread.join().is_err() {
                warn!("Tick source thread panicked during teardown");
            }
        }
    }
}

/// Actor loop: at most one interval alive at a time.
async fn tick_loop(
    mut command_rx: mpsc::UnboundedReceiver<TickCommand>,
    tick_tx: mpsc::UnboundedSender<TickNotification>,
) {
    let mut interval: Option<Interval> = None;

    loop {
        tokio::select! {
            command = command_rx.recv() => {
                match command {
                    Some(TickCommand::Start) => {
                        debug!("Tick source received start command");
                        // replacing any active interval keeps a repeated start
                        // from stacking intervals into double-speed ticking
                        interval = Some(new_interval());
                    }
                    Some(TickCommand::Stop) => {
                        debug!("Tick source received stop command");
                        interval = None;
                    }
                    None => {
                        debug!("Command channel closed, tick source shutting down");
                        break;
                    }
                }
            }
            _ = next_tick(&mut interval) => {
                if tick_tx.send(TickNotification::Tick).is_err() {
                    debug!("Tick receiver dropped, tick source shutting down");
                    break;
                }
            }
        }
    }
}

fn new_interval() -> Interval {
    // first firing lands one full period from now, not immediately; skipping
    // missed ticks keeps emission at most once per second under contention
    let mut interval = time::interval_at(Instant::now() + TICK_PERIOD, TICK_PERIOD);
    interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
    interval
}

/// Resolve on the next interval firing, or never while no interval is active
async fn next_tick(interval: &mut Option<Interval>) {
    match interval {
        Some(interval) => {
            interval.tick().await;
        }
        None => future::pending().await,
    }
}
