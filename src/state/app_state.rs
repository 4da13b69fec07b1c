//! Timer controller state management

use std::{sync::Mutex, time::Instant};

use chrono::{DateTime, Utc};
use tokio::sync::watch;
use tracing::{debug, info, warn};

use super::{CountdownSession, Phase, TickOutcome};
use crate::locale::Locale;
use crate::services::CompletionSound;
use crate::tasks::TickSource;

/// What a start/pause/reset request actually did, for API messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlOutcome {
    Started,
    Paused,
    Reset,
    NoOp,
}

/// Timer controller: owns the countdown session, the tick source, and the
/// completion sound handle.
///
/// Constructing it acquires the tick source and audio handle; dropping it
/// releases both (the tick source joins its thread on drop), so a destroyed
/// controller cannot leak a running interval.
#[derive(Debug)]
pub struct AppState {
    /// Countdown state, mutated only through the defined transitions
    session: Mutex<CountdownSession>,
    /// The single tick source this controller commands
    tick_source: TickSource,
    /// Completion sound handle, played best-effort
    sound: CompletionSound,
    /// Display language for user-visible strings
    pub locale: Locale,
    /// Server metadata
    pub start_time: Instant,
    pub port: u16,
    pub host: String,
    /// When the countdown last ran to zero
    last_completed: Mutex<Option<DateTime<Utc>>>,
    /// Broadcasts a snapshot after every session change
    session_tx: watch::Sender<CountdownSession>,
    /// Keep the receiver alive to prevent channel closure
    _session_rx: watch::Receiver<CountdownSession>,
}

impl AppState {
    /// Create a new controller owning the given tick source
    pub fn new(
        port: u16,
        host: String,
        work_seconds: u64,
        locale: Locale,
        tick_source: TickSource,
        sound: CompletionSound,
    ) -> Self {
        let session = CountdownSession::new(work_seconds);
        let (session_tx, session_rx) = watch::channel(session.clone());

        Self {
            session: Mutex::new(session),
            tick_source,
            sound,
            locale,
            start_time: Instant::now(),
            port,
            host,
            last_completed: Mutex::new(None),
            session_tx,
            _session_rx: session_rx,
        }
    }

    /// Start the countdown.
    ///
    /// No-op when already running or when no time remains.
    pub fn start(&self) -> Result<(CountdownSession, ControlOutcome), String> {
        self.with_session(|session, tick_source| {
            if session.start() {
                tick_source.start();
                ControlOutcome::Started
            } else {
                ControlOutcome::NoOp
            }
        })
    }

    /// Pause toggle: a running countdown pauses, anything else starts
    pub fn pause(&self) -> Result<(CountdownSession, ControlOutcome), String> {
        self.with_session(|session, tick_source| {
            if session.pause() {
                tick_source.stop();
                ControlOutcome::Paused
            } else if session.start() {
                tick_source.start();
                ControlOutcome::Started
            } else {
                ControlOutcome::NoOp
            }
        })
    }

    /// Stop the tick source and restore the full duration
    pub fn reset(&self) -> Result<(CountdownSession, ControlOutcome), String> {
        self.with_session(|session, tick_source| {
            tick_source.stop();
            session.reset();
            ControlOutcome::Reset
        })
    }

    /// Apply one tick notification from the tick source.
    ///
    /// The completion transition fires exactly once per cycle: stop command,
    /// best-effort sound, completion notice. Ticks outside the running phase
    /// are ignored.
    pub fn handle_tick(&self) -> Result<(), String> {
        let (session, outcome) = self.with_session(|session, tick_source| {
            let outcome = session.apply_tick();
            if outcome == TickOutcome::Completed {
                tick_source.stop();
            }
            outcome
        })?;

        match outcome {
            TickOutcome::Completed => {
                if let Ok(mut last) = self.last_completed.lock() {
                    *last = Some(Utc::now());
                }
                self.sound.play();
                info!("{}", self.locale.completion_notice());
            }
            TickOutcome::Decremented => {
                debug!("Tick applied: {} remaining", session.remaining_seconds);
            }
            TickOutcome::Ignored => {
                debug!("Ignoring tick outside running phase");
            }
        }

        Ok(())
    }

    /// Get a snapshot of the current session
    pub fn get_session(&self) -> Result<CountdownSession, String> {
        self.session
            .lock()
            .map(|session| session.clone())
            .map_err(|e| format!("Failed to lock session: {}", e))
    }

    /// Completion notice for the current phase, if any
    pub fn current_notice(&self) -> Result<Option<&'static str>, String> {
        let session = self.get_session()?;
        Ok((session.phase == Phase::Completed).then(|| self.locale.completion_notice()))
    }

    /// When the countdown last ran to zero
    pub fn get_last_completed(&self) -> Option<DateTime<Utc>> {
        self.last_completed.lock().ok().and_then(|t| *t)
    }

    /// Subscribe to session snapshots
    pub fn subscribe(&self) -> watch::Receiver<CountdownSession> {
        self.session_tx.subscribe()
    }

    /// Calculate server uptime as a formatted string
    pub fn get_uptime(&self) -> String {
        let duration = self.start_time.elapsed();
        let hours = duration.as_secs() / 3600;
        let minutes = (duration.as_secs() % 3600) / 60;
        let seconds = duration.as_secs() % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}s", seconds)
        }
    }

    /// Lock the session, apply a transition, broadcast the new snapshot
    fn with_session<T, F>(&self, mutate: F) -> Result<(CountdownSession, T), String>
    where
        F: FnOnce(&mut CountdownSession, &TickSource) -> T,
    {
        let mut session = self
            .session
            .lock()
            .map_err(|e| format!("Failed to lock session: {}", e))?;

        let outcome = mutate(&mut session, &self.tick_source);
        let snapshot = session.clone();
        drop(session); // Release the lock early

        if let Err(e) = self.session_tx.send(snapshot.clone()) {
            warn!("Failed to broadcast session update: {}", e);
        }

        Ok((snapshot, outcome))
    }
}
