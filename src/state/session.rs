//! Countdown session state machine

use serde::{Deserialize, Serialize};

/// Default focus interval: 25 minutes.
pub const DEFAULT_WORK_SECONDS: u64 = 25 * 60;

/// Lifecycle phase of a countdown session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Idle,
    Running,
    Paused,
    Completed,
}

/// Outcome of applying a single tick to the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// One second elapsed, time still remaining
    Decremented,
    /// The countdown just reached zero (reported exactly once per cycle)
    Completed,
    /// Session was not running; late or spurious ticks land here
    Ignored,
}

/// Countdown state for a single focus interval.
///
/// Invariants: `remaining_seconds` stays within `[0, total_seconds]`, and the
/// session is never `Running` while `remaining_seconds == 0`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountdownSession {
    pub total_seconds: u64,
    pub remaining_seconds: u64,
    pub phase: Phase,
}

impl CountdownSession {
    /// Create a fresh idle session with the full duration remaining
    pub fn new(total_seconds: u64) -> Self {
        Self {
            total_seconds,
            remaining_seconds: total_seconds,
            phase: Phase::Idle,
        }
    }

    /// Check if the countdown is currently ticking
    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    /// Begin (or resume) the countdown.
    ///
    /// Returns `false` without changing anything when already running or when
    /// no time remains; starting an exhausted session requires `reset` first.
    pub fn start(&mut self) -> bool {
        if self.phase == Phase::Running || self.remaining_seconds == 0 {
            return false;
        }
        self.phase = Phase::Running;
        true
    }

    /// Pause a running countdown.
    ///
    /// Returns `false` when not running; the caller treats that case as a
    /// start toggle.
    pub fn pause(&mut self) -> bool {
        if self.phase == Phase::Running {
            self.phase = Phase::Paused;
            true
        } else {
            false
        }
    }

    /// Return to the idle state with the full duration remaining
    pub fn reset(&mut self) {
        self.remaining_seconds = self.total_seconds;
        self.phase = Phase::Idle;
    }

    /// Apply one elapsed second.
    ///
    /// Only a `Running` session is decremented; ticks arriving in any other
    /// phase are ignored, so bursty or late delivery after completion can
    /// neither drive the counter negative nor re-trigger completion.
    pub fn apply_tick(&mut self) -> TickOutcome {
        if self.phase != Phase::Running {
            return TickOutcome::Ignored;
        }
        self.remaining_seconds = self.remaining_seconds.saturating_sub(1);
        if self.remaining_seconds == 0 {
            self.phase = Phase::Completed;
            TickOutcome::Completed
        } else {
            TickOutcome::Decremented
        }
    }

    /// Remaining time formatted as zero-padded `MM:SS`
    pub fn display(&self) -> String {
        format_mmss(self.remaining_seconds)
    }

    /// Fraction of the interval already elapsed, in `[0.0, 1.0]`.
    ///
    /// Drives the circular progress indicator on the client side.
    pub fn progress(&self) -> f64 {
        if self.total_seconds == 0 {
            return 0.0;
        }
        (self.total_seconds - self.remaining_seconds) as f64 / self.total_seconds as f64
    }
}

impl Default for CountdownSession {
    fn default() -> Self {
        Self::new(DEFAULT_WORK_SECONDS)
    }
}

/// Format a second count as zero-padded `MM:SS`
pub fn format_mmss(seconds: u64) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_known_values() {
        assert_eq!(format_mmss(1500), "25:00");
        assert_eq!(format_mmss(61), "01:01");
        assert_eq!(format_mmss(0), "00:00");
        assert_eq!(format_mmss(59), "00:59");
        assert_eq!(format_mmss(600), "10:00");
    }

    #[test]
    fn formats_every_value_in_range() {
        for n in 0..=1500u64 {
            let formatted = format_mmss(n);
            assert_eq!(formatted.len(), 5);
            assert_eq!(formatted, format!("{:02}:{:02}", n / 60, n % 60));
        }
    }

    #[test]
    fn new_session_is_idle_and_full() {
        let session = CountdownSession::default();
        assert_eq!(session.remaining_seconds, 1500);
        assert_eq!(session.phase, Phase::Idle);
        assert_eq!(session.display(), "25:00");
        assert_eq!(session.progress(), 0.0);
    }

    #[test]
    fn k_ticks_leave_expected_remainder() {
        for k in [0u64, 1, 59, 60, 61, 750, 1499, 1500] {
            let mut session = CountdownSession::default();
            assert!(session.start());
            for _ in 0..k {
                session.apply_tick();
            }
            assert_eq!(session.remaining_seconds, 1500 - k, "after {} ticks", k);
            assert_eq!(session.is_running(), k < 1500, "after {} ticks", k);
        }
    }

    #[test]
    fn ticks_past_zero_are_ignored() {
        let mut session = CountdownSession::new(3);
        session.start();
        assert_eq!(session.apply_tick(), TickOutcome::Decremented);
        assert_eq!(session.apply_tick(), TickOutcome::Decremented);
        assert_eq!(session.apply_tick(), TickOutcome::Completed);

        // completion reported exactly once, counter never goes negative
        for _ in 0..10 {
            assert_eq!(session.apply_tick(), TickOutcome::Ignored);
        }
        assert_eq!(session.remaining_seconds, 0);
        assert_eq!(session.phase, Phase::Completed);
    }

    #[test]
    fn start_refuses_exhausted_session() {
        let mut session = CountdownSession::new(1);
        session.start();
        session.apply_tick();
        assert_eq!(session.phase, Phase::Completed);
        assert!(!session.start());
        assert_eq!(session.phase, Phase::Completed);
    }

    #[test]
    fn reset_from_every_phase() {
        // Idle
        let mut session = CountdownSession::default();
        session.reset();
        assert_eq!(session.remaining_seconds, 1500);
        assert_eq!(session.phase, Phase::Idle);

        // Running
        let mut session = CountdownSession::default();
        session.start();
        session.apply_tick();
        session.reset();
        assert_eq!(session.remaining_seconds, 1500);
        assert_eq!(session.phase, Phase::Idle);

        // Paused
        let mut session = CountdownSession::default();
        session.start();
        session.apply_tick();
        session.pause();
        session.reset();
        assert_eq!(session.remaining_seconds, 1500);
        assert_eq!(session.phase, Phase::Idle);

        // Completed
        let mut session = CountdownSession::new(1);
        session.start();
        session.apply_tick();
        session.reset();
        assert_eq!(session.remaining_seconds, 1);
        assert_eq!(session.phase, Phase::Idle);

        // a stale tick after reset has no visible effect
        assert_eq!(session.apply_tick(), TickOutcome::Ignored);
        assert_eq!(session.remaining_seconds, 1);
    }

    #[test]
    fn pause_toggle_preserves_remaining_time() {
        let mut session = CountdownSession::default();
        session.start();
        session.apply_tick();
        let before = session.remaining_seconds;

        assert!(session.pause());
        assert_eq!(session.phase, Phase::Paused);
        // a tick slipping in while paused changes nothing
        assert_eq!(session.apply_tick(), TickOutcome::Ignored);
        assert!(session.start());
        assert_eq!(session.phase, Phase::Running);
        assert_eq!(session.remaining_seconds, before);
    }

    #[test]
    fn pause_outside_running_is_a_noop() {
        let mut session = CountdownSession::default();
        assert!(!session.pause());
        assert_eq!(session.phase, Phase::Idle);
    }

    #[test]
    fn progress_fraction() {
        let mut session = CountdownSession::new(100);
        session.start();
        for _ in 0..25 {
            session.apply_tick();
        }
        assert!((session.progress() - 0.25).abs() < f64::EPSILON);
        for _ in 0..75 {
            session.apply_tick();
        }
        assert!((session.progress() - 1.0).abs() < f64::EPSILON);
    }
}
