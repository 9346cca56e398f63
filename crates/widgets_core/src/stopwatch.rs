use std::time::Duration;

use crate::Timestamp;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StopwatchPhase {
    #[default]
    Idle,
    Paused,
    Running,
}

/// Elapsed-time tracker. Every operation takes the current timestamp so the
/// accounting is independent of how often (or whether) ticks arrive.
///
/// All operations are total: calls that make no sense in the current phase
/// (pausing an idle watch, resetting a running one) leave it unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Stopwatch {
    running: bool,
    started_at: Timestamp,
    accumulated: Duration,
    /// Periodic delivery is paused by the host. Only gates `resume`.
    suspended: bool,
}

impl Stopwatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_suspended(&self) -> bool {
        self.suspended
    }

    pub fn accumulated(&self) -> Duration {
        self.accumulated
    }

    pub fn phase(&self) -> StopwatchPhase {
        if self.running {
            StopwatchPhase::Running
        } else if self.accumulated > Duration::ZERO {
            StopwatchPhase::Paused
        } else {
            StopwatchPhase::Idle
        }
    }

    /// Returns true if the watch was started.
    pub fn start(&mut self, now: Timestamp) -> bool {
        if self.running {
            return false;
        }
        self.running = true;
        self.suspended = false;
        self.started_at = now;
        true
    }

    /// Returns true if the watch was paused.
    pub fn pause(&mut self, now: Timestamp) -> bool {
        if !self.running {
            return false;
        }
        self.fold(now);
        self.running = false;
        self.suspended = false;
        true
    }

    /// Starts an idle or paused watch, pauses a running one. Returns the
    /// phase after the toggle.
    pub fn toggle(&mut self, now: Timestamp) -> StopwatchPhase {
        if self.running {
            self.pause(now);
        } else {
            self.start(now);
        }
        self.phase()
    }

    /// Returns true if the watch was reset. A running watch must be paused first.
    pub fn reset(&mut self) -> bool {
        if self.running {
            return false;
        }
        self.accumulated = Duration::ZERO;
        self.started_at = Duration::ZERO;
        true
    }

    /// Total elapsed running time as of `now`. Pure; call as often as needed.
    pub fn sample(&self, now: Timestamp) -> Duration {
        if self.running {
            self.accumulated + now.saturating_sub(self.started_at)
        } else {
            self.accumulated
        }
    }

    /// Host stopped delivering ticks: fold the running interval now so
    /// nothing is lost or counted twice. Returns true if anything changed.
    pub fn suspend(&mut self, now: Timestamp) -> bool {
        if !self.running || self.suspended {
            return false;
        }
        self.fold(now);
        self.started_at = now;
        self.suspended = true;
        true
    }

    /// Host resumed delivering ticks. Rebasing drops the time spent
    /// suspended; a resume without a prior suspend is ignored.
    pub fn resume(&mut self, now: Timestamp) -> bool {
        if !self.running || !self.suspended {
            return false;
        }
        self.started_at = now;
        self.suspended = false;
        true
    }

    fn fold(&mut self, now: Timestamp) {
        self.accumulated += now.saturating_sub(self.started_at);
    }
}

/// Formats a duration as `HH:MM:SS.CC`. Hours are not capped at two digits.
pub fn format_elapsed(elapsed: Duration) -> String {
    let centiseconds = elapsed.as_millis() / 10;
    let cs = centiseconds % 100;
    let seconds = centiseconds / 100;
    let s = seconds % 60;
    let minutes = seconds / 60;
    let m = minutes % 60;
    let hours = minutes / 60;
    format!("{hours:02}:{m:02}:{s:02}.{cs:02}")
}
