//! Deadline-based countdown clock.
//!
//! The clock never counts ticks. While running it stores the instant at which
//! the interval ends and derives the remaining time from it, so a late or
//! skipped tick cannot drift the countdown. Callers pass `now` explicitly,
//! which keeps the clock free of any timing source.

use tokio::time::{Duration, Instant};

// ============================================================================
// ClockEvent
// ============================================================================

/// Outcome of polling the clock.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ClockEvent {
    /// Clock is not running; nothing to report
    Idle,
    /// Time is still left, in fractional seconds
    Progress(f64),
    /// The interval just reached zero. Reported once per interval.
    Expired,
}

// ============================================================================
// SessionClock
// ============================================================================

/// Remaining-time bookkeeping for the active interval.
#[derive(Debug, Clone)]
pub struct SessionClock {
    /// Full length of the loaded interval
    duration: Duration,
    /// Time left when not running
    remaining: Duration,
    /// End of the interval; `Some` exactly while running
    deadline: Option<Instant>,
}

impl SessionClock {
    /// Creates a stopped clock loaded with `duration`.
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            remaining: duration,
            deadline: None,
        }
    }

    /// Returns true while the clock is counting down.
    pub fn is_running(&self) -> bool {
        self.deadline.is_some()
    }

    /// Full length of the loaded interval.
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Time left at `now`.
    pub fn remaining_at(&self, now: Instant) -> Duration {
        match self.deadline {
            Some(deadline) => deadline.saturating_duration_since(now),
            None => self.remaining,
        }
    }

    /// Starts counting down from the stored remaining time.
    ///
    /// Returns false (and does nothing) when already running or when no
    /// time is left.
    pub fn start(&mut self, now: Instant) -> bool {
        if self.is_running() || self.remaining.is_zero() {
            return false;
        }
        self.deadline = Some(now + self.remaining);
        true
    }

    /// Stops counting down and keeps the time that was left.
    ///
    /// Returns `Idle` when not running, `Progress` with the kept time, or
    /// `Expired` when the deadline had already passed.
    pub fn pause(&mut self, now: Instant) -> ClockEvent {
        let Some(deadline) = self.deadline.take() else {
            return ClockEvent::Idle;
        };
        self.remaining = deadline.saturating_duration_since(now);
        if self.remaining.is_zero() {
            ClockEvent::Expired
        } else {
            ClockEvent::Progress(self.remaining.as_secs_f64())
        }
    }

    /// Polls the clock. Stops it and reports `Expired` when time is up.
    pub fn tick(&mut self, now: Instant) -> ClockEvent {
        let Some(deadline) = self.deadline else {
            return ClockEvent::Idle;
        };
        let remaining = deadline.saturating_duration_since(now);
        if remaining.is_zero() {
            self.deadline = None;
            self.remaining = Duration::ZERO;
            return ClockEvent::Expired;
        }
        ClockEvent::Progress(remaining.as_secs_f64())
    }

    /// Stops the clock and restores the full duration.
    pub fn reset(&mut self) {
        self.deadline = None;
        self.remaining = self.duration;
    }

    /// Stops the clock and loads a new interval length.
    pub fn reload(&mut self, duration: Duration) {
        self.duration = duration;
        self.reset();
    }

    /// Returns true when stopped at the full duration.
    pub fn is_pristine(&self) -> bool {
        !self.is_running() && self.remaining == self.duration
    }
}

// ============================================================================
// Tests
// ============================================================================
