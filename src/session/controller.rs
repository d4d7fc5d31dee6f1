//! Session controller.
//!
//! Owns the session state and is the only place it changes. User intents and
//! ticks both land here; presentation only ever sees `RenderFrame`s and
//! `SessionState` snapshots.
//!
//! Time is read from `tokio::time::Instant`, so tests can drive the
//! controller with a paused runtime clock.

use tokio::time::{Duration, Instant};
use tracing::{debug, info};

use super::clock::{ClockEvent, SessionClock};
use super::effects::CompletionEffects;
use super::render::{RenderFrame, Renderer};
use super::scheduler::ModeScheduler;
use crate::types::{Mode, SessionState, SettingKey, Settings};

/// Single owner of the countdown/session state machine.
pub struct SessionController {
    settings: Settings,
    scheduler: ModeScheduler,
    clock: SessionClock,
    effects: CompletionEffects,
    renderer: Box<dyn Renderer>,
    completed_intervals: u64,
}

impl SessionController {
    /// Creates a controller at Focus, round 1, stopped at the full focus
    /// duration.
    pub fn new(
        settings: Settings,
        effects: CompletionEffects,
        renderer: impl Renderer + 'static,
    ) -> Self {
        let scheduler = ModeScheduler::new(settings.rounds_per_long_break());
        let clock = SessionClock::new(seconds(settings.duration_of(scheduler.mode())));
        effects.set_sound_enabled(settings.sound_enabled);
        Self {
            settings,
            scheduler,
            clock,
            effects,
            renderer: Box::new(renderer),
            completed_intervals: 0,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn is_running(&self) -> bool {
        self.clock.is_running()
    }

    pub fn mode(&self) -> Mode {
        self.scheduler.mode()
    }

    /// Mode that follows the active one.
    pub fn next_mode(&self) -> Mode {
        self.scheduler.peek_next()
    }

    /// Number of intervals that ran to completion.
    pub fn completed_intervals(&self) -> u64 {
        self.completed_intervals
    }

    /// Snapshot of the session right now.
    pub fn state(&self) -> SessionState {
        self.state_at(Instant::now())
    }

    fn state_at(&self, now: Instant) -> SessionState {
        SessionState {
            mode: self.scheduler.mode(),
            remaining_seconds: self.clock.remaining_at(now).as_secs_f64(),
            is_running: self.clock.is_running(),
            current_round: self.scheduler.current_round(),
            next_mode: self.scheduler.peek_next(),
        }
    }

    /// Draws the current state without changing it.
    pub fn render(&mut self) {
        self.render_at(Instant::now());
    }

    /// Starts or resumes the countdown. No-op while running.
    pub fn start(&mut self) -> bool {
        let now = Instant::now();
        if !self.clock.start(now) {
            return false;
        }
        debug!(mode = self.mode().as_str(), "Countdown started");
        self.render_at(now);
        true
    }

    /// Pauses the countdown. No-op while paused.
    pub fn pause(&mut self) -> bool {
        let now = Instant::now();
        match self.clock.pause(now) {
            ClockEvent::Idle => return false,
            ClockEvent::Progress(remaining) => {
                debug!(remaining, "Countdown paused");
            }
            ClockEvent::Expired => self.complete_interval(now),
        }
        self.render_at(now);
        true
    }

    /// Starts when paused, pauses when running.
    pub fn toggle(&mut self) -> bool {
        if self.is_running() {
            self.pause()
        } else {
            self.start()
        }
    }

    /// Stops and restores the full duration of the active mode.
    ///
    /// No-op when already stopped at the full duration.
    pub fn reset(&mut self) -> bool {
        if self.clock.is_pristine() {
            return false;
        }
        self.clock.reset();
        debug!(mode = self.mode().as_str(), "Countdown reset");
        self.render();
        true
    }

    /// Goes back to the start of the cycle: Focus, round 1, stopped.
    ///
    /// Applies even when Focus is already active.
    pub fn restart(&mut self) {
        self.load_mode(Mode::Focus);
        debug!("Cycle restarted");
        self.render();
    }

    /// Manual mode switch.
    ///
    /// Cancels any running countdown, loads the full duration of `mode` and
    /// restarts the round count. No-op when `mode` is already active.
    pub fn select_mode(&mut self, mode: Mode) -> bool {
        if mode == self.mode() {
            return false;
        }
        self.load_mode(mode);
        debug!(mode = mode.as_str(), "Mode selected");
        self.render();
        true
    }

    fn load_mode(&mut self, mode: Mode) {
        self.scheduler.select(mode);
        self.clock.reload(seconds(self.settings.duration_of(mode)));
    }

    /// Applies a settings change, clamping `value`.
    ///
    /// Changing the duration of the active mode stops the countdown and
    /// reloads the new full duration, whether or not it was running.
    /// Returns false when the clamped value matches the current one.
    pub fn update_setting(&mut self, key: SettingKey, value: i64) -> bool {
        let updated = self.settings.clone().with(key, value);
        if updated == self.settings {
            return false;
        }
        self.settings = updated;

        match key {
            SettingKey::RoundsPerLongBreak => {
                self.scheduler
                    .set_rounds_per_long_break(self.settings.rounds_per_long_break());
            }
            SettingKey::AutoAdvance => {}
            SettingKey::SoundEnabled => {
                self.effects.set_sound_enabled(self.settings.sound_enabled);
            }
            _ => {
                if key.mode() == Some(self.mode()) {
                    self.clock
                        .reload(seconds(self.settings.duration_of(self.mode())));
                }
            }
        }
        debug!(?key, value, "Setting updated");
        self.render();
        true
    }

    /// Polls the clock once.
    ///
    /// Renders exactly once: progress while running, or the next interval
    /// after an expiry. Returns what the clock reported.
    pub fn tick(&mut self) -> ClockEvent {
        let now = Instant::now();
        let event = self.clock.tick(now);
        match event {
            ClockEvent::Idle => return event,
            ClockEvent::Progress(_) => {}
            ClockEvent::Expired => self.complete_interval(now),
        }
        self.render_at(now);
        event
    }

    fn complete_interval(&mut self, now: Instant) {
        let transition = self.scheduler.advance();
        self.completed_intervals += 1;
        info!(
            completed = transition.completed.as_str(),
            next = transition.next.as_str(),
            round = transition.round,
            "Interval complete"
        );

        self.effects.dispatch(
            transition.completed,
            transition.next,
            self.settings.auto_advance,
        );

        self.clock
            .reload(seconds(self.settings.duration_of(transition.next)));
        if self.settings.auto_advance {
            self.clock.start(now);
        }
    }

    fn render_at(&mut self, now: Instant) {
        let frame = RenderFrame {
            remaining_seconds: self.clock.remaining_at(now).as_secs_f64(),
            mode: self.scheduler.mode(),
            duration_seconds: self.settings.duration_of(self.scheduler.mode()),
            current_round: self.scheduler.current_round(),
            rounds_per_long_break: self.scheduler.rounds_per_long_break(),
            next_mode: self.scheduler.peek_next(),
            is_running: self.clock.is_running(),
        };
        self.renderer.render(&frame);
    }
}

impl std::fmt::Debug for SessionController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionController")
            .field("settings", &self.settings)
            .field("scheduler", &self.scheduler)
            .field("clock", &self.clock)
            .field("effects", &self.effects)
            .finish_non_exhaustive()
    }
}

fn seconds(secs: u32) -> Duration {
    Duration::from_secs(u64::from(secs))
}

// ============================================================================
// Tests
// ============================================================================
