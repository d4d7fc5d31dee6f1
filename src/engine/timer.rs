//! Timer engine for Focus Flow.
//!
//! This module provides the run loop:
//! - A single repeating tick source, armed only while the countdown runs
//! - Intents and ticks handled on the same task, one at a time
//! - Graceful shutdown on `Quit`, a closed channel or Ctrl-C

use std::future::Future;

use anyhow::{Context, Result};
use tokio::sync::mpsc;
use tokio::time::{interval_at, Duration, Instant, Interval, MissedTickBehavior};
use tracing::{debug, info};

use super::intent::Intent;
use crate::session::SessionController;

/// Default spacing between ticks.
pub const DEFAULT_TICK_PERIOD: Duration = Duration::from_millis(250);

// ============================================================================
// TimerEngine
// ============================================================================

/// Drives a `SessionController` from intents and a repeating tick.
pub struct TimerEngine {
    /// The session being driven
    controller: SessionController,
    /// Spacing between ticks
    tick_period: Duration,
    /// Tick source; `Some` exactly while the countdown runs
    ticker: Option<Interval>,
}

impl TimerEngine {
    /// Creates a new engine around `controller`.
    ///
    /// A zero `tick_period` is raised to one millisecond.
    pub fn new(controller: SessionController, tick_period: Duration) -> Self {
        Self {
            controller,
            tick_period: tick_period.max(Duration::from_millis(1)),
            ticker: None,
        }
    }

    pub fn controller(&self) -> &SessionController {
        &self.controller
    }

    pub fn tick_period(&self) -> Duration {
        self.tick_period
    }

    /// Returns true while a tick source is armed.
    pub fn is_ticking(&self) -> bool {
        self.ticker.is_some()
    }

    /// Consumes the engine, returning the controller.
    pub fn into_controller(self) -> SessionController {
        self.controller
    }

    /// Runs until `Quit`, a closed channel, or Ctrl-C.
    ///
    /// # Errors
    ///
    /// Returns an error if the Ctrl-C handler cannot be installed.
    pub async fn run(&mut self, intents: mpsc::UnboundedReceiver<Intent>) -> Result<()> {
        self.run_until(intents, tokio::signal::ctrl_c()).await
    }

    /// Runs until `Quit`, a closed channel, or `shutdown` resolves.
    ///
    /// # Errors
    ///
    /// Returns an error if `shutdown` resolves with one.
    pub async fn run_until<F>(
        &mut self,
        mut intents: mpsc::UnboundedReceiver<Intent>,
        shutdown: F,
    ) -> Result<()>
    where
        F: Future<Output = std::io::Result<()>>,
    {
        tokio::pin!(shutdown);
        self.controller.render();

        loop {
            self.sync_ticker();

            tokio::select! {
                intent = intents.recv() => {
                    let Some(intent) = intent else {
                        debug!("Intent channel closed");
                        break;
                    };
                    if !intent.apply(&mut self.controller) {
                        debug!("Quit requested");
                        break;
                    }
                }
                _ = next_tick(&mut self.ticker) => {
                    self.controller.tick();
                }
                result = &mut shutdown => {
                    result.context("Failed to listen for Ctrl-C")?;
                    info!("Interrupted, shutting down");
                    break;
                }
            }
        }

        // A stopped engine leaves the session paused
        self.ticker = None;
        self.controller.pause();
        Ok(())
    }

    /// Arms the tick source while running and drops it otherwise.
    ///
    /// Dropping the interval on every stop means no tick scheduled for a
    /// previous interval can ever reach the controller.
    fn sync_ticker(&mut self) {
        match (self.controller.is_running(), self.ticker.is_some()) {
            (true, false) => {
                let mut ticker =
                    interval_at(Instant::now() + self.tick_period, self.tick_period);
                ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
                self.ticker = Some(ticker);
                debug!(period_ms = self.tick_period.as_millis() as u64, "Tick source armed");
            }
            (false, true) => {
                self.ticker = None;
                debug!("Tick source dropped");
            }
            _ => {}
        }
    }
}

impl std::fmt::Debug for TimerEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TimerEngine")
            .field("controller", &self.controller)
            .field("tick_period", &self.tick_period)
            .field("ticking", &self.ticker.is_some())
            .finish()
    }
}

/// Waits for the next tick, or forever when no tick source is armed.
async fn next_tick(ticker: &mut Option<Interval>) -> Instant {
    match ticker {
        Some(ticker) => ticker.tick().await,
        None => std::future::pending().await,
    }
}

// ============================================================================
// Tests
// ============================================================================
