//! Mode sequencing and round counting.
//!
//! Focus is always followed by a break. The break is long when the focus
//! round that just finished was the last one of the cycle, in which case the
//! round counter wraps back to 1. A break is always followed by focus.

use crate::types::Mode;

/// Result of advancing past a completed interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    /// The mode that just completed
    pub completed: Mode,
    /// The mode now active
    pub next: Mode,
    /// Round counter after the transition
    pub round: u32,
}

/// Decides the mode sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModeScheduler {
    mode: Mode,
    current_round: u32,
    rounds_per_long_break: u32,
}

impl ModeScheduler {
    /// Creates a scheduler at Focus, round 1.
    pub fn new(rounds_per_long_break: u32) -> Self {
        Self {
            mode: Mode::Focus,
            current_round: 1,
            rounds_per_long_break: rounds_per_long_break.max(1),
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn current_round(&self) -> u32 {
        self.current_round
    }

    pub fn rounds_per_long_break(&self) -> u32 {
        self.rounds_per_long_break
    }

    /// Mode that would follow the current one if it completed now.
    pub fn peek_next(&self) -> Mode {
        match self.mode {
            Mode::Focus if self.current_round >= self.rounds_per_long_break => Mode::LongBreak,
            Mode::Focus => Mode::ShortBreak,
            Mode::ShortBreak | Mode::LongBreak => Mode::Focus,
        }
    }

    /// Moves past a completed interval.
    pub fn advance(&mut self) -> Transition {
        let completed = self.mode;
        let next = self.peek_next();
        if completed == Mode::Focus {
            if next == Mode::LongBreak {
                self.current_round = 1;
            } else {
                self.current_round += 1;
            }
        }
        self.mode = next;
        Transition {
            completed,
            next,
            round: self.current_round,
        }
    }

    /// Manual override: jumps to `mode` and restarts the round count.
    pub fn select(&mut self, mode: Mode) {
        self.mode = mode;
        self.current_round = 1;
    }

    /// Changes the cycle length, pulling the current round inside it.
    pub fn set_rounds_per_long_break(&mut self, rounds: u32) {
        self.rounds_per_long_break = rounds.max(1);
        self.current_round = self.current_round.min(self.rounds_per_long_break);
    }
}

impl Default for ModeScheduler {
    fn default() -> Self {
        Self::new(4)
    }
}

// ============================================================================
// Tests
// ============================================================================
