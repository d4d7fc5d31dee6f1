//! Core data types for the Focus Flow timer.
//!
//! This module defines the data structures used for:
//! - Interval modes (focus, short break, long break)
//! - Settings with clamping validation
//! - Session state snapshots for rendering and status output

use serde::{Deserialize, Serialize};

// ============================================================================
// Mode
// ============================================================================

/// The kind of interval the timer is counting down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// Work period of the cycle
    Focus,
    /// Rest period between focus rounds
    ShortBreak,
    /// Rest period after the last round of a cycle
    LongBreak,
}

impl Mode {
    /// All modes, in tab order.
    pub const ALL: [Mode; 3] = [Mode::Focus, Mode::ShortBreak, Mode::LongBreak];

    /// Returns the machine name of the mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Focus => "focus",
            Mode::ShortBreak => "short_break",
            Mode::LongBreak => "long_break",
        }
    }

    /// Returns the label shown to the user.
    pub fn label(&self) -> &'static str {
        match self {
            Mode::Focus => "Focus",
            Mode::ShortBreak => "Pause",
            Mode::LongBreak => "Restore",
        }
    }

    /// Parses a mode from user input.
    ///
    /// Accepts machine names, labels and the short aliases used by the
    /// terminal front-end (`1`, `2`, `3`, `short`, `long`).
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "focus" | "pomodoro" | "1" => Some(Mode::Focus),
            "short_break" | "short" | "pause" | "2" => Some(Mode::ShortBreak),
            "long_break" | "long" | "restore" | "3" => Some(Mode::LongBreak),
            _ => None,
        }
    }
}

impl Default for Mode {
    fn default() -> Self {
        Mode::Focus
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// ============================================================================
// Settings
// ============================================================================

/// Focus length bounds in minutes.
pub const FOCUS_MINUTES_RANGE: (u32, u32) = (1, 90);
/// Short and long break length bounds in minutes.
pub const BREAK_MINUTES_RANGE: (u32, u32) = (1, 45);
/// Bounds for the number of focus rounds before a long break.
pub const ROUNDS_RANGE: (u32, u32) = (1, 4);

/// A configuration field the user can change at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SettingKey {
    /// Focus length in minutes
    FocusMinutes,
    /// Short break length in minutes
    BreakMinutes,
    /// Long break length in minutes
    LongBreakMinutes,
    /// Focus rounds per long break
    RoundsPerLongBreak,
    /// Start the next interval automatically (0 = off, anything else = on)
    AutoAdvance,
    /// Play the completion chime (0 = off, anything else = on)
    SoundEnabled,
}

impl SettingKey {
    /// Parses a setting key from user input.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "focus" => Some(SettingKey::FocusMinutes),
            "break" | "short" => Some(SettingKey::BreakMinutes),
            "long" | "long_break" => Some(SettingKey::LongBreakMinutes),
            "rounds" => Some(SettingKey::RoundsPerLongBreak),
            "auto" | "auto_advance" => Some(SettingKey::AutoAdvance),
            "sound" | "sound_enabled" => Some(SettingKey::SoundEnabled),
            _ => None,
        }
    }

    /// Returns the mode whose duration this key controls, if any.
    pub fn mode(&self) -> Option<Mode> {
        match self {
            SettingKey::FocusMinutes => Some(Mode::Focus),
            SettingKey::BreakMinutes => Some(Mode::ShortBreak),
            SettingKey::LongBreakMinutes => Some(Mode::LongBreak),
            SettingKey::RoundsPerLongBreak
            | SettingKey::AutoAdvance
            | SettingKey::SoundEnabled => None,
        }
    }
}

/// Validated timer configuration.
///
/// Out-of-range input is clamped to the nearest bound, never rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Settings {
    /// Focus length in seconds (60-5400)
    focus_seconds: u32,
    /// Short break length in seconds (60-2700)
    break_seconds: u32,
    /// Long break length in seconds (60-2700)
    long_break_seconds: u32,
    /// Focus rounds before a long break (1-4)
    rounds_per_long_break: u32,
    /// Whether a completed interval starts the next one automatically
    pub auto_advance: bool,
    /// Whether the completion chime is played
    pub sound_enabled: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            focus_seconds: 25 * 60,
            break_seconds: 5 * 60,
            long_break_seconds: 15 * 60,
            rounds_per_long_break: 4,
            auto_advance: false,
            sound_enabled: true,
        }
    }
}

fn clamp_to(value: i64, (min, max): (u32, u32)) -> u32 {
    // Both bounds are small, so the narrowing cast is lossless.
    value.clamp(i64::from(min), i64::from(max)) as u32
}

impl Settings {
    /// Sets the focus length, clamped to 1-90 minutes.
    pub fn with_focus_minutes(mut self, minutes: i64) -> Self {
        self.focus_seconds = clamp_to(minutes, FOCUS_MINUTES_RANGE) * 60;
        self
    }

    /// Sets the short break length, clamped to 1-45 minutes.
    pub fn with_break_minutes(mut self, minutes: i64) -> Self {
        self.break_seconds = clamp_to(minutes, BREAK_MINUTES_RANGE) * 60;
        self
    }

    /// Sets the long break length, clamped to 1-45 minutes.
    pub fn with_long_break_minutes(mut self, minutes: i64) -> Self {
        self.long_break_seconds = clamp_to(minutes, BREAK_MINUTES_RANGE) * 60;
        self
    }

    /// Sets the rounds per long break, clamped to 1-4.
    pub fn with_rounds(mut self, rounds: i64) -> Self {
        self.rounds_per_long_break = clamp_to(rounds, ROUNDS_RANGE);
        self
    }

    pub fn with_auto_advance(mut self, auto_advance: bool) -> Self {
        self.auto_advance = auto_advance;
        self
    }

    pub fn with_sound(mut self, sound_enabled: bool) -> Self {
        self.sound_enabled = sound_enabled;
        self
    }

    /// Returns a copy with `key` set to `value`, clamped.
    pub fn with(self, key: SettingKey, value: i64) -> Self {
        match key {
            SettingKey::FocusMinutes => self.with_focus_minutes(value),
            SettingKey::BreakMinutes => self.with_break_minutes(value),
            SettingKey::LongBreakMinutes => self.with_long_break_minutes(value),
            SettingKey::RoundsPerLongBreak => self.with_rounds(value),
            SettingKey::AutoAdvance => self.with_auto_advance(value != 0),
            SettingKey::SoundEnabled => self.with_sound(value != 0),
        }
    }

    pub fn focus_seconds(&self) -> u32 {
        self.focus_seconds
    }

    pub fn break_seconds(&self) -> u32 {
        self.break_seconds
    }

    pub fn long_break_seconds(&self) -> u32 {
        self.long_break_seconds
    }

    pub fn rounds_per_long_break(&self) -> u32 {
        self.rounds_per_long_break
    }

    /// Returns the full length of `mode` in seconds.
    pub fn duration_of(&self, mode: Mode) -> u32 {
        match mode {
            Mode::Focus => self.focus_seconds,
            Mode::ShortBreak => self.break_seconds,
            Mode::LongBreak => self.long_break_seconds,
        }
    }
}

// ============================================================================
// SessionState
// ============================================================================

/// Snapshot of the session, as seen by presentation code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionState {
    /// Active mode
    pub mode: Mode,
    /// Seconds left in the active interval
    pub remaining_seconds: f64,
    /// Whether a timing source is active
    pub is_running: bool,
    /// Focus round within the current long-break cycle (1-based)
    pub current_round: u32,
    /// Mode that follows the active one
    pub next_mode: Mode,
}

impl SessionState {
    /// Remaining time rounded up to whole seconds, as displayed.
    pub fn display_seconds(&self) -> u32 {
        display_seconds(self.remaining_seconds)
    }
}

/// Rounds fractional remaining time up to whole seconds for display.
///
/// Negative input is treated as zero.
pub fn display_seconds(remaining_seconds: f64) -> u32 {
    // Durations are capped at 5400 s, so the cast cannot overflow.
    remaining_seconds.max(0.0).ceil() as u32
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // ------------------------------------------------------------------------
    // Mode Tests
    // ------------------------------------------------------------------------

    mod mode_tests {
        use super::*;

        #[test]
        fn test_default_is_focus() {
            assert_eq!(Mode::default(), Mode::Focus);
        }

        #[test]
        fn test_labels() {
            assert_eq!(Mode::Focus.label(), "Focus");
            assert_eq!(Mode::ShortBreak.label(), "Pause");
            assert_eq!(Mode::LongBreak.label(), "Restore");
        }

        #[test]
        fn test_parse_aliases() {
            assert_eq!(Mode::parse("focus"), Some(Mode::Focus));
            assert_eq!(Mode::parse(" 2 "), Some(Mode::ShortBreak));
            assert_eq!(Mode::parse("LONG"), Some(Mode::LongBreak));
            assert_eq!(Mode::parse("restore"), Some(Mode::LongBreak));
            assert_eq!(Mode::parse("nap"), None);
        }

        #[test]
        fn test_serialize() {
            let json = serde_json::to_string(&Mode::ShortBreak).unwrap();
            assert_eq!(json, "\"short_break\"");
        }
    }

    // ------------------------------------------------------------------------
    // Settings Tests
    // ------------------------------------------------------------------------

    mod settings_tests {
        use super::*;

        #[test]
        fn test_default_values() {
            let settings = Settings::default();
            assert_eq!(settings.focus_seconds(), 1500);
            assert_eq!(settings.break_seconds(), 300);
            assert_eq!(settings.long_break_seconds(), 900);
            assert_eq!(settings.rounds_per_long_break(), 4);
            assert!(!settings.auto_advance);
            assert!(settings.sound_enabled);
        }

        #[test]
        fn test_focus_clamps_to_bounds() {
            assert_eq!(Settings::default().with_focus_minutes(0).focus_seconds(), 60);
            assert_eq!(
                Settings::default().with_focus_minutes(200).focus_seconds(),
                90 * 60
            );
            assert_eq!(Settings::default().with_focus_minutes(-5).focus_seconds(), 60);
        }

        #[test]
        fn test_break_clamps_to_bounds() {
            assert_eq!(Settings::default().with_break_minutes(0).break_seconds(), 60);
            assert_eq!(
                Settings::default().with_break_minutes(46).break_seconds(),
                45 * 60
            );
            assert_eq!(
                Settings::default()
                    .with_long_break_minutes(100)
                    .long_break_seconds(),
                45 * 60
            );
        }

        #[test]
        fn test_rounds_clamp_to_bounds() {
            assert_eq!(Settings::default().with_rounds(0).rounds_per_long_break(), 1);
            assert_eq!(Settings::default().with_rounds(10).rounds_per_long_break(), 4);
            assert_eq!(Settings::default().with_rounds(3).rounds_per_long_break(), 3);
        }

        #[test]
        fn test_with_key() {
            let settings = Settings::default()
                .with(SettingKey::FocusMinutes, 30)
                .with(SettingKey::AutoAdvance, 1);
            assert_eq!(settings.focus_seconds(), 1800);
            assert!(settings.auto_advance);

            let settings = settings.with(SettingKey::AutoAdvance, 0);
            assert!(!settings.auto_advance);
        }

        #[test]
        fn test_duration_of() {
            let settings = Settings::default();
            assert_eq!(settings.duration_of(Mode::Focus), 1500);
            assert_eq!(settings.duration_of(Mode::ShortBreak), 300);
            assert_eq!(settings.duration_of(Mode::LongBreak), 900);
        }

        #[test]
        fn test_setting_key_mode() {
            assert_eq!(SettingKey::FocusMinutes.mode(), Some(Mode::Focus));
            assert_eq!(SettingKey::LongBreakMinutes.mode(), Some(Mode::LongBreak));
            assert_eq!(SettingKey::RoundsPerLongBreak.mode(), None);
            assert_eq!(SettingKey::SoundEnabled.mode(), None);
        }

        #[test]
        fn test_setting_key_parse() {
            assert_eq!(SettingKey::parse("focus"), Some(SettingKey::FocusMinutes));
            assert_eq!(
                SettingKey::parse("Rounds"),
                Some(SettingKey::RoundsPerLongBreak)
            );
            assert_eq!(SettingKey::parse("sound"), Some(SettingKey::SoundEnabled));
            assert_eq!(SettingKey::parse("volume"), None);
        }
    }

    // ------------------------------------------------------------------------
    // SessionState Tests
    // ------------------------------------------------------------------------

    mod session_state_tests {
        use super::*;

        #[test]
        fn test_display_seconds_rounds_up() {
            assert_eq!(display_seconds(1499.2), 1500);
            assert_eq!(display_seconds(0.01), 1);
            assert_eq!(display_seconds(0.0), 0);
            assert_eq!(display_seconds(-3.0), 0);
        }

        #[test]
        fn test_serialize_camel_case() {
            let state = SessionState {
                mode: Mode::Focus,
                remaining_seconds: 1500.0,
                is_running: false,
                current_round: 1,
                next_mode: Mode::ShortBreak,
            };
            let json = serde_json::to_string(&state).unwrap();
            assert!(json.contains("\"remainingSeconds\":1500.0"));
            assert!(json.contains("\"currentRound\":1"));
            assert!(json.contains("\"mode\":\"focus\""));
            assert!(json.contains("\"nextMode\":\"short_break\""));
        }
    }
}
