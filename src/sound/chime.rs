//! Synthesized completion chime.
//!
//! A 1.2 second sine tone that glides from 880 Hz down to 660 Hz. The gain
//! rises exponentially from 0.001 to 0.1 over the first 50 ms and then decays
//! exponentially to 0.0001 at the end.

use std::f32::consts::TAU;
use std::time::Duration;

use rodio::Source;

const SAMPLE_RATE: u32 = 44_100;
const LENGTH_MILLIS: u64 = 1200;
const LENGTH_SECS: f32 = LENGTH_MILLIS as f32 / 1000.0;
const START_HZ: f32 = 880.0;
const END_HZ: f32 = 660.0;
const ATTACK_SECS: f32 = 0.05;
const FLOOR_GAIN: f32 = 0.001;
const PEAK_GAIN: f32 = 0.1;
const END_GAIN: f32 = 0.0001;

/// Interpolates exponentially from `from` to `to` at `progress` in [0, 1].
fn exp_ramp(from: f32, to: f32, progress: f32) -> f32 {
    from * (to / from).powf(progress.clamp(0.0, 1.0))
}

/// Mono `f32` sample stream for the chime.
#[derive(Debug, Clone)]
pub struct Chime {
    index: u32,
    total: u32,
    phase: f32,
}

impl Chime {
    #[must_use]
    pub fn new() -> Self {
        Self {
            index: 0,
            // 52_920 samples; exact for a 44.1 kHz rate.
            total: (SAMPLE_RATE as f32 * LENGTH_SECS).round() as u32,
            phase: 0.0,
        }
    }

    /// Frequency at `t` seconds.
    fn frequency(t: f32) -> f32 {
        exp_ramp(START_HZ, END_HZ, t / LENGTH_SECS)
    }

    /// Gain envelope at `t` seconds.
    fn gain(t: f32) -> f32 {
        if t < ATTACK_SECS {
            exp_ramp(FLOOR_GAIN, PEAK_GAIN, t / ATTACK_SECS)
        } else {
            exp_ramp(
                PEAK_GAIN,
                END_GAIN,
                (t - ATTACK_SECS) / (LENGTH_SECS - ATTACK_SECS),
            )
        }
    }
}

impl Default for Chime {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for Chime {
    type Item = f32;

    fn next(&mut self) -> Option<f32> {
        if self.index >= self.total {
            return None;
        }
        let t = self.index as f32 / SAMPLE_RATE as f32;
        let sample = self.phase.sin() * Self::gain(t);

        self.phase = (self.phase + TAU * Self::frequency(t) / SAMPLE_RATE as f32) % TAU;
        self.index += 1;
        Some(sample)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = (self.total - self.index) as usize;
        (left, Some(left))
    }
}

impl ExactSizeIterator for Chime {}

impl Source for Chime {
    fn current_frame_len(&self) -> Option<usize> {
        Some((self.total - self.index) as usize)
    }

    fn channels(&self) -> u16 {
        1
    }

    fn sample_rate(&self) -> u32 {
        SAMPLE_RATE
    }

    fn total_duration(&self) -> Option<Duration> {
        Some(Duration::from_millis(LENGTH_MILLIS))
    }
}
