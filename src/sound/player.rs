//! Sound player implementation using rodio.
//!
//! This module provides the `RodioSoundPlayer` which uses the rodio v0.20
//! audio library for cross-platform sound playback.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};

use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink};
use tracing::{debug, warn};

use super::chime::Chime;
use super::error::SoundError;
use super::source::SoundSource;

/// A sound player that uses rodio for audio playback.
///
/// Sound playback is non-blocking; sounds continue playing in the background.
/// The output stream is not `Send`, so the player lives on the thread that
/// created it.
pub struct RodioSoundPlayer {
    /// The audio output stream (must be kept alive for playback).
    _stream: OutputStream,
    /// Handle to the output stream for creating sinks.
    stream_handle: OutputStreamHandle,
    /// Whether sound playback is disabled.
    disabled: AtomicBool,
}

impl RodioSoundPlayer {
    /// Creates a new sound player.
    ///
    /// # Errors
    ///
    /// Returns `SoundError::DeviceNotAvailable` if no audio output device
    /// is available.
    pub fn new(disabled: bool) -> Result<Self, SoundError> {
        let (stream, stream_handle) = OutputStream::try_default()
            .map_err(|e| SoundError::DeviceNotAvailable(e.to_string()))?;

        debug!("Audio output stream initialized");

        Ok(Self {
            _stream: stream,
            stream_handle,
            disabled: AtomicBool::new(disabled),
        })
    }

    /// Plays a sound from the given source.
    ///
    /// A file that cannot be opened or decoded falls back to the chime.
    ///
    /// # Errors
    ///
    /// Returns an error if no sink can be created on the output stream.
    pub fn play(&self, source: &SoundSource) -> Result<(), SoundError> {
        if self.disabled.load(Ordering::Relaxed) {
            debug!("Sound playback disabled, skipping");
            return Ok(());
        }

        match source {
            SoundSource::File { path, name } => {
                debug!("Playing sound file: {}", name);
                match self.play_file(path) {
                    Ok(()) => Ok(()),
                    Err(e) if e.should_fallback_to_chime() => {
                        warn!("Failed to play '{}': {}, falling back to chime", name, e);
                        self.play_chime()
                    }
                    Err(e) => Err(e),
                }
            }
            SoundSource::Chime => {
                debug!("Playing chime");
                self.play_chime()
            }
        }
    }

    /// Plays a sound file from the filesystem.
    fn play_file(&self, path: &Path) -> Result<(), SoundError> {
        let file = File::open(path)
            .map_err(|e| SoundError::FileNotFound(format!("{}: {}", path.display(), e)))?;

        let decoder = Decoder::new(BufReader::new(file))
            .map_err(|e| SoundError::DecodeError(e.to_string()))?;

        self.play_decoder(decoder)
    }

    /// Plays the synthesized chime.
    fn play_chime(&self) -> Result<(), SoundError> {
        let sink = self.new_sink()?;
        sink.append(Chime::new());
        sink.detach(); // Non-blocking: sound continues after function returns

        debug!("Chime playback started (detached)");
        Ok(())
    }

    /// Plays a decoded audio file.
    fn play_decoder(&self, decoder: Decoder<BufReader<File>>) -> Result<(), SoundError> {
        let sink = self.new_sink()?;
        sink.append(decoder);
        sink.detach();

        debug!("Sound playback started (detached)");
        Ok(())
    }

    fn new_sink(&self) -> Result<Sink, SoundError> {
        Sink::try_new(&self.stream_handle).map_err(|e| SoundError::StreamError(e.to_string()))
    }

    /// Returns true if sound playback is currently disabled.
    #[must_use]
    pub fn is_disabled(&self) -> bool {
        self.disabled.load(Ordering::Relaxed)
    }

    /// Enables sound playback.
    pub fn enable(&self) {
        self.disabled.store(false, Ordering::Relaxed);
        debug!("Sound playback enabled");
    }

    /// Disables sound playback.
    pub fn disable(&self) {
        self.disabled.store(true, Ordering::Relaxed);
        debug!("Sound playback disabled");
    }
}

impl std::fmt::Debug for RodioSoundPlayer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RodioSoundPlayer")
            .field("disabled", &self.disabled.load(Ordering::Relaxed))
            .finish_non_exhaustive()
    }
}

/// Creates a sound player, returning None if audio is unavailable.
///
/// If audio initialization fails, a warning is logged and None is returned.
#[must_use]
pub fn try_create_player(disabled: bool) -> Option<RodioSoundPlayer> {
    match RodioSoundPlayer::new(disabled) {
        Ok(player) => Some(player),
        Err(e) => {
            warn!("Audio not available, sound disabled: {}", e);
            None
        }
    }
}
