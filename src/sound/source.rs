//! Sound source selection.
//!
//! The completion sound is either the built-in synthesized chime or an audio
//! file supplied by the user.

use std::path::{Path, PathBuf};

use super::error::SoundError;

/// Audio file extensions rodio can decode with its default features.
const SUPPORTED_EXTENSIONS: &[&str] = &["wav", "mp3", "flac", "ogg"];

/// Represents the source of a sound to be played.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SoundSource {
    /// An audio file on disk.
    File {
        /// Display name (the file stem).
        name: String,
        /// Full path to the file.
        path: PathBuf,
    },
    /// The built-in synthesized chime.
    Chime,
}

impl SoundSource {
    /// Creates a file source without checking the path.
    #[must_use]
    pub fn file(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self::File { name, path }
    }

    /// Creates a file source after checking that the file exists and has a
    /// supported extension.
    ///
    /// # Errors
    ///
    /// Returns `SoundError::FileNotFound` or `SoundError::UnsupportedFormat`.
    pub fn file_validated(path: impl AsRef<Path>) -> Result<Self, SoundError> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(SoundError::FileNotFound(path.display().to_string()));
        }
        let supported = path
            .extension()
            .map(|ext| ext.to_string_lossy().to_lowercase())
            .is_some_and(|ext| SUPPORTED_EXTENSIONS.contains(&ext.as_str()));
        if !supported {
            return Err(SoundError::UnsupportedFormat(path.display().to_string()));
        }
        Ok(Self::file(path))
    }

    /// Returns the name of the sound source.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::File { name, .. } => name,
            Self::Chime => "chime",
        }
    }

    /// Returns the file path if this is a file source.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::File { path, .. } => Some(path),
            Self::Chime => None,
        }
    }
}

impl Default for SoundSource {
    fn default() -> Self {
        Self::Chime
    }
}
