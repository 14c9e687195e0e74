//! Core types for playback management

use castdeck_core::AlbumKey;
use serde::{Deserialize, Serialize};

/// Playback state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaybackState {
    /// No album selected, playback ended, or the sink gave up
    #[default]
    Stopped,

    /// Source assigned, waiting for sink metadata
    Loading,

    /// Currently playing
    Playing,

    /// Paused mid-track
    Paused,
}

/// Configuration for the playback controller
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaybackConfig {
    /// Wrap to the first track after the last one (default: true)
    #[serde(default = "default_true")]
    pub loop_enabled: bool,

    /// Forward play/loop/track-ended events to telemetry (default: true)
    #[serde(default = "default_true")]
    pub telemetry_enabled: bool,
}

fn default_true() -> bool {
    true
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            loop_enabled: true,
            telemetry_enabled: true,
        }
    }
}

/// Result of a `select_album` request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// The requested album was already current
    Unchanged,
    /// The requested album is now current
    Switched,
    /// No such album in the catalog; the current album was kept
    NotFound,
}

/// Result of a successful `play` transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayOutcome {
    /// The sink was handed a new source for the track at `index`
    Loaded { index: usize },
    /// Same track of the same album; the sink resumed without reloading
    Resumed { index: usize },
    /// Ran past the last track with looping disabled
    EndOfAlbum,
}

impl PlayOutcome {
    pub fn index(&self) -> Option<usize> {
        match self {
            PlayOutcome::Loaded { index } | PlayOutcome::Resumed { index } => Some(*index),
            PlayOutcome::EndOfAlbum => None,
        }
    }
}

/// Read-only snapshot of controller state handed to listeners
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaybackStatus {
    pub state: PlaybackState,
    /// `None` when no album is selected
    pub album: Option<AlbumKey>,
    pub track_index: Option<usize>,
    pub track_title: String,
    pub elapsed_seconds: f64,
    pub total_seconds: f64,
    pub loop_enabled: bool,
}
