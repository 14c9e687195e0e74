//! Error types for playback management

use castdeck_core::{AlbumId, BandId, CoreError};
use thiserror::Error;

/// Playback errors
#[derive(Debug, Error)]
pub enum PlaybackError {
    /// The selected album has no track with a media locator. Nothing
    /// coherent can be played, so the receiver session should end.
    #[error("Album {band_id}/{album_id} has no playable tracks")]
    NoPlayableTracks { band_id: BandId, album_id: AlbumId },

    /// Invalid seek position
    #[error("Invalid seek position: {0}")]
    InvalidSeekPosition(f64),

    /// Catalog error
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl PlaybackError {
    /// True for errors that should end the receiver session
    pub fn is_fatal(&self) -> bool {
        matches!(self, PlaybackError::NoPlayableTracks { .. })
    }
}

/// Result type for playback operations
pub type Result<T> = std::result::Result<T, PlaybackError>;
