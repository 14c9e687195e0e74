//! Host media-session integration
//!
//! When the sink has loaded a source, the controller publishes a media-info
//! descriptor so the cast/media-session layer can show what is playing.

use serde::{Deserialize, Serialize};

/// Display metadata published with the media info
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaMetadata {
    pub title: String,
    pub track_number: Option<u32>,
    pub band_id: String,
    pub album_id: String,
}

/// Media-info descriptor for the current source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaInfo {
    /// Media locator being played
    pub content_id: String,
    /// Duration in seconds as reported by the sink (0 when unknown)
    pub duration: f64,
    pub metadata: MediaMetadata,
}

/// Consumer of the controller's public state
pub trait SessionHost {
    fn set_media_information(&mut self, info: MediaInfo);

    /// Push the current status to connected senders
    fn broadcast_status(&mut self);
}

/// Host that publishes nowhere
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSessionHost;

impl SessionHost for NullSessionHost {
    fn set_media_information(&mut self, _info: MediaInfo) {}

    fn broadcast_status(&mut self) {}
}
