/// Track domain type
use super::raw::RawTrack;
use serde::{Deserialize, Serialize};

/// Sentinel returned by lookups that miss
pub static NULL_TRACK: Track = Track {
    index: None,
    number: None,
    title: String::new(),
    file: None,
};

/// A track within an album
///
/// A track without a media locator is kept (not dropped) so that indices
/// stay aligned with the source ordering; playback skips over it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    /// Position within the album (None only for the null track)
    index: Option<usize>,

    /// Display track number from the source data
    number: Option<u32>,

    title: String,

    /// Media locator (None means unplayable)
    file: Option<String>,
}

impl Track {
    /// Create a track at `index`. Empty locators are stored as absent.
    pub fn new(index: usize, title: impl Into<String>, file: Option<String>) -> Self {
        Self {
            index: Some(index),
            number: None,
            title: title.into(),
            file: file
                .map(|f| f.trim().to_string())
                .filter(|f| !f.is_empty()),
        }
    }

    /// Build from a raw track descriptor
    pub fn from_raw(index: usize, raw: &RawTrack, preferred_format: &str) -> Self {
        let file = raw
            .file
            .as_ref()
            .and_then(|f| f.locator(preferred_format))
            .map(str::to_string);

        Self::new(index, raw.title.clone().unwrap_or_default(), file).with_number(raw.track_num)
    }

    /// Set the display track number
    #[must_use]
    pub fn with_number(mut self, number: Option<u32>) -> Self {
        self.number = number;
        self
    }

    /// The null track sentinel
    pub fn null() -> &'static Track {
        &NULL_TRACK
    }

    pub fn is_null(&self) -> bool {
        self.index.is_none()
    }

    pub fn index(&self) -> Option<usize> {
        self.index
    }

    /// Display number: the source's track number, else the 1-based position
    pub fn number(&self) -> Option<u32> {
        self.number
            .or_else(|| self.index.map(|i| u32::try_from(i + 1).unwrap_or(u32::MAX)))
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn file(&self) -> Option<&str> {
        self.file.as_deref()
    }

    /// True if the track has a media locator
    pub fn is_playable(&self) -> bool {
        self.file.is_some()
    }
}
