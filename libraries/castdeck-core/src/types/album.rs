//! Album types

use super::raw::{RawAlbum, DEFAULT_PREFERRED_FORMAT};
use super::{AlbumId, AlbumKey, BandId, Track, NULL_TRACK};
use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};

/// Sentinel for "no album selected"
pub static EMPTY_ALBUM: Album = Album {
    key: AlbumKey::EMPTY,
    artist_name: String::new(),
    title: String::new(),
    artwork_url: String::new(),
    source_url: String::new(),
    tracks: Vec::new(),
    empty: true,
};

/// An album and its ordered tracks
///
/// Albums are immutable once loaded. An album built from absent data is the
/// empty sentinel: it has an empty identity and no tracks, but is still a
/// regular value that every accessor answers for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Album {
    key: AlbumKey,
    artist_name: String,
    title: String,
    artwork_url: String,
    source_url: String,
    tracks: Vec<Track>,
    empty: bool,
}

impl Album {
    /// Build an album from a raw blob; `None` yields the empty sentinel.
    pub fn load(raw: Option<RawAlbum>) -> Self {
        Self::load_with_format(raw, DEFAULT_PREFERRED_FORMAT)
    }

    /// Like [`Album::load`], choosing `preferred_format` when tracks offer
    /// several encodings.
    pub fn load_with_format(raw: Option<RawAlbum>, preferred_format: &str) -> Self {
        let Some(raw) = raw else {
            return EMPTY_ALBUM.clone();
        };

        let tracks = raw
            .track_info
            .iter()
            .enumerate()
            .map(|(index, track)| Track::from_raw(index, track, preferred_format))
            .collect();

        Self {
            key: AlbumKey {
                band_id: raw.current.band_id,
                album_id: raw.current.id,
            },
            artist_name: raw.artist.unwrap_or_default(),
            title: raw.current.title.unwrap_or_default(),
            artwork_url: raw.art_fullsize_url.unwrap_or_default(),
            source_url: raw.url.unwrap_or_default(),
            tracks,
            empty: false,
        }
    }

    /// Parse a raw JSON blob. A JSON `null` yields the empty sentinel.
    pub fn from_json(json: &str) -> Result<Self> {
        Self::from_json_with_format(json, DEFAULT_PREFERRED_FORMAT)
    }

    pub fn from_json_with_format(json: &str, preferred_format: &str) -> Result<Self> {
        if preferred_format.trim().is_empty() {
            return Err(CoreError::invalid_input("preferred format must not be empty"));
        }
        let raw: Option<RawAlbum> = serde_json::from_str(json)?;
        Ok(Self::load_with_format(raw, preferred_format))
    }

    /// Assemble an album from already-built parts
    pub fn new(
        key: AlbumKey,
        artist_name: impl Into<String>,
        title: impl Into<String>,
        tracks: Vec<Track>,
    ) -> Self {
        Self {
            key,
            artist_name: artist_name.into(),
            title: title.into(),
            artwork_url: String::new(),
            source_url: String::new(),
            tracks,
            empty: false,
        }
    }

    #[must_use]
    pub fn with_urls(mut self, artwork_url: impl Into<String>, source_url: impl Into<String>) -> Self {
        self.artwork_url = artwork_url.into();
        self.source_url = source_url.into();
        self
    }

    /// The empty album sentinel
    pub fn empty() -> &'static Album {
        &EMPTY_ALBUM
    }

    pub fn is_empty(&self) -> bool {
        self.empty
    }

    pub fn key(&self) -> &AlbumKey {
        &self.key
    }

    pub fn band_id(&self) -> &BandId {
        &self.key.band_id
    }

    pub fn album_id(&self) -> &AlbumId {
        &self.key.album_id
    }

    pub fn artist_name(&self) -> &str {
        &self.artist_name
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn artwork_url(&self) -> &str {
        &self.artwork_url
    }

    /// Canonical URL of the release page
    pub fn source_url(&self) -> &str {
        &self.source_url
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// Number of tracks, playable or not
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn get(&self, index: usize) -> Option<&Track> {
        self.tracks.get(index)
    }

    /// Track at `index`, or the null track when out of range
    pub fn track(&self, index: usize) -> &Track {
        self.get(index).unwrap_or(&NULL_TRACK)
    }

    /// Identity comparison against a `(band, album)` pair
    pub fn is_same_album(&self, band_id: &str, album_id: &str) -> bool {
        self.key.matches(band_id, album_id)
    }

    /// True iff at least one track has a media locator
    pub fn has_playable_file(&self) -> bool {
        self.tracks.iter().any(Track::is_playable)
    }

    pub fn playable_count(&self) -> usize {
        self.tracks.iter().filter(|t| t.is_playable()).count()
    }

    /// `"<artist> / <title>"`, used as the telemetry label
    pub fn description(&self) -> String {
        format!("{} / {}", self.artist_name, self.title)
    }
}

impl Default for Album {
    fn default() -> Self {
        EMPTY_ALBUM.clone()
    }
}
