//! Raw album data as handed over by the catalog loader
//!
//! Field names follow the embedded release JSON the receiver is fed
//! (`artist`, `artFullsizeUrl`, `current`, `trackinfo`, ...). Every field is
//! optional on the wire; missing data degrades to empty values.

use super::{AlbumId, BandId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Format key preferred when a track offers several encodings
pub const DEFAULT_PREFERRED_FORMAT: &str = "mp3-128";

/// Raw album blob
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawAlbum {
    #[serde(default)]
    pub artist: Option<String>,

    #[serde(default)]
    pub art_fullsize_url: Option<String>,

    /// Canonical release URL
    #[serde(default)]
    pub url: Option<String>,

    #[serde(default)]
    pub current: RawRelease,

    #[serde(default, rename = "trackinfo")]
    pub track_info: Vec<RawTrack>,
}

/// Current-release descriptor
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawRelease {
    #[serde(default)]
    pub id: AlbumId,

    #[serde(default)]
    pub band_id: BandId,

    #[serde(default)]
    pub title: Option<String>,
}

/// Track descriptor
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawTrack {
    #[serde(default)]
    pub file: Option<RawFile>,

    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub track_num: Option<u32>,
}

/// Media locator: either a plain URL or a map of format name to URL
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawFile {
    Url(String),
    Formats(BTreeMap<String, String>),
}

impl RawFile {
    /// Pick a locator, preferring `preferred_format` when several exist.
    ///
    /// Empty locators count as absent.
    pub fn locator(&self, preferred_format: &str) -> Option<&str> {
        let picked = match self {
            RawFile::Url(url) => Some(url.as_str()),
            RawFile::Formats(formats) => formats
                .get(preferred_format)
                .filter(|url| !url.trim().is_empty())
                .or_else(|| formats.values().find(|url| !url.trim().is_empty()))
                .map(String::as_str),
        };

        picked.map(str::trim).filter(|url| !url.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_blob() {
        let json = r#"{
            "artist": "Artist",
            "artFullsizeUrl": "https://img.example/a.jpg",
            "url": "https://artist.example/album/x",
            "current": { "id": 10, "band_id": 1, "title": "Record" },
            "trackinfo": [
                { "file": { "mp3-128": "https://cdn.example/1.mp3" }, "title": "One", "track_num": 1 },
                { "file": null, "title": "Two", "track_num": 2 }
            ]
        }"#;

        let raw: RawAlbum = serde_json::from_str(json).unwrap();

        assert_eq!(raw.artist.as_deref(), Some("Artist"));
        assert_eq!(raw.current.band_id.as_str(), "1");
        assert_eq!(raw.current.id.as_str(), "10");
        assert_eq!(raw.track_info.len(), 2);
        assert!(raw.track_info[1].file.is_none());
    }

    #[test]
    fn missing_fields_default() {
        let raw: RawAlbum = serde_json::from_str("{}").unwrap();
        assert_eq!(raw, RawAlbum::default());
    }

    #[test]
    fn locator_prefers_requested_format() {
        let file: RawFile =
            serde_json::from_str(r#"{ "flac": "b.flac", "mp3-128": "a.mp3" }"#).unwrap();

        assert_eq!(file.locator("mp3-128"), Some("a.mp3"));
        assert_eq!(file.locator("opus"), Some("b.flac"));
    }

    #[test]
    fn empty_locators_are_absent() {
        assert_eq!(RawFile::Url("  ".into()).locator(DEFAULT_PREFERRED_FORMAT), None);

        let file: RawFile = serde_json::from_str(r#"{ "mp3-128": "" }"#).unwrap();
        assert_eq!(file.locator(DEFAULT_PREFERRED_FORMAT), None);
    }
}
