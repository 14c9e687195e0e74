//! Common test utilities and fixtures
#![allow(dead_code)]

use std::path::PathBuf;
use tempfile::TempDir;

/// Write `contents` to `name` inside `dir`
pub fn write_file(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

/// Album JSON fixtures
pub mod fixtures {
    /// Band 1, album 10: three tracks, the middle one without a file
    pub const GAPPED_ALBUM: &str = r#"{
        "artist": "The Band",
        "artFullsizeUrl": "https://img.example/a10_10.jpg",
        "url": "https://theband.example/album/record",
        "current": { "id": 10, "band_id": 1, "title": "Record" },
        "trackinfo": [
            { "file": { "mp3-128": "https://cdn.example/a.mp3" }, "title": "Opening", "track_num": 1 },
            { "file": null, "title": "Unreleased", "track_num": 2 },
            { "file": { "mp3-128": "https://cdn.example/c.mp3" }, "title": "Closing", "track_num": 3 }
        ]
    }"#;

    /// Band 1, album 11 and band 2, album 20
    pub const TWO_ALBUMS: &str = r#"[
        {
            "artist": "The Band",
            "current": { "id": "11", "band_id": "1", "title": "Second" },
            "trackinfo": [{ "file": "https://cdn.example/s1.mp3", "title": "S1", "track_num": 1 }]
        },
        {
            "artist": "Other Band",
            "current": { "id": 20, "band_id": 2, "title": "Debut" },
            "trackinfo": [
                { "file": "https://cdn.example/d1.mp3", "title": "D1", "track_num": 1 },
                { "file": "https://cdn.example/d2.mp3", "title": "D2", "track_num": 2 }
            ]
        }
    ]"#;

    /// An album with nothing to play
    pub const SILENT_ALBUM: &str = r#"{
        "current": { "id": 30, "band_id": 3, "title": "Silence" },
        "trackinfo": [{ "file": "", "title": "Nothing", "track_num": 1 }]
    }"#;
}
