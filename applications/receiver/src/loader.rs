//! Catalog loading from album JSON files
//!
//! A file holds either one album blob or an array of them. Blobs that are
//! JSON `null` are dropped with a warning rather than registered as empty
//! albums.

use crate::error::{ReceiverError, Result};
use castdeck_core::{Album, CoreError, RawAlbum};
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info, warn};

#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogFile {
    Many(Vec<Option<RawAlbum>>),
    One(Option<RawAlbum>),
}

impl CatalogFile {
    fn into_raw(self) -> Vec<Option<RawAlbum>> {
        match self {
            CatalogFile::Many(albums) => albums,
            CatalogFile::One(album) => vec![album],
        }
    }
}

/// Parse album JSON already in memory
pub fn parse_albums(json: &str, preferred_format: &str) -> std::result::Result<Vec<Album>, CoreError> {
    let file: CatalogFile = serde_json::from_str(json)?;

    let albums = file
        .into_raw()
        .into_iter()
        .map(|raw| Album::load_with_format(raw, preferred_format))
        .filter(|album| {
            if album.is_empty() {
                warn!("Skipping null album entry");
            }
            !album.is_empty()
        })
        .collect();

    Ok(albums)
}

/// Read every album in the file at `path`
pub fn load_file(path: &Path, preferred_format: &str) -> Result<Vec<Album>> {
    debug!(path = %path.display(), "Reading catalog file");

    let json = std::fs::read_to_string(path).map_err(|e| ReceiverError::catalog(path, e))?;
    let albums = parse_albums(&json, preferred_format).map_err(|e| ReceiverError::catalog(path, e))?;

    for album in &albums {
        if !album.has_playable_file() {
            warn!(album = %album.key(), "Album has no playable tracks");
        }
    }

    info!(path = %path.display(), albums = albums.len(), "Catalog file loaded");
    Ok(albums)
}

/// Read all files in order. Later files win on duplicate album keys once
/// registered.
pub fn load_files<P: AsRef<Path>>(paths: &[P], preferred_format: &str) -> Result<Vec<Album>> {
    let mut albums = Vec::new();
    for path in paths {
        albums.extend(load_file(path.as_ref(), preferred_format)?);
    }
    Ok(albums)
}
