//! Album catalog keyed by `(band, album)` identity
//!
//! Entries are added as the loader delivers them and live for the rest of
//! the receiver session. Re-registering a key replaces the stored album so
//! refreshed metadata wins.

use crate::types::{Album, AlbumKey};
use std::collections::HashMap;
use tracing::debug;

/// Outcome of [`Catalog::register`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Registration {
    /// First album stored under this key
    Inserted,
    /// An album with the same key was replaced
    Replaced,
}

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    albums: HashMap<AlbumKey, Album>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite the entry for `album.key()`
    pub fn register(&mut self, album: Album) -> Registration {
        let key = album.key().clone();
        debug!(album = %key, tracks = album.len(), "Registering album");

        match self.albums.insert(key, album) {
            Some(_) => Registration::Replaced,
            None => Registration::Inserted,
        }
    }

    /// Look up by raw identity strings (normalized before comparison)
    pub fn lookup(&self, band_id: &str, album_id: &str) -> Option<&Album> {
        self.get(&AlbumKey::new(band_id, album_id))
    }

    pub fn get(&self, key: &AlbumKey) -> Option<&Album> {
        self.albums.get(key)
    }

    pub fn contains(&self, key: &AlbumKey) -> bool {
        self.albums.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.albums.len()
    }

    pub fn is_empty(&self) -> bool {
        self.albums.is_empty()
    }

    /// Iterate albums in no particular order
    pub fn iter(&self) -> impl Iterator<Item = &Album> {
        self.albums.values()
    }
}
