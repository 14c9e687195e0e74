//! castdeck Core
//!
//! Catalog types for the castdeck receiver: albums, their ordered tracks,
//! identities, and the catalog that holds them for the session.
//!
//! Lookups never fail. A missing album or an out-of-range track resolves to
//! a sentinel value ([`Album::empty`], [`Track::null`]) that answers every
//! accessor with empty data.
//!
//! # Example
//!
//! ```rust
//! use castdeck_core::{Album, Catalog};
//!
//! let album = Album::from_json(r#"{
//!     "artist": "The Band",
//!     "current": { "id": 10, "band_id": 1, "title": "Record" },
//!     "trackinfo": [{ "file": "a.mp3", "title": "A", "track_num": 1 }]
//! }"#).unwrap();
//!
//! let mut catalog = Catalog::new();
//! catalog.register(album);
//!
//! let album = catalog.lookup("1", "10").unwrap();
//! assert_eq!(album.track(0).file(), Some("a.mp3"));
//! assert!(album.track(5).is_null());
//! ```

#![forbid(unsafe_code)]

pub mod catalog;
pub mod error;
pub mod types;

pub use catalog::{Catalog, Registration};
pub use error::{CoreError, Result};
pub use types::{Album, AlbumId, AlbumKey, BandId, RawAlbum, Track, EMPTY_ALBUM, NULL_TRACK};
