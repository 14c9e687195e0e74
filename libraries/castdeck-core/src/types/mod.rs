mod album;
mod ids;
pub mod raw;
mod track;

pub use album::{Album, EMPTY_ALBUM};
pub use ids::{normalize_id, AlbumId, AlbumKey, BandId};
pub use raw::{RawAlbum, RawFile, RawRelease, RawTrack, DEFAULT_PREFERRED_FORMAT};
pub use track::{Track, NULL_TRACK};
