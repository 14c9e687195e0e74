/// ID types for castdeck catalog entries
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Raw identifiers show up as JSON numbers or strings depending on the
/// producer. Both normalize to the same trimmed decimal string.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Number(serde_json::Number),
    Text(String),
}

impl RawId {
    fn normalize(self) -> String {
        match self {
            RawId::Number(n) => n.to_string(),
            RawId::Text(s) => normalize_id(&s),
        }
    }
}

/// Normalize an identity string for comparison
pub fn normalize_id(raw: &str) -> String {
    raw.trim().to_string()
}

fn deserialize_normalized<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<RawId>::deserialize(deserializer).map(|id| id.map(RawId::normalize).unwrap_or_default())
}

/// Band (artist account) identifier
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BandId(#[serde(deserialize_with = "deserialize_normalized")] String);

impl BandId {
    pub const EMPTY: Self = Self(String::new());

    /// Create a new band ID, normalizing the input
    pub fn new(id: impl AsRef<str>) -> Self {
        Self(normalize_id(id.as_ref()))
    }

    /// Get the inner string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BandId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Album (release) identifier
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AlbumId(#[serde(deserialize_with = "deserialize_normalized")] String);

impl AlbumId {
    pub const EMPTY: Self = Self(String::new());

    /// Create a new album ID, normalizing the input
    pub fn new(id: impl AsRef<str>) -> Self {
        Self(normalize_id(id.as_ref()))
    }

    /// Get the inner string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AlbumId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Catalog key: the `(band, album)` identity pair
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AlbumKey {
    pub band_id: BandId,
    pub album_id: AlbumId,
}

impl AlbumKey {
    /// Identity of the empty album sentinel
    pub const EMPTY: Self = Self {
        band_id: BandId::EMPTY,
        album_id: AlbumId::EMPTY,
    };

    pub fn new(band_id: impl AsRef<str>, album_id: impl AsRef<str>) -> Self {
        Self {
            band_id: BandId::new(band_id),
            album_id: AlbumId::new(album_id),
        }
    }

    /// True when this key names the given identity after normalization
    pub fn matches(&self, band_id: &str, album_id: &str) -> bool {
        self.band_id.as_str() == band_id.trim() && self.album_id.as_str() == album_id.trim()
    }
}

impl fmt::Display for AlbumKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.band_id, self.album_id)
    }
}
