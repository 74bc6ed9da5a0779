use serde::Deserialize;

/// Identifier used by an album's track list to reference a song
pub type TrackId = u64;

/// A catalog entry associating a track identifier with a display name
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Song {
    /// Identifier matched against album track lists
    pub id: TrackId,
    /// Display name
    #[serde(alias = "song")]
    pub name: String,
}

/// An album and the ordered identifiers of its tracks
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Album {
    /// Album name, used as the key of the result mapping
    #[serde(alias = "album")]
    pub name: String,
    /// Track identifiers in album order, duplicates allowed
    #[serde(alias = "tracks", default)]
    pub track_ids: Vec<TrackId>,
}

impl Song {
    /// Creates a song record
    #[must_use]
    pub fn new(id: TrackId, name: impl Into<String>) -> Self {
        Song {
            id,
            name: name.into(),
        }
    }
}

impl Album {
    /// Creates an album record
    #[must_use]
    pub fn new(name: impl Into<String>, track_ids: Vec<TrackId>) -> Self {
        Album {
            name: name.into(),
            track_ids,
        }
    }

    /// Track identifiers of this album
    #[must_use]
    pub fn tracks(&self) -> &[TrackId] {
        &self.track_ids
    }
}
