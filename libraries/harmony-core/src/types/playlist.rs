/// Playlist domain types
use crate::types::{PlaylistId, TrackId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A named, user-curated list of track references
///
/// Playlists reference tracks by identifier; the referenced track records
/// live in the queue. Removing a track from the queue prunes it from every
/// playlist, so these references never dangle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Playlist {
    /// Unique playlist identifier
    pub id: PlaylistId,

    /// Playlist name
    pub name: String,

    /// Optional free-form description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Ordered track references
    #[serde(default)]
    pub tracks: Vec<TrackId>,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Display color tag
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl Playlist {
    /// Create an empty playlist with a generated identifier
    ///
    /// Name validation is the caller's job; this constructor stores whatever
    /// it is given.
    pub fn new(name: impl Into<String>, description: Option<String>) -> Self {
        Self {
            id: PlaylistId::generate(),
            name: name.into(),
            description,
            tracks: Vec::new(),
            created_at: Utc::now(),
            color: None,
        }
    }

    /// Whether the playlist references the given track
    pub fn contains(&self, track_id: &TrackId) -> bool {
        self.tracks.contains(track_id)
    }

    /// Number of referenced tracks
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Whether the playlist references no tracks
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_playlist_is_empty() {
        let playlist = Playlist::new("Favorites", None);
        assert!(playlist.is_empty());
        assert_eq!(playlist.len(), 0);
        assert!(playlist.created_at <= Utc::now());
    }

    #[test]
    fn contains_reports_membership() {
        let mut playlist = Playlist::new("Favorites", Some("desc".into()));
        let id = TrackId::new("t-1");
        assert!(!playlist.contains(&id));
        playlist.tracks.push(id.clone());
        assert!(playlist.contains(&id));
    }
}
