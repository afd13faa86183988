//! Track domain types

use crate::types::TrackId;
use serde::{Deserialize, Serialize};

/// Reference to playable media
///
/// Either a fetchable URL or an opaque data reference handed to the playback
/// engine as-is (the original deployment stored uploaded audio as data URLs).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceRef {
    /// Remote or local URL
    Url(String),
    /// Opaque embedded data reference
    Data(String),
}

impl SourceRef {
    /// The raw reference string
    pub fn as_str(&self) -> &str {
        match self {
            SourceRef::Url(s) | SourceRef::Data(s) => s,
        }
    }
}

/// A single playable audio item with metadata
///
/// Tracks are embedded snapshots, not rows in a library database: the queue
/// carries full track records so playback never needs a lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    /// Unique, stable identifier
    pub id: TrackId,

    /// Track title
    pub title: String,

    /// Artist name
    pub artist: String,

    /// Duration in seconds
    pub duration_secs: f64,

    /// Playable source, absent for metadata-only entries
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<SourceRef>,

    /// Display color tag (pastel hex in the stock UI)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    /// Seeded sample data, as opposed to user-added tracks
    #[serde(default)]
    pub demo: bool,
}

impl Track {
    /// Create a user-added track with a generated identifier
    pub fn new(
        title: impl Into<String>,
        artist: impl Into<String>,
        duration_secs: f64,
        source: Option<SourceRef>,
    ) -> Self {
        Self {
            id: TrackId::generate(),
            title: title.into(),
            artist: artist.into(),
            duration_secs,
            source,
            color: None,
            demo: false,
        }
    }

    /// Whether the track has a source the engine can load
    pub fn is_playable(&self) -> bool {
        self.source.is_some()
    }
}
