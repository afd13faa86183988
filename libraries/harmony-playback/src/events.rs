//! Player events
//!
//! Change notifications for the presentation layer. The player never calls
//! into rendering code; it queues events which the embedder drains with
//! [`crate::Player::take_events`] after every operation.

use crate::types::{PlaybackState, RepeatMode};
use harmony_core::TrackId;
use serde::{Deserialize, Serialize};

/// Events emitted by the player
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PlayerEvent {
    /// The loaded track changed
    TrackChanged {
        /// Queue index of the new track
        index: usize,
        /// Identifier of the new track
        track_id: TrackId,
    },

    /// Playback state changed (empty / paused / playing)
    StateChanged { state: PlaybackState },

    /// Queue contents changed (tracks added, removed or replaced)
    QueueChanged { length: usize },

    /// Playlist set or membership changed
    PlaylistsChanged,

    /// Shuffle or repeat mode changed
    ModesChanged { shuffle: bool, repeat: RepeatMode },

    /// Periodic position report, forwarded from the engine
    PositionUpdate {
        position_secs: f64,
        duration_secs: f64,
    },

    /// Volume changed
    VolumeChanged { level: u8 },

    /// Non-fatal error to surface to the user
    Error { message: String },
}
