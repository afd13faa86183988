//! Core types for playback management

use serde::{Deserialize, Serialize};

/// Playback state
///
/// `Paused` and `Playing` imply a loaded cursor; `Empty` means no track is
/// loaded (empty queue or cursor cleared).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaybackState {
    /// No track loaded
    Empty,

    /// Track loaded, output stopped
    Paused,

    /// Track loaded, output running
    Playing,
}

/// Repeat mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RepeatMode {
    /// Stop when the queue ends
    Off,

    /// Loop the current track only
    One,

    /// Wrap around the queue
    All,
}

impl RepeatMode {
    /// Next mode in the off -> one -> all -> off cycle
    pub fn cycle(self) -> Self {
        match self {
            RepeatMode::Off => RepeatMode::One,
            RepeatMode::One => RepeatMode::All,
            RepeatMode::All => RepeatMode::Off,
        }
    }
}

/// Direction for cursor advancement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Previous,
}

/// Configuration for the player
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerConfig {
    /// Persist shuffle/repeat across sessions (default: false, modes reset
    /// on reload)
    pub persist_modes: bool,

    /// Initial volume (0-100, default: 80)
    pub volume: u8,

    /// Initial shuffle flag (default: off)
    pub shuffle: bool,

    /// Initial repeat mode (default: off)
    pub repeat: RepeatMode,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            persist_modes: false,
            volume: 80,
            shuffle: false,
            repeat: RepeatMode::Off,
        }
    }
}
