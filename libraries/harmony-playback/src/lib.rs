//! Harmony Player - Playback Management
//!
//! Platform-agnostic queue and playback state management.
//!
//! This crate provides:
//! - The play queue (ordered tracks + cursor) and its mutation rules
//! - Shuffle and repeat modes (off / one / all)
//! - Playlist management (create, rename, delete, toggle membership, play)
//! - Snapshot persistence through a key-value store
//! - Change notifications for a presentation layer
//!
//! # Architecture
//!
//! `harmony-playback` is completely platform-agnostic: no audio backend, no
//! HTTP, no UI toolkit. The single media primitive is provided through the
//! [`PlaybackEngine`] trait and persistence through
//! [`harmony_core::KeyValueStore`]. All operations are synchronous and run
//! to completion; the only asynchronous boundary is the engine, which
//! re-enters the player through [`Player::handle_engine_event`].
//!
//! # Example
//!
//! ```rust
//! use harmony_core::{shared_store, MemoryStore, SourceRef, Track};
//! use harmony_playback::{NullEngine, Player, PlayerConfig};
//!
//! let store = shared_store(MemoryStore::new());
//! let mut player = Player::new(PlayerConfig::default(), Box::new(NullEngine), store);
//!
//! player.add_track(Track::new(
//!     "My Song",
//!     "Artist Name",
//!     180.0,
//!     Some(SourceRef::Url("https://example.com/song.mp3".into())),
//! ));
//!
//! player.load_track(0, true);
//! assert!(player.snapshot().playing);
//!
//! player.pause();
//! for event in player.take_events() {
//!     // forward to the presentation layer
//!     let _ = event;
//! }
//! ```

mod engine;
mod events;
mod manager;
mod persist;
mod queue;
mod shuffle;
pub mod types;

// Public exports
pub use engine::{EngineEvent, NullEngine, PlaybackEngine};
pub use events::PlayerEvent;
pub use manager::{Player, PlayerSnapshot};
pub use types::{Direction, PlaybackState, PlayerConfig, RepeatMode};
