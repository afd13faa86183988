//! Harmony Player - Core Types
//!
//! Shared building blocks for the Harmony Player crates:
//! - Domain types (tracks, playlists, users, rooms)
//! - The `HarmonyError` taxonomy used across the workspace
//! - The `KeyValueStore` persistence trait and its well-known keys
//!
//! This crate is deliberately free of I/O, async runtimes and HTTP so it can
//! be depended on by every other crate in the workspace.

pub mod error;
pub mod storage;
pub mod types;

pub use error::{HarmonyError, Result};
pub use storage::{shared_store, KeyValueStore, MemoryStore, SharedStore};
pub use types::{
    Playlist, PlaylistId, Room, RoomMember, SourceRef, Track, TrackId, UserProfile,
};
