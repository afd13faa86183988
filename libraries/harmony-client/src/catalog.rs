//! Catalog abstraction
//!
//! The session layer talks to the remote catalog through this trait so it
//! can be exercised without a network (and so alternative backends can be
//! dropped in). [`crate::HarmonyClient`] is the HTTP implementation.

use crate::error::Result;
use crate::types::{JoinRoom, LoginSession, NewPlaylist, NewRoom, NewSong};
use async_trait::async_trait;
use harmony_core::{Playlist, PlaylistId, Room, Track, TrackId, UserProfile};

/// Remote catalog operations
///
/// All methods are best-effort from the caller's point of view: a network
/// failure degrades the session to its last-persisted local snapshot, it
/// never tears the session down.
#[async_trait(?Send)]
pub trait Catalog {
    /// Exchange a secret code for a session token and profile
    async fn login(&mut self, secret_code: &str) -> Result<LoginSession>;

    /// Install or clear the bearer token used for subsequent requests
    fn set_token(&mut self, token: Option<String>);

    /// Fetch the signed-in user's profile
    async fn get_profile(&self) -> Result<UserProfile>;

    /// Push profile changes to the server
    async fn update_profile(&self, profile: &UserProfile) -> Result<()>;

    /// Fetch the user's songs
    async fn get_songs(&self) -> Result<Vec<Track>>;

    /// Register an uploaded song
    async fn upload_song(&self, song: &NewSong) -> Result<Track>;

    /// Delete a song
    async fn delete_song(&self, id: &TrackId) -> Result<()>;

    /// Fetch the user's playlists
    async fn get_playlists(&self) -> Result<Vec<Playlist>>;

    /// Create a playlist
    async fn create_playlist(&self, playlist: &NewPlaylist) -> Result<Playlist>;

    /// Update a playlist's name/description
    async fn update_playlist(&self, id: &PlaylistId, playlist: &NewPlaylist) -> Result<Playlist>;

    /// Delete a playlist
    async fn delete_playlist(&self, id: &PlaylistId) -> Result<()>;

    /// Create a shared-listening room
    async fn create_room(&self, room: &NewRoom) -> Result<Room>;

    /// Join a shared-listening room by code
    async fn join_room(&self, join: &JoinRoom) -> Result<Room>;

    /// Fetch the seeded demo songs
    async fn get_demo_songs(&self) -> Result<Vec<Track>>;

    /// Probe server availability; false on any failure
    async fn health_check(&self) -> bool;
}
