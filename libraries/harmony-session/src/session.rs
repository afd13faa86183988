//! Session orchestration
//!
//! A `Session` owns the player, the store and the catalog client for one
//! signed-in (or guest) listener. Catalog calls are best-effort throughout:
//! failures are logged and the session keeps serving the last-persisted
//! local state.

use crate::demo;
use crate::theme::Theme;
use harmony_client::{Catalog, ClientError, JoinRoom, NewPlaylist, NewRoom, NewSong};
use harmony_core::storage::keys;
use harmony_core::{
    HarmonyError, PlaylistId, Result, Room, RoomMember, SharedStore, SourceRef, Track, TrackId,
    UserProfile,
};
use harmony_playback::{PlaybackEngine, Player, PlayerConfig, PlayerEvent};
use rand::distributions::Alphanumeric;
use rand::{thread_rng, Rng};
use tracing::{info, warn};

/// One listener's session: player + store + catalog
pub struct Session {
    store: SharedStore,
    player: Player,
    catalog: Box<dyn Catalog>,
    user: Option<UserProfile>,
    theme: Theme,
    room: Option<Room>,
    members: Vec<RoomMember>,
}

impl Session {
    /// Create a session over the given collaborators
    ///
    /// Starts empty; call [`Session::restore`] to bring back the persisted
    /// state, then [`Session::sync_demo_songs`] once the UI is up.
    pub fn new(
        store: SharedStore,
        engine: Box<dyn PlaybackEngine>,
        config: PlayerConfig,
        catalog: Box<dyn Catalog>,
    ) -> Self {
        let player = Player::new(config, engine, store.clone());
        Self {
            store,
            player,
            catalog,
            user: None,
            theme: Theme::default(),
            room: None,
            members: demo::demo_members(),
        }
    }

    // ===== Startup =====

    /// Restore the persisted session state
    ///
    /// Reads the queue, playlists, user profile, theme and token. Any
    /// malformed entry falls back to its default; a fresh store yields a
    /// demo-seeded guest session.
    pub fn restore(&mut self) {
        self.player.restore();

        self.user = self
            .read_key(keys::USER)
            .and_then(|raw| match serde_json::from_str(&raw) {
                Ok(user) => Some(user),
                Err(err) => {
                    warn!(error = %err, "discarding malformed stored profile");
                    None
                }
            });

        if let Some(raw) = self.read_key(keys::THEME) {
            self.theme = Theme::from_stored(&raw);
        }

        let token = self.read_key(keys::TOKEN);
        self.catalog.set_token(token);

        if self.player.queue_len() == 0 {
            self.player.seed_queue(demo::demo_tracks());
            self.player.seed_playlists(demo::demo_playlists());
        }

        self.sync_current_member();
    }

    /// Whether a user is signed in
    pub fn is_logged_in(&self) -> bool {
        self.user.is_some()
    }

    // ===== Auth & Profile =====

    /// Sign in with a secret code
    ///
    /// On success the token and profile are persisted so the next startup
    /// restores straight into the account.
    pub async fn login(&mut self, secret_code: &str) -> Result<UserProfile> {
        let secret_code = secret_code.trim();
        if secret_code.is_empty() {
            return Err(HarmonyError::validation("secret code must not be empty"));
        }

        let session = match self.catalog.login(secret_code).await {
            Ok(session) => session,
            Err(ClientError::AuthFailed(_)) => {
                return Err(HarmonyError::validation("invalid secret code"));
            }
            Err(err) => return Err(HarmonyError::network(err.to_string())),
        };

        self.write_key(keys::TOKEN, &session.token);
        self.persist_user(&session.user);
        self.user = Some(session.user.clone());
        self.sync_current_member();
        info!(nickname = %session.user.nickname, "signed in");
        Ok(session.user)
    }

    /// Sign out and reset to a demo-seeded guest session
    pub fn logout(&mut self) {
        for key in [keys::USER, keys::TOKEN, keys::QUEUE, keys::PLAYLISTS] {
            self.delete_key(key);
        }
        self.catalog.set_token(None);
        self.user = None;
        self.room = None;
        self.members = demo::demo_members();
        self.player.pause();
        self.player.seed_queue(demo::demo_tracks());
        self.player.seed_playlists(demo::demo_playlists());
        info!("signed out");
    }

    /// Update the profile's display fields
    pub async fn update_profile(
        &mut self,
        nickname: &str,
        avatar: &str,
        color: &str,
    ) -> Result<()> {
        let nickname = nickname.trim();
        if nickname.is_empty() {
            return Err(HarmonyError::validation("nickname must not be empty"));
        }
        let Some(user) = self.user.as_mut() else {
            return Err(HarmonyError::validation("no active profile"));
        };

        user.nickname = nickname.to_string();
        user.avatar = avatar.to_string();
        user.color = color.to_string();
        let updated = user.clone();

        self.persist_user(&updated);
        self.sync_current_member();

        if let Err(err) = self.catalog.update_profile(&updated).await {
            warn!(error = %err, "profile update not pushed to catalog");
        }
        Ok(())
    }

    // ===== Theme =====

    /// Current theme preference
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Set and persist the theme preference
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        self.write_key(keys::THEME, theme.as_str());
    }

    /// Flip between light and dark
    pub fn toggle_theme(&mut self) -> Theme {
        self.set_theme(self.theme.toggled());
        self.theme
    }

    // ===== Catalog Sync =====

    /// Refresh the demo queue from the catalog
    ///
    /// Only replaces the queue while it still holds nothing but seeded demo
    /// tracks; a queue the user has touched is left alone. Offline, an
    /// empty queue falls back to the built-in seed.
    pub async fn sync_demo_songs(&mut self) {
        if !self.player.queue_is_all_demo() {
            return;
        }
        match self.catalog.get_demo_songs().await {
            Ok(tracks) if !tracks.is_empty() => {
                info!(count = tracks.len(), "demo songs refreshed from catalog");
                self.player.replace_queue(tracks);
            }
            Ok(_) => {}
            Err(err) => {
                warn!(error = %err, "demo songs unavailable, using built-in seed");
                if self.player.queue_len() == 0 {
                    self.player.replace_queue(demo::demo_tracks());
                }
            }
        }
    }

    /// Pull songs and playlists from the catalog, best-effort
    ///
    /// Fetched songs replace the queue only when it is still empty or
    /// all-demo; fetched playlists replace the local set. Any failure keeps
    /// the last-persisted snapshot.
    pub async fn refresh_library(&mut self) {
        match self.catalog.get_songs().await {
            Ok(tracks) if !tracks.is_empty() && self.player.queue_is_all_demo() => {
                self.player.replace_queue(tracks);
            }
            Ok(_) => {}
            Err(err) => warn!(error = %err, "song refresh failed, keeping local snapshot"),
        }

        match self.catalog.get_playlists().await {
            Ok(playlists) if !playlists.is_empty() => self.player.set_playlists(playlists),
            Ok(_) => {}
            Err(err) => warn!(error = %err, "playlist refresh failed, keeping local snapshot"),
        }
    }

    /// Probe catalog availability
    pub async fn api_status(&self) -> bool {
        self.catalog.health_check().await
    }

    // ===== Songs =====

    /// Add an uploaded song to the queue
    ///
    /// The track gets a generated identifier and a pastel accent color, and
    /// is registered with the catalog best-effort. An empty artist becomes
    /// "Unknown Artist", mirroring the upload form's fallback.
    pub async fn add_song(
        &mut self,
        title: &str,
        artist: &str,
        duration_secs: f64,
        source: Option<SourceRef>,
    ) -> Result<TrackId> {
        let title = title.trim();
        if title.is_empty() {
            return Err(HarmonyError::validation("song title must not be empty"));
        }
        let artist = match artist.trim() {
            "" => "Unknown Artist",
            trimmed => trimmed,
        };

        let mut track = Track::new(title, artist, duration_secs, source);
        track.color = Some(demo::random_pastel_color());
        let id = track.id.clone();

        if let Err(err) = self.catalog.upload_song(&NewSong::from(&track)).await {
            warn!(error = %err, "song not registered with catalog");
        }

        self.player.add_track(track);
        Ok(id)
    }

    /// Remove a song from the queue and, best-effort, from the catalog
    pub async fn remove_song(&mut self, index: usize) -> Result<Track> {
        let removed = self.player.remove_track(index)?;
        if !removed.demo {
            if let Err(err) = self.catalog.delete_song(&removed.id).await {
                warn!(error = %err, "song not deleted from catalog");
            }
        }
        Ok(removed)
    }

    /// Create a playlist locally and, best-effort, on the catalog
    pub async fn create_playlist(
        &mut self,
        name: &str,
        description: Option<&str>,
    ) -> Result<PlaylistId> {
        let id = self.player.create_playlist(name, description)?;
        let request = NewPlaylist {
            name: name.trim().to_string(),
            description: description
                .map(str::trim)
                .filter(|d| !d.is_empty())
                .map(ToString::to_string),
        };
        if let Err(err) = self.catalog.create_playlist(&request).await {
            warn!(error = %err, "playlist not registered with catalog");
        }
        Ok(id)
    }

    // ===== Rooms =====

    /// Create a shared-listening room
    ///
    /// A blank join code gets a generated six-character one. Offline, the
    /// room exists locally so the session stays usable.
    pub async fn create_room(&mut self, name: &str, code: &str) -> Result<Room> {
        let name = name.trim();
        if name.is_empty() {
            return Err(HarmonyError::validation("room name must not be empty"));
        }

        let entered = code.trim();
        let code = if entered.is_empty() {
            generate_room_code()
        } else {
            entered.to_string()
        };
        let password = (!entered.is_empty()).then(|| entered.to_string());
        let host = self.host_nickname();

        let request = NewRoom {
            name: name.to_string(),
            code: code.clone(),
            password: password.clone(),
        };
        let mut room = match self.catalog.create_room(&request).await {
            Ok(room) => room,
            Err(err) => {
                warn!(error = %err, "room created locally only");
                Room {
                    id: uuid::Uuid::new_v4().to_string(),
                    name: name.to_string(),
                    code,
                    password,
                    host: host.clone(),
                    members: Vec::new(),
                }
            }
        };

        if room.members.is_empty() {
            room.members = self.members.clone();
        }
        info!(code = %room.code, "room ready");
        Ok(self.install_room(room))
    }

    /// Join a shared-listening room by code
    pub async fn join_room(&mut self, code: &str, password: &str) -> Result<Room> {
        let code = code.trim();
        if code.is_empty() {
            return Err(HarmonyError::validation("room code must not be empty"));
        }
        let password = match password.trim() {
            "" => None,
            p => Some(p.to_string()),
        };

        let request = JoinRoom {
            code: code.to_string(),
            password: password.clone(),
        };
        let room = match self.catalog.join_room(&request).await {
            Ok(room) => room,
            Err(err) => {
                warn!(error = %err, "joined a local stand-in room");
                demo::fallback_room(code, password, self.host_nickname())
            }
        };

        self.members = room.members.clone();
        Ok(self.install_room(room))
    }

    /// Leave the current room, keeping the local member list
    pub fn leave_room(&mut self) {
        self.room = None;
        self.members = demo::demo_members();
        self.sync_current_member();
    }

    // ===== Accessors =====

    /// The playback core, for transport and queue intents
    pub fn player(&self) -> &Player {
        &self.player
    }

    /// Mutable access to the playback core
    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    /// Signed-in user, if any
    pub fn user(&self) -> Option<&UserProfile> {
        self.user.as_ref()
    }

    /// Current room, if any
    pub fn room(&self) -> Option<&Room> {
        self.room.as_ref()
    }

    /// Current member list, the local user first when signed in
    pub fn members(&self) -> &[RoomMember] {
        &self.members
    }

    /// Drain pending player notifications
    pub fn take_events(&mut self) -> Vec<PlayerEvent> {
        self.player.take_events()
    }

    // ===== Internals =====

    fn install_room(&mut self, room: Room) -> Room {
        self.room = Some(room.clone());
        self.sync_current_member();
        self.room.clone().unwrap_or(room)
    }

    fn host_nickname(&self) -> String {
        self.user
            .as_ref()
            .map(|u| u.nickname.clone())
            .unwrap_or_else(|| "Guest".to_string())
    }

    fn sync_current_member(&mut self) {
        let Some(user) = self.user.as_ref() else {
            return;
        };
        let member = RoomMember::from(user);
        self.members.retain(|m| m.name != member.name);
        self.members.insert(0, member.clone());
        if let Some(room) = self.room.as_mut() {
            room.members.retain(|m| m.name != member.name);
            room.members.insert(0, member);
        }
    }

    fn persist_user(&mut self, user: &UserProfile) {
        match serde_json::to_string(user) {
            Ok(raw) => self.write_key(keys::USER, &raw),
            Err(err) => warn!(error = %err, "failed to serialize profile"),
        }
    }

    fn read_key(&self, key: &str) -> Option<String> {
        match self.store.borrow().get(key) {
            Ok(value) => value,
            Err(err) => {
                warn!(key, error = %err, "failed to read stored value");
                None
            }
        }
    }

    fn write_key(&mut self, key: &str, value: &str) {
        if let Err(err) = self.store.borrow_mut().set(key, value) {
            warn!(key, error = %err, "failed to persist value");
        }
    }

    fn delete_key(&mut self, key: &str) {
        if let Err(err) = self.store.borrow_mut().delete(key) {
            warn!(key, error = %err, "failed to delete stored value");
        }
    }
}

fn generate_room_code() -> String {
    thread_rng()
        .sample_iter(&Alphanumeric)
        .take(6)
        .map(char::from)
        .collect::<String>()
        .to_uppercase()
}
