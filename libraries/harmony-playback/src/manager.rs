//! Player - core orchestration
//!
//! Sole owner of the queue, the playlists and the playback cursor. Every
//! mutation funnels through here, persists a snapshot, and queues change
//! notifications for the presentation layer. Operations run to completion;
//! the engine re-enters through [`Player::handle_engine_event`] only.

use crate::{
    engine::{EngineEvent, PlaybackEngine},
    events::PlayerEvent,
    queue::Queue,
    shuffle::pick_shuffle_index,
    types::{Direction, PlaybackState, PlayerConfig, RepeatMode},
};
use harmony_core::{HarmonyError, Playlist, PlaylistId, Result, SharedStore, Track, TrackId};
use rand::thread_rng;
use std::cmp::Ordering;

/// Central playback and library state
///
/// Holds:
/// - The play queue and the cursor into it
/// - Playing flag, shuffle flag, repeat mode, volume
/// - The playlist set
/// - The pending change notifications
pub struct Player {
    // State
    queue: Queue,
    playlists: Vec<Playlist>,
    cursor: Option<usize>,
    playing: bool,

    // Modes
    shuffle: bool,
    repeat: RepeatMode,
    volume: u8,
    persist_modes: bool,

    // Collaborators
    engine: Box<dyn PlaybackEngine>,
    pub(crate) store: SharedStore,

    // Event queue for UI synchronization
    pending_events: Vec<PlayerEvent>,
}

/// Read-only view of the player state for rendering
#[derive(Debug, Clone)]
pub struct PlayerSnapshot {
    pub tracks: Vec<Track>,
    pub cursor: Option<usize>,
    pub state: PlaybackState,
    pub playing: bool,
    pub shuffle: bool,
    pub repeat: RepeatMode,
    pub volume: u8,
    pub playlists: Vec<Playlist>,
}

impl Player {
    /// Create a new player
    ///
    /// Starts with an empty queue; call [`Player::restore`] to load the
    /// persisted session state.
    pub fn new(config: PlayerConfig, mut engine: Box<dyn PlaybackEngine>, store: SharedStore) -> Self {
        let volume = config.volume.min(100);
        engine.set_volume(volume);

        Self {
            queue: Queue::new(),
            playlists: Vec::new(),
            cursor: None,
            playing: false,
            shuffle: config.shuffle,
            repeat: config.repeat,
            volume,
            persist_modes: config.persist_modes,
            engine,
            store,
            pending_events: Vec::new(),
        }
    }

    // ===== Playback Control =====

    /// Load the track at `index` into the engine
    ///
    /// An out-of-range index (including any index into an empty queue)
    /// clears the cursor and stops playback instead of erroring. A load
    /// issued while a previous one is still settling supersedes it.
    pub fn load_track(&mut self, index: usize, autoplay: bool) {
        let (track_id, source) = match self.queue.get(index) {
            Some(track) => (track.id.clone(), track.source.clone()),
            None => {
                self.reset_cursor();
                return;
            }
        };

        self.cursor = Some(index);

        let Some(source) = source else {
            // Metadata-only entry: keep the cursor, surface the problem
            if self.playing {
                self.engine.stop();
            }
            self.playing = false;
            self.emit(PlayerEvent::TrackChanged { index, track_id });
            self.emit(PlayerEvent::Error {
                message: "track has no playable source".to_string(),
            });
            self.emit(PlayerEvent::StateChanged {
                state: PlaybackState::Paused,
            });
            return;
        };

        self.engine.load(&source);
        self.emit(PlayerEvent::TrackChanged { index, track_id });

        if autoplay {
            self.start_engine();
        } else {
            self.playing = false;
            self.emit(PlayerEvent::StateChanged {
                state: PlaybackState::Paused,
            });
        }
    }

    /// Start or resume playback
    ///
    /// No-op when nothing is loaded or already playing. Engine rejection
    /// (autoplay policy, decode failure) is surfaced as an error event and
    /// leaves the cursor valid.
    pub fn play(&mut self) {
        if self.cursor.is_none() || self.queue.is_empty() || self.playing {
            return;
        }
        self.start_engine();
    }

    /// Pause playback
    pub fn pause(&mut self) {
        if !self.playing {
            return;
        }
        self.engine.stop();
        self.playing = false;
        self.emit(PlayerEvent::StateChanged {
            state: PlaybackState::Paused,
        });
    }

    /// Toggle between playing and paused
    ///
    /// With nothing loaded and a non-empty queue this starts the first
    /// track, matching the stock play button behavior.
    pub fn toggle_play(&mut self) {
        if self.cursor.is_none() {
            if !self.queue.is_empty() {
                self.load_track(0, true);
            }
            return;
        }
        if self.playing {
            self.pause();
        } else {
            self.play();
        }
    }

    /// Advance the cursor and play the resulting track
    ///
    /// Shuffle takes precedence over stepping; stepping past the end wraps
    /// only under repeat-all. Running off the end without repeat stops
    /// playback and leaves the cursor where it was; running off the front
    /// without repeat is a no-op.
    pub fn advance(&mut self, direction: Direction) {
        if self.queue.is_empty() {
            return;
        }
        let len = self.queue.len();

        let next = if self.shuffle {
            pick_shuffle_index(&mut thread_rng(), len, self.cursor)
        } else {
            let current = self.cursor.map_or(-1_i64, |c| c as i64);
            let stepped = match direction {
                Direction::Next => current + 1,
                Direction::Previous => current - 1,
            };

            if stepped >= len as i64 {
                match self.repeat {
                    RepeatMode::All => Some(0),
                    RepeatMode::Off | RepeatMode::One => {
                        self.pause();
                        None
                    }
                }
            } else if stepped < 0 {
                match self.repeat {
                    RepeatMode::All => Some(len - 1),
                    RepeatMode::Off | RepeatMode::One => None,
                }
            } else {
                Some(stepped as usize)
            }
        };

        if let Some(index) = next {
            self.load_track(index, true);
        }
    }

    /// Handle the end of the current track
    ///
    /// Repeat-one restarts from position zero; everything else behaves like
    /// pressing next.
    pub fn on_track_ended(&mut self) {
        if self.cursor.is_none() {
            // Stale completion after the queue was cleared
            return;
        }
        if self.repeat == RepeatMode::One {
            self.engine.seek(0.0);
            self.start_engine();
            return;
        }
        self.advance(Direction::Next);
    }

    /// Feed an engine completion back into the state machine
    pub fn handle_engine_event(&mut self, event: EngineEvent) {
        match event {
            EngineEvent::Ended => self.on_track_ended(),
            EngineEvent::MediaError(message) => {
                self.playing = false;
                self.emit(PlayerEvent::Error {
                    message: format!("media error: {message}"),
                });
                self.emit(PlayerEvent::StateChanged { state: self.state() });
            }
            EngineEvent::Position {
                position_secs,
                duration_secs,
            } => {
                if self.cursor.is_some() {
                    self.emit(PlayerEvent::PositionUpdate {
                        position_secs,
                        duration_secs,
                    });
                }
            }
        }
    }

    // ===== Seek & Volume =====

    /// Seek within the current track (seconds)
    pub fn seek_to(&mut self, position_secs: f64) -> Result<()> {
        if self.cursor.is_none() {
            return Err(HarmonyError::playback("no track loaded"));
        }
        self.engine.seek(position_secs.max(0.0));
        Ok(())
    }

    /// Seek within the current track (fraction of its duration)
    pub fn seek_to_percent(&mut self, percent: f32) -> Result<()> {
        let percent = f64::from(percent.clamp(0.0, 1.0));
        let duration = self
            .engine
            .duration()
            .ok_or_else(|| HarmonyError::playback("track duration unknown"))?;
        self.seek_to(duration * percent)
    }

    /// Set output volume (0-100)
    pub fn set_volume(&mut self, level: u8) {
        let level = level.min(100);
        if level == self.volume {
            return;
        }
        self.volume = level;
        self.engine.set_volume(level);
        self.emit(PlayerEvent::VolumeChanged { level });
    }

    // ===== Queue Management =====

    /// Append a track to the queue
    ///
    /// The first track added to an empty queue is loaded without autoplay,
    /// so the transport shows something sensible immediately.
    pub fn add_track(&mut self, track: Track) {
        self.queue.push(track);
        let length = self.queue.len();
        self.save_queue();
        self.emit(PlayerEvent::QueueChanged { length });
        if length == 1 {
            self.load_track(0, false);
        }
    }

    /// Remove the track at `index` from the queue
    ///
    /// The removed track is also pruned from every playlist that references
    /// it. Removing the current track stops playback and reloads whatever
    /// now occupies the nearest valid index (without autoplay); removing a
    /// track before the cursor shifts the cursor down without reloading.
    pub fn remove_track(&mut self, index: usize) -> Result<Track> {
        let removed = self
            .queue
            .remove(index)
            .ok_or_else(|| HarmonyError::validation(format!("queue index {index} out of range")))?;

        let mut pruned = false;
        for playlist in &mut self.playlists {
            let before = playlist.tracks.len();
            playlist.tracks.retain(|id| id != &removed.id);
            pruned |= playlist.tracks.len() != before;
        }

        if let Some(current) = self.cursor {
            match index.cmp(&current) {
                Ordering::Equal => {
                    if self.playing {
                        self.engine.stop();
                    }
                    self.playing = false;
                    if self.queue.is_empty() {
                        self.cursor = None;
                        self.emit(PlayerEvent::StateChanged {
                            state: PlaybackState::Empty,
                        });
                    } else {
                        self.load_track(index.min(self.queue.len() - 1), false);
                    }
                }
                Ordering::Less => self.cursor = Some(current - 1),
                Ordering::Greater => {}
            }
        }

        self.save_queue();
        self.save_playlists();
        self.emit(PlayerEvent::QueueChanged {
            length: self.queue.len(),
        });
        if pruned {
            self.emit(PlayerEvent::PlaylistsChanged);
        }
        Ok(removed)
    }

    /// Remove every track from the queue
    pub fn clear_queue(&mut self) {
        self.queue.clear();
        self.reset_cursor();
        self.save_queue();
        self.emit(PlayerEvent::QueueChanged { length: 0 });
    }

    /// Install queue contents without persisting
    ///
    /// Used by restore and demo seeding, where the stored snapshot is the
    /// source of truth and must not be rewritten.
    pub fn seed_queue(&mut self, tracks: Vec<Track>) {
        self.queue.replace(tracks);
        self.reset_cursor();
        self.emit(PlayerEvent::QueueChanged {
            length: self.queue.len(),
        });
    }

    /// Replace the queue contents and persist the result
    pub fn replace_queue(&mut self, tracks: Vec<Track>) {
        self.seed_queue(tracks);
        self.save_queue();
    }

    /// Install playlists without persisting
    ///
    /// Counterpart of [`Player::seed_queue`] for restore and demo seeding.
    pub fn seed_playlists(&mut self, playlists: Vec<Playlist>) {
        self.playlists = playlists;
        self.emit(PlayerEvent::PlaylistsChanged);
    }

    /// Replace the playlist set and persist the result
    pub fn set_playlists(&mut self, playlists: Vec<Playlist>) {
        self.playlists = playlists;
        self.save_playlists();
        self.emit(PlayerEvent::PlaylistsChanged);
    }

    // ===== Playlists =====

    /// Create a playlist
    ///
    /// The name must be non-empty after trimming.
    pub fn create_playlist(&mut self, name: &str, description: Option<&str>) -> Result<PlaylistId> {
        let name = Self::validated_name(name)?;
        let playlist = Playlist::new(name, normalized_description(description));
        let id = playlist.id.clone();
        self.playlists.push(playlist);
        self.save_playlists();
        self.emit(PlayerEvent::PlaylistsChanged);
        Ok(id)
    }

    /// Rename a playlist and update its description
    pub fn rename_playlist(
        &mut self,
        id: &PlaylistId,
        name: &str,
        description: Option<&str>,
    ) -> Result<()> {
        let name = Self::validated_name(name)?;
        let playlist = self
            .playlists
            .iter_mut()
            .find(|p| &p.id == id)
            .ok_or_else(|| HarmonyError::not_found("Playlist", id.as_str()))?;
        playlist.name = name;
        playlist.description = normalized_description(description);
        self.save_playlists();
        self.emit(PlayerEvent::PlaylistsChanged);
        Ok(())
    }

    /// Delete a playlist, no-op if absent
    pub fn delete_playlist(&mut self, id: &PlaylistId) {
        let before = self.playlists.len();
        self.playlists.retain(|p| &p.id != id);
        if self.playlists.len() != before {
            self.save_playlists();
            self.emit(PlayerEvent::PlaylistsChanged);
        }
    }

    /// Toggle a track's membership in a playlist
    ///
    /// Returns `true` when the track is referenced after the call. Applying
    /// the toggle twice restores the original membership and order of the
    /// other entries.
    pub fn toggle_track_in_playlist(
        &mut self,
        playlist_id: &PlaylistId,
        track_id: &TrackId,
    ) -> Result<bool> {
        let playlist = self
            .playlists
            .iter_mut()
            .find(|p| &p.id == playlist_id)
            .ok_or_else(|| HarmonyError::not_found("Playlist", playlist_id.as_str()))?;

        let now_present = if let Some(pos) = playlist.tracks.iter().position(|t| t == track_id) {
            playlist.tracks.remove(pos);
            false
        } else {
            playlist.tracks.push(track_id.clone());
            true
        };

        self.save_playlists();
        self.emit(PlayerEvent::PlaylistsChanged);
        Ok(now_present)
    }

    /// Replace the queue with a playlist's tracks and start playing
    ///
    /// Track references are resolved against the current queue's track set;
    /// references that no longer resolve are silently skipped. An absent or
    /// empty playlist is rejected without touching the queue.
    pub fn play_playlist(&mut self, id: &PlaylistId) -> Result<()> {
        let track_ids = match self.playlists.iter().find(|p| &p.id == id) {
            Some(playlist) if !playlist.is_empty() => playlist.tracks.clone(),
            Some(_) => return Err(HarmonyError::validation("playlist has no tracks")),
            None => return Err(HarmonyError::validation("unknown playlist")),
        };

        let resolved: Vec<Track> = track_ids
            .iter()
            .filter_map(|track_id| self.queue.find_by_id(track_id).cloned())
            .collect();

        self.queue.replace(resolved);
        self.cursor = None;
        self.save_queue();
        self.emit(PlayerEvent::QueueChanged {
            length: self.queue.len(),
        });
        self.load_track(0, true);
        Ok(())
    }

    // ===== Shuffle & Repeat =====

    /// Enable or disable shuffle
    pub fn set_shuffle(&mut self, enabled: bool) {
        if self.shuffle == enabled {
            return;
        }
        self.shuffle = enabled;
        self.emit(PlayerEvent::ModesChanged {
            shuffle: self.shuffle,
            repeat: self.repeat,
        });
        self.save_modes();
    }

    /// Cycle the repeat mode (off -> one -> all -> off)
    pub fn cycle_repeat(&mut self) -> RepeatMode {
        self.repeat = self.repeat.cycle();
        self.emit(PlayerEvent::ModesChanged {
            shuffle: self.shuffle,
            repeat: self.repeat,
        });
        self.save_modes();
        self.repeat
    }

    // ===== State Queries =====

    /// Current playback state
    pub fn state(&self) -> PlaybackState {
        match (self.cursor, self.playing) {
            (None, _) => PlaybackState::Empty,
            (Some(_), true) => PlaybackState::Playing,
            (Some(_), false) => PlaybackState::Paused,
        }
    }

    /// Currently loaded track
    pub fn current_track(&self) -> Option<&Track> {
        self.cursor.and_then(|index| self.queue.get(index))
    }

    /// Cursor position in the queue
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// All queue tracks in order
    pub fn queue_tracks(&self) -> &[Track] {
        self.queue.tracks()
    }

    /// Queue length
    pub fn queue_len(&self) -> usize {
        self.queue.len()
    }

    /// Whether every queued track is seeded demo data
    ///
    /// True for an empty queue as well; used to decide whether fetched demo
    /// songs may replace the queue.
    pub fn queue_is_all_demo(&self) -> bool {
        self.queue.tracks().iter().all(|t| t.demo)
    }

    /// All playlists
    pub fn playlists(&self) -> &[Playlist] {
        &self.playlists
    }

    /// Current shuffle flag
    pub fn shuffle(&self) -> bool {
        self.shuffle
    }

    /// Current repeat mode
    pub fn repeat(&self) -> RepeatMode {
        self.repeat
    }

    /// Current volume (0-100)
    pub fn volume(&self) -> u8 {
        self.volume
    }

    /// Read-only snapshot for rendering
    pub fn snapshot(&self) -> PlayerSnapshot {
        PlayerSnapshot {
            tracks: self.queue.tracks().to_vec(),
            cursor: self.cursor,
            state: self.state(),
            playing: self.playing,
            shuffle: self.shuffle,
            repeat: self.repeat,
            volume: self.volume,
            playlists: self.playlists.clone(),
        }
    }

    /// Drain pending change notifications
    pub fn take_events(&mut self) -> Vec<PlayerEvent> {
        std::mem::take(&mut self.pending_events)
    }

    // ===== Internals =====

    pub(crate) fn emit(&mut self, event: PlayerEvent) {
        self.pending_events.push(event);
    }

    pub(crate) fn install_restored(
        &mut self,
        tracks: Vec<Track>,
        playlists: Vec<Playlist>,
        modes: Option<(bool, RepeatMode)>,
    ) {
        self.queue.replace(tracks);
        self.playlists = playlists;
        self.cursor = None;
        self.playing = false;
        if let Some((shuffle, repeat)) = modes {
            self.shuffle = shuffle;
            self.repeat = repeat;
        }
        self.emit(PlayerEvent::QueueChanged {
            length: self.queue.len(),
        });
        self.emit(PlayerEvent::PlaylistsChanged);
    }

    pub(crate) fn persist_modes_enabled(&self) -> bool {
        self.persist_modes
    }

    pub(crate) fn modes(&self) -> (bool, RepeatMode) {
        (self.shuffle, self.repeat)
    }

    fn start_engine(&mut self) {
        match self.engine.start() {
            Ok(()) => {
                self.playing = true;
                self.emit(PlayerEvent::StateChanged {
                    state: PlaybackState::Playing,
                });
            }
            Err(err) => {
                // Non-fatal: the cursor stays valid, a later play() may succeed
                self.playing = false;
                self.emit(PlayerEvent::Error {
                    message: err.to_string(),
                });
                self.emit(PlayerEvent::StateChanged {
                    state: PlaybackState::Paused,
                });
            }
        }
    }

    fn reset_cursor(&mut self) {
        let changed = self.cursor.is_some() || self.playing;
        self.cursor = None;
        if self.playing {
            self.engine.stop();
        }
        self.playing = false;
        if changed {
            self.emit(PlayerEvent::StateChanged {
                state: PlaybackState::Empty,
            });
        }
    }

    fn validated_name(name: &str) -> Result<String> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(HarmonyError::validation("playlist name must not be empty"));
        }
        Ok(trimmed.to_string())
    }
}

fn normalized_description(description: Option<&str>) -> Option<String> {
    description
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .map(ToString::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use harmony_core::{shared_store, MemoryStore, SourceRef};

    fn create_test_track(id: &str, title: &str) -> Track {
        Track {
            id: TrackId::new(id),
            title: title.to_string(),
            artist: "Test Artist".to_string(),
            duration_secs: 180.0,
            source: Some(SourceRef::Url(format!("https://example.com/{id}.mp3"))),
            color: None,
            demo: false,
        }
    }

    fn player_with_tracks(ids: &[&str]) -> Player {
        let mut player = Player::new(
            PlayerConfig::default(),
            Box::new(crate::engine::NullEngine),
            shared_store(MemoryStore::new()),
        );
        for id in ids {
            player.add_track(create_test_track(id, id));
        }
        player
    }

    #[test]
    fn empty_player_starts_empty() {
        let player = player_with_tracks(&[]);
        assert_eq!(player.state(), PlaybackState::Empty);
        assert!(player.current_track().is_none());
    }

    #[test]
    fn first_added_track_loads_without_autoplay() {
        let player = player_with_tracks(&["a"]);
        assert_eq!(player.cursor(), Some(0));
        assert_eq!(player.state(), PlaybackState::Paused);
    }

    #[test]
    fn load_track_with_autoplay_plays() {
        let mut player = player_with_tracks(&["a", "b"]);
        player.load_track(1, true);
        assert_eq!(player.cursor(), Some(1));
        assert_eq!(player.state(), PlaybackState::Playing);
    }

    #[test]
    fn load_track_out_of_range_resets_cursor() {
        let mut player = player_with_tracks(&["a"]);
        player.load_track(0, true);
        player.load_track(9, true);
        assert_eq!(player.cursor(), None);
        assert_eq!(player.state(), PlaybackState::Empty);
    }

    #[test]
    fn play_and_pause_flip_state() {
        let mut player = player_with_tracks(&["a"]);
        player.play();
        assert_eq!(player.state(), PlaybackState::Playing);
        player.pause();
        assert_eq!(player.state(), PlaybackState::Paused);
    }

    #[test]
    fn play_with_empty_queue_is_noop() {
        let mut player = player_with_tracks(&[]);
        player.play();
        assert_eq!(player.state(), PlaybackState::Empty);
    }

    #[test]
    fn unplayable_track_keeps_cursor_but_not_playing() {
        let mut player = player_with_tracks(&[]);
        let mut track = create_test_track("a", "a");
        track.source = None;
        player.add_track(track);
        player.load_track(0, true);

        assert_eq!(player.cursor(), Some(0));
        assert_eq!(player.state(), PlaybackState::Paused);
        assert!(player
            .take_events()
            .iter()
            .any(|e| matches!(e, PlayerEvent::Error { .. })));
    }

    #[test]
    fn advance_next_at_end_without_repeat_stops() {
        let mut player = player_with_tracks(&["a", "b", "c"]);
        player.load_track(2, true);
        player.advance(Direction::Next);
        assert_eq!(player.cursor(), Some(2));
        assert_eq!(player.state(), PlaybackState::Paused);
    }

    #[test]
    fn advance_next_at_end_with_repeat_all_wraps() {
        let mut player = player_with_tracks(&["a", "b", "c"]);
        player.cycle_repeat();
        player.cycle_repeat(); // off -> one -> all
        player.load_track(2, true);
        player.advance(Direction::Next);
        assert_eq!(player.cursor(), Some(0));
        assert_eq!(player.state(), PlaybackState::Playing);
    }

    #[test]
    fn advance_previous_at_start_without_repeat_is_noop() {
        let mut player = player_with_tracks(&["a", "b"]);
        player.load_track(0, true);
        player.advance(Direction::Previous);
        assert_eq!(player.cursor(), Some(0));
        assert_eq!(player.state(), PlaybackState::Playing);
    }

    #[test]
    fn ended_with_repeat_one_restarts_same_track() {
        let mut player = player_with_tracks(&["a", "b"]);
        player.cycle_repeat(); // one
        player.load_track(0, true);
        player.handle_engine_event(EngineEvent::Ended);
        assert_eq!(player.cursor(), Some(0));
        assert_eq!(player.state(), PlaybackState::Playing);
    }

    #[test]
    fn media_error_forces_playing_off() {
        let mut player = player_with_tracks(&["a"]);
        player.play();
        player.handle_engine_event(EngineEvent::MediaError("decode failed".into()));
        assert_eq!(player.state(), PlaybackState::Paused);
        assert_eq!(player.cursor(), Some(0));
    }

    #[test]
    fn remove_current_track_reloads_neighbor_without_autoplay() {
        let mut player = player_with_tracks(&["a", "b"]);
        player.load_track(0, true);
        player.remove_track(0).unwrap();

        assert_eq!(player.queue_len(), 1);
        assert_eq!(player.cursor(), Some(0));
        assert_eq!(player.current_track().unwrap().id.as_str(), "b");
        assert_eq!(player.state(), PlaybackState::Paused);
    }

    #[test]
    fn remove_last_track_empties_cursor() {
        let mut player = player_with_tracks(&["a"]);
        player.load_track(0, true);
        player.remove_track(0).unwrap();
        assert_eq!(player.cursor(), None);
        assert_eq!(player.state(), PlaybackState::Empty);
    }

    #[test]
    fn remove_before_cursor_shifts_cursor_down() {
        let mut player = player_with_tracks(&["a", "b", "c"]);
        player.load_track(2, true);
        player.remove_track(0).unwrap();
        assert_eq!(player.cursor(), Some(1));
        assert_eq!(player.current_track().unwrap().id.as_str(), "c");
        assert_eq!(player.state(), PlaybackState::Playing);
    }

    #[test]
    fn remove_track_prunes_playlists() {
        let mut player = player_with_tracks(&["a", "b"]);
        let playlist_id = player.create_playlist("Mix", None).unwrap();
        player
            .toggle_track_in_playlist(&playlist_id, &TrackId::new("a"))
            .unwrap();
        player
            .toggle_track_in_playlist(&playlist_id, &TrackId::new("b"))
            .unwrap();

        player.remove_track(0).unwrap();

        let playlist = &player.playlists()[0];
        assert_eq!(playlist.tracks, vec![TrackId::new("b")]);
    }

    #[test]
    fn remove_out_of_range_errors_and_changes_nothing() {
        let mut player = player_with_tracks(&["a"]);
        let err = player.remove_track(5).unwrap_err();
        assert!(matches!(err, HarmonyError::Validation(_)));
        assert_eq!(player.queue_len(), 1);
    }

    #[test]
    fn create_playlist_rejects_blank_name() {
        let mut player = player_with_tracks(&[]);
        let err = player.create_playlist("   ", Some("desc")).unwrap_err();
        assert!(matches!(err, HarmonyError::Validation(_)));
        assert!(player.playlists().is_empty());
    }

    #[test]
    fn rename_missing_playlist_is_not_found() {
        let mut player = player_with_tracks(&[]);
        let err = player
            .rename_playlist(&PlaylistId::new("nope"), "Name", None)
            .unwrap_err();
        assert!(matches!(err, HarmonyError::NotFound { .. }));
    }

    #[test]
    fn delete_missing_playlist_is_noop() {
        let mut player = player_with_tracks(&[]);
        player.delete_playlist(&PlaylistId::new("nope"));
        assert!(player.playlists().is_empty());
    }

    #[test]
    fn toggle_twice_restores_membership() {
        let mut player = player_with_tracks(&["a", "b"]);
        let playlist_id = player.create_playlist("Mix", None).unwrap();
        let track = TrackId::new("b");

        assert!(player
            .toggle_track_in_playlist(&playlist_id, &track)
            .unwrap());
        assert!(!player
            .toggle_track_in_playlist(&playlist_id, &track)
            .unwrap());
        assert!(player.playlists()[0].tracks.is_empty());
    }

    #[test]
    fn play_empty_playlist_is_rejected() {
        let mut player = player_with_tracks(&["a"]);
        let playlist_id = player.create_playlist("Mix", None).unwrap();
        let err = player.play_playlist(&playlist_id).unwrap_err();
        assert!(matches!(err, HarmonyError::Validation(_)));
        assert_eq!(player.queue_len(), 1);
    }

    #[test]
    fn play_playlist_replaces_queue_and_autoplays() {
        let mut player = player_with_tracks(&["a", "b", "c"]);
        let playlist_id = player.create_playlist("Mix", None).unwrap();
        player
            .toggle_track_in_playlist(&playlist_id, &TrackId::new("c"))
            .unwrap();
        player
            .toggle_track_in_playlist(&playlist_id, &TrackId::new("a"))
            .unwrap();

        player.play_playlist(&playlist_id).unwrap();

        assert_eq!(player.queue_len(), 2);
        assert_eq!(player.queue_tracks()[0].id.as_str(), "c");
        assert_eq!(player.queue_tracks()[1].id.as_str(), "a");
        assert_eq!(player.cursor(), Some(0));
        assert_eq!(player.state(), PlaybackState::Playing);
    }

    #[test]
    fn play_playlist_skips_unresolvable_references() {
        let mut player = player_with_tracks(&["a", "b"]);
        let playlist_id = player.create_playlist("Mix", None).unwrap();
        player
            .toggle_track_in_playlist(&playlist_id, &TrackId::new("a"))
            .unwrap();
        player
            .toggle_track_in_playlist(&playlist_id, &TrackId::new("ghost"))
            .unwrap();

        player.play_playlist(&playlist_id).unwrap();

        assert_eq!(player.queue_len(), 1);
        assert_eq!(player.queue_tracks()[0].id.as_str(), "a");
    }

    #[test]
    fn volume_clamps_to_hundred() {
        let mut player = player_with_tracks(&[]);
        player.set_volume(250);
        assert_eq!(player.volume(), 100);
    }

    #[test]
    fn snapshot_reflects_state() {
        let mut player = player_with_tracks(&["a", "b"]);
        player.load_track(1, true);
        player.set_shuffle(true);

        let snapshot = player.snapshot();
        assert_eq!(snapshot.tracks.len(), 2);
        assert_eq!(snapshot.cursor, Some(1));
        assert!(snapshot.playing);
        assert!(snapshot.shuffle);
        assert_eq!(snapshot.repeat, RepeatMode::Off);
    }
}
