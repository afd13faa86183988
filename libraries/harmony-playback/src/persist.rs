//! Snapshot persistence
//!
//! The queue and playlists are written to the key-value store after every
//! mutating operation and read back once at startup. Persistence is
//! best-effort: store or serialization failures are logged and the
//! in-memory state stays authoritative. Malformed stored data falls back to
//! an empty session instead of failing.

use crate::manager::Player;
use crate::types::RepeatMode;
use harmony_core::storage::keys;
use harmony_core::{Playlist, Track};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Persisted shuffle/repeat modes, written only when mode persistence is
/// enabled in the player config
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ModesSnapshot {
    shuffle: bool,
    repeat: RepeatMode,
}

impl Player {
    /// Restore the persisted session state
    ///
    /// Call once at startup, before the first user interaction. The cursor
    /// always comes back cleared; only queue contents, playlists and
    /// (optionally) modes survive a reload.
    pub fn restore(&mut self) {
        let tracks: Vec<Track> = self.read_json(keys::QUEUE).unwrap_or_default();
        let playlists: Vec<Playlist> = self.read_json(keys::PLAYLISTS).unwrap_or_default();
        let modes = if self.persist_modes_enabled() {
            self.read_json::<ModesSnapshot>(keys::MODES)
                .map(|m| (m.shuffle, m.repeat))
        } else {
            None
        };

        self.install_restored(tracks, playlists, modes);
    }

    pub(crate) fn save_queue(&mut self) {
        self.write_json(keys::QUEUE, &self.queue_tracks().to_vec());
    }

    pub(crate) fn save_playlists(&mut self) {
        self.write_json(keys::PLAYLISTS, &self.playlists().to_vec());
    }

    pub(crate) fn save_modes(&mut self) {
        if !self.persist_modes_enabled() {
            return;
        }
        let (shuffle, repeat) = self.modes();
        self.write_json(keys::MODES, &ModesSnapshot { shuffle, repeat });
    }

    fn write_json<T: Serialize>(&self, key: &str, value: &T) {
        let serialized = match serde_json::to_string(value) {
            Ok(s) => s,
            Err(err) => {
                warn!(key, error = %err, "failed to serialize state");
                return;
            }
        };
        if let Err(err) = self.store.borrow_mut().set(key, &serialized) {
            warn!(key, error = %err, "failed to persist state");
        }
    }

    fn read_json<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = match self.store.borrow().get(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(err) => {
                warn!(key, error = %err, "failed to read persisted state");
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(err) => {
                warn!(key, error = %err, "discarding malformed persisted state");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::NullEngine;
    use crate::types::PlayerConfig;
    use harmony_core::{shared_store, MemoryStore, SourceRef, TrackId};

    fn create_test_track(id: &str) -> Track {
        Track {
            id: TrackId::new(id),
            title: format!("Track {id}"),
            artist: "Test Artist".to_string(),
            duration_secs: 120.0,
            source: Some(SourceRef::Url(format!("https://example.com/{id}.mp3"))),
            color: None,
            demo: false,
        }
    }

    fn new_player(config: PlayerConfig) -> (Player, harmony_core::SharedStore) {
        let store = shared_store(MemoryStore::new());
        let player = Player::new(config, Box::new(NullEngine), store.clone());
        (player, store)
    }

    #[test]
    fn queue_survives_restart() {
        let (mut player, store) = new_player(PlayerConfig::default());
        player.add_track(create_test_track("a"));
        player.add_track(create_test_track("b"));

        let mut reloaded = Player::new(PlayerConfig::default(), Box::new(NullEngine), store);
        reloaded.restore();

        assert_eq!(reloaded.queue_len(), 2);
        assert_eq!(reloaded.queue_tracks()[0].id.as_str(), "a");
        assert_eq!(reloaded.cursor(), None);
    }

    #[test]
    fn playlists_survive_restart() {
        let (mut player, store) = new_player(PlayerConfig::default());
        player.add_track(create_test_track("a"));
        let id = player.create_playlist("Mix", Some("evening")).unwrap();
        player
            .toggle_track_in_playlist(&id, &TrackId::new("a"))
            .unwrap();

        let mut reloaded = Player::new(PlayerConfig::default(), Box::new(NullEngine), store);
        reloaded.restore();

        assert_eq!(reloaded.playlists().len(), 1);
        assert_eq!(reloaded.playlists()[0].name, "Mix");
        assert_eq!(reloaded.playlists()[0].tracks, vec![TrackId::new("a")]);
    }

    #[test]
    fn malformed_snapshot_falls_back_to_empty() {
        let store = shared_store(MemoryStore::new());
        store
            .borrow_mut()
            .set(keys::QUEUE, "{not json at all")
            .unwrap();
        store.borrow_mut().set(keys::PLAYLISTS, "42").unwrap();

        let mut player = Player::new(PlayerConfig::default(), Box::new(NullEngine), store);
        player.restore();

        assert_eq!(player.queue_len(), 0);
        assert!(player.playlists().is_empty());
    }

    #[test]
    fn modes_persist_only_when_enabled() {
        let config = PlayerConfig {
            persist_modes: true,
            ..PlayerConfig::default()
        };
        let (mut player, store) = new_player(config.clone());
        player.set_shuffle(true);
        player.cycle_repeat();

        let mut reloaded = Player::new(config, Box::new(NullEngine), store);
        reloaded.restore();
        assert!(reloaded.shuffle());
        assert_eq!(reloaded.repeat(), RepeatMode::One);
    }

    #[test]
    fn modes_reset_by_default() {
        let (mut player, store) = new_player(PlayerConfig::default());
        player.set_shuffle(true);
        player.cycle_repeat();

        let mut reloaded = Player::new(PlayerConfig::default(), Box::new(NullEngine), store);
        reloaded.restore();
        assert!(!reloaded.shuffle());
        assert_eq!(reloaded.repeat(), RepeatMode::Off);
    }
}
