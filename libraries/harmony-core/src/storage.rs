//! Key-value persistence trait
//!
//! Models the flat string store the player keeps its state in (browser local
//! storage in the original deployment). Implementations are expected to be
//! cheap and synchronous; anything slow belongs behind the remote catalog
//! instead.

use crate::error::Result;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Well-known storage keys
pub mod keys {
    /// Serialized queue snapshot (JSON array of tracks)
    pub const QUEUE: &str = "harmony_queue";
    /// Serialized playlists snapshot (JSON array of playlists)
    pub const PLAYLISTS: &str = "harmony_playlists";
    /// Current user profile
    pub const USER: &str = "harmony_user";
    /// Theme preference ("light" / "dark")
    pub const THEME: &str = "harmony_theme";
    /// Session token from the remote catalog
    pub const TOKEN: &str = "harmony_token";
    /// Shuffle/repeat modes, written only when mode persistence is enabled
    pub const MODES: &str = "harmony_modes";
}

/// String key-value store used for session persistence
///
/// Failures are reported, never panicked on; callers treat persistence as
/// best-effort and keep their in-memory state authoritative.
pub trait KeyValueStore {
    /// Read a value, `None` if the key is absent
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write a value, replacing any previous one
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Remove a key, no-op if absent
    fn delete(&mut self, key: &str) -> Result<()>;
}

/// Shared handle to a store
///
/// The player and the session both write to the same store from a single
/// logical thread, so a `Rc<RefCell<..>>` is the honest ownership model.
pub type SharedStore = Rc<RefCell<dyn KeyValueStore>>;

/// Wrap a store implementation into a [`SharedStore`] handle
pub fn shared_store(store: impl KeyValueStore + 'static) -> SharedStore {
    Rc::new(RefCell::new(store))
}

/// In-memory store for tests and embedders without a durable backend
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the store holds no keys
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}
