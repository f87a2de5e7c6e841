//! Session cache — synchronous text store holding at most one session record.
//!
//! DESIGN
//! ======
//! The store is the synchronous source of truth for "logged in": absence
//! of a cached record is the sole signal of logged-out, presence the sole
//! signal of logged-in. Records are kept as JSON text under a fixed key
//! of a minimal string-to-string map, so `clear` can wipe every cached
//! key at once, not just the session slot.
//!
//! ERROR HANDLING
//! ==============
//! The API surface is infallible: the storage host is assumed available.
//! Write and serialization failures are logged and dropped; unreadable
//! cached text degrades to "absent" rather than raising, so a corrupt
//! cache behaves exactly like a signed-out one.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing::{debug, error};

use crate::principal::Principal;

/// Key under which the serialized session record is stored.
const SESSION_KEY: &str = "user";

// =============================================================================
// TRAIT
// =============================================================================

/// Synchronous cache for at most one session record.
///
/// The session coordinator is the sole writer; the access guard and the
/// entry view read it directly. All operations are infallible at this
/// surface — implementations log and degrade instead of raising.
pub trait SessionStore: Send + Sync {
    /// Serialize and cache `principal`, overwriting any existing record.
    fn put(&self, principal: &Principal);

    /// Return the cached record, or `None` if absent or unreadable.
    fn get(&self) -> Option<Principal>;

    /// Remove all cached data unconditionally, including any keys
    /// unrelated to the session record.
    fn clear(&self);
}

fn encode(principal: &Principal) -> Option<String> {
    match serde_json::to_string(principal) {
        Ok(text) => Some(text),
        Err(e) => {
            error!(error = %e, "failed to serialize session record; write dropped");
            None
        }
    }
}

fn decode(text: &str) -> Option<Principal> {
    match serde_json::from_str(text) {
        Ok(principal) => Some(principal),
        Err(e) => {
            debug!(error = %e, "cached session record unreadable; treating as absent");
            None
        }
    }
}

// =============================================================================
// MEMORY STORE
// =============================================================================

/// In-memory store for tests and hosts without persistence.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<BTreeMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store raw text under an arbitrary key.
    ///
    /// # Panics
    ///
    /// Panics only if a previous holder of the store lock panicked.
    pub fn put_text(&self, key: impl Into<String>, value: impl Into<String>) {
        self.entries
            .lock()
            .expect("session store lock poisoned")
            .insert(key.into(), value.into());
    }

    /// Fetch raw text stored under `key`.
    ///
    /// # Panics
    ///
    /// Panics only if a previous holder of the store lock panicked.
    #[must_use]
    pub fn get_text(&self, key: &str) -> Option<String> {
        self.entries
            .lock()
            .expect("session store lock poisoned")
            .get(key)
            .cloned()
    }
}

impl SessionStore for MemoryStore {
    fn put(&self, principal: &Principal) {
        if let Some(text) = encode(principal) {
            self.put_text(SESSION_KEY, text);
        }
    }

    fn get(&self) -> Option<Principal> {
        self.get_text(SESSION_KEY).and_then(|text| decode(&text))
    }

    fn clear(&self) {
        self.entries
            .lock()
            .expect("session store lock poisoned")
            .clear();
        debug!("session store cleared");
    }
}

// =============================================================================
// FILE STORE
// =============================================================================

/// File-backed store: one JSON object (`string -> string`) at an
/// explicitly injected path.
///
/// The file is read on every `get` and rewritten on every `put`, which
/// keeps the API synchronous and the store free of in-process state; the
/// coordinator being the only writer makes that safe.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Create a store persisting at `path`. The file and its parent
    /// directories are created on first write.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> BTreeMap<String, String> {
        let text = match std::fs::read_to_string(&self.path) {
            Ok(text) => text,
            // A missing file is a normal empty store.
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return BTreeMap::new(),
            Err(e) => {
                error!(path = %self.path.display(), error = %e, "failed to read session store file");
                return BTreeMap::new();
            }
        };
        match serde_json::from_str(&text) {
            Ok(map) => map,
            Err(e) => {
                debug!(path = %self.path.display(), error = %e, "session store file unreadable; treating as empty");
                BTreeMap::new()
            }
        }
    }

    fn save(&self, entries: &BTreeMap<String, String>) {
        if let Some(parent) = self.path.parent() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                error!(path = %parent.display(), error = %e, "failed to create session store directory");
                return;
            }
        }
        let text = match serde_json::to_string(entries) {
            Ok(text) => text,
            Err(e) => {
                error!(error = %e, "failed to serialize session store file; write dropped");
                return;
            }
        };
        if let Err(e) = std::fs::write(&self.path, text) {
            error!(path = %self.path.display(), error = %e, "failed to write session store file");
        }
    }

    /// Store raw text under an arbitrary key.
    pub fn put_text(&self, key: impl Into<String>, value: impl Into<String>) {
        let mut entries = self.load();
        entries.insert(key.into(), value.into());
        self.save(&entries);
    }

    /// Fetch raw text stored under `key`.
    #[must_use]
    pub fn get_text(&self, key: &str) -> Option<String> {
        self.load().get(key).cloned()
    }
}

impl SessionStore for FileStore {
    fn put(&self, principal: &Principal) {
        if let Some(text) = encode(principal) {
            self.put_text(SESSION_KEY, text);
        }
    }

    fn get(&self) -> Option<Principal> {
        self.get_text(SESSION_KEY).and_then(|text| decode(&text))
    }

    fn clear(&self) {
        match std::fs::remove_file(&self.path) {
            Ok(()) => debug!(path = %self.path.display(), "session store file removed"),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => {
                error!(path = %self.path.display(), error = %e, "failed to remove session store file");
            }
        }
    }
}

#[cfg(test)]
#[path = "store_test.rs"]
mod tests;
