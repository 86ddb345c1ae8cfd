//! Key-value persistence for session snapshots.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use tracing::{debug, info, instrument};

use tumblin_core::SessionState;

use crate::PersistError;

/// Storage key for the persisted session.
///
/// The shape version rides in the key, so a future shape gets a new key
/// instead of an interface change; there is no migration path for older
/// persisted shapes.
pub const SESSION_KEY: &str = "TUMBLIN_DICE_V1";

/// Key-value text store holding serialized session snapshots.
///
/// The store treats this as an external collaborator: one read at startup,
/// one write after every accepted mutation.
pub trait SessionBackend {
    /// Reads the payload stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns [`PersistError`] if the underlying storage failed.
    fn read(&self, key: &str) -> Result<Option<String>, PersistError>;

    /// Stores `payload` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`PersistError`] if the underlying storage failed.
    fn write(&mut self, key: &str, payload: &str) -> Result<(), PersistError>;
}

/// Serializes a session snapshot to its persisted JSON form.
///
/// # Errors
///
/// Returns [`PersistError`] if serialization failed.
pub fn encode_session(state: &SessionState) -> Result<String, PersistError> {
    Ok(serde_json::to_string(state)?)
}

/// Parses a persisted payload back into a session snapshot.
///
/// # Errors
///
/// Returns [`PersistError`] if the payload is not a valid session.
pub fn decode_session(payload: &str) -> Result<SessionState, PersistError> {
    Ok(serde_json::from_str(payload)?)
}

/// File-backed store: one `<key>.json` file per key under a data directory.
#[derive(Debug, Clone)]
pub struct FileBackend {
    data_dir: PathBuf,
}

impl FileBackend {
    /// Creates a backend rooted at `data_dir`, creating the directory if it
    /// does not exist yet.
    ///
    /// # Errors
    ///
    /// Returns [`PersistError`] if the directory cannot be created.
    #[instrument]
    pub fn new(data_dir: PathBuf) -> Result<Self, PersistError> {
        fs::create_dir_all(&data_dir)?;
        info!(data_dir = %data_dir.display(), "Opened file backend");
        Ok(Self { data_dir })
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.data_dir.join(format!("{key}.json"))
    }
}

impl SessionBackend for FileBackend {
    #[instrument(skip(self))]
    fn read(&self, key: &str) -> Result<Option<String>, PersistError> {
        let path = self.key_path(key);
        if !path.exists() {
            debug!(path = %path.display(), "No payload stored");
            return Ok(None);
        }
        let payload = fs::read_to_string(&path)?;
        debug!(path = %path.display(), bytes = payload.len(), "Payload read");
        Ok(Some(payload))
    }

    #[instrument(skip(self, payload), fields(bytes = payload.len()))]
    fn write(&mut self, key: &str, payload: &str) -> Result<(), PersistError> {
        let path = self.key_path(key);
        fs::write(&path, payload)?;
        debug!(path = %path.display(), "Payload written");
        Ok(())
    }
}

/// In-memory store for tests and ephemeral sessions.
///
/// Clones share the same entries, so a test can hand one clone to a store
/// and inspect the other.
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryBackend {
    /// Creates an empty in-memory backend.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a backend pre-seeded with one entry.
    pub fn with_entry(key: impl Into<String>, payload: impl Into<String>) -> Self {
        let backend = Self::new();
        if let Ok(mut entries) = backend.entries.lock() {
            entries.insert(key.into(), payload.into());
        }
        backend
    }
}

impl SessionBackend for MemoryBackend {
    fn read(&self, key: &str) -> Result<Option<String>, PersistError> {
        let entries = self
            .entries
            .lock()
            .map_err(|_| PersistError::new("backend mutex poisoned"))?;
        Ok(entries.get(key).cloned())
    }

    fn write(&mut self, key: &str, payload: &str) -> Result<(), PersistError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| PersistError::new("backend mutex poisoned"))?;
        entries.insert(key.to_string(), payload.to_string());
        Ok(())
    }
}
