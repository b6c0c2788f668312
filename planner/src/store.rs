//! Persistence port and its implementations.
//!
//! The editor never touches storage directly; it is handed a [`Store`] and
//! calls [`Store::load`] once on open and [`Store::save`] after every change.
//! Stored data that no longer parses is treated as absent so a corrupt save
//! never blocks the editor from starting.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::cell::RefCell;
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::doc::Document;

/// Key the layout is stored under in a key/value store.
pub const STORAGE_KEY: &str = "room-sim-planner:v1";

/// Error from a persistence backend.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to write {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },
    #[error("failed to encode document: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Load/save port for the layout document.
pub trait Store {
    /// Load the saved document. `Ok(None)` when nothing usable is stored.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] when the backend itself fails.
    fn load(&self) -> Result<Option<Document>, StoreError>;

    /// Persist `doc`, replacing whatever was stored.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] when encoding or the backend write fails.
    fn save(&self, doc: &Document) -> Result<(), StoreError>;
}

fn decode_saved(raw: &str, source: &str) -> Option<Document> {
    match serde_json::from_str(raw) {
        Ok(doc) => Some(doc),
        Err(e) => {
            warn!(error = %e, source, "saved layout is unreadable; starting fresh");
            None
        }
    }
}

// =============================================================================
// MEMORY
// =============================================================================

/// In-process key/value store holding serialised JSON.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose layout key already holds `raw`.
    #[must_use]
    pub fn with_raw(raw: &str) -> Self {
        let store = Self::new();
        store.entries.borrow_mut().insert(STORAGE_KEY.to_owned(), raw.to_owned());
        store
    }

    /// Raw text currently stored under the layout key.
    #[must_use]
    pub fn raw(&self) -> Option<String> {
        self.entries.borrow().get(STORAGE_KEY).cloned()
    }
}

impl Store for MemoryStore {
    fn load(&self) -> Result<Option<Document>, StoreError> {
        Ok(self
            .entries
            .borrow()
            .get(STORAGE_KEY)
            .and_then(|raw| decode_saved(raw, STORAGE_KEY)))
    }

    fn save(&self, doc: &Document) -> Result<(), StoreError> {
        let raw = serde_json::to_string(doc)?;
        self.entries.borrow_mut().insert(STORAGE_KEY.to_owned(), raw);
        Ok(())
    }
}

// =============================================================================
// FILE
// =============================================================================

/// Store backed by a single JSON file.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Store for FileStore {
    fn load(&self) -> Result<Option<Document>, StoreError> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(source) => return Err(StoreError::Read { path: self.path.clone(), source }),
        };
        Ok(decode_saved(&raw, &self.path.display().to_string()))
    }

    fn save(&self, doc: &Document) -> Result<(), StoreError> {
        let raw = serde_json::to_string_pretty(doc)?;
        std::fs::write(&self.path, raw).map_err(|source| StoreError::Write { path: self.path.clone(), source })
    }
}
