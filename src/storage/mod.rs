//! Persisted key/value slot for session state (impure shell).
//!
//! The browser original kept the active search term in localStorage. Here
//! the same contract is an injected collaborator, so the session core never
//! touches the filesystem directly and tests swap in a memory store.

use std::collections::HashMap;
use std::path::PathBuf;
use thiserror::Error;
use tracing::warn;

/// Slot key holding the active search term.
pub const ACTIVE_TERM_KEY: &str = "search";

/// Failure talking to the persistence collaborator.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading or writing the backing file failed.
    #[error("slot file {path:?}: {source}")]
    Io {
        /// File that failed.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The backing file held something other than a string map.
    #[error("slot file {path:?} is corrupt: {reason}")]
    Corrupt {
        /// File with unusable contents.
        path: PathBuf,
        /// Decoder message.
        reason: String,
    },
}

/// Key/value persistence contract.
pub trait TermSlot: Send {
    /// Read one slot. Absence is not an error.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write one slot, creating it if missing.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

// ===== FileTermSlot =====

/// Slot store backed by a small JSON object on disk.
#[derive(Debug, Clone)]
pub struct FileTermSlot {
    path: PathBuf,
}

impl FileTermSlot {
    /// Store over `path`. The file is created lazily on first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Platform-default slot path, `<data_dir>/hnsb/slots.json`.
    /// Falls back to the current directory when no data dir exists.
    pub fn default_path() -> PathBuf {
        match dirs::data_dir() {
            Some(dir) => dir.join("hnsb").join("slots.json"),
            None => PathBuf::from("hnsb-slots.json"),
        }
    }

    fn read_map(&self) -> Result<HashMap<String, String>, StorageError> {
        if !self.path.exists() {
            return Ok(HashMap::new());
        }
        let contents = std::fs::read_to_string(&self.path).map_err(|source| StorageError::Io {
            path: self.path.clone(),
            source,
        })?;
        serde_json::from_str(&contents).map_err(|err| StorageError::Corrupt {
            path: self.path.clone(),
            reason: err.to_string(),
        })
    }

    fn write_map(&self, map: &HashMap<String, String>) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|source| StorageError::Io {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }
        let contents =
            serde_json::to_string_pretty(map).map_err(|err| StorageError::Corrupt {
                path: self.path.clone(),
                reason: err.to_string(),
            })?;
        std::fs::write(&self.path, contents).map_err(|source| StorageError::Io {
            path: self.path.clone(),
            source,
        })
    }
}

impl TermSlot for FileTermSlot {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let mut map = self.read_map()?;
        Ok(map.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        // A corrupt file is replaced rather than wedging every future write.
        let mut map = match self.read_map() {
            Ok(map) => map,
            Err(err) => {
                warn!(%err, "slot file unreadable, starting fresh");
                HashMap::new()
            }
        };
        map.insert(key.to_string(), value.to_string());
        self.write_map(&map)
    }
}

// ===== MemoryTermSlot =====

/// In-memory slot store for tests and ephemeral sessions.
#[derive(Debug, Clone, Default)]
pub struct MemoryTermSlot {
    map: HashMap<String, String>,
}

impl MemoryTermSlot {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with a single entry.
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut slot = Self::new();
        slot.map.insert(key.to_string(), value.to_string());
        slot
    }
}

impl TermSlot for MemoryTermSlot {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.map.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.map.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

// ===== Tests =====
