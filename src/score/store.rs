//! Leaderboard persistence.
//!
//! A store holds one serialized ranked list. The engine only ever calls
//! [`LeaderboardStore::load`] and [`LeaderboardStore::save`]; ranking and
//! truncation happen in [`Leaderboard`](super::Leaderboard).

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use thiserror::Error;

use super::leaderboard::LeaderboardEntry;

/// Errors surfaced by leaderboard stores.
#[derive(Debug, Error)]
pub enum LeaderboardError {
    #[error("leaderboard store lock was poisoned")]
    LockPoisoned,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LeaderboardError>;

/// Persistence collaborator for the ranked list.
pub trait LeaderboardStore: Send + Sync {
    /// Load the stored list. A store that has never been written yields an
    /// empty list.
    fn load(&self) -> Result<Vec<LeaderboardEntry>>;

    /// Replace the stored list.
    fn save(&self, entries: &[LeaderboardEntry]) -> Result<()>;
}

/// In-process store holding the serialized list, like a browser's local
/// storage slot.
#[derive(Debug, Default)]
pub struct MemoryStore {
    raw: Mutex<Option<String>>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-filled with raw serialized data.
    #[must_use]
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            raw: Mutex::new(Some(raw.into())),
        }
    }

    /// The raw serialized list, if any.
    pub fn raw(&self) -> Result<Option<String>> {
        let guard = self.raw.lock().map_err(|_| LeaderboardError::LockPoisoned)?;
        Ok(guard.clone())
    }
}

impl LeaderboardStore for MemoryStore {
    fn load(&self) -> Result<Vec<LeaderboardEntry>> {
        match self.raw()? {
            Some(json) => Ok(serde_json::from_str(&json)?),
            None => Ok(Vec::new()),
        }
    }

    fn save(&self, entries: &[LeaderboardEntry]) -> Result<()> {
        let json = serde_json::to_string(entries)?;
        let mut guard = self.raw.lock().map_err(|_| LeaderboardError::LockPoisoned)?;
        *guard = Some(json);
        Ok(())
    }
}

/// Store backed by a single JSON file.
#[derive(Clone, Debug)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Store the list at `path`. Parent directories are created on save.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Location of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LeaderboardStore for JsonFileStore {
    fn load(&self) -> Result<Vec<LeaderboardEntry>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let json = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&json)?)
    }

    fn save(&self, entries: &[LeaderboardEntry]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let json = serde_json::to_string_pretty(entries)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}
