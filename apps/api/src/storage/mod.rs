//! Local persistence: one JSON document per logical key under the data directory.
//!
//! All writes and read-modify-write updates go through a single mutex owned by
//! the store, so the process is the only writer. Another process pointed at the
//! same directory is not coordinated with; last write wins.

use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;

use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;
use tracing::{debug, info};

pub mod daily_counter;
pub mod keys;
pub mod recent_urls;
pub mod shelves;
pub mod theme;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Corrupt document '{key}': {source}")]
    Corrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to serialize '{key}': {source}")]
    Serialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to persist '{key}': {source}")]
    Persist {
        key: String,
        #[source]
        source: tempfile::PersistError,
    },
}

/// File-backed key-value store.
pub struct JsonStore {
    dir: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonStore {
    /// Opens (and creates if needed) the data directory.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)?;
        info!("Local store opened at {}", dir.display());
        Ok(Self {
            dir,
            write_lock: Mutex::new(()),
        })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    /// Reads a key. A document that has never been written reads as `None`.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        let raw = match std::fs::read_to_string(self.path_for(key)) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|source| StoreError::Corrupt {
                key: key.to_string(),
                source,
            })
    }

    /// Replaces the document stored under `key`.
    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let _guard = self.lock();
        self.write_unlocked(key, value)
    }

    /// Read-modify-write under the store lock. Absent documents start from `T::default()`.
    pub fn update<T, R>(&self, key: &str, f: impl FnOnce(&mut T) -> R) -> Result<R, StoreError>
    where
        T: Serialize + DeserializeOwned + Default,
    {
        let _guard = self.lock();
        let mut value: T = self.get(key)?.unwrap_or_default();
        let result = f(&mut value);
        self.write_unlocked(key, &value)?;
        Ok(result)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, ()> {
        // The guarded unit carries no state, so a poisoned lock is still usable.
        self.write_lock
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Writes to a temp file in the same directory and renames it into place.
    fn write_unlocked<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let json = serde_json::to_vec(value).map_err(|source| StoreError::Serialize {
            key: key.to_string(),
            source,
        })?;

        let mut tmp = tempfile::NamedTempFile::new_in(&self.dir)?;
        tmp.write_all(&json)?;
        tmp.persist(self.path_for(key))
            .map_err(|source| StoreError::Persist {
                key: key.to_string(),
                source,
            })?;

        debug!("Wrote {} bytes to '{key}'", json.len());
        Ok(())
    }
}
