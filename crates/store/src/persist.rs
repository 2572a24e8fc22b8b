//! Cart persistence port.
//!
//! The cart survives across sessions through a narrow read/write interface
//! to a durable local key-value store: one fixed key, the full serialized
//! line collection as the value. The store owns whichever implementation
//! it is constructed with; nothing in the core is a global singleton.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cart::CartLine;

/// Errors from the persistence port.
#[derive(Debug, thiserror::Error)]
pub enum PersistError {
    #[error("storage read/write failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("cart data is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
    #[error("storage backend error: {0}")]
    Backend(String),
}

/// Narrow interface to the durable local key-value store.
///
/// `load` reads the persisted line collection (absence is an empty cart);
/// `save` replaces it wholesale. Implementations are synchronous.
pub trait CartStorage {
    /// Read the persisted line collection.
    ///
    /// # Errors
    ///
    /// Returns an error if the stored value cannot be read or parsed.
    /// Callers recover by treating the cart as empty.
    fn load(&self) -> Result<Vec<CartLine>, PersistError>;

    /// Replace the persisted line collection.
    ///
    /// # Errors
    ///
    /// Returns an error if the value cannot be serialized or written.
    fn save(&self, lines: &[CartLine]) -> Result<(), PersistError>;
}

impl<S: CartStorage + ?Sized> CartStorage for Arc<S> {
    fn load(&self) -> Result<Vec<CartLine>, PersistError> {
        (**self).load()
    }

    fn save(&self, lines: &[CartLine]) -> Result<(), PersistError> {
        (**self).save(lines)
    }
}

/// On-disk envelope for the persisted cart.
#[derive(Debug, Serialize, Deserialize)]
struct CartSnapshot {
    saved_at: DateTime<Utc>,
    lines: Vec<CartLine>,
}

/// JSON file implementation of the persistence port.
///
/// The file path is the fixed key; every save rewrites the whole
/// collection.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    /// Create a storage backed by the given file path.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The file path acting as the storage key.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CartStorage for JsonFileStorage {
    fn load(&self) -> Result<Vec<CartLine>, PersistError> {
        if !self.path.exists() {
            debug!(path = ?self.path, "No persisted cart");
            return Ok(Vec::new());
        }

        let raw = fs::read_to_string(&self.path)?;
        let snapshot: CartSnapshot = serde_json::from_str(&raw)?;
        debug!(path = ?self.path, lines = snapshot.lines.len(), "Restored persisted cart");
        Ok(snapshot.lines)
    }

    fn save(&self, lines: &[CartLine]) -> Result<(), PersistError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            fs::create_dir_all(parent)?;
        }

        let snapshot = CartSnapshot {
            saved_at: Utc::now(),
            lines: lines.to_vec(),
        };
        let raw = serde_json::to_string_pretty(&snapshot)?;
        fs::write(&self.path, raw)?;
        Ok(())
    }
}

/// In-memory implementation of the persistence port.
///
/// Used by tests and ephemeral sessions that should not touch the disk.
/// Share it via [`Arc`] to observe what a store persisted.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    lines: Mutex<Vec<CartLine>>,
}

impl MemoryStorage {
    /// Create an empty in-memory storage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl CartStorage for MemoryStorage {
    fn load(&self) -> Result<Vec<CartLine>, PersistError> {
        self.lines
            .lock()
            .map(|guard| guard.clone())
            .map_err(|_| PersistError::Backend("lock poisoned".to_string()))
    }

    fn save(&self, lines: &[CartLine]) -> Result<(), PersistError> {
        let mut guard = self
            .lines
            .lock()
            .map_err(|_| PersistError::Backend("lock poisoned".to_string()))?;
        *guard = lines.to_vec();
        Ok(())
    }
}
