//! The key-value port and its backends.
//!
//! The port mirrors the browser storage it abstracts: an infallible
//! `get`/`set` surface over string cells. Backends absorb their own I/O
//! failures (logged at warn) rather than surfacing them, so a flaky disk
//! degrades persistence, never the dashboard.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::Result;

/// Injected storage port for small string cells.
///
/// Implementations must be shareable (`Send + Sync`); callers hold one
/// behind an `Arc`.
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str);
}

/// In-memory backend. State dies with the process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    cells: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.cells.read().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        if let Ok(mut cells) = self.cells.write() {
            cells.insert(key.to_string(), value.to_string());
        }
    }
}

/// File-backed store: one JSON object of string cells, write-through.
///
/// The whole state is read once at [`FileStore::open`]; every `set`
/// rewrites the file. Fine for the two small lists this system persists.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    cells: RwLock<HashMap<String, String>>,
}

impl FileStore {
    /// Open a store at `path`, loading existing contents.
    ///
    /// A missing file is an empty store; an unreadable or malformed file is
    /// an error, since silently discarding user state is worse than failing
    /// the command.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let cells = match std::fs::read_to_string(&path) {
            Ok(text) if text.trim().is_empty() => HashMap::new(),
            Ok(text) => serde_json::from_str(&text)?,
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => HashMap::new(),
            Err(error) => return Err(error.into()),
        };
        Ok(Self {
            path,
            cells: RwLock::new(cells),
        })
    }

    /// The file this store persists to.
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    fn persist(&self, cells: &HashMap<String, String>) {
        let json = match serde_json::to_string_pretty(cells) {
            Ok(json) => json,
            Err(error) => {
                tracing::warn!(%error, "failed to serialize store state");
                return;
            }
        };
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                if let Err(error) = std::fs::create_dir_all(parent) {
                    tracing::warn!(%error, path = %self.path.display(), "failed to create store directory");
                    return;
                }
            }
        }
        if let Err(error) = std::fs::write(&self.path, json) {
            tracing::warn!(%error, path = %self.path.display(), "failed to write store file");
        }
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.cells.read().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        if let Ok(mut cells) = self.cells.write() {
            cells.insert(key.to_string(), value.to_string());
            self.persist(&cells);
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
