//! JSON file backed store that survives across runs

use super::store::Store;
use crate::error::{IjwtError, Result};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

/// Environment variable overriding the default store directory
pub const CACHE_DIR_ENV: &str = "IJWT_CACHE_DIR";

/// File name of the store inside the cache directory
pub const STORE_FILE: &str = "store.json";

/// Persistent store kept as a flat JSON object.
///
/// The whole map is held in memory and rewritten atomically after every
/// mutation.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: Mutex<BTreeMap<String, String>>,
}

impl FileStore {
    /// Open the store at `path`, starting empty if the file does not exist
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let entries = if path.exists() {
            let content =
                std::fs::read_to_string(&path).map_err(|e| IjwtError::StoreReadError {
                    path: path.clone(),
                    reason: format!("Failed to read: {}", e),
                })?;
            if content.trim().is_empty() {
                BTreeMap::new()
            } else {
                serde_json::from_str(&content).map_err(|e| IjwtError::StoreReadError {
                    path: path.clone(),
                    reason: format!("Failed to parse: {}", e),
                })?
            }
        } else {
            BTreeMap::new()
        };

        Ok(Self {
            path,
            entries: Mutex::new(entries),
        })
    }

    /// Open the store at its default location
    ///
    /// - `$IJWT_CACHE_DIR/store.json` when the variable is set
    /// - otherwise `{cache_dir}/ijwt/store.json`
    ///   (e.g. `~/.cache/ijwt/store.json` on Linux)
    pub fn open_default() -> Result<Self> {
        Self::open(default_store_path()?)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn lock(&self) -> MutexGuard<'_, BTreeMap<String, String>> {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn persist(&self, entries: &BTreeMap<String, String>) -> Result<()> {
        let content = serde_json::to_string_pretty(entries).map_err(|e| {
            IjwtError::StoreWriteError {
                path: self.path.clone(),
                reason: format!("Failed to serialize: {}", e),
            }
        })?;
        let parent = ensure_parent_dir(&self.path)?;
        atomic_write(&content, &self.path, parent)
    }
}

impl Store for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.lock();
        let mut updated = entries.clone();
        updated.insert(key.to_string(), value.to_string());
        self.persist(&updated)?;
        *entries = updated;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.remove_all(&[key.to_string()])
    }

    /// Rewrites the file once for the whole batch
    fn remove_all(&self, keys: &[String]) -> Result<()> {
        let mut entries = self.lock();
        let mut updated = entries.clone();
        let before = updated.len();
        for key in keys {
            updated.remove(key);
        }
        if updated.len() == before {
            return Ok(());
        }
        self.persist(&updated)?;
        *entries = updated;
        Ok(())
    }

    fn keys(&self) -> Result<Vec<String>> {
        Ok(self.lock().keys().cloned().collect())
    }
}

/// Resolve the default store location
pub fn default_store_path() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var(CACHE_DIR_ENV) {
        return Ok(PathBuf::from(dir).join(STORE_FILE));
    }

    let base = dirs::cache_dir()
        .ok_or_else(|| IjwtError::Generic("Could not determine cache directory".to_string()))?;

    Ok(base.join("ijwt").join(STORE_FILE))
}

/// Ensure parent directory exists and return it
fn ensure_parent_dir(path: &Path) -> Result<&Path> {
    let parent = path.parent().ok_or_else(|| IjwtError::StoreWriteError {
        path: path.to_path_buf(),
        reason: "Store path has no parent directory".to_string(),
    })?;
    std::fs::create_dir_all(parent).map_err(|e| IjwtError::StoreWriteError {
        path: path.to_path_buf(),
        reason: format!("Failed to create parent dir: {}", e),
    })?;
    Ok(parent)
}

/// Write content atomically using NamedTempFile + persist (Windows compatible)
fn atomic_write(content: &str, path: &Path, parent: &Path) -> Result<()> {
    use std::io::Write;
    use tempfile::NamedTempFile;

    let write_error = |reason: String| IjwtError::StoreWriteError {
        path: path.to_path_buf(),
        reason,
    };

    let mut temp_file = NamedTempFile::new_in(parent)
        .map_err(|e| write_error(format!("Failed to create temp file: {}", e)))?;

    temp_file
        .write_all(content.as_bytes())
        .map_err(|e| write_error(format!("Failed to write temp file: {}", e)))?;

    temp_file
        .as_file()
        .sync_all()
        .map_err(|e| write_error(format!("Failed to sync temp file: {}", e)))?;

    temp_file
        .persist(path)
        .map_err(|e| write_error(format!("Failed to persist temp file: {}", e)))?;

    Ok(())
}
