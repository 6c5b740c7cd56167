//! Key-value text storage backends.
//!
//! [`MemoryStorage`] lives as long as the process, like a browser session.
//! [`FileStorage`] keeps one `<key>.json` file per key in a data directory
//! and survives restarts, like device-scoped storage.

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use pinecamp_core::is_valid_store_key;

use crate::StoreError;

/// Minimal string key-value store.
pub trait KeyValueStore {
    /// Returns the value stored under `key`, or `None` if nothing is stored.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backend cannot be read.
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Replaces the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backend cannot be written.
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &mut S {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get_item(key)
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set_item(key, value)
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    items: HashMap<String, String>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Creates a handle rooted at `dir`. The directory is created lazily on
    /// the first write.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StoreError> {
        if !is_valid_store_key(key) {
            return Err(StoreError::InvalidKey(key.to_string()));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl KeyValueStore for FileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StoreError::StorageUnavailable {
                key: key.to_string(),
                source,
            }),
        }
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let path = self.path_for(key)?;
        let unavailable = |source| StoreError::StorageUnavailable {
            key: key.to_string(),
            source,
        };

        fs::create_dir_all(&self.dir).map_err(unavailable)?;
        // Write-then-rename so readers never observe a partial value.
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value).map_err(unavailable)?;
        fs::rename(&tmp, &path).map_err(unavailable)?;
        tracing::debug!(key = %key, path = %path.display(), bytes = value.len(), "storage item written");
        Ok(())
    }
}
