use std::{
    collections::BTreeMap,
    path::{
        Path,
        PathBuf,
    },
    sync::Mutex,
};

use super::{
    get_data_file_path,
    load_json_from,
    save_json_to,
};
use crate::core::FlipwiseError;

const STORAGE_FILE: &str = "storage.json";

/// String key/value store backed by a single JSON file. Every write goes
/// straight to disk; there is only ever one writer (the app).
pub struct LocalStorage {
    path: Option<PathBuf>,
    entries: Mutex<BTreeMap<String, String>>,
}

impl LocalStorage {
    pub fn open_default() -> Self {
        let path = get_data_file_path(STORAGE_FILE);
        match Self::open(&path) {
            Ok(storage) => storage,
            Err(e) => {
                log::warn!("Failed to load {}: {}. Starting empty.", path.display(), e);
                Self { path: Some(path), entries: Mutex::new(BTreeMap::new()) }
            }
        }
    }

    pub fn open(path: &Path) -> Result<Self, FlipwiseError> {
        let entries: BTreeMap<String, String> = load_json_from(path)?;
        Ok(Self { path: Some(path.to_path_buf()), entries: Mutex::new(entries) })
    }

    /// Nothing is written to disk.
    pub fn in_memory() -> Self {
        Self { path: None, entries: Mutex::new(BTreeMap::new()) }
    }

    pub fn get_item(&self, key: &str) -> Option<String> {
        self.lock().get(key).cloned()
    }

    pub fn set_item(&self, key: &str, value: &str) -> Result<(), FlipwiseError> {
        let mut entries = self.lock();
        entries.insert(key.to_string(), value.to_string());
        self.flush(&entries)
    }

    #[cfg(test)]
    pub(crate) fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, BTreeMap<String, String>> {
        // A panic mid-insert cannot leave the map half-written, so a poisoned
        // lock still holds usable data.
        self.entries.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn flush(&self, entries: &BTreeMap<String, String>) -> Result<(), FlipwiseError> {
        match &self.path {
            Some(path) => save_json_to(entries, path),
            None => Ok(()),
        }
    }
}

impl std::fmt::Debug for LocalStorage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocalStorage")
            .field("path", &self.path)
            .field("keys", &self.lock().keys().cloned().collect::<Vec<_>>())
            .finish()
    }
}
