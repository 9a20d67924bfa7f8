//! JSON-file storage for native builds
//!
//! The whole store is one JSON object of integer values. Writes go to a
//! sibling `.tmp` file first and are renamed over the original.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use super::{Storage, StorageError};

/// Key/value store backed by a JSON file
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_map(&self) -> Option<BTreeMap<String, u64>> {
        let json = fs::read_to_string(&self.path).ok()?;
        match serde_json::from_str(&json) {
            Ok(map) => Some(map),
            Err(e) => {
                log::warn!("Ignoring corrupt save file {}: {}", self.path.display(), e);
                None
            }
        }
    }
}

impl Storage for JsonFileStorage {
    fn get(&self, key: &str) -> Option<u64> {
        self.read_map()?.get(key).copied()
    }

    fn set(&mut self, key: &str, value: u64) -> Result<(), StorageError> {
        let mut map = self.read_map().unwrap_or_default();
        map.insert(key.to_string(), value);

        let json =
            serde_json::to_string_pretty(&map).map_err(|e| StorageError::Serialize(e.to_string()))?;
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, json).map_err(|e| StorageError::Io(e.to_string()))?;
        fs::rename(&tmp, &self.path).map_err(|e| StorageError::Io(e.to_string()))?;
        Ok(())
    }
}
