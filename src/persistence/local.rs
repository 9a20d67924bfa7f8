//! Browser LocalStorage backend
//!
//! Values are stored as decimal strings so they stay readable in devtools.

use super::{Storage, StorageError};

/// `window.localStorage` wrapper
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
    }
}

impl Storage for LocalStorage {
    fn get(&self, key: &str) -> Option<u64> {
        let raw = Self::storage()?.get_item(key).ok()??;
        raw.trim().parse().ok()
    }

    fn set(&mut self, key: &str, value: u64) -> Result<(), StorageError> {
        let storage = Self::storage().ok_or(StorageError::Unavailable)?;
        storage
            .set_item(key, &value.to_string())
            .map_err(|e| StorageError::Io(format!("{:?}", e)))
    }
}
