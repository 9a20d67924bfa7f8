//! Best-effort key/value persistence
//!
//! The game only ever stores small integers (the high score). Reads that
//! fail look like a missing key; writes report an error the caller is free
//! to log and drop.
//!
//! Backends:
//! - `MemoryStorage`: in-process map (tests, headless runs)
//! - `LocalStorage`: browser LocalStorage (wasm32)
//! - `JsonFileStorage`: JSON map on disk with tmp-file swap (native)

use std::collections::HashMap;
use std::fmt;

#[cfg(not(target_arch = "wasm32"))]
pub mod file;
#[cfg(target_arch = "wasm32")]
pub mod local;

#[cfg(not(target_arch = "wasm32"))]
pub use file::JsonFileStorage;
#[cfg(target_arch = "wasm32")]
pub use local::LocalStorage;

/// Why a write did not land
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// Backend not present (no window, private mode, ...)
    Unavailable,
    Io(String),
    Serialize(String),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::Unavailable => write!(f, "storage unavailable"),
            StorageError::Io(e) => write!(f, "storage I/O error: {}", e),
            StorageError::Serialize(e) => write!(f, "storage encoding error: {}", e),
        }
    }
}

impl std::error::Error for StorageError {}

/// Integer key/value store
pub trait Storage {
    /// Stored value, or None when absent or unreadable
    fn get(&self, key: &str) -> Option<u64>;
    fn set(&mut self, key: &str, value: u64) -> Result<(), StorageError>;
}

/// In-memory store that counts writes
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    values: HashMap<String, u64>,
    writes: usize,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populated store
    pub fn with_value(key: &str, value: u64) -> Self {
        let mut values = HashMap::new();
        values.insert(key.to_string(), value);
        Self { values, writes: 0 }
    }

    /// Number of successful `set` calls
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Option<u64> {
        self.values.get(key).copied()
    }

    fn set(&mut self, key: &str, value: u64) -> Result<(), StorageError> {
        self.values.insert(key.to_string(), value);
        self.writes += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_roundtrip_counts_writes() {
        let mut storage = MemoryStorage::new();
        assert_eq!(storage.get("k"), None);
        storage.set("k", 12).unwrap();
        storage.set("k", 15).unwrap();
        assert_eq!(storage.get("k"), Some(15));
        assert_eq!(storage.writes(), 2);
    }

    #[test]
    fn test_error_display() {
        assert_eq!(StorageError::Unavailable.to_string(), "storage unavailable");
        assert!(StorageError::Io("disk full".into()).to_string().contains("disk full"));
    }
}
