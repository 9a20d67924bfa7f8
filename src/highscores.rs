//! High score tracking
//!
//! One best score, read from storage at startup and written back whenever a
//! run beats it.

use serde::{Deserialize, Serialize};

use crate::consts::HIGH_SCORE_KEY;
use crate::persistence::Storage;

/// Best score across runs and sessions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HighScore {
    pub best: u64,
}

impl HighScore {
    /// Read the stored best; absent or unreadable counts as 0
    pub fn load<S: Storage + ?Sized>(storage: &S) -> Self {
        match storage.get(HIGH_SCORE_KEY) {
            Some(best) => {
                log::info!("Loaded high score {}", best);
                Self { best }
            }
            None => {
                log::info!("No high score found, starting fresh");
                Self::default()
            }
        }
    }

    /// Check if a score beats the stored best
    pub fn qualifies(&self, score: u64) -> bool {
        score > self.best
    }

    /// Record a finished run's score.
    ///
    /// Returns true if it became the new best. The write is best effort: a
    /// storage failure is logged and the in-memory best still updates.
    pub fn record<S: Storage + ?Sized>(&mut self, score: u64, storage: &mut S) -> bool {
        if !self.qualifies(score) {
            return false;
        }

        self.best = score;
        match storage.set(HIGH_SCORE_KEY, score) {
            Ok(()) => log::info!("New high score {} saved", score),
            Err(e) => log::warn!("New high score {} not saved: {}", score, e),
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::{MemoryStorage, StorageError};

    struct BrokenStorage;

    impl Storage for BrokenStorage {
        fn get(&self, _key: &str) -> Option<u64> {
            None
        }

        fn set(&mut self, _key: &str, _value: u64) -> Result<(), StorageError> {
            Err(StorageError::Unavailable)
        }
    }

    #[test]
    fn test_load_defaults_to_zero() {
        assert_eq!(HighScore::load(&MemoryStorage::new()).best, 0);
    }

    #[test]
    fn test_beating_best_persists() {
        let mut storage = MemoryStorage::with_value(HIGH_SCORE_KEY, 200);
        let mut hs = HighScore::load(&storage);
        assert!(hs.record(250, &mut storage));
        assert_eq!(hs.best, 250);
        assert_eq!(storage.get(HIGH_SCORE_KEY), Some(250));
        assert_eq!(storage.writes(), 1);
    }

    #[test]
    fn test_lower_score_does_not_write() {
        let mut storage = MemoryStorage::with_value(HIGH_SCORE_KEY, 200);
        let mut hs = HighScore::load(&storage);
        assert!(!hs.record(150, &mut storage));
        assert!(!hs.record(200, &mut storage));
        assert_eq!(hs.best, 200);
        assert_eq!(storage.writes(), 0);
    }

    #[test]
    fn test_failed_write_is_not_fatal() {
        let mut storage = BrokenStorage;
        let mut hs = HighScore::load(&storage);
        assert!(hs.record(10, &mut storage));
        assert_eq!(hs.best, 10);
    }
}
