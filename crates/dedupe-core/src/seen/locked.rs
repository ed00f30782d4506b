use std::collections::HashSet;
use std::sync::{PoisonError, RwLock};

use super::SeenSet;

/// One `RwLock` over one hash set.
///
/// Lookups share the read lock; the insert path takes the write lock and lets
/// `HashSet::insert` decide, so a racing pair of first observations yields a
/// single `true`.
#[derive(Debug, Default)]
pub struct LockedSeenSet {
    keys: RwLock<HashSet<String>>,
}

impl LockedSeenSet {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SeenSet for LockedSeenSet {
    fn should_include(&self, key: &str) -> bool {
        if self.contains(key) {
            return false;
        }
        // A panic while holding the lock cannot leave the set half-updated,
        // so a poisoned lock is still usable.
        let mut keys = self.keys.write().unwrap_or_else(PoisonError::into_inner);
        keys.insert(key.to_owned())
    }

    fn contains(&self, key: &str) -> bool {
        self.keys
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(key)
    }

    fn len(&self) -> usize {
        self.keys.read().unwrap_or_else(PoisonError::into_inner).len()
    }
}
