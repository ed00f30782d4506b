//! Seen-key sets with linearizable check-and-insert.
//!
//! The driver is single-threaded, but the set is shared behind `&self` so a
//! sharded driver can hand one instance to several workers. Keys are never
//! removed; a set lives for one run.

mod locked;
mod sharded;

pub use locked::LockedSeenSet;
pub use sharded::ShardedSeenSet;

/// A concurrent set of canonical keys.
pub trait SeenSet: Send + Sync {
    /// Record `key` and return `true` on its first observation; `false` afterwards.
    ///
    /// Concurrent calls with equal keys behave as if serialized: exactly one
    /// caller sees `true`.
    fn should_include(&self, key: &str) -> bool;

    /// Whether `key` has been recorded. Does not record it.
    fn contains(&self, key: &str) -> bool;

    /// Number of distinct keys recorded.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
