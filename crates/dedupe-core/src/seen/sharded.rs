use std::collections::hash_map::RandomState;
use std::hash::BuildHasher;

use super::{LockedSeenSet, SeenSet};

const DEFAULT_SHARDS: usize = 16;

/// Keys spread over independently locked [`LockedSeenSet`] shards.
///
/// A key always maps to the same shard, so per-key linearizability carries over
/// from the shard; unrelated keys contend only when they share a shard.
#[derive(Debug)]
pub struct ShardedSeenSet {
    shards: Vec<LockedSeenSet>,
    hasher: RandomState,
}

impl ShardedSeenSet {
    /// `shards` is clamped to at least 1.
    pub fn new(shards: usize) -> Self {
        Self {
            shards: (0..shards.max(1)).map(|_| LockedSeenSet::new()).collect(),
            hasher: RandomState::new(),
        }
    }

    pub fn shard_count(&self) -> usize {
        self.shards.len()
    }

    fn shard(&self, key: &str) -> &LockedSeenSet {
        let idx = (self.hasher.hash_one(key) % self.shards.len() as u64) as usize;
        &self.shards[idx]
    }
}

impl Default for ShardedSeenSet {
    fn default() -> Self {
        Self::new(DEFAULT_SHARDS)
    }
}

impl SeenSet for ShardedSeenSet {
    fn should_include(&self, key: &str) -> bool {
        self.shard(key).should_include(key)
    }

    fn contains(&self, key: &str) -> bool {
        self.shard(key).contains(key)
    }

    fn len(&self) -> usize {
        self.shards.iter().map(LockedSeenSet::len).sum()
    }
}
