// Copyright 2025-present Quaero contributors
// SPDX-License-Identifier: Apache-2.0

//! Sharded relevance accumulator for the parallel retrieval path.
//!
//! A fixed array of mutex-guarded maps, indexed by `key mod shard_count`.
//! Writers from the rayon pool contend only within a shard, never across
//! shards. The structure is ephemeral: one is created per query, filled by
//! plus-term scoring, thinned by minus-term erasure, then drained into an
//! ordered map.
//!
//! # Guarantees
//!
//! - Per-shard linearizability; no ordering across shards.
//! - [`ShardedAccumulator::drain_ordered`] takes `&mut self`, so the
//!   exclusive-access requirement of the drain step is enforced by the
//!   borrow checker rather than by convention.

use crate::types::DocId;
use std::collections::{BTreeMap, HashMap};
use std::sync::{Mutex, PoisonError};

/// Default shard count, sized for typical core counts without making the
/// drain step scan an excessive number of locks.
pub const DEFAULT_SHARD_COUNT: usize = 12;

/// Fixed-shard `DocId -> f64` accumulator with per-shard mutual exclusion.
#[derive(Debug)]
pub struct ShardedAccumulator {
    shards: Vec<Mutex<HashMap<DocId, f64>>>,
}

impl ShardedAccumulator {
    /// Creates an accumulator with [`DEFAULT_SHARD_COUNT`] shards.
    pub fn new() -> Self {
        Self::with_shards(DEFAULT_SHARD_COUNT)
    }

    /// Creates an accumulator with an explicit shard count.
    ///
    /// # Panics
    ///
    /// Panics if `shard_count` is zero.
    pub fn with_shards(shard_count: usize) -> Self {
        assert!(shard_count > 0, "shard count must be positive");
        Self {
            shards: (0..shard_count).map(|_| Mutex::new(HashMap::new())).collect(),
        }
    }

    #[inline]
    fn shard(&self, key: DocId) -> &Mutex<HashMap<DocId, f64>> {
        // rem_euclid keeps the route non-negative even for sentinel ids.
        let index = key.rem_euclid(self.shards.len() as DocId) as usize;
        &self.shards[index]
    }

    /// Adds `delta` to the value stored under `key`, creating it at zero
    /// if absent.
    pub fn add(&self, key: DocId, delta: f64) {
        let mut shard = self
            .shard(key)
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        *shard.entry(key).or_insert(0.0) += delta;
    }

    /// Removes `key` if present.
    pub fn erase(&self, key: DocId) {
        let mut shard = self
            .shard(key)
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        shard.remove(&key);
    }

    /// Merges all shards into a single key-ordered map, emptying the shards.
    ///
    /// Requires exclusive access (`&mut self`): no mutator may run
    /// concurrently with the drain.
    pub fn drain_ordered(&mut self) -> BTreeMap<DocId, f64> {
        let mut merged = BTreeMap::new();
        for shard in &mut self.shards {
            let shard = shard.get_mut().unwrap_or_else(PoisonError::into_inner);
            merged.extend(shard.drain());
        }
        merged
    }

    /// Number of shards the accumulator routes over.
    pub fn shard_count(&self) -> usize {
        self.shards.len()
    }
}

impl Default for ShardedAccumulator {
    fn default() -> Self {
        Self::new()
    }
}
