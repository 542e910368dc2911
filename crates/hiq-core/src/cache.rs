//! Solution cache shared between solver runs.
//!
//! Entries are keyed by the exact starting position plus the goal, are only
//! ever added, and live as long as the cache object itself.

use crate::board::Fingerprint;
use crate::types::{Move, Topology};
use parking_lot::RwLock;
use std::collections::HashMap;

/// Identifies one solved problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub topology: Topology,
    pub target: u32,
    pub fingerprint: Fingerprint,
}

impl CacheKey {
    pub fn new(topology: Topology, target: u32, fingerprint: Fingerprint) -> Self {
        Self {
            topology,
            target,
            fingerprint,
        }
    }
}

/// Thread-safe memo of confirmed solutions.
#[derive(Debug, Default)]
pub struct SolutionCache {
    entries: RwLock<HashMap<CacheKey, Vec<Move>>>,
}

impl SolutionCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &CacheKey) -> Option<Vec<Move>> {
        self.entries.read().get(key).cloned()
    }

    pub fn contains(&self, key: &CacheKey) -> bool {
        self.entries.read().contains_key(key)
    }

    /// Stores `path` unless the key already has a solution.
    ///
    /// Returns `true` if this call inserted the entry.
    pub fn insert(&self, key: CacheKey, path: Vec<Move>) -> bool {
        let mut entries = self.entries.write();
        if entries.contains_key(&key) {
            return false;
        }
        entries.insert(key, path);
        true
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}
