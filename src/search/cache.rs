//! Position cache seam for the search.
//!
//! The search asks the cache for a score before expanding a node and offers
//! exact scores back after expanding one. Caches may drop entries, refuse
//! stores or fail internally: a miss only costs time, never changes the
//! chosen turn.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::{PentagoError, PentagoResult, PositionKey};

/// Cache of exact negamax scores keyed by position and remaining depth.
///
/// Implementations must return only scores previously stored for the same
/// `(key, depth)` pair. Failures are reported as misses.
pub trait PositionCache {
    /// Look up the score of `key` searched to `depth`.
    fn get(&mut self, key: PositionKey, depth: u8) -> Option<f32>;

    /// Record the exact score of `key` searched to `depth`.
    fn put(&mut self, key: PositionKey, depth: u8, score: f32);

    /// Drop every entry.
    fn clear(&mut self) {}
}

/// Cache that never stores anything and always misses.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoCache;

impl PositionCache for NoCache {
    #[inline]
    fn get(&mut self, _key: PositionKey, _depth: u8) -> Option<f32> {
        None
    }

    #[inline]
    fn put(&mut self, _key: PositionKey, _depth: u8, _score: f32) {}
}

/// Counters kept by `TranspositionTable`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub stores: u64,
    /// Times the table was emptied because it reached capacity.
    pub evictions: u64,
}

/// In-memory position cache with a fixed entry limit.
///
/// When a store would exceed the limit the whole table is cleared first.
/// Scores depend on the remaining depth, so entries for different depths
/// of the same position are kept apart.
///
/// # Example
///
/// ```
/// use pentago::core::Board;
/// use pentago::search::{PositionCache, TranspositionTable};
///
/// let mut tt = TranspositionTable::new(1024);
/// let key = Board::default().key();
///
/// tt.put(key, 3, 1.0);
/// assert_eq!(tt.get(key, 3), Some(1.0));
/// assert_eq!(tt.get(key, 2), None);
/// ```
#[derive(Clone, Debug)]
pub struct TranspositionTable {
    entries: FxHashMap<(PositionKey, u8), f32>,
    capacity: usize,
    stats: CacheStats,
}

impl TranspositionTable {
    /// Create a table holding at most `capacity` entries.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: FxHashMap::default(),
            capacity,
            stats: CacheStats::default(),
        }
    }

    /// Store a score, reporting allocation failure instead of aborting.
    pub fn try_put(&mut self, key: PositionKey, depth: u8, score: f32) -> PentagoResult<()> {
        if self.capacity == 0 {
            return Ok(());
        }
        let slot = (key, depth);
        if self.entries.len() >= self.capacity && !self.entries.contains_key(&slot) {
            tracing::debug!(entries = self.entries.len(), "transposition table full, clearing");
            self.entries.clear();
            self.stats.evictions += 1;
        }
        self.entries
            .try_reserve(1)
            .map_err(|_| PentagoError::AllocationFailure)?;
        self.entries.insert(slot, score);
        self.stats.stores += 1;
        Ok(())
    }

    /// Number of stored entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry limit.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[must_use]
    pub fn stats(&self) -> &CacheStats {
        &self.stats
    }
}

impl PositionCache for TranspositionTable {
    fn get(&mut self, key: PositionKey, depth: u8) -> Option<f32> {
        let found = self.entries.get(&(key, depth)).copied();
        if found.is_some() {
            self.stats.hits += 1;
        } else {
            self.stats.misses += 1;
        }
        found
    }

    fn put(&mut self, key: PositionKey, depth: u8, score: f32) {
        if let Err(err) = self.try_put(key, depth, score) {
            tracing::warn!(%err, "dropping position cache entry");
        }
    }

    fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Board, Cell, Colour};

    fn key(seed: usize) -> PositionKey {
        let mut board = Board::new(Colour::PlayerA);
        board.set(seed / 6, seed % 6, Cell::PlayerB).unwrap();
        board.key()
    }

    #[test]
    fn test_no_cache_always_misses() {
        let mut cache = NoCache;
        cache.put(key(0), 1, 3.0);
        assert_eq!(cache.get(key(0), 1), None);
    }

    #[test]
    fn test_store_and_probe() {
        let mut tt = TranspositionTable::new(16);
        tt.put(key(1), 2, -1.0);

        assert_eq!(tt.get(key(1), 2), Some(-1.0));
        assert_eq!(tt.get(key(1), 3), None);
        assert_eq!(tt.get(key(2), 2), None);
        assert_eq!(tt.stats().hits, 1);
        assert_eq!(tt.stats().misses, 2);
        assert_eq!(tt.stats().stores, 1);
    }

    #[test]
    fn test_infinite_scores_round_trip() {
        let mut tt = TranspositionTable::new(4);
        tt.put(key(3), 1, f32::INFINITY);
        assert_eq!(tt.get(key(3), 1), Some(f32::INFINITY));
    }

    #[test]
    fn test_capacity_clears_table() {
        let mut tt = TranspositionTable::new(2);
        tt.put(key(0), 1, 0.0);
        tt.put(key(1), 1, 0.0);
        assert_eq!(tt.len(), 2);

        // Overwriting an existing entry does not evict.
        tt.put(key(1), 1, 1.0);
        assert_eq!(tt.len(), 2);

        tt.put(key(2), 1, 0.0);
        assert_eq!(tt.len(), 1);
        assert_eq!(tt.stats().evictions, 1);
        assert_eq!(tt.get(key(2), 1), Some(0.0));
    }

    #[test]
    fn test_zero_capacity_stores_nothing() {
        let mut tt = TranspositionTable::new(0);
        tt.put(key(0), 1, 2.0);
        assert!(tt.is_empty());
        assert_eq!(tt.get(key(0), 1), None);
    }

    #[test]
    fn test_clear() {
        let mut tt = TranspositionTable::new(8);
        tt.put(key(5), 1, 2.0);
        tt.clear();
        assert!(tt.is_empty());
    }
}
