//! Hash-map backed transposition table

use std::collections::HashMap;

use log::trace;

use super::entry::TTEntry;

/// Default number of entries before a flush.
pub const DEFAULT_TT_CAPACITY: usize = 262_144;

#[derive(Debug, Clone)]
pub struct TranspositionTable {
    entries: HashMap<u64, TTEntry>,
    capacity: usize,
}

impl Default for TranspositionTable {
    fn default() -> Self {
        Self::new(DEFAULT_TT_CAPACITY)
    }
}

impl TranspositionTable {
    /// Create a table that holds up to `capacity` entries (at least one).
    pub fn new(capacity: usize) -> Self {
        TranspositionTable {
            entries: HashMap::new(),
            capacity: capacity.max(1),
        }
    }

    #[inline]
    pub fn probe(&self, hash: u64) -> Option<&TTEntry> {
        self.entries.get(&hash)
    }

    /// Store an entry, overwriting any previous one for `hash`.
    ///
    /// Inserting a new key into a full table clears it first.
    pub fn store(&mut self, hash: u64, entry: TTEntry) {
        if self.entries.len() >= self.capacity && !self.entries.contains_key(&hash) {
            trace!("tt flush: {} entries at capacity {}", self.entries.len(), self.capacity);
            self.entries.clear();
        }
        self.entries.insert(hash, entry);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Change the capacity. A table already above the new limit is cleared.
    pub fn resize(&mut self, capacity: usize) {
        self.capacity = capacity.max(1);
        if self.entries.len() > self.capacity {
            self.entries.clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tt::NodeType;

    fn entry(depth: u8, score: i32) -> TTEntry {
        TTEntry::new(depth, score, NodeType::Exact, None)
    }

    #[test]
    fn test_store_and_probe() {
        let mut tt = TranspositionTable::new(16);
        assert!(tt.probe(42).is_none());

        tt.store(42, entry(2, 150));
        let hit = tt.probe(42).copied();
        assert_eq!(hit, Some(entry(2, 150)));

        tt.store(42, entry(4, -20));
        assert_eq!(tt.probe(42).map(|e| e.score), Some(-20));
        assert_eq!(tt.len(), 1);
    }

    #[test]
    fn test_full_flush_at_capacity() {
        let mut tt = TranspositionTable::new(4);
        for key in 0..4 {
            tt.store(key, entry(1, key as i32));
        }
        assert_eq!(tt.len(), 4);

        // Overwriting an existing key does not flush
        tt.store(3, entry(2, 99));
        assert_eq!(tt.len(), 4);

        tt.store(100, entry(1, 7));
        assert_eq!(tt.len(), 1);
        assert!(tt.probe(0).is_none());
        assert_eq!(tt.probe(100).map(|e| e.score), Some(7));
    }

    #[test]
    fn test_clear_and_resize() {
        let mut tt = TranspositionTable::default();
        assert_eq!(tt.capacity(), DEFAULT_TT_CAPACITY);
        for key in 0..10 {
            tt.store(key, entry(1, 0));
        }
        tt.resize(5);
        assert!(tt.is_empty());
        assert_eq!(tt.capacity(), 5);

        tt.store(1, entry(1, 0));
        tt.clear();
        assert!(tt.is_empty());

        assert_eq!(TranspositionTable::new(0).capacity(), 1);
    }
}
