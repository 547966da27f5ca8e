use crate::errors::HeapError;
use super::FxHashMap;

use std::{fmt::Debug, hash::Hash};



/// Entry stored in the heap array
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeapEntry<P, K, V> {
    pub priority: P, // Lower values leave the heap first
    pub key: K, // Stable external key, used to locate the entry after it moves
    pub payload: V,
}

/// Array-backed binary min-heap with an external key index
///
/// The heap position of an entry is its index in `entries`. `positions` maps every key
/// held by the heap to that index and is rewritten on every swap, so an arbitrary entry
/// can be found in O(1) and removed in O(log n).
///
/// Ties between equal priorities are never reordered: sift-up only moves past a strictly
/// larger parent and sift-down only moves below a strictly smaller child (left first).
#[derive(Debug, Clone)]
pub struct IndexedMinHeap<P, K, V> {
    entries: Vec<HeapEntry<P, K, V>>,
    positions: FxHashMap<K, usize>,
}

impl<P, K, V> Default for IndexedMinHeap<P, K, V> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            positions: FxHashMap::default(),
        }
    }
}

impl<P, K, V> IndexedMinHeap<P, K, V>
where
    P: Ord + Copy,
    K: Eq + Hash + Copy + Debug,
{
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let mut positions = FxHashMap::default();
        positions.reserve(capacity);
        Self {
            entries: Vec::with_capacity(capacity),
            positions,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Insert a new entry
    /// Fails with `DuplicateKey` if the key is already held, the heap is left untouched
    pub fn insert(&mut self, priority: P, key: K, payload: V) -> Result<(), HeapError> {
        if self.positions.contains_key(&key) {
            return Err(HeapError::DuplicateKey(format!("{:?}", key)));
        }

        // Append to the end, then move up until the parent is no larger
        let position = self.entries.len();
        self.entries.push(HeapEntry { priority, key, payload });
        self.positions.insert(key, position);
        self.sift_up(position);

        Ok(())
    }

    /// Remove and return the entry with the lowest priority
    /// Returns None on an empty heap
    pub fn extract_min(&mut self) -> Option<HeapEntry<P, K, V>> {
        if self.entries.is_empty() {
            return None;
        }
        Some(self.remove_at(0))
    }

    /// Entry with the lowest priority, without removing it
    pub fn peek(&self) -> Option<&HeapEntry<P, K, V>> {
        self.entries.first()
    }

    pub fn contains(&self, key: &K) -> bool {
        self.positions.contains_key(key)
    }

    /// Current priority of the entry held under `key`
    pub fn priority_of(&self, key: &K) -> Result<P, HeapError> {
        self.get(key)
            .map(|entry| entry.priority)
            .ok_or_else(|| HeapError::KeyNotFound(format!("{:?}", key)))
    }

    pub fn get(&self, key: &K) -> Option<&HeapEntry<P, K, V>> {
        self.positions.get(key).map(|&position| &self.entries[position])
    }

    /// Array position currently holding `key`
    pub fn position_of(&self, key: &K) -> Option<usize> {
        self.positions.get(key).copied()
    }

    /// Remove the entry held under `key`, wherever it sits in the heap
    pub fn remove_and_extract(&mut self, key: &K) -> Result<HeapEntry<P, K, V>, HeapError> {
        let position = self
            .position_of(key)
            .ok_or_else(|| HeapError::KeyNotFound(format!("{:?}", key)))?;
        Ok(self.remove_at(position))
    }

    /// Entries in array order, position 0 is the root
    pub fn as_slice(&self) -> &[HeapEntry<P, K, V>] {
        &self.entries
    }

    /// Iterate entries in array order
    pub fn iter(&self) -> impl Iterator<Item = &HeapEntry<P, K, V>> {
        self.entries.iter()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.positions.clear();
    }

    /// Swap the entry at `position` with the last one, pop it, then restore the heap
    /// property around the relocated former-last entry in both directions
    fn remove_at(&mut self, position: usize) -> HeapEntry<P, K, V> {
        let last = self.entries.len() - 1;
        self.swap(position, last);

        // `last` is always a valid index here, the heap is non-empty
        let removed = self.entries.swap_remove(last);
        self.positions.remove(&removed.key);

        if position < self.entries.len() {
            // Its neighbours changed on both sides, so try up first then down
            if self.sift_up(position) == position {
                self.sift_down(position);
            }
        }

        removed
    }

    /// Move the entry at `position` up until its parent is no larger
    /// Returns the final position
    fn sift_up(&mut self, mut position: usize) -> usize {
        while position > 0 {
            let parent = parent_of(position);
            if self.entries[position].priority >= self.entries[parent].priority {
                break;
            }
            self.swap(position, parent);
            position = parent;
        }
        position
    }

    /// Move the entry at `position` down until no child is smaller
    /// Returns the final position
    fn sift_down(&mut self, mut position: usize) -> usize {
        let len = self.entries.len();
        loop {
            let left = left_child_of(position);
            if left >= len {
                break; // No children
            }
            let right = left + 1;

            // Smallest child, the left one wins ties
            let mut child = left;
            if right < len && self.entries[right].priority < self.entries[left].priority {
                child = right;
            }

            if self.entries[child].priority >= self.entries[position].priority {
                break;
            }
            self.swap(position, child);
            position = child;
        }
        position
    }

    /// Swap two array positions and re-point both keys at their new positions
    fn swap(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        self.entries.swap(a, b);
        self.positions.insert(self.entries[a].key, a);
        self.positions.insert(self.entries[b].key, b);
    }
}

#[inline(always)]
fn parent_of(position: usize) -> usize {
    (position - 1) / 2
}

#[inline(always)]
fn left_child_of(position: usize) -> usize {
    2 * position + 1
}
