//! Minimum-entropy cell scheduler with lazy invalidation
//!
//! A binary heap cannot decrease a key in place, so every update pushes a
//! fresh entry tagged with a per-position version counter and `pop_min`
//! discards entries whose tag has since been superseded. Amortized over a
//! whole attempt this keeps update and pop at O(log n).

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::collections::HashMap;

/// Heap entry pairing a position with the entropy it was scheduled at
///
/// Ordered so the binary max-heap yields the smallest entropy first; ties
/// fall back to position then version so the order is total. Which of two
/// equally uncertain cells wins is arbitrary and does not affect
/// correctness.
#[derive(Debug, Clone)]
struct QueueEntry {
    entropy: f64,
    position: [i32; 2],
    version: u64,
}

impl PartialEq for QueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for QueueEntry {}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .entropy
            .total_cmp(&self.entropy)
            .then_with(|| other.position.cmp(&self.position))
            .then_with(|| other.version.cmp(&self.version))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Priority queue over cell positions keyed by entropy
///
/// `update` logically replaces a position's priority; stale heap entries are
/// skipped when popped. Positions are authoritative at most once: after a
/// fresh entry is popped the position stays consumed until updated again.
#[derive(Debug, Default)]
pub struct EntropyQueue {
    heap: BinaryHeap<QueueEntry>,
    versions: HashMap<[i32; 2], u64>,
    next_version: u64,
}

impl EntropyQueue {
    /// Create an empty queue
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            versions: HashMap::new(),
            next_version: 0,
        }
    }

    /// Insert a position or replace its current priority
    ///
    /// Versions are drawn from a queue-wide counter that never repeats, so
    /// an entry left in the heap from before a pop can never alias a later
    /// re-insert of the same position.
    pub fn update(&mut self, position: [i32; 2], entropy: f64) {
        self.next_version += 1;
        self.versions.insert(position, self.next_version);
        self.heap.push(QueueEntry {
            entropy,
            position,
            version: self.next_version,
        });
    }

    /// Remove and return the position with the smallest current entropy
    ///
    /// Entries superseded by a later `update` or already consumed by an
    /// earlier pop are discarded along the way.
    pub fn pop_min(&mut self) -> Option<[i32; 2]> {
        while let Some(entry) = self.heap.pop() {
            if self.versions.get(&entry.position).copied() == Some(entry.version) {
                self.versions.remove(&entry.position);
                return Some(entry.position);
            }
        }
        None
    }

    /// Test whether any live entry remains
    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }

    /// Number of positions with a live entry
    pub fn len(&self) -> usize {
        self.versions.len()
    }
}
