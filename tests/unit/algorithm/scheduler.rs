//! Tests for the lazy-invalidation entropy queue

#[cfg(test)]
mod tests {
    use wavetile::algorithm::scheduler::EntropyQueue;

    // Tests a fresh queue is empty and pops nothing
    // Verified by seeding the version table in the constructor
    #[test]
    fn test_new_queue_is_empty() {
        let mut queue = EntropyQueue::new();
        assert!(queue.is_empty());
        assert_eq!(queue.len(), 0);
        assert_eq!(queue.pop_min(), None);
    }

    // Tests pop returns positions in ascending entropy order
    // Verified by reversing the entropy comparison in the heap ordering
    #[test]
    fn test_pop_min_order() {
        let mut queue = EntropyQueue::new();
        queue.update([0, 0], 0.9);
        queue.update([1, 1], 0.1);
        queue.update([2, 2], 0.5);

        assert_eq!(queue.pop_min(), Some([1, 1]));
        assert_eq!(queue.pop_min(), Some([2, 2]));
        assert_eq!(queue.pop_min(), Some([0, 0]));
        assert_eq!(queue.pop_min(), None);
    }

    // Tests a later update supersedes the earlier priority
    // Verified by popping with the stale-entry check removed
    #[test]
    fn test_update_replaces_priority() {
        let mut queue = EntropyQueue::new();
        queue.update([0, 0], 0.1);
        queue.update([1, 1], 0.5);
        // The re-key pushes [0, 0] behind [1, 1]; its old entry is stale
        queue.update([0, 0], 0.9);

        assert_eq!(queue.len(), 2);
        assert_eq!(queue.pop_min(), Some([1, 1]));
        assert_eq!(queue.pop_min(), Some([0, 0]));
        assert_eq!(queue.pop_min(), None);
    }

    // Tests each position is popped at most once per update
    // Verified by leaving the version table entry in place after a pop
    #[test]
    fn test_position_consumed_after_pop() {
        let mut queue = EntropyQueue::new();
        queue.update([0, 0], 0.3);
        queue.update([0, 0], 0.2);
        queue.update([0, 0], 0.1);

        assert_eq!(queue.pop_min(), Some([0, 0]));
        assert_eq!(queue.pop_min(), None);
        assert!(queue.is_empty());
    }

    // Tests a consumed position can be scheduled again
    // Verified by popping, re-inserting, and popping the same position
    #[test]
    fn test_reinsert_after_pop() {
        let mut queue = EntropyQueue::new();
        queue.update([0, 0], 0.4);
        assert_eq!(queue.pop_min(), Some([0, 0]));

        queue.update([0, 0], 0.8);
        assert!(!queue.is_empty());
        assert_eq!(queue.pop_min(), Some([0, 0]));
    }

    // Tests equal entropies are all popped, in some fixed order
    // Verified by asserting the popped set over a tie
    #[test]
    fn test_ties_pop_every_position() {
        let mut queue = EntropyQueue::new();
        queue.update([0, 0], 0.5);
        queue.update([0, 1], 0.5);
        queue.update([1, 0], 0.5);

        let mut popped = Vec::new();
        while let Some(position) = queue.pop_min() {
            popped.push(position);
        }
        popped.sort_unstable();
        assert_eq!(popped, vec![[0, 0], [0, 1], [1, 0]]);
    }
}
