//! Mutable-priority min-queue
//!
//! Binary heap with a position map, keyed by dense node index, supporting
//! the decrease-key operation Dijkstra relies on. Ties dequeue in
//! insertion order, matching the observable behavior of the baseline
//! stable-sort queue.

use std::cmp::Ordering;

#[derive(Debug, Clone, Copy)]
struct Entry {
    item: usize,
    priority: f64,
    /// Insertion sequence, the tie-break for equal priorities.
    /// Kept across priority updates.
    seq: u64,
}

/// Min-priority queue over dense node indices with priority update.
///
/// Items are `usize` indices below the capacity given at construction.
#[derive(Debug)]
pub struct IndexedMinHeap {
    heap: Vec<Entry>,
    /// item -> slot in `heap`
    pos: Vec<Option<usize>>,
    next_seq: u64,
}

impl IndexedMinHeap {
    /// Create a queue able to hold items `0..capacity`
    pub fn with_capacity(capacity: usize) -> Self {
        IndexedMinHeap {
            heap: Vec::with_capacity(capacity),
            pos: vec![None; capacity],
            next_seq: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn contains(&self, item: usize) -> bool {
        self.pos[item].is_some()
    }

    /// Insert an item with the given priority.
    ///
    /// Enqueueing an item that is already present is a caller error, but
    /// it must not corrupt ordering: it is treated as a priority change
    /// and keeps the item's original insertion rank.
    pub fn enqueue(&mut self, item: usize, priority: f64) {
        if self.pos[item].is_some() {
            self.update_priority(item, priority);
            return;
        }
        let slot = self.heap.len();
        self.heap.push(Entry { item, priority, seq: self.next_seq });
        self.next_seq += 1;
        self.pos[item] = Some(slot);
        self.sift_up(slot);
    }

    /// Remove and return the minimum-priority item, or `None` when empty.
    pub fn dequeue_min(&mut self) -> Option<(usize, f64)> {
        if self.heap.is_empty() {
            return None;
        }
        let min = self.heap.swap_remove(0);
        self.pos[min.item] = None;
        if !self.heap.is_empty() {
            self.pos[self.heap[0].item] = Some(0);
            self.sift_down(0);
        }
        Some((min.item, min.priority))
    }

    /// Change an item's priority and restore the queue invariant.
    ///
    /// Items no longer in the queue are ignored: with non-negative edge
    /// weights a settled node can never improve, so a late update is a
    /// no-op by construction.
    pub fn update_priority(&mut self, item: usize, priority: f64) {
        let Some(slot) = self.pos[item] else {
            return;
        };
        let old = self.heap[slot].priority;
        self.heap[slot].priority = priority;
        if priority < old {
            self.sift_up(slot);
        } else {
            self.sift_down(slot);
        }
    }

    /// Strict heap order: by priority, then by insertion sequence.
    fn less(&self, a: usize, b: usize) -> bool {
        let (ea, eb) = (&self.heap[a], &self.heap[b]);
        match ea.priority.partial_cmp(&eb.priority) {
            Some(Ordering::Less) => true,
            Some(Ordering::Greater) => false,
            // Equal, or incomparable (NaN never enters via the store)
            _ => ea.seq < eb.seq,
        }
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.pos[self.heap[a].item] = Some(a);
        self.pos[self.heap[b].item] = Some(b);
    }

    fn sift_up(&mut self, mut slot: usize) {
        while slot > 0 {
            let parent = (slot - 1) / 2;
            if !self.less(slot, parent) {
                break;
            }
            self.swap(slot, parent);
            slot = parent;
        }
    }

    fn sift_down(&mut self, mut slot: usize) {
        loop {
            let left = 2 * slot + 1;
            let right = left + 1;
            let mut smallest = slot;
            if left < self.heap.len() && self.less(left, smallest) {
                smallest = left;
            }
            if right < self.heap.len() && self.less(right, smallest) {
                smallest = right;
            }
            if smallest == slot {
                break;
            }
            self.swap(slot, smallest);
            slot = smallest;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dequeue_order() {
        let mut heap = IndexedMinHeap::with_capacity(4);
        heap.enqueue(0, 3.0);
        heap.enqueue(1, 1.0);
        heap.enqueue(2, 2.0);
        heap.enqueue(3, 0.5);

        assert_eq!(heap.dequeue_min(), Some((3, 0.5)));
        assert_eq!(heap.dequeue_min(), Some((1, 1.0)));
        assert_eq!(heap.dequeue_min(), Some((2, 2.0)));
        assert_eq!(heap.dequeue_min(), Some((0, 3.0)));
        assert_eq!(heap.dequeue_min(), None);
        assert!(heap.is_empty());
    }

    #[test]
    fn test_ties_dequeue_in_insertion_order() {
        let mut heap = IndexedMinHeap::with_capacity(5);
        for item in [4, 2, 0, 3, 1] {
            heap.enqueue(item, 7.0);
        }
        let order: Vec<usize> = std::iter::from_fn(|| heap.dequeue_min())
            .map(|(item, _)| item)
            .collect();
        assert_eq!(order, vec![4, 2, 0, 3, 1]);
    }

    #[test]
    fn test_decrease_key() {
        let mut heap = IndexedMinHeap::with_capacity(3);
        heap.enqueue(0, 10.0);
        heap.enqueue(1, 20.0);
        heap.enqueue(2, 30.0);

        heap.update_priority(2, 5.0);
        assert_eq!(heap.dequeue_min(), Some((2, 5.0)));
        assert_eq!(heap.dequeue_min(), Some((0, 10.0)));
    }

    #[test]
    fn test_increase_key() {
        let mut heap = IndexedMinHeap::with_capacity(3);
        heap.enqueue(0, 1.0);
        heap.enqueue(1, 2.0);
        heap.enqueue(2, 3.0);

        heap.update_priority(0, 9.0);
        assert_eq!(heap.dequeue_min(), Some((1, 2.0)));
        assert_eq!(heap.dequeue_min(), Some((2, 3.0)));
        assert_eq!(heap.dequeue_min(), Some((0, 9.0)));
    }

    #[test]
    fn test_decrease_key_keeps_insertion_rank_on_tie() {
        let mut heap = IndexedMinHeap::with_capacity(3);
        heap.enqueue(0, 5.0);
        heap.enqueue(1, 5.0);
        heap.enqueue(2, 9.0);

        // 2 joins the tie at 5.0 but was inserted last
        heap.update_priority(2, 5.0);
        assert_eq!(heap.dequeue_min(), Some((0, 5.0)));
        assert_eq!(heap.dequeue_min(), Some((1, 5.0)));
        assert_eq!(heap.dequeue_min(), Some((2, 5.0)));
    }

    #[test]
    fn test_duplicate_enqueue_is_priority_change() {
        let mut heap = IndexedMinHeap::with_capacity(2);
        heap.enqueue(0, 4.0);
        heap.enqueue(1, 6.0);
        heap.enqueue(1, 1.0);

        assert_eq!(heap.len(), 2);
        assert_eq!(heap.dequeue_min(), Some((1, 1.0)));
        assert_eq!(heap.dequeue_min(), Some((0, 4.0)));
    }

    #[test]
    fn test_update_after_dequeue_is_noop() {
        let mut heap = IndexedMinHeap::with_capacity(2);
        heap.enqueue(0, 1.0);
        heap.enqueue(1, 2.0);
        assert_eq!(heap.dequeue_min(), Some((0, 1.0)));

        heap.update_priority(0, 0.0);
        assert!(!heap.contains(0));
        assert_eq!(heap.dequeue_min(), Some((1, 2.0)));
    }
}
