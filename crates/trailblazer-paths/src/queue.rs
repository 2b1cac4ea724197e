//! Min-priority queue with decrease-key.
//!
//! Entries live in a binary heap keyed by `(priority, insertion_order)`, so
//! lower priorities are dequeued first and ties come out FIFO. A side table
//! maps each element to its heap slot, which is what makes
//! [`decrease_key`](IndexedPriorityQueue::decrease_key) O(log n).

use std::cmp::Ordering;
use std::collections::HashMap;
use std::hash::Hash;

use crate::error::{Error, Result};

#[derive(Debug, Clone)]
struct Entry<K> {
    key: K,
    priority: f64,
    /// Monotonically increasing counter used to break ties.
    seq: u64,
}

impl<K> Entry<K> {
    #[inline]
    fn cmp_rank(&self, other: &Self) -> Ordering {
        self.priority
            .total_cmp(&other.priority)
            .then(self.seq.cmp(&other.seq))
    }
}

/// A min-priority queue over unique elements.
#[derive(Debug, Clone)]
pub struct IndexedPriorityQueue<K> {
    heap: Vec<Entry<K>>,
    slots: HashMap<K, usize>,
    seq: u64,
}

impl<K: Eq + Hash + Clone> Default for IndexedPriorityQueue<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + Hash + Clone> IndexedPriorityQueue<K> {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self {
            heap: Vec::new(),
            slots: HashMap::new(),
            seq: 0,
        }
    }

    /// Create an empty queue with room for `cap` elements.
    pub fn with_capacity(cap: usize) -> Self {
        Self {
            heap: Vec::with_capacity(cap),
            slots: HashMap::with_capacity(cap),
            seq: 0,
        }
    }

    /// Number of queued elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Whether the queue is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Whether `key` is queued.
    #[inline]
    pub fn contains(&self, key: &K) -> bool {
        self.slots.contains_key(key)
    }

    /// Current priority of `key`, if queued.
    pub fn priority(&self, key: &K) -> Option<f64> {
        self.slots.get(key).map(|&i| self.heap[i].priority)
    }

    /// The minimum element and its priority, without removing it.
    pub fn peek_min(&self) -> Option<(&K, f64)> {
        self.heap.first().map(|e| (&e.key, e.priority))
    }

    /// Insert `key` with `priority`.
    ///
    /// Fails with [`Error::DuplicateEntry`] if `key` is already queued; use
    /// [`decrease_key`](Self::decrease_key) to change a queued priority.
    pub fn enqueue(&mut self, key: K, priority: f64) -> Result<()> {
        if self.slots.contains_key(&key) {
            return Err(Error::DuplicateEntry);
        }
        let seq = self.seq;
        self.seq += 1;
        let i = self.heap.len();
        self.slots.insert(key.clone(), i);
        self.heap.push(Entry { key, priority, seq });
        self.sift_up(i);
        Ok(())
    }

    /// Remove and return the element with the smallest priority.
    pub fn dequeue_min(&mut self) -> Result<(K, f64)> {
        if self.heap.is_empty() {
            return Err(Error::QueueEmpty);
        }
        let last = self.heap.len() - 1;
        self.swap(0, last);
        let Some(entry) = self.heap.pop() else {
            return Err(Error::QueueEmpty);
        };
        self.slots.remove(&entry.key);
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        Ok((entry.key, entry.priority))
    }

    /// Lower the priority of a queued element.
    ///
    /// Returns `Ok(false)` without changing anything when `priority` is not
    /// strictly lower than the current one. Fails with
    /// [`Error::MissingEntry`] if `key` is not queued.
    pub fn decrease_key(&mut self, key: &K, priority: f64) -> Result<bool> {
        let Some(&i) = self.slots.get(key) else {
            return Err(Error::MissingEntry);
        };
        if priority.total_cmp(&self.heap[i].priority) != Ordering::Less {
            return Ok(false);
        }
        self.heap[i].priority = priority;
        self.sift_up(i);
        Ok(true)
    }

    /// Remove every element.
    pub fn clear(&mut self) {
        self.heap.clear();
        self.slots.clear();
    }

    // -----------------------------------------------------------------------
    // Heap maintenance
    // -----------------------------------------------------------------------

    fn sift_up(&mut self, mut i: usize) {
        while i > 0 {
            let parent = (i - 1) / 2;
            if self.heap[i].cmp_rank(&self.heap[parent]) != Ordering::Less {
                break;
            }
            self.swap(i, parent);
            i = parent;
        }
    }

    fn sift_down(&mut self, mut i: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * i + 1;
            let right = left + 1;
            let mut smallest = i;
            if left < len && self.heap[left].cmp_rank(&self.heap[smallest]) == Ordering::Less {
                smallest = left;
            }
            if right < len && self.heap[right].cmp_rank(&self.heap[smallest]) == Ordering::Less {
                smallest = right;
            }
            if smallest == i {
                break;
            }
            self.swap(i, smallest);
            i = smallest;
        }
    }

    fn swap(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        self.heap.swap(a, b);
        if let Some(slot) = self.slots.get_mut(&self.heap[a].key) {
            *slot = a;
        }
        if let Some(slot) = self.slots.get_mut(&self.heap[b].key) {
            *slot = b;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{RngExt, SeedableRng};

    #[test]
    fn dequeue_in_priority_order() {
        let mut q = IndexedPriorityQueue::new();
        q.enqueue("c", 3.0).unwrap();
        q.enqueue("a", 1.0).unwrap();
        q.enqueue("d", 4.0).unwrap();
        q.enqueue("b", 2.0).unwrap();
        assert_eq!(q.len(), 4);
        assert_eq!(q.peek_min(), Some((&"a", 1.0)));

        let order: Vec<_> = std::iter::from_fn(|| q.dequeue_min().ok())
            .map(|(k, _)| k)
            .collect();
        assert_eq!(order, vec!["a", "b", "c", "d"]);
        assert!(q.is_empty());
    }

    #[test]
    fn ties_come_out_in_insertion_order() {
        let mut q = IndexedPriorityQueue::new();
        for k in 0..10 {
            q.enqueue(k, 5.0).unwrap();
        }
        for k in 0..10 {
            assert_eq!(q.dequeue_min().unwrap(), (k, 5.0));
        }
    }

    #[test]
    fn empty_dequeue_fails() {
        let mut q: IndexedPriorityQueue<u32> = IndexedPriorityQueue::new();
        assert_eq!(q.dequeue_min(), Err(Error::QueueEmpty));
        q.enqueue(1, 0.0).unwrap();
        q.dequeue_min().unwrap();
        assert_eq!(q.dequeue_min(), Err(Error::QueueEmpty));
    }

    #[test]
    fn duplicate_enqueue_fails() {
        let mut q = IndexedPriorityQueue::new();
        q.enqueue('x', 1.0).unwrap();
        assert_eq!(q.enqueue('x', 0.5), Err(Error::DuplicateEntry));
        assert_eq!(q.priority(&'x'), Some(1.0));
    }

    #[test]
    fn decrease_key_moves_element_forward() {
        let mut q = IndexedPriorityQueue::new();
        q.enqueue("a", 1.0).unwrap();
        q.enqueue("b", 2.0).unwrap();
        q.enqueue("c", 3.0).unwrap();
        assert!(q.decrease_key(&"c", 0.5).unwrap());
        assert_eq!(q.priority(&"c"), Some(0.5));
        assert_eq!(q.dequeue_min().unwrap(), ("c", 0.5));
        assert_eq!(q.dequeue_min().unwrap(), ("a", 1.0));
    }

    #[test]
    fn decrease_key_keeps_insertion_rank() {
        let mut q = IndexedPriorityQueue::new();
        q.enqueue("a", 5.0).unwrap();
        q.enqueue("b", 3.0).unwrap();
        assert!(q.decrease_key(&"a", 3.0).unwrap());
        // Equal priorities: "a" was queued first.
        assert_eq!(q.dequeue_min().unwrap(), ("a", 3.0));
        assert_eq!(q.dequeue_min().unwrap(), ("b", 3.0));
    }

    #[test]
    fn decrease_key_never_raises_priority() {
        let mut q = IndexedPriorityQueue::new();
        q.enqueue("a", 1.0).unwrap();
        q.enqueue("b", 2.0).unwrap();
        assert!(!q.decrease_key(&"a", 9.0).unwrap());
        assert!(!q.decrease_key(&"a", 1.0).unwrap());
        assert_eq!(q.priority(&"a"), Some(1.0));
        assert_eq!(q.dequeue_min().unwrap().0, "a");
    }

    #[test]
    fn decrease_key_of_missing_element_fails() {
        let mut q = IndexedPriorityQueue::new();
        q.enqueue(1, 1.0).unwrap();
        assert_eq!(q.decrease_key(&2, 0.0), Err(Error::MissingEntry));
        q.dequeue_min().unwrap();
        assert_eq!(q.decrease_key(&1, 0.0), Err(Error::MissingEntry));
    }

    #[test]
    fn random_operations_dequeue_non_decreasing() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut q = IndexedPriorityQueue::new();
        for k in 0..500u32 {
            q.enqueue(k, rng.random_range(0.0..1000.0)).unwrap();
        }
        for _ in 0..300 {
            let k = rng.random_range(0..500u32);
            if let Some(p) = q.priority(&k) {
                let lowered = p - rng.random_range(0.0..50.0);
                assert!(q.decrease_key(&k, lowered).unwrap());
                assert_eq!(q.priority(&k), Some(lowered));
            }
        }
        let mut last = f64::NEG_INFINITY;
        let mut seen = 0;
        while let Ok((k, p)) = q.dequeue_min() {
            assert!(p >= last, "priority {p} after {last}");
            assert!(!q.contains(&k));
            last = p;
            seen += 1;
        }
        assert_eq!(seen, 500);
    }

    #[test]
    fn interleaved_enqueue_and_dequeue() {
        let mut q = IndexedPriorityQueue::with_capacity(4);
        q.enqueue(10, 10.0).unwrap();
        q.enqueue(5, 5.0).unwrap();
        assert_eq!(q.dequeue_min().unwrap().0, 5);
        q.enqueue(1, 1.0).unwrap();
        q.enqueue(7, 7.0).unwrap();
        assert_eq!(q.dequeue_min().unwrap().0, 1);
        assert_eq!(q.dequeue_min().unwrap().0, 7);
        q.clear();
        assert!(q.is_empty());
        assert!(!q.contains(&10));
    }
}
