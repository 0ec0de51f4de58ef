//! Binary min-heap with decrease-key over integer keys.
//!
//! Keys are drawn from `0..capacity` (typically node ids), so the position of
//! every key inside the heap array is tracked in a dense index vector. That
//! index is what makes [`PriorityQueue::set`] an `O(log n)` reposition rather
//! than a linear search.
//!
//! Ties between equal priorities are broken by the order in which keys
//! entered the queue: the earlier key is popped first. Updating a queued key
//! with [`PriorityQueue::set`] keeps its original place in that order.

use crate::error::{GraphError, Result};

const ABSENT: usize = usize::MAX;

#[derive(Clone, Copy, Debug)]
struct Entry<P> {
    key: usize,
    priority: P,
    sequence: u64,
}

impl<P: PartialOrd> Entry<P> {
    fn precedes(&self, other: &Self) -> bool {
        if self.priority < other.priority {
            return true;
        }
        if other.priority < self.priority {
            return false;
        }
        self.sequence < other.sequence
    }
}

/// Priority queue over keys `0..capacity` with in-place priority updates.
///
/// # Examples
/// ```
/// use graphidx_core::PriorityQueue;
///
/// let mut queue = PriorityQueue::new(4);
/// queue.insert(2, 7.0)?;
/// queue.insert(0, 3.0)?;
/// queue.set(2, 1.0)?;
/// assert_eq!(queue.peek_min()?, (2, 1.0));
/// assert_eq!(queue.pop_min()?, (2, 1.0));
/// assert_eq!(queue.pop_min()?, (0, 3.0));
/// assert!(queue.pop_min().is_err());
/// # Ok::<(), graphidx_core::GraphError>(())
/// ```
#[derive(Clone, Debug)]
pub struct PriorityQueue<P> {
    heap: Vec<Entry<P>>,
    position: Vec<usize>,
    next_sequence: u64,
}

impl<P: Copy + PartialOrd> PriorityQueue<P> {
    /// Creates an empty queue accepting keys in `0..capacity`.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            heap: Vec::new(),
            position: vec![ABSENT; capacity],
            next_sequence: 0,
        }
    }

    /// Exclusive upper bound for keys.
    #[must_use]
    #[rustfmt::skip]
    pub fn capacity(&self) -> usize { self.position.len() }

    /// Number of queued keys.
    #[must_use]
    #[rustfmt::skip]
    pub fn len(&self) -> usize { self.heap.len() }

    /// Returns `true` when nothing is queued.
    #[must_use]
    #[rustfmt::skip]
    pub fn is_empty(&self) -> bool { self.heap.is_empty() }

    /// Returns `true` when `key` is queued.
    #[must_use]
    pub fn contains(&self, key: usize) -> bool {
        self.position.get(key).is_some_and(|&pos| pos != ABSENT)
    }

    /// Current priority of `key`, if queued.
    #[must_use]
    pub fn priority(&self, key: usize) -> Option<P> {
        let pos = *self.position.get(key)?;
        self.heap.get(pos).map(|entry| entry.priority)
    }

    /// Removes every entry, keeping the allocated storage for reuse.
    pub fn clear(&mut self) {
        for entry in &self.heap {
            self.position[entry.key] = ABSENT;
        }
        self.heap.clear();
        self.next_sequence = 0;
    }

    /// Queues a new `key` with `priority`.
    ///
    /// # Errors
    /// Returns [`GraphError::DuplicateKey`] when `key` is already queued,
    /// [`GraphError::KeyOutOfRange`] when `key >= capacity()` and
    /// [`GraphError::IncomparablePriority`] for priorities such as NaN.
    pub fn insert(&mut self, key: usize, priority: P) -> Result<()> {
        self.check(key, priority)?;
        if self.contains(key) {
            return Err(GraphError::DuplicateKey { key });
        }
        self.push(key, priority);
        Ok(())
    }

    /// Queues `key` or moves it to its new `priority`.
    ///
    /// The entry is sifted up or down as needed, so both decreases and
    /// increases are supported.
    ///
    /// # Errors
    /// Returns [`GraphError::KeyOutOfRange`] when `key >= capacity()` and
    /// [`GraphError::IncomparablePriority`] for priorities such as NaN.
    pub fn set(&mut self, key: usize, priority: P) -> Result<()> {
        self.check(key, priority)?;
        let pos = self.position[key];
        if pos == ABSENT {
            self.push(key, priority);
            return Ok(());
        }
        let previous = self.heap[pos].priority;
        self.heap[pos].priority = priority;
        if priority < previous {
            self.sift_up(pos);
        } else {
            self.sift_down(pos);
        }
        Ok(())
    }

    /// Returns the key with the smallest priority without removing it.
    ///
    /// # Errors
    /// Returns [`GraphError::EmptyQueue`] when nothing is queued.
    pub fn peek_min(&self) -> Result<(usize, P)> {
        self.heap
            .first()
            .map(|entry| (entry.key, entry.priority))
            .ok_or(GraphError::EmptyQueue)
    }

    /// Removes and returns the key with the smallest priority.
    ///
    /// # Errors
    /// Returns [`GraphError::EmptyQueue`] when nothing is queued.
    pub fn pop_min(&mut self) -> Result<(usize, P)> {
        if self.heap.is_empty() {
            return Err(GraphError::EmptyQueue);
        }
        let last = self.heap.len() - 1;
        self.swap(0, last);
        let entry = self.heap.pop().ok_or(GraphError::EmptyQueue)?;
        self.position[entry.key] = ABSENT;
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        Ok((entry.key, entry.priority))
    }

    fn check(&self, key: usize, priority: P) -> Result<()> {
        if key >= self.capacity() {
            return Err(GraphError::KeyOutOfRange {
                key,
                capacity: self.capacity(),
            });
        }
        if priority.partial_cmp(&priority).is_none() {
            return Err(GraphError::IncomparablePriority { key });
        }
        Ok(())
    }

    fn push(&mut self, key: usize, priority: P) {
        let pos = self.heap.len();
        self.heap.push(Entry {
            key,
            priority,
            sequence: self.next_sequence,
        });
        self.next_sequence += 1;
        self.position[key] = pos;
        self.sift_up(pos);
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.position[self.heap[a].key] = a;
        self.position[self.heap[b].key] = b;
    }

    fn sift_up(&mut self, mut pos: usize) {
        while pos > 0 {
            let parent = (pos - 1) / 2;
            if !self.heap[pos].precedes(&self.heap[parent]) {
                break;
            }
            self.swap(pos, parent);
            pos = parent;
        }
    }

    fn sift_down(&mut self, mut pos: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * pos + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            let mut smallest = left;
            if right < len && self.heap[right].precedes(&self.heap[left]) {
                smallest = right;
            }
            if !self.heap[smallest].precedes(&self.heap[pos]) {
                break;
            }
            self.swap(pos, smallest);
            pos = smallest;
        }
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use rstest::rstest;

    use super::*;

    impl<P: Copy + PartialOrd> PriorityQueue<P> {
        fn assert_consistent(&self) {
            for (pos, entry) in self.heap.iter().enumerate() {
                assert_eq!(self.position[entry.key], pos);
                if pos > 0 {
                    let parent = (pos - 1) / 2;
                    assert!(!entry.precedes(&self.heap[parent]));
                }
            }
            let queued = self.position.iter().filter(|&&p| p != ABSENT).count();
            assert_eq!(queued, self.heap.len());
        }
    }

    #[rstest]
    fn empty_queue_reports_empty() {
        let mut queue: PriorityQueue<i32> = PriorityQueue::new(3);
        assert_eq!(queue.peek_min(), Err(GraphError::EmptyQueue));
        assert_eq!(queue.pop_min(), Err(GraphError::EmptyQueue));
    }

    #[rstest]
    fn insert_rejects_duplicates_but_set_updates() {
        let mut queue = PriorityQueue::new(3);
        queue.insert(1, 5).expect("fresh key");
        assert_eq!(queue.insert(1, 2), Err(GraphError::DuplicateKey { key: 1 }));
        queue.set(1, 2).expect("set updates in place");
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.priority(1), Some(2));
    }

    #[rstest]
    fn rejects_out_of_range_keys_and_nan() {
        let mut queue = PriorityQueue::new(2);
        assert_eq!(
            queue.insert(2, 1.0),
            Err(GraphError::KeyOutOfRange {
                key: 2,
                capacity: 2
            })
        );
        assert_eq!(
            queue.set(0, f64::NAN),
            Err(GraphError::IncomparablePriority { key: 0 })
        );
        assert!(queue.is_empty());
    }

    #[rstest]
    fn ties_pop_in_insertion_order() {
        let mut queue = PriorityQueue::new(5);
        for key in [3, 1, 4, 0, 2] {
            queue.insert(key, 1).expect("fresh key");
        }
        let order: Vec<usize> = std::iter::from_fn(|| queue.pop_min().ok())
            .map(|(key, _)| key)
            .collect();
        assert_eq!(order, vec![3, 1, 4, 0, 2]);
    }

    #[rstest]
    fn set_can_increase_priority() {
        let mut queue = PriorityQueue::new(3);
        queue.insert(0, 1).expect("fresh key");
        queue.insert(1, 2).expect("fresh key");
        queue.insert(2, 3).expect("fresh key");
        queue.set(0, 10).expect("key in range");
        queue.assert_consistent();
        assert_eq!(queue.pop_min(), Ok((1, 2)));
        assert_eq!(queue.pop_min(), Ok((2, 3)));
        assert_eq!(queue.pop_min(), Ok((0, 10)));
    }

    #[rstest]
    fn clear_allows_reuse() {
        let mut queue = PriorityQueue::new(3);
        queue.insert(0, 1).expect("fresh key");
        queue.insert(2, 0).expect("fresh key");
        queue.clear();
        assert!(queue.is_empty());
        assert!(!queue.contains(2));
        queue.insert(2, 4).expect("cleared key can be queued again");
        assert_eq!(queue.peek_min(), Ok((2, 4)));
    }

    #[derive(Clone, Debug)]
    enum Op {
        Set(usize, i32),
        Pop,
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![
            3 => (0usize..16, -50i32..50).prop_map(|(k, p)| Op::Set(k, p)),
            1 => Just(Op::Pop),
        ]
    }

    proptest! {
        #[test]
        fn pop_min_returns_global_minimum(ops in proptest::collection::vec(op_strategy(), 0..200)) {
            let mut queue = PriorityQueue::new(16);
            let mut model: Vec<Option<i32>> = vec![None; 16];
            for op in ops {
                match op {
                    Op::Set(key, priority) => {
                        queue.set(key, priority).expect("key in range");
                        model[key] = Some(priority);
                    }
                    Op::Pop => {
                        let expected = model.iter().flatten().min().copied();
                        match queue.pop_min() {
                            Ok((key, priority)) => {
                                prop_assert_eq!(Some(priority), expected);
                                prop_assert_eq!(model[key], Some(priority));
                                model[key] = None;
                            }
                            Err(err) => {
                                prop_assert_eq!(err, GraphError::EmptyQueue);
                                prop_assert!(expected.is_none());
                            }
                        }
                    }
                }
                queue.assert_consistent();
            }
        }
    }
}
