//! Array-backed binary min-heap keyed by `f64` priorities.
//!
//! There is no decrease-key: callers re-insert an element with its new
//! priority and skip the stale copies when they come out. Elements with equal
//! priorities leave in an unspecified order.

use std::cmp::Ordering;

use crate::error::QueueError;

/// Initial (and minimum) logical capacity of a queue.
pub const DEFAULT_CAPACITY: usize = 16;

#[derive(Debug, Clone)]
struct Entry<T> {
    element: T,
    priority: f64,
}

/// A min-priority queue.
///
/// The backing array doubles when the next insertion would fill it and
/// halves once occupancy drops to a quarter, never going below
/// [`DEFAULT_CAPACITY`].
#[derive(Debug, Clone)]
pub struct PriorityQueue<T> {
    heap: Vec<Entry<T>>,
    limit: usize,
}

impl<T> PriorityQueue<T> {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self {
            heap: Vec::with_capacity(DEFAULT_CAPACITY),
            limit: DEFAULT_CAPACITY,
        }
    }

    /// Insert `element` with `priority`.
    pub fn enqueue(&mut self, element: T, priority: f64) {
        if self.heap.len() + 1 >= self.limit {
            self.limit *= 2;
            self.heap.reserve_exact(self.limit - self.heap.len());
        }
        self.heap.push(Entry { element, priority });
        self.sift_up(self.heap.len() - 1);
    }

    /// Remove the element with the lowest priority.
    pub fn dequeue(&mut self) -> Result<(T, f64), QueueError> {
        self.pop().ok_or(QueueError::Empty)
    }

    /// Like [`dequeue`](Self::dequeue), returning `None` when empty.
    pub fn pop(&mut self) -> Option<(T, f64)> {
        if self.heap.is_empty() {
            return None;
        }
        // The last leaf takes the root's place.
        let top = self.heap.swap_remove(0);
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        if self.limit > DEFAULT_CAPACITY && self.heap.len() <= self.limit / 4 {
            self.limit /= 2;
            self.heap.shrink_to(self.limit);
        }
        Some((top.element, top.priority))
    }

    /// The element that would be dequeued next.
    pub fn peek(&self) -> Option<(&T, f64)> {
        self.heap.first().map(|e| (&e.element, e.priority))
    }

    /// Number of queued elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Current logical capacity of the backing array.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.limit
    }

    /// Drop every element and return to the initial capacity.
    pub fn clear(&mut self) {
        self.heap.clear();
        self.limit = DEFAULT_CAPACITY;
        self.heap.shrink_to(DEFAULT_CAPACITY);
    }

    #[inline]
    fn less(&self, a: usize, b: usize) -> bool {
        self.heap[a].priority.total_cmp(&self.heap[b].priority) == Ordering::Less
    }

    fn sift_up(&mut self, mut i: usize) {
        while i > 0 {
            let parent = (i - 1) / 2;
            if !self.less(i, parent) {
                break;
            }
            self.heap.swap(i, parent);
            i = parent;
        }
    }

    fn sift_down(&mut self, mut i: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * i + 1;
            let right = left + 1;
            let mut smallest = i;
            if left < len && self.less(left, smallest) {
                smallest = left;
            }
            if right < len && self.less(right, smallest) {
                smallest = right;
            }
            if smallest == i {
                break;
            }
            self.heap.swap(i, smallest);
            i = smallest;
        }
    }
}

impl<T> Default for PriorityQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}
