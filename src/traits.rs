//! Common trait for priority queue structures
//!
//! [`PriorityQueue`] abstracts the five operations every priority queue in
//! this crate exposes, so tests and consumers can be written once against
//! the interface rather than a concrete heap type.
//!
//! The trait deliberately has no decrease-key, merge, or capacity surface:
//! those are not operations of the structures here. Priority updates are a
//! consumer concern handled by remove-and-reinsert or a full rebuild.
//!
//! # Example
//!
//! ```rust
//! use vecheap::traits::PriorityQueue;
//! use vecheap::binary::PriorityHeap;
//!
//! fn drain<Q: PriorityQueue<i32>>(queue: &mut Q) -> Vec<i32> {
//!     std::iter::from_fn(|| queue.pop()).collect()
//! }
//!
//! let mut heap = PriorityHeap::new();
//! heap.push(2);
//! heap.push(1);
//! assert_eq!(drain(&mut heap), vec![1, 2]);
//! ```

use crate::binary::PriorityHeap;
use crate::compare::Comparator;
use crate::storage::HeapStorage;

/// Minimal priority queue interface: insert, inspect-min, extract-min.
///
/// "Min" always means minimum under the structure's bound ordering; a
/// reversed ordering makes the same five operations behave as a max queue.
pub trait PriorityQueue<T> {
    /// Creates a new empty queue.
    fn new() -> Self;

    /// Returns the number of queued elements.
    fn len(&self) -> usize;

    /// Returns true if the queue is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Inserts an element.
    ///
    /// # Time Complexity
    /// O(log n) for the binary heap.
    fn push(&mut self, element: T);

    /// Borrows the minimum element without removing it, or `None` when
    /// empty.
    ///
    /// # Time Complexity
    /// O(1).
    fn peek(&self) -> Option<&T>;

    /// Removes and returns the minimum element, or `None` when empty.
    ///
    /// # Time Complexity
    /// O(log n) for the binary heap.
    fn pop(&mut self) -> Option<T>;
}

impl<T, C, S> PriorityQueue<T> for PriorityHeap<T, C, S>
where
    C: Comparator<T> + Default,
    S: HeapStorage<T>,
{
    fn new() -> Self {
        PriorityHeap::with_storage(C::default(), S::default())
    }

    fn len(&self) -> usize {
        PriorityHeap::len(self)
    }

    fn push(&mut self, element: T) {
        PriorityHeap::push(self, element);
    }

    fn peek(&self) -> Option<&T> {
        PriorityHeap::peek(self)
    }

    fn pop(&mut self) -> Option<T> {
        PriorityHeap::pop(self)
    }
}
