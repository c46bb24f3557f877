//! Array-backed binary heap with a pluggable comparator
//!
//! [`PriorityHeap`] stores its elements level-order in a sequential
//! container: the node at index `i` has its parent at `(i - 1) / 2` and its
//! children at `2i + 1` and `2i + 2`. The heap-order invariant says no child
//! ever compares `Greater` than its parent, so whenever the heap is
//! non-empty, index 0 holds the minimum under the bound comparator.
//!
//! The comparator decides everything about ordering direction: with the
//! default [`NaturalOrder`] this is a min-heap; with [`ReverseOrder`] it is
//! a max-heap; with a [`KeyComparator`] it becomes a selector over any
//! derived priority.
//!
//! There is no decrease-key. Updating an element's priority means removing
//! and reinserting it, or rebuilding the heap outright — see
//! [`transit`](crate::transit) for a consumer that does exactly that.
//!
//! # Time Complexity
//!
//! | Operation | Complexity |
//! |-----------|------------|
//! | `push`    | O(log n)   |
//! | `pop`     | O(log n)   |
//! | `peek`    | O(1)       |
//! | `len`     | O(1)       |
//!
//! # Example
//!
//! ```rust
//! use vecheap::binary::PriorityHeap;
//!
//! let mut heap = PriorityHeap::new();
//! heap.push(5);
//! heap.push(1);
//! heap.push(3);
//!
//! assert_eq!(heap.peek(), Some(&1));
//! assert_eq!(heap.pop(), Some(1));
//! assert_eq!(heap.pop(), Some(3));
//! assert_eq!(heap.pop(), Some(5));
//! assert_eq!(heap.pop(), None);
//! ```
//!
//! [`NaturalOrder`]: crate::compare::NaturalOrder
//! [`ReverseOrder`]: crate::compare::ReverseOrder
//! [`KeyComparator`]: crate::compare::KeyComparator

use std::fmt;
use std::marker::PhantomData;

use crate::compare::{Comparator, NaturalOrder};
use crate::storage::{HeapStorage, VecStorage};

/// An indexable binary heap over storage `S`, ordered by comparator `C`.
///
/// The element at the root is the minimum under `C`; whatever the
/// comparator calls `Less` pops first. The heap is single-threaded and
/// performs no interior synchronization; concurrent callers need an
/// external lock around every operation.
///
/// If a caller-supplied comparator panics mid-operation, the heap is left
/// in the last fully-swapped state: memory-safe and size-consistent, but
/// possibly out of heap order. No unwind recovery is attempted.
pub struct PriorityHeap<T, C = NaturalOrder, S = VecStorage<T>>
where
    C: Comparator<T>,
    S: HeapStorage<T>,
{
    storage: S,
    len: usize,
    cmp: C,
    _element: PhantomData<fn() -> T>,
}

impl<T: Ord> PriorityHeap<T> {
    /// Creates an empty min-heap using the natural order of `T`.
    pub fn new() -> Self {
        Self::with_comparator(NaturalOrder)
    }

    /// Creates an empty min-heap with room for `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            storage: VecStorage::with_capacity(capacity),
            len: 0,
            cmp: NaturalOrder,
            _element: PhantomData,
        }
    }
}

impl<T, C: Comparator<T>> PriorityHeap<T, C> {
    /// Creates an empty heap ordered by `cmp`.
    pub fn with_comparator(cmp: C) -> Self {
        Self {
            storage: VecStorage::new(),
            len: 0,
            cmp,
            _element: PhantomData,
        }
    }
}

impl<T, C, S> PriorityHeap<T, C, S>
where
    C: Comparator<T>,
    S: HeapStorage<T>,
{
    /// Creates an empty heap ordered by `cmp` over a custom storage
    /// backend. `storage` must be empty.
    pub fn with_storage(cmp: C, storage: S) -> Self {
        debug_assert!(storage.is_empty());
        Self {
            storage,
            len: 0,
            cmp,
            _element: PhantomData,
        }
    }

    /// Number of elements currently in the heap.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True when the heap holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Borrows the minimum element, or `None` when empty. Never mutates.
    pub fn peek(&self) -> Option<&T> {
        if self.is_empty() {
            None
        } else {
            Some(self.storage.get(0))
        }
    }

    /// Inserts `element`, restoring heap order bottom-up.
    ///
    /// The element is appended at index `len()` and then swum toward the
    /// root: while its parent compares `Greater`, the two swap. O(log n)
    /// comparisons and swaps worst case.
    pub fn push(&mut self, element: T) {
        self.storage.push_last(element);
        self.len = self.storage.len();
        self.swim(self.len - 1);
    }

    /// Removes and returns the minimum element, or `None` when empty.
    ///
    /// The last element is detached and overwrites the root, then sinks
    /// toward the leaves: at each level it is compared against the greater
    /// of its two children and swaps down while it compares `Greater`.
    /// O(log n) worst case. An empty heap is left untouched.
    pub fn pop(&mut self) -> Option<T> {
        let last = self.storage.pop_last()?;
        self.len = self.storage.len();
        if self.is_empty() {
            return Some(last);
        }
        let min = self.storage.replace(0, last);
        self.sink(0);
        Some(min)
    }

    /// Removes every element, leaving an empty heap.
    pub fn clear(&mut self) {
        self.storage.clear();
        self.len = 0;
    }

    /// Borrows the elements in level order (heap order, not sorted order).
    /// Only the first element is guaranteed to be the minimum.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.storage.as_slice().iter()
    }

    /// Drains the heap into a vector sorted by the comparator, smallest
    /// first. O(n log n).
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.len);
        while let Some(element) = self.pop() {
            sorted.push(element);
        }
        sorted
    }

    /// Move the element at `idx` up until its parent no longer compares
    /// `Greater`.
    fn swim(&mut self, mut idx: usize) {
        while idx > 0 {
            let parent = (idx - 1) / 2;
            if self
                .cmp
                .is_greater(self.storage.get(parent), self.storage.get(idx))
            {
                self.storage.swap(idx, parent);
                idx = parent;
            } else {
                break;
            }
        }
    }

    /// Move the element at `idx` down, always descending into the greater
    /// child, until it no longer compares `Greater` than that child.
    fn sink(&mut self, mut idx: usize) {
        let len = self.len;
        while 2 * idx + 1 < len {
            let mut child = 2 * idx + 1;
            if child + 1 < len
                && self
                    .cmp
                    .is_greater(self.storage.get(child), self.storage.get(child + 1))
            {
                child += 1;
            }
            if !self
                .cmp
                .is_greater(self.storage.get(idx), self.storage.get(child))
            {
                break;
            }
            self.storage.swap(idx, child);
            idx = child;
        }
    }
}

impl<T: Ord> Default for PriorityHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C, S> Extend<T> for PriorityHeap<T, C, S>
where
    C: Comparator<T>,
    S: HeapStorage<T>,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.push(element);
        }
    }
}

impl<T: Ord> FromIterator<T> for PriorityHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut heap = Self::new();
        heap.extend(iter);
        heap
    }
}

impl<T, C, S> fmt::Debug for PriorityHeap<T, C, S>
where
    T: fmt::Debug,
    C: Comparator<T>,
    S: HeapStorage<T>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PriorityHeap")
            .field("len", &self.len)
            .field("elements", &self.storage.as_slice())
            .finish()
    }
}
