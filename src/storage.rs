//! Pluggable sequential storage for heap elements
//!
//! The heap never owns a `Vec` directly; it talks to a [`HeapStorage`]
//! through exactly the primitives its algorithms need: append at the end,
//! remove from the end, indexed read, and indexed swap. Anything that
//! provides those operations at O(1) amortized cost with 0-based indexing
//! can back a heap.
//!
//! [`VecStorage`] is the default backend and what virtually every caller
//! wants. The trait exists so the element container remains an external
//! collaborator: the heap states its contract here instead of hard-wiring
//! `Vec` semantics into the rebalancing code.

use std::fmt;

/// Contract the heap requires from its backing container.
///
/// All operations are O(1) amortized. `len()` always reflects the live
/// element count; there are never stale trailing slots. Indexing past
/// `len()` is a caller bug and may panic.
pub trait HeapStorage<T>: Default {
    /// Number of elements currently stored.
    fn len(&self) -> usize;

    /// True when no elements are stored.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Appends an element at index `len()`.
    fn push_last(&mut self, element: T);

    /// Removes and returns the element at the last index, or `None` when
    /// empty.
    fn pop_last(&mut self) -> Option<T>;

    /// Borrows the element at `idx`. Panics if `idx >= len()`.
    fn get(&self, idx: usize) -> &T;

    /// Overwrites the slot at `idx`, returning the previous element.
    /// Panics if `idx >= len()`.
    fn replace(&mut self, idx: usize, element: T) -> T;

    /// Swaps the elements at `a` and `b`. Panics if either is out of range.
    fn swap(&mut self, a: usize, b: usize);

    /// Removes all elements.
    fn clear(&mut self);

    /// Borrows the whole store in level order (heap order, not sorted).
    fn as_slice(&self) -> &[T];
}

/// `Vec`-backed storage; the default backend for [`PriorityHeap`].
///
/// [`PriorityHeap`]: crate::binary::PriorityHeap
#[derive(Clone)]
pub struct VecStorage<T> {
    slots: Vec<T>,
}

impl<T> VecStorage<T> {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self { slots: Vec::new() }
    }

    /// Creates an empty store with room for `capacity` elements before
    /// reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
        }
    }
}

impl<T> Default for VecStorage<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for VecStorage<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.slots.iter()).finish()
    }
}

impl<T> HeapStorage<T> for VecStorage<T> {
    fn len(&self) -> usize {
        self.slots.len()
    }

    fn push_last(&mut self, element: T) {
        self.slots.push(element);
    }

    fn pop_last(&mut self) -> Option<T> {
        self.slots.pop()
    }

    fn get(&self, idx: usize) -> &T {
        &self.slots[idx]
    }

    fn replace(&mut self, idx: usize, element: T) -> T {
        std::mem::replace(&mut self.slots[idx], element)
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.slots.swap(a, b);
    }

    fn clear(&mut self) {
        self.slots.clear();
    }

    fn as_slice(&self) -> &[T] {
        &self.slots
    }
}
