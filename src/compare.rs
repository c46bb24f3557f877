//! Comparator abstraction for heap ordering
//!
//! Heaps in this crate do not require `T: Ord`. Instead, ordering is supplied
//! by a [`Comparator`] bound at construction time. The comparator decides
//! which of two elements sits closer to the root: whatever it calls `Less`
//! surfaces first. Flipping the comparator turns a min-heap into a max-heap
//! without touching the heap code.
//!
//! # Example
//!
//! ```rust
//! use vecheap::binary::PriorityHeap;
//! use vecheap::compare::ReverseOrder;
//!
//! // A max-heap over i32: largest element pops first.
//! let mut heap = PriorityHeap::with_comparator(ReverseOrder);
//! heap.push(3);
//! heap.push(9);
//! heap.push(5);
//! assert_eq!(heap.pop(), Some(9));
//! ```

use std::cmp::Ordering;

/// Three-way ordering function used by the heaps in this crate.
///
/// `compare(a, b)` returns `Less` if `a` must sit closer to the root than
/// `b`, `Equal` if the two are order-equivalent, and `Greater` otherwise.
///
/// Implementations must define a total order (antisymmetric, transitive)
/// over every element the heap will ever hold. The heap does not detect
/// violations; a non-total comparator leaves the structure in an
/// unspecified (but memory-safe) arrangement.
pub trait Comparator<T> {
    /// Compares two elements, deciding which is closer to the root.
    fn compare(&self, a: &T, b: &T) -> Ordering;

    /// The predicate heaps rebalance on: true iff `a` must sit below `b`.
    fn is_greater(&self, a: &T, b: &T) -> bool {
        self.compare(a, b) == Ordering::Greater
    }
}

/// Natural ordering via `Ord`; the default comparator for `PriorityHeap`.
///
/// With this comparator the heap is a min-heap: the smallest element under
/// `T::cmp` is at the root.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NaturalOrder;

impl<T: Ord> Comparator<T> for NaturalOrder {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// Flipped natural ordering; turns the heap into a max-heap.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReverseOrder;

impl<T: Ord> Comparator<T> for ReverseOrder {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        b.cmp(a)
    }
}

/// Adapts any `Fn(&T, &T) -> Ordering` closure into a [`Comparator`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FnComparator<F>(pub F);

impl<T, F> Comparator<T> for FnComparator<F>
where
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.0)(a, b)
    }
}

/// Orders elements by a derived key: `Fn(&T) -> K` with `K: Ord`.
///
/// Useful when the priority is a computed property of the element rather
/// than the element itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyComparator<F>(pub F);

impl<T, K, F> Comparator<T> for KeyComparator<F>
where
    K: Ord,
    F: Fn(&T) -> K,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.0)(a).cmp(&(self.0)(b))
    }
}
