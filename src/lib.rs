//! Indexable, array-backed binary heap with caller-supplied ordering
//!
//! This crate provides [`PriorityHeap`], a binary min-heap stored level-order
//! in a sequential container and ordered by a pluggable three-way comparator.
//! Whether it behaves as a min-heap, a max-heap, or a custom-priority
//! selector depends entirely on the comparator bound at construction.
//!
//! # Features
//!
//! - **Comparator-driven ordering**: no `T: Ord` requirement on the heap
//!   itself; natural, reversed, closure, and derived-key comparators ship in
//!   [`compare`]
//! - **Pluggable storage**: the backing container is a trait
//!   ([`storage::HeapStorage`]) with a `Vec`-based default
//! - **Bounded rebalancing**: insertion swims the new element up, extraction
//!   sinks the replacement root down; both O(log n)
//! - **No decrease-key**: priority updates are the consumer's job via
//!   remove-and-reinsert or a full rebuild, as demonstrated by [`transit`]
//!
//! # Example
//!
//! ```rust
//! use vecheap::binary::PriorityHeap;
//! use vecheap::compare::ReverseOrder;
//!
//! let mut min_heap = PriorityHeap::new();
//! min_heap.extend([5, 3, 8, 1, 9, 2]);
//! assert_eq!(min_heap.pop(), Some(1));
//!
//! let mut max_heap = PriorityHeap::with_comparator(ReverseOrder);
//! max_heap.extend([5, 3, 8, 1, 9, 2]);
//! assert_eq!(max_heap.pop(), Some(9));
//! ```

pub mod binary;
pub mod compare;
pub mod storage;
pub mod traits;
pub mod transit;

// Re-export the main types for convenience
pub use binary::PriorityHeap;
pub use compare::{Comparator, FnComparator, KeyComparator, NaturalOrder, ReverseOrder};
pub use traits::PriorityQueue;
