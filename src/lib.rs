//! Array-Backed Binary Heap with Runtime-Switchable Ordering
//!
//! This crate provides [`ArrayHeap`], a growable binary heap stored in a flat
//! slot vector, usable both as a priority queue and as an in-place heap-sort
//! engine over the same backing storage.
//!
//! # Features
//!
//! - **Priority queue**: `push`, `pop`, and `peek` with the usual binary-heap
//!   complexities (O(log n), O(log n), O(1))
//! - **Three ordering policies**: ascending natural order, descending natural
//!   order, or a caller-supplied comparator, selected at runtime via
//!   [`HeapOrdering`] without reallocation
//! - **In-place heap-sort**: [`ArrayHeap::sorted_vec`] sorts the live elements
//!   over the existing storage and hands back a snapshot, then restores the
//!   heap invariant so the queue stays usable
//! - **Amortized O(1) growth**: capacity doubles on demand and never shrinks
//!
//! # Example
//!
//! ```rust
//! use array_heap::{ArrayHeap, HeapOrdering};
//!
//! # fn main() -> Result<(), array_heap::HeapError> {
//! let backing = vec![10, 34, 23, 5, 23, 4567];
//! let mut heap = ArrayHeap::from_vec(backing, 6, HeapOrdering::Ascending)?;
//!
//! assert_eq!(heap.sorted_vec(), vec![5, 10, 23, 23, 34, 4567]);
//!
//! // Switch direction and sort the same instance again.
//! heap.set_ordering(HeapOrdering::Descending);
//! assert_eq!(heap.sorted_vec(), vec![4567, 34, 23, 23, 10, 5]);
//!
//! // Still a valid priority queue afterwards.
//! assert_eq!(heap.pop()?, 4567);
//! # Ok(())
//! # }
//! ```

pub mod heap;
pub mod ordering;

// Re-export the main types for convenience
pub use heap::{ArrayHeap, HeapError};
pub use ordering::{Comparator, HeapOrdering};
