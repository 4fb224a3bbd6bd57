//! Classic owned collections: a linked list, a binary min-heap, and the
//! queue, stack and ring-buffer disciplines built around them.
//!
//! # Data Structures
//!
//! | Structure | Use Case | Key Operations |
//! |-----------|----------|----------------|
//! | [`LinkedList`] | Ordered sequence, both-end access | O(1) push/pop at either end, O(n) index |
//! | [`MinHeap`] | Priority queues | O(log n) push/pop, O(1) peek |
//! | [`Queue`] | FIFO work lists | O(1) enqueue/dequeue |
//! | [`Stack`] | LIFO work lists | O(1) push/pop |
//! | [`CircularBuffer`] | Bounded history, latest-N windows | O(1) enqueue/dequeue, overwrites oldest |
//!
//! # Storage
//!
//! Lists keep their nodes in a [`slab::Slab`] arena and link them by slot
//! index rather than by pointer:
//!
//! ```text
//! Slab<ListNode<T>>     - owns values, provides stable slot keys
//! LinkedList<T>         - head/tail keys, nodes carry prev/next keys
//! ```
//!
//! Removed slots are recycled by the next insert, so a list that churns at
//! a steady size stops allocating.
//!
//! # Ordering
//!
//! [`MinHeap`] orders by a [`Compare`] implementation. [`Natural`] uses
//! [`Ord`]; any `Fn(&T, &T) -> Ordering` closure works too. Ordering is kept
//! apart from equality: `contains` and `remove` on the heap use
//! [`PartialEq`], so two elements can tie on priority without being equal.
//!
//! ```
//! use classic_collections::MinHeap;
//!
//! let mut heap = MinHeap::with_comparator(|a: &(u32, char), b: &(u32, char)| a.0.cmp(&b.0));
//! heap.push((2, 'w'));
//! heap.push((1, 'r'));
//! heap.push((1, 's'));
//!
//! assert!(heap.contains(&(1, 's')));
//! assert_eq!(heap.pop().map(|(p, _)| p), Some(1));
//! ```
//!
//! # Errors
//!
//! Operations on an empty list, queue or stack, and out-of-range indices,
//! return [`CollectionError`]. The heap and ring buffer follow the std
//! convention of returning [`Option`].
//!
//! ```
//! use classic_collections::{CollectionError, LinkedList};
//!
//! let mut list: LinkedList<u32> = LinkedList::new();
//! assert_eq!(list.pop_front(), Err(CollectionError::Empty));
//!
//! list.push_back(1).push_back(2);
//! assert_eq!(
//!     list.get(5),
//!     Err(CollectionError::IndexOutOfRange { index: 5, len: 2 })
//! );
//! ```
//!
//! # Tracing
//!
//! Bulk and lossy operations emit `trace`-level [`tracing`] events: heap
//! construction from a vector, list clears, and ring-buffer overwrites.
//! Nothing is emitted unless a subscriber is installed.

#![warn(missing_docs)]

pub mod adapters;
pub mod compare;
pub mod error;
pub mod heap;
mod key;
pub mod list;
pub mod ring;

pub use adapters::{Queue, Stack};
pub use compare::{Compare, Natural};
pub use error::{CollectionError, Result};
pub use heap::MinHeap;
pub use list::LinkedList;
pub use ring::CircularBuffer;
