//! Restricted-vocabulary wrappers over [`LinkedList`](crate::LinkedList).
//!
//! Each adapter owns a list and exposes only the operations that make
//! sense for its discipline:
//!
//! | Adapter   | Insert            | Remove            | Order |
//! |-----------|-------------------|-------------------|-------|
//! | [`Queue`] | front (`enqueue`) | back (`dequeue`)  | FIFO  |
//! | [`Stack`] | back (`push`)     | back (`pop`)      | LIFO  |
//!
//! Both iterate in the underlying list order, front to back.
//!
//! # Example
//!
//! ```
//! use classic_collections::{Queue, Stack};
//!
//! let mut queue = Queue::new();
//! queue.enqueue(1);
//! queue.enqueue(2);
//! assert_eq!(queue.dequeue(), Ok(1));
//!
//! let mut stack = Stack::new();
//! stack.push(1);
//! stack.push(2);
//! assert_eq!(stack.pop(), Ok(2));
//! ```

mod queue;
mod stack;

pub use queue::Queue;
pub use stack::Stack;
