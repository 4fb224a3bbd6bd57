//! Doubly-linked list over an arena of nodes.
//!
//! Nodes live in a [`slab::Slab`] owned by the list and refer to each other
//! by slab key. A key is a plain handle, not an ownership edge, so there
//! are no reference cycles to break: dropping or clearing the list releases
//! every node at once.
//!
//! # Example
//!
//! ```
//! use classic_collections::LinkedList;
//!
//! let mut list = LinkedList::new();
//! list.extend_back([1, 2, 3]).push_front(0);
//!
//! assert_eq!(list.len(), 4);
//! assert_eq!(list.get(2), Ok(&2));
//! assert_eq!(list.index_of(&3), Some(3));
//!
//! // Remove from the middle
//! assert_eq!(list.remove(1), Ok(1));
//! assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![0, 2, 3]);
//!
//! assert_eq!(list.pop_front(), Ok(0));
//! assert_eq!(list.pop_back(), Ok(3));
//! ```
//!
//! # Errors
//!
//! Reads and removals on an empty list fail with
//! [`CollectionError::Empty`]; positional operations with a bad index fail
//! with [`CollectionError::IndexOutOfRange`]. Validation always happens
//! before any link is touched.

use core::fmt;
use core::iter::FusedIterator;

use slab::Slab;
use tracing::trace;

use crate::error::{CollectionError, Result};
use crate::key::Key;

/// A node in the linked list.
///
/// Wraps user data with prev/next keys. Users only ever see `&T` and
/// `&mut T`; the node is an implementation detail.
#[derive(Debug, Clone)]
pub(crate) struct ListNode<T> {
    data: T,
    prev: usize,
    next: usize,
}

impl<T> ListNode<T> {
    /// Creates a new unlinked node.
    #[inline]
    fn new(data: T) -> Self {
        Self {
            data,
            prev: usize::NONE,
            next: usize::NONE,
        }
    }
}

/// A doubly-linked list with O(1) insertion and removal at both ends.
///
/// Indexed access walks from whichever end is nearer, so `get`, `insert`
/// and `remove` are O(n).
#[derive(Clone)]
pub struct LinkedList<T> {
    nodes: Slab<ListNode<T>>,
    head: usize,
    tail: usize,
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Core operations
// =============================================================================

impl<T> LinkedList<T> {
    /// Creates an empty list.
    #[inline]
    pub const fn new() -> Self {
        Self {
            nodes: Slab::new(),
            head: usize::NONE,
            tail: usize::NONE,
        }
    }

    /// Creates an empty list with room for `capacity` nodes.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Slab::with_capacity(capacity),
            head: usize::NONE,
            tail: usize::NONE,
        }
    }

    /// Returns the number of elements in the list.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the list is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Removes every element, releasing all nodes.
    pub fn clear(&mut self) {
        let released = self.nodes.len();
        self.nodes.clear();
        self.head = usize::NONE;
        self.tail = usize::NONE;

        trace!(released, "list cleared");
    }

    // ========================================================================
    // Insertion
    // ========================================================================

    /// Pushes a value to the front of the list. O(1).
    pub fn push_front(&mut self, value: T) -> &mut Self {
        let key = self.nodes.insert(ListNode::new(value));
        self.link_front(key);
        self
    }

    /// Pushes a value to the back of the list. O(1).
    pub fn push_back(&mut self, value: T) -> &mut Self {
        let key = self.nodes.insert(ListNode::new(value));
        self.link_back(key);
        self
    }

    /// Inserts `value` so that it ends up at position `index`. O(n).
    ///
    /// `index == len()` appends at the back.
    ///
    /// # Errors
    ///
    /// - [`CollectionError::Empty`] if the list is empty.
    /// - [`CollectionError::IndexOutOfRange`] if `index > len()`.
    pub fn insert(&mut self, index: usize, value: T) -> Result<()> {
        let len = self.len();
        if len == 0 {
            return Err(CollectionError::Empty);
        }
        if index > len {
            return Err(CollectionError::IndexOutOfRange { index, len });
        }

        if index == 0 {
            self.push_front(value);
        } else if index == len {
            self.push_back(value);
        } else {
            let next = self.key_at(index);
            let prev = self.nodes[next].prev;
            debug_assert!(prev.is_some(), "interior node without predecessor");

            let key = self.nodes.insert(ListNode { data: value, prev, next });
            self.nodes[prev].next = key;
            self.nodes[next].prev = key;
        }

        Ok(())
    }

    /// Appends every value in order via [`push_back`](Self::push_back).
    ///
    /// Returns the list to allow chaining.
    pub fn extend_back<I: IntoIterator<Item = T>>(&mut self, values: I) -> &mut Self {
        let values = values.into_iter();
        self.nodes.reserve(values.size_hint().0);
        for value in values {
            self.push_back(value);
        }
        self
    }

    // ========================================================================
    // Access
    // ========================================================================

    /// Returns a reference to the front element. O(1).
    ///
    /// # Errors
    ///
    /// [`CollectionError::Empty`] if the list is empty.
    #[inline]
    pub fn front(&self) -> Result<&T> {
        let key = self.head.get().ok_or(CollectionError::Empty)?;
        Ok(&self.nodes[key].data)
    }

    /// Returns a mutable reference to the front element. O(1).
    ///
    /// # Errors
    ///
    /// [`CollectionError::Empty`] if the list is empty.
    #[inline]
    pub fn front_mut(&mut self) -> Result<&mut T> {
        let key = self.head.get().ok_or(CollectionError::Empty)?;
        Ok(&mut self.nodes[key].data)
    }

    /// Returns a reference to the back element. O(1).
    ///
    /// # Errors
    ///
    /// [`CollectionError::Empty`] if the list is empty.
    #[inline]
    pub fn back(&self) -> Result<&T> {
        let key = self.tail.get().ok_or(CollectionError::Empty)?;
        Ok(&self.nodes[key].data)
    }

    /// Returns a mutable reference to the back element. O(1).
    ///
    /// # Errors
    ///
    /// [`CollectionError::Empty`] if the list is empty.
    #[inline]
    pub fn back_mut(&mut self) -> Result<&mut T> {
        let key = self.tail.get().ok_or(CollectionError::Empty)?;
        Ok(&mut self.nodes[key].data)
    }

    /// Returns a reference to the element at `index`. O(n).
    ///
    /// # Errors
    ///
    /// - [`CollectionError::Empty`] if the list is empty.
    /// - [`CollectionError::IndexOutOfRange`] if `index >= len()`.
    pub fn get(&self, index: usize) -> Result<&T> {
        self.check_index(index)?;
        Ok(&self.nodes[self.key_at(index)].data)
    }

    /// Returns a mutable reference to the element at `index`. O(n).
    ///
    /// # Errors
    ///
    /// Same as [`get`](Self::get).
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        self.check_index(index)?;
        let key = self.key_at(index);
        Ok(&mut self.nodes[key].data)
    }

    // ========================================================================
    // Removal
    // ========================================================================

    /// Removes and returns the front element. O(1).
    ///
    /// # Errors
    ///
    /// [`CollectionError::Empty`] if the list is empty.
    pub fn pop_front(&mut self) -> Result<T> {
        let key = self.head.get().ok_or(CollectionError::Empty)?;
        Ok(self.take(key))
    }

    /// Removes and returns the back element. O(1).
    ///
    /// # Errors
    ///
    /// [`CollectionError::Empty`] if the list is empty.
    pub fn pop_back(&mut self) -> Result<T> {
        let key = self.tail.get().ok_or(CollectionError::Empty)?;
        Ok(self.take(key))
    }

    /// Removes and returns the element at `index`. O(n).
    ///
    /// # Errors
    ///
    /// - [`CollectionError::Empty`] if the list is empty.
    /// - [`CollectionError::IndexOutOfRange`] if `index >= len()`.
    pub fn remove(&mut self, index: usize) -> Result<T> {
        self.check_index(index)?;

        if index == 0 {
            return self.pop_front();
        }
        if index == self.len() - 1 {
            return self.pop_back();
        }

        let key = self.key_at(index);
        Ok(self.take(key))
    }

    // ========================================================================
    // Iteration
    // ========================================================================

    /// Returns an iterator over references to elements, front to back.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            nodes: &self.nodes,
            front: self.head,
            back: self.tail,
            remaining: self.len(),
        }
    }

    /// Returns an iterator over mutable references to elements, front to back.
    ///
    /// Splits the slab into disjoint element borrows up front, so this
    /// allocates O(n) before the first element is yielded.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        let head = self.head;
        let len = self.nodes.len();

        let mut by_key: Vec<Option<(&mut T, usize)>> = Vec::new();
        by_key.resize_with(self.nodes.capacity(), || None);
        for (key, node) in self.nodes.iter_mut() {
            if key >= by_key.len() {
                by_key.resize_with(key + 1, || None);
            }
            by_key[key] = Some((&mut node.data, node.next));
        }

        let mut ordered = Vec::with_capacity(len);
        let mut key = head;
        while let Some(k) = key.get() {
            let Some((data, next)) = by_key[k].take() else {
                break;
            };
            ordered.push(data);
            key = next;
        }
        debug_assert_eq!(ordered.len(), len, "links do not cover every node");

        IterMut {
            inner: ordered.into_iter(),
        }
    }

    // ========================================================================
    // Internals
    // ========================================================================

    fn check_index(&self, index: usize) -> Result<()> {
        let len = self.len();
        if len == 0 {
            return Err(CollectionError::Empty);
        }
        if index >= len {
            return Err(CollectionError::IndexOutOfRange { index, len });
        }
        Ok(())
    }

    /// Returns the key of the node at `index`, walking from the nearer end.
    ///
    /// `index` must be in bounds.
    fn key_at(&self, index: usize) -> usize {
        let len = self.len();
        debug_assert!(index < len);

        if index < len / 2 {
            let mut key = self.head;
            for _ in 0..index {
                key = self.nodes[key].next;
            }
            key
        } else {
            let mut key = self.tail;
            for _ in index..len - 1 {
                key = self.nodes[key].prev;
            }
            key
        }
    }

    fn link_front(&mut self, key: usize) {
        let head = self.head;
        let node = &mut self.nodes[key];
        node.next = head;
        node.prev = usize::NONE;

        if head.is_some() {
            self.nodes[head].prev = key;
        } else {
            self.tail = key;
        }

        self.head = key;
    }

    fn link_back(&mut self, key: usize) {
        let tail = self.tail;
        let node = &mut self.nodes[key];
        node.prev = tail;
        node.next = usize::NONE;

        if tail.is_some() {
            self.nodes[tail].next = key;
        } else {
            self.head = key;
        }

        self.tail = key;
    }

    /// Unlinks `key` from its neighbours and releases its node.
    fn take(&mut self, key: usize) -> T {
        let ListNode { data, prev, next } = self.nodes.remove(key);

        if prev.is_some() {
            self.nodes[prev].next = next;
        } else {
            self.head = next;
        }

        if next.is_some() {
            self.nodes[next].prev = prev;
        } else {
            self.tail = prev;
        }

        data
    }
}

impl<T: PartialEq> LinkedList<T> {
    /// Returns the position of the first element equal to `value`. O(n).
    ///
    /// Returns `None` if no element matches or the list is empty.
    pub fn index_of(&self, value: &T) -> Option<usize> {
        self.iter().position(|v| v == value)
    }

    /// Returns `true` if an element equal to `value` is in the list. O(n).
    #[inline]
    pub fn contains(&self, value: &T) -> bool {
        self.index_of(value).is_some()
    }
}

// =============================================================================
// Trait impls
// =============================================================================

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend_back(iter);
        list
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.extend_back(iter);
    }
}

impl<T> From<Vec<T>> for LinkedList<T> {
    fn from(values: Vec<T>) -> Self {
        values.into_iter().collect()
    }
}

impl<T, const N: usize> From<[T; N]> for LinkedList<T> {
    fn from(values: [T; N]) -> Self {
        values.into_iter().collect()
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut LinkedList<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T> IntoIterator for LinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

// =============================================================================
// Iterators
// =============================================================================

/// Iterator over references to list elements.
///
/// Holds a shared borrow of the list, so the list cannot be mutated while
/// the iterator is alive.
pub struct Iter<'a, T> {
    nodes: &'a Slab<ListNode<T>>,
    front: usize,
    back: usize,
    remaining: usize,
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self { ..*self }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let node = &self.nodes[self.front];
        self.front = node.next;
        self.remaining -= 1;
        Some(&node.data)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let node = &self.nodes[self.back];
        self.back = node.prev;
        self.remaining -= 1;
        Some(&node.data)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

/// Iterator over mutable references to list elements.
pub struct IterMut<'a, T> {
    inner: std::vec::IntoIter<&'a mut T>,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for IterMut<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}
impl<T> FusedIterator for IterMut<'_, T> {}

/// Owning iterator that pops elements from the front.
pub struct IntoIter<T> {
    list: LinkedList<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop_front().ok()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len(), Some(self.list.len()))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.list.pop_back().ok()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}
