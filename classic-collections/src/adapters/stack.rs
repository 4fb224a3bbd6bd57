//! Stack - LIFO adapter over a linked list.

use crate::error::Result;
use crate::list::{IntoIter, Iter, LinkedList};

/// A last-in first-out stack.
///
/// Pushes and pops both happen at the list back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stack<T> {
    list: LinkedList<T>,
}

impl<T> Stack<T> {
    /// Creates an empty stack.
    #[inline]
    pub const fn new() -> Self {
        Self {
            list: LinkedList::new(),
        }
    }

    /// Creates an empty stack with room for `capacity` elements.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            list: LinkedList::with_capacity(capacity),
        }
    }

    /// Returns the number of elements on the stack.
    #[inline]
    pub fn len(&self) -> usize {
        self.list.len()
    }

    /// Returns `true` if the stack is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Removes all elements.
    #[inline]
    pub fn clear(&mut self) {
        self.list.clear();
    }

    /// Pushes a value onto the top of the stack. O(1).
    #[inline]
    pub fn push(&mut self, value: T) {
        self.list.push_back(value);
    }

    /// Removes and returns the top value. O(1).
    ///
    /// # Errors
    ///
    /// [`CollectionError::Empty`](crate::CollectionError::Empty) if the
    /// stack is empty.
    #[inline]
    pub fn pop(&mut self) -> Result<T> {
        self.list.pop_back()
    }

    /// Returns the top value without removing it. O(1).
    ///
    /// # Errors
    ///
    /// [`CollectionError::Empty`](crate::CollectionError::Empty) if the
    /// stack is empty.
    #[inline]
    pub fn peek(&self) -> Result<&T> {
        self.list.back()
    }

    /// Returns an iterator from the bottom to the top of the stack.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        self.list.iter()
    }
}

impl<T: PartialEq> Stack<T> {
    /// Returns `true` if an element equal to `value` is on the stack. O(n).
    #[inline]
    pub fn contains(&self, value: &T) -> bool {
        self.list.contains(value)
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.list.extend_back(iter);
    }
}

impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            list: iter.into_iter().collect(),
        }
    }
}

impl<'a, T> IntoIterator for &'a Stack<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for Stack<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.list.into_iter()
    }
}
