//! Queue - FIFO adapter over a linked list.

use crate::error::Result;
use crate::list::{IntoIter, Iter, LinkedList};

/// A first-in first-out queue.
///
/// New elements enter at the list front and leave from the list back, so
/// iteration yields the most recently enqueued element first.
///
/// # Example
///
/// ```
/// use classic_collections::Queue;
///
/// let mut queue = Queue::new();
/// queue.enqueue(1);
/// queue.enqueue(2);
/// queue.enqueue(3);
///
/// assert_eq!(queue.iter().copied().collect::<Vec<_>>(), vec![3, 2, 1]);
/// assert_eq!(queue.dequeue(), Ok(1));
/// assert_eq!(queue.peek_back(), Ok(&2));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Queue<T> {
    list: LinkedList<T>,
}

impl<T> Queue<T> {
    /// Creates an empty queue.
    #[inline]
    pub const fn new() -> Self {
        Self {
            list: LinkedList::new(),
        }
    }

    /// Creates an empty queue with room for `capacity` elements.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            list: LinkedList::with_capacity(capacity),
        }
    }

    /// Returns the number of elements in the queue.
    #[inline]
    pub fn len(&self) -> usize {
        self.list.len()
    }

    /// Returns `true` if the queue is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Removes all elements.
    #[inline]
    pub fn clear(&mut self) {
        self.list.clear();
    }

    /// Adds a value to the queue. O(1).
    #[inline]
    pub fn enqueue(&mut self, value: T) {
        self.list.push_front(value);
    }

    /// Removes and returns the oldest value. O(1).
    ///
    /// # Errors
    ///
    /// [`CollectionError::Empty`](crate::CollectionError::Empty) if the
    /// queue is empty.
    #[inline]
    pub fn dequeue(&mut self) -> Result<T> {
        self.list.pop_back()
    }

    /// Returns the most recently enqueued value. O(1).
    ///
    /// # Errors
    ///
    /// [`CollectionError::Empty`](crate::CollectionError::Empty) if the
    /// queue is empty.
    #[inline]
    pub fn peek_front(&self) -> Result<&T> {
        self.list.front()
    }

    /// Returns the oldest value, the next to be dequeued. O(1).
    ///
    /// # Errors
    ///
    /// [`CollectionError::Empty`](crate::CollectionError::Empty) if the
    /// queue is empty.
    #[inline]
    pub fn peek_back(&self) -> Result<&T> {
        self.list.back()
    }

    /// Returns an iterator from the newest to the oldest value.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        self.list.iter()
    }
}

impl<T: PartialEq> Queue<T> {
    /// Returns `true` if an element equal to `value` is queued. O(n).
    #[inline]
    pub fn contains(&self, value: &T) -> bool {
        self.list.contains(value)
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.enqueue(value);
        }
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = Self::new();
        queue.extend(iter);
        queue
    }
}

impl<'a, T> IntoIterator for &'a Queue<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for Queue<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.list.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CollectionError;

    #[test]
    fn new_is_empty() {
        let queue: Queue<u64> = Queue::new();
        assert!(queue.is_empty());
        assert_eq!(queue.len(), 0);
    }

    #[test]
    fn fifo_order() {
        let mut queue = Queue::new();
        queue.enqueue(1u64);
        queue.enqueue(2);
        queue.enqueue(3);

        assert_eq!(queue.dequeue(), Ok(1));
        assert_eq!(queue.dequeue(), Ok(2));
        assert_eq!(queue.dequeue(), Ok(3));
        assert_eq!(queue.dequeue(), Err(CollectionError::Empty));
    }

    #[test]
    fn iterates_newest_first() {
        let queue: Queue<u64> = [1, 2, 3].into_iter().collect();
        assert_eq!(queue.iter().copied().collect::<Vec<_>>(), vec![3, 2, 1]);
        assert_eq!(queue.into_iter().collect::<Vec<_>>(), vec![3, 2, 1]);
    }

    #[test]
    fn peek_both_ends() {
        let mut queue = Queue::with_capacity(4);
        assert_eq!(queue.peek_front(), Err(CollectionError::Empty));
        assert_eq!(queue.peek_back(), Err(CollectionError::Empty));

        queue.enqueue(1u64);
        queue.enqueue(2);

        assert_eq!(queue.peek_front(), Ok(&2));
        assert_eq!(queue.peek_back(), Ok(&1));
        assert_eq!(queue.len(), 2);
    }

    #[test]
    fn contains_and_clear() {
        let mut queue = Queue::new();
        queue.extend([5u64, 6]);

        assert!(queue.contains(&5));
        assert!(!queue.contains(&7));

        queue.clear();
        assert!(queue.is_empty());
        assert!(!queue.contains(&5));
    }
}
