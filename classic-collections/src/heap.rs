//! Array-backed min binary heap with removal by value.
//!
//! The heap is an implicit binary tree laid out densely in a `Vec`: the
//! children of index `i` live at `2i + 1` and `2i + 2`, and its parent at
//! `(i - 1) / 2`. Every parent orders before or equal to its children under
//! the heap's comparator, so the minimum is always at index 0.
//!
//! # Removal
//!
//! Both [`pop`](MinHeap::pop) and [`remove`](MinHeap::remove) move the last
//! element into the vacated slot and re-settle it. The replacement can be
//! out of place in either direction, so it is sunk first and swum only if
//! sinking left it where it was.
//!
//! # Example
//!
//! ```
//! use classic_collections::MinHeap;
//!
//! let mut heap = MinHeap::from(vec![5, 1, 8, 3, 2]);
//! assert_eq!(heap.peek(), Some(&1));
//!
//! assert!(heap.remove(&3));
//! assert!(!heap.contains(&3));
//!
//! assert_eq!(heap.pop(), Some(1));
//! assert_eq!(heap.pop(), Some(2));
//! assert_eq!(heap.pop(), Some(5));
//! assert_eq!(heap.pop(), Some(8));
//! assert_eq!(heap.pop(), None);
//! ```

use core::fmt;

use tracing::trace;

use crate::compare::{Compare, Natural};

/// A min-priority heap keyed by a single ordering function.
///
/// Ordering comes from `C` ([`Natural`] by default). Searching by value
/// uses `PartialEq`, independently of the comparator.
#[derive(Clone)]
pub struct MinHeap<T, C = Natural> {
    /// Heap-ordered elements; index 0 is the minimum.
    data: Vec<T>,
    cmp: C,
}

impl<T: Ord> MinHeap<T> {
    /// Creates an empty heap ordered by `T`'s natural ordering.
    #[inline]
    pub const fn new() -> Self {
        Self {
            data: Vec::new(),
            cmp: Natural,
        }
    }

    /// Creates an empty heap with room for `capacity` elements.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            cmp: Natural,
        }
    }
}

impl<T: Ord> Default for MinHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C: Compare<T>> MinHeap<T, C> {
    /// Creates an empty heap ordered by `cmp`.
    #[inline]
    pub const fn with_comparator(cmp: C) -> Self {
        Self {
            data: Vec::new(),
            cmp,
        }
    }

    /// Builds a heap from arbitrary elements in O(n).
    ///
    /// Sinks every non-leaf index from the last one down to the root.
    pub fn from_vec_with_comparator(data: Vec<T>, cmp: C) -> Self {
        let mut heap = Self { data, cmp };
        heap.heapify();
        heap
    }

    /// Returns the number of elements in the heap.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the heap is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the capacity of the backing vector.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Returns the comparator ordering this heap.
    #[inline]
    pub fn comparator(&self) -> &C {
        &self.cmp
    }

    /// Returns the minimum element without removing it.
    ///
    /// Returns `None` if the heap is empty.
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    /// Pushes an element onto the heap. O(log n).
    pub fn push(&mut self, value: T) {
        let pos = self.data.len();
        self.data.push(value);
        self.sift_up(pos);
    }

    /// Removes and returns the minimum element. O(log n).
    ///
    /// Returns `None` if the heap is empty.
    pub fn pop(&mut self) -> Option<T> {
        if self.data.is_empty() {
            return None;
        }
        Some(self.remove_at(0))
    }

    /// Removes all elements.
    #[inline]
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Returns an iterator over the elements in heap (not sorted) order.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Consumes the heap, returning the elements in heap order.
    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Consumes the heap, returning the elements in ascending order.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.data.len());
        while let Some(value) = self.pop() {
            sorted.push(value);
        }
        sorted
    }

    /// Removes the element at heap position `pos`.
    ///
    /// The last element is swapped into `pos` and re-settled. Removing the
    /// last position never rebalances.
    fn remove_at(&mut self, pos: usize) -> T {
        let removed = self.data.swap_remove(pos);

        // Sink first; a replacement that did not move may still need to rise.
        if pos < self.data.len() && self.sift_down(pos) == pos {
            self.sift_up(pos);
        }

        removed
    }

    fn heapify(&mut self) {
        let len = self.data.len();
        if len < 2 {
            return;
        }

        for pos in (0..len / 2).rev() {
            self.sift_down(pos);
        }

        trace!(len, "heapified");
    }

    /// Moves the element at `pos` toward the root while it orders strictly
    /// before its parent. Returns its final position.
    fn sift_up(&mut self, pos: usize) -> usize {
        let mut hole = pos;

        while hole > 0 {
            let parent = (hole - 1) / 2;
            if !self.cmp.less(&self.data[hole], &self.data[parent]) {
                break;
            }
            self.data.swap(hole, parent);
            hole = parent;
        }

        hole
    }

    /// Moves the element at `pos` toward the leaves while its smaller child
    /// orders strictly before it. Returns its final position.
    fn sift_down(&mut self, pos: usize) -> usize {
        let len = self.data.len();
        let mut hole = pos;

        loop {
            let left = 2 * hole + 1;
            if left >= len {
                break;
            }

            let right = left + 1;
            let smaller = if right < len && self.cmp.less(&self.data[right], &self.data[left]) {
                right
            } else {
                left
            };

            if !self.cmp.less(&self.data[smaller], &self.data[hole]) {
                break;
            }

            self.data.swap(hole, smaller);
            hole = smaller;
        }

        hole
    }

    #[cfg(test)]
    fn is_heap_ordered(&self) -> bool {
        (1..self.data.len()).all(|child| {
            let parent = (child - 1) / 2;
            !self.cmp.less(&self.data[child], &self.data[parent])
        })
    }
}

impl<T: PartialEq, C: Compare<T>> MinHeap<T, C> {
    /// Returns `true` if an element equal to `value` is in the heap. O(n).
    #[inline]
    pub fn contains(&self, value: &T) -> bool {
        self.data.contains(value)
    }

    /// Removes the first element equal to `value`. O(n) search, O(log n)
    /// repair.
    ///
    /// Returns `false` if no element matched.
    pub fn remove(&mut self, value: &T) -> bool {
        match self.data.iter().position(|e| e == value) {
            Some(pos) => {
                self.remove_at(pos);
                true
            }
            None => false,
        }
    }
}

impl<T: Ord> From<Vec<T>> for MinHeap<T> {
    fn from(data: Vec<T>) -> Self {
        Self::from_vec_with_comparator(data, Natural)
    }
}

impl<T: Ord, const N: usize> From<[T; N]> for MinHeap<T> {
    fn from(data: [T; N]) -> Self {
        Self::from(Vec::from(data))
    }
}

impl<T: Ord> FromIterator<T> for MinHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<T, C: Compare<T>> Extend<T> for MinHeap<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.data.reserve(iter.size_hint().0);
        for value in iter {
            self.push(value);
        }
    }
}

impl<'a, T, C: Compare<T>> IntoIterator for &'a MinHeap<T, C> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Debug, C> fmt::Debug for MinHeap<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MinHeap").field("data", &self.data).finish()
    }
}
