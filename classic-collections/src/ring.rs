//! Fixed-capacity circular buffer that overwrites its oldest entry.
//!
//! Two cursors walk a slot array modulo capacity:
//!
//! ```text
//!   read                write
//!    │                   │
//! ┌──▼──┬─────┬─────┬────▼┬─────┐
//! │  a  │  b  │  c  │     │     │   len = 3, capacity = 5
//! └─────┴─────┴─────┴─────┴─────┘
//! ```
//!
//! - `enqueue` writes at `write` and advances it
//! - `dequeue` reads at `read` and advances it
//! - When full, `write == read`; enqueueing advances both cursors,
//!   overwriting the oldest entry instead of failing
//!
//! # Example
//!
//! ```
//! use classic_collections::CircularBuffer;
//!
//! let mut buffer = CircularBuffer::new(3);
//! buffer.enqueue(1);
//! buffer.enqueue(2);
//! buffer.enqueue(3);
//! assert_eq!(buffer.enqueue(4), Some(1)); // oldest overwritten
//!
//! assert_eq!(buffer.dequeue(), Some(2));
//! assert_eq!(buffer.peek_back(), Some(&4));
//! ```

use core::fmt;
use core::iter::FusedIterator;

use tracing::trace;

/// A ring buffer with a capacity fixed at construction.
#[derive(Clone)]
pub struct CircularBuffer<T> {
    slots: Box<[Option<T>]>,
    /// Slot holding the oldest entry.
    read: usize,
    /// Slot the next entry is written to.
    write: usize,
    len: usize,
    /// Set by the first overwrite after the buffer fills, cleared once an
    /// entry is dequeued.
    overwriting: bool,
}

#[inline]
fn wrap_next(pos: usize, capacity: usize) -> usize {
    let next = pos + 1;
    if next == capacity { 0 } else { next }
}

#[inline]
fn wrap_prev(pos: usize, capacity: usize) -> usize {
    if pos == 0 { capacity - 1 } else { pos - 1 }
}

impl<T> CircularBuffer<T> {
    /// Creates an empty buffer holding at most `capacity` entries.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is 0.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "capacity must be non-zero");

        Self {
            slots: (0..capacity).map(|_| None).collect(),
            read: 0,
            write: 0,
            len: 0,
            overwriting: false,
        }
    }

    /// Returns the maximum number of entries.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns the number of entries currently held.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the buffer holds no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if the next `enqueue` will overwrite an entry.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.len == self.capacity()
    }

    /// Removes every entry and rewinds both cursors.
    pub fn clear(&mut self) {
        for slot in self.slots.iter_mut() {
            *slot = None;
        }
        self.read = 0;
        self.write = 0;
        self.len = 0;
        self.overwriting = false;
    }

    /// Appends a value. O(1).
    ///
    /// If the buffer is full the oldest entry is overwritten and returned.
    pub fn enqueue(&mut self, value: T) -> Option<T> {
        let evicted = if self.is_full() {
            debug_assert_eq!(self.read, self.write);
            if !self.overwriting {
                self.overwriting = true;
                trace!(capacity = self.capacity(), "buffer full, overwriting oldest entries");
            }
            self.read = self.advance(self.read);
            self.slots[self.write].take()
        } else {
            self.len += 1;
            None
        };

        self.slots[self.write] = Some(value);
        self.write = self.advance(self.write);
        evicted
    }

    /// Removes and returns the oldest entry. O(1).
    ///
    /// Returns `None` if the buffer is empty.
    pub fn dequeue(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }

        let value = self.slots[self.read].take();
        self.read = self.advance(self.read);
        self.len -= 1;
        self.overwriting = false;
        value
    }

    /// Returns the oldest entry without removing it.
    #[inline]
    pub fn peek_front(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        self.slots[self.read].as_ref()
    }

    /// Returns the most recently written entry without removing it.
    #[inline]
    pub fn peek_back(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }

        self.slots[wrap_prev(self.write, self.capacity())].as_ref()
    }

    /// Returns an iterator from the oldest to the newest entry.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            slots: &self.slots,
            front: self.read,
            back: wrap_prev(self.write, self.capacity()),
            remaining: self.len,
        }
    }

    #[inline]
    fn advance(&self, pos: usize) -> usize {
        wrap_next(pos, self.capacity())
    }
}

impl<T: PartialEq> CircularBuffer<T> {
    /// Returns `true` if a live entry equals `value`. O(n).
    ///
    /// Entries already dequeued or overwritten are never matched.
    pub fn contains(&self, value: &T) -> bool {
        self.iter().any(|v| v == value)
    }
}

impl<T> Extend<T> for CircularBuffer<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.enqueue(value);
        }
    }
}

impl<'a, T> IntoIterator for &'a CircularBuffer<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for CircularBuffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CircularBuffer")
            .field("capacity", &self.capacity())
            .field("entries", &self.iter().collect::<Vec<_>>())
            .finish()
    }
}

/// Iterator over buffer entries, oldest first.
pub struct Iter<'a, T> {
    slots: &'a [Option<T>],
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

        let slot = self.slots[self.front].as_ref();
        self.front = wrap_next(self.front, self.slots.len());
        self.remaining -= 1;
        slot
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

        let slot = self.slots[self.back].as_ref();
        self.back = wrap_prev(self.back, self.slots.len());
        self.remaining -= 1;
        slot
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}
