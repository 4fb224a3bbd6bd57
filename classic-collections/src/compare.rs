//! Ordering functions for [`MinHeap`](crate::MinHeap).
//!
//! A heap is keyed by exactly one ordering function. Equality used for
//! searching (`contains`, `remove`) is always `PartialEq` and is never
//! derived from the comparator.

use core::cmp::Ordering;

/// A total order over `T`.
///
/// Implemented for [`Natural`] and for any closure or function with the
/// signature `Fn(&T, &T) -> Ordering`.
///
/// # Example
///
/// ```
/// use classic_collections::MinHeap;
///
/// // Max-heap behavior by reversing the order.
/// let mut heap = MinHeap::with_comparator(|a: &i32, b: &i32| b.cmp(a));
/// heap.push(1);
/// heap.push(3);
/// heap.push(2);
/// assert_eq!(heap.pop(), Some(3));
/// ```
pub trait Compare<T: ?Sized> {
    /// Compares two elements.
    fn compare(&self, a: &T, b: &T) -> Ordering;

    /// Returns `true` if `a` orders strictly before `b`.
    #[inline]
    fn less(&self, a: &T, b: &T) -> bool {
        self.compare(a, b) == Ordering::Less
    }
}

/// Natural (ascending) ordering via [`Ord`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Natural;

impl<T: Ord + ?Sized> Compare<T> for Natural {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

impl<T: ?Sized, F> Compare<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn natural_order() {
        assert_eq!(Natural.compare(&1, &2), Ordering::Less);
        assert_eq!(Natural.compare(&2, &2), Ordering::Equal);
        assert_eq!(Natural.compare("b", "a"), Ordering::Greater);
        assert!(Natural.less(&1, &2));
        assert!(!Natural.less(&2, &2));
    }

    #[test]
    fn closure_order() {
        let by_len = |a: &String, b: &String| a.len().cmp(&b.len());
        assert!(by_len.less(&"ab".to_string(), &"abc".to_string()));
        assert_eq!(
            by_len.compare(&"xy".to_string(), &"ab".to_string()),
            Ordering::Equal
        );
    }
}
