//! Sentinel handles for arena-allocated nodes.
//!
//! Links between list nodes are slab keys rather than pointers. An absent
//! link is encoded with a reserved sentinel instead of `Option<usize>`,
//! which keeps [`ListNode`](crate::list::ListNode) at three words plus data.

/// A copyable node handle with a reserved "no node" value.
pub(crate) trait Key: Copy + Eq {
    /// Sentinel value representing "no node".
    const NONE: Self;

    /// Returns `true` if this is the sentinel value.
    #[inline]
    fn is_none(self) -> bool {
        self == Self::NONE
    }

    /// Returns `true` if this is NOT the sentinel value.
    #[inline]
    fn is_some(self) -> bool {
        !self.is_none()
    }

    /// Converts the handle into an `Option`, mapping the sentinel to `None`.
    #[inline]
    fn get(self) -> Option<Self> {
        if self.is_none() { None } else { Some(self) }
    }
}

// Slab keys are dense from zero, so `usize::MAX` is never handed out.
impl Key for usize {
    const NONE: Self = usize::MAX;
}
