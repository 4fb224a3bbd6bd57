//! Error types for list-backed collections.

use thiserror::Error;

/// Failure returned by list, queue and stack operations.
///
/// The heap and the circular buffer never fail on an empty structure;
/// their reads return `Option` instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CollectionError {
    /// The collection holds no elements.
    #[error("collection is empty")]
    Empty,

    /// The index is outside the valid range for the collection.
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// Length of the collection at the time of the call.
        len: usize,
    },
}

/// Result alias used throughout the crate.
pub type Result<T> = core::result::Result<T, CollectionError>;
