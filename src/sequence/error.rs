//! Error types for the sequence containers.
//!
//! Every failure a container can report is local and deterministic: either an
//! index fell outside the bound of the operation, or a traversal was advanced
//! past its last element. Neither is retryable without changing the request.

use thiserror::Error;

/// Errors reported by [`Sequence`](super::Sequence) operations and by
/// [`SequenceIter::try_next`](super::SequenceIter::try_next).
///
/// # Examples
///
/// ```rust
/// use massive_motion::sequence::{ArraySequence, Sequence, SequenceError};
///
/// let sequence: ArraySequence<i32> = ArraySequence::new();
/// assert_eq!(
///     sequence.get(0),
///     Err(SequenceError::OutOfRange { index: 0, length: 0 })
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SequenceError {
    /// The index supplied to `insert`, `get`, `get_mut` or `remove` is outside
    /// the valid bound of that operation. No mutation has taken place.
    #[error("index {index} out of range for sequence of length {length}")]
    OutOfRange {
        /// The rejected index.
        index: isize,
        /// The length of the sequence at the time of the call.
        length: usize,
    },

    /// A traversal was advanced after yielding its last element.
    #[error("sequence exhausted: no element left to traverse")]
    EndOfSequence,
}

impl SequenceError {
    /// Returns `true` for [`SequenceError::OutOfRange`].
    #[inline]
    #[must_use]
    pub const fn is_out_of_range(&self) -> bool {
        matches!(self, Self::OutOfRange { .. })
    }
}

/// Checks `0 <= index < length` and converts the index to a position.
///
/// Used by `get`, `get_mut` and `remove`.
#[inline]
pub fn element_position(index: isize, length: usize) -> Result<usize, SequenceError> {
    usize::try_from(index)
        .ok()
        .filter(|&position| position < length)
        .ok_or(SequenceError::OutOfRange { index, length })
}

/// Checks `0 <= index <= length` and converts the index to a position.
///
/// Used by `insert`, where `index == length` means append.
#[inline]
pub fn insertion_position(index: isize, length: usize) -> Result<usize, SequenceError> {
    usize::try_from(index)
        .ok()
        .filter(|&position| position <= length)
        .ok_or(SequenceError::OutOfRange { index, length })
}
