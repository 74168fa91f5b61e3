//! Traversal types shared by every [`Sequence`](super::Sequence).
//!
//! Each container walks its own storage with a private cursor type; the
//! contract hands that cursor out wrapped in [`SequenceIter`] (or
//! [`SequenceIterMut`]) so that callers holding a `Box<dyn Sequence<T>>` get
//! one concrete iterator type regardless of the storage strategy.
//!
//! A traversal observes live storage and snapshots nothing. It borrows the
//! container for its whole lifetime, so inserting or removing while a
//! traversal is open does not compile.

use std::fmt;
use std::iter::FusedIterator;

use super::SequenceError;

/// Forward-only traversal over the elements of a sequence, in position order.
///
/// Besides [`Iterator::next`], which returns `None` once exhausted,
/// [`try_next`](Self::try_next) reports exhaustion as
/// [`SequenceError::EndOfSequence`].
///
/// # Examples
///
/// ```rust
/// use massive_motion::sequence::{Sequence, SequenceError, SinglyLinkedSequence};
///
/// let sequence: SinglyLinkedSequence<char> = "ab".chars().collect();
/// let mut iter = sequence.iter();
/// assert_eq!(iter.try_next(), Ok(&'a'));
/// assert_eq!(iter.try_next(), Ok(&'b'));
/// assert_eq!(iter.try_next(), Err(SequenceError::EndOfSequence));
/// ```
pub struct SequenceIter<'a, T> {
    cursor: Box<dyn Iterator<Item = &'a T> + 'a>,
    remaining: usize,
}

impl<'a, T> SequenceIter<'a, T> {
    /// Wraps a container cursor that will yield exactly `remaining` elements.
    pub(crate) fn new<C>(cursor: C, remaining: usize) -> Self
    where
        C: Iterator<Item = &'a T> + 'a,
    {
        Self {
            cursor: Box::new(cursor),
            remaining,
        }
    }

    /// Advances the traversal.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::EndOfSequence`] when every element has
    /// already been produced.
    pub fn try_next(&mut self) -> Result<&'a T, SequenceError> {
        self.next().ok_or(SequenceError::EndOfSequence)
    }

    /// Returns `true` while at least one element remains.
    #[inline]
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.remaining > 0
    }
}

impl<'a, T> Iterator for SequenceIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let element = self.cursor.next()?;
        self.remaining -= 1;
        Some(element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for SequenceIter<'_, T> {}

impl<T> FusedIterator for SequenceIter<'_, T> {}

impl<T> fmt::Debug for SequenceIter<'_, T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("SequenceIter")
            .field("remaining", &self.remaining)
            .finish_non_exhaustive()
    }
}

/// Forward-only traversal yielding mutable references, in position order.
///
/// Elements can be updated in place; the shape of the sequence cannot change
/// while the traversal is alive.
pub struct SequenceIterMut<'a, T> {
    cursor: Box<dyn Iterator<Item = &'a mut T> + 'a>,
    remaining: usize,
}

impl<'a, T> SequenceIterMut<'a, T> {
    pub(crate) fn new<C>(cursor: C, remaining: usize) -> Self
    where
        C: Iterator<Item = &'a mut T> + 'a,
    {
        Self {
            cursor: Box::new(cursor),
            remaining,
        }
    }

    /// Advances the traversal.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::EndOfSequence`] when every element has
    /// already been produced.
    pub fn try_next(&mut self) -> Result<&'a mut T, SequenceError> {
        self.next().ok_or(SequenceError::EndOfSequence)
    }
}

impl<'a, T> Iterator for SequenceIterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let element = self.cursor.next()?;
        self.remaining -= 1;
        Some(element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for SequenceIterMut<'_, T> {}

impl<T> FusedIterator for SequenceIterMut<'_, T> {}

impl<T> fmt::Debug for SequenceIterMut<'_, T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("SequenceIterMut")
            .field("remaining", &self.remaining)
            .finish_non_exhaustive()
    }
}
