//! Interchangeable, position-addressed sequence containers.
//!
//! This module defines the [`Sequence`] contract and four independent
//! implementations of it, each trading off a different storage strategy:
//!
//! - [`ArraySequence`]: contiguous buffer that doubles on overflow
//! - [`SinglyLinkedSequence`]: head-only singly linked list
//! - [`DoublyLinkedSequence`]: head and tail with backward links, O(1) append
//! - [`DummyHeadLinkedSequence`]: singly linked list behind a sentinel node
//!
//! A client picks one strategy at construction time with [`SequenceKind`]
//! and works through `Box<dyn Sequence<T>>` from then on.
//!
//! # Time Complexity
//!
//! | Operation    | Array          | Singly   | Doubly   | Dummy head |
//! |--------------|----------------|----------|----------|------------|
//! | `append`     | O(1) amortized | O(n)     | O(1)     | O(n)       |
//! | `insert(i)`  | O(n)           | O(i)     | O(i)     | O(i)       |
//! | `get(i)`     | O(1)           | O(i)     | O(i)     | O(i)       |
//! | `remove(i)`  | O(n)           | O(i)     | O(i)     | O(i)       |
//! | `size`       | O(1)           | O(1)     | O(1)     | O(1)       |
//!
//! # Examples
//!
//! ```rust
//! use massive_motion::sequence::{Sequence, SequenceKind};
//!
//! let mut sequence = SequenceKind::DummyHead.build::<&str>();
//! sequence.append("a");
//! sequence.append("b");
//! sequence.insert(1, "c").unwrap();
//!
//! assert_eq!(sequence.iter().copied().collect::<Vec<_>>(), vec!["a", "c", "b"]);
//! assert_eq!(sequence.remove(0), Ok("a"));
//! assert_eq!(sequence.size(), 2);
//! ```
//!
//! # Iteration
//!
//! Traversals observe live storage. They borrow the container, so a
//! structural mutation while a traversal is open is a compile error rather
//! than a runtime hazard. None of the containers are meant to be shared
//! across threads.

use std::fmt;

mod error;
mod iter;
mod kind;

/// Implements the container-independent standard traits in terms of the
/// [`Sequence`] contract: `Default`, `Debug`, `PartialEq`, `Eq`, `Extend`,
/// `FromIterator` and borrowing `IntoIterator`.
macro_rules! impl_sequence_traits {
    ($container:ident) => {
        impl<T> Default for $container<T> {
            #[inline]
            fn default() -> Self {
                Self::new()
            }
        }

        impl<T: std::fmt::Debug> std::fmt::Debug for $container<T> {
            fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                formatter
                    .debug_list()
                    .entries($crate::sequence::Sequence::iter(self))
                    .finish()
            }
        }

        impl<T: PartialEq> PartialEq for $container<T> {
            fn eq(&self, other: &Self) -> bool {
                $crate::sequence::Sequence::size(self) == $crate::sequence::Sequence::size(other)
                    && $crate::sequence::Sequence::iter(self)
                        .eq($crate::sequence::Sequence::iter(other))
            }
        }

        impl<T: Eq> Eq for $container<T> {}

        impl<T> $container<T> {
            /// Returns a forward traversal; see [`Sequence::iter`](crate::sequence::Sequence::iter).
            #[inline]
            #[must_use]
            pub fn iter(&self) -> $crate::sequence::SequenceIter<'_, T> {
                $crate::sequence::Sequence::iter(self)
            }

            /// Returns a mutable forward traversal; see
            /// [`Sequence::iter_mut`](crate::sequence::Sequence::iter_mut).
            #[inline]
            pub fn iter_mut(&mut self) -> $crate::sequence::SequenceIterMut<'_, T> {
                $crate::sequence::Sequence::iter_mut(self)
            }
        }

        impl<T> Extend<T> for $container<T> {
            fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
                for element in iter {
                    $crate::sequence::Sequence::append(self, element);
                }
            }
        }

        impl<T> FromIterator<T> for $container<T> {
            fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
                let mut sequence = Self::new();
                sequence.extend(iter);
                sequence
            }
        }

        impl<'a, T> IntoIterator for &'a $container<T> {
            type Item = &'a T;
            type IntoIter = $crate::sequence::SequenceIter<'a, T>;

            fn into_iter(self) -> Self::IntoIter {
                $crate::sequence::Sequence::iter(self)
            }
        }

        impl<'a, T> IntoIterator for &'a mut $container<T> {
            type Item = &'a mut T;
            type IntoIter = $crate::sequence::SequenceIterMut<'a, T>;

            fn into_iter(self) -> Self::IntoIter {
                $crate::sequence::Sequence::iter_mut(self)
            }
        }
    };
}

mod array;
mod doubly;
mod dummy_head;
mod singly;

pub use array::ArraySequence;
pub use doubly::DoublyLinkedSequence;
pub use dummy_head::DummyHeadLinkedSequence;
pub use error::SequenceError;
pub use iter::{SequenceIter, SequenceIterMut};
pub use kind::{SequenceKind, UnknownSequenceKind};
pub use singly::SinglyLinkedSequence;

// =============================================================================
// Sequence Contract
// =============================================================================

/// An ordered, position-addressed collection with a live length.
///
/// Positions are 0-based and contiguous. Indexes are signed so that a
/// negative index is representable and rejected with
/// [`SequenceError::OutOfRange`]. Every operation that can fail checks its
/// index before touching storage, so a failed call leaves the sequence
/// exactly as it was.
///
/// The trait is object-safe; `Box<dyn Sequence<T>>` is the intended
/// polymorphic handle (see [`SequenceKind::build`]).
pub trait Sequence<T> {
    /// Inserts `element` at `index`, shifting the elements at positions
    /// `>= index` one position towards the end.
    ///
    /// `index == size()` appends.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::OutOfRange`] unless `0 <= index <= size()`.
    fn insert(&mut self, index: isize, element: T) -> Result<(), SequenceError>;

    /// Appends `element` at the end. Always succeeds and returns `true`.
    fn append(&mut self, element: T) -> bool;

    /// Returns a reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::OutOfRange`] unless `0 <= index < size()`.
    fn get(&self, index: isize) -> Result<&T, SequenceError>;

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::OutOfRange`] unless `0 <= index < size()`.
    fn get_mut(&mut self, index: isize) -> Result<&mut T, SequenceError>;

    /// Removes and returns the element at `index`, shifting later elements
    /// one position towards the front.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::OutOfRange`] unless `0 <= index < size()`.
    fn remove(&mut self, index: isize) -> Result<T, SequenceError>;

    /// Returns the number of elements. O(1).
    fn size(&self) -> usize;

    /// Returns `true` if the sequence holds no elements.
    #[inline]
    fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Returns a fresh forward traversal over the elements in position order.
    fn iter(&self) -> SequenceIter<'_, T>;

    /// Returns a fresh forward traversal yielding mutable references.
    fn iter_mut(&mut self) -> SequenceIterMut<'_, T>;
}

static_assertions::assert_obj_safe!(Sequence<()>);

impl<T: fmt::Debug> fmt::Debug for dyn Sequence<T> + '_ {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<'a, T> IntoIterator for &'a (dyn Sequence<T> + '_) {
    type Item = &'a T;
    type IntoIter = SequenceIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut (dyn Sequence<T> + '_) {
    type Item = &'a mut T;
    type IntoIter = SequenceIterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_debug_for_boxed_sequence() {
        let mut sequence = SequenceKind::Double.build::<i32>();
        sequence.append(1);
        sequence.append(2);
        assert_eq!(format!("{sequence:?}"), "[1, 2]");
    }

    #[rstest]
    fn test_is_empty_default_method() {
        let mut sequence = SequenceKind::Single.build::<i32>();
        assert!(sequence.is_empty());
        sequence.append(7);
        assert!(!sequence.is_empty());
    }

    #[rstest]
    fn test_inherent_iter_matches_borrowing_into_iter() {
        let mut sequence: DummyHeadLinkedSequence<i32> = (1..=3).collect();
        for element in sequence.iter_mut() {
            *element *= 2;
        }
        let inherent: Vec<i32> = sequence.iter().copied().collect();
        let borrowed: Vec<i32> = (&sequence).into_iter().copied().collect();
        assert_eq!(inherent, vec![2, 4, 6]);
        assert_eq!(inherent, borrowed);
    }

    #[rstest]
    fn test_for_loop_over_trait_object() {
        let mut sequence = SequenceKind::ArrayList.build::<i32>();
        for element in [1, 2, 3] {
            sequence.append(element);
        }
        for element in sequence.as_mut() {
            *element += 1;
        }
        let collected: Vec<i32> = sequence.as_ref().into_iter().copied().collect();
        assert_eq!(collected, vec![2, 3, 4]);
    }
}
