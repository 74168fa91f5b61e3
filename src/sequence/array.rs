//! Growable contiguous-array sequence.
//!
//! [`ArraySequence`] keeps its elements in one owned buffer. When an insertion
//! finds the buffer full, a buffer of exactly twice the capacity is allocated,
//! the elements are moved across in order and the old buffer is released.
//! Capacity never shrinks, not even after removals.
//!
//! ```text
//! capacity 4, length 3:   [a][b][c][ ]
//! insert(1, x):           [a][x][b][c]     (b, c shifted right, from the end)
//! insert(0, y):           [y][a][x][b][c][ ][ ][ ]   (grown to 8 first)
//! ```

use super::error::{element_position, insertion_position};
use super::{Sequence, SequenceError, SequenceIter, SequenceIterMut};

/// A sequence backed by a contiguous buffer with doubling growth.
///
/// # Time Complexity
///
/// | Operation | Complexity     |
/// |-----------|----------------|
/// | `append`  | O(1) amortized |
/// | `insert`  | O(n)           |
/// | `get`     | O(1)           |
/// | `remove`  | O(n)           |
/// | `size`    | O(1)           |
///
/// # Examples
///
/// ```rust
/// use massive_motion::sequence::{ArraySequence, Sequence};
///
/// let mut sequence: ArraySequence<i32> = (0..10).collect();
/// assert_eq!(sequence.capacity(), 10);
///
/// sequence.append(10);
/// assert_eq!(sequence.capacity(), 20);
/// assert_eq!(sequence.get(10), Ok(&10));
/// ```
pub struct ArraySequence<T> {
    /// Slots `[0, length)` are occupied; the rest are vacant.
    backing: Box<[Option<T>]>,
    length: usize,
}

impl<T> ArraySequence<T> {
    /// Capacity of a sequence created with [`new`](Self::new).
    pub const DEFAULT_CAPACITY: usize = 10;

    /// Creates an empty sequence with [`DEFAULT_CAPACITY`](Self::DEFAULT_CAPACITY).
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    /// Creates an empty sequence able to hold `capacity` elements before its
    /// first reallocation.
    ///
    /// A capacity of zero is raised to one so that doubling makes progress.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            backing: Self::allocate(capacity.max(1)),
            length: 0,
        }
    }

    /// Returns the number of slots in the backing buffer.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.backing.len()
    }

    fn allocate(capacity: usize) -> Box<[Option<T>]> {
        std::iter::repeat_with(|| None).take(capacity).collect()
    }

    /// Replaces the backing buffer with one of twice the capacity.
    fn grow(&mut self) {
        let capacity = self.capacity();
        let mut grown = Self::allocate(capacity * 2);
        for (target, source) in grown.iter_mut().zip(&mut self.backing[..self.length]) {
            *target = source.take();
        }
        tracing::trace!(from = capacity, to = grown.len(), "growing array sequence");
        self.backing = grown;
    }

    fn out_of_range(&self, index: isize) -> SequenceError {
        SequenceError::OutOfRange {
            index,
            length: self.length,
        }
    }
}

impl<T> Sequence<T> for ArraySequence<T> {
    fn insert(&mut self, index: isize, element: T) -> Result<(), SequenceError> {
        let position = insertion_position(index, self.length)?;
        if self.length == self.capacity() {
            self.grow();
        }
        for slot in (position..self.length).rev() {
            self.backing.swap(slot, slot + 1);
        }
        self.backing[position] = Some(element);
        self.length += 1;
        Ok(())
    }

    fn append(&mut self, element: T) -> bool {
        if self.length == self.capacity() {
            self.grow();
        }
        self.backing[self.length] = Some(element);
        self.length += 1;
        true
    }

    fn get(&self, index: isize) -> Result<&T, SequenceError> {
        let position = element_position(index, self.length)?;
        self.backing[position]
            .as_ref()
            .ok_or_else(|| self.out_of_range(index))
    }

    fn get_mut(&mut self, index: isize) -> Result<&mut T, SequenceError> {
        let position = element_position(index, self.length)?;
        let length = self.length;
        self.backing[position]
            .as_mut()
            .ok_or(SequenceError::OutOfRange { index, length })
    }

    fn remove(&mut self, index: isize) -> Result<T, SequenceError> {
        let position = element_position(index, self.length)?;
        let removed = self.backing[position]
            .take()
            .ok_or_else(|| self.out_of_range(index))?;
        for slot in position..self.length - 1 {
            self.backing.swap(slot, slot + 1);
        }
        self.length -= 1;
        Ok(removed)
    }

    #[inline]
    fn size(&self) -> usize {
        self.length
    }

    fn iter(&self) -> SequenceIter<'_, T> {
        SequenceIter::new(self.backing[..self.length].iter().flatten(), self.length)
    }

    fn iter_mut(&mut self) -> SequenceIterMut<'_, T> {
        let length = self.length;
        SequenceIterMut::new(self.backing[..length].iter_mut().flatten(), length)
    }
}

impl_sequence_traits!(ArraySequence);
