//! Singly linked sequence without a sentinel.
//!
//! [`SinglyLinkedSequence`] owns a chain of boxed nodes starting at `head`.
//! There is no tail pointer, so appending walks the whole chain. Operations at
//! position 0 rewrite `head` directly; every other position is reached by
//! walking to its predecessor first.
//!
//! ```text
//! head -> [a] -> [b] -> [c] -> nil
//! insert(1, x): walk 0 hops to [a], splice after it
//! head -> [a] -> [x] -> [b] -> [c] -> nil
//! ```

use super::error::{element_position, insertion_position};
use super::{Sequence, SequenceError, SequenceIter, SequenceIterMut};

type Link<T> = Option<Box<Node<T>>>;

struct Node<T> {
    element: T,
    next: Link<T>,
}

/// A singly linked sequence addressed from its head.
///
/// # Time Complexity
///
/// | Operation   | Complexity |
/// |-------------|------------|
/// | `append`    | O(n)       |
/// | `insert(i)` | O(i)       |
/// | `get(i)`    | O(i)       |
/// | `remove(i)` | O(i)       |
/// | `size`      | O(1)       |
///
/// # Examples
///
/// ```rust
/// use massive_motion::sequence::{Sequence, SinglyLinkedSequence};
///
/// let mut sequence = SinglyLinkedSequence::new();
/// sequence.append('b');
/// sequence.insert(0, 'a').unwrap();
/// assert_eq!(sequence.get(0), Ok(&'a'));
/// assert_eq!(sequence.remove(1), Ok('b'));
/// ```
pub struct SinglyLinkedSequence<T> {
    head: Link<T>,
    length: usize,
}

impl<T> SinglyLinkedSequence<T> {
    /// Creates an empty sequence.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            head: None,
            length: 0,
        }
    }

    /// Walks `hops` links from the head.
    fn node(&self, hops: usize) -> Option<&Node<T>> {
        let mut current = self.head.as_deref();
        for _ in 0..hops {
            current = current?.next.as_deref();
        }
        current
    }

    fn node_mut(&mut self, hops: usize) -> Option<&mut Node<T>> {
        let mut current = self.head.as_deref_mut();
        for _ in 0..hops {
            current = current?.next.as_deref_mut();
        }
        current
    }
}

impl<T> Sequence<T> for SinglyLinkedSequence<T> {
    fn insert(&mut self, index: isize, element: T) -> Result<(), SequenceError> {
        let length = self.length;
        let position = insertion_position(index, length)?;
        if position == 0 {
            let next = self.head.take();
            self.head = Some(Box::new(Node { element, next }));
        } else {
            let predecessor = self
                .node_mut(position - 1)
                .ok_or(SequenceError::OutOfRange { index, length })?;
            let next = predecessor.next.take();
            predecessor.next = Some(Box::new(Node { element, next }));
        }
        self.length += 1;
        Ok(())
    }

    fn append(&mut self, element: T) -> bool {
        let node = Some(Box::new(Node {
            element,
            next: None,
        }));
        match self.length.checked_sub(1).and_then(|last| self.node_mut(last)) {
            Some(last) => last.next = node,
            None => self.head = node,
        }
        self.length += 1;
        true
    }

    fn get(&self, index: isize) -> Result<&T, SequenceError> {
        let position = element_position(index, self.length)?;
        self.node(position)
            .map(|node| &node.element)
            .ok_or(SequenceError::OutOfRange {
                index,
                length: self.length,
            })
    }

    fn get_mut(&mut self, index: isize) -> Result<&mut T, SequenceError> {
        let length = self.length;
        let position = element_position(index, length)?;
        self.node_mut(position)
            .map(|node| &mut node.element)
            .ok_or(SequenceError::OutOfRange { index, length })
    }

    fn remove(&mut self, index: isize) -> Result<T, SequenceError> {
        let length = self.length;
        let position = element_position(index, length)?;
        let removed = if position == 0 {
            let node = self
                .head
                .take()
                .ok_or(SequenceError::OutOfRange { index, length })?;
            let Node { element, next } = *node;
            self.head = next;
            element
        } else {
            let predecessor = self
                .node_mut(position - 1)
                .ok_or(SequenceError::OutOfRange { index, length })?;
            let node = predecessor
                .next
                .take()
                .ok_or(SequenceError::OutOfRange { index, length })?;
            let Node { element, next } = *node;
            predecessor.next = next;
            element
        };
        self.length -= 1;
        Ok(removed)
    }

    #[inline]
    fn size(&self) -> usize {
        self.length
    }

    fn iter(&self) -> SequenceIter<'_, T> {
        SequenceIter::new(
            Cursor {
                next: self.head.as_deref(),
            },
            self.length,
        )
    }

    fn iter_mut(&mut self) -> SequenceIterMut<'_, T> {
        let length = self.length;
        SequenceIterMut::new(
            CursorMut {
                next: self.head.as_deref_mut(),
            },
            length,
        )
    }
}

impl<T> Drop for SinglyLinkedSequence<T> {
    // Unlinks node by node; the default drop would recurse once per node.
    fn drop(&mut self) {
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
    }
}

impl_sequence_traits!(SinglyLinkedSequence);

// =============================================================================
// Cursors
// =============================================================================

struct Cursor<'a, T> {
    next: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for Cursor<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            &node.element
        })
    }
}

struct CursorMut<'a, T> {
    next: Option<&'a mut Node<T>>,
}

impl<'a, T> Iterator for CursorMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.take().map(|node| {
            self.next = node.next.as_deref_mut();
            &mut node.element
        })
    }
}
