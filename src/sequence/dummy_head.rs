//! Singly linked sequence behind a permanent sentinel node.
//!
//! The sentinel is allocated once at construction and carries no element.
//! Real data starts at its successor. Because every position, including 0,
//! now has a predecessor, insertion and removal always walk `index` hops from
//! the sentinel and splice there. No branch distinguishes the front of the
//! sequence.
//!
//! ```text
//! sentinel -> [a] -> [b] -> nil
//! insert(0, x): walk 0 hops (stay on sentinel), splice after it
//! sentinel -> [x] -> [a] -> [b] -> nil
//! ```

use super::error::{element_position, insertion_position};
use super::{Sequence, SequenceError, SequenceIter, SequenceIterMut};

type Link<T> = Option<Box<Node<T>>>;

struct Node<T> {
    element: T,
    next: Link<T>,
}

/// The dummy head. It only owns the link to the first real node.
struct Sentinel<T> {
    next: Link<T>,
}

/// A singly linked sequence whose head is a sentinel node.
///
/// Observable behaviour is identical to
/// [`SinglyLinkedSequence`](super::SinglyLinkedSequence).
///
/// # Examples
///
/// ```rust
/// use massive_motion::sequence::{DummyHeadLinkedSequence, Sequence};
///
/// let mut sequence = DummyHeadLinkedSequence::new();
/// sequence.insert(0, "b").unwrap();
/// sequence.insert(0, "a").unwrap();
/// assert_eq!(sequence.iter().copied().collect::<Vec<_>>(), vec!["a", "b"]);
/// assert_eq!(sequence.remove(0), Ok("a"));
/// ```
pub struct DummyHeadLinkedSequence<T> {
    head: Box<Sentinel<T>>,
    length: usize,
}

impl<T> DummyHeadLinkedSequence<T> {
    /// Creates an empty sequence holding only its sentinel.
    #[must_use]
    pub fn new() -> Self {
        Self {
            head: Box::new(Sentinel { next: None }),
            length: 0,
        }
    }

    /// Walks `hops` nodes from the sentinel and returns the outgoing link of
    /// the node reached. Zero hops yields the sentinel's own link.
    fn link_after(&mut self, hops: usize) -> Option<&mut Link<T>> {
        let mut link = &mut self.head.next;
        for _ in 0..hops {
            link = &mut link.as_mut()?.next;
        }
        Some(link)
    }

    fn first(&self) -> Option<&Node<T>> {
        self.head.next.as_deref()
    }
}

impl<T> Sequence<T> for DummyHeadLinkedSequence<T> {
    fn insert(&mut self, index: isize, element: T) -> Result<(), SequenceError> {
        let length = self.length;
        let position = insertion_position(index, length)?;
        let link = self
            .link_after(position)
            .ok_or(SequenceError::OutOfRange { index, length })?;
        let next = link.take();
        *link = Some(Box::new(Node { element, next }));
        self.length += 1;
        Ok(())
    }

    fn append(&mut self, element: T) -> bool {
        let mut link = &mut self.head.next;
        while let Some(node) = link {
            link = &mut node.next;
        }
        *link = Some(Box::new(Node {
            element,
            next: None,
        }));
        self.length += 1;
        true
    }

    fn get(&self, index: isize) -> Result<&T, SequenceError> {
        let position = element_position(index, self.length)?;
        let mut current = self.first();
        for _ in 0..position {
            current = current.and_then(|node| node.next.as_deref());
        }
        current
            .map(|node| &node.element)
            .ok_or(SequenceError::OutOfRange {
                index,
                length: self.length,
            })
    }

    fn get_mut(&mut self, index: isize) -> Result<&mut T, SequenceError> {
        let length = self.length;
        let position = element_position(index, length)?;
        self.link_after(position)
            .and_then(|link| link.as_deref_mut())
            .map(|node| &mut node.element)
            .ok_or(SequenceError::OutOfRange { index, length })
    }

    fn remove(&mut self, index: isize) -> Result<T, SequenceError> {
        let length = self.length;
        let position = element_position(index, length)?;
        let link = self
            .link_after(position)
            .ok_or(SequenceError::OutOfRange { index, length })?;
        let node = link
            .take()
            .ok_or(SequenceError::OutOfRange { index, length })?;
        let Node { element, next } = *node;
        *link = next;
        self.length -= 1;
        Ok(element)
    }

    #[inline]
    fn size(&self) -> usize {
        self.length
    }

    fn iter(&self) -> SequenceIter<'_, T> {
        SequenceIter::new(Cursor { next: self.first() }, self.length)
    }

    fn iter_mut(&mut self) -> SequenceIterMut<'_, T> {
        let length = self.length;
        SequenceIterMut::new(
            CursorMut {
                next: self.head.next.as_deref_mut(),
            },
            length,
        )
    }
}

impl<T> Drop for DummyHeadLinkedSequence<T> {
    fn drop(&mut self) {
        let mut link = self.head.next.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
    }
}

impl_sequence_traits!(DummyHeadLinkedSequence);

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

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn collect(sequence: &DummyHeadLinkedSequence<i32>) -> Vec<i32> {
        sequence.iter().copied().collect()
    }

    #[rstest]
    fn test_zero_hops_lands_on_sentinel_link() {
        let mut sequence: DummyHeadLinkedSequence<i32> = (1..=2).collect();
        let link = sequence.link_after(0).unwrap();
        assert_eq!(link.as_ref().map(|node| node.element), Some(1));
    }

    #[rstest]
    fn test_link_after_past_end_is_none() {
        let mut sequence: DummyHeadLinkedSequence<i32> = (1..=2).collect();
        assert!(sequence.link_after(2).is_some_and(|link| link.is_none()));
        assert!(sequence.link_after(3).is_none());
    }

    #[rstest]
    fn test_insert_front_middle_end() {
        let mut sequence = DummyHeadLinkedSequence::new();
        sequence.insert(0, 2).unwrap();
        sequence.insert(0, 0).unwrap();
        sequence.insert(1, 1).unwrap();
        sequence.insert(3, 3).unwrap();
        assert_eq!(collect(&sequence), vec![0, 1, 2, 3]);
    }

    #[rstest]
    fn test_remove_front_keeps_sentinel() {
        let mut sequence: DummyHeadLinkedSequence<i32> = (0..3).collect();
        assert_eq!(sequence.remove(0), Ok(0));
        assert_eq!(sequence.remove(0), Ok(1));
        assert_eq!(sequence.remove(0), Ok(2));
        assert!(sequence.is_empty());
        assert!(sequence.head.next.is_none());
        sequence.append(7);
        assert_eq!(collect(&sequence), vec![7]);
    }

    #[rstest]
    fn test_get_mut_reaches_last_node() {
        let mut sequence: DummyHeadLinkedSequence<i32> = (0..3).collect();
        *sequence.get_mut(2).unwrap() = 20;
        assert_eq!(collect(&sequence), vec![0, 1, 20]);
    }

    #[rstest]
    fn test_append_walks_to_last_node() {
        let mut sequence = DummyHeadLinkedSequence::new();
        for value in 0..5 {
            sequence.append(value);
        }
        assert_eq!(collect(&sequence), vec![0, 1, 2, 3, 4]);
    }
}
