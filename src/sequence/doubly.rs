//! Doubly linked sequence with head and tail handles.
//!
//! Nodes live in an arena (`Vec` of slots) and refer to each other through
//! integer handles. `next` handles give the forward order; `prev` handles are
//! plain traversal references that never own anything, so there is no
//! reference cycle and nothing can dangle. A removed node's slot is released
//! straight away and reused by a later insertion.
//!
//! ```text
//! head = 2, tail = 0
//! slot 2: [a] prev=-  next=1
//! slot 1: [b] prev=2  next=0
//! slot 0: [c] prev=1  next=-
//! ```
//!
//! Index-addressed operations walk forward from `head` only.

use super::error::{element_position, insertion_position};
use super::{Sequence, SequenceError, SequenceIter, SequenceIterMut};

type NodeId = usize;

struct Slot<T> {
    /// `None` only while the slot is on the vacant list.
    element: Option<T>,
    prev: Option<NodeId>,
    next: Option<NodeId>,
}

/// A doubly linked sequence with O(1) append.
///
/// # Time Complexity
///
/// | Operation   | Complexity |
/// |-------------|------------|
/// | `append`    | O(1)       |
/// | `insert(i)` | O(i)       |
/// | `get(i)`    | O(i)       |
/// | `remove(i)` | O(i)       |
/// | `size`      | O(1)       |
///
/// # Examples
///
/// ```rust
/// use massive_motion::sequence::{DoublyLinkedSequence, Sequence};
///
/// let mut sequence: DoublyLinkedSequence<i32> = (1..=3).collect();
/// sequence.insert(0, 0).unwrap();
/// assert_eq!(sequence.remove(3), Ok(3));
///
/// let forward: Vec<i32> = sequence.iter().copied().collect();
/// let mut backward: Vec<i32> = sequence.iter_rev().copied().collect();
/// backward.reverse();
/// assert_eq!(forward, backward);
/// ```
pub struct DoublyLinkedSequence<T> {
    slots: Vec<Slot<T>>,
    vacant: Vec<NodeId>,
    head: Option<NodeId>,
    tail: Option<NodeId>,
    length: usize,
}

impl<T> DoublyLinkedSequence<T> {
    /// Creates an empty sequence.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            slots: Vec::new(),
            vacant: Vec::new(),
            head: None,
            tail: None,
            length: 0,
        }
    }

    /// Returns a traversal from the tail towards the head, following the
    /// backward links.
    #[must_use]
    pub fn iter_rev(&self) -> SequenceIter<'_, T> {
        SequenceIter::new(
            Cursor {
                slots: &self.slots,
                next: self.tail,
                direction: Direction::Backward,
            },
            self.length,
        )
    }

    /// Stores `element` in a vacant slot, or a new one, and returns its handle.
    fn allocate(&mut self, element: T, prev: Option<NodeId>, next: Option<NodeId>) -> NodeId {
        let slot = Slot {
            element: Some(element),
            prev,
            next,
        };
        if let Some(id) = self.vacant.pop() {
            self.slots[id] = slot;
            id
        } else {
            self.slots.push(slot);
            self.slots.len() - 1
        }
    }

    fn release(&mut self, id: NodeId) {
        let slot = &mut self.slots[id];
        slot.element = None;
        slot.prev = None;
        slot.next = None;
        self.vacant.push(id);
    }

    /// Walks `hops` forward links from the head.
    fn node_at(&self, hops: usize) -> Option<NodeId> {
        let mut current = self.head;
        for _ in 0..hops {
            current = self.slots[current?].next;
        }
        current
    }
}

impl<T> Sequence<T> for DoublyLinkedSequence<T> {
    fn insert(&mut self, index: isize, element: T) -> Result<(), SequenceError> {
        let length = self.length;
        let position = insertion_position(index, length)?;
        if position == length {
            self.append(element);
            return Ok(());
        }

        let current = self
            .node_at(position)
            .ok_or(SequenceError::OutOfRange { index, length })?;
        let predecessor = self.slots[current].prev;
        let id = self.allocate(element, predecessor, Some(current));
        match predecessor {
            Some(predecessor) => self.slots[predecessor].next = Some(id),
            None => self.head = Some(id),
        }
        self.slots[current].prev = Some(id);
        self.length += 1;
        Ok(())
    }

    fn append(&mut self, element: T) -> bool {
        let id = self.allocate(element, self.tail, None);
        match self.tail {
            Some(tail) => self.slots[tail].next = Some(id),
            None => self.head = Some(id),
        }
        self.tail = Some(id);
        self.length += 1;
        true
    }

    fn get(&self, index: isize) -> Result<&T, SequenceError> {
        let position = element_position(index, self.length)?;
        self.node_at(position)
            .and_then(|id| self.slots[id].element.as_ref())
            .ok_or(SequenceError::OutOfRange {
                index,
                length: self.length,
            })
    }

    fn get_mut(&mut self, index: isize) -> Result<&mut T, SequenceError> {
        let length = self.length;
        let position = element_position(index, length)?;
        let id = self
            .node_at(position)
            .ok_or(SequenceError::OutOfRange { index, length })?;
        self.slots[id]
            .element
            .as_mut()
            .ok_or(SequenceError::OutOfRange { index, length })
    }

    fn remove(&mut self, index: isize) -> Result<T, SequenceError> {
        let length = self.length;
        let position = element_position(index, length)?;
        let current = self
            .node_at(position)
            .ok_or(SequenceError::OutOfRange { index, length })?;
        let removed = self.slots[current]
            .element
            .take()
            .ok_or(SequenceError::OutOfRange { index, length })?;

        let (prev, next) = (self.slots[current].prev, self.slots[current].next);
        match prev {
            Some(prev) => self.slots[prev].next = next,
            None => self.head = next,
        }
        match next {
            Some(next) => self.slots[next].prev = prev,
            None => self.tail = prev,
        }
        self.release(current);
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
                slots: &self.slots,
                next: self.head,
                direction: Direction::Forward,
            },
            self.length,
        )
    }

    /// Slots are linked in arbitrary arena order, so the arena is first split
    /// into one disjoint borrow per slot. This costs a single allocation of
    /// `slots.len()` entries per traversal.
    fn iter_mut(&mut self) -> SequenceIterMut<'_, T> {
        let length = self.length;
        let next = self.head;
        let entries = self
            .slots
            .iter_mut()
            .map(|slot| (slot.element.as_mut(), slot.next))
            .collect();
        SequenceIterMut::new(CursorMut { entries, next }, length)
    }
}

impl_sequence_traits!(DoublyLinkedSequence);

// =============================================================================
// Cursors
// =============================================================================

#[derive(Clone, Copy)]
enum Direction {
    Forward,
    Backward,
}

struct Cursor<'a, T> {
    slots: &'a [Slot<T>],
    next: Option<NodeId>,
    direction: Direction,
}

impl<'a, T> Iterator for Cursor<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let slot = &self.slots[self.next?];
        self.next = match self.direction {
            Direction::Forward => slot.next,
            Direction::Backward => slot.prev,
        };
        slot.element.as_ref()
    }
}

/// Forward walk over per-slot borrows, each paired with its `next` handle.
struct CursorMut<'a, T> {
    entries: Vec<(Option<&'a mut T>, Option<NodeId>)>,
    next: Option<NodeId>,
}

impl<'a, T> Iterator for CursorMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        let (element, next) = self.entries.get_mut(self.next?)?;
        self.next = *next;
        element.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn forward(sequence: &DoublyLinkedSequence<i32>) -> Vec<i32> {
        sequence.iter().copied().collect()
    }

    fn backward(sequence: &DoublyLinkedSequence<i32>) -> Vec<i32> {
        sequence.iter_rev().copied().collect()
    }

    fn assert_links_agree(sequence: &DoublyLinkedSequence<i32>) {
        let mut reversed = backward(sequence);
        reversed.reverse();
        assert_eq!(forward(sequence), reversed);
        assert_eq!(reversed.len(), sequence.size());
    }

    #[rstest]
    fn test_append_links_tail() {
        let mut sequence = DoublyLinkedSequence::new();
        for value in 0..4 {
            sequence.append(value);
        }
        assert_eq!(forward(&sequence), vec![0, 1, 2, 3]);
        assert_eq!(backward(&sequence), vec![3, 2, 1, 0]);
    }

    #[rstest]
    fn test_insert_before_head_reassigns_head() {
        let mut sequence: DoublyLinkedSequence<i32> = (1..=2).collect();
        sequence.insert(0, 0).unwrap();
        assert_eq!(sequence.head.map(|id| sequence.slots[id].element), Some(Some(0)));
        assert_links_agree(&sequence);
    }

    #[rstest]
    fn test_insert_at_length_delegates_to_append() {
        let mut sequence: DoublyLinkedSequence<i32> = (0..2).collect();
        sequence.insert(2, 2).unwrap();
        assert_eq!(backward(&sequence), vec![2, 1, 0]);
    }

    #[rstest]
    fn test_insert_in_middle_updates_both_neighbours() {
        let mut sequence: DoublyLinkedSequence<i32> = [0, 2].into_iter().collect();
        sequence.insert(1, 1).unwrap();
        assert_eq!(forward(&sequence), vec![0, 1, 2]);
        assert_links_agree(&sequence);
    }

    #[rstest]
    #[case(0, vec![1, 2, 3, 4])]
    #[case(2, vec![0, 1, 3, 4])]
    #[case(4, vec![0, 1, 2, 3])]
    fn test_remove_relinks_neighbours(#[case] index: isize, #[case] expected: Vec<i32>) {
        let mut sequence: DoublyLinkedSequence<i32> = (0..5).collect();
        sequence.remove(index).unwrap();
        assert_eq!(forward(&sequence), expected);
        assert_links_agree(&sequence);
    }

    #[rstest]
    fn test_remove_only_element_clears_head_and_tail() {
        let mut sequence = DoublyLinkedSequence::new();
        sequence.append(5);
        assert_eq!(sequence.remove(0), Ok(5));
        assert_eq!(sequence.head, None);
        assert_eq!(sequence.tail, None);
        assert_links_agree(&sequence);
    }

    #[rstest]
    fn test_released_slots_are_reused() {
        let mut sequence: DoublyLinkedSequence<i32> = (0..3).collect();
        sequence.remove(1).unwrap();
        sequence.append(3);
        assert_eq!(sequence.slots.len(), 3);
        assert_eq!(forward(&sequence), vec![0, 2, 3]);
        assert_links_agree(&sequence);
    }

    #[rstest]
    fn test_iter_mut_follows_list_order_not_slot_order() {
        let mut sequence: DoublyLinkedSequence<i32> = (0..3).collect();
        sequence.insert(0, 10).unwrap();
        let mut order = Vec::new();
        for element in sequence.iter_mut() {
            order.push(*element);
            *element += 1;
        }
        assert_eq!(order, vec![10, 0, 1, 2]);
        assert_eq!(forward(&sequence), vec![11, 1, 2, 3]);
    }

    #[rstest]
    fn test_iter_mut_skips_vacant_slots() {
        let mut sequence: DoublyLinkedSequence<i32> = (0..5).collect();
        sequence.remove(3).unwrap();
        sequence.remove(0).unwrap();
        assert_eq!(sequence.vacant.len(), 2);
        let mut iter = sequence.iter_mut();
        assert_eq!(iter.len(), 3);
        for element in &mut iter {
            *element *= 10;
        }
        assert_eq!(iter.try_next(), Err(SequenceError::EndOfSequence));
        drop(iter);
        assert_eq!(forward(&sequence), vec![10, 20, 40]);
    }
}
