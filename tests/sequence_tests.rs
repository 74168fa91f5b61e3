//! Contract tests run against every sequence strategy.
//!
//! Each test is parameterized over [`SequenceKind`] and drives the container
//! only through `Box<dyn Sequence<T>>`, the way a client does.

use massive_motion::sequence::{Sequence, SequenceError, SequenceKind};
use rstest::rstest;

fn filled(kind: SequenceKind, length: i32) -> Box<dyn Sequence<i32>> {
    let mut sequence = kind.build();
    for value in 0..length {
        assert!(sequence.append(value));
    }
    sequence
}

fn contents(sequence: &dyn Sequence<i32>) -> Vec<i32> {
    sequence.iter().copied().collect()
}

fn out_of_range(index: isize, length: usize) -> SequenceError {
    SequenceError::OutOfRange { index, length }
}

// =============================================================================
// Scenario
// =============================================================================

#[rstest]
#[case::array_list(SequenceKind::ArrayList)]
#[case::single(SequenceKind::Single)]
#[case::double(SequenceKind::Double)]
#[case::dummy_head(SequenceKind::DummyHead)]
fn test_append_insert_get_remove_scenario(#[case] kind: SequenceKind) {
    let mut sequence = kind.build();
    sequence.append('A');
    sequence.append('B');
    sequence.insert(1, 'C').unwrap();

    assert_eq!(sequence.get(0), Ok(&'A'));
    assert_eq!(sequence.get(1), Ok(&'C'));
    assert_eq!(sequence.get(2), Ok(&'B'));

    assert_eq!(sequence.remove(0), Ok('A'));
    assert_eq!(sequence.size(), 2);
    assert_eq!(sequence.get(0), Ok(&'C'));
}

// =============================================================================
// Round Trip
// =============================================================================

#[rstest]
#[case::array_list(SequenceKind::ArrayList)]
#[case::single(SequenceKind::Single)]
#[case::double(SequenceKind::Double)]
#[case::dummy_head(SequenceKind::DummyHead)]
fn test_get_returns_insertion_order(#[case] kind: SequenceKind) {
    let sequence = filled(kind, 25);
    for value in 0..25 {
        assert_eq!(sequence.get(value as isize), Ok(&value));
    }
}

#[rstest]
#[case::array_list(SequenceKind::ArrayList)]
#[case::single(SequenceKind::Single)]
#[case::double(SequenceKind::Double)]
#[case::dummy_head(SequenceKind::DummyHead)]
fn test_insert_then_remove_on_empty(#[case] kind: SequenceKind) {
    let mut sequence = kind.build();
    sequence.insert(0, "v").unwrap();
    assert_eq!(sequence.remove(0), Ok("v"));
    assert_eq!(sequence.size(), 0);
    assert!(sequence.is_empty());
}

#[rstest]
#[case::array_list(SequenceKind::ArrayList)]
#[case::single(SequenceKind::Single)]
#[case::double(SequenceKind::Double)]
#[case::dummy_head(SequenceKind::DummyHead)]
fn test_eleven_appends_cross_growth_boundary(#[case] kind: SequenceKind) {
    let sequence = filled(kind, 11);
    assert_eq!(contents(sequence.as_ref()), (0..11).collect::<Vec<_>>());
}

#[rstest]
#[case::array_list(SequenceKind::ArrayList)]
#[case::single(SequenceKind::Single)]
#[case::double(SequenceKind::Double)]
#[case::dummy_head(SequenceKind::DummyHead)]
fn test_insert_at_length_appends(#[case] kind: SequenceKind) {
    let mut sequence = filled(kind, 3);
    sequence.insert(3, 3).unwrap();
    assert_eq!(contents(sequence.as_ref()), vec![0, 1, 2, 3]);
}

#[rstest]
#[case::array_list(SequenceKind::ArrayList)]
#[case::single(SequenceKind::Single)]
#[case::double(SequenceKind::Double)]
#[case::dummy_head(SequenceKind::DummyHead)]
fn test_size_tracks_inserts_minus_removes(#[case] kind: SequenceKind) {
    let mut sequence = kind.build();
    for value in 0..20 {
        sequence.insert(value / 2, value as i32).unwrap();
    }
    for _ in 0..7 {
        sequence.remove(3).unwrap();
    }
    sequence.append(99);
    assert_eq!(sequence.size(), 20 - 7 + 1);
    assert_eq!(sequence.iter().count(), sequence.size());
}

// =============================================================================
// Out of Range
// =============================================================================

#[rstest]
#[case::array_list(SequenceKind::ArrayList)]
#[case::single(SequenceKind::Single)]
#[case::double(SequenceKind::Double)]
#[case::dummy_head(SequenceKind::DummyHead)]
fn test_get_and_remove_reject_out_of_range(#[case] kind: SequenceKind) {
    let mut sequence = filled(kind, 4);
    for index in [-1, 4, 5] {
        assert_eq!(sequence.get(index), Err(out_of_range(index, 4)));
        assert_eq!(sequence.get_mut(index).err(), Some(out_of_range(index, 4)));
        assert_eq!(sequence.remove(index), Err(out_of_range(index, 4)));
    }
    assert_eq!(contents(sequence.as_ref()), vec![0, 1, 2, 3]);
}

#[rstest]
#[case::array_list(SequenceKind::ArrayList)]
#[case::single(SequenceKind::Single)]
#[case::double(SequenceKind::Double)]
#[case::dummy_head(SequenceKind::DummyHead)]
fn test_insert_rejects_out_of_range_without_mutation(#[case] kind: SequenceKind) {
    let mut sequence = filled(kind, 4);
    for index in [-1, 5, 6] {
        assert_eq!(sequence.insert(index, 100), Err(out_of_range(index, 4)));
    }
    assert_eq!(sequence.size(), 4);
    assert_eq!(contents(sequence.as_ref()), vec![0, 1, 2, 3]);
}

#[rstest]
#[case::array_list(SequenceKind::ArrayList)]
#[case::single(SequenceKind::Single)]
#[case::double(SequenceKind::Double)]
#[case::dummy_head(SequenceKind::DummyHead)]
fn test_empty_sequence_rejects_access(#[case] kind: SequenceKind) {
    let mut sequence = filled(kind, 0);
    assert_eq!(sequence.get(0), Err(out_of_range(0, 0)));
    assert_eq!(sequence.remove(0), Err(out_of_range(0, 0)));
    assert_eq!(sequence.insert(1, 0), Err(out_of_range(1, 0)));
}

// =============================================================================
// Iteration
// =============================================================================

#[rstest]
fn test_iterator_exhaustion(
    #[values(
        SequenceKind::ArrayList,
        SequenceKind::Single,
        SequenceKind::Double,
        SequenceKind::DummyHead
    )]
    kind: SequenceKind,
    #[values(0, 1, 5)] length: i32,
) {
    let sequence = filled(kind, length);
    let mut iter = sequence.iter();
    for expected in 0..length {
        assert_eq!(iter.try_next(), Ok(&expected));
    }
    assert_eq!(iter.try_next(), Err(SequenceError::EndOfSequence));
    assert_eq!(iter.next(), None);
}

#[rstest]
#[case::array_list(SequenceKind::ArrayList)]
#[case::single(SequenceKind::Single)]
#[case::double(SequenceKind::Double)]
#[case::dummy_head(SequenceKind::DummyHead)]
fn test_iteration_is_restartable(#[case] kind: SequenceKind) {
    let sequence = filled(kind, 3);
    assert_eq!(sequence.iter().count(), 3);
    assert_eq!(sequence.iter().count(), 3);
    assert_eq!(sequence.iter().len(), 3);
}

#[rstest]
#[case::array_list(SequenceKind::ArrayList)]
#[case::single(SequenceKind::Single)]
#[case::double(SequenceKind::Double)]
#[case::dummy_head(SequenceKind::DummyHead)]
fn test_iter_mut_observes_live_storage(#[case] kind: SequenceKind) {
    let mut sequence = filled(kind, 4);
    sequence.remove(1).unwrap();
    sequence.insert(0, 10).unwrap();
    for value in sequence.iter_mut() {
        *value += 1;
    }
    assert_eq!(contents(sequence.as_ref()), vec![11, 1, 3, 4]);
}

// =============================================================================
// Pruning Pattern
// =============================================================================

#[rstest]
#[case::array_list(SequenceKind::ArrayList)]
#[case::single(SequenceKind::Single)]
#[case::double(SequenceKind::Double)]
#[case::dummy_head(SequenceKind::DummyHead)]
fn test_backward_scan_removal_keeps_front(#[case] kind: SequenceKind) {
    let mut sequence = filled(kind, 10);
    for index in (1..sequence.size() as isize).rev() {
        if *sequence.get(index).unwrap() % 3 == 0 {
            sequence.remove(index).unwrap();
        }
    }
    assert_eq!(contents(sequence.as_ref()), vec![0, 1, 2, 4, 5, 7, 8]);
}
