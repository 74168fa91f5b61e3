//! Runtime selection of a sequence strategy.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use super::{
    ArraySequence, DoublyLinkedSequence, DummyHeadLinkedSequence, Sequence, SinglyLinkedSequence,
};

/// The storage strategy behind a `Box<dyn Sequence<T>>`.
///
/// Parsed from the configuration strings `"arraylist"`, `"single"`,
/// `"double"` and `"dummyhead"` (case-insensitive). [`ArrayList`](Self::ArrayList)
/// is the default.
///
/// # Examples
///
/// ```rust
/// use massive_motion::sequence::{Sequence, SequenceKind};
///
/// let kind: SequenceKind = "Double".parse().unwrap();
/// assert_eq!(kind, SequenceKind::Double);
///
/// let mut sequence = kind.build::<u8>();
/// assert!(sequence.append(1));
/// assert_eq!(sequence.size(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SequenceKind {
    /// [`ArraySequence`].
    #[default]
    ArrayList,
    /// [`SinglyLinkedSequence`].
    Single,
    /// [`DoublyLinkedSequence`].
    Double,
    /// [`DummyHeadLinkedSequence`].
    DummyHead,
}

impl SequenceKind {
    /// Every kind, in declaration order.
    pub const ALL: [Self; 4] = [Self::ArrayList, Self::Single, Self::Double, Self::DummyHead];

    /// Returns the configuration string naming this kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ArrayList => "arraylist",
            Self::Single => "single",
            Self::Double => "double",
            Self::DummyHead => "dummyhead",
        }
    }

    /// Resolves a configuration value, falling back to
    /// [`ArrayList`](Self::ArrayList) when the value names no known kind.
    #[must_use]
    pub fn from_config(value: &str) -> Self {
        value.parse().unwrap_or_else(|error: UnknownSequenceKind| {
            tracing::warn!(%error, fallback = Self::ArrayList.as_str(), "unknown list kind");
            Self::ArrayList
        })
    }

    /// Constructs an empty sequence of this kind.
    #[must_use]
    pub fn build<T: 'static>(self) -> Box<dyn Sequence<T>> {
        match self {
            Self::ArrayList => Box::new(ArraySequence::new()),
            Self::Single => Box::new(SinglyLinkedSequence::new()),
            Self::Double => Box::new(DoublyLinkedSequence::new()),
            Self::DummyHead => Box::new(DummyHeadLinkedSequence::new()),
        }
    }
}

impl fmt::Display for SequenceKind {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl FromStr for SequenceKind {
    type Err = UnknownSequenceKind;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == normalized)
            .ok_or_else(|| UnknownSequenceKind(value.to_string()))
    }
}

/// A configuration string that names no [`SequenceKind`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown sequence kind '{0}' (expected arraylist, single, double or dummyhead)")]
pub struct UnknownSequenceKind(pub String);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("arraylist", SequenceKind::ArrayList)]
    #[case("single", SequenceKind::Single)]
    #[case("double", SequenceKind::Double)]
    #[case("dummyhead", SequenceKind::DummyHead)]
    #[case("  DummyHead ", SequenceKind::DummyHead)]
    #[case("SINGLE", SequenceKind::Single)]
    fn test_parse_known_kinds(#[case] value: &str, #[case] expected: SequenceKind) {
        assert_eq!(value.parse::<SequenceKind>(), Ok(expected));
    }

    #[rstest]
    fn test_parse_unknown_kind() {
        let error = "skiplist".parse::<SequenceKind>().unwrap_err();
        assert_eq!(error, UnknownSequenceKind("skiplist".to_string()));
        assert_eq!(
            error.to_string(),
            "unknown sequence kind 'skiplist' (expected arraylist, single, double or dummyhead)"
        );
    }

    #[rstest]
    fn test_from_config_falls_back_to_array_list() {
        assert_eq!(SequenceKind::from_config("ring"), SequenceKind::ArrayList);
        assert_eq!(SequenceKind::from_config("double"), SequenceKind::Double);
    }

    #[rstest]
    fn test_default_is_array_list() {
        assert_eq!(SequenceKind::default(), SequenceKind::ArrayList);
    }

    #[rstest]
    fn test_display_round_trips_through_parse() {
        for kind in SequenceKind::ALL {
            assert_eq!(kind.to_string().parse::<SequenceKind>(), Ok(kind));
        }
    }

    #[rstest]
    fn test_build_produces_empty_sequences() {
        for kind in SequenceKind::ALL {
            let sequence = kind.build::<String>();
            assert_eq!(sequence.size(), 0, "{kind}");
        }
    }
}
