//! Substring search over token sequences.
//!
//! Works on any element type with equality, so the same functions serve
//! [`Codepoint`](crate::primitives::Codepoint) sequences, [`SegmentId`](crate::primitives::SegmentId)
//! sequences and raw identifiers.

/// Checks whether both sequences hold equal tokens at every position.
pub fn equal<T: PartialEq>(a: &[T], b: &[T]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).all(|(x, y)| x == y)
}

/// Returns the position of the first occurrence of `needle` in `haystack` at or
/// after `from`, or `None`.
///
/// Follows [`forward_index`](crate::search::forward_index): a negative `from`
/// searches from the start and a `from` past the last position finds nothing.
///
/// ```rust
/// use diff_primitives::sequence::index_of;
///
/// assert_eq!(index_of(&[1, 2, 3, 4], &[3, 4], 0), Some(2));
/// assert_eq!(index_of(&[1, 2], &[1, 2, 3], 0), None);
/// ```
pub fn index_of<T: PartialEq>(haystack: &[T], needle: &[T], from: isize) -> Option<usize> {
    let start = from.max(0) as usize;
    if start >= haystack.len() {
        return None;
    }
    let last = haystack.len().checked_sub(needle.len())?;
    (start..=last).find(|&i| equal(&haystack[i..i + needle.len()], needle))
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::primitives::{Codepoint, SegmentId};

    const A: SegmentId = SegmentId::new(10);
    const B: SegmentId = SegmentId::new(11);
    const C: SegmentId = SegmentId::new(12);
    const D: SegmentId = SegmentId::new(13);

    #[test]
    fn equality() {
        assert!(equal(&[A, B, C], &[A, B, C]));
        assert!(equal::<SegmentId>(&[], &[]));
        assert!(!equal(&[A, B, C], &[A, B, D]));
        assert!(!equal(&[A, B], &[A, B, C]));
    }

    #[test]
    fn finds_first_window() {
        assert_eq!(index_of(&[A, B, C, D], &[C, D], 0), Some(2));
        assert_eq!(index_of(&[A, B, A, B], &[A, B], 0), Some(0));
        assert_eq!(index_of(&[A, B, A, B], &[A, B], 1), Some(2));
        assert_eq!(index_of(&[A, B, A, B], &[A, B], -3), Some(0));
        assert_eq!(index_of(&[A, B, C, D], &[D, C], 0), None);
    }

    #[test]
    fn needle_longer_than_haystack() {
        assert_eq!(index_of(&[A, B], &[A, B, C], 0), None);
        assert_eq!(index_of(&[A, B, C], &[B, C], 2), None);
    }

    #[test]
    fn start_out_of_range() {
        assert_eq!(index_of(&[A, B], &[B], 1), Some(1));
        assert_eq!(index_of(&[A, B], &[B], 2), None);
        assert_eq!(index_of::<SegmentId>(&[], &[], 0), None);
        assert_eq!(index_of::<SegmentId>(&[], &[], -1), None);
        assert_eq!(index_of(&[], &[A], -1), None);
    }

    #[test]
    fn empty_needle_matches_at_start() {
        assert_eq!(index_of(&[A, B], &[], 0), Some(0));
        assert_eq!(index_of(&[A, B], &[], 1), Some(1));
    }

    #[test]
    fn codepoint_sequences() {
        let haystack: Vec<Codepoint> = "héllo".chars().map(Codepoint::from).collect();
        let needle: Vec<Codepoint> = "llo".chars().map(Codepoint::from).collect();
        assert_eq!(index_of(&haystack, &needle, 0), Some(2));
    }

    proptest! {
        #[test]
        fn non_positive_start_is_full_search(
            haystack in prop::collection::vec(0u32..3, 0..8),
            needle in prop::collection::vec(0u32..3, 0..3),
            from in -10isize..=0,
        ) {
            prop_assert_eq!(
                index_of(&haystack, &needle, from),
                index_of(&haystack, &needle, 0)
            );
        }

        #[test]
        fn no_match_when_needle_does_not_fit(
            haystack in prop::collection::vec(0u32..4, 0..10),
            needle in prop::collection::vec(0u32..4, 0..10),
            from in 0isize..12,
        ) {
            if needle.len() as isize > haystack.len() as isize - from {
                prop_assert_eq!(index_of(&haystack, &needle, from), None);
            }
        }

        #[test]
        fn match_is_a_real_window(
            haystack in prop::collection::vec(0u32..3, 0..12),
            needle in prop::collection::vec(0u32..3, 1..4),
            from in -2isize..12,
        ) {
            if let Some(i) = index_of(&haystack, &needle, from) {
                prop_assert!(i as isize >= from);
                prop_assert_eq!(&haystack[i..i + needle.len()], needle.as_slice());
            }
        }
    }
}
