//! Median-of-medians pivot selection.
//!
//! The range is cut into consecutive groups of [`GROUP_SIZE`] elements, each
//! group is sorted in place and its median collected. The median of those
//! medians is then taken by sorting the collected set. At least ~30% of the
//! range compares `<=` the returned value and at least ~30% compares `>=` it,
//! which is what keeps the selection loop linear in the worst case.
use std::cmp::Ordering;

/// Elements per group. The last group of a range may be shorter.
pub const GROUP_SIZE: usize = 5;

/// Returns the median of the group medians of `data[left..=right]`.
///
/// Groups are sorted in place, so the range is reordered but keeps the same
/// elements. The returned value always occurs in the range. For ranges of
/// even length the upper median is taken, for groups and for the medians
/// alike.
pub fn median_of_medians<T, F>(data: &mut [T], left: usize, right: usize, cmp: &mut F) -> T
where
    T: Copy,
    F: FnMut(&T, &T) -> Ordering,
{
    debug_assert!(left <= right && right < data.len());
    let range = &mut data[left..=right];

    if range.len() <= GROUP_SIZE {
        range.sort_unstable_by(|a, b| cmp(a, b));
        return range[range.len() / 2];
    }

    let mut medians = Vec::with_capacity(range.len().div_ceil(GROUP_SIZE));
    for group in range.chunks_mut(GROUP_SIZE) {
        group.sort_unstable_by(|a, b| cmp(a, b));
        medians.push(group[group.len() / 2]);
    }

    medians.sort_unstable_by(|a, b| cmp(a, b));
    medians[medians.len() / 2]
}
