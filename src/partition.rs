//! Lomuto partitioning over an inclusive range `[left, right]`.
//!
//! Every routine takes the comparator by `&mut` so a single counting closure
//! can be threaded through a whole selection.
use std::cmp::Ordering;

/// Lomuto partition scheme as used in quicksort.
///
/// Moves `data[pivot]` to its final place inside `[left, right]` and returns
/// that index. Elements left of it compare `<=` the pivot, elements right of
/// it compare `>`.
pub fn partition_at<T, F>(
    data: &mut [T],
    left: usize,
    right: usize,
    pivot: usize,
    cmp: &mut F,
) -> usize
where
    F: FnMut(&T, &T) -> Ordering,
{
    if data.is_empty() || left >= right {
        return left;
    }
    debug_assert!((left..=right).contains(&pivot));

    // Move pivot to the end.
    data.swap(pivot, right);
    let mut store = left;

    for i in left..right {
        if cmp(&data[i], &data[right]) != Ordering::Greater {
            data.swap(store, i);
            store += 1;
        }
    }

    // Move pivot to its final place.
    data.swap(right, store);

    store
}

/// Partitions `[left, right]` around the first occurrence of `value`.
///
/// `value` must occur inside the range. Debug builds assert this; release
/// builds partition around `data[right]` instead.
pub fn partition_by_value<T, F>(
    data: &mut [T],
    left: usize,
    right: usize,
    value: T,
    cmp: &mut F,
) -> usize
where
    T: Copy,
    F: FnMut(&T, &T) -> Ordering,
{
    let found = (left..=right).find(|&i| cmp(&data[i], &value) == Ordering::Equal);
    debug_assert!(found.is_some(), "pivot value not present in range");
    partition_at(data, left, right, found.unwrap_or(right), cmp)
}

/// Packs the elements of `[left, pivot_pos)` that equal the pivot into one
/// run ending right before `pivot_pos`, and returns where the run starts.
///
/// Must be called right after a partition pass, while everything left of the
/// pivot is `<=` it. The run `[start, pivot_pos]` holds only pivot-equal
/// elements afterwards.
pub fn gather_equal<T, F>(data: &mut [T], left: usize, pivot_pos: usize, cmp: &mut F) -> usize
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut start = pivot_pos;
    for i in (left..pivot_pos).rev() {
        if cmp(&data[i], &data[pivot_pos]) == Ordering::Equal {
            start -= 1;
            data.swap(i, start);
        }
    }
    start
}
