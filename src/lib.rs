//! Order statistics in worst-case linear time.
//!
//! Ranks are 1-based: rank 1 is the minimum, rank `len` the maximum. Every
//! entry point reorders the slice it is given and rejects out-of-range
//! ranks with a [`SelectError`] before touching it.
//!
//! ```
//! let mut data = [12, 3, 5, 7, 4, 19, 26];
//! assert_eq!(momselect::kth_smallest(&mut data, 3), Ok(5));
//! ```
pub mod error;
pub mod group;
pub mod partition;
pub mod select;

use std::cmp::Ordering;

pub use error::{Result, SelectError};
pub use select::{PivotStrategy, SelectConfig, Selection, Selector};

/// Returns the element of rank `k` using median-of-medians pivots.
pub fn kth_smallest<T: Ord + Copy>(data: &mut [T], k: usize) -> Result<T> {
    kth_smallest_by(data, k, T::cmp)
}

/// Like [`kth_smallest`], ordering elements with `cmp`.
pub fn kth_smallest_by<T, F>(data: &mut [T], k: usize, cmp: F) -> Result<T>
where
    T: Copy,
    F: FnMut(&T, &T) -> Ordering,
{
    Selector::default()
        .select_by(data, k, cmp)
        .map(|sel| sel.value)
}

/// Returns the element of rank `k` counted from the largest, i.e. rank
/// `len + 1 - k` from the smallest.
pub fn kth_largest<T: Ord + Copy>(data: &mut [T], k: usize) -> Result<T> {
    error::check_rank(k, data.len())?;
    kth_smallest(data, data.len() + 1 - k)
}

/// Sorts `data` and indexes it. O(N log N); kept as the reference the
/// linear-time selectors are measured against.
pub fn sort_select<T: Ord + Copy>(data: &mut [T], k: usize) -> Result<T> {
    error::check_rank(k, data.len())?;
    data.sort_unstable();
    Ok(data[k - 1])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seven_elements() {
        let mut data = vec![12, 3, 5, 7, 4, 19, 26];
        assert_eq!(kth_smallest(&mut data, 3), Ok(5));
    }

    #[test]
    fn sixteen_elements() {
        let mut data = vec![17, 13, 14, 4, 8, 18, 22, 52, 40, 24, 48, 28, 47, 21, 42, 37];
        assert_eq!(kth_smallest(&mut data, 8), Ok(22));
    }

    #[test]
    fn single_element() {
        let mut data = vec![5];
        assert_eq!(kth_smallest(&mut data, 1), Ok(5));
        assert_eq!(
            kth_smallest(&mut data, 2),
            Err(SelectError::InvalidRank { rank: 2, len: 1 })
        );
    }

    #[test]
    fn extremes() {
        let original = vec![9, -3, 27, 0, 14, -3, 8, 100, 41, 2, 2];
        let mut data = original.clone();
        assert_eq!(kth_smallest(&mut data, 1), Ok(-3));
        assert_eq!(kth_smallest(&mut data, original.len()), Ok(100));
        assert_eq!(kth_largest(&mut data, 1), Ok(100));
        assert_eq!(kth_largest(&mut data, original.len()), Ok(-3));
        assert_eq!(kth_largest(&mut data, 3), Ok(27));
    }

    #[test]
    fn largest_rejects_out_of_range() {
        let mut data = vec![1, 2, 3];
        assert_eq!(
            kth_largest(&mut data, 0),
            Err(SelectError::InvalidRank { rank: 0, len: 3 })
        );
        assert_eq!(
            kth_largest(&mut data, 5),
            Err(SelectError::InvalidRank { rank: 5, len: 3 })
        );
        assert_eq!(kth_largest::<u8>(&mut [], 1), Err(SelectError::EmptySequence));
    }

    #[test]
    fn sort_select_agrees() {
        let original = vec![17, 13, 14, 4, 8, 18, 22, 52, 40, 24, 48, 28, 47, 21, 42, 37];
        for k in 1..=original.len() {
            let mut a = original.clone();
            let mut b = original.clone();
            assert_eq!(sort_select(&mut a, k), kth_smallest(&mut b, k));
        }
        assert_eq!(
            sort_select(&mut [1, 2], 3),
            Err(SelectError::InvalidRank { rank: 3, len: 2 })
        );
    }

    #[test]
    fn by_comparator() {
        let mut words = vec!["pear", "fig", "banana", "kiwi", "apple"];
        let shortest = kth_smallest_by(&mut words, 1, |a, b| a.len().cmp(&b.len()));
        assert_eq!(shortest, Ok("fig"));
    }
}
