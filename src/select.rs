//! Selection is the problem of finding the k-th smallest element of an unordered list.
//!
//! The [`Selector`] partitions the list around a pivot and keeps only the side that holds rank
//! `k`, narrowing `[left, right]` until the pivot lands on the requested rank. How the pivot is
//! picked decides the running time: median-of-medians guarantees O(N) in the worst case, the
//! fixed and middle pivots are O(N) on average but O(N²) on adversarial input, and a random pivot
//! gives expected O(N) whatever the input.
use std::cmp::Ordering;

use log::{debug, trace};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

use crate::error::{Result, check_rank};
use crate::group::median_of_medians;
use crate::partition::{gather_equal, partition_at, partition_by_value};

/// How each round picks its pivot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PivotStrategy {
    /// Median of the medians of 5-element groups. Worst-case linear.
    #[default]
    MedianOfMedians,
    /// The last element of the current range.
    Last,
    /// The middle element of the current range.
    Middle,
    /// A uniformly random element of the current range, drawn from a ChaCha8
    /// stream seeded with `seed`.
    Random { seed: u64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectConfig {
    pub strategy: PivotStrategy,
}

impl SelectConfig {
    pub fn new(strategy: PivotStrategy) -> Self {
        Self { strategy }
    }

    pub fn with_strategy(mut self, strategy: PivotStrategy) -> Self {
        self.strategy = strategy;
        self
    }
}

/// Outcome of a successful selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection<T> {
    /// The element of the requested rank.
    pub value: T,
    /// Where `value` sits in the sequence after the call. Everything before
    /// it compares `<=` and everything after it compares `>=`.
    pub index: usize,
    /// Partition rounds performed.
    pub rounds: usize,
    /// Comparator invocations, pivot selection included.
    pub comparisons: u64,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Selector {
    config: SelectConfig,
}

impl Selector {
    pub fn new(config: SelectConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SelectConfig {
        &self.config
    }

    /// Returns the element of 1-based rank `k` in natural order.
    ///
    /// `data` is reordered in place; copy it first if the original order
    /// matters.
    pub fn select<T: Ord + Copy>(&self, data: &mut [T], k: usize) -> Result<Selection<T>> {
        self.select_by(data, k, T::cmp)
    }

    /// Returns the element of 1-based rank `k` in the order given by `cmp`.
    ///
    /// Fails without touching `data` when `k` is outside `[1, data.len()]`.
    pub fn select_by<T, F>(&self, data: &mut [T], k: usize, mut cmp: F) -> Result<Selection<T>>
    where
        T: Copy,
        F: FnMut(&T, &T) -> Ordering,
    {
        check_rank(k, data.len())?;
        debug!(
            "selecting rank {k} of {} with {:?}",
            data.len(),
            self.config.strategy
        );

        let mut comparisons = 0u64;
        let mut counted = |a: &T, b: &T| {
            comparisons += 1;
            cmp(a, b)
        };
        let mut rng = None;

        let mut left = 0;
        let mut right = data.len() - 1;
        let mut k = k;
        let mut rounds = 0;

        let index = loop {
            if left == right {
                break left;
            }
            rounds += 1;

            let pivot_pos = match self.config.strategy {
                PivotStrategy::MedianOfMedians => {
                    let pivot = median_of_medians(data, left, right, &mut counted);
                    partition_by_value(data, left, right, pivot, &mut counted)
                }
                PivotStrategy::Last => partition_at(data, left, right, right, &mut counted),
                PivotStrategy::Middle => {
                    let pivot = left + (right - left) / 2;
                    partition_at(data, left, right, pivot, &mut counted)
                }
                PivotStrategy::Random { seed } => {
                    let pivot = rng
                        .get_or_insert_with(|| ChaCha8Rng::seed_from_u64(seed))
                        .random_range(left..=right);
                    partition_at(data, left, right, pivot, &mut counted)
                }
            };

            // [run, pivot_pos] holds the pivot and every element equal to it.
            let run = gather_equal(data, left, pivot_pos, &mut counted);
            let first_rank = run - left + 1;
            let pivot_rank = pivot_pos - left + 1;
            trace!("round {rounds}: [{left}, {right}] k={k} pivot ranks {first_rank}..={pivot_rank}");

            if k < first_rank {
                right = run - 1;
            } else if k > pivot_rank {
                k -= pivot_rank;
                left = pivot_pos + 1;
            } else {
                break left + k - 1;
            }
        };

        Ok(Selection {
            value: data[index],
            index,
            rounds,
            comparisons,
        })
    }
}
