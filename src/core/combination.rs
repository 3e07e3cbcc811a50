//! Lexicographic k-subset enumeration
//!
//! Uses the classical successor rule on an index vector: find the rightmost
//! index that has not reached its last reachable position (`i + n - k`),
//! increment it and reset everything to its right to consecutive values.
//! Each enumerator owns its cursor, so independent callers never share state.

use super::NumberSet;
use std::iter::FusedIterator;

/// Binomial coefficient C(n, k)
///
/// # Examples
/// ```
/// use lotofacil_closure::core::binomial;
///
/// assert_eq!(binomial(21, 15), 54_264);
/// assert_eq!(binomial(5, 3), 10);
/// assert_eq!(binomial(3, 5), 0);
/// ```
#[must_use]
pub const fn binomial(n: usize, k: usize) -> u64 {
    if k > n {
        return 0;
    }
    let k = if k > n - k { n - k } else { k };
    let mut result = 1u64;
    let mut i = 0;
    while i < k {
        // Exact at every step: result * (n - i) is divisible by (i + 1)
        result = result * (n - i) as u64 / (i + 1) as u64;
        i += 1;
    }
    result
}

/// Lazy enumerator of the k-element index subsets of `0..n`
///
/// Yields exactly C(n, k) index vectors in lexicographic order.
#[derive(Debug, Clone)]
pub struct Combinations {
    n: usize,
    k: usize,
    indices: Vec<usize>,
    started: bool,
    finished: bool,
}

impl Combinations {
    /// Start a fresh enumeration of the k-subsets of `0..n`
    ///
    /// Yields nothing when `k > n`, and a single empty subset when `k == 0`.
    #[must_use]
    pub fn new(n: usize, k: usize) -> Self {
        Self {
            n,
            k,
            indices: (0..k).collect(),
            started: false,
            finished: k > n,
        }
    }

    /// Advance and borrow the next index subset without allocating
    pub fn next_indices(&mut self) -> Option<&[usize]> {
        if self.finished {
            return None;
        }

        if self.started {
            if !self.advance() {
                self.finished = true;
                return None;
            }
        } else {
            self.started = true;
        }

        Some(&self.indices)
    }

    /// Step `indices` to its lexicographic successor
    ///
    /// Returns false when the current subset is the last one.
    fn advance(&mut self) -> bool {
        let (n, k) = (self.n, self.k);

        let Some(pivot) = (0..k).rev().find(|&i| self.indices[i] != i + n - k) else {
            return false;
        };

        self.indices[pivot] += 1;
        for j in pivot + 1..k {
            self.indices[j] = self.indices[pivot] + j - pivot;
        }
        true
    }
}

impl Iterator for Combinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_indices().map(<[usize]>::to_vec)
    }
}

impl FusedIterator for Combinations {}

/// Enumerate the k-subsets of `0..n`
///
/// Each call returns an independent enumerator starting from `[0, 1, .., k-1]`.
#[must_use]
pub fn combinations(n: usize, k: usize) -> Combinations {
    Combinations::new(n, k)
}

/// Lazy enumerator of the k-subsets of a list of numbers, as bitmasks
///
/// Built on [`Combinations`]; no subset is ever materialized as a list.
#[derive(Debug, Clone)]
pub struct SubsetMasks<'a> {
    numbers: &'a [u8],
    inner: Combinations,
}

impl Iterator for SubsetMasks<'_> {
    type Item = NumberSet;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let numbers = self.numbers;
        self.inner.next_indices().map(|indices| {
            indices
                .iter()
                .fold(NumberSet::EMPTY, |mask, &i| mask.with(numbers[i]))
        })
    }
}

impl FusedIterator for SubsetMasks<'_> {}

/// Enumerate every k-subset of `numbers` as a [`NumberSet`]
///
/// `numbers` must hold distinct values in 1..=25.
///
/// # Examples
/// ```
/// use lotofacil_closure::core::subset_masks;
///
/// let masks: Vec<String> = subset_masks(&[1, 2, 3], 2).map(|m| m.to_string()).collect();
/// assert_eq!(masks, vec!["01 02", "01 03", "02 03"]);
/// ```
#[must_use]
pub fn subset_masks(numbers: &[u8], k: usize) -> SubsetMasks<'_> {
    SubsetMasks {
        numbers,
        inner: Combinations::new(numbers.len(), k),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashSet;

    #[test]
    fn five_choose_three_matches_reference() {
        let reference: Vec<Vec<usize>> = vec![
            vec![0, 1, 2],
            vec![0, 1, 3],
            vec![0, 1, 4],
            vec![0, 2, 3],
            vec![0, 2, 4],
            vec![0, 3, 4],
            vec![1, 2, 3],
            vec![1, 2, 4],
            vec![1, 3, 4],
            vec![2, 3, 4],
        ];

        let produced: Vec<Vec<usize>> = combinations(5, 3).collect();
        assert_eq!(produced, reference);
    }

    #[test]
    fn twenty_one_choose_fifteen_is_exhaustive_and_distinct() {
        let pool: Vec<u8> = (3..=23).collect();
        let pool_mask = NumberSet::from_numbers(&pool).unwrap();

        let mut seen = FxHashSet::default();
        for mask in subset_masks(&pool, 15) {
            assert_eq!(mask.len(), 15);
            assert!(mask.is_subset_of(pool_mask));
            assert!(seen.insert(mask), "duplicate combination {mask}");
        }

        assert_eq!(seen.len(), 54_264);
        assert_eq!(seen.len() as u64, binomial(21, 15));
    }

    #[test]
    fn output_is_lexicographic() {
        let all: Vec<Vec<usize>> = combinations(8, 4).collect();
        assert_eq!(all.len() as u64, binomial(8, 4));
        assert!(all.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn enumerations_are_independent() {
        let mut first = combinations(6, 2);
        first.next();
        first.next();

        // A new enumerator starts over regardless of the other's progress
        let second: Vec<Vec<usize>> = combinations(6, 2).collect();
        assert_eq!(second.len(), 15);
        assert_eq!(second[0], vec![0, 1]);
        assert_eq!(first.count(), 13);
    }

    #[test]
    fn edge_sizes() {
        assert_eq!(combinations(4, 0).collect::<Vec<_>>(), vec![Vec::<usize>::new()]);
        assert_eq!(combinations(4, 4).collect::<Vec<_>>(), vec![vec![0, 1, 2, 3]]);
        assert_eq!(combinations(3, 5).count(), 0);
        assert_eq!(combinations(0, 0).count(), 1);
    }

    #[test]
    fn fused_after_exhaustion() {
        let mut it = combinations(3, 3);
        assert!(it.next().is_some());
        assert!(it.next().is_none());
        assert!(it.next().is_none());
    }

    #[test]
    fn binomial_matches_enumeration_counts() {
        for n in 0..=10 {
            for k in 0..=n {
                assert_eq!(combinations(n, k).count() as u64, binomial(n, k), "C({n},{k})");
            }
        }
        assert_eq!(binomial(25, 15), 3_268_760);
    }
}
