//! Bitmask encoding of ticket numbers
//!
//! A set of numbers from 1..=25 is stored in a single `u32`: bit `n - 1` is set
//! iff number `n` is a member. Intersections are a single AND and hit counts a
//! single popcount, which is what makes the exhaustive proof affordable.

use super::constants::MAX_NUMBER;
use super::error::InputError;
use std::fmt;

/// Bits that can be set in a valid encoding (numbers 1..=25)
const VALID_BITS: u32 = (1 << MAX_NUMBER) - 1;

/// A subset of {1..25} packed into a `u32`
///
/// Encoding is a bijection between subsets of {1..25} and values in `[0, 2^25)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct NumberSet(u32);

impl NumberSet {
    /// The empty set
    pub const EMPTY: Self = Self(0);

    /// Wrap raw bits
    ///
    /// # Panics
    /// Panics in debug mode if a bit above position 24 is set
    #[inline]
    #[must_use]
    pub const fn from_bits(bits: u32) -> Self {
        debug_assert!(bits & !VALID_BITS == 0, "NumberSet bits must be < 2^25");
        Self(bits)
    }

    /// Encode a list of numbers
    ///
    /// # Errors
    /// Returns `InputError::OutOfRange` for a value outside 1..=25 and
    /// `InputError::Duplicate` if a number is given twice.
    ///
    /// # Examples
    /// ```
    /// use lotofacil_closure::core::NumberSet;
    ///
    /// let set = NumberSet::from_numbers(&[3, 1, 25]).unwrap();
    /// assert_eq!(set.bits(), 0b1_0000_0000_0000_0000_0000_0101);
    /// assert_eq!(set.numbers(), vec![1, 3, 25]);
    ///
    /// assert!(NumberSet::from_numbers(&[0]).is_err());
    /// assert!(NumberSet::from_numbers(&[7, 7]).is_err());
    /// ```
    pub fn from_numbers(numbers: &[u8]) -> Result<Self, InputError> {
        let mut bits = 0u32;
        for &n in numbers {
            if n == 0 || n > MAX_NUMBER {
                return Err(InputError::OutOfRange(i64::from(n)));
            }
            let bit = 1u32 << (n - 1);
            if bits & bit != 0 {
                return Err(InputError::Duplicate(n));
            }
            bits |= bit;
        }
        Ok(Self(bits))
    }

    /// Get the raw bitmask
    #[inline]
    #[must_use]
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Number of members (popcount), in 0..=25
    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Count numbers common to both sets
    ///
    /// This is the "points" of a game against a draw.
    ///
    /// # Examples
    /// ```
    /// use lotofacil_closure::core::NumberSet;
    ///
    /// let game = NumberSet::from_numbers(&[1, 2, 3, 4]).unwrap();
    /// let draw = NumberSet::from_numbers(&[3, 4, 5]).unwrap();
    /// assert_eq!(game.hits(draw), 2);
    /// ```
    #[inline]
    #[must_use]
    pub const fn hits(self, other: Self) -> u8 {
        (self.0 & other.0).count_ones() as u8
    }

    /// Check whether `number` is a member
    ///
    /// Numbers outside 1..=25 are never members.
    #[inline]
    #[must_use]
    pub const fn contains(self, number: u8) -> bool {
        number >= 1 && number <= MAX_NUMBER && self.0 & (1 << (number - 1)) != 0
    }

    /// Return a copy with `number` added
    ///
    /// # Panics
    /// Panics in debug mode if `number` is outside 1..=25
    #[inline]
    #[must_use]
    pub const fn with(self, number: u8) -> Self {
        debug_assert!(number >= 1 && number <= MAX_NUMBER);
        Self(self.0 | (1 << (number - 1)))
    }

    #[inline]
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    #[inline]
    #[must_use]
    pub const fn intersection(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    /// Members of `self` not in `other`
    #[inline]
    #[must_use]
    pub const fn difference(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    #[inline]
    #[must_use]
    pub const fn is_subset_of(self, other: Self) -> bool {
        self.0 & !other.0 == 0
    }

    /// Iterate members in ascending order
    pub fn iter(self) -> impl Iterator<Item = u8> {
        let mut remaining = self.0;
        std::iter::from_fn(move || {
            if remaining == 0 {
                return None;
            }
            let position = remaining.trailing_zeros();
            remaining &= remaining - 1;
            Some(position as u8 + 1)
        })
    }

    /// Decode into an ascending list of numbers
    #[must_use]
    pub fn numbers(self) -> Vec<u8> {
        self.iter().collect()
    }
}

impl fmt::Display for NumberSet {
    /// Two-digit numbers separated by single spaces, e.g. `01 05 23`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, n) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{n:02}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_sets_expected_bits() {
        assert_eq!(NumberSet::from_numbers(&[1]).unwrap().bits(), 1);
        assert_eq!(NumberSet::from_numbers(&[25]).unwrap().bits(), 1 << 24);
        assert_eq!(NumberSet::from_numbers(&[]).unwrap(), NumberSet::EMPTY);
    }

    #[test]
    fn encode_rejects_out_of_range() {
        assert_eq!(
            NumberSet::from_numbers(&[1, 0]),
            Err(InputError::OutOfRange(0))
        );
        assert_eq!(
            NumberSet::from_numbers(&[26]),
            Err(InputError::OutOfRange(26))
        );
    }

    #[test]
    fn encode_rejects_duplicates() {
        assert_eq!(
            NumberSet::from_numbers(&[4, 9, 4]),
            Err(InputError::Duplicate(4))
        );
    }

    #[test]
    fn decode_is_sorted_inverse_of_encode() {
        let input = [25, 3, 17, 1, 9, 12];
        let set = NumberSet::from_numbers(&input).unwrap();

        let mut sorted = input.to_vec();
        sorted.sort_unstable();
        assert_eq!(set.numbers(), sorted);
        assert_eq!(set.len(), input.len());
    }

    #[test]
    fn every_mask_roundtrips_through_decode() {
        // Sample the 2^25 space with a stride that still touches high and low bits
        for bits in (0..(1u32 << 25)).step_by(9_973) {
            let set = NumberSet::from_bits(bits);
            let decoded = set.numbers();
            assert_eq!(decoded.len(), set.len());
            assert_eq!(NumberSet::from_numbers(&decoded).unwrap(), set);
        }
    }

    #[test]
    fn full_ticket_has_25_members() {
        let all: Vec<u8> = (1..=25).collect();
        let set = NumberSet::from_numbers(&all).unwrap();
        assert_eq!(set.len(), 25);
        assert_eq!(set.bits(), VALID_BITS);
    }

    #[test]
    fn hits_counts_intersection() {
        let game = NumberSet::from_numbers(&(1..=15).collect::<Vec<_>>()).unwrap();
        let draw =
            NumberSet::from_numbers(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 20, 21, 22, 23]).unwrap();

        assert_eq!(game.hits(draw), 11);
        assert_eq!(draw.hits(game), 11);
        assert_eq!(game.hits(game), 15);
        assert_eq!(game.hits(NumberSet::EMPTY), 0);
    }

    #[test]
    fn contains_and_with() {
        let set = NumberSet::EMPTY.with(5).with(21);
        assert!(set.contains(5));
        assert!(set.contains(21));
        assert!(!set.contains(6));
        assert!(!set.contains(0));
        assert!(!set.contains(26));
    }

    #[test]
    fn set_algebra() {
        let a = NumberSet::from_numbers(&[1, 2, 3]).unwrap();
        let b = NumberSet::from_numbers(&[3, 4]).unwrap();

        assert_eq!(a.union(b).numbers(), vec![1, 2, 3, 4]);
        assert_eq!(a.intersection(b).numbers(), vec![3]);
        assert_eq!(a.difference(b).numbers(), vec![1, 2]);
        assert!(a.intersection(b).is_subset_of(a));
        assert!(!a.is_subset_of(b));
    }

    #[test]
    fn display_uses_two_digits() {
        let set = NumberSet::from_numbers(&[10, 2, 25]).unwrap();
        assert_eq!(set.to_string(), "02 10 25");
        assert_eq!(NumberSet::EMPTY.to_string(), "");
    }
}
