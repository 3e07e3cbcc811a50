//! Validated number sets: the 21-number pool and a 15-number draw

use super::combination::{SubsetMasks, subset_masks};
use super::constants::{GAME_SIZE, MAX_NUMBER, POOL_SIZE};
use super::error::InputError;
use super::NumberSet;
use rand::Rng;
use std::fmt;

/// Parse a list of numbers separated by spaces, commas, semicolons or tabs
///
/// Only checks that every token is an integer in 1..=25; size and uniqueness
/// are checked by the set being built.
///
/// # Errors
/// Returns `InputError::Unparseable` for a non-integer token and
/// `InputError::OutOfRange` for an integer outside 1..=25.
///
/// # Examples
/// ```
/// use lotofacil_closure::core::parse_numbers;
///
/// assert_eq!(parse_numbers("1, 2;3 04").unwrap(), vec![1, 2, 3, 4]);
/// assert!(parse_numbers("1 two").is_err());
/// ```
pub fn parse_numbers(text: &str) -> Result<Vec<u8>, InputError> {
    text.split(|c: char| c.is_whitespace() || c == ',' || c == ';')
        .filter(|token| !token.is_empty())
        .map(|token| {
            let value: i64 = token
                .parse()
                .map_err(|_| InputError::Unparseable(token.to_string()))?;
            if (1..=i64::from(MAX_NUMBER)).contains(&value) {
                Ok(value as u8)
            } else {
                Err(InputError::OutOfRange(value))
            }
        })
        .collect()
}

/// Encode `numbers` and require exactly `expected` members
fn encode_exact(numbers: &[u8], expected: usize) -> Result<NumberSet, InputError> {
    let mask = NumberSet::from_numbers(numbers)?;
    if mask.len() == expected {
        Ok(mask)
    } else {
        Err(InputError::WrongCount {
            expected,
            actual: numbers.len(),
        })
    }
}

/// The 21 numbers a closure is built from
///
/// Only constructible through validation, so every `Pool` holds exactly 21
/// distinct numbers in 1..=25.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pool {
    numbers: Vec<u8>,
    mask: NumberSet,
}

impl Pool {
    /// Create a pool from 21 distinct numbers in any order
    ///
    /// # Errors
    /// Returns `InputError` if a number is out of range, repeated, or the
    /// count is not 21.
    ///
    /// # Examples
    /// ```
    /// use lotofacil_closure::core::Pool;
    ///
    /// let numbers: Vec<u8> = (1..=21).rev().collect();
    /// let pool = Pool::new(&numbers).unwrap();
    /// assert_eq!(pool.numbers()[0], 1);
    ///
    /// assert!(Pool::new(&[1, 2, 3]).is_err());
    /// ```
    pub fn new(numbers: &[u8]) -> Result<Self, InputError> {
        let mask = encode_exact(numbers, POOL_SIZE)?;
        Ok(Self {
            numbers: mask.numbers(),
            mask,
        })
    }

    /// Pick 21 of the 25 numbers uniformly at random
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mask = rand::seq::index::sample(rng, usize::from(MAX_NUMBER), POOL_SIZE)
            .into_iter()
            .fold(NumberSet::EMPTY, |mask, i| mask.with(i as u8 + 1));
        Self {
            numbers: mask.numbers(),
            mask,
        }
    }

    /// Pool numbers in ascending order
    #[inline]
    #[must_use]
    pub fn numbers(&self) -> &[u8] {
        &self.numbers
    }

    #[inline]
    #[must_use]
    pub const fn mask(&self) -> NumberSet {
        self.mask
    }

    #[inline]
    #[must_use]
    pub const fn contains(&self, number: u8) -> bool {
        self.mask.contains(number)
    }

    /// The four ticket numbers left out of the pool
    #[must_use]
    pub fn excluded(&self) -> Vec<u8> {
        (1..=MAX_NUMBER).filter(|&n| !self.contains(n)).collect()
    }

    /// Every 15-number draw contained in the pool (54,264 of them)
    #[must_use]
    pub fn draws(&self) -> SubsetMasks<'_> {
        subset_masks(&self.numbers, GAME_SIZE)
    }
}

impl fmt::Display for Pool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.mask)
    }
}

/// The 15 numbers of an actual draw
///
/// A draw may include numbers outside the pool; the guarantee simply does not
/// cover it then.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Draw(NumberSet);

impl Draw {
    /// Create a draw from 15 distinct numbers
    ///
    /// # Errors
    /// Returns `InputError` if a number is out of range, repeated, or the
    /// count is not 15.
    pub fn new(numbers: &[u8]) -> Result<Self, InputError> {
        encode_exact(numbers, GAME_SIZE).map(Self)
    }

    #[inline]
    #[must_use]
    pub const fn mask(self) -> NumberSet {
        self.0
    }
}

impl fmt::Display for Draw {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
