//! A single 15-number bet

use super::constants::GAME_SIZE;
use super::error::InputError;
use super::{NumberSet, Pool};
use std::fmt;

/// One 15-number game with its position (1-based) in the closure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Game {
    id: u8,
    numbers: NumberSet,
}

impl Game {
    /// Create a game from an already-encoded 15-number set
    ///
    /// # Panics
    /// Panics in debug mode if `numbers` does not hold exactly 15 members
    #[must_use]
    pub fn new(id: u8, numbers: NumberSet) -> Self {
        debug_assert_eq!(numbers.len(), GAME_SIZE, "a game holds 15 numbers");
        Self { id, numbers }
    }

    /// Create a game from a list of numbers
    ///
    /// # Errors
    /// Returns `InputError` if a number is out of range, repeated, or the
    /// count is not 15.
    pub fn from_numbers(id: u8, numbers: &[u8]) -> Result<Self, InputError> {
        let mask = NumberSet::from_numbers(numbers)?;
        if mask.len() != GAME_SIZE {
            return Err(InputError::WrongCount {
                expected: GAME_SIZE,
                actual: numbers.len(),
            });
        }
        Ok(Self { id, numbers: mask })
    }

    #[inline]
    #[must_use]
    pub const fn id(&self) -> u8 {
        self.id
    }

    #[inline]
    #[must_use]
    pub const fn mask(&self) -> NumberSet {
        self.numbers
    }

    /// Numbers in ascending order
    #[must_use]
    pub fn numbers(&self) -> Vec<u8> {
        self.numbers.numbers()
    }

    /// Hits against a draw (or any other set)
    #[inline]
    #[must_use]
    pub const fn hits(&self, other: NumberSet) -> u8 {
        self.numbers.hits(other)
    }

    /// Check that every number of the game belongs to `pool`
    ///
    /// # Errors
    /// Returns `InputError::NotInPool` with the smallest offending number.
    pub fn check_in_pool(&self, pool: &Pool) -> Result<(), InputError> {
        match self.numbers.difference(pool.mask()).iter().next() {
            Some(outside) => Err(InputError::NotInPool(outside)),
            None => Ok(()),
        }
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Game {}: {}", self.id, self.numbers)
    }
}
