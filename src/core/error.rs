//! Input validation errors

use std::fmt;

/// Error type for invalid number sets
///
/// Raised at the boundary (pool, draw, game parsing); nothing past a validated
/// `Pool` or `Draw` can produce one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// A number outside 1..=25
    OutOfRange(i64),
    /// The same number given twice
    Duplicate(u8),
    /// Wrong amount of numbers for the set being built
    WrongCount { expected: usize, actual: usize },
    /// A game number that is not part of the pool
    NotInPool(u8),
    /// A token that is not an integer
    Unparseable(String),
    /// More games than a list can number
    TooManyGames { max: usize, actual: usize },
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange(n) => write!(f, "Number {n} is outside 1-25"),
            Self::Duplicate(n) => write!(f, "Number {n} appears more than once"),
            Self::WrongCount { expected, actual } => {
                write!(f, "Expected exactly {expected} numbers, got {actual}")
            }
            Self::NotInPool(n) => write!(f, "Number {n} is not part of the pool"),
            Self::Unparseable(token) => write!(f, "Cannot read '{token}' as a number"),
            Self::TooManyGames { max, actual } => {
                write!(f, "At most {max} games are supported, got {actual}")
            }
        }
    }
}

impl std::error::Error for InputError {}
