//! Core domain types for Lotofácil closures
//!
//! Bitmask number sets, validated pools/draws/games and the lazy combination
//! enumerator. Everything here is pure and deterministic.

mod combination;
pub mod constants;
mod error;
mod game;
mod number_set;
mod pool;

pub use combination::{Combinations, SubsetMasks, binomial, combinations, subset_masks};
pub use error::InputError;
pub use game::Game;
pub use number_set::NumberSet;
pub use pool::{Draw, Pool, parse_numbers};
