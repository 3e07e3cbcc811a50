//! Fixed parameters of the Lotofácil 21-number closure
//!
//! The format is not configurable: 25 numbers, 15 per bet, 21-number pools,
//! 8 bets guaranteeing 11 points.

/// Highest number on the ticket (numbers run 1..=25)
pub const MAX_NUMBER: u8 = 25;

/// Numbers in a pool
pub const POOL_SIZE: usize = 21;

/// Numbers in a single game (and in a draw)
pub const GAME_SIZE: usize = 15;

/// Games in a closure
pub const GAMES_PER_CLOSURE: usize = 8;

/// Minimum hits every possible draw inside the pool must reach in some game
pub const GUARANTEE_THRESHOLD: u8 = 11;

/// Every pool number must appear in at least this many of the 8 games
///
/// 8 × 15 = 120 slots over 21 numbers averages 5.71 appearances per number.
pub const MIN_FREQUENCY: u8 = 5;

/// Default number of candidate sets tried before giving up
pub const DEFAULT_ATTEMPT_BUDGET: u32 = 500;

/// C(21, 15): draws contained in a pool
pub const POOL_COMBINATIONS: u64 = 54_264;

/// Price of one 15-number bet, in cents
pub const COST_PER_GAME_CENTS: i64 = 350;

/// Lowest hit count that pays a prize
pub const MIN_PRIZE_HITS: u8 = 11;

/// Prize per winning game in cents, indexed by `hits - MIN_PRIZE_HITS` (11..=15)
pub const PRIZE_TABLE_CENTS: [i64; 5] = [700, 1_400, 3_500, 100_000, 100_000_000];
