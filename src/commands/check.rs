//! Conference command
//!
//! Scores a game set against an actual draw.

use crate::core::{Draw, Game, InputError, Pool};
use crate::scoring::{Conference, score};

/// Result of checking games against a draw
pub struct CheckReport {
    pub draw: Draw,
    pub games: Vec<Game>,
    pub conference: Conference,
    /// Whether the draw lies inside the pool, when a pool was given
    ///
    /// The 11-point guarantee only covers draws inside the pool.
    pub draw_in_pool: Option<bool>,
}

/// Score `games` against the draw `draw_numbers`
///
/// # Errors
///
/// Returns an error if the draw is not 15 distinct numbers in 1-25.
pub fn check(
    games: Vec<Game>,
    draw_numbers: &[u8],
    pool: Option<&Pool>,
) -> Result<CheckReport, InputError> {
    let draw = Draw::new(draw_numbers)?;
    let conference = score(&games, draw);
    let draw_in_pool = pool.map(|pool| draw.mask().is_subset_of(pool.mask()));

    Ok(CheckReport {
        draw,
        games,
        conference,
        draw_in_pool,
    })
}
