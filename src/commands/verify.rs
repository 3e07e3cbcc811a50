//! Verification command
//!
//! Re-proves a given game set against a pool, reporting the exact worst case
//! and the per-number frequency profile.

use crate::closure::{Proof, frequencies, worst_case};
use crate::core::constants::MIN_FREQUENCY;
use crate::core::{Game, InputError, NumberSet, Pool};

/// Result of verifying a game set
pub struct VerifyReport {
    pub pool: Pool,
    pub games: Vec<Game>,
    /// Exact min-of-max over all 54,264 draws
    pub proof: Proof,
    /// (number, games containing it) for every pool number
    pub frequencies: Vec<(u8, u8)>,
    /// Every pool number appears in at least 5 games
    pub balanced: bool,
}

/// Verify `games` against `pool`
///
/// # Errors
///
/// Returns an error if:
/// - No games were given
/// - A game uses a number outside the pool
pub fn verify(pool: Pool, games: Vec<Game>) -> Result<VerifyReport, InputError> {
    if games.is_empty() {
        return Err(InputError::WrongCount {
            expected: 1,
            actual: 0,
        });
    }
    for game in &games {
        game.check_in_pool(&pool)?;
    }

    let masks: Vec<NumberSet> = games.iter().map(Game::mask).collect();
    let proof = worst_case(&masks, &pool);

    let counts = frequencies(&masks);
    let frequencies: Vec<(u8, u8)> = pool
        .numbers()
        .iter()
        .map(|&n| (n, counts[usize::from(n - 1)]))
        .collect();
    let balanced = frequencies.iter().all(|&(_, c)| c >= MIN_FREQUENCY);

    Ok(VerifyReport {
        pool,
        games,
        proof,
        frequencies,
        balanced,
    })
}
