//! Exhaustive guarantee proof
//!
//! For every 15-number draw inside the pool, take the best game's hits; the
//! closure's strength is the worst of those. The guarantee holds when that
//! minimum is at least 11.

use super::result::Cancelled;
use crate::core::constants::{GAME_SIZE, GUARANTEE_THRESHOLD};
use crate::core::{NumberSet, Pool};
use std::sync::atomic::{AtomicBool, Ordering};

/// Combinations between two reads of the cancellation flag
const CANCEL_POLL_INTERVAL: u64 = 4_096;

/// Outcome of scanning the pool's draws against a set of games
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Proof {
    /// Worst-case best-game hits over the scanned draws
    pub min_points: u8,
    /// Draws examined before finishing or short-circuiting
    pub combinations_scanned: u64,
    /// First draw that attained `min_points`
    pub witness: NumberSet,
}

impl Proof {
    /// Every draw inside the pool reaches 11 points in some game
    #[inline]
    #[must_use]
    pub const fn is_guaranteed(&self) -> bool {
        self.min_points >= GUARANTEE_THRESHOLD
    }
}

/// Best hit count any game reaches against `draw`
///
/// Stops scanning games once a perfect 15 is found.
///
/// # Examples
/// ```
/// use lotofacil_closure::closure::max_hits;
/// use lotofacil_closure::core::NumberSet;
///
/// let a = NumberSet::from_numbers(&[1, 2, 3]).unwrap();
/// let b = NumberSet::from_numbers(&[3, 4, 5]).unwrap();
/// let draw = NumberSet::from_numbers(&[2, 3, 4, 5]).unwrap();
/// assert_eq!(max_hits(&[a, b], draw), 3);
/// assert_eq!(max_hits(&[], draw), 0);
/// ```
#[inline]
#[must_use]
pub fn max_hits(games: &[NumberSet], draw: NumberSet) -> u8 {
    let mut best = 0;
    for &game in games {
        best = best.max(game.hits(draw));
        if usize::from(best) == GAME_SIZE {
            break;
        }
    }
    best
}

/// Prove (or refute) the 11-point guarantee for `games` over `pool`
///
/// Stops at the first draw whose best game scores below 11, so a failing
/// proof reports the running minimum at that point, not necessarily the true
/// minimum. Use [`worst_case`] for the exact value.
///
/// # Examples
/// ```
/// use lotofacil_closure::closure::validate_guarantee;
/// use lotofacil_closure::core::{NumberSet, Pool};
///
/// let pool = Pool::new(&(1..=21).collect::<Vec<u8>>()).unwrap();
/// let single = NumberSet::from_numbers(&(1..=15).collect::<Vec<u8>>()).unwrap();
///
/// let proof = validate_guarantee(&[single], &pool);
/// assert!(!proof.is_guaranteed());
/// assert!(proof.min_points < 11);
/// ```
#[must_use]
pub fn validate_guarantee(games: &[NumberSet], pool: &Pool) -> Proof {
    match scan(games, pool, Some(GUARANTEE_THRESHOLD), None) {
        Ok(proof) | Err(ScanStop::Proof(proof)) => proof,
        Err(ScanStop::Cancelled) => unreachable!("no cancellation flag was supplied"),
    }
}

/// [`validate_guarantee`] that gives up when `cancel` becomes true
///
/// The flag is read every 4,096 draws.
///
/// # Errors
/// Returns `Cancelled` (with `attempts` 0) if the flag was observed.
pub fn validate_guarantee_cancellable(
    games: &[NumberSet],
    pool: &Pool,
    cancel: &AtomicBool,
) -> Result<Proof, Cancelled> {
    match scan(games, pool, Some(GUARANTEE_THRESHOLD), Some(cancel)) {
        Ok(proof) | Err(ScanStop::Proof(proof)) => Ok(proof),
        Err(ScanStop::Cancelled) => Err(Cancelled { attempts: 0 }),
    }
}

/// Exact min-over-draws of max-over-games, scanning all 54,264 draws
///
/// Monotone in the game set: adding a game never lowers it, removing one
/// never raises it.
#[must_use]
pub fn worst_case(games: &[NumberSet], pool: &Pool) -> Proof {
    match scan(games, pool, None, None) {
        Ok(proof) | Err(ScanStop::Proof(proof)) => proof,
        Err(ScanStop::Cancelled) => unreachable!("no cancellation flag was supplied"),
    }
}

enum ScanStop {
    /// Running minimum fell below the threshold
    Proof(Proof),
    Cancelled,
}

fn scan(
    games: &[NumberSet],
    pool: &Pool,
    stop_below: Option<u8>,
    cancel: Option<&AtomicBool>,
) -> Result<Proof, ScanStop> {
    let mut min_points = GAME_SIZE as u8;
    let mut witness = NumberSet::EMPTY;
    let mut scanned = 0u64;

    for draw in pool.draws() {
        scanned += 1;

        if scanned % CANCEL_POLL_INTERVAL == 0
            && cancel.is_some_and(|flag| flag.load(Ordering::Relaxed))
        {
            return Err(ScanStop::Cancelled);
        }

        let best = max_hits(games, draw);
        if best < min_points || scanned == 1 {
            min_points = min_points.min(best);
            witness = draw;
        }

        // The minimum never rises again, so the verdict is settled
        if stop_below.is_some_and(|threshold| min_points < threshold) {
            return Err(ScanStop::Proof(Proof {
                min_points,
                combinations_scanned: scanned,
                witness,
            }));
        }
    }

    Ok(Proof {
        min_points,
        combinations_scanned: scanned,
        witness,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pool_1_to_21() -> Pool {
        Pool::new(&(1..=21).collect::<Vec<u8>>()).unwrap()
    }

    /// Numbers {3t-2, 3t-1, 3t} for block t in 1..=7
    fn block(t: u8) -> NumberSet {
        NumberSet::from_numbers(&[3 * t - 2, 3 * t - 1, 3 * t]).unwrap()
    }

    /// Four games known to guarantee exactly 11 on pool 1..=21
    ///
    /// Pool is split into seven blocks of three; each game drops two blocks.
    /// Block pairs (1,2) (3,4) (5,6) (6,7) cover every block and contain two
    /// disjoint pairs, so any draw shares at least two numbers with the
    /// dropped part of some game.
    fn block_pair_games() -> Vec<NumberSet> {
        let pool = pool_1_to_21().mask();
        [(1, 2), (3, 4), (5, 6), (6, 7)]
            .iter()
            .map(|&(a, b)| pool.difference(block(a).union(block(b))))
            .collect()
    }

    #[test]
    fn block_pair_games_are_fifteen_wide() {
        for game in block_pair_games() {
            assert_eq!(game.len(), 15);
        }
    }

    #[test]
    fn known_closure_is_guaranteed() {
        let pool = pool_1_to_21();
        let proof = validate_guarantee(&block_pair_games(), &pool);

        assert!(proof.is_guaranteed());
        assert_eq!(proof.min_points, 11);
        assert_eq!(proof.combinations_scanned, 54_264);
        assert_eq!(max_hits(&block_pair_games(), proof.witness), 11);
    }

    #[test]
    fn removing_a_game_breaks_the_guarantee() {
        let pool = pool_1_to_21();
        let mut games = block_pair_games();
        games.pop();

        let proof = validate_guarantee(&games, &pool);
        assert!(!proof.is_guaranteed());
        assert!(proof.combinations_scanned < 54_264);
        assert!(max_hits(&games, proof.witness) < 11);

        // Block 7 is no longer dropped by any game
        let exact = worst_case(&games, &pool);
        assert_eq!(exact.min_points, 10);
    }

    #[test]
    fn worst_case_is_monotone() {
        let pool = pool_1_to_21();
        let mut games = block_pair_games();
        games.push(NumberSet::from_numbers(&(7..=21).collect::<Vec<u8>>()).unwrap());
        games.push(NumberSet::from_numbers(&(1..=15).collect::<Vec<u8>>()).unwrap());

        let full = worst_case(&games, &pool).min_points;
        for skip in 0..games.len() {
            let fewer: Vec<NumberSet> = games
                .iter()
                .enumerate()
                .filter(|&(i, _)| i != skip)
                .map(|(_, &g)| g)
                .collect();
            assert!(worst_case(&fewer, &pool).min_points <= full);
        }

        let mut more = games.clone();
        more.push(NumberSet::from_numbers(&(4..=18).collect::<Vec<u8>>()).unwrap());
        assert!(worst_case(&more, &pool).min_points >= full);
    }

    #[test]
    fn superset_of_closure_stays_guaranteed() {
        let pool = pool_1_to_21();
        let mut games = block_pair_games();
        for start in [1u8, 3, 5, 7, 2] {
            games.push(
                NumberSet::from_numbers(&(start..start + 15).collect::<Vec<u8>>()).unwrap(),
            );
        }
        assert_eq!(games.len(), 9);
        assert!(validate_guarantee(&games, &pool).is_guaranteed());
    }

    #[test]
    fn no_games_scores_zero() {
        let proof = validate_guarantee(&[], &pool_1_to_21());
        assert_eq!(proof.min_points, 0);
        assert_eq!(proof.combinations_scanned, 1);
    }

    #[test]
    fn max_hits_short_circuits_on_perfect_match() {
        let draw = NumberSet::from_numbers(&(1..=15).collect::<Vec<u8>>()).unwrap();
        let other = NumberSet::from_numbers(&(2..=16).collect::<Vec<u8>>()).unwrap();
        assert_eq!(max_hits(&[draw, other], draw), 15);
        assert_eq!(max_hits(&[other], draw), 14);
    }

    #[test]
    fn cancelled_flag_aborts_long_scan() {
        let flag = AtomicBool::new(true);
        let result = validate_guarantee_cancellable(&block_pair_games(), &pool_1_to_21(), &flag);
        assert_eq!(result, Err(Cancelled { attempts: 0 }));

        let idle = AtomicBool::new(false);
        let result = validate_guarantee_cancellable(&block_pair_games(), &pool_1_to_21(), &idle);
        assert!(result.is_ok_and(|proof| proof.is_guaranteed()));
    }
}
