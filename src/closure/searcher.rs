//! Randomized closure search
//!
//! Independent-trial restarts: each attempt samples 8 random 15-number games
//! from the pool, discards unbalanced candidates, and runs the full proof on
//! the rest. The first candidate that proves 11 points wins.

use super::result::{Cancelled, GenerationResult};
use super::validator::{validate_guarantee, validate_guarantee_cancellable};
use crate::core::constants::{GAME_SIZE, GAMES_PER_CLOSURE, MAX_NUMBER, MIN_FREQUENCY};
use crate::core::{Game, NumberSet, Pool};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

/// One candidate closure: 8 game masks
pub type Candidate = [NumberSet; GAMES_PER_CLOSURE];

/// Sample 8 games, each a uniformly random 15-subset of the pool
///
/// Games are independent and may overlap or repeat.
pub fn sample_candidate<R: Rng + ?Sized>(pool: &Pool, rng: &mut R) -> Candidate {
    let numbers = pool.numbers();
    std::array::from_fn(|_| {
        rand::seq::index::sample(&mut *rng, numbers.len(), GAME_SIZE)
            .into_iter()
            .fold(NumberSet::EMPTY, |mask, i| mask.with(numbers[i]))
    })
}

/// How many games contain each number, indexed by `number - 1`
#[must_use]
pub fn frequencies(games: &[NumberSet]) -> [u8; MAX_NUMBER as usize] {
    let mut counts = [0u8; MAX_NUMBER as usize];
    for game in games {
        for n in game.iter() {
            counts[usize::from(n - 1)] += 1;
        }
    }
    counts
}

/// Every pool number appears in at least 5 games
#[must_use]
pub fn is_balanced(pool: &Pool, games: &[NumberSet]) -> bool {
    let counts = frequencies(games);
    pool.numbers()
        .iter()
        .all(|&n| counts[usize::from(n - 1)] >= MIN_FREQUENCY)
}

/// Search for an 8-game closure guaranteeing 11 points
///
/// A pure function of its arguments: the same pool, budget and seeded `rng`
/// always produce the same result (apart from `elapsed`).
///
/// # Examples
/// ```
/// use lotofacil_closure::closure::search;
/// use lotofacil_closure::core::Pool;
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let pool = Pool::new(&(1..=21).collect::<Vec<u8>>()).unwrap();
/// let result = search(&pool, 3, &mut StdRng::seed_from_u64(1));
/// assert!(result.guaranteed || (result.attempts == 3 && result.games.is_empty()));
/// ```
pub fn search<R: Rng + ?Sized>(pool: &Pool, attempt_budget: u32, rng: &mut R) -> GenerationResult {
    match run(pool, attempt_budget, rng, None) {
        Ok(result) => result,
        Err(_) => unreachable!("search without cancellation cannot be cancelled"),
    }
}

/// [`search`] that stops when `cancel` becomes true
///
/// The flag is checked before every attempt and every 4,096 draws inside a
/// proof; the in-flight attempt is discarded.
///
/// # Errors
/// Returns `Cancelled` with the number of attempts started so far.
pub fn search_cancellable<R: Rng + ?Sized>(
    pool: &Pool,
    attempt_budget: u32,
    rng: &mut R,
    cancel: &AtomicBool,
) -> Result<GenerationResult, Cancelled> {
    run(pool, attempt_budget, rng, Some(cancel))
}

fn run<R: Rng + ?Sized>(
    pool: &Pool,
    attempt_budget: u32,
    rng: &mut R,
    cancel: Option<&AtomicBool>,
) -> Result<GenerationResult, Cancelled> {
    let start = Instant::now();

    for attempt in 1..=attempt_budget {
        if cancel.is_some_and(|flag| flag.load(Ordering::Relaxed)) {
            return Err(Cancelled {
                attempts: attempt - 1,
            });
        }

        let candidate = sample_candidate(pool, rng);
        if !is_balanced(pool, &candidate) {
            continue;
        }

        let proof = match cancel {
            Some(flag) => validate_guarantee_cancellable(&candidate, pool, flag)
                .map_err(|_| Cancelled { attempts: attempt })?,
            None => validate_guarantee(&candidate, pool),
        };

        if proof.is_guaranteed() {
            return Ok(GenerationResult::accepted(
                into_games(&candidate),
                proof.min_points,
                attempt,
                proof.combinations_scanned,
                start.elapsed(),
            ));
        }
    }

    Ok(GenerationResult::exhausted(attempt_budget, start.elapsed()))
}

/// Seed for attempt `attempt` of a parallel search
fn attempt_seed(seed: u64, attempt: u32) -> u64 {
    seed.wrapping_add(u64::from(attempt).wrapping_mul(0x9E37_79B9_7F4A_7C15))
}

/// Run attempts across the rayon pool, keeping the lowest successful one
///
/// Attempt `i` draws from its own generator seeded from `(seed, i)`, so the
/// result depends only on the arguments, not on thread scheduling. It is not
/// the same result [`search`] gives for the same seed.
#[must_use]
pub fn search_parallel(pool: &Pool, attempt_budget: u32, seed: u64) -> GenerationResult {
    let start = Instant::now();

    let winner = (1..=attempt_budget)
        .into_par_iter()
        .find_map_first(|attempt| {
            let mut rng = StdRng::seed_from_u64(attempt_seed(seed, attempt));
            let candidate = sample_candidate(pool, &mut rng);
            if !is_balanced(pool, &candidate) {
                return None;
            }
            let proof = validate_guarantee(&candidate, pool);
            proof
                .is_guaranteed()
                .then_some((attempt, candidate, proof))
        });

    match winner {
        Some((attempt, candidate, proof)) => GenerationResult::accepted(
            into_games(&candidate),
            proof.min_points,
            attempt,
            proof.combinations_scanned,
            start.elapsed(),
        ),
        None => GenerationResult::exhausted(attempt_budget, start.elapsed()),
    }
}

fn into_games(candidate: &Candidate) -> Vec<Game> {
    candidate
        .iter()
        .zip(1u8..)
        .map(|(&mask, id)| Game::new(id, mask))
        .collect()
}
