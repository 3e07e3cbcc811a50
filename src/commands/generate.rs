//! Closure generation command
//!
//! Resolves the pool and seed, then runs the search.

use crate::closure::{GenerationResult, search, search_parallel};
use crate::core::constants::DEFAULT_ATTEMPT_BUDGET;
use crate::core::{InputError, Pool};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Configuration for generating a closure
pub struct GenerateConfig {
    /// Pool numbers; a random pool is drawn from the seed when absent
    pub pool: Option<Vec<u8>>,
    pub attempt_budget: u32,
    /// Fixed seed for a reproducible run
    pub seed: Option<u64>,
    /// Spread attempts over all cores
    pub parallel: bool,
}

impl GenerateConfig {
    #[must_use]
    pub const fn new(pool: Option<Vec<u8>>) -> Self {
        Self {
            pool,
            attempt_budget: DEFAULT_ATTEMPT_BUDGET,
            seed: None,
            parallel: false,
        }
    }
}

/// Result of a generation run, with everything needed to reproduce it
pub struct GenerateReport {
    pub pool: Pool,
    pub seed: u64,
    pub parallel: bool,
    pub result: GenerationResult,
}

/// Generate an 8-game closure for the configured pool
///
/// # Errors
///
/// Returns an error if the configured pool is not 21 distinct numbers in 1-25.
pub fn generate(config: GenerateConfig) -> Result<GenerateReport, InputError> {
    let seed = config.seed.unwrap_or_else(|| rand::rng().random());
    let mut rng = StdRng::seed_from_u64(seed);

    let pool = match config.pool {
        Some(numbers) => Pool::new(&numbers)?,
        None => Pool::random(&mut rng),
    };

    let result = if config.parallel {
        search_parallel(&pool, config.attempt_budget, seed)
    } else {
        search(&pool, config.attempt_budget, &mut rng)
    };

    Ok(GenerateReport {
        pool,
        seed,
        parallel: config.parallel,
        result,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pool_numbers() -> Vec<u8> {
        vec![1, 2, 4, 5, 6, 7, 9, 10, 11, 12, 13, 14, 16, 17, 18, 19, 20, 21, 23, 24, 25]
    }

    #[test]
    fn generate_with_fixed_seed_is_reproducible() {
        let mut config = GenerateConfig::new(Some(pool_numbers()));
        config.seed = Some(42);
        config.attempt_budget = 10;
        let first = generate(config).unwrap();

        let mut config = GenerateConfig::new(Some(pool_numbers()));
        config.seed = Some(42);
        config.attempt_budget = 10;
        let second = generate(config).unwrap();

        assert_eq!(first.seed, 42);
        assert_eq!(first.pool, second.pool);
        assert!(first.result.same_outcome(&second.result));
    }

    #[test]
    fn generate_finds_guaranteed_closure() {
        let numbers = vec![
            1, 2, 3, 5, 6, 7, 8, 10, 11, 12, 13, 14, 15, 17, 18, 19, 20, 21, 22, 24, 25,
        ];
        let mut config = GenerateConfig::new(Some(numbers.clone()));
        config.seed = Some(1);
        let report = generate(config).unwrap();

        assert_eq!(report.pool.numbers(), numbers.as_slice());
        assert!(report.result.guaranteed);
        assert_eq!(report.result.games.len(), 8);
        assert!(report.result.min_points >= 11);
        assert!(report.result.attempts <= 500);
        assert!(
            report
                .result
                .games
                .iter()
                .all(|game| game.check_in_pool(&report.pool).is_ok())
        );
    }

    #[test]
    fn generate_random_pool_from_seed() {
        let mut config = GenerateConfig::new(None);
        config.seed = Some(8);
        config.attempt_budget = 1;
        let first = generate(config).unwrap();

        let mut config = GenerateConfig::new(None);
        config.seed = Some(8);
        config.attempt_budget = 1;
        let second = generate(config).unwrap();

        assert_eq!(first.pool.numbers().len(), 21);
        assert_eq!(first.pool, second.pool);
    }

    #[test]
    fn generate_rejects_invalid_pool() {
        let config = GenerateConfig::new(Some(vec![1, 2, 3]));
        assert!(matches!(
            generate(config),
            Err(InputError::WrongCount {
                expected: 21,
                actual: 3
            })
        ));
    }

    #[test]
    fn generate_parallel_reports_mode() {
        let mut config = GenerateConfig::new(Some(pool_numbers()));
        config.seed = Some(5);
        config.attempt_budget = 8;
        config.parallel = true;

        let report = generate(config).unwrap();
        assert!(report.parallel);
        assert!(report.result.guaranteed || report.result.attempts == 8);
    }

    #[test]
    fn default_budget_is_five_hundred() {
        assert_eq!(GenerateConfig::new(None).attempt_budget, 500);
    }
}
