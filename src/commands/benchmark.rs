//! Benchmark command
//!
//! Runs the search on a series of random pools and collects success
//! statistics.

use crate::closure::{GenerationResult, search, search_parallel};
use crate::core::Pool;
use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_runs: usize,
    pub guaranteed: usize,
    pub exhausted: usize,
    pub attempt_budget: u32,
    /// Mean attempts over the successful runs
    pub average_attempts: f64,
    pub min_attempts: u32,
    pub max_attempts: u32,
    /// Successful runs per attempts bucket (`bucket_width` wide, keyed by lower bound)
    pub attempt_distribution: BTreeMap<u32, usize>,
    pub bucket_width: u32,
    pub duration: Duration,
    pub slowest: Duration,
    pub runs_per_second: f64,
}

/// Run `count` searches on random pools derived from `seed`
///
/// Run `i` uses its own generator seeded from `(seed, i)` for both the pool and
/// the search, so every run can be reproduced with `generate --seed`.
#[must_use]
pub fn run_benchmark(
    count: usize,
    attempt_budget: u32,
    seed: u64,
    parallel: bool,
) -> BenchmarkResult {
    let pb = ProgressBar::new(count as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();
    let mut results: Vec<GenerationResult> = Vec::with_capacity(count);

    for run_seed in run_seeds(seed, count) {
        let mut rng = StdRng::seed_from_u64(run_seed);
        let pool = Pool::random(&mut rng);
        let result = if parallel {
            search_parallel(&pool, attempt_budget, run_seed)
        } else {
            search(&pool, attempt_budget, &mut rng)
        };
        results.push(result);

        let found = results.iter().filter(|r| r.guaranteed).count();
        pb.set_message(format!("Guaranteed: {found}/{}", results.len()));
        pb.inc(1);
    }

    pb.finish_with_message("Complete!");

    summarize(&results, attempt_budget, start.elapsed())
}

/// Seeds of the individual runs, reproducible from the benchmark seed
fn run_seeds(seed: u64, count: usize) -> Vec<u64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count).map(|_| rng.random()).collect()
}

fn summarize(
    results: &[GenerationResult],
    attempt_budget: u32,
    duration: Duration,
) -> BenchmarkResult {
    let successes: Vec<&GenerationResult> = results.iter().filter(|r| r.guaranteed).collect();
    let bucket_width = (attempt_budget / 10).max(1);

    let mut attempt_distribution = BTreeMap::new();
    for result in &successes {
        let bucket = (result.attempts - 1) / bucket_width * bucket_width + 1;
        *attempt_distribution.entry(bucket).or_insert(0) += 1;
    }

    let average_attempts = if successes.is_empty() {
        0.0
    } else {
        successes.iter().map(|r| f64::from(r.attempts)).sum::<f64>() / successes.len() as f64
    };

    BenchmarkResult {
        total_runs: results.len(),
        guaranteed: successes.len(),
        exhausted: results.len() - successes.len(),
        attempt_budget,
        average_attempts,
        min_attempts: successes.iter().map(|r| r.attempts).min().unwrap_or(0),
        max_attempts: successes.iter().map(|r| r.attempts).max().unwrap_or(0),
        attempt_distribution,
        bucket_width,
        duration,
        slowest: results.iter().map(|r| r.elapsed).max().unwrap_or_default(),
        runs_per_second: if duration.is_zero() {
            0.0
        } else {
            results.len() as f64 / duration.as_secs_f64()
        },
    }
}
