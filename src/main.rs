//! Lotofácil Closure - CLI
//!
//! 8-game, 21-number Lotofácil closure generator with TUI and CLI modes.
//! Every draw inside the pool is checked, so the 11-point guarantee is proven.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};
use lotofacil_closure::{
    commands::{GenerateConfig, check, generate, run_benchmark, verify},
    core::{Game, Pool, constants::DEFAULT_ATTEMPT_BUDGET, parse_numbers},
    export::{parse_txt, to_csv, to_txt},
    output::{
        exhaustion_notice, print_benchmark_result, print_check_report, print_generate_report,
        print_verify_report,
    },
};
use rand::Rng;
use std::io;
use std::time::Duration;

#[derive(Parser)]
#[command(
    name = "lotofacil_closure",
    about = "Lotofácil 21-number closure: 8 games, 11 points guaranteed",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Candidate sets to try before giving up
    #[arg(short, long, global = true, default_value_t = DEFAULT_ATTEMPT_BUDGET)]
    attempts: u32,

    /// Seed for a reproducible run (random when omitted)
    #[arg(short, long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Generate a closure for a pool
    Generate {
        /// 21 pool numbers, e.g. "1,2,4,5,..." (random pool when omitted)
        #[arg(short, long)]
        pool: Option<String>,

        /// Spread attempts over all cores
        #[arg(long)]
        parallel: bool,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Pretty)]
        format: Format,

        /// Show how to reproduce the run
        #[arg(short, long)]
        verbose: bool,
    },

    /// Prove the guarantee of games read from stdin (TXT format)
    Verify {
        /// 21 pool numbers the games were built from
        #[arg(short, long)]
        pool: String,

        /// Show the per-number frequency profile
        #[arg(short, long)]
        verbose: bool,
    },

    /// Score games read from stdin (TXT format) against a draw
    Check {
        /// The 15 drawn numbers
        #[arg(short, long)]
        draw: String,

        /// Pool of the games, to report whether the guarantee applies
        #[arg(short, long)]
        pool: Option<String>,
    },

    /// Measure search success over random pools
    Benchmark {
        /// Number of random pools to test
        #[arg(short = 'n', long, default_value = "20")]
        count: usize,

        /// Spread attempts over all cores
        #[arg(long)]
        parallel: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    /// Colored report
    Pretty,
    /// One game per line
    Txt,
    /// Semicolon-separated spreadsheet
    Csv,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(cli.attempts, cli.seed),
        Commands::Generate {
            pool,
            parallel,
            format,
            verbose,
        } => run_generate_command(
            pool.as_deref(),
            cli.attempts,
            cli.seed,
            parallel,
            format,
            verbose,
        ),
        Commands::Verify { pool, verbose } => run_verify_command(&pool, verbose),
        Commands::Check { draw, pool } => run_check_command(&draw, pool.as_deref()),
        Commands::Benchmark { count, parallel } => {
            run_benchmark_command(count, cli.attempts, cli.seed, parallel);
            Ok(())
        }
    }
}

fn parse_pool(text: &str) -> Result<Pool> {
    let numbers = parse_numbers(text).context("invalid pool")?;
    Pool::new(&numbers).context("invalid pool")
}

fn read_games() -> Result<Vec<Game>> {
    let text = io::read_to_string(io::stdin()).context("failed to read games from stdin")?;
    let games = parse_txt(&text).context("invalid game list")?;
    if games.is_empty() {
        bail!("no games on stdin (expected one game of 15 numbers per line)");
    }
    Ok(games)
}

fn run_generate_command(
    pool: Option<&str>,
    attempts: u32,
    seed: Option<u64>,
    parallel: bool,
    format: Format,
    verbose: bool,
) -> Result<()> {
    let pool = pool.map(parse_numbers).transpose().context("invalid pool")?;

    let mut config = GenerateConfig::new(pool);
    config.attempt_budget = attempts;
    config.seed = seed;
    config.parallel = parallel;

    // Drawn on stderr; stdout carries only the report
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg} [{elapsed}]")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(format!("Searching up to {attempts} candidate sets..."));
    spinner.enable_steady_tick(Duration::from_millis(100));

    let report = generate(config);
    spinner.finish_and_clear();
    let report = report.context("invalid pool")?;

    // An exhausted search still exits 0
    match format {
        Format::Pretty => print_generate_report(&report, verbose),
        Format::Txt | Format::Csv => {
            if let Some(notice) = exhaustion_notice(&report) {
                eprintln!("{notice}");
            }
            if matches!(format, Format::Txt) {
                println!("{}", to_txt(&report.result.games));
            } else {
                println!("{}", to_csv(&report.result.games));
            }
        }
    }
    Ok(())
}

fn run_verify_command(pool: &str, verbose: bool) -> Result<()> {
    let pool = parse_pool(pool)?;
    let games = read_games()?;

    let report = verify(pool, games).context("games do not fit the pool")?;
    print_verify_report(&report, verbose);

    if !report.proof.is_guaranteed() {
        bail!("the games do not guarantee 11 points");
    }
    Ok(())
}

fn run_check_command(draw: &str, pool: Option<&str>) -> Result<()> {
    let draw = parse_numbers(draw).context("invalid draw")?;
    let pool = pool.map(parse_pool).transpose()?;
    let games = read_games()?;

    let report = check(games, &draw, pool.as_ref()).context("invalid draw")?;
    print_check_report(&report);
    Ok(())
}

fn run_benchmark_command(count: usize, attempts: u32, seed: Option<u64>, parallel: bool) {
    let seed = seed.unwrap_or_else(|| rand::rng().random());
    println!("Running benchmark on {count} random pools (seed {seed})...");

    let result = run_benchmark(count, attempts, seed, parallel);
    print_benchmark_result(&result);
}

fn run_play_command(attempts: u32, seed: Option<u64>) -> Result<()> {
    use lotofacil_closure::interactive::{App, run_tui};

    let app = App::new(attempts, seed);
    run_tui(app)
}
