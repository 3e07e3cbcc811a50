//! Display functions for command results

use super::formatters::{frequency_bar, game_numbers, group_thousands, hits_label};
use crate::closure::SearchStatus;
use crate::commands::{BenchmarkResult, CheckReport, GenerateReport, VerifyReport};
use crate::core::constants::{GAMES_PER_CLOSURE, GUARANTEE_THRESHOLD, POOL_COMBINATIONS};
use crate::core::NumberSet;
use crate::scoring::Conference;
use colored::Colorize;

/// Print the result of a generation run
pub fn print_generate_report(report: &GenerateReport, verbose: bool) {
    let result = &report.result;

    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "LOTOFÁCIL 21-NUMBER CLOSURE".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n🎱 Pool:     {}", report.pool.to_string().bright_white());
    println!(
        "   Excluded: {}",
        report
            .pool
            .excluded()
            .iter()
            .map(|n| format!("{n:02}"))
            .collect::<Vec<_>>()
            .join(" ")
            .bright_black()
    );
    println!(
        "   Seed:     {}{}",
        report.seed,
        if report.parallel { " (parallel)" } else { "" }
    );

    println!();
    match result.status() {
        SearchStatus::Accepted => {
            println!(
                "{}",
                format!("✅ Guarantee proven ({GUARANTEE_THRESHOLD} points)")
                    .green()
                    .bold()
            );
            println!(
                "   All {} draws inside the pool checked",
                group_thousands(result.combinations_tested)
            );
            println!(
                "   Lowest score found: {}",
                format!("{} points", result.min_points).bright_yellow().bold()
            );
        }
        SearchStatus::Exhausted => {
            println!("{}", "❌ No guarantee found".red().bold());
            println!(
                "   No balanced {GAMES_PER_CLOSURE}-game set reached {GUARANTEE_THRESHOLD} points"
            );
        }
    }
    println!(
        "   Time: {}ms ({} attempts)",
        result.time_ms(),
        result.attempts
    );

    if !result.games.is_empty() {
        println!("\n📋 {}", "Games:".bright_cyan().bold());
        for game in &result.games {
            println!(
                "   #{} {}",
                game.id(),
                game_numbers(game.mask(), NumberSet::EMPTY)
            );
        }
    }

    if verbose && !result.games.is_empty() {
        println!(
            "\n   Each draw of 15 from these 21 numbers ({} in total)",
            group_thousands(POOL_COMBINATIONS)
        );
        println!("   matches at least {GUARANTEE_THRESHOLD} numbers in one of the games.");
        println!(
            "   Reproduce with: --seed {}{} --attempts <same budget>",
            report.seed,
            if report.parallel { " --parallel" } else { "" }
        );
    }
}

/// Print the result of verifying a game set
pub fn print_verify_report(report: &VerifyReport, verbose: bool) {
    let proof = &report.proof;

    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "CLOSURE VERIFICATION".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n🎱 Pool:  {}", report.pool);
    println!("   Games: {}", report.games.len());
    println!(
        "   Draws: {}",
        group_thousands(proof.combinations_scanned)
    );

    println!();
    if proof.is_guaranteed() {
        println!(
            "{}",
            format!(
                "✅ Guaranteed: every draw scores at least {} points",
                proof.min_points
            )
            .green()
            .bold()
        );
    } else {
        println!(
            "{}",
            format!(
                "❌ Not guaranteed: worst draw scores only {} points",
                proof.min_points
            )
            .red()
            .bold()
        );
    }
    println!("   Worst draw: {}", proof.witness.to_string().yellow());
    for game in &report.games {
        println!(
            "   #{} {} {}",
            game.id(),
            game_numbers(game.mask(), proof.witness),
            hits_label(game.hits(proof.witness))
        );
    }

    if verbose {
        println!("\n📈 {}", "Frequency:".bright_cyan().bold());
        for &(number, count) in &report.frequencies {
            let bar = frequency_bar(count, report.games.len());
            println!("   {number:02}: {} {count}", bar.green());
        }
    }
    if !report.balanced {
        println!(
            "\n   {}",
            "Some pool numbers appear in fewer than 5 games".yellow()
        );
    }
}

/// Print a conference of games against a draw
pub fn print_check_report(report: &CheckReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "CONFERENCE".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n🎯 Draw: {}", report.draw.to_string().bright_white().bold());
    match report.draw_in_pool {
        Some(true) => println!("   Draw is inside the pool: guarantee applies"),
        Some(false) => println!(
            "   {}",
            "Draw falls outside the pool: no guarantee applies".yellow()
        ),
        None => {}
    }

    println!();
    for (game, score) in report.games.iter().zip(&report.conference.scores) {
        println!(
            "   #{} {} {}",
            game.id(),
            game_numbers(game.mask(), report.draw.mask()),
            hits_label(score.hits)
        );
    }

    print_conference(&report.conference);
}

/// Print the hit breakdown and financial summary of a conference
pub fn print_conference(conference: &Conference) {
    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    for level in (11..=15).rev() {
        let count = conference.games_with(level);
        let line = format!("   {level} points: {count} game(s)");
        if count > 0 {
            println!("{}", line.bright_green());
        } else {
            println!("{}", line.bright_black());
        }
    }

    println!("\n💰 {}", "Financial summary:".bright_cyan().bold());
    println!("   Total cost:   {}", conference.cost);
    println!(
        "   Total prizes: {}",
        conference.prize.to_string().bright_green()
    );
    let balance = if conference.balance.is_negative() {
        conference.balance.to_string().red().bold()
    } else {
        format!("+{}", conference.balance).green().bold()
    };
    println!("   Balance:      {balance}");
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Pools tested:     {}", result.total_runs);
    let pct = if result.total_runs > 0 {
        result.guaranteed as f64 / result.total_runs as f64 * 100.0
    } else {
        0.0
    };
    println!(
        "   Guaranteed:       {} {}",
        result.guaranteed,
        format!("({pct:.1}%)").green()
    );
    if result.exhausted > 0 {
        println!(
            "   Exhausted:        {} {}",
            result.exhausted,
            format!("(budget {})", result.attempt_budget).red()
        );
    }
    println!(
        "   Average attempts: {}",
        format!("{:.1}", result.average_attempts)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_attempts).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_attempts).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Slowest run:      {}ms", result.slowest.as_millis());
    println!("   Pools/second:     {:.2}", result.runs_per_second);

    if result.guaranteed > 0 {
        println!("\n📈 {}", "Attempts until success:".bright_cyan().bold());
        for (&bucket, &count) in &result.attempt_distribution {
            let share = count as f64 / result.guaranteed as f64 * 100.0;
            let bar_width = (share / 2.5) as usize;
            let bar = format!(
                "{}{}",
                "█".repeat(bar_width).green(),
                "░"
                    .repeat(40_usize.saturating_sub(bar_width))
                    .bright_black()
            );
            let upper = bucket + result.bucket_width - 1;
            println!("   {bucket:4}-{upper:<4} {bar} {count:4} ({share:5.1}%)");
        }
    }
}
