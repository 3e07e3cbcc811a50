//! Formatting utilities for terminal output

use crate::commands::GenerateReport;
use crate::core::NumberSet;
use crate::core::constants::{GUARANTEE_THRESHOLD, MIN_PRIZE_HITS};
use colored::{ColoredString, Colorize};

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Bar for how many of the 8 games contain a number
#[must_use]
pub fn frequency_bar(count: u8, games: usize) -> String {
    create_progress_bar(f64::from(count), games as f64, games)
}

/// Render a game's numbers, highlighting those in `highlight`
///
/// Pass `NumberSet::EMPTY` for no highlighting.
#[must_use]
pub fn game_numbers(game: NumberSet, highlight: NumberSet) -> String {
    game.iter()
        .map(|n| {
            let cell = format!("{n:02}");
            if highlight.contains(n) {
                cell.black().on_bright_green().bold().to_string()
            } else {
                cell
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Colored "N pts" label; 11 or more is a prize
#[must_use]
pub fn hits_label(hits: u8) -> ColoredString {
    let text = format!("{hits:2} pts");
    if hits >= MIN_PRIZE_HITS {
        text.bright_green().bold()
    } else {
        text.bright_black()
    }
}

/// Thousands-separated integer, e.g. `54,264`
#[must_use]
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// One-line note for a search that ran out of attempts, `None` when it succeeded
#[must_use]
pub fn exhaustion_notice(report: &GenerateReport) -> Option<String> {
    (!report.result.guaranteed).then(|| {
        format!(
            "No {GUARANTEE_THRESHOLD}-point closure found in {} attempts (seed {}); \
             try another seed or a larger --attempts",
            report.result.attempts, report.seed
        )
    })
}
