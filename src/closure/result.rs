//! Outcome records of a closure search

use crate::core::Game;
use crate::core::constants::GUARANTEE_THRESHOLD;
use std::fmt;
use std::time::Duration;

/// Terminal state of a search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchStatus {
    /// A candidate set passed the proof
    Accepted,
    /// The attempt budget ran out without a qualifying set
    Exhausted,
}

/// Result of one closure search
///
/// On exhaustion `games` is empty, `min_points` is 0 and `attempts` equals the
/// budget. Exhaustion is a normal outcome, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationResult {
    pub games: Vec<Game>,
    pub min_points: u8,
    pub guaranteed: bool,
    pub attempts: u32,
    /// Combinations scanned by the accepting proof (0 on exhaustion)
    pub combinations_tested: u64,
    pub elapsed: Duration,
}

impl GenerationResult {
    pub(crate) const fn accepted(
        games: Vec<Game>,
        min_points: u8,
        attempts: u32,
        combinations_tested: u64,
        elapsed: Duration,
    ) -> Self {
        Self {
            games,
            min_points,
            guaranteed: min_points >= GUARANTEE_THRESHOLD,
            attempts,
            combinations_tested,
            elapsed,
        }
    }

    pub(crate) const fn exhausted(attempts: u32, elapsed: Duration) -> Self {
        Self {
            games: Vec::new(),
            min_points: 0,
            guaranteed: false,
            attempts,
            combinations_tested: 0,
            elapsed,
        }
    }

    #[must_use]
    pub const fn status(&self) -> SearchStatus {
        if self.guaranteed {
            SearchStatus::Accepted
        } else {
            SearchStatus::Exhausted
        }
    }

    /// Wall-clock time in whole milliseconds
    #[must_use]
    pub fn time_ms(&self) -> u64 {
        u64::try_from(self.elapsed.as_millis()).unwrap_or(u64::MAX)
    }

    /// Compare two results ignoring wall-clock time
    #[must_use]
    pub fn same_outcome(&self, other: &Self) -> bool {
        self.games == other.games
            && self.min_points == other.min_points
            && self.guaranteed == other.guaranteed
            && self.attempts == other.attempts
            && self.combinations_tested == other.combinations_tested
    }
}

/// A search or proof aborted through its cancellation flag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cancelled {
    /// Attempts started before the flag was observed
    pub attempts: u32,
}

impl fmt::Display for Cancelled {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Search cancelled after {} attempts", self.attempts)
    }
}

impl std::error::Error for Cancelled {}
