//! Prize conference against an actual draw
//!
//! Hits come from the same bitmask primitive the proof uses; prizes follow the
//! fixed Lotofácil table (11 to 15 points) and every game costs R$ 3.50.

use crate::core::constants::{COST_PER_GAME_CENTS, MIN_PRIZE_HITS, PRIZE_TABLE_CENTS};
use crate::core::{Draw, Game};
use std::fmt;
use std::ops::{Add, Sub};

/// A money amount in cents
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Cents(pub i64);

impl Cents {
    /// Value in reais, for display and float comparisons
    #[must_use]
    pub fn as_reais(self) -> f64 {
        self.0 as f64 / 100.0
    }

    #[must_use]
    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }
}

impl Add for Cents {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Cents {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl fmt::Display for Cents {
    /// `R$ 1000000.00`, `-R$ 21.00`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{sign}R$ {}.{:02}", abs / 100, abs % 100)
    }
}

/// Prize paid for a single game with `hits` points (zero below 11)
///
/// # Examples
/// ```
/// use lotofacil_closure::scoring::{Cents, prize_for};
///
/// assert_eq!(prize_for(10), Cents(0));
/// assert_eq!(prize_for(11), Cents(700));
/// assert_eq!(prize_for(15), Cents(100_000_000));
/// ```
#[must_use]
pub fn prize_for(hits: u8) -> Cents {
    hits.checked_sub(MIN_PRIZE_HITS)
        .and_then(|level| PRIZE_TABLE_CENTS.get(usize::from(level)))
        .map_or(Cents(0), |&cents| Cents(cents))
}

/// Hits of one game against the draw
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameScore {
    pub game_id: u8,
    pub hits: u8,
    pub prize: Cents,
}

/// Outcome of checking a set of games against a draw
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conference {
    pub scores: Vec<GameScore>,
    /// Winning games per level, index 0 = 11 points .. index 4 = 15 points
    pub hit_count: [u32; 5],
    pub cost: Cents,
    pub prize: Cents,
    pub balance: Cents,
}

impl Conference {
    /// Winning games at `hits` points (0 outside 11..=15)
    #[must_use]
    pub fn games_with(&self, hits: u8) -> u32 {
        hits.checked_sub(MIN_PRIZE_HITS)
            .and_then(|level| self.hit_count.get(usize::from(level)))
            .copied()
            .unwrap_or(0)
    }

    /// Best single-game hit count (0 for no games)
    #[must_use]
    pub fn best_hits(&self) -> u8 {
        self.scores.iter().map(|s| s.hits).max().unwrap_or(0)
    }
}

/// Score every game against the draw and total the prizes
///
/// # Examples
/// ```
/// use lotofacil_closure::core::{Draw, Game};
/// use lotofacil_closure::scoring::{Cents, score};
///
/// let game = Game::from_numbers(1, &(1..=15).collect::<Vec<u8>>()).unwrap();
/// let draw = Draw::new(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 20, 21, 22, 23]).unwrap();
///
/// let conference = score(&[game], draw);
/// assert_eq!(conference.scores[0].hits, 11);
/// assert_eq!(conference.prize, Cents(700));
/// assert_eq!(conference.balance, Cents(350));
/// ```
#[must_use]
pub fn score(games: &[Game], draw: Draw) -> Conference {
    let mut hit_count = [0u32; 5];
    let mut prize = Cents(0);

    let scores: Vec<GameScore> = games
        .iter()
        .map(|game| {
            let hits = game.hits(draw.mask());
            let game_prize = prize_for(hits);
            if let Some(slot) = hits
                .checked_sub(MIN_PRIZE_HITS)
                .and_then(|level| hit_count.get_mut(usize::from(level)))
            {
                *slot += 1;
            }
            prize = prize + game_prize;
            GameScore {
                game_id: game.id(),
                hits,
                prize: game_prize,
            }
        })
        .collect();

    let cost = Cents(COST_PER_GAME_CENTS * scores.len() as i64);

    Conference {
        scores,
        hit_count,
        cost,
        prize,
        balance: prize - cost,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(id: u8, numbers: &[u8]) -> Game {
        Game::from_numbers(id, numbers).unwrap()
    }

    #[test]
    fn eleven_hits_pays_seven_reais() {
        let g = game(1, &(1..=15).collect::<Vec<u8>>());
        let draw = Draw::new(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 20, 21, 22, 23]).unwrap();

        let conference = score(&[g], draw);
        assert_eq!(conference.scores[0].hits, 11);
        assert!((conference.prize.as_reais() - 7.0).abs() < f64::EPSILON);
        assert_eq!(conference.games_with(11), 1);
        assert_eq!(conference.cost, Cents(350));
    }

    #[test]
    fn prize_table_levels() {
        assert_eq!(prize_for(0), Cents(0));
        assert_eq!(prize_for(12), Cents(1_400));
        assert_eq!(prize_for(13), Cents(3_500));
        assert_eq!(prize_for(14), Cents(100_000));
        assert_eq!(prize_for(16), Cents(0));
    }

    #[test]
    fn eight_games_tally_and_balance() {
        let draw = Draw::new(&(1..=15).collect::<Vec<u8>>()).unwrap();
        let games = vec![
            game(1, &(1..=15).collect::<Vec<u8>>()),  // 15
            game(2, &(2..=16).collect::<Vec<u8>>()),  // 14
            game(3, &(3..=17).collect::<Vec<u8>>()),  // 13
            game(4, &(4..=18).collect::<Vec<u8>>()),  // 12
            game(5, &(5..=19).collect::<Vec<u8>>()),  // 11
            game(6, &(6..=20).collect::<Vec<u8>>()),  // 10
            game(7, &(11..=25).collect::<Vec<u8>>()), // 5
            game(8, &(5..=19).collect::<Vec<u8>>()),  // 11
        ];

        let conference = score(&games, draw);
        assert_eq!(conference.hit_count, [2, 1, 1, 1, 1]);
        assert_eq!(conference.best_hits(), 15);
        assert_eq!(conference.cost, Cents(2_800));
        assert_eq!(
            conference.prize,
            Cents(100_000_000 + 100_000 + 3_500 + 1_400 + 700 + 700)
        );
        assert_eq!(conference.balance, conference.prize - Cents(2_800));
        assert_eq!(conference.scores[5].prize, Cents(0));
    }

    #[test]
    fn losing_draw_has_negative_balance() {
        let games = vec![game(1, &(1..=15).collect::<Vec<u8>>())];
        let draw = Draw::new(&(11..=25).collect::<Vec<u8>>()).unwrap();

        let conference = score(&games, draw);
        assert_eq!(conference.prize, Cents(0));
        assert_eq!(conference.balance, Cents(-350));
        assert!(conference.balance.is_negative());
        assert_eq!(conference.games_with(11), 0);
    }

    #[test]
    fn money_display() {
        assert_eq!(Cents(700).to_string(), "R$ 7.00");
        assert_eq!(Cents(-2_100).to_string(), "-R$ 21.00");
        assert_eq!(Cents(100_000_005).to_string(), "R$ 1000000.05");
        assert_eq!(Cents(0).to_string(), "R$ 0.00");
    }
}
