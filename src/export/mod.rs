//! Plain-text and spreadsheet renderings of a closure
//!
//! Both formats are produced as strings; writing them anywhere is the
//! caller's business.

use crate::core::constants::GAME_SIZE;
use crate::core::{Game, InputError, parse_numbers};

/// Byte-order mark so spreadsheet tools detect UTF-8
pub const CSV_BOM: char = '\u{feff}';

/// Most games a list can hold (ids are `u8`)
pub const MAX_GAMES: usize = u8::MAX as usize;

/// One game per line, two-digit numbers separated by single spaces
///
/// # Examples
/// ```
/// use lotofacil_closure::core::Game;
/// use lotofacil_closure::export::to_txt;
///
/// let game = Game::from_numbers(1, &(1..=15).collect::<Vec<u8>>()).unwrap();
/// assert_eq!(to_txt(&[game]), "01 02 03 04 05 06 07 08 09 10 11 12 13 14 15");
/// ```
#[must_use]
pub fn to_txt(games: &[Game]) -> String {
    games
        .iter()
        .map(|game| game.mask().to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Semicolon-separated table with a header row, prefixed by a UTF-8 BOM
///
/// Header is `Game;D1;..;D15`; each row is `Game <id>;n1;..;n15`.
#[must_use]
pub fn to_csv(games: &[Game]) -> String {
    let header = std::iter::once("Game".to_string())
        .chain((1..=GAME_SIZE).map(|column| format!("D{column}")))
        .collect::<Vec<_>>()
        .join(";");

    let rows = games.iter().map(|game| {
        std::iter::once(format!("Game {}", game.id()))
            .chain(game.mask().iter().map(|n| n.to_string()))
            .collect::<Vec<_>>()
            .join(";")
    });

    let lines: Vec<String> = std::iter::once(header).chain(rows).collect();
    format!("{CSV_BOM}{}", lines.join("\n"))
}

/// Read games back from the plain-text format
///
/// Blank lines are skipped; games are numbered 1.. in order of appearance.
///
/// # Errors
/// Returns `InputError::TooManyGames` for more than 255 games, otherwise the
/// first `InputError` found on any line.
pub fn parse_txt(text: &str) -> Result<Vec<Game>, InputError> {
    let lines: Vec<&str> = text.lines().filter(|line| !line.trim().is_empty()).collect();
    if lines.len() > MAX_GAMES {
        return Err(InputError::TooManyGames {
            max: MAX_GAMES,
            actual: lines.len(),
        });
    }

    lines
        .into_iter()
        .zip(1..=u8::MAX)
        .map(|(line, id)| Game::from_numbers(id, &parse_numbers(line)?))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_games() -> Vec<Game> {
        vec![
            Game::from_numbers(1, &(1..=15).collect::<Vec<u8>>()).unwrap(),
            Game::from_numbers(2, &(7..=21).collect::<Vec<u8>>()).unwrap(),
        ]
    }

    #[test]
    fn txt_lines_are_two_digit_tokens() {
        let text = to_txt(&two_games());
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1], "07 08 09 10 11 12 13 14 15 16 17 18 19 20 21");
        assert!(
            lines
                .iter()
                .all(|line| line.split(' ').all(|token| token.len() == 2))
        );
    }

    #[test]
    fn csv_has_bom_header_and_rows() {
        let csv = to_csv(&two_games());
        assert!(csv.starts_with('\u{feff}'));

        let lines: Vec<&str> = csv.trim_start_matches(CSV_BOM).lines().collect();
        assert_eq!(
            lines[0],
            "Game;D1;D2;D3;D4;D5;D6;D7;D8;D9;D10;D11;D12;D13;D14;D15"
        );
        assert_eq!(lines[1], "Game 1;1;2;3;4;5;6;7;8;9;10;11;12;13;14;15");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn csv_of_no_games_is_header_only() {
        let csv = to_csv(&[]);
        assert_eq!(csv.lines().count(), 1);
    }

    #[test]
    fn parse_txt_reads_export_back() {
        let games = two_games();
        let parsed = parse_txt(&format!("\n{}\n\n", to_txt(&games))).unwrap();
        assert_eq!(parsed, games);
    }

    #[test]
    fn parse_txt_limits_game_count() {
        let line = "01 02 03 04 05 06 07 08 09 10 11 12 13 14 15\n";

        let games = parse_txt(&line.repeat(MAX_GAMES)).unwrap();
        assert_eq!(games.len(), 255);
        assert_eq!(games.last().map(Game::id), Some(255));

        assert_eq!(
            parse_txt(&line.repeat(300)),
            Err(InputError::TooManyGames {
                max: 255,
                actual: 300
            })
        );
    }

    #[test]
    fn parse_txt_rejects_short_line() {
        let result = parse_txt("01 02 03");
        assert!(matches!(
            result,
            Err(InputError::WrongCount {
                expected: 15,
                actual: 3
            })
        ));
    }
}
