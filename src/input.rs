//! Prompt input parsing.
//!
//! Pure validators for every line the player can type. Each returns `None`
//! (or `false`) for input the prompt loop should re-ask; the loops
//! themselves live in the interactive shell.

use crate::betting::BetType;
use crate::session::Session;

/// Answer to the bet-type prompt: a menu choice or the quit token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BetTypeChoice {
    Choice(BetType),
    Quit,
}

/// Parses the bet-type menu line: `q`/`Q` quits, `1..=4` picks a bet type.
pub fn parse_bet_type(line: &str) -> Option<BetTypeChoice> {
    let line = line.trim();
    if line.eq_ignore_ascii_case("q") {
        return Some(BetTypeChoice::Quit);
    }
    let menu = BetType::all();
    match line.parse::<usize>() {
        Ok(n) if (1..=menu.len()).contains(&n) => Some(BetTypeChoice::Choice(menu[n - 1])),
        _ => None,
    }
}

/// Parses a 1-based horse number into a 0-based index, checking the field
/// size and, for an Exacta runner-up, distinctness from the first pick.
pub fn parse_horse(line: &str, horse_count: usize, exclude: Option<usize>) -> Option<usize> {
    match line.trim().parse::<usize>() {
        Ok(n) if (1..=horse_count).contains(&n) => {
            let horse = n - 1;
            if exclude == Some(horse) {
                None
            } else {
                Some(horse)
            }
        }
        _ => None,
    }
}

/// Parses a stake the session can cover: positive and at most the current
/// balance. A stake of the entire balance is accepted; NaN fails the range
/// checks and re-prompts.
pub fn parse_stake(line: &str, session: &Session) -> Option<f64> {
    match line.trim().parse::<f64>() {
        Ok(stake) if session.can_cover(stake) => Some(stake),
        _ => None,
    }
}

/// The continue prompt: only `y` (any case) keeps the session going.
pub fn is_affirmative(line: &str) -> bool {
    line.trim().eq_ignore_ascii_case("y")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bet_type_menu_choices() {
        assert_eq!(
            parse_bet_type("1"),
            Some(BetTypeChoice::Choice(BetType::Win))
        );
        assert_eq!(
            parse_bet_type(" 4 \n"),
            Some(BetTypeChoice::Choice(BetType::Exacta))
        );
        assert_eq!(parse_bet_type("q"), Some(BetTypeChoice::Quit));
        assert_eq!(parse_bet_type("Q"), Some(BetTypeChoice::Quit));
    }

    #[test]
    fn test_bet_type_rejects_out_of_menu() {
        assert_eq!(parse_bet_type("0"), None);
        assert_eq!(parse_bet_type("5"), None);
        assert_eq!(parse_bet_type("win"), None);
        assert_eq!(parse_bet_type(""), None);
    }

    #[test]
    fn test_horse_number_is_one_based() {
        assert_eq!(parse_horse("1", 6, None), Some(0));
        assert_eq!(parse_horse("6\n", 6, None), Some(5));
        assert_eq!(parse_horse("0", 6, None), None);
        assert_eq!(parse_horse("7", 6, None), None);
        assert_eq!(parse_horse("two", 6, None), None);
    }

    #[test]
    fn test_exacta_runner_up_must_differ() {
        assert_eq!(parse_horse("3", 6, Some(2)), None);
        assert_eq!(parse_horse("4", 6, Some(2)), Some(3));
    }

    #[test]
    fn test_stake_boundaries() {
        let session = Session::new(1000.0);
        assert_eq!(parse_stake("100", &session), Some(100.0));
        assert_eq!(parse_stake("1000", &session), Some(1000.0), "all-in accepted");
        assert_eq!(parse_stake("1000.01", &session), None);
        assert_eq!(parse_stake("0", &session), None);
        assert_eq!(parse_stake("-50", &session), None);
        assert_eq!(parse_stake("ten", &session), None);
        assert_eq!(parse_stake("NaN", &session), None);
    }

    #[test]
    fn test_affirmative_is_y_only() {
        assert!(is_affirmative("y"));
        assert!(is_affirmative("Y\n"));
        assert!(!is_affirmative("yes"));
        assert!(!is_affirmative("n"));
        assert!(!is_affirmative(""));
    }
}
