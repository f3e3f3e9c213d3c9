//! Bet settlement.
//!
//! Pure payout math: a bet, a stake, a finishing order, and the round's odds
//! board go in; a settlement comes out. Balance mutation stays in the shell.

use crate::betting::types::{Bet, Settlement};
use crate::odds::OddsBoard;

/// Settles a bet against a finished race.
///
/// Payout multipliers are the fair ones implied by the odds board: straight
/// fair odds for Win, the probability of the top-two (top-three) slots
/// approximated as `2p` (`3p`) for Place (Show), and the product of the two
/// picked probabilities for an Exacta.
pub fn settle(bet: &Bet, stake: f64, order: &[usize], board: &OddsBoard) -> Settlement {
    match *bet {
        Bet::Win { horse } => {
            if order[0] == horse {
                Settlement {
                    message: "🏆 WIN! You nailed it!",
                    payout: stake * board.fair_odds(horse),
                }
            } else {
                Settlement {
                    message: "❌ Lose.",
                    payout: 0.0,
                }
            }
        }
        Bet::Place { horse } => {
            if order[..2].contains(&horse) {
                Settlement {
                    message: "🏅 PLACE! Not bad!",
                    payout: stake * (1.0 / (2.0 * board.win_prob(horse))),
                }
            } else {
                Settlement {
                    message: "❌ No place.",
                    payout: 0.0,
                }
            }
        }
        Bet::Show { horse } => {
            if order[..3].contains(&horse) {
                Settlement {
                    message: "🎖 SHOW! You placed top 3!",
                    payout: stake * (1.0 / (3.0 * board.win_prob(horse))),
                }
            } else {
                Settlement {
                    message: "❌ No show.",
                    payout: 0.0,
                }
            }
        }
        Bet::Exacta { first, second } => {
            if order[0] == first && order[1] == second {
                Settlement {
                    message: "🎯 EXACTA! Dead on!",
                    payout: stake * (1.0 / (board.win_prob(first) * board.win_prob(second))),
                }
            } else {
                Settlement {
                    message: "❌ Exacta missed.",
                    payout: 0.0,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Equal strengths: every horse has win_prob 1/4 and fair odds 4.0
    fn even_board() -> OddsBoard {
        OddsBoard::from_strengths(vec![2.0, 2.0, 2.0, 2.0])
    }

    const ORDER: [usize; 4] = [2, 0, 1, 3];

    #[test]
    fn test_win_pays_fair_odds_when_first() {
        let settlement = settle(&Bet::Win { horse: 2 }, 50.0, &ORDER, &even_board());
        assert!(settlement.is_win());
        assert!((settlement.payout - 200.0).abs() < 1e-9);
    }

    #[test]
    fn test_win_loses_when_second() {
        let settlement = settle(&Bet::Win { horse: 0 }, 50.0, &ORDER, &even_board());
        assert!(!settlement.is_win());
        assert_eq!(settlement.payout, 0.0);
    }

    #[test]
    fn test_place_pays_for_first_or_second() {
        let board = even_board();
        // 1/(2 * 0.25) = 2x
        for horse in [2, 0] {
            let settlement = settle(&Bet::Place { horse }, 10.0, &ORDER, &board);
            assert!((settlement.payout - 20.0).abs() < 1e-9);
        }
        let third = settle(&Bet::Place { horse: 1 }, 10.0, &ORDER, &board);
        assert_eq!(third.payout, 0.0);
    }

    #[test]
    fn test_show_pays_for_top_three() {
        let board = even_board();
        // 1/(3 * 0.25) = 4/3x
        for horse in [2, 0, 1] {
            let settlement = settle(&Bet::Show { horse }, 30.0, &ORDER, &board);
            assert!((settlement.payout - 40.0).abs() < 1e-9);
        }
        let last = settle(&Bet::Show { horse: 3 }, 30.0, &ORDER, &board);
        assert_eq!(last.payout, 0.0);
    }

    #[test]
    fn test_winner_also_places_and_shows() {
        let board = even_board();
        let winner = ORDER[0];
        assert!(settle(&Bet::Place { horse: winner }, 5.0, &ORDER, &board).is_win());
        assert!(settle(&Bet::Show { horse: winner }, 5.0, &ORDER, &board).is_win());
    }

    #[test]
    fn test_exacta_pays_exact_order() {
        let settlement = settle(
            &Bet::Exacta { first: 2, second: 0 },
            10.0,
            &ORDER,
            &even_board(),
        );
        // 1/(0.25 * 0.25) = 16x
        assert!((settlement.payout - 160.0).abs() < 1e-9);
    }

    #[test]
    fn test_exacta_reversed_pair_loses() {
        // Both picks finished top two, but in the wrong order
        let settlement = settle(
            &Bet::Exacta { first: 0, second: 2 },
            10.0,
            &ORDER,
            &even_board(),
        );
        assert!(!settlement.is_win());
        assert_eq!(settlement.payout, 0.0);
    }

    #[test]
    fn test_uneven_board_win_payout() {
        // Strengths 1,1,1: horse 2 carries fair odds 3.0
        let board = OddsBoard::from_strengths(vec![1.0, 1.0, 1.0]);
        let settlement = settle(&Bet::Win { horse: 2 }, 100.0, &[2, 0, 1], &board);
        assert!((settlement.payout - 300.0).abs() < 1e-9);
    }

    #[test]
    fn test_bet_type_roundtrip() {
        use crate::betting::types::BetType;
        assert_eq!(Bet::Win { horse: 0 }.bet_type(), BetType::Win);
        assert_eq!(
            Bet::Exacta { first: 0, second: 1 }.bet_type(),
            BetType::Exacta
        );
        assert_eq!(BetType::all().len(), 4);
        assert_eq!(BetType::Exacta.name(), "Exacta");
    }
}
