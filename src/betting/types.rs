//! Bet menu entries, placed bets, and settlement results.

/// The four wager flavors offered in the betting menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BetType {
    Win,
    Place,
    Show,
    Exacta,
}

impl BetType {
    /// All bet types in menu order.
    pub fn all() -> [BetType; 4] {
        [BetType::Win, BetType::Place, BetType::Show, BetType::Exacta]
    }

    pub fn name(&self) -> &'static str {
        match self {
            BetType::Win => "Win",
            BetType::Place => "Place",
            BetType::Show => "Show",
            BetType::Exacta => "Exacta",
        }
    }
}

/// A placed bet. Horse indices are 0-based; an Exacta's two picks are kept
/// distinct by the selection prompts, not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bet {
    Win { horse: usize },
    Place { horse: usize },
    Show { horse: usize },
    Exacta { first: usize, second: usize },
}

impl Bet {
    pub fn bet_type(&self) -> BetType {
        match self {
            Bet::Win { .. } => BetType::Win,
            Bet::Place { .. } => BetType::Place,
            Bet::Show { .. } => BetType::Show,
            Bet::Exacta { .. } => BetType::Exacta,
        }
    }
}

/// Outcome of settling one bet against one race.
///
/// `payout` is the total returned to the player including the stake, or 0.0
/// when the bet lost (the stake is forfeited).
#[derive(Debug, Clone, PartialEq)]
pub struct Settlement {
    pub message: &'static str,
    pub payout: f64,
}

impl Settlement {
    pub fn is_win(&self) -> bool {
        self.payout > 0.0
    }
}
