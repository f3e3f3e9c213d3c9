//! Odds board generation.
//!
//! Each round every horse draws a fresh relative strength; strengths are
//! normalized into win probabilities and inverted into fair decimal odds.

use crate::constants::{STRENGTH_MAX, STRENGTH_MIN};
use rand::Rng;

/// One round's odds: per-horse strength, win probability, and fair odds.
///
/// Probabilities sum to 1 across the field, and `fair_odds[i] * win_prob[i]`
/// is 1 for every horse (up to float rounding). A board is fixed for the
/// round it was generated in and discarded afterwards.
#[derive(Debug, Clone)]
pub struct OddsBoard {
    strengths: Vec<f64>,
    win_probs: Vec<f64>,
    fair_odds: Vec<f64>,
}

impl OddsBoard {
    /// Draws `horse_count` strengths uniformly from the strength range and
    /// normalizes them into a board.
    pub fn generate(horse_count: usize, rng: &mut impl Rng) -> Self {
        let strengths = (0..horse_count)
            .map(|_| rng.gen_range(STRENGTH_MIN..STRENGTH_MAX))
            .collect();
        Self::from_strengths(strengths)
    }

    /// Builds a board from fixed strengths. Used by tests and scripted
    /// scenarios that need exact odds.
    pub fn from_strengths(strengths: Vec<f64>) -> Self {
        let total: f64 = strengths.iter().sum();
        let win_probs: Vec<f64> = strengths.iter().map(|s| s / total).collect();
        let fair_odds = win_probs.iter().map(|p| 1.0 / p).collect();
        Self {
            strengths,
            win_probs,
            fair_odds,
        }
    }

    pub fn horse_count(&self) -> usize {
        self.strengths.len()
    }

    pub fn strength(&self, horse: usize) -> f64 {
        self.strengths[horse]
    }

    pub fn win_prob(&self, horse: usize) -> f64 {
        self.win_probs[horse]
    }

    pub fn fair_odds(&self, horse: usize) -> f64 {
        self.fair_odds[horse]
    }

    /// Horse with the highest win probability. The headless simulator bets
    /// on this; ties go to the lower index.
    pub fn favorite(&self) -> usize {
        let mut best = 0;
        for horse in 1..self.win_probs.len() {
            if self.win_probs[horse] > self.win_probs[best] {
                best = horse;
            }
        }
        best
    }
}
