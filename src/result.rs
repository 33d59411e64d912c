//! Result types for discard evaluation and recommendation.

extern crate alloc;

use alloc::vec::Vec;

use crate::discard::DiscardOption;

/// Expected points of one discard, averaged over every possible cut card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExpectedValue {
    /// Mean score of the four kept cards.
    pub hand: f64,
    /// Mean score of the two discards with the cut.
    ///
    /// This is a partial crib estimate: the two cards the other player adds
    /// to the crib are unknown and not modelled.
    pub crib: f64,
    /// `hand + crib` when the player owns the crib, `hand - crib` otherwise.
    pub combined: f64,
}

/// A discard option paired with its expected value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evaluation {
    /// The discard and the kept cards.
    pub option: DiscardOption,
    /// Expected points of the option.
    pub value: ExpectedValue,
}

/// Full analysis of a hand for one role.
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    /// Whether the analysis was made for the crib owner.
    pub owns_crib: bool,
    /// Every discard, best first.
    pub ranked: Vec<Evaluation>,
    /// The discards within tolerance of the best, best first.
    pub best: Vec<DiscardOption>,
}

/// How a chosen discard compares to the optimal play.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Grade {
    /// Evaluation of the chosen discard.
    pub chosen: Evaluation,
    /// Evaluation of the top-ranked discard.
    pub best: Evaluation,
    /// Whether the choice is within tolerance of the best.
    pub optimal: bool,
    /// Zero-based position of the choice in the ranking.
    pub position: usize,
    /// Expected points given up compared to the best discard.
    pub shortfall: f64,
}

impl Grade {
    /// Training points earned by the choice: 1 if optimal, 0 otherwise.
    #[must_use]
    pub const fn points(&self) -> u8 {
        if self.optimal { 1 } else { 0 }
    }
}

/// Analyses of the same hand as dealer and as non-dealer.
#[derive(Debug, Clone, PartialEq)]
pub struct RoleComparison {
    /// Analysis when the player owns the crib.
    pub dealer: Analysis,
    /// Analysis when the opponent owns the crib.
    pub pone: Analysis,
}

impl RoleComparison {
    /// Returns whether the top-ranked discard is the same for both roles.
    #[must_use]
    pub fn same_discard(&self) -> bool {
        match (self.dealer.ranked.first(), self.pone.ranked.first()) {
            (Some(dealer), Some(pone)) => dealer.option == pone.option,
            _ => false,
        }
    }

    /// Combined value of the best dealer discard minus the best non-dealer one.
    #[must_use]
    pub fn dealer_advantage(&self) -> f64 {
        let best = |analysis: &Analysis| analysis.ranked.first().map_or(0.0, |e| e.value.combined);
        best(&self.dealer) - best(&self.pone)
    }
}
