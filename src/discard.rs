//! Discard evaluation.
//!
//! Every two-card discard of a six-card hand is scored against each of the 46
//! cards left in the deck as the cut. The kept four cards give the hand value
//! and the two discards with the cut give a partial crib value.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

use crate::card::{Card, remaining};
use crate::combo::subsets;
use crate::error::HandError;
use crate::hand::Hand;
use crate::result::{Evaluation, ExpectedValue};
use crate::score::{HELD_SIZE, ScoreMode, score_cards};

/// Number of cards discarded to the crib.
pub const DISCARD_SIZE: usize = 2;

/// Number of possible discards from a six-card hand.
pub const DISCARD_OPTIONS: usize = 15;

/// Number of cut candidates once the six hand cards are removed.
pub const CUT_CANDIDATES: usize = 46;

/// A two-card discard and the four cards kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DiscardOption {
    discard: [Card; DISCARD_SIZE],
    kept: [Card; HELD_SIZE],
}

impl DiscardOption {
    fn split(hand: &Hand, discard: [Card; DISCARD_SIZE]) -> Self {
        let mut kept = [discard[0]; HELD_SIZE];
        let mut cards = hand.cards().iter().filter(|card| !discard.contains(card));
        for slot in &mut kept {
            if let Some(card) = cards.next() {
                *slot = *card;
            }
        }
        Self { discard, kept }
    }

    /// Returns the two discarded cards.
    #[must_use]
    pub const fn discard(&self) -> &[Card; DISCARD_SIZE] {
        &self.discard
    }

    /// Returns the four kept cards.
    #[must_use]
    pub const fn kept(&self) -> &[Card; HELD_SIZE] {
        &self.kept
    }

    /// Returns whether `cards` is this discard, in any order.
    #[must_use]
    pub fn matches(&self, cards: &[Card]) -> bool {
        cards.len() == DISCARD_SIZE && cards.iter().all(|card| self.discard.contains(card))
    }
}

impl fmt::Display for DiscardOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.discard[0], self.discard[1])
    }
}

/// Returns the 15 ways to discard two cards from `hand`.
pub fn discard_options(hand: &Hand) -> impl Iterator<Item = DiscardOption> + '_ {
    subsets(hand.cards(), DISCARD_SIZE)
        .map(move |pair| DiscardOption::split(hand, [pair[0], pair[1]]))
}

/// Evaluates every discard of `hand`, best first.
///
/// Options with equal combined value keep their enumeration order, so the
/// output is identical across calls.
#[must_use]
pub fn evaluate(hand: &Hand, owns_crib: bool) -> Vec<Evaluation> {
    let cuts: Vec<Card> = remaining(hand.cards()).collect();
    debug_assert_eq!(cuts.len(), CUT_CANDIDATES);

    let mut evaluated: Vec<Evaluation> = discard_options(hand)
        .map(|option| Evaluation {
            option,
            value: expected_value(&option, &cuts, owns_crib),
        })
        .collect();
    evaluated.sort_by(|a, b| b.value.combined.total_cmp(&a.value.combined));
    evaluated
}

/// Evaluates every discard of six caller-supplied cards.
///
/// # Errors
///
/// Returns an error if `cards` are not six distinct cards.
pub fn evaluate_cards(cards: &[Card], owns_crib: bool) -> Result<Vec<Evaluation>, HandError> {
    Ok(evaluate(&Hand::new(cards)?, owns_crib))
}

fn expected_value(option: &DiscardOption, cuts: &[Card], owns_crib: bool) -> ExpectedValue {
    let (hand_total, crib_total) = cuts.iter().fold((0u32, 0u32), |(hand, crib), &cut| {
        let kept = score_cards(option.kept(), cut, ScoreMode::Hand).total();
        let thrown = score_cards(option.discard(), cut, ScoreMode::Crib).total();
        (hand + u32::from(kept), crib + u32::from(thrown))
    });

    let count = f64::from(cuts.len() as u32);
    let hand = f64::from(hand_total) / count;
    let crib = f64::from(crib_total) / count;
    let combined = if owns_crib { hand + crib } else { hand - crib };

    ExpectedValue {
        hand,
        crib,
        combined,
    }
}
