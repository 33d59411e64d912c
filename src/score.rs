//! Cribbage hand scoring.
//!
//! A hand is scored against the cut card by five independent rules: fifteens,
//! pairs, runs, flush and nobs. Each rule appends the combinations it finds to
//! the breakdown and the total is the sum of their points.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

use crate::card::{Card, mask_of};
use crate::combo::{Combo, subsets};
use crate::error::HandError;

/// Number of cards held in a scored hand or crib.
pub const HELD_SIZE: usize = 4;

/// Scoring category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScoreKind {
    /// Cards whose values sum to fifteen (2 points each).
    Fifteen,
    /// Two cards of the same rank (2 points each).
    Pair,
    /// Three or more consecutive ranks (1 point per card).
    Run,
    /// Four held cards of one suit (4 points, 5 with the cut).
    Flush,
    /// Jack of the cut card's suit (1 point).
    Nobs,
}

impl fmt::Display for ScoreKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Fifteen => "fifteen",
            Self::Pair => "pair",
            Self::Run => "run",
            Self::Flush => "flush",
            Self::Nobs => "nobs",
        };
        f.write_str(name)
    }
}

/// Which flush rule applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ScoreMode {
    /// A hand: four held cards of one suit make a flush.
    #[default]
    Hand,
    /// A crib: the flush needs the cut card as well.
    Crib,
}

/// A single scoring combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredCombo {
    /// The rule that awarded the points.
    pub kind: ScoreKind,
    /// Points awarded.
    pub points: u8,
    /// The cards that form the combination.
    pub cards: Combo,
}

/// Total score of a hand with its breakdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Score {
    total: u8,
    breakdown: Vec<ScoredCombo>,
}

impl Score {
    fn from_breakdown(breakdown: Vec<ScoredCombo>) -> Self {
        let total = breakdown.iter().map(|combo| combo.points).sum();
        Self { total, breakdown }
    }

    /// Returns the total points.
    #[must_use]
    pub const fn total(&self) -> u8 {
        self.total
    }

    /// Returns the scoring combinations in rule order.
    #[must_use]
    pub fn breakdown(&self) -> &[ScoredCombo] {
        &self.breakdown
    }

    /// Returns the points awarded by one rule.
    #[must_use]
    pub fn points_for(&self, kind: ScoreKind) -> u8 {
        self.breakdown
            .iter()
            .filter(|combo| combo.kind == kind)
            .map(|combo| combo.points)
            .sum()
    }
}

struct Input<'a> {
    held: &'a [Card],
    cut: Card,
    all: Combo,
    mode: ScoreMode,
}

type Rule = fn(&Input<'_>, &mut Vec<ScoredCombo>);

const RULES: [Rule; 5] = [fifteens, pairs, runs, flush, nobs];

/// Scores a four-card hand with the cut card.
///
/// ```
/// use cribrs::card::Card;
/// use cribrs::score::score;
///
/// let hand: Vec<Card> = ["5S", "5H", "5D", "JC"].iter().map(|c| c.parse().unwrap()).collect();
/// let cut: Card = "5C".parse().unwrap();
/// assert_eq!(score(&hand, cut).unwrap().total(), 29);
/// ```
///
/// # Errors
///
/// Returns an error if `hand` does not hold exactly four cards or if the hand
/// and the cut are not five distinct cards.
pub fn score(hand: &[Card], cut: Card) -> Result<Score, HandError> {
    check_held(hand, cut)?;
    Ok(score_cards(hand, cut, ScoreMode::Hand))
}

/// Scores a four-card crib with the cut card.
///
/// Identical to [`score`] except that a flush only counts when the cut card
/// shares the suit of all four crib cards.
///
/// # Errors
///
/// Returns an error under the same conditions as [`score`].
pub fn score_crib(crib: &[Card], cut: Card) -> Result<Score, HandError> {
    check_held(crib, cut)?;
    Ok(score_cards(crib, cut, ScoreMode::Crib))
}

fn check_held(held: &[Card], cut: Card) -> Result<(), HandError> {
    if held.len() != HELD_SIZE {
        return Err(HandError::WrongSize {
            expected: HELD_SIZE,
            found: held.len(),
        });
    }
    crate::hand::check_distinct(held)?;
    if mask_of(held) & cut.bit() != 0 {
        return Err(HandError::DuplicateCard(cut));
    }
    Ok(())
}

/// Scores any number of held cards (up to four) with the cut card.
///
/// Used directly for the partial crib made of the two discards. Inputs are
/// assumed distinct.
pub(crate) fn score_cards(held: &[Card], cut: Card, mode: ScoreMode) -> Score {
    let mut cards = [cut; HELD_SIZE + 1];
    cards[..held.len()].copy_from_slice(held);
    let input = Input {
        held,
        cut,
        all: Combo::from_slice(&cards[..=held.len()]),
        mode,
    };

    let mut breakdown = Vec::new();
    for rule in RULES {
        rule(&input, &mut breakdown);
    }
    Score::from_breakdown(breakdown)
}

fn fifteens(input: &Input<'_>, out: &mut Vec<ScoredCombo>) {
    for size in 2..=input.all.len() {
        out.extend(
            subsets(&input.all, size)
                .filter(|combo| combo.value() == 15)
                .map(|cards| ScoredCombo {
                    kind: ScoreKind::Fifteen,
                    points: 2,
                    cards,
                }),
        );
    }
}

fn pairs(input: &Input<'_>, out: &mut Vec<ScoredCombo>) {
    out.extend(
        subsets(&input.all, 2)
            .filter(|combo| combo[0].rank() == combo[1].rank())
            .map(|cards| ScoredCombo {
                kind: ScoreKind::Pair,
                points: 2,
                cards,
            }),
    );
}

/// Scores the longest runs only; a double run yields one entry per parallel
/// run and shorter runs inside a longer one are never counted.
fn runs(input: &Input<'_>, out: &mut Vec<ScoredCombo>) {
    for size in (3..=input.all.len()).rev() {
        let before = out.len();
        out.extend(
            subsets(&input.all, size)
                .filter(|combo| is_run(combo))
                .map(|cards| ScoredCombo {
                    kind: ScoreKind::Run,
                    points: size as u8,
                    cards,
                }),
        );
        if out.len() > before {
            return;
        }
    }
}

/// Distinct consecutive ranks. Subsets keep the input order, so ranks are
/// checked through a bitmask rather than by sorting.
fn is_run(cards: &[Card]) -> bool {
    let ranks = cards.iter().fold(0u16, |mask, card| mask | (1 << card.rank()));
    if ranks.count_ones() as usize != cards.len() {
        return false;
    }
    let shifted = ranks >> ranks.trailing_zeros();
    shifted & (shifted + 1) == 0
}

fn flush(input: &Input<'_>, out: &mut Vec<ScoredCombo>) {
    let Some((first, rest)) = input.held.split_first() else {
        return;
    };
    if input.held.len() != HELD_SIZE || rest.iter().any(|card| card.suit() != first.suit()) {
        return;
    }

    if input.cut.suit() == first.suit() {
        out.push(ScoredCombo {
            kind: ScoreKind::Flush,
            points: 5,
            cards: input.all,
        });
    } else if input.mode == ScoreMode::Hand {
        out.push(ScoredCombo {
            kind: ScoreKind::Flush,
            points: 4,
            cards: Combo::from_slice(input.held),
        });
    }
}

fn nobs(input: &Input<'_>, out: &mut Vec<ScoredCombo>) {
    if let Some(jack) = input
        .held
        .iter()
        .find(|card| card.is_jack() && card.suit() == input.cut.suit())
    {
        out.push(ScoredCombo {
            kind: ScoreKind::Nobs,
            points: 1,
            cards: Combo::from_slice(&[*jack, input.cut]),
        });
    }
}
