//! Ranking and recommendation of discards.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;
use crate::discard::{DISCARD_SIZE, DiscardOption, evaluate};
use crate::error::HandError;
use crate::hand::Hand;
use crate::options::AnalysisOptions;
use crate::result::{Analysis, Evaluation, Grade, RoleComparison};

/// Default distance from the best combined value still treated as a tie.
pub const DEFAULT_TOLERANCE: f64 = 0.01;

/// Returns the evaluations ordered by combined value, best first.
///
/// The sort is stable, so equal values keep their input order.
#[must_use]
pub fn rank(evaluated: &[Evaluation]) -> Vec<Evaluation> {
    let mut ranked = evaluated.to_vec();
    ranked.sort_by(|a, b| b.value.combined.total_cmp(&a.value.combined));
    ranked
}

/// Returns every discard whose combined value is within `tolerance` of the
/// best, ordered best first.
///
/// Ties are all reported rather than broken arbitrarily. An empty input gives
/// an empty set. A negative or NaN tolerance is treated as zero, so the best
/// discards are always included.
#[must_use]
pub fn recommend(evaluated: &[Evaluation], tolerance: f64) -> Vec<DiscardOption> {
    let tolerance = clamp_tolerance(tolerance);
    let Some(best) = evaluated
        .iter()
        .map(|evaluation| evaluation.value.combined)
        .max_by(f64::total_cmp)
    else {
        return Vec::new();
    };

    rank(evaluated)
        .into_iter()
        .take_while(|evaluation| best - evaluation.value.combined <= tolerance)
        .map(|evaluation| evaluation.option)
        .collect()
}

fn clamp_tolerance(tolerance: f64) -> f64 {
    if tolerance >= 0.0 { tolerance } else { 0.0 }
}

/// Evaluates `hand` and reports the ranking and the optimal discards.
#[must_use]
pub fn analyze(hand: &Hand, options: &AnalysisOptions) -> Analysis {
    let ranked = evaluate(hand, options.owns_crib);
    let best = recommend(&ranked, options.tolerance);
    Analysis {
        owns_crib: options.owns_crib,
        ranked,
        best,
    }
}

/// Analyses `hand` both as dealer and as non-dealer.
#[must_use]
pub fn compare_roles(hand: &Hand, tolerance: f64) -> RoleComparison {
    let options = AnalysisOptions::default().with_tolerance(tolerance);
    RoleComparison {
        dealer: analyze(hand, &options.with_owns_crib(true)),
        pone: analyze(hand, &options.with_owns_crib(false)),
    }
}

/// Grades a chosen discard against the evaluated options.
///
/// # Errors
///
/// Returns an error if `discard` is not two distinct cards, or if it is not
/// one of the evaluated discards.
pub fn grade(
    evaluated: &[Evaluation],
    discard: &[Card],
    tolerance: f64,
) -> Result<Grade, HandError> {
    if discard.len() != DISCARD_SIZE {
        return Err(HandError::WrongSize {
            expected: DISCARD_SIZE,
            found: discard.len(),
        });
    }
    crate::hand::check_distinct(discard)?;
    let tolerance = clamp_tolerance(tolerance);

    let ranked = rank(evaluated);
    let Some(position) = ranked
        .iter()
        .position(|evaluation| evaluation.option.matches(discard))
    else {
        // Every option covers the whole hand, so any one of them tells which
        // card is foreign.
        let in_hand = |card: &Card| {
            ranked.first().is_some_and(|e| {
                e.option.discard().contains(card) || e.option.kept().contains(card)
            })
        };
        let missing = discard
            .iter()
            .copied()
            .find(|card| !in_hand(card))
            .unwrap_or(discard[0]);
        return Err(HandError::CardNotInHand(missing));
    };

    let chosen = ranked[position];
    let best = ranked[0];
    let shortfall = best.value.combined - chosen.value.combined;

    Ok(Grade {
        chosen,
        best,
        optimal: shortfall <= tolerance,
        position,
        shortfall,
    })
}
