use cribrs::{
    Analysis, AnalysisOptions, Card, Deal, DiscardOption, Evaluation, Grade, Hand, RoleComparison,
    Score, ScoreKind, Shuffler, Suit, analyze, compare_roles, grade, parse_cards, score,
    score_crib,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct WasmTrainer {
    shuffler: Shuffler,
    current: Option<Deal>,
    attempts: u32,
    correct: u32,
}

#[wasm_bindgen]
impl WasmTrainer {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u32) -> Self {
        Self {
            shuffler: Shuffler::new(seed as u64),
            current: None,
            attempts: 0,
            correct: 0,
        }
    }

    pub fn reset(&mut self, seed: u32) {
        *self = Self::new(seed);
    }

    /// Deals a new hand and returns it.
    pub fn deal(&mut self) -> Result<JsValue, JsValue> {
        let deal = self.shuffler.deal();
        self.current = Some(deal);
        to_js_value(&JsDeal::from(deal))
    }

    /// Grades a discard of the current hand, e.g. `"5H KD"`.
    pub fn submit(&mut self, discard: &str, tolerance: f64) -> Result<JsValue, JsValue> {
        let deal = self
            .current
            .ok_or_else(|| JsValue::from_str("no hand has been dealt"))?;
        let discard = parse_cards(discard).map_err(js_err)?;
        let options = AnalysisOptions::default()
            .with_owns_crib(deal.owns_crib)
            .with_tolerance(tolerance);
        let analysis = analyze(&deal.hand, &options);
        let result = grade(&analysis.ranked, &discard, tolerance).map_err(js_err)?;

        self.attempts += 1;
        self.correct += u32::from(result.points());

        to_js_value(&JsSubmission {
            grade: JsGrade::from(result),
            analysis: JsAnalysis::from(analysis),
            attempts: self.attempts,
            correct: self.correct,
        })
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn correct(&self) -> u32 {
        self.correct
    }
}

/// Ranks every discard of a six-card hand given as text.
#[wasm_bindgen]
pub fn analyze_hand(hand: &str, owns_crib: bool, tolerance: f64) -> Result<JsValue, JsValue> {
    let hand: Hand = hand.parse().map_err(js_err)?;
    let options = AnalysisOptions::default()
        .with_owns_crib(owns_crib)
        .with_tolerance(tolerance);
    to_js_value(&JsAnalysis::from(analyze(&hand, &options)))
}

/// Analyses a six-card hand as dealer and as non-dealer.
#[wasm_bindgen]
pub fn compare_hand(hand: &str, tolerance: f64) -> Result<JsValue, JsValue> {
    let hand: Hand = hand.parse().map_err(js_err)?;
    to_js_value(&JsComparison::from(compare_roles(&hand, tolerance)))
}

/// Scores four cards with a cut card, as a hand or as a crib.
#[wasm_bindgen]
pub fn score_hand(cards: &str, cut: &str, crib: bool) -> Result<JsValue, JsValue> {
    let cards = parse_cards(cards).map_err(js_err)?;
    let cut: Card = cut.parse().map_err(js_err)?;
    let result = if crib {
        score_crib(&cards, cut)
    } else {
        score(&cards, cut)
    }
    .map_err(js_err)?;
    to_js_value(&JsScore::from(&result))
}

#[derive(Serialize)]
struct JsCard {
    suit: &'static str,
    rank: u8,
    text: String,
}

#[derive(Serialize)]
struct JsDeal {
    cards: Vec<JsCard>,
    owns_crib: bool,
}

impl From<Deal> for JsDeal {
    fn from(deal: Deal) -> Self {
        Self {
            cards: deal.hand.cards().iter().copied().map(card_to_js).collect(),
            owns_crib: deal.owns_crib,
        }
    }
}

#[derive(Serialize)]
struct JsOption {
    discard: Vec<JsCard>,
    kept: Vec<JsCard>,
}

impl From<DiscardOption> for JsOption {
    fn from(option: DiscardOption) -> Self {
        Self {
            discard: option.discard().iter().copied().map(card_to_js).collect(),
            kept: option.kept().iter().copied().map(card_to_js).collect(),
        }
    }
}

#[derive(Serialize)]
struct JsEvaluation {
    option: JsOption,
    hand: f64,
    partial_crib: f64,
    combined: f64,
}

impl From<Evaluation> for JsEvaluation {
    fn from(evaluation: Evaluation) -> Self {
        Self {
            option: JsOption::from(evaluation.option),
            hand: evaluation.value.hand,
            partial_crib: evaluation.value.crib,
            combined: evaluation.value.combined,
        }
    }
}

#[derive(Serialize)]
struct JsAnalysis {
    owns_crib: bool,
    ranked: Vec<JsEvaluation>,
    best: Vec<JsOption>,
}

impl From<Analysis> for JsAnalysis {
    fn from(analysis: Analysis) -> Self {
        Self {
            owns_crib: analysis.owns_crib,
            ranked: analysis.ranked.into_iter().map(JsEvaluation::from).collect(),
            best: analysis.best.into_iter().map(JsOption::from).collect(),
        }
    }
}

#[derive(Serialize)]
struct JsComparison {
    dealer: JsAnalysis,
    pone: JsAnalysis,
    same_discard: bool,
    dealer_advantage: f64,
}

impl From<RoleComparison> for JsComparison {
    fn from(comparison: RoleComparison) -> Self {
        let same_discard = comparison.same_discard();
        let dealer_advantage = comparison.dealer_advantage();
        Self {
            dealer: JsAnalysis::from(comparison.dealer),
            pone: JsAnalysis::from(comparison.pone),
            same_discard,
            dealer_advantage,
        }
    }
}

#[derive(Serialize)]
struct JsGrade {
    chosen: JsEvaluation,
    best: JsEvaluation,
    optimal: bool,
    points: u8,
    position: u32,
    shortfall: f64,
}

impl From<Grade> for JsGrade {
    fn from(grade: Grade) -> Self {
        Self {
            chosen: JsEvaluation::from(grade.chosen),
            best: JsEvaluation::from(grade.best),
            optimal: grade.optimal,
            points: grade.points(),
            position: grade.position as u32,
            shortfall: grade.shortfall,
        }
    }
}

#[derive(Serialize)]
struct JsSubmission {
    grade: JsGrade,
    analysis: JsAnalysis,
    attempts: u32,
    correct: u32,
}

#[derive(Serialize)]
struct JsCombo {
    kind: &'static str,
    points: u8,
    cards: Vec<JsCard>,
}

#[derive(Serialize)]
struct JsScore {
    total: u8,
    breakdown: Vec<JsCombo>,
}

impl From<&Score> for JsScore {
    fn from(result: &Score) -> Self {
        Self {
            total: result.total(),
            breakdown: result
                .breakdown()
                .iter()
                .map(|combo| JsCombo {
                    kind: kind_to_str(combo.kind),
                    points: combo.points,
                    cards: combo.cards.iter().copied().map(card_to_js).collect(),
                })
                .collect(),
        }
    }
}

fn card_to_js(card: Card) -> JsCard {
    JsCard {
        suit: suit_to_str(card.suit()),
        rank: card.rank(),
        text: card.to_string(),
    }
}

fn suit_to_str(suit: Suit) -> &'static str {
    match suit {
        Suit::Hearts => "Hearts",
        Suit::Diamonds => "Diamonds",
        Suit::Clubs => "Clubs",
        Suit::Spades => "Spades",
    }
}

fn kind_to_str(kind: ScoreKind) -> &'static str {
    match kind {
        ScoreKind::Fifteen => "Fifteen",
        ScoreKind::Pair => "Pair",
        ScoreKind::Run => "Run",
        ScoreKind::Flush => "Flush",
        ScoreKind::Nobs => "Nobs",
    }
}

fn js_err<E: core::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}
