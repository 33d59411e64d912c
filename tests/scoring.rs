//! Card model, enumeration and scoring tests.

use std::collections::HashSet;

use cribrs::card::{deck, remaining};
use cribrs::{
    Card, CardError, DECK_SIZE, HandError, ScoreKind, Suit, parse_cards, score, score_crib,
    subsets,
};

fn card(suit: Suit, rank: u8) -> Card {
    Card::new(suit, rank).unwrap()
}

fn cards(text: &str) -> Vec<Card> {
    parse_cards(text).unwrap()
}

#[test]
fn card_construction_and_text() {
    let ten = card(Suit::Hearts, 10);
    assert_eq!(ten.to_string(), "10H");
    assert_eq!("10h".parse::<Card>().unwrap(), ten);
    assert_eq!("TH".parse::<Card>().unwrap(), ten);
    assert_eq!("ad".parse::<Card>().unwrap(), card(Suit::Diamonds, 1));
    assert_eq!("KS".parse::<Card>().unwrap().value(), 10);
    assert!("JC".parse::<Card>().unwrap().is_jack());

    assert_eq!(Card::new(Suit::Hearts, 0), Err(CardError::InvalidRank(0)));
    assert_eq!(Card::new(Suit::Hearts, 14), Err(CardError::InvalidRank(14)));
    assert_eq!("14H".parse::<Card>(), Err(CardError::InvalidRank(14)));
    assert_eq!("5X".parse::<Card>(), Err(CardError::InvalidSuit('X')));
    assert_eq!("ZH".parse::<Card>(), Err(CardError::Malformed));
    assert_eq!("H".parse::<Card>(), Err(CardError::Malformed));
    assert_eq!("".parse::<Card>(), Err(CardError::Malformed));
    assert_eq!("+5H".parse::<Card>(), Err(CardError::Malformed));
    assert_eq!("005H".parse::<Card>(), Err(CardError::Malformed));
    assert_eq!("1 0H".parse::<Card>(), Err(CardError::Malformed));
}

#[test]
fn deck_is_complete_and_restartable() {
    let all: HashSet<Card> = deck().collect();
    assert_eq!(all.len(), DECK_SIZE);
    assert_eq!(deck().count(), DECK_SIZE);

    let indices: HashSet<u8> = deck().map(Card::index).collect();
    assert_eq!(indices.len(), DECK_SIZE);

    let used = cards("AH 5D KC QS 10H 7C");
    let rest = remaining(&used);
    assert_eq!(rest.clone().count(), 46);
    assert!(rest.clone().all(|c| !used.contains(&c)));
    assert_eq!(rest.count(), 46);
}

#[test]
fn parse_cards_rejects_duplicates() {
    assert_eq!(cards("AH,5D, KC").len(), 3);
    assert_eq!(
        parse_cards("AH 5D AH"),
        Err(HandError::DuplicateCard(card(Suit::Hearts, 1)))
    );
    assert_eq!(
        parse_cards("AH 5Q"),
        Err(HandError::InvalidCard(CardError::InvalidSuit('Q')))
    );
}

#[test]
fn subsets_cover_every_combination_once() {
    let six = cards("AH 2H 3H 4H 5H 6H");
    let expected = [1, 6, 15, 20, 15, 6, 1];
    for (size, count) in expected.into_iter().enumerate() {
        let found: Vec<_> = subsets(&six, size).collect();
        assert_eq!(found.len(), count, "size {size}");
        assert!(found.iter().all(|combo| combo.len() == size));

        let unique: HashSet<_> = found.iter().copied().collect();
        assert_eq!(unique.len(), count);
    }

    assert_eq!(subsets(&six[..3], 4).count(), 0);
    assert_eq!(subsets(&six, 0).next().map(|combo| combo.len()), Some(0));

    let seven = cards("AH 2H 3H 4H 5H 6H 7H");
    assert_eq!(subsets(&seven, 2).count(), 0);
    assert_eq!(subsets(&seven, 0).count(), 0);
}

#[test]
fn flush_needs_four_hand_cards() {
    let hand = cards("AS 5S 9S KS");

    let mixed_cut = score(&hand, card(Suit::Hearts, 2)).unwrap();
    assert_eq!(mixed_cut.points_for(ScoreKind::Flush), 4);

    let same_cut = score(&hand, card(Suit::Spades, 2)).unwrap();
    assert_eq!(same_cut.points_for(ScoreKind::Flush), 5);

    let broken = cards("AS 5S 9S KH");
    let cut_completes = score(&broken, card(Suit::Spades, 2)).unwrap();
    assert_eq!(cut_completes.points_for(ScoreKind::Flush), 0);
}

#[test]
fn crib_flush_needs_the_cut() {
    let crib = cards("AS 5S 9S KS");
    let mixed_cut = score_crib(&crib, card(Suit::Hearts, 2)).unwrap();
    assert_eq!(mixed_cut.points_for(ScoreKind::Flush), 0);

    let same_cut = score_crib(&crib, card(Suit::Spades, 2)).unwrap();
    assert_eq!(same_cut.points_for(ScoreKind::Flush), 5);
}

#[test]
fn perfect_hand_scores_twenty_nine() {
    let hand = cards("5S 5H 5D JC");
    let result = score(&hand, card(Suit::Clubs, 5)).unwrap();

    assert_eq!(result.points_for(ScoreKind::Pair), 12);
    // Four 5+J and four 5+5+5 combinations.
    assert_eq!(result.points_for(ScoreKind::Fifteen), 16);
    assert_eq!(result.points_for(ScoreKind::Run), 0);
    assert_eq!(result.points_for(ScoreKind::Flush), 0);
    assert_eq!(result.points_for(ScoreKind::Nobs), 1);
    assert_eq!(result.total(), 29);

    let other_suit = score(&hand, card(Suit::Hearts, 10)).unwrap();
    assert_eq!(other_suit.points_for(ScoreKind::Nobs), 0);
}

#[test]
fn five_card_run_is_scored_once() {
    let hand = cards("3S 4H 5D 6C");
    let result = score(&hand, card(Suit::Spades, 7)).unwrap();

    let runs: Vec<_> = result
        .breakdown()
        .iter()
        .filter(|combo| combo.kind == ScoreKind::Run)
        .collect();
    assert_eq!(runs.len(), 1);
    assert_eq!(runs[0].points, 5);
    assert_eq!(runs[0].cards.len(), 5);

    // 3+5+7 and 4+5+6.
    assert_eq!(result.points_for(ScoreKind::Fifteen), 4);
    assert_eq!(result.total(), 9);
}

#[test]
fn double_run_scores_each_parallel_run() {
    let hand = cards("3S 3H 4D 5C");
    let result = score(&hand, card(Suit::Spades, 13)).unwrap();

    let runs: Vec<_> = result
        .breakdown()
        .iter()
        .filter(|combo| combo.kind == ScoreKind::Run)
        .collect();
    assert_eq!(runs.len(), 2);
    assert!(runs.iter().all(|run| run.points == 3));
    assert_eq!(result.points_for(ScoreKind::Run), 6);
    assert_eq!(result.points_for(ScoreKind::Pair), 2);
    // 5+K and 3+3+4+5.
    assert_eq!(result.points_for(ScoreKind::Fifteen), 4);
    assert_eq!(result.total(), 12);
}

#[test]
fn four_card_run_with_pair_on_cut() {
    let hand = cards("9H 10D JC QS");
    let result = score(&hand, card(Suit::Hearts, 12)).unwrap();

    assert_eq!(result.points_for(ScoreKind::Run), 8);
    assert_eq!(result.points_for(ScoreKind::Pair), 2);
    assert_eq!(result.points_for(ScoreKind::Fifteen), 0);
    assert_eq!(result.total(), 10);
}

#[test]
fn nineteen_hand_scores_nothing() {
    let hand = cards("2S 4H 6D 8C");
    let result = score(&hand, card(Suit::Spades, 10)).unwrap();
    assert_eq!(result.total(), 0);
    assert!(result.breakdown().is_empty());
}

#[test]
fn total_is_sum_of_breakdown_and_deterministic() {
    let hands = ["AS 2S 3S 4S", "5S 5H 10D JC", "7H 8H 8D 9C", "AC 4D 10H KS"];
    for text in hands {
        let hand = cards(text);
        for cut in remaining(&hand) {
            let first = score(&hand, cut).unwrap();
            let second = score(&hand, cut).unwrap();
            assert_eq!(first, second);

            let sum: u8 = first.breakdown().iter().map(|combo| combo.points).sum();
            assert_eq!(first.total(), sum, "{text} with {cut}");
        }
    }
}

#[test]
fn score_rejects_invalid_input() {
    let three = cards("AS 2S 3S");
    assert_eq!(
        score(&three, card(Suit::Hearts, 9)).unwrap_err(),
        HandError::WrongSize {
            expected: 4,
            found: 3
        }
    );

    let hand = cards("AS 2S 3S 4S");
    assert_eq!(
        score(&hand, card(Suit::Spades, 3)).unwrap_err(),
        HandError::DuplicateCard(card(Suit::Spades, 3))
    );

    let repeated = [
        card(Suit::Spades, 1),
        card(Suit::Spades, 1),
        card(Suit::Spades, 3),
        card(Suit::Spades, 4),
    ];
    assert_eq!(
        score(&repeated, card(Suit::Hearts, 9)).unwrap_err(),
        HandError::DuplicateCard(card(Suit::Spades, 1))
    );
    assert!(score_crib(&repeated, card(Suit::Hearts, 9)).is_err());
}
