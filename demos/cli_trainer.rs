//! CLI discard trainer example.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use cribrs::{
    Card, DEFAULT_TOLERANCE, Evaluation, Hand, ScoreKind, Shuffler, Suit, evaluate, grade,
    parse_cards, recommend, score,
};

fn main() {
    println!("Cribbage discard trainer (type 'q' to quit, '?' to see the answer)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut shuffler = Shuffler::new(seed);

    let mut attempts = 0u32;
    let mut correct = 0u32;

    loop {
        let deal = shuffler.deal();
        let role = if deal.owns_crib {
            "dealer (your crib)"
        } else {
            "non-dealer (opponent's crib)"
        };
        println!("\nYou are the {role}.");
        println!("Hand: {}", format_cards(deal.hand.cards()));

        let evaluated = evaluate(&deal.hand, deal.owns_crib);

        let discard = loop {
            let input = prompt_line("Discard two cards (e.g. 5H KD): ");
            match input.as_str() {
                "q" | "quit" => {
                    print_summary(attempts, correct);
                    return;
                }
                "?" => {
                    print_ranking(&evaluated, evaluated.len());
                    continue;
                }
                _ => {}
            }

            match parse_cards(&input) {
                Ok(cards) => break cards,
                Err(err) => println!("Input error: {err}"),
            }
        };

        let result = match grade(&evaluated, &discard, DEFAULT_TOLERANCE) {
            Ok(result) => result,
            Err(err) => {
                println!("Discard error: {err}");
                continue;
            }
        };

        attempts += 1;
        correct += u32::from(result.points());

        if result.optimal {
            println!("{}", colorize("Optimal discard!", "32"));
        } else {
            println!(
                "{} You gave up {:.2} points on average (ranked {} of {}).",
                colorize("Not optimal.", "31"),
                result.shortfall,
                result.position + 1,
                evaluated.len()
            );
        }

        let best = recommend(&evaluated, DEFAULT_TOLERANCE);
        let best_text: Vec<String> = best.iter().map(ToString::to_string).collect();
        println!("Best: {}", best_text.join(" | "));
        print_ranking(&evaluated, 3);

        let cut = shuffler.cut(&deal.hand);
        print_cut_result(&deal.hand, &result.chosen, cut);
        print_summary(attempts, correct);
    }
}

fn print_ranking(evaluated: &[Evaluation], count: usize) {
    println!("  #  discard    hand   crib*  combined");
    for (index, evaluation) in evaluated.iter().take(count).enumerate() {
        println!(
            "{:>3}  {:<9} {:>6.2} {:>6.2} {:>9.2}",
            index + 1,
            evaluation.option.to_string(),
            evaluation.value.hand,
            evaluation.value.crib,
            evaluation.value.combined
        );
    }
    println!("  * partial crib estimate from your two discards only");
}

fn print_cut_result(hand: &Hand, chosen: &Evaluation, cut: Card) {
    println!(
        "\nCut: {} | kept {} from {}",
        format_card(&cut),
        format_cards(chosen.option.kept()),
        format_cards(hand.cards())
    );
    let Ok(result) = score(chosen.option.kept(), cut) else {
        return;
    };
    for kind in [
        ScoreKind::Fifteen,
        ScoreKind::Pair,
        ScoreKind::Run,
        ScoreKind::Flush,
        ScoreKind::Nobs,
    ] {
        let points = result.points_for(kind);
        if points > 0 {
            println!("  {kind}: {points}");
        }
    }
    println!("  total: {}", result.total());
}

fn print_summary(attempts: u32, correct: u32) {
    if attempts == 0 {
        return;
    }
    let accuracy = f64::from(correct) / f64::from(attempts) * 100.0;
    println!("Session: {correct}/{attempts} optimal ({accuracy:.0}%)");
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn format_cards(cards: &[Card]) -> String {
    cards.iter().map(format_card).collect::<Vec<_>>().join(" ")
}

fn format_card(card: &Card) -> String {
    let color_code = match card.suit() {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs => "32",
        Suit::Spades => "34",
    };
    colorize(&card.to_string(), color_code)
}
