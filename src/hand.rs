//! The six-card hand dealt before the discard.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use crate::card::Card;
use crate::error::HandError;

/// Number of cards dealt to a player.
pub const HAND_SIZE: usize = 6;

/// Returns an error naming the first repeated card, if any.
pub(crate) fn check_distinct(cards: &[Card]) -> Result<(), HandError> {
    let mut seen = 0u64;
    for card in cards {
        if seen & card.bit() != 0 {
            return Err(HandError::DuplicateCard(*card));
        }
        seen |= card.bit();
    }
    Ok(())
}

/// Parses whitespace or comma separated card text such as `"AH 5D KC"`.
///
/// # Errors
///
/// Returns an error if a card is malformed or repeated.
pub fn parse_cards(text: &str) -> Result<Vec<Card>, HandError> {
    let cards = text
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(str::parse)
        .collect::<Result<Vec<Card>, _>>()?;
    check_distinct(&cards)?;
    Ok(cards)
}

/// A dealt hand of six distinct cards.
///
/// Cards are kept sorted by rank then suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hand {
    cards: [Card; HAND_SIZE],
}

impl Hand {
    /// Creates a hand from six distinct cards.
    ///
    /// # Errors
    ///
    /// Returns an error if `cards` does not hold exactly six cards or holds
    /// the same card twice.
    pub fn new(cards: &[Card]) -> Result<Self, HandError> {
        let cards: [Card; HAND_SIZE] = cards.try_into().map_err(|_| HandError::WrongSize {
            expected: HAND_SIZE,
            found: cards.len(),
        })?;
        check_distinct(&cards)?;
        Ok(Self::from_distinct(cards))
    }

    /// Builds a hand from cards already known to be distinct.
    pub(crate) fn from_distinct(mut cards: [Card; HAND_SIZE]) -> Self {
        cards.sort_unstable();
        Self { cards }
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub const fn cards(&self) -> &[Card; HAND_SIZE] {
        &self.cards
    }

    /// Returns whether the hand holds `card`.
    #[must_use]
    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }
}

impl FromStr for Hand {
    type Err = HandError;

    /// Parses six cards such as `"AH 5D KC QS 10H 7C"` or `"AH,5D,KC,QS,10H,7C"`.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Self::new(&parse_cards(text)?)
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}
