//! Card types and deck utilities.

use core::fmt;
use core::str::FromStr;

use crate::error::CardError;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Suit {
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
    /// Spades.
    Spades,
}

impl Suit {
    /// All four suits in deck order.
    pub const ALL: [Self; 4] = [Self::Hearts, Self::Diamonds, Self::Clubs, Self::Spades];

    /// Returns the one-letter code used in card text (`H`, `D`, `C`, `S`).
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Hearts => 'H',
            Self::Diamonds => 'D',
            Self::Clubs => 'C',
            Self::Spades => 'S',
        }
    }

    /// Parses a one-letter suit code, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidSuit`] for any other character.
    pub const fn from_symbol(symbol: char) -> Result<Self, CardError> {
        match symbol.to_ascii_uppercase() {
            'H' => Ok(Self::Hearts),
            'D' => Ok(Self::Diamonds),
            'C' => Ok(Self::Clubs),
            'S' => Ok(Self::Spades),
            _ => Err(CardError::InvalidSuit(symbol)),
        }
    }

    const fn index(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A playing card.
///
/// Cards order by rank first and suit second, which is the order hands are
/// displayed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Card {
    rank: u8,
    suit: Suit,
}

impl Card {
    /// Creates a new card.
    ///
    /// The rank is 1 = Ace through 10, then 11 = Jack, 12 = Queen, 13 = King.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidRank`] if the rank is outside 1..=13.
    pub const fn new(suit: Suit, rank: u8) -> Result<Self, CardError> {
        if rank == 0 || rank > 13 {
            return Err(CardError::InvalidRank(rank));
        }
        Ok(Self { rank, suit })
    }

    /// Builds a card whose rank is known to be valid.
    pub(crate) const fn from_parts(suit: Suit, rank: u8) -> Self {
        Self { rank, suit }
    }

    /// Returns the rank (1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
    #[must_use]
    pub const fn rank(self) -> u8 {
        self.rank
    }

    /// Returns the suit.
    #[must_use]
    pub const fn suit(self) -> Suit {
        self.suit
    }

    /// Returns the counting value used for fifteens.
    ///
    /// Face cards count 10 and the Ace counts 1.
    #[must_use]
    pub const fn value(self) -> u8 {
        if self.rank > 10 { 10 } else { self.rank }
    }

    /// Returns whether this card is a Jack.
    #[must_use]
    pub const fn is_jack(self) -> bool {
        self.rank == 11
    }

    /// Position of the card in a 52-card deck, unique per card.
    #[must_use]
    pub const fn index(self) -> u8 {
        self.suit.index() * 13 + self.rank - 1
    }

    /// Single-bit mask of this card within a 52-bit deck set.
    pub(crate) const fn bit(self) -> u64 {
        1 << self.index()
    }

    const fn rank_code(self) -> &'static str {
        match self.rank {
            1 => "A",
            2 => "2",
            3 => "3",
            4 => "4",
            5 => "5",
            6 => "6",
            7 => "7",
            8 => "8",
            9 => "9",
            10 => "10",
            11 => "J",
            12 => "Q",
            _ => "K",
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank_code(), self.suit.symbol())
    }
}

impl FromStr for Card {
    type Err = CardError;

    /// Parses text such as `AH`, `10d`, `TD` or `qs`.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let text = text.trim();
        let mut chars = text.chars();
        let suit = chars.next_back().ok_or(CardError::Malformed)?;
        let rank = chars.as_str();
        if rank.is_empty() {
            return Err(CardError::Malformed);
        }

        let rank = match rank.as_bytes() {
            [code] if code.is_ascii_alphabetic() => match code.to_ascii_uppercase() {
                b'A' => 1,
                b'T' => 10,
                b'J' => 11,
                b'Q' => 12,
                b'K' => 13,
                _ => return Err(CardError::Malformed),
            },
            digits if digits.len() <= 2 && digits.iter().all(u8::is_ascii_digit) => {
                rank.parse::<u8>().map_err(|_| CardError::Malformed)?
            }
            _ => return Err(CardError::Malformed),
        };

        Self::new(Suit::from_symbol(suit)?, rank)
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;

/// Returns every card of a standard deck, suit by suit.
///
/// Each call builds a fresh iterator, so the deck can be walked any number
/// of times.
pub fn deck() -> impl Iterator<Item = Card> + Clone {
    Suit::ALL
        .into_iter()
        .flat_map(|suit| (1..=13).map(move |rank| Card::from_parts(suit, rank)))
}

/// Returns the cards of a standard deck that are not in `used`.
///
/// ```
/// use cribrs::card::{remaining, Card, DECK_SIZE};
///
/// let used: Vec<Card> = ["5H", "5D"].iter().map(|c| c.parse().unwrap()).collect();
/// assert_eq!(remaining(&used).count(), DECK_SIZE - 2);
/// ```
pub fn remaining(used: &[Card]) -> impl Iterator<Item = Card> + Clone + use<> {
    let mask = mask_of(used);
    deck().filter(move |card| mask & card.bit() == 0)
}

/// Deck-set bitmask of the given cards.
pub(crate) fn mask_of(cards: &[Card]) -> u64 {
    cards.iter().fold(0, |mask, card| mask | card.bit())
}
