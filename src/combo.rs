//! Fixed-size card subsets and their enumeration.

use core::fmt;
use core::iter::FusedIterator;
use core::ops::Deref;

use crate::card::{Card, Suit};

/// Largest card set the enumerator accepts (a dealt hand).
pub const MAX_CARDS: usize = 6;

const FILLER: Card = Card::from_parts(Suit::Spades, 1);

/// A subset of at most [`MAX_CARDS`] cards stored inline.
///
/// Dereferences to a card slice.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Combo {
    cards: [Card; MAX_CARDS],
    len: u8,
}

impl Combo {
    /// Creates an empty subset.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: [FILLER; MAX_CARDS],
            len: 0,
        }
    }

    /// Copies up to [`MAX_CARDS`] cards into a subset.
    pub(crate) fn from_slice(cards: &[Card]) -> Self {
        debug_assert!(cards.len() <= MAX_CARDS);
        let mut combo = Self::new();
        combo.cards[..cards.len()].copy_from_slice(cards);
        combo.len = cards.len() as u8;
        combo
    }

    fn push(&mut self, card: Card) {
        self.cards[self.len as usize] = card;
        self.len += 1;
    }

    /// Returns the cards as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Card] {
        &self.cards[..self.len as usize]
    }

    /// Sum of the counting values of the cards.
    #[must_use]
    pub fn value(&self) -> u8 {
        self.iter().map(|card| card.value()).sum()
    }
}

impl Default for Combo {
    fn default() -> Self {
        Self::new()
    }
}

impl Deref for Combo {
    type Target = [Card];

    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl fmt::Debug for Combo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl fmt::Display for Combo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, card) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}

/// Iterator over every `k`-card subset of a card slice.
///
/// Subsets are walked as bitmasks in increasing numeric order (Gosper's
/// hack), so each subset is produced exactly once.
#[derive(Debug, Clone)]
pub struct Subsets<'a> {
    cards: &'a [Card],
    mask: u32,
    limit: u32,
}

/// Returns all `size`-card subsets of `cards`.
///
/// Yields nothing when `size` exceeds the number of cards or when `cards`
/// holds more than [`MAX_CARDS`] cards, and a single empty subset when `size`
/// is zero.
///
/// ```
/// use cribrs::card::Card;
/// use cribrs::combo::subsets;
///
/// let cards: Vec<Card> = ["AH", "2H", "3H", "4H"].iter().map(|c| c.parse().unwrap()).collect();
/// assert_eq!(subsets(&cards, 2).count(), 6);
/// ```
pub fn subsets(cards: &[Card], size: usize) -> Subsets<'_> {
    if cards.len() > MAX_CARDS {
        return Subsets {
            cards,
            mask: 0,
            limit: 0,
        };
    }
    let limit = 1u32 << cards.len();
    let mask = if size > cards.len() {
        limit
    } else {
        (1u32 << size) - 1
    };
    Subsets { cards, mask, limit }
}

impl Iterator for Subsets<'_> {
    type Item = Combo;

    fn next(&mut self) -> Option<Self::Item> {
        if self.mask >= self.limit {
            return None;
        }

        let mask = self.mask;
        let mut combo = Combo::new();
        for (i, card) in self.cards.iter().enumerate() {
            if mask & (1 << i) != 0 {
                combo.push(*card);
            }
        }

        self.mask = if mask == 0 {
            self.limit
        } else {
            let low = mask & mask.wrapping_neg();
            let ripple = mask + low;
            (((ripple ^ mask) >> 2) / low) | ripple
        };

        Some(combo)
    }
}

impl FusedIterator for Subsets<'_> {}
