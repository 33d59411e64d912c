//! Seeded random hand generation.

extern crate alloc;

use alloc::vec::Vec;

use rand::seq::{IndexedRandom, SliceRandom};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, deck, remaining};
use crate::hand::{HAND_SIZE, Hand};

/// A dealt hand with the role of the player receiving it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deal {
    /// The six dealt cards.
    pub hand: Hand,
    /// Whether the player is the dealer and owns the crib.
    pub owns_crib: bool,
}

/// Deals random hands from a freshly shuffled deck.
///
/// The same seed always produces the same sequence of deals.
///
/// ```
/// use cribrs::Shuffler;
///
/// let mut a = Shuffler::new(7);
/// let mut b = Shuffler::new(7);
/// assert_eq!(a.deal(), b.deal());
/// ```
#[derive(Debug, Clone)]
pub struct Shuffler {
    rng: ChaCha8Rng,
}

impl Shuffler {
    /// Creates a shuffler with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Deals six distinct cards and picks the crib owner at random.
    pub fn deal(&mut self) -> Deal {
        let mut cards: Vec<Card> = deck().collect();
        cards.shuffle(&mut self.rng);

        let mut dealt = [cards[0]; HAND_SIZE];
        dealt.copy_from_slice(&cards[..HAND_SIZE]);

        Deal {
            hand: Hand::from_distinct(dealt),
            owns_crib: self.rng.random_bool(0.5),
        }
    }

    /// Cuts a card from the deck left after `hand` is removed.
    pub fn cut(&mut self, hand: &Hand) -> Card {
        let candidates: Vec<Card> = remaining(hand.cards()).collect();
        // 46 cards are always left after six are dealt.
        *candidates
            .choose(&mut self.rng)
            .unwrap_or(&hand.cards()[0])
    }
}
