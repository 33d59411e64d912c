//! Error types for engine operations.

use thiserror::Error;

use crate::card::Card;

/// Errors that can occur while building a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// Rank outside 1..=13.
    #[error("invalid rank {0}, expected 1..=13")]
    InvalidRank(u8),
    /// Unknown suit symbol.
    #[error("invalid suit '{0}', expected one of H, D, C, S")]
    InvalidSuit(char),
    /// Text that is not a `<rank><suit>` pair.
    #[error("malformed card text")]
    Malformed,
}

/// Errors that can occur when a set of cards is passed to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HandError {
    /// Wrong number of cards.
    #[error("expected {expected} cards, found {found}")]
    WrongSize {
        /// Number of cards the operation requires.
        expected: usize,
        /// Number of cards supplied.
        found: usize,
    },
    /// The same card appears twice.
    #[error("duplicate card {0}")]
    DuplicateCard(Card),
    /// A discarded card is not part of the hand.
    #[error("card {0} is not in the hand")]
    CardNotInHand(Card),
    /// A card in the input could not be parsed.
    #[error(transparent)]
    InvalidCard(#[from] CardError),
}
