//! A cribbage hand scoring and discard analysis engine with optional `no_std`
//! support.
//!
//! The crate scores a four-card hand with its cut card and, for a dealt
//! six-card hand, ranks all fifteen two-card discards by expected points over
//! every possible cut. Every entry point is a pure function of its inputs.
//!
//! # Example
//!
//! ```
//! use cribrs::{AnalysisOptions, Hand, analyze};
//!
//! let hand: Hand = "5S 5H 5D JC KD QH".parse().unwrap();
//! let analysis = analyze(&hand, &AnalysisOptions::default().with_owns_crib(false));
//! assert_eq!(analysis.ranked.len(), 15);
//! assert_eq!(analysis.best[0].to_string(), "QH, KD");
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod combo;
pub mod deal;
pub mod discard;
pub mod error;
pub mod hand;
pub mod options;
pub mod recommend;
pub mod result;
pub mod score;

// Re-export main types
pub use card::{Card, DECK_SIZE, Suit};
pub use combo::{Combo, subsets};
pub use deal::{Deal, Shuffler};
pub use discard::{DiscardOption, discard_options, evaluate, evaluate_cards};
pub use error::{CardError, HandError};
pub use hand::{HAND_SIZE, Hand, parse_cards};
pub use options::AnalysisOptions;
pub use recommend::{DEFAULT_TOLERANCE, analyze, compare_roles, grade, rank, recommend};
pub use result::{Analysis, Evaluation, ExpectedValue, Grade, RoleComparison};
pub use score::{Score, ScoreKind, ScoreMode, ScoredCombo, score, score_crib};
