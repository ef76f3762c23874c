//! Error types for game operations.

use thiserror::Error;

use crate::card::Card;

/// Errors that can occur while parsing a card token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// The token is empty.
    #[error("empty card token")]
    Empty,
    /// The rank portion is unrecognized.
    #[error("unrecognized card rank")]
    UnknownRank,
    /// The suit letter is unrecognized.
    #[error("unrecognized card suit")]
    UnknownSuit,
}

/// Errors that can occur while comparing cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CompareError {
    /// A card with an unrecognized rank reached the comparator.
    #[error("unrecognized rank on card {0}")]
    InvalidCard(Card),
}

/// Errors that can occur while playing rounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// The game has already finished.
    #[error("game is already over")]
    GameOver,
    /// The round cap was reached; a rule interaction is suspected of looping.
    #[error("round cap exceeded, suspected infinite loop")]
    ExceededRoundCap,
    /// A card was required but neither hand nor discard could supply one.
    #[error("player had no card to play")]
    NoCards,
    /// Card comparison failed.
    #[error(transparent)]
    Compare(#[from] CompareError),
}
