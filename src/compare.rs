//! Card comparison, including the "suit up" house rule.

use crate::card::{Card, JOKER_RANK};
use crate::error::CompareError;

/// Outcome of comparing two cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    /// Both cards have the same rank.
    Tie,
    /// The first card outranks the second.
    FirstWins,
    /// The second card outranks the first.
    SecondWins,
    /// Different ranks but the same suit, while "suit up" is active.
    SuitMatch,
}

/// Validates a card's rank for comparison (Joker = 0, otherwise 2..=14).
const fn numeric_rank(card: Card) -> Result<u8, CompareError> {
    match card.rank {
        JOKER_RANK | 2..=14 => Ok(card.rank),
        _ => Err(CompareError::InvalidCard(card)),
    }
}

/// Compares two cards.
///
/// Rank equality is checked before the suit, so [`Comparison::SuitMatch`] is
/// only produced for cards of *different* rank: two cards of equal rank and
/// equal suit tie even while "suit up" is active. That ordering is how the
/// house rule is played, and callers depend on it.
///
/// # Errors
///
/// Returns [`CompareError::InvalidCard`] if either rank is unrecognized.
pub fn compare(
    card1: Card,
    card2: Card,
    suit_up_active: bool,
) -> Result<Comparison, CompareError> {
    let rank1 = numeric_rank(card1)?;
    let rank2 = numeric_rank(card2)?;

    if rank1 == rank2 {
        Ok(Comparison::Tie)
    } else if suit_up_active && card1.suit == card2.suit {
        // Both suits are present here: two Jokers already tied on rank.
        Ok(Comparison::SuitMatch)
    } else if rank1 > rank2 {
        Ok(Comparison::FirstWins)
    } else {
        Ok(Comparison::SecondWins)
    }
}
