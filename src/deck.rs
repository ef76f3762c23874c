//! Deck construction and the initial split.

use alloc::vec::Vec;

use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Suit};

/// Creates a shuffled standard 52-card deck (no Jokers).
#[must_use]
pub fn shuffled_deck(rng: &mut ChaCha8Rng) -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);

    for suit in [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades] {
        for rank in 2..=14 {
            cards.push(Card::new(suit, rank));
        }
    }

    cards.shuffle(rng);
    cards
}

/// Splits a deck between the two players.
///
/// Player one receives the first half (floor division); player two receives
/// the remainder, including the extra card when the length is odd.
#[must_use]
pub fn split(mut deck: Vec<Card>) -> (Vec<Card>, Vec<Card>) {
    let second = deck.split_off(deck.len() / 2);
    (deck, second)
}
