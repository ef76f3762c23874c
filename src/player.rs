//! Player pile state: hand, discard, and the cards on the table.

use alloc::vec::Vec;

use crate::card::Card;

/// A player's piles.
///
/// `hand` is the draw pile, `discard` the win pile, and `played_cards` the
/// face-up cards for the round in progress. A player is out of the game when
/// both `hand` and `discard` are empty; `played_cards` is transient and does
/// not count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    /// Draw pile; the top of the pile is the tail.
    hand: Vec<Card>,
    /// Win pile, in the order cards were won.
    discard: Vec<Card>,
    /// Cards played during the current round and its war chain.
    played_cards: Vec<Card>,
}

impl Player {
    /// Creates a player holding the given initial hand.
    #[must_use]
    pub fn new(hand: Vec<Card>) -> Self {
        Self {
            hand,
            discard: Vec::new(),
            played_cards: Vec::new(),
        }
    }

    /// Returns whether the player is out of cards (hand and discard both
    /// empty). The table cards do not count.
    #[must_use]
    pub fn has_no_cards(&self) -> bool {
        self.hand.is_empty() && self.discard.is_empty()
    }

    /// Moves the discard pile, reversed, into the empty hand.
    fn refill_hand(&mut self) {
        if !self.hand.is_empty() {
            return;
        }
        self.discard.reverse();
        self.hand = core::mem::take(&mut self.discard);
    }

    /// Plays one card onto the table.
    ///
    /// Refills the hand from the discard pile first if the hand is empty. The
    /// card is taken from the top (tail) of the hand, or from the bottom
    /// (head) when `from_bottom` is set, and appended to the played cards.
    ///
    /// Returns `None` only when the player has no cards at all; callers are
    /// expected to check [`Self::has_no_cards`] before asking for a card.
    pub fn play_card(&mut self, from_bottom: bool) -> Option<Card> {
        if self.hand.is_empty() {
            self.refill_hand();
        }

        let card = if from_bottom {
            if self.hand.is_empty() {
                return None;
            }
            self.hand.remove(0)
        } else {
            self.hand.pop()?
        };

        self.played_cards.push(card);
        Some(card)
    }

    /// Clears the table for a new top-level round.
    pub fn reset_table(&mut self) {
        self.played_cards.clear();
    }

    /// Appends won cards to the discard pile.
    pub fn collect_spoils(&mut self, spoils: &[Card]) {
        self.discard.extend_from_slice(spoils);
    }

    /// Returns the draw pile, top of the pile last.
    #[must_use]
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    /// Returns the win pile in the order cards were won.
    #[must_use]
    pub fn discard(&self) -> &[Card] {
        &self.discard
    }

    /// Returns the cards played this round, in play order.
    #[must_use]
    pub fn played_cards(&self) -> &[Card] {
        &self.played_cards
    }

    /// Returns the most recently played card.
    #[must_use]
    pub fn last_played(&self) -> Option<Card> {
        self.played_cards.last().copied()
    }

    /// Returns the number of cards the player still owns (hand + discard).
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.hand.len() + self.discard.len()
    }
}
