//! Card types and deck constants.

use core::fmt;
use core::str::FromStr;

use crate::error::ParseCardError;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
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
    /// Returns the single-letter form used in card tokens (`c`, `d`, `h`, `s`).
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::Clubs => 'c',
            Self::Diamonds => 'd',
            Self::Hearts => 'h',
            Self::Spades => 's',
        }
    }
}

/// A playing card.
///
/// The Joker sentinel has rank [`JOKER_RANK`] and no suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The rank of the card (2-10 as-is, 11 = Jack, 12 = Queen, 13 = King,
    /// 14 = Ace, 0 = Joker).
    pub rank: u8,
    /// The suit of the card. `None` only for the Joker.
    pub suit: Option<Suit>,
}

impl Card {
    /// Creates a new card.
    ///
    /// Note: This function does not validate the rank. Values outside 2..=14
    /// are accepted here but rejected by the comparator.
    #[must_use]
    pub const fn new(suit: Suit, rank: u8) -> Self {
        Self {
            rank,
            suit: Some(suit),
        }
    }

    /// Creates the Joker sentinel.
    #[must_use]
    pub const fn joker() -> Self {
        Self {
            rank: JOKER_RANK,
            suit: None,
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(suit) = self.suit else {
            return f.write_str("Joker");
        };

        match self.rank {
            11 => write!(f, "J{}", suit.letter()),
            12 => write!(f, "Q{}", suit.letter()),
            13 => write!(f, "K{}", suit.letter()),
            14 => write!(f, "A{}", suit.letter()),
            rank => write!(f, "{rank}{}", suit.letter()),
        }
    }
}

impl FromStr for Card {
    type Err = ParseCardError;

    /// Parses a card token: rank then suit letter (`"Ah"`, `"10c"`), or the
    /// literal `"Joker"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "Joker" {
            return Ok(Self::joker());
        }

        let mut chars = s.chars();
        let suit = match chars.next_back() {
            Some('c') => Suit::Clubs,
            Some('d') => Suit::Diamonds,
            Some('h') => Suit::Hearts,
            Some('s') => Suit::Spades,
            Some(_) => return Err(ParseCardError::UnknownSuit),
            None => return Err(ParseCardError::Empty),
        };

        let rank = match chars.as_str() {
            "A" => 14,
            "K" => 13,
            "Q" => 12,
            "J" => 11,
            value => match value.parse::<u8>() {
                Ok(rank @ 2..=10) => rank,
                _ => return Err(ParseCardError::UnknownRank),
            },
        };

        Ok(Self::new(suit, rank))
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;

/// Rank of the Joker sentinel.
pub const JOKER_RANK: u8 = 0;
