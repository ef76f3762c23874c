//! A War card game engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that manages the full game flow: the
//! shuffled deal, round resolution including wars and the optional "suit up"
//! house rule, and the final outcome. Display is left to a [`RoundSink`]
//! injected by the caller.
//!
//! # Example
//!
//! ```
//! use warrs::{Game, GameOptions, NullSink};
//!
//! let options = GameOptions::default().with_suit_up(true);
//! let mut game = Game::new(options, 42);
//! let _ = game.run(&mut NullSink);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod compare;
pub mod deck;
pub mod error;
pub mod game;
pub mod options;
pub mod player;
pub mod report;
pub mod result;

// Re-export main types
pub use card::{Card, DECK_SIZE, JOKER_RANK, Suit};
pub use compare::{Comparison, compare};
pub use error::{CompareError, ParseCardError, RoundError};
pub use game::{Game, GameState};
pub use options::GameOptions;
pub use player::Player;
pub use report::{NullSink, RoundSink};
pub use result::{GameResult, GameWinner, RoundEvent, RoundOutcome, RoundReport, TableView};
