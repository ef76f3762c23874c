//! Game engine and round flow.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::deck;
use crate::error::RoundError;
use crate::options::GameOptions;
use crate::player::Player;
use crate::report::RoundSink;
use crate::result::{GameResult, GameWinner, RoundEvent, RoundOutcome, RoundReport};

mod round;
pub mod state;

pub use state::GameState;

/// A two-player game of War.
///
/// The game owns both players' piles and the round counter. Use
/// [`GameOptions`] to configure the "suit up" house rule and the round cap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    /// Game options.
    pub options: GameOptions,
    /// Current game state.
    pub state: GameState,
    /// Player one's piles.
    pub player1: Player,
    /// Player two's piles.
    pub player2: Player,
    /// Top-level rounds played so far.
    round: usize,
    /// Winner, once the game is over.
    winner: Option<GameWinner>,
}

impl Game {
    /// Creates a new game with the given seed.
    ///
    /// Builds a shuffled 52-card deck and deals half to each player. With the
    /// same seed and options the entire game plays out identically.
    ///
    /// # Example
    ///
    /// ```
    /// use warrs::{Game, GameOptions};
    ///
    /// let options = GameOptions::default();
    /// let game = Game::new(options, 42);
    /// let _ = game;
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let (hand1, hand2) = deck::split(deck::shuffled_deck(&mut rng));

        Self {
            options,
            state: GameState::InProgress,
            player1: Player::new(hand1),
            player2: Player::new(hand2),
            round: 0,
            winner: None,
        }
    }

    /// Returns the number of top-level rounds played so far.
    #[must_use]
    pub const fn rounds_played(&self) -> usize {
        self.round
    }

    /// Returns the winner, once the game is over.
    #[must_use]
    pub const fn winner(&self) -> Option<GameWinner> {
        self.winner
    }

    /// Plays one top-level round, wars and suit-ups included.
    ///
    /// Clears both players' tables, resolves the round, and applies the
    /// attrition check: a player left with no cards loses even when the round
    /// itself produced no winner.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::GameOver`] if the game has finished,
    /// [`RoundError::ExceededRoundCap`] once the configured cap is reached,
    /// and propagates comparison failures.
    pub fn play_round(&mut self) -> Result<RoundReport, RoundError> {
        if self.state != GameState::InProgress {
            return Err(RoundError::GameOver);
        }

        self.round += 1;
        if self.round >= self.options.round_cap {
            return Err(RoundError::ExceededRoundCap);
        }

        self.player1.reset_table();
        self.player2.reset_table();

        let round = self.round;
        let mut events = alloc::vec![RoundEvent::RoundStarted { round }];

        let outcome = round::resolve(
            &mut self.player1,
            &mut self.player2,
            self.options.suit_up,
            &mut events,
        )?;

        // A round with no winner can still end the game by attrition.
        let outcome = match outcome {
            RoundOutcome::Continue if self.player1.has_no_cards() => RoundOutcome::Player2Wins,
            RoundOutcome::Continue if self.player2.has_no_cards() => RoundOutcome::Player1Wins,
            other => other,
        };

        self.winner = outcome.winner();
        if self.winner.is_some() {
            self.state = GameState::Over;
        }

        Ok(RoundReport {
            round,
            outcome,
            events,
        })
    }

    /// Plays rounds until the game ends, forwarding every event to the sink.
    ///
    /// # Errors
    ///
    /// Propagates any [`RoundError`] from [`Self::play_round`].
    pub fn run(&mut self, sink: &mut dyn RoundSink) -> Result<GameResult, RoundError> {
        loop {
            let report = self.play_round()?;
            for event in &report.events {
                sink.on_event(event);
            }

            if let Some(winner) = report.outcome.winner() {
                return Ok(GameResult {
                    winner,
                    rounds: report.round,
                });
            }
        }
    }
}
