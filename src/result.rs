//! Round and game result types, plus the events a round emits.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;
use crate::compare::Comparison;
use crate::player::Player;

/// Outcome of a single top-level round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    /// No winner yet; the game continues.
    Continue,
    /// Player one won the game.
    Player1Wins,
    /// Player two won the game.
    Player2Wins,
    /// The game ended in a draw.
    Draw,
}

impl RoundOutcome {
    /// Returns the game winner this outcome decides, if any.
    #[must_use]
    pub const fn winner(self) -> Option<GameWinner> {
        match self {
            Self::Continue => None,
            Self::Player1Wins => Some(GameWinner::Player1),
            Self::Player2Wins => Some(GameWinner::Player2),
            Self::Draw => Some(GameWinner::Draw),
        }
    }
}

/// Winner of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameWinner {
    /// Player one.
    Player1,
    /// Player two.
    Player2,
    /// Neither player; the final cards tied.
    Draw,
}

/// Result of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameResult {
    /// Who won.
    pub winner: GameWinner,
    /// Number of top-level rounds played.
    pub rounds: usize,
}

/// Snapshot of one player's table at comparison time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView {
    /// Cards left in the draw pile.
    pub hand_len: usize,
    /// Cards in the win pile.
    pub discard_len: usize,
    /// Cards played this round, in play order.
    pub played: Vec<Card>,
}

impl TableView {
    /// Captures the current view of a player.
    #[must_use]
    pub fn snapshot(player: &Player) -> Self {
        Self {
            hand_len: player.hand().len(),
            discard_len: player.discard().len(),
            played: player.played_cards().to_vec(),
        }
    }
}

/// An event emitted while resolving a round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundEvent {
    /// A new top-level round began.
    RoundStarted {
        /// 1-based round number.
        round: usize,
    },
    /// Two cards were compared.
    Compared {
        /// How the cards compared.
        comparison: Comparison,
        /// Player one's table at comparison time.
        player1: TableView,
        /// Player two's table at comparison time.
        player2: TableView,
    },
    /// The compared cards tied; a war begins.
    WarDeclared,
    /// The compared cards matched suits; a suit-up begins.
    SuitUpDeclared,
}

/// Report for a single call to [`Game::play_round`].
///
/// [`Game::play_round`]: crate::Game::play_round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundReport {
    /// 1-based round number.
    pub round: usize,
    /// How the round ended.
    pub outcome: RoundOutcome,
    /// Everything that happened during the round, in order.
    pub events: Vec<RoundEvent>,
}
