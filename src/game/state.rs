//! Game state types.

/// Game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Rounds can still be played.
    InProgress,
    /// The game has finished; the winner is recorded on the game.
    Over,
}
