//! Game state types.

/// Game state.
///
/// A round moves through the states in declaration order and then loops back
/// to [`GameState::LeadPlay`] unless the game is over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Waiting for the leader to play.
    LeadPlay,
    /// Waiting for the other player to follow.
    FollowPlay,
    /// Both cards are on the table.
    Resolve,
    /// Checking whether both hands need more cards.
    ReplenishCheck,
    /// Checking the clinch condition and the round limit.
    TerminationCheck,
    /// No more rounds will be played.
    GameOver,
}
