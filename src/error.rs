//! Error types for game operations.

use thiserror::Error;

use crate::card::Suit;

/// Reasons a card selection is rejected.
///
/// These never escape [`Player::choose_card`](crate::Player::choose_card):
/// the player is told why and asked again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectionError {
    /// Input is not a whole number.
    #[error("selection is not a number")]
    NotANumber,
    /// Index is outside `1..=hand_size`.
    #[error("selection {choice} is out of range 1-{hand_size}")]
    OutOfRange {
        /// The index that was entered.
        choice: usize,
        /// The number of cards in the hand.
        hand_size: usize,
    },
    /// The player holds the lead suit but chose another suit.
    #[error("must follow suit: {0}")]
    MustFollowSuit(Suit),
}

/// Errors that can occur while playing a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlayError {
    /// Invalid game state for this operation.
    #[error("invalid game state for this operation")]
    InvalidState,
    /// The input source has no more selections.
    #[error("input closed before a card was chosen")]
    InputClosed,
    /// The player has no cards to choose from.
    #[error("player has no cards to play")]
    EmptyHand,
}
