//! Narration events and the collaborator traits used to talk to players.
//!
//! The engine never touches a terminal. It asks a [`MoveChooser`] for card
//! selections and reports everything that happens to a [`Notifier`] as a
//! [`GameEvent`]. The [`Display`](core::fmt::Display) impls render the
//! console wording.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::card::{Card, Suit};
use crate::error::SelectionError;
use crate::result::GameOutcome;

/// Something that happened during a game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// The first leader was drawn at random.
    FirstLeader {
        /// Name of the leading player.
        player: String,
    },
    /// A new round began.
    RoundStarted {
        /// 1-based round number.
        number: u8,
        /// Name of the leading player.
        leader: String,
    },
    /// A player's hand was listed before a selection.
    HandShown {
        /// Name of the player.
        player: String,
        /// The cards, in selection order.
        cards: Vec<Card>,
    },
    /// A selection was rejected and the player will be asked again.
    SelectionRejected {
        /// Name of the player.
        player: String,
        /// Why the selection was rejected.
        error: SelectionError,
    },
    /// A card was played to the table.
    CardPlayed {
        /// Name of the player.
        player: String,
        /// The card played.
        card: Card,
    },
    /// A round was won.
    RoundWon {
        /// Name of the winner.
        player: String,
        /// The winner's score after the round.
        score: u8,
    },
    /// The front card of the deck was revealed and discarded.
    CardRevealed(Card),
    /// The deck was empty when a reveal was due.
    NothingToReveal,
    /// Both players drew more cards.
    HandsReplenished {
        /// Cards drawn by each player.
        count: usize,
    },
    /// A player clinched the game early.
    Clinched {
        /// Name of the player.
        player: String,
    },
    /// The game ended.
    GameOver {
        /// Names of Player 1 and Player 2.
        names: [String; 2],
        /// Final scores of Player 1 and Player 2.
        scores: [u8; 2],
        /// The final outcome.
        outcome: GameOutcome,
    },
}

impl fmt::Display for GameEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FirstLeader { player } => write!(f, "{player} will lead first."),
            Self::RoundStarted { leader, .. } => {
                write!(f, "--- New Round ---\n{leader} leads.")
            }
            Self::HandShown { cards, .. } => {
                for (index, card) in cards.iter().enumerate() {
                    if index > 0 {
                        f.write_str("\n")?;
                    }
                    write!(f, "{}: {card}", index + 1)?;
                }
                Ok(())
            }
            Self::SelectionRejected { error, .. } => match error {
                SelectionError::MustFollowSuit(suit) => write!(f, "You must follow suit: {suit}"),
                SelectionError::NotANumber | SelectionError::OutOfRange { .. } => {
                    f.write_str("Invalid choice. Try again.")
                }
            },
            Self::CardPlayed { player, card } => write!(f, "{player} played {card}"),
            Self::RoundWon { player, score } => {
                write!(f, "{player} wins the round and now has {score} point(s).")
            }
            Self::CardRevealed(card) => write!(f, "Revealed card: {card}"),
            Self::NothingToReveal => f.write_str("No cards left to reveal."),
            Self::HandsReplenished { count } => {
                write!(f, "Both players draw {count} more cards.")
            }
            Self::Clinched { player } => write!(f, "{player} has clinched the win!"),
            Self::GameOver {
                names,
                scores,
                outcome,
            } => {
                f.write_str("--- Game Over ---\n")?;
                match *outcome {
                    GameOutcome::ShotTheMoon { winner } => {
                        let name = &names[winner.index()];
                        write!(
                            f,
                            "{name} shot the moon! Final score: {}-{}. {name} wins!",
                            scores[0], scores[1]
                        )
                    }
                    GameOutcome::Win {
                        winner,
                        winner_score,
                        loser_score,
                    } => write!(
                        f,
                        "{} wins! {winner_score} to {loser_score}",
                        names[winner.index()]
                    ),
                    GameOutcome::Tie { .. } => f.write_str("It's a tie!"),
                }
            }
        }
    }
}

/// A request for one card selection.
///
/// Displays as the console prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionRequest<'a> {
    /// Name of the player choosing.
    pub player: &'a str,
    /// The player's hand, in the order indices refer to.
    pub hand: &'a [Card],
    /// Suit that must be followed if possible. `None` when leading.
    pub lead_suit: Option<Suit>,
}

impl fmt::Display for SelectionRequest<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, choose a card to play (1-{}): ",
            self.player,
            self.hand.len()
        )
    }
}

/// Supplies raw card selections (1-based indices as text).
pub trait MoveChooser {
    /// Returns the next line of input, or `None` once input is closed.
    fn select(&mut self, request: &SelectionRequest<'_>) -> Option<String>;
}

/// Receives game narration.
pub trait Notifier {
    /// Handles one event.
    fn notify(&mut self, event: &GameEvent);
}

impl<F> Notifier for F
where
    F: FnMut(&GameEvent),
{
    fn notify(&mut self, event: &GameEvent) {
        self(event);
    }
}
