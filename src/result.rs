//! Round and game result types.

use crate::card::Card;
use crate::game::MAX_ROUNDS;
use crate::player::Seat;

/// Result of a single round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    /// 1-based round number.
    pub number: u8,
    /// The seat that led the round.
    pub leader: Seat,
    /// The card led.
    pub lead_card: Card,
    /// The card played in reply.
    pub follow_card: Card,
    /// The seat that won the round (and leads the next one).
    pub winner: Seat,
}

/// Why the game stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// A player reached the clinch score while the opponent had scored.
    Clinched(Seat),
    /// The round limit was reached.
    RoundLimit,
}

/// Final outcome of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    /// One player won every round.
    ShotTheMoon {
        /// The player who won every round.
        winner: Seat,
    },
    /// One player finished ahead.
    Win {
        /// The player with the higher score.
        winner: Seat,
        /// The winner's score.
        winner_score: u8,
        /// The loser's score.
        loser_score: u8,
    },
    /// Both players finished level.
    Tie {
        /// The shared score.
        score: u8,
    },
}

impl GameOutcome {
    /// Computes the outcome from the final scores of Player 1 and Player 2.
    ///
    /// A 16-0 finish is checked before the ordinary comparison.
    #[must_use]
    pub const fn from_scores(scores: [u8; 2]) -> Self {
        let [one, two] = scores;
        let moon = MAX_ROUNDS;

        if one == 0 && two == moon {
            Self::ShotTheMoon { winner: Seat::Two }
        } else if two == 0 && one == moon {
            Self::ShotTheMoon { winner: Seat::One }
        } else if one > two {
            Self::Win {
                winner: Seat::One,
                winner_score: one,
                loser_score: two,
            }
        } else if two > one {
            Self::Win {
                winner: Seat::Two,
                winner_score: two,
                loser_score: one,
            }
        } else {
            Self::Tie { score: one }
        }
    }

    /// Returns the winning seat, or `None` for a tie.
    #[must_use]
    pub const fn winner(&self) -> Option<Seat> {
        match *self {
            Self::ShotTheMoon { winner } | Self::Win { winner, .. } => Some(winner),
            Self::Tie { .. } => None,
        }
    }
}

/// Summary of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameResult {
    /// The final outcome.
    pub outcome: GameOutcome,
    /// Final scores of Player 1 and Player 2.
    pub scores: [u8; 2],
    /// Number of rounds played.
    pub rounds_played: u8,
    /// Why the game stopped.
    pub termination: Termination,
}
