//! Players and card selection.

extern crate alloc;

use alloc::string::String;

use log::trace;

use crate::card::{Card, Suit};
use crate::error::{PlayError, SelectionError};
use crate::event::{GameEvent, MoveChooser, Notifier, SelectionRequest};
use crate::hand::Hand;

/// One of the two seats at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Seat {
    /// Player 1.
    One,
    /// Player 2.
    Two,
}

impl Seat {
    /// Returns the opposite seat.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::One => Self::Two,
            Self::Two => Self::One,
        }
    }

    /// Returns the 0-based index of the seat.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::One => 0,
            Self::Two => 1,
        }
    }
}

/// A player: a name, a hand and the number of rounds won.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    /// Display name.
    pub name: String,
    /// Cards held.
    pub hand: Hand,
    /// Rounds won so far.
    pub score: u8,
}

impl Player {
    /// Creates a player with an empty hand and no points.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hand: Hand::new(),
            score: 0,
        }
    }

    /// Validates a raw selection against the hand.
    ///
    /// Returns the 0-based index of the chosen card. The follow-suit rule
    /// applies only when `lead_suit` is set and the hand holds that suit.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is not a number, is outside
    /// `1..=hand size`, or breaks the follow-suit rule.
    pub fn check_selection(
        &self,
        input: &str,
        lead_suit: Option<Suit>,
    ) -> Result<usize, SelectionError> {
        let choice: usize = input
            .trim()
            .parse()
            .map_err(|_| SelectionError::NotANumber)?;

        let hand_size = self.hand.len();
        let index = choice
            .checked_sub(1)
            .filter(|&index| index < hand_size)
            .ok_or(SelectionError::OutOfRange { choice, hand_size })?;

        if let Some(suit) = lead_suit
            && self.hand.contains_suit(suit)
            && self.hand.get(index).is_some_and(|card| card.suit != suit)
        {
            return Err(SelectionError::MustFollowSuit(suit));
        }

        Ok(index)
    }

    /// Asks the player for a card until a valid one is chosen, then removes
    /// it from the hand and returns it.
    ///
    /// Pass `lead_suit = None` when this player is leading the round.
    ///
    /// # Errors
    ///
    /// Returns [`PlayError::EmptyHand`] if there is nothing to play and
    /// [`PlayError::InputClosed`] if the chooser stops supplying input.
    /// Invalid selections are reported to `notifier` and never returned.
    pub fn choose_card<C, N>(
        &mut self,
        lead_suit: Option<Suit>,
        chooser: &mut C,
        notifier: &mut N,
    ) -> Result<Card, PlayError>
    where
        C: MoveChooser + ?Sized,
        N: Notifier + ?Sized,
    {
        if self.hand.is_empty() {
            return Err(PlayError::EmptyHand);
        }

        notifier.notify(&GameEvent::HandShown {
            player: self.name.clone(),
            cards: self.hand.cards().to_vec(),
        });

        loop {
            let request = SelectionRequest {
                player: &self.name,
                hand: self.hand.cards(),
                lead_suit,
            };
            let input = chooser.select(&request).ok_or(PlayError::InputClosed)?;

            match self.check_selection(&input, lead_suit) {
                Ok(index) => return self.hand.remove(index).ok_or(PlayError::InvalidState),
                Err(error) => {
                    trace!("{} rejected selection {input:?}: {error}", self.name);
                    notifier.notify(&GameEvent::SelectionRejected {
                        player: self.name.clone(),
                        error,
                    });
                }
            }
        }
    }
}
