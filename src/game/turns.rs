use log::debug;

use crate::card::Card;
use crate::error::PlayError;
use crate::event::{GameEvent, MoveChooser, Notifier};

use super::{Game, GameState};

impl Game {
    /// The leader plays any card from their hand. Its suit becomes the lead
    /// suit for the round.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not waiting for a lead, the leader's
    /// hand is empty, or the chooser runs out of input.
    pub fn lead<C, N>(&mut self, chooser: &mut C, notifier: &mut N) -> Result<Card, PlayError>
    where
        C: MoveChooser + ?Sized,
        N: Notifier + ?Sized,
    {
        if self.state != GameState::LeadPlay {
            return Err(PlayError::InvalidState);
        }

        let leader = &mut self.players[self.leader.index()];
        if self.rounds_played == 0 {
            notifier.notify(&GameEvent::FirstLeader {
                player: leader.name.clone(),
            });
        }
        notifier.notify(&GameEvent::RoundStarted {
            number: self.rounds_played + 1,
            leader: leader.name.clone(),
        });

        let card = leader.choose_card(None, chooser, notifier)?;
        debug!("round {}: {} leads {card}", self.rounds_played + 1, leader.name);

        self.lead_card = Some(card);
        self.state = GameState::FollowPlay;
        Ok(card)
    }

    /// The other player replies, following the lead suit if they can.
    ///
    /// # Errors
    ///
    /// Returns an error if no card has been led yet, the follower's hand is
    /// empty, or the chooser runs out of input.
    pub fn follow<C, N>(&mut self, chooser: &mut C, notifier: &mut N) -> Result<Card, PlayError>
    where
        C: MoveChooser + ?Sized,
        N: Notifier + ?Sized,
    {
        if self.state != GameState::FollowPlay {
            return Err(PlayError::InvalidState);
        }
        let lead_suit = self.lead_card.ok_or(PlayError::InvalidState)?.suit;

        let follower = &mut self.players[self.leader.other().index()];
        let card = follower.choose_card(Some(lead_suit), chooser, notifier)?;
        debug!(
            "round {}: {} follows with {card}",
            self.rounds_played + 1,
            follower.name
        );

        self.follow_card = Some(card);
        self.state = GameState::Resolve;
        Ok(card)
    }
}
