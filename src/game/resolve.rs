use log::{debug, info};

use crate::error::PlayError;
use crate::event::{GameEvent, Notifier};
use crate::player::Seat;
use crate::result::{GameOutcome, GameResult, RoundResult, Termination};
use crate::round::{RoundWinner, determine_round_winner};

use super::{CLINCH_SCORE, Game, GameState, MAX_ROUNDS, REPLENISH_AT, REPLENISH_COUNT};

impl Game {
    /// Settles the round on the table.
    ///
    /// This function:
    /// 1. Announces both cards
    /// 2. Awards a point to the winner, who leads the next round
    /// 3. Reveals (and discards) the front card of the deck
    ///
    /// # Errors
    ///
    /// Returns an error if both cards have not been played yet.
    pub fn resolve<N>(&mut self, notifier: &mut N) -> Result<RoundResult, PlayError>
    where
        N: Notifier + ?Sized,
    {
        if self.state != GameState::Resolve {
            return Err(PlayError::InvalidState);
        }
        let (Some(lead_card), Some(follow_card)) = (self.lead_card, self.follow_card) else {
            return Err(PlayError::InvalidState);
        };

        let leader = self.leader;
        let follower = leader.other();
        notifier.notify(&GameEvent::CardPlayed {
            player: self.players[leader.index()].name.clone(),
            card: lead_card,
        });
        notifier.notify(&GameEvent::CardPlayed {
            player: self.players[follower.index()].name.clone(),
            card: follow_card,
        });

        let winner = match determine_round_winner(lead_card, follow_card, lead_card.suit) {
            RoundWinner::Lead => leader,
            RoundWinner::Follow => follower,
        };
        let player = &mut self.players[winner.index()];
        player.score += 1;
        debug!("{} wins the round ({} point(s))", player.name, player.score);
        notifier.notify(&GameEvent::RoundWon {
            player: player.name.clone(),
            score: player.score,
        });

        match self.deck.reveal() {
            Some(card) => notifier.notify(&GameEvent::CardRevealed(card)),
            None => notifier.notify(&GameEvent::NothingToReveal),
        }

        self.rounds_played += 1;
        self.lead_card = None;
        self.follow_card = None;
        self.leader = winner;
        self.state = GameState::ReplenishCheck;

        Ok(RoundResult {
            number: self.rounds_played,
            leader,
            lead_card,
            follow_card,
            winner,
        })
    }

    /// Deals four more cards to each player when both hands are down to four
    /// and the deck can cover it. Player 1 always draws first.
    ///
    /// Returns `true` if cards were dealt.
    ///
    /// # Errors
    ///
    /// Returns an error if the round has not been resolved yet.
    pub fn replenish<N>(&mut self, notifier: &mut N) -> Result<bool, PlayError>
    where
        N: Notifier + ?Sized,
    {
        if self.state != GameState::ReplenishCheck {
            return Err(PlayError::InvalidState);
        }
        self.state = GameState::TerminationCheck;

        let hands_low = self
            .players
            .iter()
            .all(|player| player.hand.len() == REPLENISH_AT);
        if !hands_low || self.deck.len() < REPLENISH_COUNT * self.players.len() {
            return Ok(false);
        }

        for player in &mut self.players {
            player.hand.add_cards(self.deck.deal(REPLENISH_COUNT));
        }
        debug!("hands replenished, {} card(s) left in deck", self.deck.len());
        notifier.notify(&GameEvent::HandsReplenished {
            count: REPLENISH_COUNT,
        });

        Ok(true)
    }

    /// Ends the game if a player has clinched it or the round limit is hit.
    ///
    /// A player clinches with at least nine points once the opponent has at
    /// least one. Returns the reason when the game is over, `None` when play
    /// continues.
    ///
    /// # Errors
    ///
    /// Returns an error if the replenishment check has not run yet.
    pub fn check_termination<N>(&mut self, notifier: &mut N) -> Result<Option<Termination>, PlayError>
    where
        N: Notifier + ?Sized,
    {
        if self.state != GameState::TerminationCheck {
            return Err(PlayError::InvalidState);
        }

        let [one, two] = self.scores();
        let termination = if one >= CLINCH_SCORE && two >= 1 {
            Some(Termination::Clinched(Seat::One))
        } else if two >= CLINCH_SCORE && one >= 1 {
            Some(Termination::Clinched(Seat::Two))
        } else if self.rounds_played >= MAX_ROUNDS {
            Some(Termination::RoundLimit)
        } else {
            None
        };

        if let Some(Termination::Clinched(seat)) = termination {
            notifier.notify(&GameEvent::Clinched {
                player: self.players[seat.index()].name.clone(),
            });
        }

        match termination {
            Some(reason) => {
                info!("game ends after round {}: {reason:?}", self.rounds_played);
                self.termination = Some(reason);
                self.state = GameState::GameOver;
            }
            None => self.state = GameState::LeadPlay,
        }

        Ok(termination)
    }

    /// Scores the finished game and announces the outcome.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not over.
    pub fn finish<N>(&self, notifier: &mut N) -> Result<GameResult, PlayError>
    where
        N: Notifier + ?Sized,
    {
        if self.state != GameState::GameOver {
            return Err(PlayError::InvalidState);
        }
        let termination = self.termination.ok_or(PlayError::InvalidState)?;

        let scores = self.scores();
        let outcome = GameOutcome::from_scores(scores);
        notifier.notify(&GameEvent::GameOver {
            names: [self.players[0].name.clone(), self.players[1].name.clone()],
            scores,
            outcome,
        });

        Ok(GameResult {
            outcome,
            scores,
            rounds_played: self.rounds_played,
            termination,
        })
    }
}
