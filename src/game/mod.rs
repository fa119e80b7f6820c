//! Game engine and state management.

use log::{debug, info};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::PlayError;
use crate::event::{MoveChooser, Notifier};
use crate::options::GameOptions;
use crate::player::{Player, Seat};
use crate::result::{GameResult, RoundResult, Termination};

mod resolve;
pub mod state;
mod turns;

pub use state::GameState;

/// Cards dealt to each player at the start of the game.
pub const HAND_SIZE: usize = 8;
/// Hand size at which both players draw more cards.
pub const REPLENISH_AT: usize = 4;
/// Cards drawn by each player on replenishment.
pub const REPLENISH_COUNT: usize = 4;
/// Maximum number of rounds in a game.
pub const MAX_ROUNDS: u8 = 16;
/// Score that ends the game early once the opponent has scored too.
pub const CLINCH_SCORE: u8 = 9;

/// A two-player trick-taking game.
///
/// The game owns the deck and both players. Drive it with [`Game::play`],
/// or round by round with [`Game::play_round`], or phase by phase with
/// [`Game::lead`], [`Game::follow`], [`Game::resolve`], [`Game::replenish`]
/// and [`Game::check_termination`].
#[derive(Debug, Clone)]
pub struct Game {
    /// Cards not yet dealt or revealed.
    pub deck: Deck,
    /// Player 1 and Player 2.
    pub players: [Player; 2],
    /// Seat leading the current round.
    pub leader: Seat,
    /// Current game state.
    pub state: GameState,
    /// Rounds completed so far.
    rounds_played: u8,
    /// Card led this round.
    lead_card: Option<Card>,
    /// Card played in reply this round.
    follow_card: Option<Card>,
    /// Set once the game is over.
    termination: Option<Termination>,
}

impl Game {
    /// Creates a new game with the given seed.
    ///
    /// Shuffles a fresh deck, deals eight cards to Player 1 and then to
    /// Player 2, and picks the first leader.
    ///
    /// # Example
    ///
    /// ```
    /// use tricksy_battle::{Game, GameOptions, GameState, HAND_SIZE};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// assert_eq!(game.state, GameState::LeadPlay);
    /// assert_eq!(game.players[0].hand.len(), HAND_SIZE);
    /// assert_eq!(game.deck.len(), 32);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut deck = Deck::shuffled(&mut rng);

        let [one_name, two_name] = options.player_names;
        let mut players = [Player::new(one_name), Player::new(two_name)];
        for player in &mut players {
            player.hand.add_cards(deck.deal(HAND_SIZE));
        }

        let leader = options.first_leader.unwrap_or_else(|| {
            if rng.random_bool(0.5) {
                Seat::One
            } else {
                Seat::Two
            }
        });
        debug!("new game (seed {seed}), {} leads first", players[leader.index()].name);

        Self {
            deck,
            players,
            leader,
            state: GameState::LeadPlay,
            rounds_played: 0,
            lead_card: None,
            follow_card: None,
            termination: None,
        }
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the seat leading the current round.
    #[must_use]
    pub const fn leader(&self) -> Seat {
        self.leader
    }

    /// Returns the player in `seat`.
    #[must_use]
    pub const fn player(&self, seat: Seat) -> &Player {
        &self.players[seat.index()]
    }

    /// Returns the number of completed rounds.
    #[must_use]
    pub const fn rounds_played(&self) -> u8 {
        self.rounds_played
    }

    /// Returns the scores of Player 1 and Player 2.
    #[must_use]
    pub const fn scores(&self) -> [u8; 2] {
        [self.players[0].score, self.players[1].score]
    }

    /// Returns why the game stopped, once it has.
    #[must_use]
    pub const fn termination(&self) -> Option<Termination> {
        self.termination
    }

    /// Plays one full round: lead, follow, resolve, replenish, and the
    /// termination check.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not waiting for a lead, or if the
    /// chooser runs out of input.
    pub fn play_round<C, N>(
        &mut self,
        chooser: &mut C,
        notifier: &mut N,
    ) -> Result<RoundResult, PlayError>
    where
        C: MoveChooser + ?Sized,
        N: Notifier + ?Sized,
    {
        self.lead(chooser, notifier)?;
        self.follow(chooser, notifier)?;
        let round = self.resolve(notifier)?;
        self.replenish(notifier)?;
        self.check_termination(notifier)?;
        Ok(round)
    }

    /// Plays rounds until the game is over and returns the final result.
    ///
    /// # Errors
    ///
    /// Returns an error if the game was left mid-round, or if the chooser
    /// runs out of input.
    pub fn play<C, N>(&mut self, chooser: &mut C, notifier: &mut N) -> Result<GameResult, PlayError>
    where
        C: MoveChooser + ?Sized,
        N: Notifier + ?Sized,
    {
        while self.state != GameState::GameOver {
            self.play_round(chooser, notifier)?;
        }

        let result = self.finish(notifier)?;
        info!(
            "game over after {} round(s): {:?} ({}-{})",
            result.rounds_played, result.outcome, result.scores[0], result.scores[1]
        );
        Ok(result)
    }
}
