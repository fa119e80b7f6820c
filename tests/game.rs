//! Game integration tests.

extern crate alloc;

use alloc::collections::VecDeque;
use std::collections::HashSet;

use tricksy_battle::{
    Card, DECK_SIZE, Deck, Game, GameEvent, GameOptions, GameOutcome, GameState, HAND_SIZE,
    MAX_ROUNDS, MoveChooser, Notifier, PlayError, RANKS, Rank, Seat, SelectionRequest, Suit,
    Termination,
};

const fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

fn suit_cards(suits: &[Suit]) -> Vec<Card> {
    suits
        .iter()
        .flat_map(|&suit| RANKS.iter().map(move |&rank| card(suit, rank)))
        .collect()
}

/// Plays the first card of the lead suit, or the first card otherwise.
struct FirstLegal;

impl MoveChooser for FirstLegal {
    fn select(&mut self, request: &SelectionRequest<'_>) -> Option<String> {
        let index = request
            .lead_suit
            .and_then(|suit| request.hand.iter().position(|card| card.suit == suit))
            .unwrap_or(0);
        Some((index + 1).to_string())
    }
}

struct Script {
    lines: VecDeque<String>,
}

fn script(lines: &[&str]) -> Script {
    Script {
        lines: lines.iter().map(|line| (*line).to_string()).collect(),
    }
}

impl MoveChooser for Script {
    fn select(&mut self, _request: &SelectionRequest<'_>) -> Option<String> {
        self.lines.pop_front()
    }
}

#[derive(Default)]
struct Recorder {
    events: Vec<GameEvent>,
}

impl Recorder {
    fn count(&self, predicate: impl Fn(&GameEvent) -> bool) -> usize {
        self.events.iter().filter(|event| predicate(event)).count()
    }
}

impl Notifier for Recorder {
    fn notify(&mut self, event: &GameEvent) {
        self.events.push(event.clone());
    }
}

/// Player 1 holds only red cards and Player 2 only black cards, so the
/// leader wins every round it leads.
fn red_versus_black(game: &mut Game) {
    let reds = suit_cards(&[Suit::Hearts, Suit::Diamonds]);
    let blacks = suit_cards(&[Suit::Clubs, Suit::Spades]);

    game.players[0].hand = reds[..8].to_vec().into();
    game.players[1].hand = blacks[..8].to_vec().into();

    let order: Vec<Card> = [
        &reds[16..20],   // revealed in rounds 1-4
        &reds[8..12],    // Player 1 replenishment
        &blacks[8..12],  // Player 2 replenishment
        &reds[20..24],   // revealed in rounds 5-8
        &reds[12..16],   // Player 1 replenishment
        &blacks[12..16], // Player 2 replenishment
        &blacks[16..24], // revealed in rounds 9-16
    ]
    .concat();
    game.deck = Deck::from_cards(order);
    game.leader = Seat::One;
}

#[test]
fn new_game_deals_eight_each_from_one_deck() {
    let game = Game::new(GameOptions::default(), 42);

    assert_eq!(game.state(), GameState::LeadPlay);
    assert_eq!(game.rounds_played(), 0);
    assert_eq!(game.scores(), [0, 0]);
    assert_eq!(game.players[0].hand.len(), HAND_SIZE);
    assert_eq!(game.players[1].hand.len(), HAND_SIZE);
    assert_eq!(game.deck.len(), DECK_SIZE - 2 * HAND_SIZE);
    assert_eq!(game.players[0].name, "Player 1");
    assert_eq!(game.players[1].name, "Player 2");

    let all: HashSet<Card> = game
        .players
        .iter()
        .flat_map(|player| player.hand.cards())
        .chain(game.deck.cards())
        .copied()
        .collect();
    assert_eq!(all.len(), DECK_SIZE);
}

#[test]
fn same_seed_gives_same_game() {
    let first = Game::new(GameOptions::default(), 9);
    let again = Game::new(GameOptions::default(), 9);

    assert_eq!(first.players, again.players);
    assert_eq!(first.deck, again.deck);
    assert_eq!(first.leader(), again.leader());
}

#[test]
fn first_leader_is_random_unless_configured() {
    let leaders: HashSet<Seat> = (0..32)
        .map(|seed| Game::new(GameOptions::default(), seed).leader())
        .collect();
    assert_eq!(leaders.len(), 2);

    let options = GameOptions::default()
        .with_player_names("Ada", "Grace")
        .with_first_leader(Seat::Two);
    let game = Game::new(options, 1);
    assert_eq!(game.leader(), Seat::Two);
    assert_eq!(game.player(Seat::Two).name, "Grace");
}

#[test]
fn phases_must_run_in_order() {
    let mut game = Game::new(GameOptions::default(), 1);
    let mut recorder = Recorder::default();

    assert_eq!(
        game.follow(&mut FirstLegal, &mut recorder).unwrap_err(),
        PlayError::InvalidState
    );
    assert_eq!(
        game.resolve(&mut recorder).unwrap_err(),
        PlayError::InvalidState
    );
    assert_eq!(
        game.replenish(&mut recorder).unwrap_err(),
        PlayError::InvalidState
    );
    assert_eq!(
        game.check_termination(&mut recorder).unwrap_err(),
        PlayError::InvalidState
    );
    assert_eq!(
        game.finish(&mut recorder).unwrap_err(),
        PlayError::InvalidState
    );

    game.lead(&mut FirstLegal, &mut recorder).unwrap();
    assert_eq!(game.state(), GameState::FollowPlay);
    assert_eq!(
        game.lead(&mut FirstLegal, &mut recorder).unwrap_err(),
        PlayError::InvalidState
    );
}

#[test]
fn round_winner_scores_and_leads_next() {
    let mut game = Game::new(GameOptions::default(), 3);
    game.leader = Seat::One;
    game.players[0].hand = vec![
        card(Suit::Hearts, Rank::Three),
        card(Suit::Clubs, Rank::Queen),
    ]
    .into();
    game.players[1].hand = vec![
        card(Suit::Spades, Rank::Ace),
        card(Suit::Hearts, Rank::Queen),
    ]
    .into();
    let front = game.deck.cards()[0];
    let deck_before = game.deck.len();

    let mut recorder = Recorder::default();
    // Player 2 tries the spade first and is made to follow hearts.
    let round = game
        .play_round(&mut script(&["1", "1", "2"]), &mut recorder)
        .unwrap();

    assert_eq!(round.number, 1);
    assert_eq!(round.leader, Seat::One);
    assert_eq!(round.lead_card, card(Suit::Hearts, Rank::Three));
    assert_eq!(round.follow_card, card(Suit::Hearts, Rank::Queen));
    assert_eq!(round.winner, Seat::Two);

    assert_eq!(game.scores(), [0, 1]);
    assert_eq!(game.leader(), Seat::Two);
    assert_eq!(game.state(), GameState::LeadPlay);
    assert_eq!(game.rounds_played(), 1);
    assert_eq!(game.deck.len(), deck_before - 1);

    assert!(recorder.events.contains(&GameEvent::FirstLeader {
        player: "Player 1".to_string()
    }));
    assert!(recorder.events.contains(&GameEvent::CardRevealed(front)));
    assert!(recorder.events.contains(&GameEvent::RoundWon {
        player: "Player 2".to_string(),
        score: 1
    }));
    assert_eq!(
        recorder.count(|event| matches!(event, GameEvent::SelectionRejected { .. })),
        1
    );
}

#[test]
fn nothing_to_reveal_when_deck_is_empty() {
    let mut game = Game::new(GameOptions::default(), 4);
    red_versus_black(&mut game);
    game.deck = Deck::from_cards(Vec::new());

    let mut recorder = Recorder::default();
    game.play_round(&mut FirstLegal, &mut recorder).unwrap();

    assert!(recorder.events.contains(&GameEvent::NothingToReveal));
    assert_eq!(game.scores(), [1, 0]);
}

#[test]
fn hands_replenish_when_both_reach_four() {
    let mut game = Game::new(GameOptions::default(), 5);
    red_versus_black(&mut game);
    game.players[0].hand = suit_cards(&[Suit::Hearts])[..5].to_vec().into();
    game.players[1].hand = suit_cards(&[Suit::Clubs])[..5].to_vec().into();
    // Player 2 leads, but Player 1 still draws first.
    game.leader = Seat::Two;
    let deck = game.deck.cards().to_vec();

    let mut recorder = Recorder::default();
    game.play_round(&mut FirstLegal, &mut recorder).unwrap();

    assert_eq!(game.players[0].hand.len(), HAND_SIZE);
    assert_eq!(game.players[1].hand.len(), HAND_SIZE);
    assert_eq!(&game.players[0].hand.cards()[4..], &deck[1..5]);
    assert_eq!(&game.players[1].hand.cards()[4..], &deck[5..9]);
    assert_eq!(game.deck.len(), deck.len() - 9);
    assert!(recorder
        .events
        .contains(&GameEvent::HandsReplenished { count: 4 }));
}

#[test]
fn no_replenish_when_deck_is_short() {
    let mut game = Game::new(GameOptions::default(), 6);
    red_versus_black(&mut game);
    game.players[0].hand = suit_cards(&[Suit::Hearts])[..5].to_vec().into();
    game.players[1].hand = suit_cards(&[Suit::Clubs])[..5].to_vec().into();
    game.deck = Deck::from_cards(suit_cards(&[Suit::Spades])[..8].to_vec());

    let mut recorder = Recorder::default();
    game.play_round(&mut FirstLegal, &mut recorder).unwrap();

    // The reveal leaves seven cards, one short of a full replenishment.
    assert_eq!(game.deck.len(), 7);
    assert_eq!(game.players[0].hand.len(), 4);
    assert_eq!(game.players[1].hand.len(), 4);
    assert_eq!(
        recorder.count(|event| matches!(event, GameEvent::HandsReplenished { .. })),
        0
    );
}

#[test]
fn clinch_ends_game_early() {
    let mut game = Game::new(GameOptions::default(), 7);
    red_versus_black(&mut game);
    game.players[0].score = 8;
    game.players[1].score = 1;

    let mut recorder = Recorder::default();
    let result = game.play(&mut FirstLegal, &mut recorder).unwrap();

    assert_eq!(result.rounds_played, 1);
    assert_eq!(result.scores, [9, 1]);
    assert_eq!(result.termination, Termination::Clinched(Seat::One));
    assert_eq!(
        result.outcome,
        GameOutcome::Win {
            winner: Seat::One,
            winner_score: 9,
            loser_score: 1
        }
    );
    assert_eq!(game.state(), GameState::GameOver);
    assert_eq!(game.termination(), Some(Termination::Clinched(Seat::One)));
    assert!(recorder.events.contains(&GameEvent::Clinched {
        player: "Player 1".to_string()
    }));
    assert_eq!(
        recorder.events.last().map(ToString::to_string).as_deref(),
        Some("--- Game Over ---\nPlayer 1 wins! 9 to 1")
    );
}

#[test]
fn no_clinch_while_opponent_is_scoreless() {
    let mut game = Game::new(GameOptions::default(), 8);
    red_versus_black(&mut game);
    game.players[0].score = 8;

    let mut recorder = Recorder::default();
    game.play_round(&mut FirstLegal, &mut recorder).unwrap();

    assert_eq!(game.scores(), [9, 0]);
    assert_eq!(game.state(), GameState::LeadPlay);
    assert_eq!(game.termination(), None);
}

#[test]
fn winning_every_round_shoots_the_moon() {
    let mut game = Game::new(GameOptions::default(), 10);
    red_versus_black(&mut game);

    let mut recorder = Recorder::default();
    let result = game.play(&mut FirstLegal, &mut recorder).unwrap();

    assert_eq!(result.rounds_played, MAX_ROUNDS);
    assert_eq!(result.scores, [16, 0]);
    assert_eq!(result.termination, Termination::RoundLimit);
    assert_eq!(result.outcome, GameOutcome::ShotTheMoon { winner: Seat::One });

    assert!(game.deck.is_empty());
    assert!(game.players.iter().all(|player| player.hand.is_empty()));
    assert_eq!(
        recorder.count(|event| matches!(event, GameEvent::HandsReplenished { .. })),
        2
    );
    assert_eq!(
        recorder.count(|event| matches!(event, GameEvent::RoundStarted { .. })),
        16
    );
    assert_eq!(
        recorder.events.last().map(ToString::to_string).as_deref(),
        Some("--- Game Over ---\nPlayer 1 shot the moon! Final score: 16-0. Player 1 wins!")
    );

    // Nothing more to play once the game is over.
    assert_eq!(
        game.play_round(&mut FirstLegal, &mut recorder).unwrap_err(),
        PlayError::InvalidState
    );
}

#[test]
fn seeded_games_stop_by_round_sixteen() {
    for seed in 0..24 {
        let mut game = Game::new(GameOptions::default(), seed);
        let result = game
            .play(&mut FirstLegal, &mut Recorder::default())
            .unwrap();
        let [one, two] = result.scores;

        assert!(result.rounds_played <= MAX_ROUNDS);
        assert_eq!(one + two, result.rounds_played);
        match result.termination {
            Termination::RoundLimit => assert_eq!(result.rounds_played, MAX_ROUNDS),
            Termination::Clinched(Seat::One) => assert!(one >= 9 && two >= 1),
            Termination::Clinched(Seat::Two) => assert!(two >= 9 && one >= 1),
        }
    }
}

#[test]
fn outcome_from_scores() {
    assert_eq!(
        GameOutcome::from_scores([0, 16]),
        GameOutcome::ShotTheMoon { winner: Seat::Two }
    );
    assert_eq!(
        GameOutcome::from_scores([16, 0]),
        GameOutcome::ShotTheMoon { winner: Seat::One }
    );
    assert_eq!(
        GameOutcome::from_scores([6, 10]),
        GameOutcome::Win {
            winner: Seat::Two,
            winner_score: 10,
            loser_score: 6
        }
    );
    assert_eq!(
        GameOutcome::from_scores([8, 8]),
        GameOutcome::Tie { score: 8 }
    );
    assert_eq!(GameOutcome::from_scores([8, 8]).winner(), None);

    let tie = GameEvent::GameOver {
        names: ["Ada".to_string(), "Grace".to_string()],
        scores: [8, 8],
        outcome: GameOutcome::Tie { score: 8 },
    };
    assert_eq!(tie.to_string(), "--- Game Over ---\nIt's a tie!");
}
