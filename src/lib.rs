//! A two-player trick-taking card game engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that runs the whole game: a seeded
//! 48-card deck, follow-suit enforcement, round resolution, mid-game hand
//! replenishment, early clinch and the final scoring.
//!
//! Player input and narration are injected through the [`MoveChooser`] and
//! [`Notifier`] traits, so a game can be driven from a terminal or from a
//! test script.
//!
//! # Example
//!
//! ```no_run
//! use tricksy_battle::{Game, GameOptions};
//!
//! let options = GameOptions::default();
//! let game = Game::new(options, 42);
//! let _ = game;
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod event;
pub mod game;
pub mod hand;
pub mod options;
pub mod player;
pub mod result;
pub mod round;

// Re-export main types
pub use card::{Card, DECK_SIZE, RANKS, Rank, SUITS, Suit};
pub use deck::Deck;
pub use error::{PlayError, SelectionError};
pub use event::{GameEvent, MoveChooser, Notifier, SelectionRequest};
pub use game::{
    CLINCH_SCORE, Game, GameState, HAND_SIZE, MAX_ROUNDS, REPLENISH_AT, REPLENISH_COUNT,
};
pub use hand::Hand;
pub use options::GameOptions;
pub use player::{Player, Seat};
pub use result::{GameOutcome, GameResult, RoundResult, Termination};
pub use round::{RoundWinner, determine_round_winner};
