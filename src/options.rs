//! Game configuration options.

extern crate alloc;

use alloc::string::String;

use crate::player::Seat;

/// Configuration options for a game.
///
/// The rules themselves are fixed; options only cover who sits at the table
/// and who leads first.
///
/// ```
/// use tricksy_battle::{GameOptions, Seat};
///
/// let options = GameOptions::default()
///     .with_player_names("Ada", "Grace")
///     .with_first_leader(Seat::Two);
/// assert_eq!(options.player_names[1], "Grace");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    /// Names of Player 1 and Player 2.
    pub player_names: [String; 2],
    /// Seat that leads the first round. `None` picks one at random.
    pub first_leader: Option<Seat>,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            player_names: [String::from("Player 1"), String::from("Player 2")],
            first_leader: None,
        }
    }
}

impl GameOptions {
    /// Sets the player names.
    #[must_use]
    pub fn with_player_names(mut self, one: impl Into<String>, two: impl Into<String>) -> Self {
        self.player_names = [one.into(), two.into()];
        self
    }

    /// Sets which seat leads the first round.
    ///
    /// # Example
    ///
    /// ```
    /// use tricksy_battle::{GameOptions, Seat};
    ///
    /// let options = GameOptions::default().with_first_leader(Seat::One);
    /// assert_eq!(options.first_leader, Some(Seat::One));
    /// ```
    #[must_use]
    pub const fn with_first_leader(mut self, seat: Seat) -> Self {
        self.first_leader = Some(seat);
        self
    }
}
