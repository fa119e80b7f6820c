//! Round winner determination.

use crate::card::{Card, Suit};

/// Which of the two played cards took the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundWinner {
    /// The card played by the leading player.
    Lead,
    /// The card played by the following player.
    Follow,
}

/// Decides which card wins a round.
///
/// Rules, first match wins:
/// 1. Only the lead card is in `lead_suit`: lead wins.
/// 2. Only the follow card is in `lead_suit`: follow wins.
/// 3. Both are in `lead_suit`: the higher value wins, lead wins ties.
/// 4. Neither is in `lead_suit`: lead wins.
///
/// # Example
///
/// ```
/// use tricksy_battle::{Card, Rank, RoundWinner, Suit, determine_round_winner};
///
/// let lead = Card::new(Suit::Hearts, Rank::Three);
/// let follow = Card::new(Suit::Hearts, Rank::Queen);
/// assert_eq!(
///     determine_round_winner(lead, follow, Suit::Hearts),
///     RoundWinner::Follow
/// );
/// ```
#[must_use]
pub fn determine_round_winner(lead: Card, follow: Card, lead_suit: Suit) -> RoundWinner {
    let lead_follows = lead.suit == lead_suit;
    let follow_follows = follow.suit == lead_suit;

    match (lead_follows, follow_follows) {
        (true, false) => RoundWinner::Lead,
        (false, true) => RoundWinner::Follow,
        (true, true) => {
            if lead.value() >= follow.value() {
                RoundWinner::Lead
            } else {
                RoundWinner::Follow
            }
        }
        // Unreachable while the lead suit is taken from the lead card.
        (false, false) => RoundWinner::Lead,
    }
}
