//! Round outcome types and winner evaluation.

use core::fmt;

use crate::hand::Hand;

/// Why a party won.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WinReason {
    /// The player went over 21.
    PlayerBust,
    /// The dealer went over 21.
    DealerBust,
    /// Neither busted and the winner holds the higher value.
    HigherValue,
}

/// Outcome of a finished round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The player wins.
    PlayerWins(WinReason),
    /// The dealer wins.
    DealerWins(WinReason),
    /// Equal values, no winner.
    Push,
}

impl Outcome {
    /// Returns the reason for the win, if there was a winner.
    #[must_use]
    pub const fn reason(self) -> Option<WinReason> {
        match self {
            Self::PlayerWins(reason) | Self::DealerWins(reason) => Some(reason),
            Self::Push => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PlayerWins(WinReason::DealerBust) => f.write_str("Player wins! Dealer bust"),
            Self::PlayerWins(_) => f.write_str("Player wins!"),
            Self::DealerWins(WinReason::PlayerBust) => f.write_str("Dealer wins! Player bust"),
            Self::DealerWins(_) => f.write_str("Dealer wins!"),
            Self::Push => f.write_str("Push!"),
        }
    }
}

/// Result of a finished round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    /// Who won and why.
    pub outcome: Outcome,
    /// The player's final hand value.
    pub player_value: u8,
    /// The dealer's final hand value.
    ///
    /// Always the full total, hole card included, even when the round ended
    /// on a player bust with the hole card still face-down.
    pub dealer_value: u8,
    /// Whether the player held a natural blackjack.
    pub player_blackjack: bool,
    /// Whether the dealer held a natural blackjack.
    pub dealer_blackjack: bool,
}

/// Compares the player's hand against the dealer's.
///
/// A player bust loses before the dealer's hand is looked at, so a round
/// where both bust goes to the dealer. Natural blackjacks are reported but
/// score like any other 21.
#[must_use]
pub fn evaluate(player: &Hand, dealer: &Hand) -> RoundResult {
    let player_value = player.value();
    let dealer_value = dealer.value();

    let outcome = if player.is_bust() {
        Outcome::DealerWins(WinReason::PlayerBust)
    } else if dealer.is_bust() {
        Outcome::PlayerWins(WinReason::DealerBust)
    } else if player_value > dealer_value {
        Outcome::PlayerWins(WinReason::HigherValue)
    } else if player_value < dealer_value {
        Outcome::DealerWins(WinReason::HigherValue)
    } else {
        Outcome::Push
    };

    RoundResult {
        outcome,
        player_value,
        dealer_value,
        player_blackjack: player.is_blackjack(),
        dealer_blackjack: dealer.is_blackjack(),
    }
}
