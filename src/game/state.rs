//! Game state types.

use crate::card::Card;

/// Game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameState {
    /// No round has been dealt yet.
    #[default]
    Betting,
    /// Waiting for the player to hit or stand.
    PlayerTurn,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Round has ended and the result can be read.
    GameOver,
}

impl GameState {
    /// Returns whether the player may act.
    #[must_use]
    pub const fn accepts_player_commands(self) -> bool {
        matches!(self, Self::PlayerTurn)
    }
}

/// Progress report from a single dealer step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DealerStep {
    /// The card drawn during this step, if the dealer hit.
    pub drawn: Option<Card>,
    /// Whether the dealer turn is over and the round moved to `GameOver`.
    pub concluded: bool,
}
