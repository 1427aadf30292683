//! Error types for engine operations.

use thiserror::Error;

use crate::card::Card;

/// Returned when drawing from a deck with no cards left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no cards left in the deck")]
pub struct EmptyDeckError;

/// Errors that can occur while building a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// A card was listed more than once.
    #[error("card {0} appears more than once")]
    DuplicateCard(Card),
}

/// Errors that can occur while dealing a new round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// The deck does not hold a full set of cards.
    #[error("deck must hold all {expected} cards, found {found}")]
    MalformedDeck {
        /// Cards a round must start with.
        expected: usize,
        /// Cards the deck actually held.
        found: usize,
    },
    /// The deck ran out during the initial deal.
    #[error("no cards left in the deck")]
    EmptyDeck,
}

impl From<EmptyDeckError> for DealError {
    fn from(_: EmptyDeckError) -> Self {
        Self::EmptyDeck
    }
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid game state for this action.
    #[error("invalid game state for this action")]
    InvalidState,
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    EmptyDeck,
}

impl From<EmptyDeckError> for ActionError {
    fn from(_: EmptyDeckError) -> Self {
        Self::EmptyDeck
    }
}

/// Errors that can occur during the dealer turn or when reading the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShowdownError {
    /// Invalid game state for this operation.
    #[error("invalid game state for showdown")]
    InvalidState,
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    EmptyDeck,
}

impl From<EmptyDeckError> for ShowdownError {
    fn from(_: EmptyDeckError) -> Self {
        Self::EmptyDeck
    }
}

impl From<ShowdownError> for ActionError {
    fn from(err: ShowdownError) -> Self {
        match err {
            ShowdownError::InvalidState => Self::InvalidState,
            ShowdownError::EmptyDeck => Self::EmptyDeck,
        }
    }
}
