//! A blackjack rules engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that runs one round at a time through
//! an explicit state machine: dealing, player actions, dealer play, and the
//! final comparison. Shuffling always uses a caller-supplied random source,
//! so any round can be replayed from its seed.
//!
//! # Example
//!
//! ```
//! use twentyone::{Game, GameOptions};
//!
//! let mut game = Game::new(GameOptions::default());
//! game.start_seeded_round(7).unwrap();
//! let _ = game.player_hand();
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
pub mod game;
pub mod hand;
pub mod options;
pub mod policy;
pub mod result;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::{ActionError, DealError, DeckError, EmptyDeckError, ShowdownError};
pub use game::{DealerStep, Game, GameState};
pub use hand::{BLACKJACK, CardView, Hand};
pub use options::GameOptions;
pub use policy::{DEALER_STANDS_AT, DealerDecision, DealerPolicy};
pub use result::{Outcome, RoundResult, WinReason, evaluate};
