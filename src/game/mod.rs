//! Game engine and round state machine.

use alloc::vec::Vec;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::DECK_SIZE;
use crate::deck::Deck;
use crate::error::DealError;
use crate::hand::{CardView, Hand};
use crate::options::GameOptions;
use crate::policy::DealerPolicy;

mod actions;
mod dealer;
pub mod state;

pub use state::{DealerStep, GameState};

/// A single-table blackjack engine.
///
/// The game exclusively owns the deck and both hands for the round in
/// progress. Every round starts from a fresh 52-card deck, so nothing
/// carries over from one round to the next.
///
/// # Example
///
/// ```
/// use twentyone::{Game, GameOptions, GameState};
///
/// let mut game = Game::new(GameOptions::default());
/// game.start_seeded_round(42).unwrap();
/// assert_eq!(game.state(), GameState::PlayerTurn);
///
/// game.player_stand().unwrap();
/// assert_eq!(game.state(), GameState::GameOver);
/// let _ = game.result().unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct Game {
    options: GameOptions,
    policy: DealerPolicy,
    state: GameState,
    deck: Deck,
    player: Hand,
    dealer: Hand,
}

impl Game {
    /// Creates a new game waiting for its first round.
    #[must_use]
    pub fn new(options: GameOptions) -> Self {
        Self {
            options,
            policy: DealerPolicy::new(options.stand_on_soft_17),
            state: GameState::Betting,
            deck: Deck::new(),
            player: Hand::new(),
            dealer: Hand::new(),
        }
    }

    /// Starts a new round, shuffling a fresh deck with `rng`.
    ///
    /// Allowed from any state. Whatever was left of the previous round,
    /// including an unfinished dealer turn, is discarded.
    ///
    /// # Errors
    ///
    /// Never fails for a fresh deck; the result mirrors
    /// [`Game::start_round_with_deck`].
    pub fn start_round<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), DealError> {
        let mut deck = Deck::new();
        deck.shuffle(rng);
        self.start_round_with_deck(deck)
    }

    /// Starts a new round with a deck shuffled from `seed`.
    ///
    /// The same seed always produces the same deal.
    ///
    /// # Errors
    ///
    /// Never fails for a fresh deck; the result mirrors
    /// [`Game::start_round_with_deck`].
    pub fn start_seeded_round(&mut self, seed: u64) -> Result<(), DealError> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.start_round(&mut rng)
    }

    /// Starts a new round dealing from `deck` as-is, without shuffling.
    ///
    /// The player receives the first two draws face-up, the dealer the next
    /// two with the first of them face-down. Use [`Deck::stacked`] to fix the
    /// order of the draws.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::MalformedDeck`] if cards were already drawn from
    /// `deck`. The game is left untouched in that case.
    pub fn start_round_with_deck(&mut self, mut deck: Deck) -> Result<(), DealError> {
        if deck.remaining() != DECK_SIZE {
            return Err(DealError::MalformedDeck {
                expected: DECK_SIZE,
                found: deck.remaining(),
            });
        }

        let mut player = Hand::new();
        let mut dealer = Hand::new();

        player.add_card(deck.draw()?, true);
        player.add_card(deck.draw()?, true);
        // Hole card.
        dealer.add_card(deck.draw()?, false);
        dealer.add_card(deck.draw()?, true);

        self.deck = deck;
        self.player = player;
        self.dealer = dealer;
        self.set_state(GameState::PlayerTurn);

        log::debug!(
            "round started: player {} dealer shows {}, {} cards left",
            self.player.value(),
            self.dealer.visible_value(),
            self.deck.remaining()
        );

        Ok(())
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the options this game was created with.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the number of cards left in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.remaining()
    }

    /// Returns the player's cards. All of them are face-up.
    #[must_use]
    pub fn player_hand(&self) -> Vec<CardView> {
        self.player.view()
    }

    /// Returns the dealer's cards as the player may see them.
    ///
    /// The hole card is reported as [`CardView::FaceDown`] until the dealer
    /// turn begins.
    #[must_use]
    pub fn dealer_hand(&self) -> Vec<CardView> {
        self.dealer.view()
    }

    /// Returns the value of the player's hand.
    #[must_use]
    pub fn player_value(&self) -> u8 {
        self.player.value()
    }

    /// Returns the value of the dealer's face-up cards.
    #[must_use]
    pub fn dealer_visible_value(&self) -> u8 {
        self.dealer.visible_value()
    }

    fn set_state(&mut self, state: GameState) {
        log::debug!("state {:?} -> {:?}", self.state, state);
        self.state = state;
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(GameOptions::default())
    }
}
