//! The 52-card deck.

extern crate alloc;

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::{DeckError, EmptyDeckError};

fn canonical_cards() -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            cards.push(Card::new(suit, rank));
        }
    }
    cards
}

/// A single deck of cards.
///
/// Cards are drawn from the end of the sequence. A deck built through
/// [`Deck::new`] or [`Deck::stacked`] always starts with every suit and rank
/// exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates a deck with the 52 cards in canonical order.
    ///
    /// Suits follow [`Suit::ALL`] and ranks follow [`Rank::ALL`] within each
    /// suit. The last card in that order is drawn first.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cards: canonical_cards(),
        }
    }

    /// Creates a full deck whose first draws are `top`, in order.
    ///
    /// The cards not listed keep their canonical draw order after `top` is
    /// exhausted.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::{Card, Deck, Rank, Suit};
    ///
    /// let ace = Card::new(Suit::Spades, Rank::Ace);
    /// let mut deck = Deck::stacked(&[ace]).unwrap();
    /// assert_eq!(deck.draw(), Ok(ace));
    /// assert_eq!(deck.remaining(), 51);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if `top` lists the same card twice.
    pub fn stacked(top: &[Card]) -> Result<Self, DeckError> {
        for (index, card) in top.iter().enumerate() {
            if top[..index].contains(card) {
                return Err(DeckError::DuplicateCard(*card));
            }
        }

        let mut cards: Vec<Card> = canonical_cards()
            .into_iter()
            .filter(|card| !top.contains(card))
            .collect();
        cards.extend(top.iter().rev().copied());

        Ok(Self { cards })
    }

    /// Shuffles the remaining cards in place using the given random source.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Removes and returns the top card.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyDeckError`] if no cards remain. The deck is left
    /// unchanged.
    pub fn draw(&mut self) -> Result<Card, EmptyDeckError> {
        let card = self.cards.pop().ok_or(EmptyDeckError)?;
        log::trace!("drew {card}, {} left", self.cards.len());
        Ok(card)
    }

    /// Returns the number of cards left.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns whether the card is still in the deck.
    #[must_use]
    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    /// Returns the remaining cards. The last element is the next draw.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
