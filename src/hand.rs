//! Hand representation and valuation.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;

/// Highest value a hand can reach without busting.
pub const BLACKJACK: u8 = 21;

fn evaluate_cards<'a>(cards: impl Iterator<Item = &'a Card>) -> (u8, bool) {
    let mut value: u16 = 0;
    let mut aces: u8 = 0;

    for card in cards {
        if card.is_ace() {
            aces += 1;
        }
        value += u16::from(card.base_value());
    }

    // Each downgrade turns one soft Ace (11) into a hard one (1).
    while value > u16::from(BLACKJACK) && aces > 0 {
        value -= 10;
        aces -= 1;
    }

    let is_soft = aces > 0 && value <= u16::from(BLACKJACK);
    (u8::try_from(value).unwrap_or(u8::MAX), is_soft)
}

/// What an observer sees of a single card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardView {
    /// The card is face-up.
    FaceUp(Card),
    /// The card is face-down; its suit and rank are not disclosed.
    FaceDown,
}

impl CardView {
    /// Returns the card if it is face-up.
    #[must_use]
    pub const fn card(self) -> Option<Card> {
        match self {
            Self::FaceUp(card) => Some(card),
            Self::FaceDown => None,
        }
    }

    /// Returns whether the card is face-up.
    #[must_use]
    pub const fn is_face_up(self) -> bool {
        matches!(self, Self::FaceUp(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct HeldCard {
    card: Card,
    face_up: bool,
}

/// A hand of cards owned by the player or the dealer.
///
/// The value is recomputed from the cards on every call, so adding a card
/// after an Ace was counted as 1 can never leave a stale total behind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<HeldCard>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the hand with the given visibility.
    pub fn add_card(&mut self, card: Card, face_up: bool) {
        self.cards.push(HeldCard { card, face_up });
    }

    /// Turns every card face-up.
    pub fn reveal_all(&mut self) {
        for held in &mut self.cards {
            held.face_up = true;
        }
    }

    /// Returns the cards in the hand, including face-down ones.
    pub fn cards(&self) -> impl Iterator<Item = Card> + '_ {
        self.cards.iter().map(|held| held.card)
    }

    /// Returns the hand as an observer sees it.
    #[must_use]
    pub fn view(&self) -> Vec<CardView> {
        self.cards
            .iter()
            .map(|held| {
                if held.face_up {
                    CardView::FaceUp(held.card)
                } else {
                    CardView::FaceDown
                }
            })
            .collect()
    }

    /// Returns whether any card is still face-down.
    #[must_use]
    pub fn has_hidden_cards(&self) -> bool {
        self.cards.iter().any(|held| !held.face_up)
    }

    /// Calculates the value of the hand.
    ///
    /// Aces count 11 and are downgraded to 1, one at a time, while the total
    /// is over 21. Totals above 255, only reachable with far more cards than
    /// a round deals, are reported as `u8::MAX`.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::{Card, Hand, Rank, Suit};
    ///
    /// let mut hand = Hand::new();
    /// hand.add_card(Card::new(Suit::Spades, Rank::Ace), true);
    /// hand.add_card(Card::new(Suit::Hearts, Rank::Nine), true);
    /// hand.add_card(Card::new(Suit::Clubs, Rank::Ace), true);
    /// assert_eq!(hand.value(), 21);
    /// ```
    #[must_use]
    pub fn value(&self) -> u8 {
        evaluate_cards(self.cards.iter().map(|held| &held.card)).0
    }

    /// Calculates the value of the face-up cards only.
    #[must_use]
    pub fn visible_value(&self) -> u8 {
        evaluate_cards(
            self.cards
                .iter()
                .filter(|held| held.face_up)
                .map(|held| &held.card),
        )
        .0
    }

    /// Returns whether the hand is soft (contains an ace counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        evaluate_cards(self.cards.iter().map(|held| &held.card)).1
    }

    /// Returns whether the hand is bust.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.value() > BLACKJACK
    }

    /// Returns whether the hand is a natural blackjack.
    ///
    /// Only a two-card 21 qualifies; reaching 21 with more cards does not.
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        self.cards.len() == 2 && self.value() == BLACKJACK
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
