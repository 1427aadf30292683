//! Fixed dealer drawing strategy.

use crate::hand::Hand;

/// Value at which the dealer stops drawing.
pub const DEALER_STANDS_AT: u8 = 17;

/// What the dealer does next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DealerDecision {
    /// Draw another card.
    Hit,
    /// Keep the current hand.
    Stand,
}

/// The dealer's drawing rule.
///
/// The dealer hits below 17 and stands otherwise. With
/// `stand_on_soft_17` disabled, a soft 17 is hit as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DealerPolicy {
    /// Whether the dealer stands on soft 17.
    pub stand_on_soft_17: bool,
}

impl DealerPolicy {
    /// Creates a policy.
    #[must_use]
    pub const fn new(stand_on_soft_17: bool) -> Self {
        Self { stand_on_soft_17 }
    }

    /// Decides the dealer's next move for the given hand.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::{Card, DealerDecision, DealerPolicy, Hand, Rank, Suit};
    ///
    /// let mut hand = Hand::new();
    /// hand.add_card(Card::new(Suit::Clubs, Rank::King), true);
    /// hand.add_card(Card::new(Suit::Hearts, Rank::Six), true);
    /// assert_eq!(DealerPolicy::default().decide(&hand), DealerDecision::Hit);
    /// ```
    #[must_use]
    pub fn decide(&self, hand: &Hand) -> DealerDecision {
        let value = hand.value();
        if value < DEALER_STANDS_AT {
            return DealerDecision::Hit;
        }
        if value == DEALER_STANDS_AT && hand.is_soft() && !self.stand_on_soft_17 {
            return DealerDecision::Hit;
        }
        DealerDecision::Stand
    }
}

impl Default for DealerPolicy {
    fn default() -> Self {
        Self::new(true)
    }
}
