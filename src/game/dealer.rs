use alloc::vec::Vec;

use crate::card::Card;
use crate::error::ShowdownError;
use crate::policy::DealerDecision;
use crate::result::{RoundResult, evaluate};

use super::{DealerStep, Game, GameState};

impl Game {
    fn dealer_done(&self) -> bool {
        self.dealer.is_bust() || self.policy.decide(&self.dealer) == DealerDecision::Stand
    }

    fn finish_dealer_turn(&mut self) {
        log::debug!("dealer finishes on {}", self.dealer.value());
        self.set_state(GameState::GameOver);
    }

    /// Plays a single step of the dealer turn.
    ///
    /// Each call consults the dealer policy once and draws at most one card.
    /// When the dealer stands or busts, the round moves to `GameOver` and the
    /// returned step is marked as concluded.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in dealer turn state, or the deck
    /// is empty while the dealer must draw.
    pub fn dealer_step(&mut self) -> Result<DealerStep, ShowdownError> {
        if self.state != GameState::DealerTurn {
            return Err(ShowdownError::InvalidState);
        }

        if self.dealer_done() {
            self.finish_dealer_turn();
            return Ok(DealerStep {
                drawn: None,
                concluded: true,
            });
        }

        let card = self.deck.draw()?;
        self.dealer.add_card(card, true);
        log::debug!("dealer hits {card}, value {}", self.dealer.value());

        let concluded = self.dealer_done();
        if concluded {
            self.finish_dealer_turn();
        }

        Ok(DealerStep {
            drawn: Some(card),
            concluded,
        })
    }

    /// Dealer plays their hand according to the rules.
    ///
    /// The dealer draws until reaching 17 or higher, or busting. Returns the
    /// cards drawn by the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in dealer turn state or the deck is
    /// empty while the dealer must draw.
    pub fn dealer_play(&mut self) -> Result<Vec<Card>, ShowdownError> {
        let mut drawn_cards = Vec::new();

        // Every non-final step draws a card, so the deck bounds the loop.
        loop {
            let step = self.dealer_step()?;
            if let Some(card) = step.drawn {
                drawn_cards.push(card);
            }
            if step.concluded {
                break;
            }
        }

        Ok(drawn_cards)
    }

    /// Returns the result of the finished round.
    ///
    /// The result discloses the dealer's full total, so a hole card left
    /// face-down after a player bust is no longer secret once this is read.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in game over state.
    pub fn result(&self) -> Result<RoundResult, ShowdownError> {
        if self.state != GameState::GameOver {
            return Err(ShowdownError::InvalidState);
        }

        Ok(evaluate(&self.player, &self.dealer))
    }
}
