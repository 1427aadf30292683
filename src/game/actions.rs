use crate::card::Card;
use crate::error::ActionError;

use super::{Game, GameState};

impl Game {
    const fn ensure_player_turn(&self) -> Result<(), ActionError> {
        if !self.state.accepts_player_commands() {
            return Err(ActionError::InvalidState);
        }
        Ok(())
    }

    /// Player action: Hit (draw a card).
    ///
    /// A bust ends the round immediately.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in player turn state or the deck is
    /// empty. Neither case changes the game.
    pub fn player_hit(&mut self) -> Result<Card, ActionError> {
        self.ensure_player_turn()?;

        let card = self.deck.draw()?;
        self.player.add_card(card, true);
        log::debug!("player hits {card}, value {}", self.player.value());

        if self.player.is_bust() {
            if self.options.reveal_hole_on_player_bust {
                self.dealer.reveal_all();
            }
            self.set_state(GameState::GameOver);
        }

        Ok(card)
    }

    /// Player action: Stand (keep current hand).
    ///
    /// Reveals the dealer's hole card and hands the turn to the dealer. With
    /// [`GameOptions::dealer_plays_on_stand`](crate::GameOptions) enabled the
    /// dealer turn is played out before returning.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in player turn state, or if the
    /// deck runs out while the dealer must still draw. Either way the game is
    /// left exactly as it was before the call.
    pub fn player_stand(&mut self) -> Result<(), ActionError> {
        self.ensure_player_turn()?;

        // Play on a copy so a failed dealer turn leaves nothing behind.
        let mut next = self.clone();
        next.dealer.reveal_all();
        log::debug!(
            "player stands on {}, dealer reveals {}",
            next.player.value(),
            next.dealer.value()
        );
        next.set_state(GameState::DealerTurn);

        if next.options.dealer_plays_on_stand {
            next.dealer_play()?;
        }

        *self = next;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::card::{Card, Rank, Suit};
    use crate::deck::Deck;
    use crate::error::{ActionError, ShowdownError};
    use crate::game::{Game, GameState};
    use crate::hand::CardView;
    use crate::options::GameOptions;

    fn exhausted_deck() -> Deck {
        let mut deck = Deck::new();
        while deck.draw().is_ok() {}
        deck
    }

    // Player 4♠ 3♠, dealer 2♠ (hole) A♠: the dealer must draw on 13.
    fn start_low_round(game: &mut Game) {
        let deck = Deck::stacked(&[
            Card::new(Suit::Spades, Rank::Four),
            Card::new(Suit::Spades, Rank::Three),
            Card::new(Suit::Spades, Rank::Two),
            Card::new(Suit::Spades, Rank::Ace),
        ])
        .unwrap();
        game.start_round_with_deck(deck).unwrap();
        game.deck = exhausted_deck();
    }

    #[test]
    fn failed_stand_leaves_the_round_untouched() {
        let mut game = Game::new(GameOptions::default());
        start_low_round(&mut game);

        let dealer_before = game.dealer_hand();
        assert_eq!(game.player_stand().unwrap_err(), ActionError::EmptyDeck);
        assert_eq!(game.state(), GameState::PlayerTurn);
        assert_eq!(game.dealer_hand(), dealer_before);
        assert_eq!(game.dealer_hand()[0], CardView::FaceDown);

        assert_eq!(game.player_hit().unwrap_err(), ActionError::EmptyDeck);
        assert_eq!(game.player_hand().len(), 2);
        assert_eq!(game.state(), GameState::PlayerTurn);
    }

    #[test]
    fn stepwise_stand_leaves_the_empty_deck_to_the_dealer_turn() {
        let mut game = Game::new(GameOptions::default().with_dealer_plays_on_stand(false));
        start_low_round(&mut game);

        game.player_stand().unwrap();
        assert_eq!(game.state(), GameState::DealerTurn);
        assert!(game.dealer_hand().iter().all(|view| view.is_face_up()));

        assert_eq!(game.dealer_step().unwrap_err(), ShowdownError::EmptyDeck);
        assert_eq!(game.dealer_hand().len(), 2);
        assert_eq!(game.state(), GameState::DealerTurn);
    }
}
