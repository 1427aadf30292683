//! Game configuration options.

/// Configuration options for a blackjack game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use twentyone::GameOptions;
///
/// let options = GameOptions::default()
///     .with_stand_on_soft_17(false)
///     .with_dealer_plays_on_stand(false);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameOptions {
    /// Whether dealer stands on soft 17.
    pub stand_on_soft_17: bool,
    /// Whether standing plays out the dealer turn immediately.
    ///
    /// When disabled the round waits in `DealerTurn` until
    /// `dealer_step` or `dealer_play` is called.
    pub dealer_plays_on_stand: bool,
    /// Whether a player bust turns the dealer's hole card face-up.
    pub reveal_hole_on_player_bust: bool,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            stand_on_soft_17: true,
            dealer_plays_on_stand: true,
            reveal_hole_on_player_bust: false,
        }
    }
}

impl GameOptions {
    /// Sets whether dealer stands on soft 17.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::GameOptions;
    ///
    /// let options = GameOptions::default().with_stand_on_soft_17(false);
    /// assert_eq!(options.stand_on_soft_17, false);
    /// ```
    #[must_use]
    pub const fn with_stand_on_soft_17(mut self, stand: bool) -> Self {
        self.stand_on_soft_17 = stand;
        self
    }

    /// Sets whether standing plays out the dealer turn immediately.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::GameOptions;
    ///
    /// let options = GameOptions::default().with_dealer_plays_on_stand(false);
    /// assert_eq!(options.dealer_plays_on_stand, false);
    /// ```
    #[must_use]
    pub const fn with_dealer_plays_on_stand(mut self, auto: bool) -> Self {
        self.dealer_plays_on_stand = auto;
        self
    }

    /// Sets whether a player bust reveals the dealer's hole card.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::GameOptions;
    ///
    /// let options = GameOptions::default().with_reveal_hole_on_player_bust(true);
    /// assert_eq!(options.reveal_hole_on_player_bust, true);
    /// ```
    #[must_use]
    pub const fn with_reveal_hole_on_player_bust(mut self, reveal: bool) -> Self {
        self.reveal_hole_on_player_bust = reveal;
        self
    }
}
