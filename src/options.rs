//! Game configuration options.

/// Configuration options for a blackjack game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use blackjack_engine::GameOptions;
///
/// let options = GameOptions::default()
///     .with_starting_pot(500)
///     .with_dealer_stands_above(16);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameOptions {
    /// Funds the player starts the session with.
    pub starting_pot: usize,
    /// The dealer hits while the hand value is at most this, and stands once
    /// it is higher.
    pub dealer_stands_above: u8,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            starting_pot: 1_000,
            dealer_stands_above: 17,
        }
    }
}

impl GameOptions {
    /// Sets the player's starting funds.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack_engine::GameOptions;
    ///
    /// let options = GameOptions::default().with_starting_pot(250);
    /// assert_eq!(options.starting_pot, 250);
    /// ```
    #[must_use]
    pub const fn with_starting_pot(mut self, pot: usize) -> Self {
        self.starting_pot = pot;
        self
    }

    /// Sets the dealer's standing threshold.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack_engine::GameOptions;
    ///
    /// let options = GameOptions::default().with_dealer_stands_above(16);
    /// assert_eq!(options.dealer_stands_above, 16);
    /// ```
    #[must_use]
    pub const fn with_dealer_stands_above(mut self, threshold: u8) -> Self {
        self.dealer_stands_above = threshold;
        self
    }
}
