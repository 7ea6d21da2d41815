//! Game state types.

/// Where the current round stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Fresh deck and empty hands; waiting for the deal.
    Dealing,
    /// Cards are dealt; waiting for the player's bet.
    Betting,
    /// Waiting for the player's actions.
    PlayerTurn,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Round has ended and results can be settled.
    RoundOver,
    /// The bet has been settled; the round can be reset.
    Settled,
}
