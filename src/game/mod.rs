//! Round engine and state management.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::deck::Deck;
use crate::error::NameError;
use crate::options::GameOptions;
use crate::participant::{Dealer, Participant, Player};

mod actions;
mod bet;
mod dealer;
mod session;
pub mod state;

pub use state::GameState;

/// A blackjack game engine for one player against the dealer.
///
/// The game owns the deck, the player, the dealer and the random source used
/// for shuffling. A round moves through [`GameState`] either step by step
/// ([`Game::deal`], [`Game::place_bet`], [`Game::player_turn`],
/// [`Game::dealer_turn`], [`Game::settle`]) or all at once with
/// [`Game::play_round`].
#[derive(Debug, Clone)]
pub struct Game {
    /// Cards for the current round.
    pub deck: Deck,
    /// Game options.
    options: GameOptions,
    /// Current game state.
    state: GameState,
    /// The player.
    player: Player,
    /// The dealer.
    dealer: Dealer,
    /// Accepted bet for the current round.
    bet: Option<usize>,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a new game with the given seed, seating a player with the
    /// starting pot from `options`.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack_engine::{Game, GameOptions, GameState};
    ///
    /// let game = Game::new(GameOptions::default(), 42, "Ada").unwrap();
    /// assert_eq!(game.state(), GameState::Dealing);
    /// assert_eq!(game.player().pot(), 1_000);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`NameError::Empty`] if `player_name` is blank.
    pub fn new(options: GameOptions, seed: u64, player_name: &str) -> Result<Self, NameError> {
        let player = Player::new(player_name, options.starting_pot)?;
        Ok(Self::with_player(options, seed, player))
    }

    fn with_player(options: GameOptions, seed: u64, player: Player) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let deck = Deck::shuffled(&mut rng);

        Self {
            deck,
            options,
            state: GameState::Dealing,
            player,
            dealer: Dealer::new(options.dealer_stands_above),
            bet: None,
            rng,
        }
    }

    /// Starts a new round: shuffles a fresh deck and clears both hands.
    ///
    /// The player's pot carries over. A bet that was placed but not settled
    /// is dropped without touching the pot.
    pub fn reset_round(&mut self) {
        self.deck = Deck::shuffled(&mut self.rng);
        self.player.hand_mut().clear();
        self.dealer.hand_mut().clear();
        self.bet = None;
        self.state = GameState::Dealing;
        log::debug!("round reset; pot carried over: {}", self.player.pot());
    }

    /// Returns the options the game was created with.
    ///
    /// Options are fixed for the lifetime of the game; the dealer's threshold
    /// is taken from them when the game is built.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the player.
    #[must_use]
    pub const fn player(&self) -> &Player {
        &self.player
    }

    /// Returns the dealer.
    #[must_use]
    pub const fn dealer(&self) -> &Dealer {
        &self.dealer
    }

    /// Returns the accepted bet for the current round, if any.
    #[must_use]
    pub const fn bet(&self) -> Option<usize> {
        self.bet
    }

    /// Returns the number of cards remaining in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.remaining()
    }
}
