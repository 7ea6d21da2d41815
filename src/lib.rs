//! A single-player blackjack engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that runs the round flow: dealing,
//! betting, the player's turn, the dealer's turn and settlement against the
//! player's pot. Decisions come from a [`DecisionProvider`] and everything
//! that happens at the table is reported to an [`EventSink`].
//!
//! # Example
//!
//! ```no_run
//! use blackjack_engine::{Game, GameOptions, LogSink};
//!
//! # fn run(decisions: &mut impl blackjack_engine::DecisionProvider) {
//! let mut game = Game::join(GameOptions::default(), 42, decisions, &mut LogSink);
//! let _pot = game.play_session(decisions, &mut LogSink);
//! # }
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod decision;
pub mod deck;
pub mod error;
pub mod event;
pub mod game;
pub mod hand;
pub mod input;
pub mod options;
pub mod participant;
pub mod result;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, ScoringClass, Suit};
pub use decision::{Action, DecisionProvider};
pub use deck::Deck;
pub use error::{
    ActionError, BetError, ChoiceError, DealError, DeckError, NameError, RoundError, ShowdownError,
};
pub use event::{Event, EventSink, LogSink};
pub use game::{Game, GameState};
pub use hand::{BLACKJACK, Hand};
pub use options::GameOptions;
pub use participant::{DEALER_NAME, Dealer, Participant, Player, Seat, TurnOutcome};
pub use result::{HandOutcome, RoundResult};
