//! The decision provider the engine asks at each decision point.

extern crate alloc;

use alloc::string::String;

use crate::hand::Hand;

/// A turn action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Draw another card.
    Hit,
    /// Keep the current hand and end the turn.
    Stand,
}

/// Supplies the player's decisions.
///
/// Every call blocks the round until it returns. The engine validates what it
/// gets back and asks again when a name or bet is rejected, so implementations
/// may pass raw user input straight through.
pub trait DecisionProvider {
    /// Returns the player's name.
    fn player_name(&mut self) -> String;

    /// Returns the amount the player wants to bet out of `pot`.
    fn bet(&mut self, pot: usize) -> isize;

    /// Returns whether the player hits or stands on `hand`.
    fn hit_or_stand(&mut self, hand: &Hand) -> Action;

    /// Returns whether another round should be played.
    fn play_again(&mut self) -> bool;
}
