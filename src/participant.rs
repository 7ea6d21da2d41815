//! Player and dealer, and the turn protocol they share.

extern crate alloc;

use alloc::string::String;

use crate::decision::{Action, DecisionProvider};
use crate::deck::Deck;
use crate::error::{DeckError, NameError};
use crate::event::{Event, EventSink};
use crate::hand::Hand;
use crate::input::validate_name;

/// The dealer's display name.
pub const DEALER_NAME: &str = "Dealer";

/// Which side of the table a participant sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Seat {
    /// The player.
    Player,
    /// The dealer.
    Dealer,
}

/// How a participant's turn ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The participant stood without busting.
    Stood,
    /// The participant's hand went over 21.
    Busted,
}

/// Behaviour shared by the player and the dealer.
///
/// The turn protocol lives in [`Participant::take_turn`]: while the hand is
/// not bust, ask [`Participant::decide`]; a hit draws one card and asks
/// again, a stand ends the turn. Implementors only change how the decision
/// is made.
pub trait Participant {
    /// Returns the participant's seat.
    fn seat(&self) -> Seat;

    /// Returns the participant's name.
    fn name(&self) -> &str;

    /// Returns the participant's hand.
    fn hand(&self) -> &Hand;

    /// Returns the participant's hand for dealing.
    fn hand_mut(&mut self) -> &mut Hand;

    /// Chooses the next action. By default the decision provider is asked.
    fn decide<D: DecisionProvider + ?Sized>(&self, decisions: &mut D) -> Action {
        decisions.hit_or_stand(self.hand())
    }

    /// Plays the participant's turn to completion.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Exhausted`] if a hit finds the deck empty.
    fn take_turn<D, S>(
        &mut self,
        deck: &mut Deck,
        decisions: &mut D,
        sink: &mut S,
    ) -> Result<TurnOutcome, DeckError>
    where
        D: DecisionProvider + ?Sized,
        S: EventSink + ?Sized,
    {
        let seat = self.seat();
        loop {
            if self.hand().is_bust() {
                let value = self.hand().value();
                log::info!("{} busts with {value}", self.name());
                sink.notify(&Event::Busted { seat, value });
                return Ok(TurnOutcome::Busted);
            }

            match self.decide(decisions) {
                Action::Hit => {
                    let card = deck.draw_one()?;
                    self.hand_mut().add_card(card);
                    sink.notify(&Event::CardDrawn {
                        seat,
                        card,
                        value: self.hand().value(),
                    });
                }
                Action::Stand => {
                    let value = self.hand().value();
                    log::info!("{} stands on {value}", self.name());
                    sink.notify(&Event::Stood { seat, value });
                    return Ok(TurnOutcome::Stood);
                }
            }
        }
    }
}

/// The player: a named hand with a pot that carries over between rounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    name: String,
    hand: Hand,
    pot: usize,
}

impl Player {
    /// Creates a player with an empty hand.
    ///
    /// # Errors
    ///
    /// Returns [`NameError::Empty`] if the name is empty or whitespace only.
    pub fn new(name: &str, pot: usize) -> Result<Self, NameError> {
        Ok(Self {
            name: validate_name(name)?,
            hand: Hand::new(),
            pot,
        })
    }

    /// Returns the player's pot.
    #[must_use]
    pub const fn pot(&self) -> usize {
        self.pot
    }

    /// Adds winnings to the pot.
    pub(crate) const fn win_bet(&mut self, bet: usize) {
        self.pot = self.pot.saturating_add(bet);
    }

    /// Takes a lost bet out of the pot.
    pub(crate) const fn lose_bet(&mut self, bet: usize) {
        self.pot = self.pot.saturating_sub(bet);
    }
}

impl Participant for Player {
    fn seat(&self) -> Seat {
        Seat::Player
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn hand(&self) -> &Hand {
        &self.hand
    }

    fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }
}

/// The dealer, who plays a fixed policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dealer {
    hand: Hand,
    stands_above: u8,
}

impl Dealer {
    /// Creates a dealer who hits while the hand value is at most
    /// `stands_above`.
    #[must_use]
    pub const fn new(stands_above: u8) -> Self {
        Self {
            hand: Hand::new(),
            stands_above,
        }
    }

    /// Returns the highest value the dealer still hits on.
    #[must_use]
    pub const fn stands_above(&self) -> u8 {
        self.stands_above
    }
}

impl Participant for Dealer {
    fn seat(&self) -> Seat {
        Seat::Dealer
    }

    fn name(&self) -> &str {
        DEALER_NAME
    }

    fn hand(&self) -> &Hand {
        &self.hand
    }

    fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }

    /// Hits while the hand value is at most the threshold; never consults the
    /// decision provider.
    fn decide<D: DecisionProvider + ?Sized>(&self, _decisions: &mut D) -> Action {
        if self.hand.value() > u16::from(self.stands_above) {
            Action::Stand
        } else {
            Action::Hit
        }
    }
}
