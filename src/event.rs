//! Notifications sent to the presentation layer.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use crate::card::Card;
use crate::error::{BetError, NameError};
use crate::hand::Hand;
use crate::participant::Seat;
use crate::result::RoundResult;

/// Something that happened at the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The player took a seat.
    PlayerSeated {
        /// The player's name.
        name: String,
        /// The player's starting pot.
        pot: usize,
    },
    /// A name was rejected and will be asked for again.
    NameRejected(NameError),
    /// Two cards each were dealt. Only the dealer's up card is shown.
    InitialDeal {
        /// The player's two cards.
        player: Hand,
        /// The dealer's face-up card.
        dealer_up: Card,
    },
    /// A bet was rejected and will be asked for again.
    BetRejected {
        /// The amount offered.
        amount: isize,
        /// Why it was rejected.
        error: BetError,
    },
    /// A bet was accepted.
    BetPlaced {
        /// The bet amount.
        amount: usize,
        /// The player's pot at the time of the bet.
        pot: usize,
    },
    /// A participant hit and received a card.
    CardDrawn {
        /// Who drew the card.
        seat: Seat,
        /// The card drawn.
        card: Card,
        /// The hand value after the draw.
        value: u16,
    },
    /// A participant stood.
    Stood {
        /// Who stood.
        seat: Seat,
        /// The final hand value.
        value: u16,
    },
    /// A participant busted.
    Busted {
        /// Who busted.
        seat: Seat,
        /// The final hand value.
        value: u16,
    },
    /// Both hands were turned over before settlement.
    HandsRevealed {
        /// The player's final hand.
        player: Hand,
        /// The dealer's final hand.
        dealer: Hand,
    },
    /// The round was settled.
    RoundSettled(RoundResult),
    /// A new deck was shuffled for the next round.
    Reshuffled,
    /// The session is over.
    SessionEnded {
        /// The pot the player walks away with.
        pot: usize,
    },
}

/// Receives table events.
///
/// Sinks only observe; they cannot influence the round.
pub trait EventSink {
    /// Handles an event.
    fn notify(&mut self, event: &Event);
}

/// Discards every event.
impl EventSink for () {
    fn notify(&mut self, _event: &Event) {}
}

/// Records every event in order.
impl EventSink for Vec<Event> {
    fn notify(&mut self, event: &Event) {
        self.push(event.clone());
    }
}

/// Forwards every event to the [`log`] facade at info level.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl EventSink for LogSink {
    fn notify(&mut self, event: &Event) {
        log::info!("{event:?}");
    }
}
