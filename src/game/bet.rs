use crate::decision::DecisionProvider;
use crate::error::{BetError, DealError};
use crate::event::{Event, EventSink};
use crate::input::validate_bet;
use crate::participant::Participant;

use super::{Game, GameState};

/// Cards needed for the opening deal.
const INITIAL_CARDS: usize = 4;

impl Game {
    /// Deals two cards each, alternating player and dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in dealing state or fewer than four
    /// cards are left in the deck.
    pub fn deal(&mut self) -> Result<(), DealError> {
        if self.state != GameState::Dealing {
            return Err(DealError::InvalidState);
        }

        if self.deck.remaining() < INITIAL_CARDS {
            log::error!("deck has {} cards, cannot deal", self.deck.remaining());
            return Err(DealError::DeckExhausted);
        }

        for _ in 0..2 {
            let card = self.deck.draw_one()?;
            self.player.hand_mut().add_card(card);
            let card = self.deck.draw_one()?;
            self.dealer.hand_mut().add_card(card);
        }

        self.state = GameState::Betting;
        Ok(())
    }

    /// Places the player's bet for this round.
    ///
    /// The pot is not touched until the round is settled.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in betting state, or the amount is
    /// not in `1..=pot`.
    pub fn place_bet(&mut self, amount: isize) -> Result<usize, BetError> {
        if self.state != GameState::Betting {
            return Err(BetError::InvalidState);
        }

        let amount = validate_bet(amount, self.player.pot())?;
        self.bet = Some(amount);
        self.state = GameState::PlayerTurn;
        log::info!("{} bets {amount}", self.player.name());

        Ok(amount)
    }

    /// Asks for a bet until one is accepted.
    pub(super) fn collect_bet<D, S>(
        &mut self,
        decisions: &mut D,
        sink: &mut S,
    ) -> Result<usize, BetError>
    where
        D: DecisionProvider + ?Sized,
        S: EventSink + ?Sized,
    {
        loop {
            let pot = self.player.pot();
            let offered = decisions.bet(pot);

            match self.place_bet(offered) {
                Ok(amount) => {
                    sink.notify(&Event::BetPlaced { amount, pot });
                    return Ok(amount);
                }
                Err(BetError::InvalidState) => return Err(BetError::InvalidState),
                Err(error) => {
                    log::warn!("rejected bet of {offered}: {error}");
                    sink.notify(&Event::BetRejected {
                        amount: offered,
                        error,
                    });
                }
            }
        }
    }
}
