use core::cmp::Ordering;

use crate::decision::DecisionProvider;
use crate::error::{ActionError, ShowdownError};
use crate::event::EventSink;
use crate::participant::{Participant, TurnOutcome};
use crate::result::{HandOutcome, RoundResult};

use super::{Game, GameState};

impl Game {
    /// Dealer plays their hand according to the house rule.
    ///
    /// The dealer draws while the hand value is at most
    /// [`GameOptions::dealer_stands_above`](crate::GameOptions::dealer_stands_above).
    /// `decisions` is passed through the shared turn protocol but the dealer
    /// never asks it.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in dealer turn state or the deck
    /// runs out while the dealer must draw.
    pub fn dealer_turn<D, S>(
        &mut self,
        decisions: &mut D,
        sink: &mut S,
    ) -> Result<TurnOutcome, ActionError>
    where
        D: DecisionProvider + ?Sized,
        S: EventSink + ?Sized,
    {
        if self.state != GameState::DealerTurn {
            return Err(ActionError::InvalidState);
        }

        let outcome = self
            .dealer
            .take_turn(&mut self.deck, decisions, sink)
            .inspect_err(|err| log::error!("dealer turn aborted: {err}"))?;

        self.state = GameState::RoundOver;

        Ok(outcome)
    }

    /// Compares the hands and settles the bet against the player's pot.
    ///
    /// A player bust loses before anything else is looked at, then a dealer
    /// bust wins, then the higher value wins. Equal values push.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in round-over state.
    pub fn settle(&mut self) -> Result<RoundResult, ShowdownError> {
        if self.state != GameState::RoundOver {
            return Err(ShowdownError::InvalidState);
        }
        let Some(bet) = self.bet else {
            return Err(ShowdownError::InvalidState);
        };

        let player_value = self.player.hand().value();
        let player_bust = self.player.hand().is_bust();
        let dealer_value = self.dealer.hand().value();
        let dealer_bust = self.dealer.hand().is_bust();

        let outcome = if player_bust {
            HandOutcome::Lose
        } else if dealer_bust {
            HandOutcome::Win
        } else {
            match player_value.cmp(&dealer_value) {
                Ordering::Greater => HandOutcome::Win,
                Ordering::Less => HandOutcome::Lose,
                Ordering::Equal => HandOutcome::Push,
            }
        };

        let stake = isize::try_from(bet).unwrap_or(isize::MAX);
        let net = match outcome {
            HandOutcome::Win => {
                self.player.win_bet(bet);
                stake
            }
            HandOutcome::Lose => {
                self.player.lose_bet(bet);
                -stake
            }
            HandOutcome::Push => 0,
        };

        self.state = GameState::Settled;

        let pot = self.player.pot();
        log::info!(
            "settled {outcome:?}: player {player_value} vs dealer {dealer_value}, pot now {pot}"
        );

        Ok(RoundResult {
            outcome,
            bet,
            player_value,
            dealer_value,
            player_bust,
            dealer_bust,
            pot,
            net,
        })
    }
}
