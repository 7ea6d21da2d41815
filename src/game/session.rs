use crate::decision::DecisionProvider;
use crate::error::{DealError, RoundError};
use crate::event::{Event, EventSink};
use crate::options::GameOptions;
use crate::participant::{Participant, Player, TurnOutcome};
use crate::result::RoundResult;

use super::{Game, GameState};

impl Game {
    /// Asks `decisions` for the player's name until a non-blank one is given,
    /// then creates a game for that player.
    pub fn join<D, S>(options: GameOptions, seed: u64, decisions: &mut D, sink: &mut S) -> Self
    where
        D: DecisionProvider + ?Sized,
        S: EventSink + ?Sized,
    {
        let player = loop {
            match Player::new(&decisions.player_name(), options.starting_pot) {
                Ok(player) => break player,
                Err(err) => {
                    log::warn!("rejected player name: {err}");
                    sink.notify(&Event::NameRejected(err));
                }
            }
        };

        sink.notify(&Event::PlayerSeated {
            name: player.name().into(),
            pot: player.pot(),
        });

        Self::with_player(options, seed, player)
    }

    /// Plays one full round: deal, bet, player turn, dealer turn and
    /// settlement.
    ///
    /// The game must be in [`GameState::Dealing`]; call
    /// [`Game::reset_round`] between rounds.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::OutOfFunds`] if the player's pot is empty, and
    /// a wrapped step error if the game is in the wrong state or the deck
    /// runs out.
    pub fn play_round<D, S>(
        &mut self,
        decisions: &mut D,
        sink: &mut S,
    ) -> Result<RoundResult, RoundError>
    where
        D: DecisionProvider + ?Sized,
        S: EventSink + ?Sized,
    {
        if self.state != GameState::Dealing {
            return Err(DealError::InvalidState.into());
        }
        if self.player.pot() == 0 {
            return Err(RoundError::OutOfFunds);
        }

        self.deal()?;
        if let Some(&dealer_up) = self.dealer.hand().up_card() {
            sink.notify(&Event::InitialDeal {
                player: self.player.hand().clone(),
                dealer_up,
            });
        }

        self.collect_bet(decisions, sink)?;

        if self.player_turn(decisions, sink)? == TurnOutcome::Stood {
            self.dealer_turn(decisions, sink)?;
        }

        sink.notify(&Event::HandsRevealed {
            player: self.player.hand().clone(),
            dealer: self.dealer.hand().clone(),
        });

        let result = self.settle()?;
        sink.notify(&Event::RoundSettled(result));

        Ok(result)
    }

    /// Plays rounds until the player declines another or runs out of funds.
    ///
    /// A fresh deck is shuffled between rounds. Returns the pot the player
    /// walks away with.
    ///
    /// # Errors
    ///
    /// Returns the first error from [`Game::play_round`].
    pub fn play_session<D, S>(
        &mut self,
        decisions: &mut D,
        sink: &mut S,
    ) -> Result<usize, RoundError>
    where
        D: DecisionProvider + ?Sized,
        S: EventSink + ?Sized,
    {
        if self.state != GameState::Dealing {
            self.reset_round();
        }

        while self.player.pot() > 0 {
            self.play_round(decisions, sink)?;

            if self.player.pot() == 0 || !decisions.play_again() {
                break;
            }

            self.reset_round();
            sink.notify(&Event::Reshuffled);
        }

        let pot = self.player.pot();
        log::info!("{} walks away with {pot}", self.player.name());
        sink.notify(&Event::SessionEnded { pot });

        Ok(pot)
    }
}
