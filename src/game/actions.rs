use crate::decision::DecisionProvider;
use crate::error::ActionError;
use crate::event::EventSink;
use crate::participant::{Participant, TurnOutcome};

use super::{Game, GameState};

impl Game {
    /// Plays the player's turn, asking `decisions` after every card until the
    /// player stands or busts.
    ///
    /// A bust ends the round: the dealer does not play.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in player turn state or the deck
    /// runs out.
    pub fn player_turn<D, S>(
        &mut self,
        decisions: &mut D,
        sink: &mut S,
    ) -> Result<TurnOutcome, ActionError>
    where
        D: DecisionProvider + ?Sized,
        S: EventSink + ?Sized,
    {
        if self.state != GameState::PlayerTurn {
            return Err(ActionError::InvalidState);
        }

        let outcome = self
            .player
            .take_turn(&mut self.deck, decisions, sink)
            .inspect_err(|err| log::error!("player turn aborted: {err}"))?;

        self.state = match outcome {
            TurnOutcome::Stood => GameState::DealerTurn,
            TurnOutcome::Busted => GameState::RoundOver,
        };

        Ok(outcome)
    }
}
