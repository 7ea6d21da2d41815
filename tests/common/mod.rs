//! Shared helpers for the integration tests.

#![allow(dead_code)]

use blackjack_engine::{Action, Card, DecisionProvider, Game, GameOptions, Hand, Rank, Suit};

pub const fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

/// A decision provider that replays scripted answers.
///
/// Each queue is consumed front to back. Running out of names, bets or
/// replay answers fails the test; running out of actions stands.
#[derive(Debug, Default)]
pub struct Script {
    names: Vec<String>,
    bets: Vec<isize>,
    actions: Vec<Action>,
    again: Vec<bool>,
    pub bet_prompts: Vec<usize>,
    pub action_prompts: Vec<u16>,
}

impl Script {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn names(mut self, names: &[&str]) -> Self {
        self.names = names.iter().rev().map(|name| (*name).to_string()).collect();
        self
    }

    pub fn bets(mut self, bets: &[isize]) -> Self {
        self.bets = bets.iter().rev().copied().collect();
        self
    }

    pub fn actions(mut self, actions: &[Action]) -> Self {
        self.actions = actions.iter().rev().copied().collect();
        self
    }

    pub fn again(mut self, again: &[bool]) -> Self {
        self.again = again.iter().rev().copied().collect();
        self
    }
}

impl DecisionProvider for Script {
    fn player_name(&mut self) -> String {
        self.names.pop().expect("script ran out of names")
    }

    fn bet(&mut self, pot: usize) -> isize {
        self.bet_prompts.push(pot);
        self.bets.pop().expect("script ran out of bets")
    }

    fn hit_or_stand(&mut self, hand: &Hand) -> Action {
        self.action_prompts.push(hand.value());
        self.actions.pop().unwrap_or(Action::Stand)
    }

    fn play_again(&mut self) -> bool {
        self.again.pop().expect("script ran out of replay answers")
    }
}

/// Creates a game for "Ada" whose deck deals `draws` in order.
pub fn stacked_game(options: GameOptions, draws: &[Card]) -> Game {
    let mut game = Game::new(options, 1, "Ada").unwrap();
    game.deck = blackjack_engine::Deck::stacked(draws.iter().copied());
    game
}
