//! The 52-card deck used for a single round.

extern crate alloc;

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::DeckError;

/// A deck of cards. Cards are drawn from the top and never come back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    /// Remaining cards; the top of the deck is the end of the vector.
    cards: Vec<Card>,
}

impl Deck {
    /// Creates a full deck with one card per (rank, suit) pair, shuffled with
    /// the given random source.
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut cards = Self::standard_cards();
        cards.shuffle(rng);
        log::debug!("shuffled a fresh deck of {} cards", cards.len());
        Self { cards }
    }

    /// Creates a deck that deals `draws` in the given order.
    ///
    /// Stacked decks are not validated: they may hold fewer than 52 cards or
    /// repeat a card.
    pub fn stacked<I: IntoIterator<Item = Card>>(draws: I) -> Self {
        let mut cards: Vec<Card> = draws.into_iter().collect();
        cards.reverse();
        Self { cards }
    }

    fn standard_cards() -> Vec<Card> {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(suit, rank));
            }
        }
        cards
    }

    /// Removes and returns the top card.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Exhausted`] if no cards remain.
    pub fn draw_one(&mut self) -> Result<Card, DeckError> {
        let card = self.cards.pop().ok_or(DeckError::Exhausted)?;
        log::debug!("drew {card} ({} left)", self.cards.len());
        Ok(card)
    }

    /// Returns the number of cards left in the deck.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the remaining cards, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}
