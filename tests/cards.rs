//! Card, deck and hand scoring tests.

mod common;

use std::collections::HashSet;

use blackjack_engine::{Card, DECK_SIZE, Deck, DeckError, Hand, Rank, ScoringClass, Suit};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use common::card;

fn hand_of(ranks: &[Rank]) -> Hand {
    let mut hand = Hand::new();
    for &rank in ranks {
        hand.add_card(card(Suit::Spades, rank));
    }
    hand
}

fn face_value(rank: Rank) -> u16 {
    match rank.scoring_class() {
        ScoringClass::Numeric(n) => u16::from(n),
        ScoringClass::Ten => 10,
        ScoringClass::Ace => 11,
    }
}

#[test]
fn scoring_class_follows_rank() {
    assert_eq!(Rank::Ace.scoring_class(), ScoringClass::Ace);
    assert_eq!(Rank::King.scoring_class(), ScoringClass::Ten);
    assert_eq!(Rank::Queen.scoring_class(), ScoringClass::Ten);
    assert_eq!(Rank::Jack.scoring_class(), ScoringClass::Ten);
    assert_eq!(Rank::Ten.scoring_class(), ScoringClass::Numeric(10));
    assert_eq!(Rank::Two.scoring_class(), ScoringClass::Numeric(2));
    assert_eq!(
        card(Suit::Hearts, Rank::Seven).scoring_class(),
        ScoringClass::Numeric(7)
    );
}

#[test]
fn card_display_names_rank_and_suit() {
    assert_eq!(card(Suit::Spades, Rank::Ace).to_string(), "Ace of Spades");
    assert_eq!(card(Suit::Hearts, Rank::Ten).to_string(), "10 of Hearts");
    assert_eq!(card(Suit::Clubs, Rank::Queen).to_string(), "Queen of Clubs");
}

#[test]
fn hands_without_aces_sum_face_values() {
    let non_aces: Vec<Rank> = Rank::ALL
        .into_iter()
        .filter(|rank| *rank != Rank::Ace)
        .collect();

    for &first in &non_aces {
        for &second in &non_aces {
            let hand = hand_of(&[first, second]);
            assert_eq!(hand.value(), face_value(first) + face_value(second));
            assert!(!hand.is_soft());
        }
    }

    assert_eq!(hand_of(&[Rank::Jack, Rank::Queen, Rank::King]).value(), 30);
}

#[test]
fn single_ace_counts_eleven_when_it_fits() {
    for rank in [Rank::Two, Rank::Five, Rank::Nine, Rank::Ten, Rank::King] {
        let hand = hand_of(&[Rank::Ace, rank]);
        assert_eq!(hand.value(), 11 + face_value(rank));
        assert!(hand.is_soft());
    }

    assert_eq!(hand_of(&[Rank::Ace, Rank::Four, Rank::Six]).value(), 21);
}

#[test]
fn ace_demotes_to_one_instead_of_busting() {
    let hand = hand_of(&[Rank::Ace, Rank::King, Rank::Five]);
    assert_eq!(hand.value(), 16);
    assert!(!hand.is_soft());
    assert!(!hand.is_bust());

    assert_eq!(hand_of(&[Rank::Ace, Rank::Ace]).value(), 12);
    assert_eq!(hand_of(&[Rank::Ace, Rank::Ace, Rank::Nine]).value(), 21);
    assert_eq!(
        hand_of(&[Rank::Ace, Rank::Ace, Rank::Ace, Rank::Ace]).value(),
        14
    );
    assert_eq!(
        hand_of(&[Rank::Ace, Rank::Ace, Rank::King, Rank::Queen]).value(),
        22
    );
}

#[test]
fn value_is_recomputed_as_cards_arrive() {
    let mut hand = hand_of(&[Rank::Ace, Rank::Six]);
    assert_eq!(hand.value(), 17);
    assert!(hand.is_soft());

    hand.add_card(card(Suit::Hearts, Rank::Nine));
    assert_eq!(hand.value(), 16);
    assert!(!hand.is_soft());

    hand.add_card(card(Suit::Hearts, Rank::Ace));
    assert_eq!(hand.value(), 17);
}

#[test]
fn bust_iff_value_over_twenty_one() {
    for &a in &Rank::ALL {
        for &b in &Rank::ALL {
            for &c in &Rank::ALL {
                let hand = hand_of(&[a, b, c]);
                assert_eq!(hand.is_bust(), hand.value() > 21);
            }
        }
    }

    assert!(hand_of(&[Rank::Ten, Rank::Nine, Rank::Five]).is_bust());
    assert!(!hand_of(&[Rank::Ten, Rank::Nine, Rank::Two]).is_bust());
}

#[test]
fn whole_deck_in_one_hand_is_counted_in_full() {
    let mut hand = Hand::new();
    for &suit in &Suit::ALL {
        for &rank in &Rank::ALL {
            hand.add_card(card(suit, rank));
        }
    }

    assert_eq!(hand.len(), DECK_SIZE);
    // 4 * (2 + ... + 10 + 3 * 10) plus four aces counted as 1
    assert_eq!(hand.value(), 340);
    assert!(hand.is_bust());
    assert!(!hand.is_soft());
}

#[test]
fn hand_tracks_cards_and_clears() {
    let mut hand = Hand::new();
    assert!(hand.is_empty());
    assert_eq!(hand.up_card(), None);

    hand.add_card(card(Suit::Hearts, Rank::Four));
    hand.add_card(card(Suit::Clubs, Rank::Jack));
    assert_eq!(hand.len(), 2);
    assert_eq!(hand.up_card(), Some(&card(Suit::Hearts, Rank::Four)));

    hand.clear();
    assert!(hand.is_empty());
    assert_eq!(hand.value(), 0);
}

#[test]
fn fresh_deck_holds_every_card_once() {
    let mut rng = ChaCha8Rng::seed_from_u64(11);
    let deck = Deck::shuffled(&mut rng);

    assert_eq!(deck.remaining(), DECK_SIZE);
    let unique: HashSet<Card> = deck.cards().iter().copied().collect();
    assert_eq!(unique.len(), DECK_SIZE);

    for suit in Suit::ALL {
        for rank in Rank::ALL {
            assert!(unique.contains(&Card::new(suit, rank)));
        }
    }
}

#[test]
fn drawn_cards_never_come_back() {
    let mut rng = ChaCha8Rng::seed_from_u64(12);
    let mut deck = Deck::shuffled(&mut rng);
    let mut drawn = HashSet::new();

    for n in 1..=DECK_SIZE {
        let card = deck.draw_one().unwrap();
        assert!(drawn.insert(card));
        assert_eq!(deck.remaining(), DECK_SIZE - n);
        assert!(!deck.cards().contains(&card));
    }

    assert!(deck.is_empty());
    assert_eq!(deck.draw_one().unwrap_err(), DeckError::Exhausted);
}

#[test]
fn stacked_deck_deals_in_order() {
    let draws = [
        card(Suit::Hearts, Rank::Two),
        card(Suit::Clubs, Rank::Ace),
        card(Suit::Spades, Rank::King),
    ];
    let mut deck = Deck::stacked(draws);

    assert_eq!(deck.draw_one(), Ok(draws[0]));
    assert_eq!(deck.draw_one(), Ok(draws[1]));
    assert_eq!(deck.draw_one(), Ok(draws[2]));
    assert_eq!(deck.draw_one(), Err(DeckError::Exhausted));
}

#[test]
fn shuffles_differ_between_seeds() {
    let first = Deck::shuffled(&mut ChaCha8Rng::seed_from_u64(1));
    let second = Deck::shuffled(&mut ChaCha8Rng::seed_from_u64(2));

    assert_ne!(first, second);
}
