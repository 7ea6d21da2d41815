//! Card types.

use core::fmt;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
    /// Spades.
    Spades,
}

impl Suit {
    /// All four suits.
    pub const ALL: [Self; 4] = [Self::Hearts, Self::Diamonds, Self::Clubs, Self::Spades];
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Hearts => "Hearts",
            Self::Diamonds => "Diamonds",
            Self::Clubs => "Clubs",
            Self::Spades => "Spades",
        })
    }
}

/// Card rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rank {
    /// 2.
    Two,
    /// 3.
    Three,
    /// 4.
    Four,
    /// 5.
    Five,
    /// 6.
    Six,
    /// 7.
    Seven,
    /// 8.
    Eight,
    /// 9.
    Nine,
    /// 10.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
    /// Ace.
    Ace,
}

impl Rank {
    /// All thirteen ranks, lowest first.
    pub const ALL: [Self; 13] = [
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
        Self::Ace,
    ];

    /// Returns how this rank contributes to a hand total.
    #[must_use]
    pub const fn scoring_class(self) -> ScoringClass {
        match self {
            Self::Two => ScoringClass::Numeric(2),
            Self::Three => ScoringClass::Numeric(3),
            Self::Four => ScoringClass::Numeric(4),
            Self::Five => ScoringClass::Numeric(5),
            Self::Six => ScoringClass::Numeric(6),
            Self::Seven => ScoringClass::Numeric(7),
            Self::Eight => ScoringClass::Numeric(8),
            Self::Nine => ScoringClass::Numeric(9),
            Self::Ten => ScoringClass::Numeric(10),
            Self::Jack | Self::Queen | Self::King => ScoringClass::Ten,
            Self::Ace => ScoringClass::Ace,
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self, self.scoring_class()) {
            (_, ScoringClass::Numeric(n)) => write!(f, "{n}"),
            (Self::Jack, _) => f.write_str("Jack"),
            (Self::Queen, _) => f.write_str("Queen"),
            (Self::King, _) => f.write_str("King"),
            _ => f.write_str("Ace"),
        }
    }
}

/// How a card is counted towards a hand total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScoringClass {
    /// Counts as 11, or 1 when 11 would bust the hand.
    Ace,
    /// Jack, Queen or King; counts as 10.
    Ten,
    /// Counts as its face value.
    Numeric(u8),
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card.
    pub rank: Rank,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    /// Returns the scoring class of the card's rank.
    #[must_use]
    pub const fn scoring_class(&self) -> ScoringClass {
        self.rank.scoring_class()
    }

    /// Returns whether the card is an ace.
    #[must_use]
    pub const fn is_ace(&self) -> bool {
        matches!(self.rank, Rank::Ace)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.rank, self.suit)
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;
