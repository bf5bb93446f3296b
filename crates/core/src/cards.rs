use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Jokers only.
    None,
    Hearts,
    Diamonds,
    Clubs,
    Spades,
}

/// Ranks in gameplay order. Two sits above Ace; the jokers top everything.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Rank {
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
    Two,
    LittleJoker,
    BigJoker,
}

impl Rank {
    pub const NUMERIC: [Rank; 13] = [
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
        Rank::Two,
    ];

    /// Comparison scale: 3..10, J=11, Q=12, K=13, A=14, Two=15, jokers 16/17.
    pub fn value(self) -> u8 {
        match self {
            Rank::Three => 3,
            Rank::Four => 4,
            Rank::Five => 5,
            Rank::Six => 6,
            Rank::Seven => 7,
            Rank::Eight => 8,
            Rank::Nine => 9,
            Rank::Ten => 10,
            Rank::Jack => 11,
            Rank::Queen => 12,
            Rank::King => 13,
            Rank::Ace => 14,
            Rank::Two => 15,
            Rank::LittleJoker => 16,
            Rank::BigJoker => 17,
        }
    }

    pub fn is_joker(self) -> bool {
        matches!(self, Rank::LittleJoker | Rank::BigJoker)
    }

    /// Whether this rank may appear in a straight, pair sequence or
    /// airplane run. Two and the jokers never chain.
    pub fn can_chain(self) -> bool {
        self.value() <= Rank::Ace.value()
    }
}

impl PartialOrd for Rank {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Rank {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value().cmp(&other.value())
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rank::Jack => write!(f, "J"),
            Rank::Queen => write!(f, "Q"),
            Rank::King => write!(f, "K"),
            Rank::Ace => write!(f, "A"),
            Rank::Two => write!(f, "2"),
            Rank::LittleJoker => write!(f, "joker"),
            Rank::BigJoker => write!(f, "JOKER"),
            other => write!(f, "{}", other.value()),
        }
    }
}

/// One physical card. Suit is cosmetic: equality covers both fields so
/// the 54 deck identities stay distinct, but gameplay ordering and every
/// legality rule look at the rank alone.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
}

impl Card {
    pub fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    pub fn little_joker() -> Self {
        Self::new(Suit::None, Rank::LittleJoker)
    }

    pub fn big_joker() -> Self {
        Self::new(Suit::None, Rank::BigJoker)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mark = match self.suit {
            Suit::None => "",
            Suit::Hearts => "\u{2665}",
            Suit::Diamonds => "\u{2666}",
            Suit::Clubs => "\u{2663}",
            Suit::Spades => "\u{2660}",
        };
        write!(f, "{}{}", mark, self.rank)
    }
}

/// Sorts by rank, keeping the input untouched.
pub fn sorted_by_rank(cards: &[Card]) -> Vec<Card> {
    let mut out = cards.to_vec();
    out.sort_by_key(|card| card.rank.value());
    out
}
