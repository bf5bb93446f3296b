use crate::{sorted_by_rank, Card, Rank, RngState, Suit};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DECK_SIZE: usize = 54;
pub const HAND_SIZE: usize = 17;
pub const BOTTOM_SIZE: usize = 3;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DealError {
    #[error("deck holds {0} cards, dealing requires exactly {DECK_SIZE}")]
    WrongDeckSize(usize),
}

/// The 54-card draw pile for one round.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Deck {
    pub cards: Vec<Card>,
}

/// Positional deal artifact: three 17-card hands plus the bottom reserve
/// the landlord picks up after bidding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DealResult {
    pub hands: [Vec<Card>; 3],
    pub bottom: Vec<Card>,
}

impl Deck {
    /// The fixed identity set: 13 ranks across 4 suits plus both jokers.
    pub fn standard54() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades] {
            for rank in Rank::NUMERIC {
                cards.push(Card::new(suit, rank));
            }
        }
        cards.push(Card::little_joker());
        cards.push(Card::big_joker());
        Self { cards }
    }

    /// Fisher-Yates from the last index down, swapping with a uniform
    /// index in [0, i]. Every position is visited exactly once.
    pub fn shuffle(&mut self, rng: &mut RngState) {
        for i in (1..self.cards.len()).rev() {
            let j = rng.next_index(i);
            self.cards.swap(i, j);
        }
    }

    /// Splits by position: [0,17) / [17,34) / [34,51) to the seats in
    /// order, [51,54) to the bottom. Player hands come back rank-sorted;
    /// the bottom keeps deal order.
    pub fn deal(&self) -> Result<DealResult, DealError> {
        if self.cards.len() != DECK_SIZE {
            return Err(DealError::WrongDeckSize(self.cards.len()));
        }
        let hands = [
            sorted_by_rank(&self.cards[..HAND_SIZE]),
            sorted_by_rank(&self.cards[HAND_SIZE..2 * HAND_SIZE]),
            sorted_by_rank(&self.cards[2 * HAND_SIZE..3 * HAND_SIZE]),
        ];
        let bottom = self.cards[3 * HAND_SIZE..].to_vec();
        Ok(DealResult { hands, bottom })
    }
}
