use crate::{sorted_by_rank, Card};
use serde::{Deserialize, Serialize};

/// Fixed three-seat table. Bottom is the primary (human) seat; Left and
/// Right are the display convention's -1 / +1 positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Seat {
    Left,
    Bottom,
    Right,
}

impl Seat {
    pub const ALL: [Seat; 3] = [Seat::Left, Seat::Bottom, Seat::Right];

    /// Display offset relative to the primary seat.
    pub fn index(self) -> i8 {
        match self {
            Seat::Left => -1,
            Seat::Bottom => 0,
            Seat::Right => 1,
        }
    }

    /// Position in deal and rotation order.
    pub fn ordinal(self) -> usize {
        match self {
            Seat::Left => 0,
            Seat::Bottom => 1,
            Seat::Right => 2,
        }
    }
}

/// One participant. Created at session init and only reset at round
/// boundaries; the hand is owned here exclusively.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub seat: Seat,
    pub name: String,
    hand: Vec<Card>,
    pub is_landlord: bool,
    pub bid: Option<bool>,
}

impl Player {
    pub fn new(seat: Seat, name: impl Into<String>) -> Self {
        Self {
            seat,
            name: name.into(),
            hand: Vec::new(),
            is_landlord: false,
            bid: None,
        }
    }

    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    pub fn card_count(&self) -> usize {
        self.hand.len()
    }

    pub fn set_hand(&mut self, cards: Vec<Card>) {
        self.hand = cards;
    }

    /// Multiset containment: every selected card, duplicates included,
    /// must be present in the hand.
    pub fn holds_all(&self, cards: &[Card]) -> bool {
        let mut pool = self.hand.clone();
        cards.iter().all(|card| {
            if let Some(at) = pool.iter().position(|held| held == card) {
                pool.swap_remove(at);
                true
            } else {
                false
            }
        })
    }

    /// Commits a play. Returns false (leaving the hand untouched) if any
    /// selected card is missing.
    pub fn remove_cards(&mut self, cards: &[Card]) -> bool {
        if !self.holds_all(cards) {
            return false;
        }
        for card in cards {
            if let Some(at) = self.hand.iter().position(|held| held == card) {
                self.hand.remove(at);
            }
        }
        true
    }

    /// The landlord's bottom pickup: merge and re-sort.
    pub fn take_bottom(&mut self, bottom: &[Card]) {
        self.hand.extend_from_slice(bottom);
        self.hand = sorted_by_rank(&self.hand);
    }

    pub fn reset(&mut self) {
        self.hand.clear();
        self.is_landlord = false;
        self.bid = None;
    }
}
