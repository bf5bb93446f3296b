use crate::{Card, HandKind, Phase, Seat};
use serde::{Deserialize, Serialize};

/// The engine's structured record. Every externally observable decision
/// lands here for the driving shell to drain.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Event {
    PhaseChanged {
        from: Phase,
        to: Phase,
    },
    Dealt {
        counts: [usize; 3],
        bottom: usize,
    },
    BidPlaced {
        seat: Seat,
        called: bool,
    },
    LandlordAssigned {
        seat: Seat,
    },
    BiddingRestarted,
    BottomTaken {
        seat: Seat,
        cards: Vec<Card>,
    },
    CardsPlayed {
        seat: Seat,
        kind: HandKind,
        count: usize,
        remaining: usize,
    },
    TurnPassed {
        seat: Seat,
    },
    TrickCleared {
        leader: Seat,
    },
    RoundOver {
        winner: Seat,
        landlord_won: bool,
    },
}

#[derive(Debug, Default)]
pub struct EventBus {
    queue: Vec<Event>,
}

impl EventBus {
    pub fn push(&mut self, event: Event) {
        self.queue.push(event);
    }

    pub fn drain(&mut self) -> impl Iterator<Item = Event> + '_ {
        self.queue.drain(..)
    }
}
