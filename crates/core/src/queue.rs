use crate::Seat;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SeatStatus {
    Active,
    /// Out for the remainder of the current sub-round.
    Skipped,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueueError {
    #[error("every seat in the rotation is skipped")]
    Exhausted,
}

/// Fixed-order rotation over the three seats with a per-seat
/// active/skipped status that resets between sub-rounds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TurnQueue {
    order: Vec<Seat>,
    status: Vec<SeatStatus>,
    cursor: usize,
}

impl TurnQueue {
    pub fn new(order: impl Into<Vec<Seat>>) -> Self {
        let order = order.into();
        let status = vec![SeatStatus::Active; order.len()];
        Self {
            order,
            status,
            cursor: 0,
        }
    }

    /// Returns the seat at bat and moves the cursor past it, skipping
    /// any seat marked `Skipped`.
    pub fn next(&mut self) -> Result<Seat, QueueError> {
        for _ in 0..self.order.len() {
            let at = self.cursor;
            self.cursor = (self.cursor + 1) % self.order.len();
            if self.status[at] == SeatStatus::Active {
                return Ok(self.order[at]);
            }
        }
        Err(QueueError::Exhausted)
    }

    /// The seat the next `next()` call will consider first.
    pub fn current(&self) -> Seat {
        self.order[self.cursor]
    }

    pub fn mark_skipped(&mut self, seat: Seat) {
        if let Some(at) = self.order.iter().position(|&s| s == seat) {
            self.status[at] = SeatStatus::Skipped;
        }
    }

    /// New sub-round: everyone back in.
    pub fn reset_all(&mut self) {
        for status in &mut self.status {
            *status = SeatStatus::Active;
        }
    }

    /// Points the rotation at `seat` (the landlord leads the first
    /// trick) and reactivates it.
    pub fn start_from(&mut self, seat: Seat) {
        if let Some(at) = self.order.iter().position(|&s| s == seat) {
            self.cursor = at;
            self.status[at] = SeatStatus::Active;
        }
    }

    pub fn is_exhausted(&self) -> bool {
        self.status.iter().all(|&s| s == SeatStatus::Skipped)
    }
}
