use crate::{
    classify, compare, Card, CompareError, Deck, Event, EventBus, HandKind, Phase, Player,
    QueueError, RngState, Seat, StateMachine, TurnQueue,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RoundError {
    #[error("intent not accepted in phase {0:?}")]
    InvalidPhase(Phase),
    #[error("seat {0:?} is not at bat")]
    OutOfTurn(Seat),
    #[error("selection is not a playable hand")]
    InvalidSelection,
    #[error("seat {0:?} does not hold all selected cards")]
    CardsNotHeld(Seat),
    #[error("hand does not beat the table")]
    DoesNotBeat,
    #[error("trick leader must play a hand, not pass")]
    MustLead,
    #[error(transparent)]
    Queue(#[from] QueueError),
    #[error("comparison failed: {0}")]
    Compare(#[from] CompareError),
}

/// Phase-specific progress flag gating the deal pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundStatus {
    Idle,
    Inited,
    Dealt,
}

/// Everything the state machine guards against and the handlers mutate.
/// Owned exclusively by `Round`; intents and guards are the only ways
/// in.
#[derive(Debug)]
pub struct GameContext {
    pub players: Vec<Player>,
    pub queue: TurnQueue,
    pub rng: RngState,
    pub status: RoundStatus,
    pub bid_count: u8,
    pub landlord: Option<Seat>,
    /// The hand currently on the table; empty when a fresh trick opens.
    pub table: Vec<Card>,
    pub last_to_act: Option<Seat>,
    pub active: Option<Seat>,
    pub bottom: Vec<Card>,
    pub winner: Option<Seat>,
    turn_resolved: bool,
    bottom_granted: bool,
    pending_events: Vec<Event>,
}

impl GameContext {
    fn new(seed: u64) -> Self {
        Self {
            players: Vec::new(),
            queue: TurnQueue::new(Seat::ALL),
            rng: RngState::from_seed(seed),
            status: RoundStatus::Idle,
            bid_count: 0,
            landlord: None,
            table: Vec::new(),
            last_to_act: None,
            active: None,
            bottom: Vec::new(),
            winner: None,
            turn_resolved: false,
            bottom_granted: false,
            pending_events: Vec::new(),
        }
    }

    pub fn player(&self, seat: Seat) -> &Player {
        &self.players[seat.ordinal()]
    }

    fn player_mut(&mut self, seat: Seat) -> &mut Player {
        &mut self.players[seat.ordinal()]
    }

    pub fn remaining_counts(&self) -> [usize; 3] {
        let mut counts = [0; 3];
        for player in &self.players {
            counts[player.seat.ordinal()] = player.card_count();
        }
        counts
    }

    /// Once a winner exists this is the round's scoring fact: the
    /// landlord wins alone, or the two farmers win jointly.
    pub fn landlord_won(&self) -> Option<bool> {
        let winner = self.winner?;
        Some(self.landlord == Some(winner))
    }

    fn emit(&mut self, event: Event) {
        self.pending_events.push(event);
    }

    fn handle_init(&mut self) {
        if !self.players.is_empty() {
            return;
        }
        for seat in Seat::ALL {
            let name = format!("player{}", seat.ordinal() + 1);
            self.players.push(Player::new(seat, name));
        }
        self.status = RoundStatus::Inited;
    }

    fn handle_shuffle_and_deal(&mut self) {
        let mut deck = Deck::standard54();
        deck.shuffle(&mut self.rng);
        // A standard54 deck always deals; a failure here would be a
        // construction bug, not a runtime condition.
        let Ok(dealt) = deck.deal() else {
            return;
        };
        let [left, bottom_seat, right] = dealt.hands;
        self.player_mut(Seat::Left).set_hand(left);
        self.player_mut(Seat::Bottom).set_hand(bottom_seat);
        self.player_mut(Seat::Right).set_hand(right);
        self.bottom = dealt.bottom;
        self.status = RoundStatus::Dealt;
        self.emit(Event::Dealt {
            counts: self.remaining_counts(),
            bottom: self.bottom.len(),
        });
    }

    fn handle_bidding(&mut self) {
        if let Ok(seat) = self.queue.next() {
            self.active = Some(seat);
        }
    }

    fn handle_retry_bidding(&mut self) {
        self.bid_count = 0;
        self.landlord = None;
        for player in &mut self.players {
            player.reset();
        }
        self.queue.reset_all();
        self.queue.start_from(Seat::Left);
        self.status = RoundStatus::Inited;
        self.emit(Event::BiddingRestarted);
    }

    fn handle_playing(&mut self) {
        if self.winner.is_some() {
            return;
        }
        if !self.bottom_granted {
            self.grant_bottom();
            return;
        }
        if self.turn_resolved {
            self.turn_resolved = false;
            self.rotate_turn();
        }
    }

    fn handle_settlement(&mut self) {
        let (Some(winner), Some(landlord_won)) = (self.winner, self.landlord_won()) else {
            return;
        };
        self.emit(Event::RoundOver {
            winner,
            landlord_won,
        });
    }

    fn grant_bottom(&mut self) {
        let Some(landlord) = self.landlord else {
            return;
        };
        let bottom = std::mem::take(&mut self.bottom);
        self.emit(Event::BottomTaken {
            seat: landlord,
            cards: bottom.clone(),
        });
        self.player_mut(landlord).take_bottom(&bottom);
        self.queue.reset_all();
        self.queue.start_from(landlord);
        // Consume the landlord's slot so rotation continues past it.
        if let Ok(seat) = self.queue.next() {
            self.active = Some(seat);
        }
        self.table.clear();
        self.last_to_act = None;
        self.turn_resolved = false;
        self.bottom_granted = true;
    }

    fn rotate_turn(&mut self) {
        let Ok(seat) = self.queue.next() else {
            return;
        };
        // The lead came back around: everyone else passed, so the trick
        // closes and the last actor opens a fresh one.
        if self.last_to_act == Some(seat) {
            self.table.clear();
            self.last_to_act = None;
            self.queue.reset_all();
            self.emit(Event::TrickCleared { leader: seat });
        }
        self.active = Some(seat);
    }
}

/// Read-only view of the table for the driving shell.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContextSnapshot {
    pub phase: Phase,
    pub landlord: Option<Seat>,
    pub active: Option<Seat>,
    pub table: Vec<Card>,
    pub table_kind: HandKind,
    pub remaining_counts: [usize; 3],
    pub winner: Option<Seat>,
    pub landlord_won: Option<bool>,
}

/// One full hand of the game, from bootstrap to settlement. The caller
/// constructs it explicitly (no process-wide instance), submits intents
/// for the seat at bat, and calls `advance` until no transition fires.
#[derive(Debug)]
pub struct Round {
    machine: StateMachine<GameContext>,
    ctx: GameContext,
}

impl Round {
    pub fn new(seed: u64) -> Self {
        let mut ctx = GameContext::new(seed);
        let mut machine = StateMachine::new(Phase::Init);

        machine.add_state_immediate(Phase::Init, GameContext::handle_init, &mut ctx);
        machine.add_state(Phase::ShuffleAndDeal, GameContext::handle_shuffle_and_deal);
        machine.add_state(Phase::Bidding, GameContext::handle_bidding);
        machine.add_state(Phase::RetryBidding, GameContext::handle_retry_bidding);
        machine.add_state(Phase::Playing, GameContext::handle_playing);
        machine.add_state(Phase::Settlement, GameContext::handle_settlement);

        machine.add_transition(Phase::Init, Phase::ShuffleAndDeal, |ctx: &GameContext| {
            ctx.status == RoundStatus::Inited
        });
        machine.add_transition(Phase::ShuffleAndDeal, Phase::Bidding, |ctx: &GameContext| {
            ctx.status == RoundStatus::Dealt
        });
        machine.add_transition(Phase::Bidding, Phase::Playing, |ctx: &GameContext| {
            ctx.bid_count as usize == ctx.players.len() && ctx.landlord.is_some()
        });
        machine.add_transition(Phase::Bidding, Phase::RetryBidding, |ctx: &GameContext| {
            ctx.bid_count as usize == ctx.players.len() && ctx.landlord.is_none()
        });
        machine.add_transition(
            Phase::RetryBidding,
            Phase::ShuffleAndDeal,
            |ctx: &GameContext| ctx.status == RoundStatus::Inited,
        );
        machine.add_transition(Phase::Playing, Phase::Settlement, |ctx: &GameContext| {
            ctx.winner.is_some()
        });
        machine.add_transition(Phase::Playing, Phase::PlayerTurn, |ctx: &GameContext| {
            ctx.winner.is_none() && ctx.active.is_some()
        });
        machine.add_transition(Phase::PlayerTurn, Phase::Playing, |ctx: &GameContext| {
            ctx.turn_resolved || ctx.winner.is_some()
        });
        machine.add_transition(Phase::Settlement, Phase::ShowWinner, |_: &GameContext| true);
        machine.add_transition(Phase::ShowWinner, Phase::End, |_: &GameContext| true);

        Self { machine, ctx }
    }

    pub fn phase(&self) -> Phase {
        self.machine.current()
    }

    pub fn context(&self) -> &GameContext {
        &self.ctx
    }

    /// Drives one guard re-evaluation step, flushing engine events into
    /// the caller's bus. Returns the transition that fired, if any.
    pub fn advance(&mut self, events: &mut EventBus) -> Option<(Phase, Phase)> {
        let fired = self.machine.update(&mut self.ctx);
        if let Some((from, to)) = fired {
            self.ctx.emit(Event::PhaseChanged { from, to });
        }
        self.flush(events);
        fired
    }

    /// Convenience driver: advances until the machine settles.
    pub fn advance_until_stable(&mut self, events: &mut EventBus) {
        while self.advance(events).is_some() {}
    }

    pub fn submit_bid(
        &mut self,
        seat: Seat,
        call: bool,
        events: &mut EventBus,
    ) -> Result<(), RoundError> {
        let result = self.submit_bid_inner(seat, call);
        self.flush(events);
        result
    }

    fn submit_bid_inner(&mut self, seat: Seat, call: bool) -> Result<(), RoundError> {
        if self.phase() != Phase::Bidding {
            return Err(RoundError::InvalidPhase(self.phase()));
        }
        if self.ctx.active != Some(seat) {
            return Err(RoundError::OutOfTurn(seat));
        }
        self.ctx.player_mut(seat).bid = Some(call);
        self.ctx.bid_count += 1;
        self.ctx.emit(Event::BidPlaced { seat, called: call });
        if call {
            // A later caller overtakes a provisional landlord.
            if let Some(previous) = self.ctx.landlord {
                self.ctx.player_mut(previous).is_landlord = false;
            }
            self.ctx.landlord = Some(seat);
            self.ctx.player_mut(seat).is_landlord = true;
            self.ctx.emit(Event::LandlordAssigned { seat });
        }
        if (self.ctx.bid_count as usize) < self.ctx.players.len() {
            let next = self.ctx.queue.next()?;
            self.ctx.active = Some(next);
        } else {
            self.ctx.active = None;
        }
        Ok(())
    }

    pub fn submit_play(
        &mut self,
        seat: Seat,
        cards: &[Card],
        events: &mut EventBus,
    ) -> Result<HandKind, RoundError> {
        let result = self.submit_play_inner(seat, cards);
        self.flush(events);
        result
    }

    fn submit_play_inner(&mut self, seat: Seat, cards: &[Card]) -> Result<HandKind, RoundError> {
        if self.phase() != Phase::PlayerTurn {
            return Err(RoundError::InvalidPhase(self.phase()));
        }
        if self.ctx.active != Some(seat) {
            return Err(RoundError::OutOfTurn(seat));
        }
        let kind = classify(cards);
        if !kind.is_playable() {
            return Err(RoundError::InvalidSelection);
        }
        if !self.ctx.player(seat).holds_all(cards) {
            return Err(RoundError::CardsNotHeld(seat));
        }
        if !self.ctx.table.is_empty() {
            let table = self.ctx.table.clone();
            if !compare(cards, &table)?.beats() {
                return Err(RoundError::DoesNotBeat);
            }
        }
        self.ctx.player_mut(seat).remove_cards(cards);
        self.ctx.table = cards.to_vec();
        self.ctx.last_to_act = Some(seat);
        self.ctx.turn_resolved = true;
        let remaining = self.ctx.player(seat).card_count();
        self.ctx.emit(Event::CardsPlayed {
            seat,
            kind,
            count: cards.len(),
            remaining,
        });
        if remaining == 0 {
            self.ctx.winner = Some(seat);
        }
        Ok(kind)
    }

    pub fn submit_pass(&mut self, seat: Seat, events: &mut EventBus) -> Result<(), RoundError> {
        let result = self.submit_pass_inner(seat);
        self.flush(events);
        result
    }

    fn submit_pass_inner(&mut self, seat: Seat) -> Result<(), RoundError> {
        if self.phase() != Phase::PlayerTurn {
            return Err(RoundError::InvalidPhase(self.phase()));
        }
        if self.ctx.active != Some(seat) {
            return Err(RoundError::OutOfTurn(seat));
        }
        if self.ctx.table.is_empty() {
            return Err(RoundError::MustLead);
        }
        self.ctx.queue.mark_skipped(seat);
        self.ctx.turn_resolved = true;
        self.ctx.emit(Event::TurnPassed { seat });
        Ok(())
    }

    pub fn snapshot(&self) -> ContextSnapshot {
        ContextSnapshot {
            phase: self.phase(),
            landlord: self.ctx.landlord,
            active: self.ctx.active,
            table: self.ctx.table.clone(),
            table_kind: classify(&self.ctx.table),
            remaining_counts: self.ctx.remaining_counts(),
            winner: self.ctx.winner,
            landlord_won: self.ctx.landlord_won(),
        }
    }

    fn flush(&mut self, events: &mut EventBus) {
        for event in self.ctx.pending_events.drain(..) {
            events.push(event);
        }
    }
}
