use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Every phase of a round's lifetime. Settlement onward is wired but
/// the protocol currently ends at `End`; `NewRound` is reserved for a
/// multi-round session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    Init,
    ShuffleAndDeal,
    Bidding,
    RetryBidding,
    Playing,
    PlayerTurn,
    Settlement,
    ShowWinner,
    NewRound,
    End,
}

type Handler<C> = Box<dyn FnMut(&mut C)>;
type Guard<C> = Box<dyn Fn(&C) -> bool>;

struct Transition<C> {
    to: Phase,
    guard: Guard<C>,
}

/// Externally driven finite-state machine over a mutable context `C`.
/// Transitions out of the current phase are evaluated in declaration
/// order on every `update`; the first guard that holds wins, and the
/// target phase's handler runs once. Handlers mutate the context only;
/// they never force a transition themselves.
pub struct StateMachine<C> {
    current: Phase,
    pending: Option<Phase>,
    handlers: HashMap<Phase, Handler<C>>,
    transitions: HashMap<Phase, Vec<Transition<C>>>,
}

impl<C> StateMachine<C> {
    pub fn new(initial: Phase) -> Self {
        Self {
            current: initial,
            pending: None,
            handlers: HashMap::new(),
            transitions: HashMap::new(),
        }
    }

    pub fn add_state(&mut self, phase: Phase, handler: impl FnMut(&mut C) + 'static) {
        self.handlers.insert(phase, Box::new(handler));
    }

    /// Registers a handler and, when `phase` is already current, runs it
    /// synchronously. Covers the Init bootstrap.
    pub fn add_state_immediate(
        &mut self,
        phase: Phase,
        handler: impl FnMut(&mut C) + 'static,
        ctx: &mut C,
    ) {
        self.handlers.insert(phase, Box::new(handler));
        if phase == self.current {
            if let Some(handler) = self.handlers.get_mut(&phase) {
                handler(ctx);
            }
        }
    }

    pub fn add_transition(&mut self, from: Phase, to: Phase, guard: impl Fn(&C) -> bool + 'static) {
        self.transitions.entry(from).or_default().push(Transition {
            to,
            guard: Box::new(guard),
        });
    }

    /// One external drive step. Returns the transition that fired, if
    /// any.
    pub fn update(&mut self, ctx: &mut C) -> Option<(Phase, Phase)> {
        if let Some(candidates) = self.transitions.get(&self.current) {
            for transition in candidates {
                if (transition.guard)(ctx) {
                    self.pending = Some(transition.to);
                    break;
                }
            }
        }
        let next = self.pending.take()?;
        let fired = (self.current, next);
        if let Some(handler) = self.handlers.get_mut(&next) {
            handler(ctx);
        }
        self.current = next;
        Some(fired)
    }

    pub fn current(&self) -> Phase {
        self.current
    }
}

impl<C> fmt::Debug for StateMachine<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateMachine")
            .field("current", &self.current)
            .field("pending", &self.pending)
            .field("states", &self.handlers.len())
            .finish()
    }
}
