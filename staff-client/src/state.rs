//! Per-workflow view-state.
//!
//! Each workflow owns one [`Slot`] holding exactly one [`ViewState`]. Starting
//! an action clears the slot and hands out a [`Ticket`]; the response is
//! applied with that ticket once it arrives.

use tracing::debug;

/// What a workflow currently shows
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState<T> {
    /// Nothing requested yet, or cleared by a new action
    Idle,
    /// Payload to display, message cleared
    Success(T),
    /// Well-formed reply with nothing to show
    Empty(String),
    /// Message to display, payload cleared
    Error(String),
}

impl<T> Default for ViewState<T> {
    fn default() -> Self {
        ViewState::Idle
    }
}

impl<T> ViewState<T> {
    pub fn payload(&self) -> Option<&T> {
        match self {
            ViewState::Success(payload) => Some(payload),
            _ => None,
        }
    }

    /// Message of an `Empty` or `Error` state
    pub fn message(&self) -> Option<&str> {
        match self {
            ViewState::Empty(message) | ViewState::Error(message) => Some(message),
            _ => None,
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, ViewState::Idle)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ViewState::Success(_))
    }

    pub fn is_error(&self) -> bool {
        matches!(self, ViewState::Error(_))
    }
}

/// Which response wins when two requests of one workflow overlap
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ArrivalPolicy {
    /// Whatever completes last is shown
    #[default]
    LastArrival,
    /// Only the most recently issued request may update the view
    LatestIssued,
}

/// Sequence number of an issued action
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

/// Holder of one workflow's view-state
#[derive(Debug)]
pub struct Slot<T> {
    state: ViewState<T>,
    issued: u64,
    policy: ArrivalPolicy,
}

impl<T> Slot<T> {
    pub fn new(policy: ArrivalPolicy) -> Self {
        Self {
            state: ViewState::Idle,
            issued: 0,
            policy,
        }
    }

    pub fn state(&self) -> &ViewState<T> {
        &self.state
    }

    /// Clears the prior result and issues the next ticket
    pub fn begin(&mut self) -> Ticket {
        self.issued += 1;
        self.state = ViewState::Idle;
        Ticket(self.issued)
    }

    /// Applies `next` for `ticket`; returns false if the policy discarded it
    pub fn settle(&mut self, ticket: Ticket, next: ViewState<T>) -> bool {
        if self.policy == ArrivalPolicy::LatestIssued && ticket.0 != self.issued {
            debug!(ticket = ticket.0, latest = self.issued, "discarding stale response");
            return false;
        }
        self.state = next;
        true
    }
}

impl<T> Default for Slot<T> {
    fn default() -> Self {
        Self::new(ArrivalPolicy::default())
    }
}
