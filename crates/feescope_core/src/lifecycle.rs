//! The request lifecycle: one logical "current simulation request".
//!
//! Each issued request carries a [`Ticket`] from a monotonically advancing
//! generation counter. Beginning a new request supersedes everything before
//! it; a superseded request's outcome is discarded at resolution time, no
//! matter when or in what order it arrives. A discarded outcome is not a
//! failure and never reaches the UI.

use crate::error::{FetchError, TransportError};
use crate::result::SimulationResult;
use crate::validate::validate;

/// Identity of one issued request. Only the latest ticket's outcome is ever
/// applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// The one current request state.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RequestState {
    #[default]
    Idle,
    Loading,
    Ready(SimulationResult),
    Failed(FetchError),
}

impl RequestState {
    pub fn is_ready(&self) -> bool {
        matches!(self, RequestState::Ready(_))
    }
}

#[derive(Debug, Default)]
pub struct RequestLifecycle {
    generation: u64,
    state: RequestState,
}

impl RequestLifecycle {
    pub fn state(&self) -> &RequestState {
        &self.state
    }

    /// Issue a new request: advance the generation and move to Loading. Any
    /// in-flight request is superseded by this call; its eventual outcome
    /// will fail the ticket check in [`Self::resolve`].
    pub fn begin(&mut self) -> Ticket {
        self.generation += 1;
        self.state = RequestState::Loading;
        Ticket(self.generation)
    }

    /// Apply a completed request's outcome. Returns `false` (and changes
    /// nothing) when the ticket is stale. A successful transport outcome is
    /// validated here; a structurally invalid payload fails the request.
    pub fn resolve(
        &mut self,
        ticket: Ticket,
        outcome: Result<serde_json::Value, TransportError>,
    ) -> bool {
        if ticket.0 != self.generation || self.state != RequestState::Loading {
            return false;
        }
        self.state = match outcome {
            Ok(raw) => match validate(raw) {
                Ok(result) => RequestState::Ready(result),
                Err(reason) => RequestState::Failed(reason),
            },
            Err(_) => RequestState::Failed(FetchError::Unreachable),
        };
        true
    }

    /// The validated result, when the current request is Ready.
    pub fn result(&self) -> Option<&SimulationResult> {
        match &self.state {
            RequestState::Ready(result) => Some(result),
            _ => None,
        }
    }
}
