//! One explorer session: parameters, request lifecycle, interaction state.
//!
//! Each mounted view owns its own `Session`; nothing here is shared across
//! sessions. The frontend drives it with two calls: `submit` on any committed
//! parameter change (and once at startup), `complete` for every worker
//! response.

use crate::error::TransportError;
use crate::interaction::InteractionState;
use crate::lifecycle::{RequestLifecycle, RequestState, Ticket};
use crate::params::SimulationParameters;
use crate::query::SimulationQuery;
use crate::series::{SeriesDescriptor, derive_series};

#[derive(Debug, Default)]
pub struct Session {
    pub params: SimulationParameters,
    pub request: RequestLifecycle,
    pub interaction: InteractionState,
}

impl Session {
    /// Build the query for the current parameters and issue it. Leaving a
    /// Ready state invalidates any hovered/selected point, so interaction
    /// state is cleared before the transition.
    pub fn submit(&mut self) -> (Ticket, SimulationQuery) {
        if self.request.state().is_ready() {
            self.interaction.clear();
        }
        let query = SimulationQuery::from_params(&self.params);
        (self.request.begin(), query)
    }

    /// Feed one completed fetch back in. Returns whether the outcome was
    /// applied (stale tickets are dropped silently).
    pub fn complete(
        &mut self,
        ticket: Ticket,
        outcome: Result<serde_json::Value, TransportError>,
    ) -> bool {
        let applied = self.request.resolve(ticket, outcome);
        if applied && !self.request.state().is_ready() {
            self.interaction.clear();
        }
        applied
    }

    pub fn state(&self) -> &RequestState {
        self.request.state()
    }

    /// The two chart series for the currently displayed result, if any.
    pub fn series(&self) -> Option<[SeriesDescriptor; 2]> {
        self.request.result().map(|result| {
            derive_series(
                result,
                self.params.fee_rate_a_pct,
                self.params.fee_rate_b_pct,
            )
        })
    }
}
