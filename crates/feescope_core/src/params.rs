//! The parameter store: the five simulation inputs and their last valid
//! values.
//!
//! Invalid user input is absorbed here. A setter given a non-finite candidate
//! keeps the prior value, so NaN never enters the store and the request path
//! never sees an `InvalidInput` condition.

/// UI bounds for the time horizon slider.
pub const YEARS_MIN: f64 = 5.0;
pub const YEARS_MAX: f64 = 60.0;
/// Step applied when the horizon is nudged from the UI.
pub const YEARS_STEP: f64 = 5.0;

/// The five live simulation inputs. All fields are finite and non-negative
/// at all times.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationParameters {
    pub initial_investment: f64,
    pub annual_growth_rate_pct: f64,
    pub fee_rate_a_pct: f64,
    pub fee_rate_b_pct: f64,
    pub years: f64,
}

impl Default for SimulationParameters {
    fn default() -> Self {
        Self {
            initial_investment: 1000.0,
            annual_growth_rate_pct: 7.0,
            fee_rate_a_pct: 0.0,
            fee_rate_b_pct: 2.0,
            years: 30.0,
        }
    }
}

impl SimulationParameters {
    /// Accept a candidate value for a non-negative field, falling back to the
    /// current value when the candidate is not finite. Returns whether the
    /// stored value changed.
    fn accept(slot: &mut f64, candidate: f64) -> bool {
        if !candidate.is_finite() {
            return false;
        }
        let value = candidate.max(0.0);
        if value == *slot {
            return false;
        }
        *slot = value;
        true
    }

    pub fn set_initial_investment(&mut self, candidate: f64) -> bool {
        Self::accept(&mut self.initial_investment, candidate)
    }

    pub fn set_annual_growth_rate_pct(&mut self, candidate: f64) -> bool {
        Self::accept(&mut self.annual_growth_rate_pct, candidate)
    }

    pub fn set_fee_rate_a_pct(&mut self, candidate: f64) -> bool {
        Self::accept(&mut self.fee_rate_a_pct, candidate)
    }

    pub fn set_fee_rate_b_pct(&mut self, candidate: f64) -> bool {
        Self::accept(&mut self.fee_rate_b_pct, candidate)
    }

    /// The horizon is additionally clamped to the UI range.
    pub fn set_years(&mut self, candidate: f64) -> bool {
        if !candidate.is_finite() {
            return false;
        }
        let value = candidate.clamp(YEARS_MIN, YEARS_MAX);
        if value == self.years {
            return false;
        }
        self.years = value;
        true
    }

    /// Nudge the horizon by one UI step in either direction.
    pub fn step_years(&mut self, direction: i8) -> bool {
        self.set_years(self.years + f64::from(direction) * YEARS_STEP)
    }
}
