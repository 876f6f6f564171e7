//! The query builder: live parameters to a normalized request descriptor.

use crate::params::SimulationParameters;

/// Normalized request descriptor for the remote simulator. Rates are
/// fractions, the horizon is an integer year count of at least one.
///
/// Building twice from equal parameters yields identical queries; anything
/// layered on top (deduplication, caching) may rely on that.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationQuery {
    pub initial: f64,
    pub growth_rate: f64,
    pub fee_a: f64,
    pub fee_b: f64,
    pub years: u32,
}

impl SimulationQuery {
    pub fn from_params(params: &SimulationParameters) -> Self {
        Self {
            initial: params.initial_investment,
            growth_rate: params.annual_growth_rate_pct / 100.0,
            fee_a: params.fee_rate_a_pct / 100.0,
            fee_b: params.fee_rate_b_pct / 100.0,
            years: params.years.round().max(1.0) as u32,
        }
    }

    /// Serialize to a query string with a fixed key order, so equal queries
    /// are byte-identical on the wire.
    pub fn query_string(&self) -> String {
        format!(
            "initial={}&growth_rate={}&fee_a={}&fee_b={}&years={}",
            self.initial, self.growth_rate, self.fee_a, self.fee_b, self.years
        )
    }
}
