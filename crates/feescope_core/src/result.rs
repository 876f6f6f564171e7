/// A validated simulation payload: one x axis and the two balance
/// trajectories, all the same length, years non-decreasing.
///
/// Only the validator constructs this, and nothing mutates it afterwards;
/// the current request state owns the one live instance.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationResult {
    pub years: Vec<f64>,
    pub fee_a: Vec<f64>,
    pub fee_b: Vec<f64>,
}
