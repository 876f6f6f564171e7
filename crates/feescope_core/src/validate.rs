//! Structural validation of the remote payload.
//!
//! The raw shape is deserialized permissively (every field optional) and then
//! checked. A payload failing any check is rejected whole; the validator
//! never truncates or zero-fills.

use serde::Deserialize;

use crate::error::FetchError;
use crate::result::SimulationResult;

#[derive(Debug, Deserialize)]
struct RawPayload {
    years: Option<Vec<f64>>,
    series: Option<RawSeries>,
}

#[derive(Debug, Deserialize)]
struct RawSeries {
    fee_a: Option<Vec<f64>>,
    fee_b: Option<Vec<f64>>,
}

/// Check, in order: `years` present, `series.fee_a` present, `series.fee_b`
/// present, all lengths equal, `years` non-decreasing. Any failure is
/// [`FetchError::InvalidData`].
pub fn validate(raw: serde_json::Value) -> Result<SimulationResult, FetchError> {
    let payload: RawPayload =
        serde_json::from_value(raw).map_err(|_| FetchError::InvalidData)?;

    let years = payload.years.ok_or(FetchError::InvalidData)?;
    let series = payload.series.ok_or(FetchError::InvalidData)?;
    let fee_a = series.fee_a.ok_or(FetchError::InvalidData)?;
    let fee_b = series.fee_b.ok_or(FetchError::InvalidData)?;

    if years.len() != fee_a.len() || years.len() != fee_b.len() {
        return Err(FetchError::InvalidData);
    }
    if years.windows(2).any(|pair| pair[1] < pair[0]) {
        return Err(FetchError::InvalidData);
    }

    Ok(SimulationResult { years, fee_a, fee_b })
}
