//! Failure taxonomy for the request path.
//!
//! A superseded request is not an error and has no variant here: the
//! lifecycle discards its outcome before classification happens.

use thiserror::Error;

/// User-visible request failures. Either kind clears the displayed chart;
/// the next parameter change is the only retry trigger.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Network, connection, or non-2xx HTTP failure.
    #[error("Unable to reach the investment simulator API.")]
    Unreachable,
    /// The payload arrived but failed structural validation.
    #[error("Unable to load simulation data.")]
    InvalidData,
}

/// Transport-level failure detail produced by the fetch worker. The detail
/// string is logged by the caller and then folded into
/// [`FetchError::Unreachable`]; it is never shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("transport failure: {0}")]
pub struct TransportError(pub String);
