//! Query-and-visualization orchestration for the fee impact explorer.
//!
//! This crate is the pure half of the client. It owns:
//! - the validated parameter store and the derived remote query
//! - the request lifecycle (generation tickets, stale-outcome discard)
//! - structural validation of the remote payload
//! - derivation of renderer-agnostic chart series
//! - hover/selection state fed by chart point events
//!
//! Nothing here performs I/O; the terminal frontend and the HTTP worker live
//! in the `feescope` crate.

pub mod error;
pub mod format;
pub mod interaction;
pub mod lifecycle;
pub mod params;
pub mod query;
pub mod result;
pub mod series;
pub mod session;
pub mod validate;

#[cfg(test)]
mod tests;

pub use error::{FetchError, TransportError};
pub use format::CurrencyFormatter;
pub use interaction::{InteractionState, PointEventKind};
pub use lifecycle::{RequestLifecycle, RequestState, Ticket};
pub use params::SimulationParameters;
pub use query::SimulationQuery;
pub use result::SimulationResult;
pub use series::{SeriesDescriptor, SeriesRole, derive_series};
pub use session::Session;
pub use validate::validate;
